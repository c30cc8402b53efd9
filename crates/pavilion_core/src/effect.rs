#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch and parse the published spreadsheet export.
    LoadProjects,
    /// Post the contact form with a snapshot of its fields.
    SubmitContact { fields: crate::ContactFields },
    /// Post the careers application with a snapshot of its fields.
    SubmitCareers { fields: crate::CareersFields },
    /// Schedule the acknowledgment banner to clear itself.
    StartAckTimer { form: crate::FormKind },
}
