#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User navigated to a different page.
    RouteChanged(crate::Route),
    /// User asked for a reload of the listing page (the error-state affordance).
    ReloadRequested,
    /// Engine finished fetching and parsing the spreadsheet export.
    ProjectsLoaded {
        result: Result<Vec<crate::ProjectRecord>, String>,
    },
    /// User opened the detail overlay for one record.
    ProjectSelected { id: crate::RecordId },
    /// User closed the detail overlay.
    SelectionCleared,
    /// User edited one contact-form input.
    ContactEdited {
        field: crate::ContactField,
        value: String,
    },
    /// User edited one careers-form input.
    CareersEdited {
        field: crate::CareersField,
        value: String,
    },
    /// User picked a job type in the careers form.
    CareersJobTypeChanged(crate::JobType),
    /// User pressed the contact submit button.
    ContactSubmitted,
    /// User pressed the careers submit button.
    CareersSubmitted,
    /// Engine settled a form submission; delivery is assumed on transport success.
    SubmissionSettled {
        form: crate::FormKind,
        delivered: bool,
    },
    /// The acknowledgment banner timer ran out.
    AckElapsed { form: crate::FormKind },
    /// External theme attribute changed (injected signal, not an ambient read).
    ThemeChanged(crate::Theme),
    /// External scroll position changed (injected signal, offset in pixels).
    ScrollChanged { offset: u32 },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
