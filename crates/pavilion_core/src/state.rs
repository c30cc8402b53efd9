use std::collections::BTreeMap;

use crate::view_model::{
    AppViewModel, CareersFormView, ContactFormView, ListingView, ProjectCardView,
    ProjectDetailView,
};

pub type RecordId = u32;

/// Scroll offset (in pixels) past which the navigation chrome switches style.
pub const NAV_SCROLL_THRESHOLD: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    About,
    Services,
    Projects,
    Partners,
    Team,
    Careers,
    Blogs,
    Contact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// One parsed row of the published spreadsheet export.
///
/// The field set is whatever the header row declared; this system does not
/// control the schema, so the shape is an open map rather than a struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRecord {
    pub id: RecordId,
    pub fields: BTreeMap<String, String>,
}

impl ProjectRecord {
    pub fn new(id: RecordId, fields: BTreeMap<String, String>) -> Self {
        Self { id, fields }
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// A record counts as completed when its `status` field, trimmed and
    /// compared case-insensitively, reads "completed". Anything else,
    /// including a missing status, is ongoing.
    pub fn is_completed(&self) -> bool {
        self.field("status")
            .is_some_and(|status| status.trim().eq_ignore_ascii_case("completed"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ListingState {
    #[default]
    Idle,
    Loading,
    Error(String),
    Ready(Vec<ProjectRecord>),
}

/// Result of a form submission. Delivery is never confirmed by the forms
/// backend, so the best outcome we can state is "assumed delivered".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitOutcome {
    #[default]
    Pending,
    AssumedDelivered,
    TransportFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Contact,
    Careers,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Organization,
    Message,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub organization: String,
    pub message: String,
}

impl ContactFields {
    /// Required-field presence; organization is optional.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.message.trim().is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JobType {
    #[default]
    Internship,
    FullTime,
}

impl JobType {
    pub fn label(&self) -> &'static str {
        match self {
            JobType::Internship => "Internship",
            JobType::FullTime => "Full-time",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CareersField {
    Name,
    Email,
    Phone,
    Linkedin,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CareersFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub job_type: JobType,
    pub linkedin: String,
}

impl CareersFields {
    /// Required-field presence; the LinkedIn profile is optional.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.phone.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct ContactForm {
    fields: ContactFields,
    submitting: bool,
    outcome: SubmitOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct CareersForm {
    fields: CareersFields,
    submitting: bool,
    outcome: SubmitOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    route: Route,
    theme: Theme,
    nav_scrolled: bool,
    listing: ListingState,
    selected: Option<RecordId>,
    contact: ContactForm,
    careers: CareersForm,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn listing(&self) -> &ListingState {
        &self.listing
    }

    /// Returns whether a render is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        let was_dirty = self.dirty;
        self.dirty = false;
        was_dirty
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_route(&mut self, route: Route) {
        if self.route == route {
            return;
        }
        // Leaving a page drops its component state; the next visit mounts
        // fresh, exactly like the per-page state it models.
        match self.route {
            Route::Projects => {
                self.listing = ListingState::Idle;
                self.selected = None;
            }
            Route::Contact => self.contact = ContactForm::default(),
            Route::Careers => self.careers = CareersForm::default(),
            _ => {}
        }
        self.route = route;
        self.mark_dirty();
    }

    pub(crate) fn begin_loading(&mut self) {
        self.listing = ListingState::Loading;
        self.selected = None;
        self.mark_dirty();
    }

    pub(crate) fn listing_is_loading(&self) -> bool {
        self.listing == ListingState::Loading
    }

    pub(crate) fn apply_records(&mut self, records: Vec<ProjectRecord>) {
        self.listing = ListingState::Ready(records);
        self.mark_dirty();
    }

    pub(crate) fn apply_listing_error(&mut self, message: String) {
        self.listing = ListingState::Error(message);
        self.mark_dirty();
    }

    /// Fills the single selection slot, replacing any previous selection.
    /// Ids that do not resolve against the current records are ignored.
    pub(crate) fn select_record(&mut self, id: RecordId) {
        let ListingState::Ready(records) = &self.listing else {
            return;
        };
        if records.iter().any(|record| record.id == id) && self.selected != Some(id) {
            self.selected = Some(id);
            self.mark_dirty();
        }
    }

    pub(crate) fn clear_selection(&mut self) {
        if self.selected.take().is_some() {
            self.mark_dirty();
        }
    }

    pub(crate) fn set_theme(&mut self, theme: Theme) {
        if self.theme != theme {
            self.theme = theme;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_scroll_offset(&mut self, offset: u32) {
        let scrolled = offset > NAV_SCROLL_THRESHOLD;
        if self.nav_scrolled != scrolled {
            self.nav_scrolled = scrolled;
            self.mark_dirty();
        }
    }

    pub(crate) fn edit_contact(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::Name => &mut self.contact.fields.name,
            ContactField::Email => &mut self.contact.fields.email,
            ContactField::Organization => &mut self.contact.fields.organization,
            ContactField::Message => &mut self.contact.fields.message,
        };
        *slot = value;
        self.mark_dirty();
    }

    pub(crate) fn edit_careers(&mut self, field: CareersField, value: String) {
        let slot = match field {
            CareersField::Name => &mut self.careers.fields.name,
            CareersField::Email => &mut self.careers.fields.email,
            CareersField::Phone => &mut self.careers.fields.phone,
            CareersField::Linkedin => &mut self.careers.fields.linkedin,
        };
        *slot = value;
        self.mark_dirty();
    }

    pub(crate) fn set_job_type(&mut self, job_type: JobType) {
        if self.careers.fields.job_type != job_type {
            self.careers.fields.job_type = job_type;
            self.mark_dirty();
        }
    }

    pub(crate) fn contact_fields(&self) -> &ContactFields {
        &self.contact.fields
    }

    pub(crate) fn careers_fields(&self) -> &CareersFields {
        &self.careers.fields
    }

    /// Flips the submitting guard on. Returns false when a submission is
    /// already in flight, in which case the caller must not re-submit.
    pub(crate) fn begin_submit(&mut self, form: FormKind) -> bool {
        let (submitting, outcome) = self.form_slots(form);
        if *submitting {
            return false;
        }
        *submitting = true;
        *outcome = SubmitOutcome::Pending;
        self.mark_dirty();
        true
    }

    /// Clears the submitting guard whatever the outcome was. Returns false
    /// when no submission is in flight: the page was left mid-request and
    /// the late settlement lands on a defunct instance.
    pub(crate) fn settle_submission(&mut self, form: FormKind, delivered: bool) -> bool {
        {
            let (submitting, _) = self.form_slots(form);
            if !*submitting {
                return false;
            }
        }
        if delivered {
            match form {
                FormKind::Contact => self.contact.fields = ContactFields::default(),
                FormKind::Careers => self.careers.fields = CareersFields::default(),
            }
        }
        let (submitting, outcome) = self.form_slots(form);
        *submitting = false;
        *outcome = if delivered {
            SubmitOutcome::AssumedDelivered
        } else {
            SubmitOutcome::TransportFailed
        };
        self.mark_dirty();
        true
    }

    pub(crate) fn clear_acknowledgment(&mut self, form: FormKind) {
        let (_, outcome) = self.form_slots(form);
        if *outcome == SubmitOutcome::AssumedDelivered {
            *outcome = SubmitOutcome::Pending;
            self.mark_dirty();
        }
    }

    fn form_slots(&mut self, form: FormKind) -> (&mut bool, &mut SubmitOutcome) {
        match form {
            FormKind::Contact => (&mut self.contact.submitting, &mut self.contact.outcome),
            FormKind::Careers => (&mut self.careers.submitting, &mut self.careers.outcome),
        }
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            route: self.route,
            theme: self.theme,
            nav_scrolled: self.nav_scrolled,
            listing: self.listing_view(),
            contact: ContactFormView {
                fields: self.contact.fields.clone(),
                submitting: self.contact.submitting,
                outcome: self.contact.outcome,
                can_submit: !self.contact.submitting && self.contact.fields.is_complete(),
            },
            careers: CareersFormView {
                fields: self.careers.fields.clone(),
                submitting: self.careers.submitting,
                outcome: self.careers.outcome,
                can_submit: !self.careers.submitting && self.careers.fields.is_complete(),
            },
            dirty: self.dirty,
        }
    }

    // The completed/ongoing partition is a pure filter over the fetched
    // records, recomputed on every view; the source list only changes on a
    // fresh full fetch.
    fn listing_view(&self) -> ListingView {
        match &self.listing {
            ListingState::Idle => ListingView::Idle,
            ListingState::Loading => ListingView::Loading,
            ListingState::Error(message) => ListingView::Error {
                message: message.clone(),
            },
            ListingState::Ready(records) => {
                let (completed, ongoing): (Vec<_>, Vec<_>) =
                    records.iter().partition(|record| record.is_completed());
                let selected = self
                    .selected
                    .and_then(|id| records.iter().find(|record| record.id == id))
                    .map(detail_view);
                ListingView::Ready {
                    ongoing: ongoing.into_iter().map(card_view).collect(),
                    completed: completed.into_iter().map(card_view).collect(),
                    selected,
                }
            }
        }
    }
}

fn card_view(record: &ProjectRecord) -> ProjectCardView {
    ProjectCardView {
        id: record.id,
        title: record.field("title").unwrap_or_default().to_string(),
        category: record.field("category").unwrap_or_default().to_string(),
        description: record.field("description").unwrap_or_default().to_string(),
        status: record.field("status").unwrap_or_default().to_string(),
    }
}

fn detail_view(record: &ProjectRecord) -> ProjectDetailView {
    ProjectDetailView {
        id: record.id,
        title: record.field("title").unwrap_or_default().to_string(),
        fields: record
            .fields
            .iter()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect(),
    }
}
