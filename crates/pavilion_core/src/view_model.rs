use crate::{CareersFields, ContactFields, RecordId, Route, SubmitOutcome, Theme};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub route: Route,
    pub theme: Theme,
    pub nav_scrolled: bool,
    pub listing: ListingView,
    pub contact: ContactFormView,
    pub careers: CareersFormView,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingView {
    Idle,
    Loading,
    Error { message: String },
    Ready {
        ongoing: Vec<ProjectCardView>,
        completed: Vec<ProjectCardView>,
        selected: Option<ProjectDetailView>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCardView {
    pub id: RecordId,
    pub title: String,
    pub category: String,
    pub description: String,
    pub status: String,
}

/// The detail overlay shows every field the source row carried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDetailView {
    pub id: RecordId,
    pub title: String,
    pub fields: Vec<(String, String)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFormView {
    pub fields: ContactFields,
    pub submitting: bool,
    pub outcome: SubmitOutcome,
    pub can_submit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CareersFormView {
    pub fields: CareersFields,
    pub submitting: bool,
    pub outcome: SubmitOutcome,
    pub can_submit: bool,
}
