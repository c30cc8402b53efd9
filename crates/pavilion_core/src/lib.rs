//! Pavilion core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{
    AppState, CareersField, CareersFields, ContactField, ContactFields, FormKind, JobType,
    ListingState, ProjectRecord, RecordId, Route, SubmitOutcome, Theme, NAV_SCROLL_THRESHOLD,
};
pub use update::update;
pub use view_model::{
    AppViewModel, CareersFormView, ContactFormView, ListingView, ProjectCardView,
    ProjectDetailView,
};
