use crate::{AppState, Effect, FormKind, Msg, Route};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::RouteChanged(route) => {
            let entering_listing = route == Route::Projects && state.route() != Route::Projects;
            state.set_route(route);
            if entering_listing {
                // Entering the listing page triggers its one fetch.
                state.begin_loading();
                vec![Effect::LoadProjects]
            } else {
                Vec::new()
            }
        }
        Msg::ReloadRequested => {
            // Only one fetch per page instance: a listing that is already
            // waiting ignores further reload requests.
            if state.route() == Route::Projects && !state.listing_is_loading() {
                state.begin_loading();
                vec![Effect::LoadProjects]
            } else {
                Vec::new()
            }
        }
        Msg::ProjectsLoaded { result } => {
            // A completion that arrives after the listing page was left (or
            // after a newer load superseded it) updates nothing.
            if state.listing_is_loading() {
                match result {
                    Ok(records) => state.apply_records(records),
                    Err(message) => state.apply_listing_error(message),
                }
            }
            Vec::new()
        }
        Msg::ProjectSelected { id } => {
            state.select_record(id);
            Vec::new()
        }
        Msg::SelectionCleared => {
            state.clear_selection();
            Vec::new()
        }
        Msg::ContactEdited { field, value } => {
            state.edit_contact(field, value);
            Vec::new()
        }
        Msg::CareersEdited { field, value } => {
            state.edit_careers(field, value);
            Vec::new()
        }
        Msg::CareersJobTypeChanged(job_type) => {
            state.set_job_type(job_type);
            Vec::new()
        }
        Msg::ContactSubmitted => {
            if state.begin_submit(FormKind::Contact) {
                vec![Effect::SubmitContact {
                    fields: state.contact_fields().clone(),
                }]
            } else {
                Vec::new()
            }
        }
        Msg::CareersSubmitted => {
            if state.begin_submit(FormKind::Careers) {
                vec![Effect::SubmitCareers {
                    fields: state.careers_fields().clone(),
                }]
            } else {
                Vec::new()
            }
        }
        Msg::SubmissionSettled { form, delivered } => {
            if state.settle_submission(form, delivered) && delivered {
                vec![Effect::StartAckTimer { form }]
            } else {
                Vec::new()
            }
        }
        Msg::AckElapsed { form } => {
            state.clear_acknowledgment(form);
            Vec::new()
        }
        Msg::ThemeChanged(theme) => {
            state.set_theme(theme);
            Vec::new()
        }
        Msg::ScrollChanged { offset } => {
            state.set_scroll_offset(offset);
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
