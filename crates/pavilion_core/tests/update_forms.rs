use std::sync::Once;

use pavilion_core::{
    update, AppState, CareersField, ContactField, ContactFields, Effect, FormKind, JobType, Msg,
    Route, SubmitOutcome,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(site_logging::initialize_for_tests);
}

fn edit_contact(state: AppState, field: ContactField, value: &str) -> AppState {
    let (state, effects) = update(
        state,
        Msg::ContactEdited {
            field,
            value: value.to_string(),
        },
    );
    assert!(effects.is_empty());
    state
}

fn filled_contact(state: AppState) -> AppState {
    let state = edit_contact(state, ContactField::Name, "Asha");
    let state = edit_contact(state, ContactField::Email, "asha@example.org");
    let state = edit_contact(state, ContactField::Organization, "River Trust");
    edit_contact(state, ContactField::Message, "We need an impact study.")
}

#[test]
fn submit_emits_snapshot_and_sets_guard() {
    init_logging();
    let state = filled_contact(AppState::new());

    let (state, effects) = update(state, Msg::ContactSubmitted);

    assert_eq!(
        effects,
        vec![Effect::SubmitContact {
            fields: ContactFields {
                name: "Asha".to_string(),
                email: "asha@example.org".to_string(),
                organization: "River Trust".to_string(),
                message: "We need an impact study.".to_string(),
            }
        }]
    );
    let view = state.view();
    assert!(view.contact.submitting);
    assert!(!view.contact.can_submit);
}

#[test]
fn resubmit_while_in_flight_is_a_noop() {
    init_logging();
    let state = filled_contact(AppState::new());
    let (state, first) = update(state, Msg::ContactSubmitted);
    assert_eq!(first.len(), 1);

    // The submitting guard makes this a strict no-op: no second effect.
    let (state, second) = update(state, Msg::ContactSubmitted);
    assert!(second.is_empty());
    assert!(state.view().contact.submitting);
}

#[test]
fn delivery_resets_fields_and_schedules_the_ack_clear() {
    init_logging();
    let state = filled_contact(AppState::new());
    let (state, _) = update(state, Msg::ContactSubmitted);

    let (state, effects) = update(
        state,
        Msg::SubmissionSettled {
            form: FormKind::Contact,
            delivered: true,
        },
    );

    assert_eq!(
        effects,
        vec![Effect::StartAckTimer {
            form: FormKind::Contact
        }]
    );
    let view = state.view();
    assert!(!view.contact.submitting);
    assert_eq!(view.contact.outcome, SubmitOutcome::AssumedDelivered);
    assert_eq!(view.contact.fields, ContactFields::default());

    // Simulated clock: the engine's timer is just this message.
    let (state, effects) = update(
        state,
        Msg::AckElapsed {
            form: FormKind::Contact,
        },
    );
    assert!(effects.is_empty());
    assert_eq!(state.view().contact.outcome, SubmitOutcome::Pending);
}

#[test]
fn transport_failure_keeps_fields_and_clears_the_guard() {
    init_logging();
    let state = filled_contact(AppState::new());
    let (state, _) = update(state, Msg::ContactSubmitted);

    let (state, effects) = update(
        state,
        Msg::SubmissionSettled {
            form: FormKind::Contact,
            delivered: false,
        },
    );

    assert!(effects.is_empty());
    let view = state.view();
    assert!(!view.contact.submitting);
    assert_eq!(view.contact.outcome, SubmitOutcome::TransportFailed);
    // The user keeps what they typed.
    assert_eq!(view.contact.fields.name, "Asha");
    // Cleared guard means the form can be submitted again.
    assert!(view.contact.can_submit);
}

#[test]
fn ack_elapsed_never_clobbers_a_failure() {
    init_logging();
    let state = filled_contact(AppState::new());
    let (state, _) = update(state, Msg::ContactSubmitted);
    let (state, _) = update(
        state,
        Msg::SubmissionSettled {
            form: FormKind::Contact,
            delivered: false,
        },
    );

    let (state, _) = update(
        state,
        Msg::AckElapsed {
            form: FormKind::Contact,
        },
    );
    assert_eq!(state.view().contact.outcome, SubmitOutcome::TransportFailed);
}

#[test]
fn careers_snapshot_carries_the_job_type() {
    init_logging();
    let state = AppState::new();
    let (state, _) = update(
        state,
        Msg::CareersEdited {
            field: CareersField::Name,
            value: "Ravi".to_string(),
        },
    );
    let (state, _) = update(
        state,
        Msg::CareersEdited {
            field: CareersField::Email,
            value: "ravi@example.org".to_string(),
        },
    );
    let (state, _) = update(
        state,
        Msg::CareersEdited {
            field: CareersField::Phone,
            value: "+91 99999 99999".to_string(),
        },
    );
    let (state, _) = update(state, Msg::CareersJobTypeChanged(JobType::FullTime));

    let (_, effects) = update(state, Msg::CareersSubmitted);
    let [Effect::SubmitCareers { fields }] = effects.as_slice() else {
        panic!("expected one careers submission effect");
    };
    assert_eq!(fields.job_type, JobType::FullTime);
    assert_eq!(fields.linkedin, "");
}

#[test]
fn required_fields_gate_the_view_not_the_guard() {
    init_logging();
    let state = AppState::new();
    // Empty form: the input layer reads can_submit and refuses to dispatch.
    assert!(!state.view().careers.can_submit);

    let state = filled_contact(state);
    assert!(state.view().contact.can_submit);
}

#[test]
fn the_two_forms_do_not_share_state() {
    init_logging();
    let state = filled_contact(AppState::new());
    let (state, _) = update(state, Msg::ContactSubmitted);
    let (state, _) = update(state, Msg::CareersSubmitted);

    // A careers settlement must not touch the in-flight contact form.
    let (state, _) = update(
        state,
        Msg::SubmissionSettled {
            form: FormKind::Careers,
            delivered: true,
        },
    );
    let view = state.view();
    assert!(view.contact.submitting);
    assert_eq!(view.careers.outcome, SubmitOutcome::AssumedDelivered);
}

#[test]
fn leaving_a_form_page_resets_it() {
    init_logging();
    let state = AppState::new();
    let (state, _) = update(state, Msg::RouteChanged(Route::Contact));
    let state = filled_contact(state);

    let (state, _) = update(state, Msg::RouteChanged(Route::Home));
    let (state, _) = update(state, Msg::RouteChanged(Route::Contact));

    // The next visit mounts fresh.
    assert_eq!(state.view().contact.fields, ContactFields::default());
}

#[test]
fn a_settlement_for_a_defunct_form_instance_is_dropped() {
    init_logging();
    let state = AppState::new();
    let (state, _) = update(state, Msg::RouteChanged(Route::Contact));
    let state = filled_contact(state);
    let (state, _) = update(state, Msg::ContactSubmitted);

    // Navigating away resets the form; the request is not cancelled.
    let (state, _) = update(state, Msg::RouteChanged(Route::Home));

    let (state, effects) = update(
        state,
        Msg::SubmissionSettled {
            form: FormKind::Contact,
            delivered: true,
        },
    );
    // No acknowledgment timer for an instance that no longer exists.
    assert!(effects.is_empty());
    assert_eq!(state.view().contact.outcome, SubmitOutcome::Pending);
}
