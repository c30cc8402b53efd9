use std::sync::Once;

use pavilion_core::{update, AppState, Msg};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(site_logging::initialize_for_tests);
}

#[test]
fn tick_and_noop_change_nothing() {
    init_logging();
    let state = AppState::new();
    let before = state.clone();

    let (state, effects) = update(state, Msg::Tick);
    assert!(effects.is_empty());
    assert_eq!(state, before);

    let (mut state, effects) = update(state, Msg::NoOp);
    assert!(effects.is_empty());
    assert_eq!(state, before);
    assert!(!state.consume_dirty());
}
