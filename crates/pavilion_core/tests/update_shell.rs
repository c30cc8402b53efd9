use std::sync::Once;

use pavilion_core::{update, AppState, Msg, Route, Theme};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(site_logging::initialize_for_tests);
}

#[test]
fn theme_signal_folds_into_state() {
    init_logging();
    let state = AppState::new();

    let (mut state, effects) = update(state, Msg::ThemeChanged(Theme::Dark));
    assert!(effects.is_empty());
    assert_eq!(state.view().theme, Theme::Dark);
    assert!(state.consume_dirty());

    // Re-announcing the same theme is not a render.
    let (mut state, _) = update(state, Msg::ThemeChanged(Theme::Dark));
    assert!(!state.consume_dirty());
}

#[test]
fn scroll_signal_switches_nav_past_the_threshold() {
    init_logging();
    let state = AppState::new();

    let (state, _) = update(state, Msg::ScrollChanged { offset: 20 });
    assert!(!state.view().nav_scrolled);

    let (state, _) = update(state, Msg::ScrollChanged { offset: 21 });
    assert!(state.view().nav_scrolled);

    let (state, _) = update(state, Msg::ScrollChanged { offset: 0 });
    assert!(!state.view().nav_scrolled);
}

#[test]
fn route_changes_mark_the_state_dirty_once() {
    init_logging();
    let state = AppState::new();

    let (mut state, _) = update(state, Msg::RouteChanged(Route::Team));
    assert_eq!(state.view().route, Route::Team);
    assert!(state.consume_dirty());

    let (mut state, _) = update(state, Msg::RouteChanged(Route::Team));
    assert!(!state.consume_dirty());
}
