use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn starts_on_greeting_with_wide_sidebar() {
    let state = UiState::default();
    assert!(state.greeting);
    assert!(!state.narrow);
    assert!(!state.sidebar_open);
    assert!(!state.sidebar_collapsed);
}

#[test]
fn greeting_toggles() {
    let mut state = UiState::default();
    state.enter_chat();
    assert!(!state.greeting);
    state.show_greeting();
    assert!(state.greeting);
}

// =============================================================
// Breakpoint
// =============================================================

#[test]
fn viewport_at_breakpoint_is_narrow() {
    let mut state = UiState::default();
    state.set_viewport(768.0);
    assert!(state.narrow);
    state.set_viewport(769.0);
    assert!(!state.narrow);
}

#[test]
fn leaving_narrow_closes_the_overlay() {
    let mut state = UiState::default();
    state.set_viewport(400.0);
    state.toggle_sidebar();
    assert!(state.sidebar_open);
    state.set_viewport(1024.0);
    assert!(!state.sidebar_open);
}

#[test]
fn collapse_survives_a_breakpoint_round_trip() {
    let mut state = UiState::default();
    state.toggle_sidebar();
    assert!(state.sidebar_collapsed);
    state.set_viewport(400.0);
    state.set_viewport(1024.0);
    assert!(state.sidebar_collapsed);
}

#[test]
fn resize_within_the_same_mode_changes_nothing() {
    let mut state = UiState::default();
    state.set_viewport(400.0);
    state.toggle_sidebar();
    state.set_viewport(500.0);
    assert!(state.sidebar_open);
}

// =============================================================
// Sidebar toggle
// =============================================================

#[test]
fn toggle_uses_overlay_when_narrow_and_push_when_wide() {
    let mut state = UiState::default();
    state.toggle_sidebar();
    assert!(state.sidebar_collapsed);
    assert!(!state.sidebar_open);

    let mut state = UiState::default();
    state.set_viewport(320.0);
    state.toggle_sidebar();
    assert!(state.sidebar_open);
    assert!(!state.sidebar_collapsed);
}

#[test]
fn backdrop_click_closes_the_overlay() {
    let mut state = UiState::default();
    state.set_viewport(320.0);
    state.toggle_sidebar();
    state.close_overlay();
    assert!(!state.sidebar_open);
}
