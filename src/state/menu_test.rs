use super::*;

fn with_models() -> MenuState {
    MenuState {
        models: vec!["gpt-oss-20b".to_owned(), "llama3".to_owned()],
        ..MenuState::default()
    }
}

// =============================================================
// Open/close dependency
// =============================================================

#[test]
fn actions_menu_toggles() {
    let mut menu = MenuState::default();
    menu.toggle_actions();
    assert!(menu.actions_open);
    menu.toggle_actions();
    assert!(!menu.actions_open);
}

#[test]
fn model_submenu_needs_open_parent() {
    let mut menu = MenuState::default();
    menu.toggle_models();
    assert!(!menu.models_open);
    menu.toggle_actions();
    menu.toggle_models();
    assert!(menu.models_open);
}

#[test]
fn closing_parent_force_closes_submenu() {
    let mut menu = MenuState::default();
    menu.toggle_actions();
    menu.toggle_models();
    menu.toggle_actions();
    assert!(!menu.actions_open);
    assert!(!menu.models_open);
}

#[test]
fn close_all_closes_both() {
    let mut menu = MenuState::default();
    menu.toggle_actions();
    menu.toggle_models();
    menu.close_all();
    assert!(!menu.actions_open);
    assert!(!menu.models_open);
}

// =============================================================
// Model selection
// =============================================================

#[test]
fn first_selection_counts_as_switch() {
    let mut menu = with_models();
    assert_eq!(menu.choose("gpt-oss-20b"), ModelChoice::Switched);
    assert_eq!(menu.selected.as_deref(), Some("gpt-oss-20b"));
}

#[test]
fn reselecting_the_same_model_is_unchanged() {
    let mut menu = with_models();
    menu.choose("gpt-oss-20b");
    assert_eq!(menu.choose("gpt-oss-20b"), ModelChoice::Unchanged);
}

#[test]
fn switching_models_reports_switched_each_time() {
    let mut menu = with_models();
    assert_eq!(menu.choose("gpt-oss-20b"), ModelChoice::Switched);
    assert_eq!(menu.choose("llama3"), ModelChoice::Switched);
    assert_eq!(menu.choose("llama3"), ModelChoice::Unchanged);
}

#[test]
fn choosing_closes_both_menus() {
    let mut menu = with_models();
    menu.toggle_actions();
    menu.toggle_models();
    menu.choose("llama3");
    assert!(!menu.actions_open);
    assert!(!menu.models_open);
}

#[test]
fn label_falls_back_until_a_model_is_chosen() {
    let mut menu = with_models();
    assert_eq!(menu.label(), "Modelos");
    menu.choose("llama3");
    assert_eq!(menu.label(), "llama3");
}
