use super::*;

fn summary(id: i64, title: &str) -> ConversationSummary {
    ConversationSummary { id: Some(id), title: title.to_owned() }
}

fn placeholder() -> ConversationSummary {
    ConversationSummary { id: None, title: DEFAULT_TITLE.to_owned() }
}

// =============================================================
// Adoption and auto-select
// =============================================================

#[test]
fn adopt_selects_largest_id_when_nothing_selected() {
    let mut state = ConversationsState::default();
    state.adopt(vec![summary(1, "A"), summary(3, "B")], true);
    assert_eq!(state.current, 3);
}

#[test]
fn adopt_keeps_a_still_valid_selection() {
    let mut state = ConversationsState::default();
    state.select(1);
    state.adopt(vec![summary(1, "A"), summary(3, "B")], true);
    assert_eq!(state.current, 1);
}

#[test]
fn adopt_reselects_when_selection_vanished() {
    let mut state = ConversationsState::default();
    state.select(7);
    state.adopt(vec![summary(2, "A"), summary(5, "B")], true);
    assert_eq!(state.current, 5);
}

#[test]
fn adopt_of_empty_list_clears_selection() {
    let mut state = ConversationsState::default();
    state.adopt(Vec::new(), true);
    assert_eq!(state.current, NO_SELECTION);
}

#[test]
fn adopt_without_autoselect_preserves_cleared_selection() {
    let mut state = ConversationsState::default();
    state.adopt(vec![summary(1, "A"), summary(3, "B")], false);
    assert_eq!(state.current, NO_SELECTION, "post-delete refresh must not reselect");
}

// =============================================================
// Placeholder lifecycle
// =============================================================

#[test]
fn ensure_active_creates_placeholder_once() {
    let mut state = ConversationsState::default();
    state.ensure_active();
    state.ensure_active();
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, None);
}

#[test]
fn ensure_active_is_noop_with_a_selection() {
    let mut state = ConversationsState::default();
    state.adopt(vec![summary(2, "A")], true);
    state.ensure_active();
    assert_eq!(state.items.len(), 1);
}

#[test]
fn placeholder_is_active_while_nothing_is_selected() {
    let mut state = ConversationsState::default();
    state.ensure_active();
    let entry = state.items[0].clone();
    assert!(state.is_active(&entry));
    state.select(4);
    assert!(!state.is_active(&entry));
}

// =============================================================
// Title derivation
// =============================================================

#[test]
fn derive_title_truncates_to_thirty_chars() {
    let mut state = ConversationsState::default();
    state.ensure_active();
    let text = "á".repeat(35);
    assert!(state.derive_title(&text));
    assert_eq!(state.items[0].title.chars().count(), 30);
}

#[test]
fn derive_title_never_overwrites_a_real_title() {
    let mut state = ConversationsState::default();
    state.ensure_active();
    assert!(state.derive_title("primer mensaje"));
    assert!(!state.derive_title("segundo mensaje"));
    assert_eq!(state.items[0].title, "primer mensaje");
}

#[test]
fn derive_title_applies_to_selected_server_entry() {
    let mut state = ConversationsState::default();
    state.adopt(vec![summary(2, "")], true);
    assert!(state.derive_title("hola mundo"));
    assert_eq!(state.items[0].title, "hola mundo");
}

#[test]
fn derive_title_ignores_blank_text() {
    let mut state = ConversationsState::default();
    state.ensure_active();
    assert!(!state.derive_title("   "));
    assert_eq!(state.items[0].title, DEFAULT_TITLE);
}

// =============================================================
// Display
// =============================================================

#[test]
fn display_title_falls_back_when_empty() {
    assert_eq!(summary(1, "").display_title(), DEFAULT_TITLE);
    assert_eq!(summary(1, "Hola").display_title(), "Hola");
}

#[test]
fn display_order_descends_with_placeholder_coerced_to_zero() {
    let mut state = ConversationsState::default();
    state.adopt(vec![summary(1, "A"), summary(3, "B")], false);
    state.ensure_active();
    let ids: Vec<Option<i64>> = state.display_order(true).iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![Some(3), Some(1), None]);
}

#[test]
fn display_order_keeps_server_order_without_the_flag() {
    let mut state = ConversationsState::default();
    state.adopt(vec![summary(1, "A"), summary(3, "B")], false);
    let ids: Vec<Option<i64>> = state.display_order(false).iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![Some(1), Some(3)]);
}

// =============================================================
// Deletion bookkeeping
// =============================================================

#[test]
fn clearing_selection_survives_the_followup_refresh() {
    let mut state = ConversationsState::default();
    state.adopt(vec![summary(1, "A"), summary(3, "B")], true);
    assert_eq!(state.current, 3);
    // Active conversation deleted: selection cleared, then the list refetched.
    state.clear_selection();
    state.adopt(vec![summary(1, "A")], false);
    assert_eq!(state.current, NO_SELECTION);
}

#[test]
fn deleting_a_non_active_entry_leaves_selection_alone() {
    let mut state = ConversationsState::default();
    state.adopt(vec![summary(1, "A"), summary(3, "B")], true);
    state.adopt(vec![summary(3, "B")], false);
    assert_eq!(state.current, 3);
}
