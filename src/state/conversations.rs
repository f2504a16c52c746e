#[cfg(test)]
#[path = "conversations_test.rs"]
mod conversations_test;

/// Title shown for conversations the user has not written into yet, and
/// the fallback whenever the server sends an empty title.
pub const DEFAULT_TITLE: &str = "Nueva conversación";

/// Sentinel for "no conversation selected".
pub const NO_SELECTION: i64 = -1;

const TITLE_MAX_CHARS: usize = 30;

/// A sidebar entry. `id: None` marks a locally created conversation that
/// the server has not assigned an id to yet.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ConversationSummary {
    pub id: Option<i64>,
    #[serde(default)]
    pub title: String,
}

impl ConversationSummary {
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() { DEFAULT_TITLE } else { &self.title }
    }

    fn has_default_title(&self) -> bool {
        self.title.is_empty() || self.title == DEFAULT_TITLE
    }
}

/// Sidebar list state plus the current-selection pointer.
#[derive(Clone, Debug)]
pub struct ConversationsState {
    pub items: Vec<ConversationSummary>,
    /// Selected server id, or [`NO_SELECTION`]. The local placeholder entry
    /// counts as active while no server id is selected.
    pub current: i64,
}

impl Default for ConversationsState {
    fn default() -> Self {
        Self { items: Vec::new(), current: NO_SELECTION }
    }
}

impl ConversationsState {
    /// Replace the list with a freshly fetched one.
    ///
    /// With `auto_select`, an invalid or empty selection moves to the entry
    /// with the numerically largest id (the latest conversation). Refreshes
    /// that follow a delete pass `false` so an intentionally cleared
    /// selection stays cleared.
    pub fn adopt(&mut self, items: Vec<ConversationSummary>, auto_select: bool) {
        self.items = items;
        if auto_select && !self.has_valid_selection() {
            self.current = self
                .items
                .iter()
                .filter_map(|c| c.id)
                .max()
                .unwrap_or(NO_SELECTION);
        }
    }

    pub fn has_valid_selection(&self) -> bool {
        self.items.iter().any(|c| c.id == Some(self.current))
    }

    pub fn select(&mut self, id: i64) {
        self.current = id;
    }

    pub fn clear_selection(&mut self) {
        self.current = NO_SELECTION;
    }

    pub fn is_active(&self, item: &ConversationSummary) -> bool {
        match item.id {
            Some(id) => id == self.current,
            None => self.current == NO_SELECTION,
        }
    }

    /// Lazily create the local placeholder entry for a first send with no
    /// selection. At most one placeholder exists at a time.
    pub fn ensure_active(&mut self) {
        if self.current == NO_SELECTION && !self.items.iter().any(|c| c.id.is_none()) {
            self.items.push(ConversationSummary {
                id: None,
                title: DEFAULT_TITLE.to_owned(),
            });
        }
    }

    /// Derive the active conversation's title from the first user message.
    ///
    /// Only applies while the title is still the default placeholder; once a
    /// real title is set it is never overwritten. Returns whether the list
    /// changed (callers re-render the sidebar on `true`).
    pub fn derive_title(&mut self, text: &str) -> bool {
        let Some(entry) = self.active_entry_mut() else {
            return false;
        };
        if !entry.has_default_title() {
            return false;
        }
        let title: String = text.trim().chars().take(TITLE_MAX_CHARS).collect();
        if title.is_empty() {
            return false;
        }
        entry.title = title;
        true
    }

    /// Entries in render order. `newest_first` sorts by descending id with
    /// missing ids coerced to 0, matching the popover variant; otherwise the
    /// server order is kept.
    pub fn display_order(&self, newest_first: bool) -> Vec<ConversationSummary> {
        let mut items = self.items.clone();
        if newest_first {
            items.sort_by(|a, b| b.id.unwrap_or(0).cmp(&a.id.unwrap_or(0)));
        }
        items
    }

    fn active_entry_mut(&mut self) -> Option<&mut ConversationSummary> {
        let current = self.current;
        self.items.iter_mut().find(|c| match c.id {
            Some(id) => id == current,
            None => current == NO_SELECTION,
        })
    }
}
