#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// State for the composer popovers: the actions menu and, nested inside
/// it, the model submenu. The submenu can only be open while its parent
/// is; closing the parent force-closes it.
#[derive(Clone, Debug, Default)]
pub struct MenuState {
    pub actions_open: bool,
    pub models_open: bool,
    /// Model identifiers fetched from `/api/models`.
    pub models: Vec<String>,
    /// Currently selected model; `None` leaves the choice to the server.
    pub selected: Option<String>,
}

/// Outcome of selecting a model entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModelChoice {
    /// The selection actually changed; the caller resets the server-side
    /// history and confirms in the chat view.
    Switched,
    /// Reselected the current model; nothing to do.
    Unchanged,
}

impl MenuState {
    pub fn toggle_actions(&mut self) {
        if self.actions_open {
            self.close_all();
        } else {
            self.actions_open = true;
        }
    }

    pub fn toggle_models(&mut self) {
        if !self.actions_open {
            self.models_open = false;
            return;
        }
        self.models_open = !self.models_open;
    }

    /// Close both popovers. Wired to outside clicks and Escape.
    pub fn close_all(&mut self) {
        self.actions_open = false;
        self.models_open = false;
    }

    /// Label for the model submenu trigger.
    pub fn label(&self) -> &str {
        self.selected.as_deref().unwrap_or("Modelos")
    }

    /// Record a model selection and close both menus. The very first
    /// selection counts as a switch: it moves off the server default.
    pub fn choose(&mut self, model: &str) -> ModelChoice {
        let changed = self.selected.as_deref() != Some(model);
        self.selected = Some(model.to_owned());
        self.close_all();
        if changed { ModelChoice::Switched } else { ModelChoice::Unchanged }
    }
}
