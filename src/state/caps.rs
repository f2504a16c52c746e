/// Capability flags for optional UI features.
///
/// The frontend shipped in two variants: one with a model-selector popover
/// (which also lists conversations newest-first) and one without. Both are
/// served by this single implementation, toggled here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClientCaps {
    /// Render the model submenu and sort the conversation list descending.
    pub model_menu: bool,
}

impl Default for ClientCaps {
    fn default() -> Self {
        Self { model_menu: true }
    }
}
