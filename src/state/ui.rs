#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Viewports at or below this width get the overlay sidebar.
pub const NARROW_MAX_WIDTH_PX: f64 = 768.0;

/// View-level UI state: greeting vs chat screen and the responsive
/// sidebar.
///
/// Narrow viewports use `sidebar_open` (overlay with a dimming backdrop);
/// wide viewports use `sidebar_collapsed` (push, no backdrop). The
/// breakpoint is recomputed on load and on every resize.
#[derive(Clone, Debug)]
pub struct UiState {
    pub greeting: bool,
    pub narrow: bool,
    pub sidebar_open: bool,
    pub sidebar_collapsed: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            greeting: true,
            narrow: false,
            sidebar_open: false,
            sidebar_collapsed: false,
        }
    }
}

impl UiState {
    pub fn enter_chat(&mut self) {
        self.greeting = false;
    }

    pub fn show_greeting(&mut self) {
        self.greeting = true;
    }

    /// Recompute the breakpoint. Leaving narrow mode closes the overlay;
    /// the wide-mode collapse is remembered across breakpoint crossings.
    pub fn set_viewport(&mut self, width: f64) {
        let narrow = width <= NARROW_MAX_WIDTH_PX;
        if narrow == self.narrow {
            return;
        }
        self.narrow = narrow;
        if !narrow {
            self.sidebar_open = false;
        }
    }

    /// Hamburger toggle: overlay below the breakpoint, push above it.
    pub fn toggle_sidebar(&mut self) {
        if self.narrow {
            self.sidebar_open = !self.sidebar_open;
        } else {
            self.sidebar_collapsed = !self.sidebar_collapsed;
        }
    }

    /// Backdrop click.
    pub fn close_overlay(&mut self) {
        self.sidebar_open = false;
    }
}
