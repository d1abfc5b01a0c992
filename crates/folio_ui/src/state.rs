//! Page-wide state shared by widgets.

/// State every widget may read; only the eyes widget writes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    eyes_open: bool,
}

impl PageState {
    /// Fresh page: eyes open.
    #[must_use]
    pub const fn new() -> Self {
        Self { eyes_open: true }
    }

    /// Returns true while the eyes are open.
    #[must_use]
    pub const fn eyes_open(&self) -> bool {
        self.eyes_open
    }

    /// Flips the eyes flag and returns the new value.
    pub fn toggle_eyes(&mut self) -> bool {
        self.eyes_open = !self.eyes_open;
        self.eyes_open
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}
