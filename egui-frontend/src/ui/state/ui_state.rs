//! # UI State Module
//!
//! Loading flag and the dismissible error line shown above the content.

#[derive(Debug, Default)]
pub struct UIState {
    /// Whether the app is currently loading
    pub loading: bool,

    /// Error message to display to the user
    pub error_message: Option<String>,
}

impl UIState {
    pub fn new() -> Self {
        Self {
            loading: true,
            error_message: None,
        }
    }

    pub fn clear_messages(&mut self) {
        self.error_message = None;
    }

    pub fn set_error(&mut self, message: String) {
        log::warn!("❌ {}", message);
        self.error_message = Some(message);
    }
}
