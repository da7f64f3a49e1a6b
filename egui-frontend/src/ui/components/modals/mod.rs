//! # Modals Module
//!
//! Overlays drawn above the current screen.
//!
//! ## Module Organization:
//! - `image_preview` - Full-size view of a homework, mistake or notice image
//! - `leave_success` - Confirmation shown after a leave request is accepted

pub mod image_preview;
pub mod leave_success;

use eframe::egui;

use crate::ui::app_state::CompanionApp;

impl CompanionApp {
    /// Render all modals - main modal coordinator
    pub fn render_modals(&mut self, ctx: &egui::Context) {
        self.render_leave_success_overlay(ctx);
        self.render_image_preview(ctx);
    }
}
