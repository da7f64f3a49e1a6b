//! # Tab Manager Module
//!
//! Routes the central panel to the current view.
//!
//! ## Key Functions:
//! - `render_main_content()` - Draw the screen for `view.current()`
//!
//! ## View Flow:
//! - Home and Mine draw their own header area
//! - Every other view gets a back bar titled `View::title()` that returns to Home

use eframe::egui;

use crate::ui::app_state::CompanionApp;
use crate::ui::components::ui_components::back_bar;
use crate::ui::state::View;

impl CompanionApp {
    /// Render the main content area
    pub fn render_main_content(&mut self, ui: &mut egui::Ui) {
        let view = self.view.current();

        if view.has_back_button() && back_bar(ui, view.title()) {
            self.view.go_back();
            return;
        }
        // Home shows the error line under its own header
        if view != View::Home {
            egui::Frame::none()
                .inner_margin(egui::Margin::symmetric(14.0, 0.0))
                .show(ui, |ui| self.render_messages(ui));
        }

        match view {
            View::Home => self.render_home_screen(ui),
            View::Learning => self.render_learning_screen(ui),
            View::Mine => self.render_mine_screen(ui),
            View::Recipe => self.render_recipe_screen(ui),
            View::LeaveApply => self.render_leave_screen(ui),
            View::MistakeBook => self.render_mistake_screen(ui),
            View::Review => self.render_review_screen(ui),
        }
    }
}
