//! Bottom navigation bar: 首页 / 学情 / 我的, active entry highlighted.

use eframe::egui;

use crate::ui::app_state::CompanionApp;
use crate::ui::components::theme::colors;
use crate::ui::state::View;

pub const BOTTOM_NAV_HEIGHT: f32 = 58.0;

impl CompanionApp {
    pub fn render_bottom_nav(&mut self, ui: &mut egui::Ui) {
        let width = ui.available_width() / View::BOTTOM_NAV.len() as f32;
        let mut clicked: Option<View> = None;

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            for view in View::BOTTOM_NAV {
                let active = self.view.is_nav_active(view);
                let color = if active {
                    colors::ACTIVE_BACKGROUND
                } else {
                    colors::TEXT_MUTED
                };

                let (rect, response) = ui.allocate_exact_size(
                    egui::vec2(width, BOTTOM_NAV_HEIGHT - 8.0),
                    egui::Sense::click(),
                );
                let painter = ui.painter();
                painter.text(
                    rect.center() - egui::vec2(0.0, 9.0),
                    egui::Align2::CENTER_CENTER,
                    view.nav_icon(),
                    egui::FontId::proportional(20.0),
                    color,
                );
                painter.text(
                    rect.center() + egui::vec2(0.0, 13.0),
                    egui::Align2::CENTER_CENTER,
                    view.nav_label(),
                    egui::FontId::proportional(11.0),
                    color,
                );

                if response.clicked() {
                    clicked = Some(view);
                }
            }
        });

        if let Some(view) = clicked {
            self.modal.show_child_dropdown = false;
            self.view.navigate(view);
        }
    }
}
