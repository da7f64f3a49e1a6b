//! Review screen: the teacher's daily reviews, newest first.

use eframe::egui;

use super::learning::render_review_summary;
use crate::ui::app_state::CompanionApp;
use crate::ui::components::ui_components::{card, empty_state};

impl CompanionApp {
    pub fn render_review_screen(&mut self, ui: &mut egui::Ui) {
        let mut preview: Option<String> = None;

        egui::ScrollArea::vertical()
            .id_source("review_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                egui::Frame::none()
                    .inner_margin(egui::Margin::symmetric(14.0, 12.0))
                    .show(ui, |ui| {
                        if self.core.data.reviews.is_empty() {
                            empty_state(ui, "⭐", "暂无表现点评");
                        }
                        for review in &self.core.data.reviews {
                            card(ui, |ui| {
                                if let Some(image) = render_review_summary(ui, Some(review)) {
                                    preview = Some(image);
                                }
                            });
                            ui.add_space(10.0);
                        }
                    });
            });

        if let Some(image) = preview {
            self.modal.image_preview.open(image);
        }
    }
}
