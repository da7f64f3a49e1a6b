//! Recipe screen: the day's lunch, snack and dinner.

use eframe::egui;
use shared::Meal;

use crate::ui::app_state::CompanionApp;
use crate::ui::components::theme::{colors, Tone};
use crate::ui::components::ui_components::{card, chip, empty_state, image_placeholder, muted};

impl CompanionApp {
    pub fn render_recipe_screen(&mut self, ui: &mut egui::Ui) {
        let mut preview: Option<String> = None;

        egui::ScrollArea::vertical()
            .id_source("recipe_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                egui::Frame::none()
                    .inner_margin(egui::Margin::symmetric(14.0, 12.0))
                    .show(ui, |ui| {
                        let Some(recipe) = &self.core.data.recipe else {
                            empty_state(ui, "🍱", "今日食谱尚未发布");
                            return;
                        };

                        ui.label(
                            egui::RichText::new(format!("📅 {}", recipe.date))
                                .size(16.0)
                                .strong()
                                .color(colors::TEXT_PRIMARY),
                        );
                        if recipe.date != self.core.today_string() {
                            muted(ui, "今日食谱尚未发布，显示最近一期");
                        }
                        ui.add_space(8.0);

                        for (title, meal) in [
                            ("午餐", &recipe.lunch),
                            ("点心", &recipe.snack),
                            ("晚餐", &recipe.dinner),
                        ] {
                            if let Some(image) = render_meal(ui, title, meal) {
                                preview = Some(image);
                            }
                            ui.add_space(12.0);
                        }
                    });
            });

        if let Some(image) = preview {
            self.modal.image_preview.open(image);
        }
    }
}

fn render_meal(ui: &mut egui::Ui, title: &str, meal: &Meal) -> Option<String> {
    let mut preview = None;

    card(ui, |ui| {
        ui.label(
            egui::RichText::new(title)
                .size(15.0)
                .strong()
                .color(colors::TEXT_PRIMARY),
        );
        if let Some(image) = &meal.image {
            let size = egui::vec2(ui.available_width(), 120.0);
            if image_placeholder(ui, size, title, image).clicked() {
                preview = Some(image.clone());
            }
        }
        if meal.items.is_empty() {
            muted(ui, "暂无菜品");
        }
        ui.horizontal_wrapped(|ui| {
            for item in &meal.items {
                chip(ui, item, Tone::Warning);
            }
        });
    });

    preview
}
