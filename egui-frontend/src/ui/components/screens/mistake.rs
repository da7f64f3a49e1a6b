//! Mistake book: every recorded mistake of the active child, newest first.

use eframe::egui;

use super::subject_tone;
use crate::ui::app_state::CompanionApp;
use crate::ui::components::theme::{colors, Tone};
use crate::ui::components::ui_components::{card, chip, empty_state, image_placeholder, muted};

impl CompanionApp {
    pub fn render_mistake_screen(&mut self, ui: &mut egui::Ui) {
        let mut preview: Option<String> = None;

        egui::ScrollArea::vertical()
            .id_source("mistake_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                egui::Frame::none()
                    .inner_margin(egui::Margin::symmetric(14.0, 12.0))
                    .show(ui, |ui| {
                        if self.core.data.mistakes.is_empty() {
                            empty_state(ui, "📕", "暂无错题记录");
                        }

                        for mistake in &self.core.data.mistakes {
                            card(ui, |ui| {
                                ui.horizontal(|ui| {
                                    if image_placeholder(
                                        ui,
                                        egui::vec2(84.0, 84.0),
                                        "错题",
                                        &mistake.image_url,
                                    )
                                    .clicked()
                                    {
                                        preview = Some(mistake.image_url.clone());
                                    }

                                    ui.vertical(|ui| {
                                        ui.horizontal(|ui| {
                                            chip(ui, &mistake.subject, subject_tone(&mistake.subject));
                                            muted(ui, &mistake.date);
                                            chip(ui, mistake.status.label(), Tone::Neutral);
                                        });
                                        ui.label(
                                            egui::RichText::new(&mistake.title)
                                                .strong()
                                                .color(colors::TEXT_PRIMARY),
                                        );
                                        muted(ui, format!("知识点: {}", mistake.knowledge_point));
                                        muted(ui, format!("错误原因: {}", mistake.reason));
                                        if ui
                                            .add(
                                                egui::Label::new(
                                                    egui::RichText::new("查看大图 ›")
                                                        .size(12.0)
                                                        .color(colors::ACTIVE_BACKGROUND),
                                                )
                                                .sense(egui::Sense::click())
                                                .selectable(false),
                                            )
                                            .clicked()
                                        {
                                            preview = Some(mistake.image_url.clone());
                                        }
                                    });
                                });
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
