//! # Header Module
//!
//! The home screen header: the active child's avatar, name and class with a
//! dropdown to switch child, and the notification bell.
//!
//! ## Key Functions:
//! - `render_header()` - Child picker and bell
//! - `render_child_dropdown()` - Floating list of children
//! - `render_messages()` - Error line under the header

use eframe::egui;

use crate::ui::app_state::CompanionApp;
use crate::ui::components::theme::colors;
use crate::ui::components::ui_components::avatar_circle;

impl CompanionApp {
    pub fn render_header(&mut self, ui: &mut egui::Ui) {
        let frame = egui::Frame::none()
            .fill(colors::CARD_BACKGROUND)
            .inner_margin(egui::Margin::symmetric(16.0, 12.0));

        frame.show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                let picker = ui.scope(|ui| {
                    ui.horizontal(|ui| match self.current_child().clone() {
                        Some(child) => {
                            avatar_circle(ui, &child.initial(), 20.0);
                            ui.vertical(|ui| {
                                ui.spacing_mut().item_spacing.y = 2.0;
                                ui.horizontal(|ui| {
                                    ui.add(
                                        egui::Label::new(
                                            egui::RichText::new(&child.name)
                                                .size(17.0)
                                                .strong()
                                                .color(colors::TEXT_PRIMARY),
                                        )
                                        .selectable(false),
                                    );
                                    ui.label(egui::RichText::new("▾").color(colors::TEXT_MUTED));
                                });
                                ui.label(
                                    egui::RichText::new(format!(
                                        "{} · {}",
                                        child.school,
                                        child.grade_and_class()
                                    ))
                                    .size(12.0)
                                    .color(colors::TEXT_MUTED),
                                );
                            });
                        }
                        None => {
                            ui.label(egui::RichText::new("请选择孩子").color(colors::TEXT_MUTED));
                        }
                    })
                    .response
                });

                let picker_response = ui.interact(
                    picker.response.rect,
                    ui.id().with("child_picker"),
                    egui::Sense::click(),
                );
                if picker_response.hovered() {
                    ui.ctx()
                        .output_mut(|o| o.cursor_icon = egui::CursorIcon::PointingHand);
                }
                if picker_response.clicked() {
                    self.modal.show_child_dropdown = !self.modal.show_child_dropdown;
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add(egui::Button::new(egui::RichText::new("🔔").size(18.0)).frame(false))
                        .on_hover_text(format!("{}暂无新消息", self.core.config.institution_name));
                });

                if self.modal.show_child_dropdown {
                    self.render_child_dropdown(ui.ctx(), picker.response.rect);
                }
            });
        });
    }

    /// Floating child list anchored under the picker
    pub fn render_child_dropdown(&mut self, ctx: &egui::Context, anchor: egui::Rect) {
        let mut selected: Option<String> = None;
        let active_id = self.view.active_child_id().map(str::to_string);

        let area = egui::Area::new(egui::Id::new("child_dropdown"))
            .order(egui::Order::Foreground)
            .fixed_pos(anchor.left_bottom() + egui::vec2(0.0, 6.0))
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.set_min_width(200.0);
                    if self.core.children.is_empty() {
                        ui.label(egui::RichText::new("暂无孩子").color(colors::TEXT_MUTED));
                    }
                    for child in &self.core.children {
                        let is_current = active_id.as_deref() == Some(child.id.as_str());
                        let text = egui::RichText::new(format!(
                            "{}  {}",
                            child.name,
                            child.grade_and_class()
                        ))
                        .color(if is_current {
                            colors::ACTIVE_BACKGROUND
                        } else {
                            colors::TEXT_PRIMARY
                        });
                        if ui.selectable_label(is_current, text).clicked() {
                            selected = Some(child.id.clone());
                        }
                    }
                });
            });

        // Click anywhere else closes the dropdown; the picker toggles it itself
        if area.response.clicked_elsewhere()
            && !ctx.input(|i| {
                i.pointer
                    .interact_pos()
                    .map(|pos| anchor.contains(pos))
                    .unwrap_or(false)
            })
        {
            self.modal.show_child_dropdown = false;
        }

        if let Some(child_id) = selected {
            self.modal.show_child_dropdown = false;
            self.switch_child(&child_id);
        }
    }

    /// Render error message
    pub fn render_messages(&mut self, ui: &mut egui::Ui) {
        let mut dismiss = false;
        if let Some(error) = &self.ui.error_message {
            ui.horizontal(|ui| {
                ui.colored_label(colors::TEXT_DANGER, format!("❌ {}", error));
                dismiss = ui.small_button("✕").clicked();
            });
        }
        if dismiss {
            self.ui.clear_messages();
        }
    }
}
