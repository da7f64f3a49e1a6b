//! # Mine Screen
//!
//! Parent profile, the child list (click to switch), tool and system lists.

use eframe::egui;

use crate::ui::app_state::CompanionApp;
use crate::ui::components::theme::{colors, Tone};
use crate::ui::components::ui_components::{avatar_circle, card, chip, muted};

pub const APP_VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

const TOOLS: [(&str, &str); 4] = [
    ("ℹ", "机构信息"),
    ("🛡", "订阅设置"),
    ("💬", "意见反馈"),
    ("📞", "联系老师"),
];

/// Hide the middle of a phone number: 13800008888 -> 138****8888.
/// Numbers too short to mask are returned unchanged.
pub fn mask_phone(phone: &str) -> String {
    let chars: Vec<char> = phone.chars().collect();
    if chars.len() < 8 {
        return phone.to_string();
    }
    let head: String = chars[..3].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}****{}", head, tail)
}

impl CompanionApp {
    pub fn render_mine_screen(&mut self, ui: &mut egui::Ui) {
        let mut switch_to: Option<String> = None;

        egui::ScrollArea::vertical()
            .id_source("mine_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                egui::Frame::none()
                    .fill(colors::ACTIVE_BACKGROUND)
                    .inner_margin(egui::Margin::symmetric(20.0, 28.0))
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        let parent = &self.core.config.parent;
                        ui.horizontal(|ui| {
                            avatar_circle(ui, &parent.name.chars().take(1).collect::<String>(), 28.0);
                            ui.vertical(|ui| {
                                ui.label(
                                    egui::RichText::new(&parent.name)
                                        .size(20.0)
                                        .strong()
                                        .color(colors::TEXT_WHITE),
                                );
                                ui.label(
                                    egui::RichText::new(mask_phone(&parent.phone))
                                        .size(13.0)
                                        .color(colors::ACTIVE_TINT),
                                );
                            });
                        });
                    });

                egui::Frame::none()
                    .inner_margin(egui::Margin::symmetric(14.0, 12.0))
                    .show(ui, |ui| {
                        muted(ui, "我的孩子");
                        card(ui, |ui| {
                            let active_id = self.view.active_child_id();
                            for child in &self.core.children {
                                let is_current = active_id == Some(child.id.as_str());
                                let row = ui
                                    .horizontal(|ui| {
                                        avatar_circle(ui, &child.initial(), 18.0);
                                        ui.vertical(|ui| {
                                            ui.label(
                                                egui::RichText::new(&child.name)
                                                    .strong()
                                                    .color(colors::TEXT_PRIMARY),
                                            );
                                            muted(
                                                ui,
                                                format!("{} {}", child.school, child.grade_and_class()),
                                            );
                                        });
                                        if is_current {
                                            ui.with_layout(
                                                egui::Layout::right_to_left(egui::Align::Center),
                                                |ui| {
                                                    chip(ui, "当前", Tone::Info);
                                                },
                                            );
                                        }
                                    })
                                    .response;
                                let row = ui.interact(
                                    row.rect,
                                    ui.id().with(("mine_child", &child.id)),
                                    egui::Sense::click(),
                                );
                                if row.clicked() && !is_current {
                                    switch_to = Some(child.id.clone());
                                }
                                ui.separator();
                            }
                        });

                        ui.add_space(12.0);
                        muted(ui, "常用工具");
                        card(ui, |ui| {
                            ui.columns(TOOLS.len(), |columns| {
                                for (column, (icon, label)) in columns.iter_mut().zip(TOOLS) {
                                    column.vertical_centered(|ui| {
                                        ui.label(egui::RichText::new(icon).size(20.0));
                                        ui.label(
                                            egui::RichText::new(label)
                                                .size(12.0)
                                                .color(colors::TEXT_SECONDARY),
                                        );
                                    });
                                }
                            });
                        });

                        ui.add_space(12.0);
                        card(ui, |ui| {
                            list_row(ui, "❓ 使用指南", None);
                            ui.separator();
                            list_row(ui, "ℹ 版本信息", Some(APP_VERSION));
                        });
                    });
            });

        if let Some(child_id) = switch_to {
            self.switch_child(&child_id);
        }
    }
}

fn list_row(ui: &mut egui::Ui, label: &str, extra: Option<&str>) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(label).color(colors::TEXT_PRIMARY));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(egui::RichText::new("›").color(colors::TEXT_MUTED));
            if let Some(extra) = extra {
                muted(ui, extra);
            }
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_phone() {
        assert_eq!(mask_phone("13800008888"), "138****8888");
        assert_eq!(mask_phone("12345678"), "123****5678");
        assert_eq!(mask_phone("110"), "110");
        assert_eq!(mask_phone(""), "");
    }

    #[test]
    fn test_version_label() {
        assert!(APP_VERSION.starts_with('v'));
    }
}
