//! # Home Screen
//!
//! Header with child picker, the "今日动态" card for the active child, the
//! quick navigation grid and the institution notices.

use eframe::egui;

use super::{MISSING_RATING, MISSING_TIME};
use crate::ui::app_state::CompanionApp;
use crate::ui::components::theme::colors;
use crate::ui::components::ui_components::{card, image_placeholder, muted, section_title};
use crate::ui::state::View;

/// Quick navigation entries: (icon, label, destination)
pub const QUICK_NAV: [(&str, &str, View); 5] = [
    ("📖", "学情详情", View::Learning),
    ("📕", "错题本", View::MistakeBook),
    ("⭐", "表现点评", View::Review),
    ("🍱", "今日食谱", View::Recipe),
    ("📅", "请假申请", View::LeaveApply),
];

impl CompanionApp {
    pub fn render_home_screen(&mut self, ui: &mut egui::Ui) {
        self.render_header(ui);

        egui::ScrollArea::vertical()
            .id_source("home_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.add_space(12.0);
                egui::Frame::none()
                    .inner_margin(egui::Margin::symmetric(14.0, 0.0))
                    .show(ui, |ui| {
                        self.render_messages(ui);
                        self.render_today_card(ui);
                        ui.add_space(12.0);
                        self.render_quick_nav(ui);
                        ui.add_space(12.0);
                        self.render_notices(ui);
                        ui.add_space(12.0);
                    });
            });
    }

    fn render_today_card(&mut self, ui: &mut egui::Ui) {
        let summary = self.core.data.summary.clone();

        let check_in = summary
            .as_ref()
            .and_then(|s| s.attendance.as_ref())
            .and_then(|a| a.check_in.clone())
            .unwrap_or_else(|| MISSING_TIME.to_string());
        let check_out = summary
            .as_ref()
            .and_then(|s| s.attendance.as_ref())
            .and_then(|a| a.check_out.clone())
            .unwrap_or_else(|| MISSING_TIME.to_string());
        let homework = summary
            .as_ref()
            .map(|s| format!("{}/{}", s.homework_completed, s.homework_total))
            .unwrap_or_else(|| "0/0".to_string());
        let rating = summary
            .as_ref()
            .and_then(|s| s.latest_rating)
            .map(|r| r.label().to_string())
            .unwrap_or_else(|| MISSING_RATING.to_string());
        let mistakes = summary.as_ref().map(|s| s.mistake_count).unwrap_or(0);

        let mut open_learning = false;
        card(ui, |ui| {
            open_learning = section_title(ui, "今日动态", Some(&self.core.today_string()));

            egui::Grid::new("today_grid")
                .num_columns(2)
                .spacing(egui::vec2(12.0, 12.0))
                .min_col_width((ui.available_width() - 12.0) / 2.0)
                .show(ui, |ui| {
                    stat(ui, "🕒", "到班时间", &check_in);
                    stat(ui, "🕕", "离班时间", &check_out);
                    ui.end_row();
                    stat(ui, "📚", "作业完成", &homework);
                    stat(ui, "⭐", "今日表现", &rating);
                    ui.end_row();
                    stat(ui, "📕", "新增错题", &format!("{} 道", mistakes));
                    ui.end_row();
                });
        });

        if open_learning {
            self.view.navigate(View::Learning);
        }
    }

    fn render_quick_nav(&mut self, ui: &mut egui::Ui) {
        let mut target: Option<View> = None;

        card(ui, |ui| {
            let columns = 4;
            let width = ui.available_width() / columns as f32;
            egui::Grid::new("quick_nav_grid")
                .num_columns(columns)
                .spacing(egui::vec2(0.0, 10.0))
                .show(ui, |ui| {
                    for (index, (icon, label, view)) in QUICK_NAV.iter().enumerate() {
                        let (rect, response) =
                            ui.allocate_exact_size(egui::vec2(width, 62.0), egui::Sense::click());
                        let fill = if response.hovered() {
                            colors::HOVER_BACKGROUND
                        } else {
                            colors::ACTIVE_TINT
                        };
                        let painter = ui.painter();
                        painter.circle_filled(rect.center() - egui::vec2(0.0, 10.0), 20.0, fill);
                        painter.text(
                            rect.center() - egui::vec2(0.0, 10.0),
                            egui::Align2::CENTER_CENTER,
                            *icon,
                            egui::FontId::proportional(18.0),
                            colors::ACTIVE_BACKGROUND,
                        );
                        painter.text(
                            rect.center() + egui::vec2(0.0, 22.0),
                            egui::Align2::CENTER_CENTER,
                            *label,
                            egui::FontId::proportional(12.0),
                            colors::TEXT_SECONDARY,
                        );
                        if response.clicked() {
                            target = Some(*view);
                        }
                        if (index + 1) % columns == 0 {
                            ui.end_row();
                        }
                    }
                });
        });

        if let Some(view) = target {
            self.view.navigate(view);
        }
    }

    fn render_notices(&mut self, ui: &mut egui::Ui) {
        let mut preview: Option<String> = None;

        card(ui, |ui| {
            section_title(ui, "机构动态", None);
            if self.core.data.notices.is_empty() {
                muted(ui, "暂无机构动态");
            }
            for notice in &self.core.data.notices {
                ui.horizontal(|ui| {
                    if let Some(image) = &notice.image {
                        if image_placeholder(ui, egui::vec2(64.0, 64.0), "通知", image).clicked() {
                            preview = Some(image.clone());
                        }
                    }
                    ui.vertical(|ui| {
                        ui.label(
                            egui::RichText::new(&notice.title)
                                .strong()
                                .color(colors::TEXT_PRIMARY),
                        );
                        ui.label(
                            egui::RichText::new(&notice.summary)
                                .size(12.0)
                                .color(colors::TEXT_SECONDARY),
                        );
                        muted(ui, &notice.published_on);
                    });
                });
            }
        });

        if let Some(image) = preview {
            self.modal.image_preview.open(image);
        }
    }
}

fn stat(ui: &mut egui::Ui, icon: &str, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(icon).size(18.0));
        ui.vertical(|ui| {
            ui.spacing_mut().item_spacing.y = 0.0;
            muted(ui, label);
            ui.label(
                egui::RichText::new(value)
                    .size(15.0)
                    .strong()
                    .color(colors::TEXT_PRIMARY),
            );
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quick_nav_targets() {
        let targets: Vec<View> = QUICK_NAV.iter().map(|(_, _, v)| *v).collect();
        assert_eq!(
            targets,
            vec![
                View::Learning,
                View::MistakeBook,
                View::Review,
                View::Recipe,
                View::LeaveApply
            ]
        );
    }
}
