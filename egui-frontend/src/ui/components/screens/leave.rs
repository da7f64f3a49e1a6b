//! # Leave Screen
//!
//! 申请请假 tab: a form for the active child (date, type, reason). Submit is
//! disabled while the reason is blank. 申请记录 tab: the child's submitted
//! requests, newest first.

use eframe::egui;
use egui_extras::DatePickerButton;
use shared::{LeaveRequest, LeaveType};

use crate::ui::app_state::CompanionApp;
use crate::ui::components::theme::{colors, Tone};
use crate::ui::components::ui_components::{card, chip, empty_state, muted, tab_switcher};
use crate::ui::state::LeaveTab;

impl CompanionApp {
    pub fn render_leave_screen(&mut self, ui: &mut egui::Ui) {
        egui::Frame::none()
            .inner_margin(egui::Margin::symmetric(14.0, 10.0))
            .show(ui, |ui| {
                tab_switcher(
                    ui,
                    &mut self.leave_form.tab,
                    &[
                        (LeaveTab::Apply, LeaveTab::Apply.label()),
                        (LeaveTab::History, LeaveTab::History.label()),
                    ],
                );
            });

        egui::ScrollArea::vertical()
            .id_source("leave_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                egui::Frame::none()
                    .inner_margin(egui::Margin::symmetric(14.0, 0.0))
                    .show(ui, |ui| match self.leave_form.tab {
                        LeaveTab::Apply => self.render_leave_form(ui),
                        LeaveTab::History => self.render_leave_history(ui),
                    });
            });
    }

    fn render_leave_form(&mut self, ui: &mut egui::Ui) {
        let student = self
            .current_child()
            .as_ref()
            .map(|c| c.name.clone())
            .unwrap_or_else(|| "-".to_string());
        let mut submit = false;

        card(ui, |ui| {
            egui::Grid::new("leave_form_grid")
                .num_columns(2)
                .spacing(egui::vec2(12.0, 14.0))
                .show(ui, |ui| {
                    muted(ui, "学生");
                    ui.label(egui::RichText::new(&student).strong().color(colors::TEXT_PRIMARY));
                    ui.end_row();

                    muted(ui, "请假日期");
                    ui.add(DatePickerButton::new(&mut self.leave_form.date).id_source("leave_date"));
                    ui.end_row();

                    muted(ui, "请假类型");
                    ui.horizontal(|ui| {
                        for leave_type in LeaveType::ALL {
                            ui.selectable_value(
                                &mut self.leave_form.leave_type,
                                leave_type,
                                leave_type.label(),
                            );
                        }
                    });
                    ui.end_row();
                });

            ui.add_space(8.0);
            muted(ui, "请假原因");
            ui.add(
                egui::TextEdit::multiline(&mut self.leave_form.reason)
                    .hint_text("请输入请假原因")
                    .desired_rows(4)
                    .desired_width(f32::INFINITY),
            );

            if let Some(error) = &self.leave_form.error {
                ui.label(egui::RichText::new(error).size(12.0).color(colors::TEXT_DANGER));
            }

            ui.add_space(10.0);
            let button = egui::Button::new(
                egui::RichText::new("提交申请")
                    .size(15.0)
                    .color(colors::TEXT_WHITE),
            )
            .fill(if self.leave_form.can_submit() {
                colors::ACTIVE_BACKGROUND
            } else {
                colors::DISABLED_BACKGROUND
            })
            .rounding(egui::Rounding::same(10.0))
            .min_size(egui::vec2(ui.available_width(), 40.0));
            submit = ui.add_enabled(self.leave_form.can_submit(), button).clicked();
        });

        if submit {
            let now = ui.ctx().input(|i| i.time);
            self.submit_leave_request(now);
        }
    }

    fn render_leave_history(&mut self, ui: &mut egui::Ui) {
        if self.core.data.leave_requests.is_empty() {
            empty_state(ui, "📅", "暂无申请记录");
            return;
        }
        for request in &self.core.data.leave_requests {
            render_leave_request(ui, request);
            ui.add_space(10.0);
        }
    }
}

fn render_leave_request(ui: &mut egui::Ui, request: &LeaveRequest) {
    card(ui, |ui| {
        ui.horizontal(|ui| {
            chip(ui, request.leave_type.label(), Tone::Info);
            ui.label(
                egui::RichText::new(&request.date)
                    .strong()
                    .color(colors::TEXT_PRIMARY),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                chip(ui, request.status.label(), Tone::from(request.status));
            });
        });
        ui.label(egui::RichText::new(&request.reason).color(colors::TEXT_SECONDARY));
        muted(ui, format!("申请时间: {}", request.created_on()));
        if let Some(reject_reason) = &request.reject_reason {
            ui.label(
                egui::RichText::new(format!("拒绝原因: {}", reject_reason))
                    .size(12.0)
                    .color(colors::TEXT_DANGER),
            );
        }
    });
}
