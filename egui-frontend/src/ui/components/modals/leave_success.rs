//! Confirmation overlay after a leave request is accepted. It stays up for
//! `SUCCESS_OVERLAY_SECS`, then the form resets and the history tab opens.

use std::time::Duration;

use eframe::egui;

use crate::ui::app_state::CompanionApp;
use crate::ui::components::theme::{colors, CURRENT_THEME};

impl CompanionApp {
    pub fn render_leave_success_overlay(&mut self, ctx: &egui::Context) {
        let now = ctx.input(|i| i.time);
        if self.leave_form.tick(now) {
            log::info!("📋 Showing leave history after submission");
            return;
        }

        let Some(remaining) = self.leave_form.success_remaining(now) else {
            return;
        };
        ctx.request_repaint_after(Duration::from_secs_f64(remaining));

        let screen = ctx.screen_rect();
        egui::Area::new(egui::Id::new("leave_success_overlay"))
            .order(egui::Order::Foreground)
            .fixed_pos(screen.min)
            .interactable(true)
            .show(ctx, |ui| {
                let (rect, _) = ui.allocate_exact_size(screen.size(), egui::Sense::click());
                ui.painter().rect_filled(
                    rect,
                    egui::Rounding::ZERO,
                    colors::OVERLAY_SCRIM.gamma_multiply(0.5),
                );

                let card = egui::Rect::from_center_size(rect.center(), egui::vec2(220.0, 150.0));
                crate::ui::components::styling::draw_card_container(ui, card, 16.0);
                let painter = ui.painter();
                painter.circle_filled(
                    card.center() - egui::vec2(0.0, 26.0),
                    22.0,
                    CURRENT_THEME.status.success_tint,
                );
                painter.text(
                    card.center() - egui::vec2(0.0, 26.0),
                    egui::Align2::CENTER_CENTER,
                    "✔",
                    egui::FontId::proportional(24.0),
                    CURRENT_THEME.status.success,
                );
                painter.text(
                    card.center() + egui::vec2(0.0, 18.0),
                    egui::Align2::CENTER_CENTER,
                    "申请已提交",
                    egui::FontId::proportional(17.0),
                    colors::TEXT_PRIMARY,
                );
                painter.text(
                    card.center() + egui::vec2(0.0, 44.0),
                    egui::Align2::CENTER_CENTER,
                    "请等待老师审批",
                    egui::FontId::proportional(13.0),
                    colors::TEXT_MUTED,
                );
            });
    }
}
