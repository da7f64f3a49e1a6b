//! # Image Preview Modal
//!
//! Dark scrim with the selected image in the middle. Closed by the ✕ button,
//! a click outside the image, or Escape (handled by the coordinator).
//!
//! Images are not fetched, so the preview shows a large placeholder with the
//! image reference.

use eframe::egui;

use crate::ui::app_state::CompanionApp;
use crate::ui::components::theme::colors;

impl CompanionApp {
    pub fn render_image_preview(&mut self, ctx: &egui::Context) {
        let Some(image) = self.modal.image_preview.image().map(str::to_string) else {
            return;
        };

        let screen = ctx.screen_rect();
        let mut close = false;

        egui::Area::new(egui::Id::new("image_preview_scrim"))
            .order(egui::Order::Foreground)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                let (rect, scrim) = ui.allocate_exact_size(screen.size(), egui::Sense::click());
                ui.painter()
                    .rect_filled(rect, egui::Rounding::ZERO, colors::OVERLAY_SCRIM);

                let side = (screen.width() - 40.0).clamp(120.0, 360.0);
                let image_rect = egui::Rect::from_center_size(rect.center(), egui::vec2(side, side));
                ui.painter().rect_filled(
                    image_rect,
                    egui::Rounding::same(8.0),
                    colors::PLACEHOLDER,
                );
                ui.painter().text(
                    image_rect.center() - egui::vec2(0.0, 14.0),
                    egui::Align2::CENTER_CENTER,
                    "🖼",
                    egui::FontId::proportional(48.0),
                    colors::TEXT_MUTED,
                );
                ui.painter().text(
                    image_rect.center() + egui::vec2(0.0, 36.0),
                    egui::Align2::CENTER_CENTER,
                    &image,
                    egui::FontId::proportional(12.0),
                    colors::TEXT_SECONDARY,
                );

                let close_rect = egui::Rect::from_min_size(
                    egui::pos2(rect.right() - 52.0, rect.top() + 16.0),
                    egui::vec2(36.0, 36.0),
                );
                let close_button = ui.put(
                    close_rect,
                    egui::Button::new(
                        egui::RichText::new("✕")
                            .size(20.0)
                            .color(colors::TEXT_WHITE),
                    )
                    .frame(false),
                );

                let clicked_image = ctx.input(|i| {
                    i.pointer
                        .interact_pos()
                        .map(|pos| image_rect.contains(pos))
                        .unwrap_or(false)
                });
                if close_button.clicked() || (scrim.clicked() && !clicked_image) {
                    close = true;
                }
            });

        if close {
            self.modal.image_preview.close();
        }
    }
}
