//! # Styling Module
//!
//! Global egui style and low-level drawing helpers.
//!
//! ## Key Functions:
//! - `setup_companion_style()` - Configure global egui styling
//! - `draw_page_background()` - Fill the page behind the screens
//! - `draw_card_container()` - Card background with a soft shadow

use eframe::egui;

use super::theme::{colors, CURRENT_THEME};

/// Setup the app-wide egui style
pub fn setup_companion_style(ctx: &egui::Context) {
    ctx.set_style({
        let mut style = (*ctx.style()).clone();

        style.visuals = egui::Visuals::light();
        style.visuals.panel_fill = colors::PAGE_BACKGROUND;
        style.visuals.window_fill = colors::CARD_BACKGROUND;
        // In egui 0.28, text edits use extreme_bg_color
        style.visuals.extreme_bg_color = CURRENT_THEME.interactive.inactive_background;
        style.visuals.selection.bg_fill = colors::ACTIVE_BACKGROUND;

        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(20.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(14.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::new(14.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Small,
            egui::FontId::new(11.0, egui::FontFamily::Proportional),
        );

        style.spacing.button_padding = egui::vec2(12.0, 6.0);
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.visuals.widgets.inactive.rounding = egui::Rounding::same(8.0);
        style.visuals.widgets.active.rounding = egui::Rounding::same(8.0);
        style.visuals.widgets.hovered.rounding = egui::Rounding::same(8.0);

        style
    });
}

pub fn draw_page_background(ui: &mut egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, egui::Rounding::ZERO, colors::PAGE_BACKGROUND);
}

/// Draw a card container with white background and shadow
pub fn draw_card_container(ui: &mut egui::Ui, rect: egui::Rect, rounding: f32) {
    let painter = ui.painter();

    let shadow_rect = egui::Rect::from_min_size(rect.min + egui::vec2(0.0, 2.0), rect.size());
    painter.rect_filled(shadow_rect, egui::Rounding::same(rounding), colors::CARD_SHADOW);
    painter.rect_filled(rect, egui::Rounding::same(rounding), colors::CARD_BACKGROUND);
    painter.rect_stroke(
        rect,
        egui::Rounding::same(rounding),
        egui::Stroke::new(1.0, colors::CARD_BORDER),
    );
}
