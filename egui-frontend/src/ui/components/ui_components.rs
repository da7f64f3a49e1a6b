//! # UI Components Module
//!
//! Reusable drawing helpers shared by the screens.
//!
//! ## Key Functions:
//! - `card()` - White rounded card around arbitrary content
//! - `section_title()` - Section heading with an optional trailing link
//! - `chip()` - Small colored label for statuses, tags and ratings
//! - `back_bar()` - Title bar of secondary screens
//! - `tab_switcher()` - Segmented control over a small enum
//! - `empty_state()` - Centered placeholder when a list has nothing to show
//! - `image_placeholder()` - Clickable box standing in for a remote image
//! - `avatar_circle()` - Initial-in-a-circle avatar

use eframe::egui;

use crate::ui::components::theme::{colors, status_chip_colors, Tone};

pub const CARD_ROUNDING: f32 = 12.0;

pub fn card<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
    egui::Frame::none()
        .fill(colors::CARD_BACKGROUND)
        .rounding(egui::Rounding::same(CARD_ROUNDING))
        .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
        .shadow(egui::epaint::Shadow {
            offset: egui::vec2(0.0, 2.0),
            blur: 6.0,
            spread: 0.0,
            color: colors::CARD_SHADOW,
        })
        .inner_margin(egui::Margin::same(14.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui)
        })
        .inner
}

/// Heading of a card section. Returns true when the trailing link is clicked.
pub fn section_title(ui: &mut egui::Ui, title: &str, link: Option<&str>) -> bool {
    let mut clicked = false;
    ui.horizontal(|ui| {
        ui.add(
            egui::Label::new(
                egui::RichText::new(title)
                    .size(16.0)
                    .strong()
                    .color(colors::TEXT_PRIMARY),
            )
            .selectable(false),
        );
        if let Some(link) = link {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let response = ui.add(
                    egui::Label::new(
                        egui::RichText::new(format!("{} ›", link))
                            .size(12.0)
                            .color(colors::TEXT_MUTED),
                    )
                    .sense(egui::Sense::click())
                    .selectable(false),
                );
                clicked = response.clicked();
            });
        }
    });
    clicked
}

pub fn chip(ui: &mut egui::Ui, text: &str, tone: Tone) -> egui::Response {
    let (text_color, fill) = status_chip_colors(tone);
    egui::Frame::none()
        .fill(fill)
        .rounding(egui::Rounding::same(6.0))
        .inner_margin(egui::Margin::symmetric(6.0, 2.0))
        .show(ui, |ui| {
            ui.add(
                egui::Label::new(egui::RichText::new(text).size(11.0).color(text_color))
                    .selectable(false),
            );
        })
        .response
}

/// Title bar of a secondary screen. Returns true when back is clicked.
pub fn back_bar(ui: &mut egui::Ui, title: &str) -> bool {
    let mut back = false;
    egui::Frame::none()
        .fill(colors::CARD_BACKGROUND)
        .inner_margin(egui::Margin::symmetric(12.0, 10.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                back = ui
                    .add(egui::Button::new(egui::RichText::new("‹").size(22.0)).frame(false))
                    .on_hover_text("返回首页")
                    .clicked();
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(title)
                            .size(17.0)
                            .strong()
                            .color(colors::TEXT_PRIMARY),
                    )
                    .selectable(false),
                );
            });
        });
    back
}

/// Segmented control. Returns true when the selection changed.
pub fn tab_switcher<T: Copy + PartialEq>(
    ui: &mut egui::Ui,
    current: &mut T,
    options: &[(T, &str)],
) -> bool {
    let mut changed = false;
    egui::Frame::none()
        .fill(colors::INACTIVE_BACKGROUND)
        .rounding(egui::Rounding::same(10.0))
        .inner_margin(egui::Margin::same(3.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            let width = (ui.available_width() - 4.0 * (options.len() as f32 - 1.0).max(0.0))
                / options.len().max(1) as f32;
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 4.0;
                for (value, label) in options {
                    let selected = *current == *value;
                    let button = egui::Button::new(egui::RichText::new(*label).color(if selected {
                        colors::ACTIVE_BACKGROUND
                    } else {
                        colors::TEXT_SECONDARY
                    }))
                    .min_size(egui::vec2(width, 30.0))
                    .rounding(egui::Rounding::same(8.0))
                    .fill(if selected {
                        colors::CARD_BACKGROUND
                    } else {
                        egui::Color32::TRANSPARENT
                    })
                    .stroke(egui::Stroke::NONE);

                    if ui.add(button).clicked() && !selected {
                        *current = *value;
                        changed = true;
                    }
                }
            });
        });
    changed
}

pub fn empty_state(ui: &mut egui::Ui, icon: &str, message: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.label(egui::RichText::new(icon).size(40.0).color(colors::TEXT_MUTED));
        ui.add_space(8.0);
        ui.label(egui::RichText::new(message).color(colors::TEXT_MUTED));
        ui.add_space(40.0);
    });
}

/// Box standing in for a remote image. Images are never fetched; the
/// reference is shown on hover and in the preview.
pub fn image_placeholder(
    ui: &mut egui::Ui,
    size: egui::Vec2,
    label: &str,
    image_ref: &str,
) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
    let fill = if response.hovered() {
        colors::HOVER_BACKGROUND
    } else {
        colors::PLACEHOLDER
    };
    let painter = ui.painter();
    painter.rect_filled(rect, egui::Rounding::same(8.0), fill);
    painter.text(
        rect.center() - egui::vec2(0.0, 8.0),
        egui::Align2::CENTER_CENTER,
        "🖼",
        egui::FontId::proportional((size.y * 0.3).clamp(12.0, 28.0)),
        colors::TEXT_MUTED,
    );
    painter.text(
        rect.center() + egui::vec2(0.0, size.y * 0.2),
        egui::Align2::CENTER_CENTER,
        label,
        egui::FontId::proportional(11.0),
        colors::TEXT_MUTED,
    );
    if response.hovered() {
        ui.ctx()
            .output_mut(|o| o.cursor_icon = egui::CursorIcon::PointingHand);
    }
    response.on_hover_text(image_ref)
}

pub fn avatar_circle(ui: &mut egui::Ui, initial: &str, radius: f32) -> egui::Response {
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(radius * 2.0, radius * 2.0), egui::Sense::hover());
    let painter = ui.painter();
    painter.circle_filled(rect.center(), radius, colors::ACTIVE_TINT);
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        initial,
        egui::FontId::proportional(radius),
        colors::ACTIVE_BACKGROUND,
    );
    response
}

/// Label with muted color for secondary information
pub fn muted(ui: &mut egui::Ui, text: impl Into<String>) {
    ui.label(
        egui::RichText::new(text.into())
            .size(12.0)
            .color(colors::TEXT_MUTED),
    );
}
