//! # Theme Configuration
//!
//! Centralized colors for the companion app. All visual styling should use
//! these constants so the screens stay consistent.
//!
//! ## Usage
//! ```ignore
//! use crate::ui::components::theme::{colors, CURRENT_THEME};
//!
//! let color = CURRENT_THEME.interactive.active_background;
//! ```

use eframe::egui::Color32;

/// Main theme configuration structure
#[derive(Debug, Clone)]
pub struct Theme {
    /// Interactive element colors (buttons, tabs, navigation)
    pub interactive: InteractiveColors,
    /// Background and layout colors
    pub layout: LayoutColors,
    /// Text and typography colors
    pub typography: TypographyColors,
    /// Status chip colors
    pub status: StatusColors,
}

#[derive(Debug, Clone)]
pub struct InteractiveColors {
    /// Primary brand color (active tab, primary buttons)
    pub active_background: Color32,
    /// Light tint of the brand color (selected rows, soft chips)
    pub active_tint: Color32,
    pub inactive_background: Color32,
    pub hover_background: Color32,
    pub disabled_background: Color32,
}

#[derive(Debug, Clone)]
pub struct LayoutColors {
    pub page_background: Color32,
    pub card_background: Color32,
    pub card_shadow: Color32,
    pub card_border: Color32,
    pub placeholder_background: Color32,
    pub overlay_scrim: Color32,
}

#[derive(Debug, Clone)]
pub struct TypographyColors {
    pub primary: Color32,
    pub secondary: Color32,
    pub muted: Color32,
    pub white: Color32,
}

#[derive(Debug, Clone)]
pub struct StatusColors {
    pub success: Color32,
    pub success_tint: Color32,
    pub warning: Color32,
    pub warning_tint: Color32,
    pub danger: Color32,
    pub danger_tint: Color32,
    pub info: Color32,
    pub info_tint: Color32,
}

/// The current active theme - soft blue with warm status accents
pub const CURRENT_THEME: Theme = Theme {
    interactive: InteractiveColors {
        active_background: Color32::from_rgb(59, 130, 246),
        active_tint: Color32::from_rgb(239, 246, 255),
        inactive_background: Color32::from_rgb(243, 244, 246),
        hover_background: Color32::from_rgb(229, 231, 235),
        disabled_background: Color32::from_rgb(191, 219, 254),
    },
    layout: LayoutColors {
        page_background: Color32::from_rgb(248, 250, 252),
        card_background: Color32::WHITE,
        card_shadow: Color32::from_rgba_premultiplied(0, 0, 0, 12),
        card_border: Color32::from_rgb(241, 245, 249),
        placeholder_background: Color32::from_rgb(226, 232, 240),
        overlay_scrim: Color32::from_rgba_premultiplied(0, 0, 0, 200),
    },
    typography: TypographyColors {
        primary: Color32::from_rgb(31, 41, 55),
        secondary: Color32::from_rgb(75, 85, 99),
        muted: Color32::from_rgb(156, 163, 175),
        white: Color32::WHITE,
    },
    status: StatusColors {
        success: Color32::from_rgb(22, 163, 74),
        success_tint: Color32::from_rgb(220, 252, 231),
        warning: Color32::from_rgb(234, 88, 12),
        warning_tint: Color32::from_rgb(255, 237, 213),
        danger: Color32::from_rgb(220, 38, 38),
        danger_tint: Color32::from_rgb(254, 226, 226),
        info: Color32::from_rgb(37, 99, 235),
        info_tint: Color32::from_rgb(219, 234, 254),
    },
};

/// Convenience constants for the most commonly used colors
pub mod colors {
    use super::CURRENT_THEME;
    use eframe::egui::Color32;

    pub const ACTIVE_BACKGROUND: Color32 = CURRENT_THEME.interactive.active_background;
    pub const ACTIVE_TINT: Color32 = CURRENT_THEME.interactive.active_tint;
    pub const INACTIVE_BACKGROUND: Color32 = CURRENT_THEME.interactive.inactive_background;
    pub const HOVER_BACKGROUND: Color32 = CURRENT_THEME.interactive.hover_background;
    pub const DISABLED_BACKGROUND: Color32 = CURRENT_THEME.interactive.disabled_background;

    pub const TEXT_PRIMARY: Color32 = CURRENT_THEME.typography.primary;
    pub const TEXT_SECONDARY: Color32 = CURRENT_THEME.typography.secondary;
    pub const TEXT_MUTED: Color32 = CURRENT_THEME.typography.muted;
    pub const TEXT_WHITE: Color32 = CURRENT_THEME.typography.white;
    pub const TEXT_DANGER: Color32 = CURRENT_THEME.status.danger;

    pub const PAGE_BACKGROUND: Color32 = CURRENT_THEME.layout.page_background;
    pub const CARD_BACKGROUND: Color32 = CURRENT_THEME.layout.card_background;
    pub const CARD_SHADOW: Color32 = CURRENT_THEME.layout.card_shadow;
    pub const CARD_BORDER: Color32 = CURRENT_THEME.layout.card_border;
    pub const PLACEHOLDER: Color32 = CURRENT_THEME.layout.placeholder_background;
    pub const OVERLAY_SCRIM: Color32 = CURRENT_THEME.layout.overlay_scrim;
}

/// Text and fill color of a status chip
pub fn status_chip_colors(tone: Tone) -> (Color32, Color32) {
    let status = &CURRENT_THEME.status;
    match tone {
        Tone::Success => (status.success, status.success_tint),
        Tone::Warning => (status.warning, status.warning_tint),
        Tone::Danger => (status.danger, status.danger_tint),
        Tone::Info => (status.info, status.info_tint),
        Tone::Neutral => (colors::TEXT_SECONDARY, colors::INACTIVE_BACKGROUND),
    }
}

/// Semantic color of a chip or badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Danger,
    Info,
    Neutral,
}

impl From<shared::LeaveStatus> for Tone {
    fn from(status: shared::LeaveStatus) -> Self {
        match status {
            shared::LeaveStatus::Pending => Tone::Warning,
            shared::LeaveStatus::Approved => Tone::Success,
            shared::LeaveStatus::Rejected => Tone::Danger,
        }
    }
}

impl From<shared::OverallRating> for Tone {
    fn from(rating: shared::OverallRating) -> Self {
        match rating {
            shared::OverallRating::Excellent => Tone::Success,
            shared::OverallRating::Good => Tone::Info,
            shared::OverallRating::Fair => Tone::Neutral,
            shared::OverallRating::NeedsAttention => Tone::Danger,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{LeaveStatus, OverallRating};

    #[test]
    fn test_leave_status_tones() {
        assert_eq!(Tone::from(LeaveStatus::Pending), Tone::Warning);
        assert_eq!(Tone::from(LeaveStatus::Approved), Tone::Success);
        assert_eq!(Tone::from(LeaveStatus::Rejected), Tone::Danger);
        assert_eq!(Tone::from(OverallRating::Excellent), Tone::Success);
    }
}
