//! # Screens
//!
//! One module per screen, each an `impl CompanionApp` block with a
//! `render_*_screen` entry point called by the view router.
//!
//! Screens read only `core.data` (DTOs) and the form/tab state; backend calls
//! go through the data loading component.

pub mod home;
pub mod learning;
pub mod leave;
pub mod mine;
pub mod mistake;
pub mod recipe;
pub mod review;

use crate::ui::components::theme::Tone;

/// Badge color of a school subject
pub fn subject_tone(subject: &str) -> Tone {
    match subject {
        "数学" => Tone::Info,
        "英语" => Tone::Success,
        _ => Tone::Warning,
    }
}

/// Text shown when an optional time is missing
pub const MISSING_TIME: &str = "--:--";

/// Text shown when there is no rating yet
pub const MISSING_RATING: &str = "待评";
