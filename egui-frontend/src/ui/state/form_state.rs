//! # Form State Module
//!
//! State of the leave application form and the tab switchers of the
//! Learning and Leave screens.
//!
//! The success overlay is timed against egui's input clock (`InputState::time`,
//! seconds as `f64`), passed in by the caller so the expiry can be tested
//! without a window.

use chrono::NaiveDate;
use log::info;
use shared::LeaveType;

/// How long the "申请已提交" overlay stays up, in seconds
pub const SUCCESS_OVERLAY_SECS: f64 = 1.5;

/// Tabs of the Learning screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LearningTab {
    /// Records dated today
    #[default]
    Today,
    /// Every record
    History,
}

impl LearningTab {
    pub fn label(&self) -> &'static str {
        match self {
            LearningTab::Today => "今日学情",
            LearningTab::History => "历史记录",
        }
    }
}

/// Tabs of the Leave screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LeaveTab {
    #[default]
    Apply,
    History,
}

impl LeaveTab {
    pub fn label(&self) -> &'static str {
        match self {
            LeaveTab::Apply => "申请请假",
            LeaveTab::History => "申请记录",
        }
    }
}

#[derive(Debug, Clone)]
pub struct LeaveFormState {
    pub date: NaiveDate,
    pub leave_type: LeaveType,
    pub reason: String,
    pub tab: LeaveTab,
    /// Rejection message of the last submit attempt
    pub error: Option<String>,
    success_shown_at: Option<f64>,
}

impl LeaveFormState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            date: today,
            leave_type: LeaveType::default(),
            reason: String::new(),
            tab: LeaveTab::Apply,
            error: None,
            success_shown_at: None,
        }
    }

    /// The submit button is disabled while the reason is blank
    pub fn can_submit(&self) -> bool {
        !self.reason.trim().is_empty() && self.success_shown_at.is_none()
    }

    pub fn show_success(&mut self, now: f64) {
        info!("✅ Leave request accepted, showing confirmation");
        self.error = None;
        self.success_shown_at = Some(now);
    }

    pub fn is_showing_success(&self) -> bool {
        self.success_shown_at.is_some()
    }

    /// Seconds until the overlay closes, if it is up
    pub fn success_remaining(&self, now: f64) -> Option<f64> {
        self.success_shown_at
            .map(|shown_at| (shown_at + SUCCESS_OVERLAY_SECS - now).max(0.0))
    }

    /// Close the overlay once it has been up long enough, clearing the reason
    /// and switching to the history tab. Returns true on the frame it closes.
    pub fn tick(&mut self, now: f64) -> bool {
        match self.success_shown_at {
            Some(shown_at) if now - shown_at >= SUCCESS_OVERLAY_SECS => {
                self.success_shown_at = None;
                self.reason.clear();
                self.tab = LeaveTab::History;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 25).unwrap()
    }

    #[test]
    fn test_defaults() {
        let form = LeaveFormState::new(today());
        assert_eq!(form.date, today());
        assert_eq!(form.leave_type, LeaveType::Sick);
        assert_eq!(form.tab, LeaveTab::Apply);
        assert!(!form.can_submit());
    }

    #[test]
    fn test_blank_reason_disables_submit() {
        let mut form = LeaveFormState::new(today());
        form.reason = "   ".to_string();
        assert!(!form.can_submit());
        form.reason = "发烧".to_string();
        assert!(form.can_submit());
    }

    #[test]
    fn test_overlay_expires_after_one_and_a_half_seconds() {
        let mut form = LeaveFormState::new(today());
        form.reason = "发烧".to_string();
        form.show_success(10.0);

        assert!(form.is_showing_success());
        assert!(!form.can_submit());
        assert!(!form.tick(11.0));
        assert_eq!(form.success_remaining(11.0), Some(0.5));
        assert_eq!(form.reason, "发烧");
        assert_eq!(form.tab, LeaveTab::Apply);

        assert!(form.tick(11.5));
        assert!(!form.is_showing_success());
        assert!(form.reason.is_empty());
        assert_eq!(form.tab, LeaveTab::History);

        // Already closed
        assert!(!form.tick(12.0));
    }

    #[test]
    fn test_tab_labels() {
        assert_eq!(LearningTab::Today.label(), "今日学情");
        assert_eq!(LeaveTab::History.label(), "申请记录");
    }
}
