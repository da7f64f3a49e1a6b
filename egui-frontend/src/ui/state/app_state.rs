//! # Core Application State
//!
//! The "business state" of the app: backend handle, configuration, the
//! selected child and the data the screens render, already mapped to DTOs.

use chrono::NaiveDate;
use shared::*;

use crate::backend::Backend;
use crate::config::AppConfig;

/// Everything the screens show for the active child.
///
/// Refreshed when the active child changes and after a leave submission; the
/// screens read it every frame without touching the backend.
#[derive(Debug, Clone, Default)]
pub struct ScreenData {
    pub summary: Option<DailySummary>,
    pub homeworks: Vec<Homework>,
    /// Most recent first
    pub reviews: Vec<Review>,
    /// Most recent first
    pub mistakes: Vec<Mistake>,
    pub recipe: Option<Recipe>,
    pub notices: Vec<Notice>,
    /// Most recent first
    pub leave_requests: Vec<LeaveRequest>,
}

pub struct CoreAppState {
    pub backend: Backend,
    pub config: AppConfig,

    /// "Today" as resolved once at startup
    pub today: NaiveDate,

    pub children: Vec<Child>,
    pub current_child: Option<Child>,

    pub data: ScreenData,
}

impl CoreAppState {
    pub fn new(backend: Backend, config: AppConfig) -> Self {
        let today = backend.clock_service.today();
        Self {
            backend,
            config,
            today,
            children: Vec::new(),
            current_child: None,
            data: ScreenData::default(),
        }
    }

    /// `YYYY-MM-DD` form of today, as the DTOs carry dates
    pub fn today_string(&self) -> String {
        self.today.to_string()
    }
}
