//! Domain layer: models, command/result types and the services the UI calls.

pub mod attendance_service;
pub mod child_service;
pub mod clock_service;
pub mod commands;
pub mod daily_summary_service;
pub mod learning_service;
pub mod leave_service;
pub mod models;
pub mod notice_service;
pub mod recipe_service;

pub use attendance_service::AttendanceService;
pub use child_service::ChildService;
pub use clock_service::ClockService;
pub use daily_summary_service::{DailySummary, DailySummaryService};
pub use learning_service::LearningService;
pub use leave_service::LeaveService;
pub use notice_service::NoticeService;
pub use recipe_service::RecipeService;
