//! # Storage Traits
//!
//! This module defines the storage abstraction traits that the domain
//! services depend on. The only implementation today is the in-memory mock
//! store in [`super::memory`], but services never name it directly.
//!
//! Note: All operations are synchronous for the desktop egui app

use anyhow::Result;
use chrono::NaiveDate;

use crate::backend::domain::models::attendance::Attendance;
use crate::backend::domain::models::child::Child;
use crate::backend::domain::models::homework::Homework;
use crate::backend::domain::models::leave_request::LeaveRequest;
use crate::backend::domain::models::mistake::Mistake;
use crate::backend::domain::models::notice::Notice;
use crate::backend::domain::models::recipe::Recipe;
use crate::backend::domain::models::review::Review;

/// Trait defining the interface for child storage operations
pub trait ChildStorage: Send + Sync {
    /// List all children in registration order
    fn list_children(&self) -> Result<Vec<Child>>;

    /// Retrieve a specific child by ID
    fn get_child(&self, child_id: &str) -> Result<Option<Child>>;

    /// Get the currently active child ID
    fn get_active_child_id(&self) -> Result<Option<String>>;

    /// Set the currently active child
    fn set_active_child_id(&self, child_id: &str) -> Result<()>;
}

/// Homework assignments, partitioned by child
pub trait HomeworkStorage: Send + Sync {
    fn list_homeworks(&self, child_id: &str) -> Result<Vec<Homework>>;
}

/// Mistake book entries, partitioned by child
pub trait MistakeStorage: Send + Sync {
    fn list_mistakes(&self, child_id: &str) -> Result<Vec<Mistake>>;
}

/// Teacher reviews, partitioned by child
pub trait ReviewStorage: Send + Sync {
    fn list_reviews(&self, child_id: &str) -> Result<Vec<Review>>;
}

/// Attendance records, partitioned by child
pub trait AttendanceStorage: Send + Sync {
    fn list_attendance(&self, child_id: &str) -> Result<Vec<Attendance>>;

    /// Attendance record of one child on one day
    fn get_attendance(&self, child_id: &str, date: NaiveDate) -> Result<Option<Attendance>>;
}

/// Daily menus published by the center
pub trait RecipeStorage: Send + Sync {
    fn list_recipes(&self) -> Result<Vec<Recipe>>;

    fn get_recipe(&self, date: NaiveDate) -> Result<Option<Recipe>>;
}

/// Institution announcements
pub trait NoticeStorage: Send + Sync {
    fn list_notices(&self) -> Result<Vec<Notice>>;
}

/// Parent-submitted leave requests. Append-only: records are never edited or
/// removed once stored.
pub trait LeaveRequestStorage: Send + Sync {
    fn append_leave_request(&self, request: &LeaveRequest) -> Result<()>;

    /// Leave requests of one child, most recent submission first
    fn list_leave_requests(&self, child_id: &str) -> Result<Vec<LeaveRequest>>;
}
