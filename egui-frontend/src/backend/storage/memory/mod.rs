//! # Memory Storage
//!
//! In-process mock store backing every storage trait. One repository type per
//! concern, each a cheap handle onto the shared [`MemoryConnection`].

pub mod attendance_repository;
pub mod child_repository;
pub mod connection;
pub mod leave_request_repository;
pub mod learning_repository;
pub mod notice_repository;
pub mod recipe_repository;
pub mod seed;

#[cfg(test)]
pub mod test_utils;

pub use attendance_repository::AttendanceRepository;
pub use child_repository::ChildRepository;
pub use connection::{MemoryConnection, SeedError};
pub use leave_request_repository::LeaveRequestRepository;
pub use learning_repository::LearningRepository;
pub use notice_repository::NoticeRepository;
pub use recipe_repository::RecipeRepository;
pub use seed::SeedData;
