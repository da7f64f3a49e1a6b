use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use shared::{LeaveStatus, LeaveType};

/// Longest accepted leave reason, in characters
pub const MAX_REASON_CHARS: usize = 500;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequest {
    pub id: String,
    pub child_id: String,
    pub date: NaiveDate,
    pub leave_type: LeaveType,
    pub reason: String,
    pub status: LeaveStatus,
    pub reject_reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl LeaveRequest {
    pub fn generate_id() -> String {
        format!("leave::{}", uuid::Uuid::new_v4())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LeaveValidationError {
    #[error("Leave reason cannot be empty")]
    EmptyReason,
    #[error("Leave reason cannot exceed {MAX_REASON_CHARS} characters")]
    ReasonTooLong,
    #[error("Unknown child: {0}")]
    UnknownChild(String),
}
