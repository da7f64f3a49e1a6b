//! # Leave Service
//!
//! Parents apply for a child's absence here. Submitted requests go straight
//! into the append-only store in `pending` status; approval happens on the
//! teacher's side and never through this app.

use anyhow::Result;
use chrono::Utc;
use log::{info, warn};
use shared::LeaveStatus;
use std::sync::Arc;

use crate::backend::domain::child_service::ChildService;
use crate::backend::domain::commands::leave::{
    ListLeaveRequestsResult, SubmitLeaveRequestCommand, SubmitLeaveRequestResult,
};
use crate::backend::domain::models::child::ChildSelectionError;
use crate::backend::domain::models::leave_request::{
    LeaveRequest, LeaveValidationError, MAX_REASON_CHARS,
};
use crate::backend::storage::memory::{LeaveRequestRepository, MemoryConnection};
use crate::backend::storage::traits::LeaveRequestStorage;

#[derive(Clone)]
pub struct LeaveService {
    leave_request_repository: LeaveRequestRepository,
    child_service: ChildService,
}

impl LeaveService {
    pub fn new(connection: Arc<MemoryConnection>, child_service: ChildService) -> Self {
        let leave_request_repository = LeaveRequestRepository::new(connection);
        Self {
            leave_request_repository,
            child_service,
        }
    }

    /// Validate and store a new leave request.
    ///
    /// A rejected request leaves the store untouched.
    pub fn submit_leave_request(
        &self,
        command: SubmitLeaveRequestCommand,
    ) -> Result<SubmitLeaveRequestResult> {
        info!(
            "📝 Submitting {} request for child {} on {}",
            command.leave_type.label(),
            command.child_id,
            command.date
        );

        let reason = Self::validate_reason(&command.reason)?;

        if let Err(e) = self.child_service.ensure_child_exists(&command.child_id) {
            if e.downcast_ref::<ChildSelectionError>().is_none() {
                return Err(e);
            }
            warn!("Rejecting leave request: {}", e);
            return Err(LeaveValidationError::UnknownChild(command.child_id).into());
        }

        let leave_request = LeaveRequest {
            id: LeaveRequest::generate_id(),
            child_id: command.child_id,
            date: command.date,
            leave_type: command.leave_type,
            reason,
            status: LeaveStatus::Pending,
            reject_reason: None,
            created_at: Utc::now(),
        };

        self.leave_request_repository
            .append_leave_request(&leave_request)?;

        info!("✅ Stored leave request {}", leave_request.id);

        Ok(SubmitLeaveRequestResult { leave_request })
    }

    /// Leave history of a child, most recent submission first
    pub fn list_leave_requests(&self, child_id: &str) -> Result<ListLeaveRequestsResult> {
        let leave_requests = self.leave_request_repository.list_leave_requests(child_id)?;
        info!("📋 {} leave requests for child {}", leave_requests.len(), child_id);
        Ok(ListLeaveRequestsResult { leave_requests })
    }

    /// Trimmed reason, or the validation error that rejects it
    pub fn validate_reason(reason: &str) -> Result<String, LeaveValidationError> {
        let trimmed = reason.trim();
        if trimmed.is_empty() {
            return Err(LeaveValidationError::EmptyReason);
        }
        if trimmed.chars().count() > MAX_REASON_CHARS {
            return Err(LeaveValidationError::ReasonTooLong);
        }
        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::memory::test_utils::date;
    use shared::LeaveType;

    fn create_test_service() -> LeaveService {
        let connection = Arc::new(MemoryConnection::demo().unwrap());
        let child_service = ChildService::new(connection.clone());
        LeaveService::new(connection, child_service)
    }

    fn command(child_id: &str, reason: &str) -> SubmitLeaveRequestCommand {
        SubmitLeaveRequestCommand {
            child_id: child_id.to_string(),
            date: date(2026, 2, 26),
            leave_type: LeaveType::Sick,
            reason: reason.to_string(),
        }
    }

    fn validation_error(err: &anyhow::Error) -> Option<&LeaveValidationError> {
        err.downcast_ref::<LeaveValidationError>()
    }

    #[test]
    fn test_submit_appends_one_pending_request() {
        let service = create_test_service();

        let result = service
            .submit_leave_request(command("c1", "  发烧，需要在家休息  "))
            .unwrap();

        let stored = result.leave_request;
        assert!(stored.id.starts_with("leave::"));
        assert_eq!(stored.status, LeaveStatus::Pending);
        assert_eq!(stored.reason, "发烧，需要在家休息");
        assert!(stored.reject_reason.is_none());

        let history = service.list_leave_requests("c1").unwrap().leave_requests;
        assert_eq!(history, vec![stored]);
    }

    #[test]
    fn test_blank_reason_is_a_no_op() {
        let service = create_test_service();

        for reason in ["", "   ", "\n\t"] {
            let err = service.submit_leave_request(command("c1", reason)).unwrap_err();
            assert_eq!(validation_error(&err), Some(&LeaveValidationError::EmptyReason));
        }

        assert!(service.list_leave_requests("c1").unwrap().leave_requests.is_empty());
    }

    #[test]
    fn test_overlong_reason_is_rejected() {
        let service = create_test_service();

        let reason = "病".repeat(MAX_REASON_CHARS + 1);
        let err = service.submit_leave_request(command("c1", &reason)).unwrap_err();
        assert_eq!(validation_error(&err), Some(&LeaveValidationError::ReasonTooLong));

        let exactly_max = "病".repeat(MAX_REASON_CHARS);
        assert!(service.submit_leave_request(command("c1", &exactly_max)).is_ok());
    }

    #[test]
    fn test_unknown_child_is_rejected() {
        let service = create_test_service();

        let err = service.submit_leave_request(command("ghost", "有事")).unwrap_err();
        assert_eq!(
            validation_error(&err),
            Some(&LeaveValidationError::UnknownChild("ghost".to_string()))
        );
        assert!(service.list_leave_requests("ghost").unwrap().leave_requests.is_empty());
    }

    #[test]
    fn test_history_is_newest_first_and_per_child() {
        let service = create_test_service();

        let first = service.submit_leave_request(command("c1", "第一次")).unwrap();
        let second = service.submit_leave_request(command("c1", "第二次")).unwrap();
        service.submit_leave_request(command("c2", "小宝请假")).unwrap();

        let history = service.list_leave_requests("c1").unwrap().leave_requests;
        let ids: Vec<_> = history.iter().map(|r| r.id.clone()).collect();
        assert_eq!(ids, vec![second.leave_request.id, first.leave_request.id]);

        let other = service.list_leave_requests("c2").unwrap().leave_requests;
        assert_eq!(other.len(), 1);
        assert_eq!(other[0].reason, "小宝请假");
    }
}
