//! Domain-level command and query types
//! These structs are used by services inside the domain layer. The UI layer
//! builds commands from its form state and maps results to the DTOs defined
//! in the `shared` crate.

pub mod child {
    use crate::backend::domain::models::child::{ActiveChild, Child};

    /// Input for looking up a single child.
    #[derive(Debug, Clone)]
    pub struct GetChildCommand {
        pub child_id: String,
    }

    /// Input for switching the active child.
    #[derive(Debug, Clone)]
    pub struct SetActiveChildCommand {
        pub child_id: String,
    }

    #[derive(Debug, Clone)]
    pub struct GetChildResult {
        pub child: Option<Child>,
    }

    #[derive(Debug, Clone)]
    pub struct ListChildrenResult {
        pub children: Vec<Child>,
    }

    #[derive(Debug, Clone)]
    pub struct GetActiveChildResult {
        pub active_child: ActiveChild,
    }

    #[derive(Debug, Clone)]
    pub struct SetActiveChildResult {
        pub child: Child,
    }
}

pub mod learning {
    /// Completed vs. total homework for a child.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct HomeworkProgress {
        pub completed: usize,
        pub total: usize,
    }
}

pub mod leave {
    use chrono::NaiveDate;
    use shared::LeaveType;

    use crate::backend::domain::models::leave_request::LeaveRequest;

    /// Input for submitting a new leave request.
    #[derive(Debug, Clone)]
    pub struct SubmitLeaveRequestCommand {
        pub child_id: String,
        pub date: NaiveDate,
        pub leave_type: LeaveType,
        pub reason: String,
    }

    #[derive(Debug, Clone)]
    pub struct SubmitLeaveRequestResult {
        pub leave_request: LeaveRequest,
    }

    /// Leave requests of one child, most recent first.
    #[derive(Debug, Clone)]
    pub struct ListLeaveRequestsResult {
        pub leave_requests: Vec<LeaveRequest>,
    }
}
