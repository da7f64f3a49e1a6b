//! Append-only leave request storage.

use anyhow::Result;
use log::debug;
use std::sync::Arc;

use super::connection::MemoryConnection;
use crate::backend::domain::models::leave_request::LeaveRequest;
use crate::backend::storage::traits::LeaveRequestStorage;

#[derive(Clone)]
pub struct LeaveRequestRepository {
    connection: Arc<MemoryConnection>,
}

impl LeaveRequestRepository {
    pub fn new(connection: Arc<MemoryConnection>) -> Self {
        Self { connection }
    }
}

impl LeaveRequestStorage for LeaveRequestRepository {
    fn append_leave_request(&self, request: &LeaveRequest) -> Result<()> {
        let mut requests = self.connection.leave_requests_mut()?;
        // Newest first, so history reads need no sorting
        requests.insert(0, request.clone());
        debug!("Stored leave request {} ({} total)", request.id, requests.len());
        Ok(())
    }

    fn list_leave_requests(&self, child_id: &str) -> Result<Vec<LeaveRequest>> {
        Ok(self
            .connection
            .leave_requests()?
            .iter()
            .filter(|r| r.child_id == child_id)
            .cloned()
            .collect())
    }
}
