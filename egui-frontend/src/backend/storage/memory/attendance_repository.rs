use anyhow::Result;
use chrono::NaiveDate;
use std::sync::Arc;

use super::connection::MemoryConnection;
use crate::backend::domain::models::attendance::Attendance;
use crate::backend::storage::traits::AttendanceStorage;

#[derive(Clone)]
pub struct AttendanceRepository {
    connection: Arc<MemoryConnection>,
}

impl AttendanceRepository {
    pub fn new(connection: Arc<MemoryConnection>) -> Self {
        Self { connection }
    }
}

impl AttendanceStorage for AttendanceRepository {
    fn list_attendance(&self, child_id: &str) -> Result<Vec<Attendance>> {
        Ok(self.connection.attendance(child_id).to_vec())
    }

    fn get_attendance(&self, child_id: &str, date: NaiveDate) -> Result<Option<Attendance>> {
        Ok(self
            .connection
            .attendance(child_id)
            .iter()
            .find(|a| a.date == date)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::memory::test_utils::{date, TestHelper};

    #[test]
    fn test_get_attendance_by_date() {
        let helper = TestHelper::new();

        let record = helper
            .attendance_repo
            .get_attendance("c1", date(2026, 2, 25))
            .unwrap()
            .expect("demo attendance exists");
        assert_eq!(record.child_id, "c1");
        assert_eq!(record.check_in.unwrap().to_string(), "11:35:00");

        assert!(helper.attendance_repo.get_attendance("c1", date(2026, 2, 26)).unwrap().is_none());
        assert!(helper.attendance_repo.get_attendance("c2", date(2026, 2, 25)).unwrap().is_none());
    }
}
