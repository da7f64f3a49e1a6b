use anyhow::Result;
use chrono::NaiveDate;
use log::info;
use std::sync::Arc;

use crate::backend::domain::models::attendance::Attendance;
use crate::backend::storage::memory::{AttendanceRepository, MemoryConnection};
use crate::backend::storage::traits::AttendanceStorage;

/// Check-in and check-out records of the center
#[derive(Clone)]
pub struct AttendanceService {
    attendance_repository: AttendanceRepository,
}

impl AttendanceService {
    pub fn new(connection: Arc<MemoryConnection>) -> Self {
        let attendance_repository = AttendanceRepository::new(connection);
        Self { attendance_repository }
    }

    /// Attendance of one child on one day
    pub fn get_attendance(&self, child_id: &str, date: NaiveDate) -> Result<Option<Attendance>> {
        let attendance = self.attendance_repository.get_attendance(child_id, date)?;
        info!(
            "🕒 Attendance for child {} on {}: {}",
            child_id,
            date,
            if attendance.is_some() { "found" } else { "none" }
        );
        Ok(attendance)
    }

    /// Full attendance history of a child, most recent first
    pub fn list_attendance(&self, child_id: &str) -> Result<Vec<Attendance>> {
        let mut records = self.attendance_repository.list_attendance(child_id)?;
        records.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::memory::test_utils::date;
    use chrono::NaiveTime;

    #[test]
    fn test_get_attendance() {
        let service = AttendanceService::new(Arc::new(MemoryConnection::demo().unwrap()));

        let record = service.get_attendance("c1", date(2026, 2, 25)).unwrap().unwrap();
        assert_eq!(record.check_in, NaiveTime::from_hms_opt(11, 35, 0));
        assert_eq!(record.check_out, NaiveTime::from_hms_opt(18, 30, 0));

        assert!(service.get_attendance("c1", date(2026, 2, 26)).unwrap().is_none());
        assert!(service.get_attendance("c2", date(2026, 2, 25)).unwrap().is_none());
        assert!(service.list_attendance("c2").unwrap().is_empty());
    }
}
