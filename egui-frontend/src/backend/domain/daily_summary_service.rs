use anyhow::Result;
use chrono::NaiveDate;
use log::info;
use shared::OverallRating;

use crate::backend::domain::attendance_service::AttendanceService;
use crate::backend::domain::learning_service::LearningService;
use crate::backend::domain::models::attendance::Attendance;

/// What happened for one child on one day, as shown on the home screen
#[derive(Debug, Clone, PartialEq)]
pub struct DailySummary {
    pub child_id: String,
    pub date: NaiveDate,
    pub attendance: Option<Attendance>,
    pub homework_completed: usize,
    pub homework_total: usize,
    pub latest_rating: Option<OverallRating>,
    pub mistake_count: usize,
}

/// Aggregates the per-child services into the home screen's day card
#[derive(Clone)]
pub struct DailySummaryService {
    attendance_service: AttendanceService,
    learning_service: LearningService,
}

impl DailySummaryService {
    pub fn new(attendance_service: AttendanceService, learning_service: LearningService) -> Self {
        Self {
            attendance_service,
            learning_service,
        }
    }

    pub fn get_daily_summary(&self, child_id: &str, date: NaiveDate) -> Result<DailySummary> {
        let attendance = self.attendance_service.get_attendance(child_id, date)?;
        let progress = self.learning_service.homework_progress(child_id, date)?;
        let latest_rating = self
            .learning_service
            .review_on(child_id, date)?
            .map(|r| r.overall_rating);
        let mistake_count = self.learning_service.list_mistakes_on(child_id, date)?.len();

        info!(
            "📊 Summary for {} on {}: homework {}/{}, {} mistakes",
            child_id, date, progress.completed, progress.total, mistake_count
        );

        Ok(DailySummary {
            child_id: child_id.to_string(),
            date,
            attendance,
            homework_completed: progress.completed,
            homework_total: progress.total,
            latest_rating,
            mistake_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::memory::test_utils::date;
    use crate::backend::storage::memory::MemoryConnection;
    use std::sync::Arc;

    fn create_test_service() -> DailySummaryService {
        let connection = Arc::new(MemoryConnection::demo().unwrap());
        DailySummaryService::new(
            AttendanceService::new(connection.clone()),
            LearningService::new(connection),
        )
    }

    #[test]
    fn test_demo_day_summary() {
        let service = create_test_service();

        let summary = service.get_daily_summary("c1", date(2026, 2, 25)).unwrap();
        assert!(summary.attendance.is_some());
        assert_eq!(summary.homework_completed, 2);
        assert_eq!(summary.homework_total, 3);
        assert_eq!(summary.latest_rating, Some(OverallRating::Excellent));
        assert_eq!(summary.mistake_count, 2);
    }

    #[test]
    fn test_quiet_day_summary() {
        let service = create_test_service();

        for (child, day) in [("c2", date(2026, 2, 25)), ("c1", date(2026, 2, 26))] {
            let summary = service.get_daily_summary(child, day).unwrap();
            assert!(summary.attendance.is_none());
            assert_eq!(summary.homework_total, 0);
            assert!(summary.latest_rating.is_none());
            assert_eq!(summary.mistake_count, 0);
        }
    }
}
