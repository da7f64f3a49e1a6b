//! # Learning Service
//!
//! Read access to a child's learning records: homework assignments, mistake
//! book entries and teacher reviews. Every query is scoped to one child; a
//! child without records simply yields empty lists.

use anyhow::Result;
use chrono::NaiveDate;
use log::info;
use std::sync::Arc;

use crate::backend::domain::commands::learning::HomeworkProgress;
use crate::backend::domain::models::homework::Homework;
use crate::backend::domain::models::mistake::Mistake;
use crate::backend::domain::models::review::Review;
use crate::backend::storage::memory::{LearningRepository, MemoryConnection};
use crate::backend::storage::traits::{HomeworkStorage, MistakeStorage, ReviewStorage};

#[derive(Clone)]
pub struct LearningService {
    learning_repository: LearningRepository,
}

impl LearningService {
    pub fn new(connection: Arc<MemoryConnection>) -> Self {
        let learning_repository = LearningRepository::new(connection);
        Self { learning_repository }
    }

    /// All homework of a child in assignment order
    pub fn list_homeworks(&self, child_id: &str) -> Result<Vec<Homework>> {
        let homeworks = self.learning_repository.list_homeworks(child_id)?;
        info!("📚 {} homework records for child {}", homeworks.len(), child_id);
        Ok(homeworks)
    }

    /// Homework assigned on one day
    pub fn list_homeworks_on(&self, child_id: &str, date: NaiveDate) -> Result<Vec<Homework>> {
        Ok(self
            .list_homeworks(child_id)?
            .into_iter()
            .filter(|h| h.date == date)
            .collect())
    }

    /// Completed vs. total homework assigned on one day
    pub fn homework_progress(&self, child_id: &str, date: NaiveDate) -> Result<HomeworkProgress> {
        let homeworks = self.list_homeworks_on(child_id, date)?;
        Ok(HomeworkProgress {
            completed: homeworks.iter().filter(|h| h.is_completed()).count(),
            total: homeworks.len(),
        })
    }

    /// Mistake book of a child, most recent first
    pub fn list_mistakes(&self, child_id: &str) -> Result<Vec<Mistake>> {
        let mut mistakes = self.learning_repository.list_mistakes(child_id)?;
        // Stable sort keeps seed order within a day
        mistakes.sort_by(|a, b| b.date.cmp(&a.date));
        info!("📕 {} mistakes for child {}", mistakes.len(), child_id);
        Ok(mistakes)
    }

    pub fn list_mistakes_on(&self, child_id: &str, date: NaiveDate) -> Result<Vec<Mistake>> {
        Ok(self
            .list_mistakes(child_id)?
            .into_iter()
            .filter(|m| m.date == date)
            .collect())
    }

    /// Reviews of a child, most recent first
    pub fn list_reviews(&self, child_id: &str) -> Result<Vec<Review>> {
        let mut reviews = self.learning_repository.list_reviews(child_id)?;
        reviews.sort_by(|a, b| b.date.cmp(&a.date));
        info!("📝 {} reviews for child {}", reviews.len(), child_id);
        Ok(reviews)
    }

    pub fn latest_review(&self, child_id: &str) -> Result<Option<Review>> {
        Ok(self.list_reviews(child_id)?.into_iter().next())
    }

    /// Review written for one day, if any
    pub fn review_on(&self, child_id: &str, date: NaiveDate) -> Result<Option<Review>> {
        Ok(self
            .list_reviews(child_id)?
            .into_iter()
            .find(|r| r.date == date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::memory::test_utils::{
        date, sample_child, sample_mistake, sample_review,
    };
    use crate::backend::storage::memory::SeedData;
    use shared::OverallRating;

    fn create_test_service() -> LearningService {
        LearningService::new(Arc::new(MemoryConnection::demo().unwrap()))
    }

    #[test]
    fn test_homework_progress_for_demo_day() {
        let service = create_test_service();

        let progress = service.homework_progress("c1", date(2026, 2, 25)).unwrap();
        assert_eq!(progress, HomeworkProgress { completed: 2, total: 3 });

        let other_day = service.homework_progress("c1", date(2026, 2, 24)).unwrap();
        assert_eq!(other_day, HomeworkProgress::default());
    }

    #[test]
    fn test_child_without_records_gets_empty_lists() {
        let service = create_test_service();

        assert!(service.list_homeworks("c2").unwrap().is_empty());
        assert!(service.list_mistakes("c2").unwrap().is_empty());
        assert!(service.latest_review("c2").unwrap().is_none());
        assert_eq!(
            service.homework_progress("c2", date(2026, 2, 25)).unwrap(),
            HomeworkProgress { completed: 0, total: 0 }
        );
    }

    #[test]
    fn test_mistakes_and_reviews_newest_first() {
        let seed = SeedData {
            children: vec![sample_child("k", "测试")],
            mistakes: vec![
                sample_mistake("old", "k", date(2026, 1, 5)),
                sample_mistake("new", "k", date(2026, 2, 5)),
            ],
            reviews: vec![
                sample_review("r-old", "k", date(2026, 1, 5), OverallRating::Fair),
                sample_review("r-new", "k", date(2026, 2, 5), OverallRating::Excellent),
            ],
            ..SeedData::default()
        };
        let service = LearningService::new(Arc::new(MemoryConnection::new(seed).unwrap()));

        let mistakes = service.list_mistakes("k").unwrap();
        assert_eq!(mistakes[0].id, "new");
        assert_eq!(service.list_mistakes_on("k", date(2026, 1, 5)).unwrap().len(), 1);

        assert_eq!(service.latest_review("k").unwrap().unwrap().id, "r-new");
        assert_eq!(
            service.review_on("k", date(2026, 1, 5)).unwrap().unwrap().overall_rating,
            OverallRating::Fair
        );
        assert!(service.review_on("k", date(2026, 3, 1)).unwrap().is_none());
    }
}
