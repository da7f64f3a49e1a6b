//! Homework, mistake and review lookups. All three collections are
//! partitioned by child, so each query is a single keyed read.

use anyhow::Result;
use std::sync::Arc;

use super::connection::MemoryConnection;
use crate::backend::domain::models::homework::Homework;
use crate::backend::domain::models::mistake::Mistake;
use crate::backend::domain::models::review::Review;
use crate::backend::storage::traits::{HomeworkStorage, MistakeStorage, ReviewStorage};

#[derive(Clone)]
pub struct LearningRepository {
    connection: Arc<MemoryConnection>,
}

impl LearningRepository {
    pub fn new(connection: Arc<MemoryConnection>) -> Self {
        Self { connection }
    }
}

impl HomeworkStorage for LearningRepository {
    fn list_homeworks(&self, child_id: &str) -> Result<Vec<Homework>> {
        Ok(self.connection.homeworks(child_id).to_vec())
    }
}

impl MistakeStorage for LearningRepository {
    fn list_mistakes(&self, child_id: &str) -> Result<Vec<Mistake>> {
        Ok(self.connection.mistakes(child_id).to_vec())
    }
}

impl ReviewStorage for LearningRepository {
    fn list_reviews(&self, child_id: &str) -> Result<Vec<Review>> {
        Ok(self.connection.reviews(child_id).to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::memory::test_utils::TestHelper;

    #[test]
    fn test_queries_only_return_records_of_that_child() {
        let helper = TestHelper::with_second_child_records();

        for child_id in ["c1", "c2"] {
            let homeworks = helper.learning_repo.list_homeworks(child_id).unwrap();
            let mistakes = helper.learning_repo.list_mistakes(child_id).unwrap();
            let reviews = helper.learning_repo.list_reviews(child_id).unwrap();

            assert!(!homeworks.is_empty());
            assert!(homeworks.iter().all(|h| h.child_id == child_id));
            assert!(mistakes.iter().all(|m| m.child_id == child_id));
            assert!(reviews.iter().all(|r| r.child_id == child_id));
        }
    }

    #[test]
    fn test_child_without_records_gets_empty_lists() {
        let helper = TestHelper::new();

        assert!(helper.learning_repo.list_homeworks("c2").unwrap().is_empty());
        assert!(helper.learning_repo.list_mistakes("c2").unwrap().is_empty());
        assert!(helper.learning_repo.list_reviews("unknown").unwrap().is_empty());
    }
}
