//! Test helpers for building a seeded store and its repositories

use chrono::{NaiveDate, Utc};
use shared::{HomeworkStatus, LeaveStatus, LeaveType, MistakeStatus, OverallRating};
use std::sync::Arc;

use super::*;
use crate::backend::domain::models::child::Child;
use crate::backend::domain::models::homework::Homework;
use crate::backend::domain::models::leave_request::LeaveRequest;
use crate::backend::domain::models::mistake::Mistake;
use crate::backend::domain::models::review::Review;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

pub fn sample_child(id: &str, name: &str) -> Child {
    Child {
        id: id.to_string(),
        name: name.to_string(),
        grade: "二年级".to_string(),
        class_name: "3班".to_string(),
        school: "实验小学".to_string(),
        avatar: None,
    }
}

pub fn sample_homework(id: &str, child_id: &str, on: NaiveDate) -> Homework {
    Homework {
        id: id.to_string(),
        child_id: child_id.to_string(),
        subject: "数学".to_string(),
        title: format!("练习 {}", id),
        status: HomeworkStatus::Pending,
        rating: None,
        date: on,
        submit_time: None,
        images: Vec::new(),
        feedback: None,
    }
}

pub fn sample_mistake(id: &str, child_id: &str, on: NaiveDate) -> Mistake {
    Mistake {
        id: id.to_string(),
        child_id: child_id.to_string(),
        subject: "语文".to_string(),
        title: "拼音错误".to_string(),
        date: on,
        reason: "粗心".to_string(),
        knowledge_point: "声调".to_string(),
        image_url: "mistake.png".to_string(),
        status: MistakeStatus::Practiced,
    }
}

pub fn sample_review(id: &str, child_id: &str, on: NaiveDate, rating: OverallRating) -> Review {
    Review {
        id: id.to_string(),
        child_id: child_id.to_string(),
        date: on,
        overall_rating: rating,
        tags: vec!["认真".to_string()],
        content: "表现不错".to_string(),
        images: Vec::new(),
    }
}

pub fn sample_leave_request(id: &str, child_id: &str) -> LeaveRequest {
    LeaveRequest {
        id: id.to_string(),
        child_id: child_id.to_string(),
        date: date(2026, 2, 26),
        leave_type: LeaveType::Personal,
        reason: "家中有事".to_string(),
        status: LeaveStatus::Pending,
        reject_reason: None,
        created_at: Utc::now(),
    }
}

/// Repositories over one shared store
pub struct TestHelper {
    pub connection: Arc<MemoryConnection>,
    pub child_repo: ChildRepository,
    pub learning_repo: LearningRepository,
    pub attendance_repo: AttendanceRepository,
    pub recipe_repo: RecipeRepository,
    pub notice_repo: NoticeRepository,
    pub leave_request_repo: LeaveRequestRepository,
}

impl TestHelper {
    /// Helper over the demo data
    pub fn new() -> Self {
        Self::from_seed(SeedData::demo())
    }

    /// Demo data plus records for the second child, for partition checks
    pub fn with_second_child_records() -> Self {
        let mut seed = SeedData::demo();
        let on = date(2026, 2, 25);
        seed.homeworks.push(sample_homework("h-c2", "c2", on));
        seed.mistakes.push(sample_mistake("m-c2", "c2", on));
        seed.reviews.push(sample_review("r-c2", "c2", on, OverallRating::Good));
        Self::from_seed(seed)
    }

    pub fn from_seed(seed: SeedData) -> Self {
        let connection = Arc::new(MemoryConnection::new(seed).expect("valid test seed"));
        Self {
            child_repo: ChildRepository::new(connection.clone()),
            learning_repo: LearningRepository::new(connection.clone()),
            attendance_repo: AttendanceRepository::new(connection.clone()),
            recipe_repo: RecipeRepository::new(connection.clone()),
            notice_repo: NoticeRepository::new(connection.clone()),
            leave_request_repo: LeaveRequestRepository::new(connection.clone()),
            connection,
        }
    }
}
