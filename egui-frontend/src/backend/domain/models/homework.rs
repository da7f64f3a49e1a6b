use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use shared::HomeworkStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Homework {
    pub id: String,
    pub child_id: String,
    pub subject: String,
    pub title: String,
    pub status: HomeworkStatus,
    pub rating: Option<String>,
    /// Day the homework was assigned
    pub date: NaiveDate,
    pub submit_time: Option<NaiveDateTime>,
    pub images: Vec<String>,
    pub feedback: Option<String>,
}

impl Homework {
    pub fn is_completed(&self) -> bool {
        self.status == HomeworkStatus::Completed
    }
}
