use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::MistakeStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mistake {
    pub id: String,
    pub child_id: String,
    pub subject: String,
    pub title: String,
    pub date: NaiveDate,
    pub reason: String,
    pub knowledge_point: String,
    pub image_url: String,
    pub status: MistakeStatus,
}
