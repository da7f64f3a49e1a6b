use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::OverallRating;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub child_id: String,
    pub date: NaiveDate,
    pub overall_rating: OverallRating,
    pub tags: Vec<String>,
    pub content: String,
    pub images: Vec<String>,
}
