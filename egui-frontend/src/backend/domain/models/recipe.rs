use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One meal slot (lunch, snack or dinner)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    pub items: Vec<String>,
    pub image: Option<String>,
}

/// The center's menu for one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub date: NaiveDate,
    pub lunch: Meal,
    pub snack: Meal,
    pub dinner: Meal,
}
