use serde::{Deserialize, Serialize};

/// Domain model representing a child enrolled at the center.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Child {
    pub id: String,
    pub name: String,
    pub grade: String,
    pub class_name: String,
    pub school: String,
    pub avatar: Option<String>,
}

/// Represents the active child, which could be None if no child is registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveChild {
    pub child: Option<Child>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ChildSelectionError {
    #[error("Child not found: {0}")]
    NotFound(String),
}
