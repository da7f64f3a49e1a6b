//! # Memory Connection
//!
//! The in-process mock data store. Seed collections are fixed when the
//! connection is built and never change afterwards; the only mutable state is
//! the append-only leave request list and the active child selection.
//!
//! Per-child collections are partitioned into maps keyed by child id at
//! construction time, so every per-child lookup is a single map access.

use anyhow::{anyhow, Result};
use log::{debug, info};
use std::collections::{HashMap, HashSet};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::seed::SeedData;
use crate::backend::domain::models::attendance::Attendance;
use crate::backend::domain::models::child::Child;
use crate::backend::domain::models::homework::Homework;
use crate::backend::domain::models::leave_request::LeaveRequest;
use crate::backend::domain::models::mistake::Mistake;
use crate::backend::domain::models::notice::Notice;
use crate::backend::domain::models::recipe::Recipe;
use crate::backend::domain::models::review::Review;

/// Errors raised while building a store from seed data
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SeedError {
    #[error("Duplicate child id in seed data: {0}")]
    DuplicateChild(String),
    #[error("{collection} record {record_id} references unknown child {child_id}")]
    UnknownChild {
        collection: &'static str,
        record_id: String,
        child_id: String,
    },
}

/// A seeded record that belongs to exactly one child
trait ChildScoped {
    const COLLECTION: &'static str;
    fn record_id(&self) -> &str;
    fn child_id(&self) -> &str;
}

macro_rules! child_scoped {
    ($ty:ty, $collection:literal) => {
        impl ChildScoped for $ty {
            const COLLECTION: &'static str = $collection;
            fn record_id(&self) -> &str {
                &self.id
            }
            fn child_id(&self) -> &str {
                &self.child_id
            }
        }
    };
}

child_scoped!(Homework, "homework");
child_scoped!(Mistake, "mistake");
child_scoped!(Review, "review");
child_scoped!(Attendance, "attendance");

/// Group records by child id, rejecting records of unknown children
fn partition<T: ChildScoped>(
    records: Vec<T>,
    known_children: &HashSet<String>,
) -> Result<HashMap<String, Vec<T>>, SeedError> {
    let mut partitions: HashMap<String, Vec<T>> = HashMap::new();
    for record in records {
        if !known_children.contains(record.child_id()) {
            return Err(SeedError::UnknownChild {
                collection: T::COLLECTION,
                record_id: record.record_id().to_string(),
                child_id: record.child_id().to_string(),
            });
        }
        partitions
            .entry(record.child_id().to_string())
            .or_default()
            .push(record);
    }
    Ok(partitions)
}

/// In-memory store shared by all repositories
#[derive(Debug)]
pub struct MemoryConnection {
    children: Vec<Child>,
    homeworks: HashMap<String, Vec<Homework>>,
    mistakes: HashMap<String, Vec<Mistake>>,
    reviews: HashMap<String, Vec<Review>>,
    attendance: HashMap<String, Vec<Attendance>>,
    recipes: Vec<Recipe>,
    notices: Vec<Notice>,
    active_child_id: RwLock<Option<String>>,
    /// Most recent submission first
    leave_requests: RwLock<Vec<LeaveRequest>>,
}

impl MemoryConnection {
    /// Build a store from seed data, validating that every per-child record
    /// references a seeded child
    pub fn new(seed: SeedData) -> Result<Self, SeedError> {
        let mut known_children = HashSet::new();
        for child in &seed.children {
            if !known_children.insert(child.id.clone()) {
                return Err(SeedError::DuplicateChild(child.id.clone()));
            }
        }

        let connection = Self {
            homeworks: partition(seed.homeworks, &known_children)?,
            mistakes: partition(seed.mistakes, &known_children)?,
            reviews: partition(seed.reviews, &known_children)?,
            attendance: partition(seed.attendance, &known_children)?,
            children: seed.children,
            recipes: seed.recipes,
            notices: seed.notices,
            active_child_id: RwLock::new(None),
            leave_requests: RwLock::new(Vec::new()),
        };

        info!(
            "Mock store ready: {} children, {} recipes, {} notices",
            connection.children.len(),
            connection.recipes.len(),
            connection.notices.len()
        );
        Ok(connection)
    }

    /// Store populated with the built-in demo data
    pub fn demo() -> Result<Self, SeedError> {
        Self::new(SeedData::demo())
    }

    pub fn children(&self) -> &[Child] {
        &self.children
    }

    pub fn homeworks(&self, child_id: &str) -> &[Homework] {
        Self::partition_of(&self.homeworks, child_id)
    }

    pub fn mistakes(&self, child_id: &str) -> &[Mistake] {
        Self::partition_of(&self.mistakes, child_id)
    }

    pub fn reviews(&self, child_id: &str) -> &[Review] {
        Self::partition_of(&self.reviews, child_id)
    }

    pub fn attendance(&self, child_id: &str) -> &[Attendance] {
        Self::partition_of(&self.attendance, child_id)
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    fn partition_of<'a, T>(map: &'a HashMap<String, Vec<T>>, child_id: &str) -> &'a [T] {
        match map.get(child_id) {
            Some(records) => records,
            None => {
                debug!("No records for child {}", child_id);
                &[]
            }
        }
    }

    pub(crate) fn active_child_id(&self) -> Result<RwLockReadGuard<'_, Option<String>>> {
        self.active_child_id
            .read()
            .map_err(|_| anyhow!("Active child lock poisoned"))
    }

    pub(crate) fn active_child_id_mut(&self) -> Result<RwLockWriteGuard<'_, Option<String>>> {
        self.active_child_id
            .write()
            .map_err(|_| anyhow!("Active child lock poisoned"))
    }

    pub(crate) fn leave_requests(&self) -> Result<RwLockReadGuard<'_, Vec<LeaveRequest>>> {
        self.leave_requests
            .read()
            .map_err(|_| anyhow!("Leave request lock poisoned"))
    }

    pub(crate) fn leave_requests_mut(&self) -> Result<RwLockWriteGuard<'_, Vec<LeaveRequest>>> {
        self.leave_requests
            .write()
            .map_err(|_| anyhow!("Leave request lock poisoned"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::memory::test_utils::{date, sample_child, sample_homework};

    #[test]
    fn test_demo_store_partitions_by_child() {
        let connection = MemoryConnection::demo().expect("demo seed is valid");

        assert_eq!(connection.children().len(), 2);
        assert_eq!(connection.homeworks("c1").len(), 3);
        assert!(connection.homeworks("c1").iter().all(|h| h.child_id == "c1"));
        assert!(connection.homeworks("c2").is_empty());
        assert!(connection.mistakes("nobody").is_empty());
    }

    #[test]
    fn test_seed_with_unknown_child_is_rejected() {
        let seed = SeedData {
            children: vec![sample_child("c1", "大宝")],
            homeworks: vec![sample_homework("h1", "ghost", date(2026, 2, 25))],
            ..SeedData::default()
        };

        let err = MemoryConnection::new(seed).unwrap_err();
        assert_eq!(
            err,
            SeedError::UnknownChild {
                collection: "homework",
                record_id: "h1".to_string(),
                child_id: "ghost".to_string(),
            }
        );
    }

    #[test]
    fn test_seed_with_duplicate_child_is_rejected() {
        let seed = SeedData {
            children: vec![sample_child("c1", "大宝"), sample_child("c1", "小宝")],
            ..SeedData::default()
        };

        assert_eq!(
            MemoryConnection::new(seed).unwrap_err(),
            SeedError::DuplicateChild("c1".to_string())
        );
    }

    #[test]
    fn test_empty_seed_starts_without_leave_requests() {
        let connection = MemoryConnection::new(SeedData::default()).unwrap();
        assert!(connection.children().is_empty());
        assert!(connection.leave_requests().unwrap().is_empty());
        assert!(connection.active_child_id().unwrap().is_none());
    }
}
