use anyhow::{anyhow, Result};
use log::{debug, info};
use std::sync::Arc;

use super::connection::MemoryConnection;
use crate::backend::domain::models::child::Child;
use crate::backend::storage::traits::ChildStorage;

/// Child repository over the mock store
#[derive(Clone)]
pub struct ChildRepository {
    connection: Arc<MemoryConnection>,
}

impl ChildRepository {
    pub fn new(connection: Arc<MemoryConnection>) -> Self {
        Self { connection }
    }
}

impl ChildStorage for ChildRepository {
    fn list_children(&self) -> Result<Vec<Child>> {
        Ok(self.connection.children().to_vec())
    }

    fn get_child(&self, child_id: &str) -> Result<Option<Child>> {
        let child = self
            .connection
            .children()
            .iter()
            .find(|c| c.id == child_id)
            .cloned();
        debug!("Child lookup {} -> found: {}", child_id, child.is_some());
        Ok(child)
    }

    fn get_active_child_id(&self) -> Result<Option<String>> {
        Ok(self.connection.active_child_id()?.clone())
    }

    fn set_active_child_id(&self, child_id: &str) -> Result<()> {
        if self.get_child(child_id)?.is_none() {
            return Err(anyhow!("Child not found: {}", child_id));
        }
        *self.connection.active_child_id_mut()? = Some(child_id.to_string());
        info!("Active child set to {}", child_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::memory::test_utils::TestHelper;

    #[test]
    fn test_list_and_get_children() {
        let helper = TestHelper::new();

        let children = helper.child_repo.list_children().unwrap();
        let names: Vec<_> = children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["大宝", "小宝"]);

        assert_eq!(helper.child_repo.get_child("c2").unwrap().unwrap().grade, "三年级");
        assert!(helper.child_repo.get_child("c9").unwrap().is_none());
    }

    #[test]
    fn test_active_child_roundtrip() {
        let helper = TestHelper::new();
        assert!(helper.child_repo.get_active_child_id().unwrap().is_none());

        helper.child_repo.set_active_child_id("c2").unwrap();
        assert_eq!(helper.child_repo.get_active_child_id().unwrap().as_deref(), Some("c2"));
    }

    #[test]
    fn test_set_unknown_active_child_keeps_previous() {
        let helper = TestHelper::new();
        helper.child_repo.set_active_child_id("c1").unwrap();

        assert!(helper.child_repo.set_active_child_id("ghost").is_err());
        assert_eq!(helper.child_repo.get_active_child_id().unwrap().as_deref(), Some("c1"));
    }
}
