use anyhow::Result;
use log::{info, warn};
use std::sync::Arc;

use crate::backend::domain::commands::child::{
    GetActiveChildResult, GetChildCommand, GetChildResult, ListChildrenResult,
    SetActiveChildCommand, SetActiveChildResult,
};
use crate::backend::domain::models::child::{ActiveChild, ChildSelectionError};
use crate::backend::storage::memory::{ChildRepository, MemoryConnection};
use crate::backend::storage::traits::ChildStorage;

/// Service for the children registered to the parent account
#[derive(Clone)]
pub struct ChildService {
    child_repository: ChildRepository,
}

impl ChildService {
    /// Create a new ChildService
    pub fn new(connection: Arc<MemoryConnection>) -> Self {
        let child_repository = ChildRepository::new(connection);
        Self { child_repository }
    }

    /// List all children
    pub fn list_children(&self) -> Result<ListChildrenResult> {
        info!("Listing all children");

        let children = self.child_repository.list_children()?;

        info!("Found {} children", children.len());

        Ok(ListChildrenResult { children })
    }

    /// Get a child by ID
    pub fn get_child(&self, command: GetChildCommand) -> Result<GetChildResult> {
        let child = self.child_repository.get_child(&command.child_id)?;

        if child.is_none() {
            warn!("Child not found: {}", command.child_id);
        }

        Ok(GetChildResult { child })
    }

    /// Get the active child. When nothing has been selected yet the first
    /// registered child becomes active.
    pub fn get_active_child(&self) -> Result<GetActiveChildResult> {
        if let Some(child_id) = self.child_repository.get_active_child_id()? {
            if let Some(child) = self.child_repository.get_child(&child_id)? {
                return Ok(GetActiveChildResult {
                    active_child: ActiveChild { child: Some(child) },
                });
            }
            warn!("Active child {} no longer exists, falling back to first child", child_id);
        }

        let first = self.child_repository.list_children()?.into_iter().next();
        match &first {
            Some(child) => {
                info!("Defaulting active child to {} ({})", child.name, child.id);
                self.child_repository.set_active_child_id(&child.id)?;
            }
            None => warn!("No children registered, no active child"),
        }

        Ok(GetActiveChildResult {
            active_child: ActiveChild { child: first },
        })
    }

    /// Switch the active child
    pub fn set_active_child(&self, command: SetActiveChildCommand) -> Result<SetActiveChildResult> {
        info!("Setting active child: {}", command.child_id);

        let child = self
            .child_repository
            .get_child(&command.child_id)?
            .ok_or_else(|| ChildSelectionError::NotFound(command.child_id.clone()))?;

        self.child_repository.set_active_child_id(&child.id)?;

        Ok(SetActiveChildResult { child })
    }

    /// Fail with `ChildSelectionError::NotFound` unless the child exists.
    /// Storage failures are passed through unchanged.
    pub fn ensure_child_exists(&self, child_id: &str) -> Result<()> {
        match self.child_repository.get_child(child_id)? {
            Some(_) => Ok(()),
            None => Err(ChildSelectionError::NotFound(child_id.to_string()).into()),
        }
    }
}
