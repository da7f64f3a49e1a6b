use anyhow::Result;
use chrono::NaiveDate;
use std::sync::Arc;

use super::connection::MemoryConnection;
use crate::backend::domain::models::recipe::Recipe;
use crate::backend::storage::traits::RecipeStorage;

#[derive(Clone)]
pub struct RecipeRepository {
    connection: Arc<MemoryConnection>,
}

impl RecipeRepository {
    pub fn new(connection: Arc<MemoryConnection>) -> Self {
        Self { connection }
    }
}

impl RecipeStorage for RecipeRepository {
    fn list_recipes(&self) -> Result<Vec<Recipe>> {
        Ok(self.connection.recipes().to_vec())
    }

    fn get_recipe(&self, date: NaiveDate) -> Result<Option<Recipe>> {
        Ok(self.connection.recipes().iter().find(|r| r.date == date).cloned())
    }
}
