use anyhow::Result;
use chrono::NaiveDate;
use log::{debug, info};
use std::sync::Arc;

use crate::backend::domain::models::recipe::Recipe;
use crate::backend::storage::memory::{MemoryConnection, RecipeRepository};
use crate::backend::storage::traits::RecipeStorage;

/// Daily menus published by the center
#[derive(Clone)]
pub struct RecipeService {
    recipe_repository: RecipeRepository,
}

impl RecipeService {
    pub fn new(connection: Arc<MemoryConnection>) -> Self {
        let recipe_repository = RecipeRepository::new(connection);
        Self { recipe_repository }
    }

    /// The menu to show for `date`.
    ///
    /// Uses the menu published for that exact day, otherwise the most recent
    /// menu published before it. Menus dated after `date` are never shown.
    pub fn get_recipe_of_the_day(&self, date: NaiveDate) -> Result<Option<Recipe>> {
        if let Some(recipe) = self.recipe_repository.get_recipe(date)? {
            info!("🍱 Recipe {} published for {}", recipe.id, date);
            return Ok(Some(recipe));
        }

        let fallback = self
            .recipe_repository
            .list_recipes()?
            .into_iter()
            .filter(|r| r.date < date)
            .max_by_key(|r| r.date);

        match &fallback {
            Some(recipe) => info!("🍱 No recipe for {}, showing {} from {}", date, recipe.id, recipe.date),
            None => debug!("No recipe published on or before {}", date),
        }
        Ok(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::models::recipe::Meal;
    use crate::backend::storage::memory::test_utils::date;
    use crate::backend::storage::memory::SeedData;

    fn recipe(id: &str, on: NaiveDate) -> Recipe {
        let meal = Meal {
            items: vec!["米饭".to_string()],
            image: None,
        };
        Recipe {
            id: id.to_string(),
            date: on,
            lunch: meal.clone(),
            snack: meal.clone(),
            dinner: meal,
        }
    }

    fn service_with(recipes: Vec<Recipe>) -> RecipeService {
        let seed = SeedData {
            recipes,
            ..SeedData::default()
        };
        RecipeService::new(Arc::new(MemoryConnection::new(seed).unwrap()))
    }

    #[test]
    fn test_exact_date_wins() {
        let service = service_with(vec![
            recipe("a", date(2026, 2, 20)),
            recipe("b", date(2026, 2, 25)),
        ]);
        let found = service.get_recipe_of_the_day(date(2026, 2, 25)).unwrap();
        assert_eq!(found.unwrap().id, "b");
    }

    #[test]
    fn test_falls_back_to_latest_earlier_menu() {
        let service = service_with(vec![
            recipe("old", date(2026, 2, 10)),
            recipe("recent", date(2026, 2, 20)),
            recipe("future", date(2026, 3, 1)),
        ]);
        let found = service.get_recipe_of_the_day(date(2026, 2, 25)).unwrap();
        assert_eq!(found.unwrap().id, "recent");
    }

    #[test]
    fn test_nothing_published_yet() {
        let service = service_with(vec![recipe("future", date(2026, 3, 1))]);
        assert!(service.get_recipe_of_the_day(date(2026, 2, 25)).unwrap().is_none());

        let empty = service_with(Vec::new());
        assert!(empty.get_recipe_of_the_day(date(2026, 2, 25)).unwrap().is_none());
    }
}
