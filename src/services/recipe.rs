use std::sync::Arc;

use tracing::info;

use super::{LookupError, require_query};
use crate::clients::mealdb::MealDbClient;
use crate::models::recipe::Recipe;

const NOT_FOUND: &str = "Recipe not found. Try a simpler name (e.g., Cake, Pasta).";

/// Food name -> recipe search -> all matches with extracted ingredients.
pub struct RecipeService {
    mealdb: Arc<MealDbClient>,
}

impl RecipeService {
    #[must_use]
    pub const fn new(mealdb: Arc<MealDbClient>) -> Self {
        Self { mealdb }
    }

    pub async fn lookup(&self, food: &str) -> Result<Vec<Recipe>, LookupError> {
        let food = require_query(food, "Please enter a food item")?;

        let meals = self
            .mealdb
            .search(food)
            .await
            .map_err(|e| LookupError::upstream("TheMealDB", NOT_FOUND, &e))?
            .unwrap_or_default();

        if meals.is_empty() {
            return Err(LookupError::NotFound(NOT_FOUND.to_string()));
        }

        info!("Found {} recipes for {food}", meals.len());

        Ok(meals.into_iter().map(Recipe::from).collect())
    }
}
