use std::collections::HashMap;

use anyhow::Result;
use reqwest::Client;
use serde::Deserialize;

use crate::constants::recipes;
use crate::models::recipe::{Ingredient, Recipe};

#[derive(Debug, Deserialize)]
struct SearchResponse {
    /// Null (not an empty list) when nothing matches.
    meals: Option<Vec<MealRecord>>,
}

/// Raw meal record. The twenty indexed ingredient/measure field pairs are
/// captured through the flattened map and assembled by
/// [`MealRecord::ingredients`].
#[derive(Debug, Clone, Deserialize)]
pub struct MealRecord {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strCategory")]
    pub category: Option<String>,
    #[serde(rename = "strArea")]
    pub area: Option<String>,
    #[serde(rename = "strInstructions")]
    pub instructions: Option<String>,
    #[serde(rename = "strMealThumb")]
    pub thumbnail: Option<String>,
    #[serde(rename = "strYoutube")]
    pub youtube: Option<String>,
    #[serde(flatten)]
    extra: HashMap<String, Option<String>>,
}

impl MealRecord {
    /// Ingredient/measure pairs in ascending slot order, keeping only the
    /// slots whose ingredient name is non-empty after trimming.
    #[must_use]
    pub fn ingredients(&self) -> Vec<Ingredient> {
        (1..=recipes::INGREDIENT_SLOTS)
            .filter_map(|slot| {
                let name = self
                    .extra
                    .get(&format!("strIngredient{slot}"))?
                    .as_deref()
                    .map(str::trim)
                    .filter(|name| !name.is_empty())?;

                let measure = self
                    .extra
                    .get(&format!("strMeasure{slot}"))
                    .and_then(|measure| measure.as_deref())
                    .map(str::trim)
                    .filter(|measure| !measure.is_empty());

                Some(Ingredient {
                    name: name.to_string(),
                    measure: measure.map(String::from),
                })
            })
            .collect()
    }
}

impl From<MealRecord> for Recipe {
    fn from(record: MealRecord) -> Self {
        let ingredients = record.ingredients();

        Self {
            name: record.name,
            category: record.category,
            area: record.area,
            instructions: record.instructions,
            thumbnail: record.thumbnail.filter(|url| !url.is_empty()),
            youtube: record.youtube.filter(|url| !url.is_empty()),
            ingredients,
        }
    }
}

/// Client for TheMealDB free-text recipe search.
#[derive(Clone)]
pub struct MealDbClient {
    client: Client,
    base_url: String,
}

impl MealDbClient {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Searches meals by name. `None` means the upstream had no match.
    pub async fn search(&self, food: &str) -> Result<Option<Vec<MealRecord>>> {
        let url = format!(
            "{}/search.php?s={}",
            self.base_url,
            urlencoding::encode(food)
        );
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("MealDB API error: {} - {}", status, body));
        }

        let response: SearchResponse = response.json().await?;

        Ok(response.meals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canned_meal() -> MealRecord {
        let body = r#"{
            "idMeal": "52772",
            "strMeal": "Teriyaki Chicken Casserole",
            "strCategory": "Chicken",
            "strArea": "Japanese",
            "strInstructions": "Preheat oven to 350.",
            "strMealThumb": "https://www.themealdb.com/images/media/meals/wvpsxx.jpg",
            "strYoutube": "",
            "strIngredient1": "soy sauce",
            "strIngredient2": " water ",
            "strIngredient3": "brown sugar",
            "strIngredient4": "",
            "strIngredient5": "",
            "strIngredient6": null,
            "strIngredient20": "",
            "strMeasure1": "3/4 cup",
            "strMeasure2": "1/2 cup",
            "strMeasure3": "",
            "strMeasure20": ""
        }"#;

        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_ingredient_extraction_keeps_filled_slots_in_order() {
        let ingredients = canned_meal().ingredients();

        assert_eq!(ingredients.len(), 3);
        assert_eq!(ingredients[0].name, "soy sauce");
        assert_eq!(ingredients[0].measure.as_deref(), Some("3/4 cup"));
        assert_eq!(ingredients[1].name, "water");
        assert_eq!(ingredients[2].name, "brown sugar");
        assert_eq!(ingredients[2].measure, None);
    }

    #[test]
    fn test_recipe_conversion_drops_empty_links() {
        let recipe = Recipe::from(canned_meal());

        assert_eq!(recipe.name, "Teriyaki Chicken Casserole");
        assert_eq!(recipe.category.as_deref(), Some("Chicken"));
        assert!(recipe.thumbnail.is_some());
        assert_eq!(recipe.youtube, None);
        assert_eq!(recipe.ingredients.len(), 3);
    }

    #[test]
    fn test_no_match_is_null_meals() {
        let parsed: SearchResponse = serde_json::from_str(r#"{"meals": null}"#).unwrap();
        assert!(parsed.meals.is_none());
    }
}
