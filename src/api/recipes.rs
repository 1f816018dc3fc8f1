use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState};
use crate::models::recipe::Recipe;

#[derive(Debug, Deserialize)]
pub struct RecipeRequest {
    #[serde(default)]
    pub food: String,
}

pub async fn search_recipes(
    State(state): State<Arc<AppState>>,
    Query(request): Query<RecipeRequest>,
) -> Result<Json<ApiResponse<Vec<Recipe>>>, ApiError> {
    let recipes = state.recipes().lookup(&request.food).await?;

    Ok(Json(ApiResponse::success(recipes)))
}
