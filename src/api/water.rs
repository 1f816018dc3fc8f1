use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState};
use crate::models::poi::WaterBody;

#[derive(Debug, Deserialize)]
pub struct WaterRequest {
    #[serde(default)]
    pub city: String,
}

pub async fn get_water(
    State(state): State<Arc<AppState>>,
    Query(request): Query<WaterRequest>,
) -> Result<Json<ApiResponse<Vec<WaterBody>>>, ApiError> {
    let bodies = state.water().lookup(&request.city).await?;

    Ok(Json(ApiResponse::success(bodies)))
}
