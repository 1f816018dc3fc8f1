use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState};
use crate::models::population::PopulationReport;

#[derive(Debug, Deserialize)]
pub struct PopulationRequest {
    #[serde(default)]
    pub country: String,
}

pub async fn get_population(
    State(state): State<Arc<AppState>>,
    Query(request): Query<PopulationRequest>,
) -> Result<Json<ApiResponse<PopulationReport>>, ApiError> {
    let report = state.population().lookup(&request.country).await?;

    Ok(Json(ApiResponse::success(report)))
}
