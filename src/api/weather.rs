use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState};
use crate::models::weather::WeatherReport;

#[derive(Debug, Deserialize)]
pub struct WeatherRequest {
    #[serde(default)]
    pub city: String,
}

pub async fn get_weather(
    State(state): State<Arc<AppState>>,
    Query(request): Query<WeatherRequest>,
) -> Result<Json<ApiResponse<WeatherReport>>, ApiError> {
    let report = state.weather().lookup(&request.city).await?;

    Ok(Json(ApiResponse::success(report)))
}
