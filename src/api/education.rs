use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState};
use crate::models::poi::EducationReport;

#[derive(Debug, Deserialize)]
pub struct EducationRequest {
    #[serde(default)]
    pub city: String,
}

pub async fn get_education(
    State(state): State<Arc<AppState>>,
    Query(request): Query<EducationRequest>,
) -> Result<Json<ApiResponse<EducationReport>>, ApiError> {
    let report = state.education().lookup(&request.city).await?;

    Ok(Json(ApiResponse::success(report)))
}
