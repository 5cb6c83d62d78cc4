//! 项目设置与房源类型接口

use axum::extract::State;
use bada_errors::AppResult;

use crate::domain::entities::{Project, UnitType};

use super::AppState;
use super::dto::{ProjectSettingsRequest, RepriceResponse};
use super::extract::Json;

/// GET /api/projects/settings
pub async fn get_settings(State(handler): State<AppState>) -> AppResult<axum::Json<Project>> {
    Ok(axum::Json(handler.get_project_settings().await?))
}

/// PUT /api/projects/settings
pub async fn update_settings(
    State(handler): State<AppState>,
    Json(req): Json<ProjectSettingsRequest>,
) -> AppResult<axum::Json<Project>> {
    Ok(axum::Json(handler.update_project_settings(req.into()).await?))
}

/// POST /api/projects/settings/reprice
pub async fn reprice_units(State(handler): State<AppState>) -> AppResult<axum::Json<RepriceResponse>> {
    let repriced = handler.reprice_all_units().await?;
    Ok(axum::Json(RepriceResponse {
        message: "Units repriced",
        repriced,
    }))
}

/// GET /api/unittypes
pub async fn list_unit_types(State(handler): State<AppState>) -> AppResult<axum::Json<Vec<UnitType>>> {
    Ok(axum::Json(handler.list_unit_types().await?))
}
