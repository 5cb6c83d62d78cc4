//! 楼栋与结构接口

use axum::extract::State;
use axum::http::StatusCode;
use bada_errors::AppResult;

use crate::domain::entities::TowerStructure;
use crate::domain::value_objects::TowerId;

use super::AppState;
use super::dto::{MessageResponse, TowerRequest, TowerResponse};
use super::extract::{Json, Path};

/// GET /api/structures
pub async fn list_structures(
    State(handler): State<AppState>,
) -> AppResult<axum::Json<Vec<TowerStructure>>> {
    Ok(axum::Json(handler.list_structures().await?))
}

/// POST /api/towers
pub async fn create_tower(
    State(handler): State<AppState>,
    Json(req): Json<TowerRequest>,
) -> AppResult<(StatusCode, axum::Json<TowerResponse>)> {
    let tower = handler.create_tower(req.into_create_command()).await?;
    Ok((
        StatusCode::CREATED,
        axum::Json(TowerResponse {
            message: "Structure created successfully",
            tower,
        }),
    ))
}

/// GET /api/towers/{id}
pub async fn get_tower(
    State(handler): State<AppState>,
    Path(id): Path<TowerId>,
) -> AppResult<axum::Json<TowerStructure>> {
    Ok(axum::Json(handler.get_tower_structure(id).await?))
}

/// PUT /api/towers/{id}
pub async fn update_tower(
    State(handler): State<AppState>,
    Path(id): Path<TowerId>,
    Json(req): Json<TowerRequest>,
) -> AppResult<axum::Json<TowerResponse>> {
    let tower = handler.update_tower(req.into_update_command(id)).await?;
    Ok(axum::Json(TowerResponse {
        message: "Tower updated and structure regenerated successfully",
        tower,
    }))
}

/// DELETE /api/towers/{id}
pub async fn delete_tower(
    State(handler): State<AppState>,
    Path(id): Path<TowerId>,
) -> AppResult<axum::Json<MessageResponse>> {
    handler.delete_tower(id).await?;
    Ok(axum::Json(MessageResponse {
        message: "Tower deleted",
    }))
}
