//! 楼层接口

use axum::extract::State;
use axum::http::StatusCode;
use bada_errors::AppResult;

use crate::domain::entities::Floor;
use crate::domain::value_objects::FloorId;

use super::AppState;
use super::dto::{CreateFloorRequest, MessageResponse, UpdateFloorRequest};
use super::extract::{Json, Path};

/// POST /api/floors
pub async fn create_floor(
    State(handler): State<AppState>,
    Json(req): Json<CreateFloorRequest>,
) -> AppResult<(StatusCode, axum::Json<Floor>)> {
    let floor = handler.create_floor(req.into_command()?).await?;
    Ok((StatusCode::CREATED, axum::Json(floor)))
}

/// PUT /api/floors/{id}
pub async fn update_floor(
    State(handler): State<AppState>,
    Path(id): Path<FloorId>,
    Json(req): Json<UpdateFloorRequest>,
) -> AppResult<axum::Json<Floor>> {
    Ok(axum::Json(handler.update_floor(req.into_command(id)).await?))
}

/// DELETE /api/floors/{id}
pub async fn delete_floor(
    State(handler): State<AppState>,
    Path(id): Path<FloorId>,
) -> AppResult<axum::Json<MessageResponse>> {
    handler.delete_floor(id).await?;
    Ok(axum::Json(MessageResponse {
        message: "Floor deleted",
    }))
}
