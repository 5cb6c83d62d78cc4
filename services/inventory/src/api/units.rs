//! 房源接口

use axum::extract::State;
use bada_errors::AppResult;

use crate::application::UpdateUnitCommand;
use crate::domain::entities::UnitWithFloor;
use crate::domain::value_objects::UnitId;

use super::AppState;
use super::dto::{BulkUpdateRequest, BulkUpdateResponse, UnitChangesRequest, UnitResponse};
use super::extract::{Json, Path};

/// GET /api/units/{id}
pub async fn get_unit(
    State(handler): State<AppState>,
    Path(id): Path<UnitId>,
) -> AppResult<axum::Json<UnitWithFloor>> {
    Ok(axum::Json(handler.get_unit(id).await?))
}

/// PATCH /api/units/{id}
pub async fn update_unit(
    State(handler): State<AppState>,
    Path(id): Path<UnitId>,
    Json(req): Json<UnitChangesRequest>,
) -> AppResult<axum::Json<UnitResponse>> {
    let unit = handler
        .update_unit(UpdateUnitCommand {
            unit_id: id,
            changes: req.into(),
        })
        .await?;
    Ok(axum::Json(UnitResponse {
        message: "Unit updated",
        unit,
    }))
}

/// PATCH /api/units/bulk
pub async fn bulk_update_units(
    State(handler): State<AppState>,
    Json(req): Json<BulkUpdateRequest>,
) -> AppResult<axum::Json<BulkUpdateResponse>> {
    let updated = handler.bulk_update_units(req.into()).await?;
    Ok(axum::Json(BulkUpdateResponse {
        message: "Units updated successfully",
        updated,
    }))
}
