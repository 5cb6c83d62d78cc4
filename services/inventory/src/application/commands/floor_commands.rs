//! 楼层命令

use bada_errors::{AppError, AppResult};

use crate::domain::enums::FloorType;
use crate::domain::value_objects::{FloorId, TowerId};

/// 手动新增楼层命令
#[derive(Debug, Clone)]
pub struct CreateFloorCommand {
    pub tower_id: TowerId,
    pub floor_number: i32,
    pub name: String,
    pub floor_type: FloorType,
}

impl CreateFloorCommand {
    pub fn validate(&self) -> AppResult<()> {
        if self.name.is_empty() {
            return Err(AppError::validation("Floor name is required"));
        }
        Ok(())
    }
}

/// 更新楼层命令（未提供的字段保持原值）
#[derive(Debug, Clone)]
pub struct UpdateFloorCommand {
    pub floor_id: FloorId,
    pub floor_number: Option<i32>,
    pub name: Option<String>,
    pub floor_type: Option<FloorType>,
}

impl UpdateFloorCommand {
    pub fn validate(&self) -> AppResult<()> {
        if matches!(&self.name, Some(name) if name.is_empty()) {
            return Err(AppError::validation("Floor name is required"));
        }
        Ok(())
    }
}
