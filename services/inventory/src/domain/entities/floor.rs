//! 楼层实体

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::enums::FloorType;
use crate::domain::value_objects::{FloorId, TowerId};

/// 楼层
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Floor {
    pub id: FloorId,
    pub tower_id: TowerId,
    /// 地下为负数，地面为 0
    pub floor_number: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub floor_type: FloorType,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// 新建楼层参数
#[derive(Debug, Clone, PartialEq)]
pub struct NewFloor {
    pub tower_id: TowerId,
    pub floor_number: i32,
    pub name: String,
    pub floor_type: FloorType,
}
