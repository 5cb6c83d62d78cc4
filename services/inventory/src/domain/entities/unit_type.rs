//! 房源类型（查找表）

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::UnitTypeId;

/// 初始化时写入的房源类型
pub const DEFAULT_UNIT_TYPES: [&str; 9] = [
    "Shop",
    "Office",
    "Apartment",
    "Flat",
    "Bungalow",
    "Villa",
    "Duplex",
    "Triplex",
    "Independent House",
];

/// 房源类型
///
/// 与楼层用途无关，不参与价格解析
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitType {
    pub id: UnitTypeId,
    pub name: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}
