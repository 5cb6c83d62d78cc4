//! 楼栋实体

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::enums::TowerKind;
use crate::domain::services::TowerLayout;
use crate::domain::value_objects::TowerId;

/// 楼栋
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tower {
    pub id: TowerId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TowerKind,
    /// 五类层数之和
    pub total_floors: i32,
    pub basement_levels: i32,
    pub shop_levels: i32,
    pub office_levels: i32,
    /// 停车层（裙楼）
    pub podium_levels: i32,
    pub residential_levels: i32,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl Tower {
    /// 以新的层数配置覆盖当前楼栋
    pub fn apply_layout(&mut self, layout: &TowerLayout) {
        self.basement_levels = layout.basement_levels;
        self.shop_levels = layout.shop_levels;
        self.office_levels = layout.office_levels;
        self.podium_levels = layout.podium_levels;
        self.residential_levels = layout.residential_levels;
        self.total_floors = layout.total_floors();
    }
}

/// 新建楼栋参数
#[derive(Debug, Clone, PartialEq)]
pub struct NewTower {
    pub name: String,
    pub kind: TowerKind,
    pub total_floors: i32,
    pub basement_levels: i32,
    pub shop_levels: i32,
    pub office_levels: i32,
    pub podium_levels: i32,
    pub residential_levels: i32,
}

impl NewTower {
    pub fn from_layout(name: impl Into<String>, kind: TowerKind, layout: &TowerLayout) -> Self {
        Self {
            name: name.into(),
            kind,
            total_floors: layout.total_floors(),
            basement_levels: layout.basement_levels,
            shop_levels: layout.shop_levels,
            office_levels: layout.office_levels,
            podium_levels: layout.podium_levels,
            residential_levels: layout.residential_levels,
        }
    }
}
