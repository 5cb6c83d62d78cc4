//! 楼栋结构视图
//!
//! 嵌套键名（`Floors` / `Units` / `UnitType` / `Floor`）与前端约定一致

use serde::Serialize;

use super::{Floor, Tower, Unit, UnitType};

/// 楼栋及其全部楼层
#[derive(Debug, Clone, Serialize)]
pub struct TowerStructure {
    #[serde(flatten)]
    pub tower: Tower,
    #[serde(rename = "Floors")]
    pub floors: Vec<FloorStructure>,
}

impl TowerStructure {
    pub fn unit_count(&self) -> usize {
        self.floors.iter().map(|f| f.units.len()).sum()
    }
}

/// 楼层及其房源
#[derive(Debug, Clone, Serialize)]
pub struct FloorStructure {
    #[serde(flatten)]
    pub floor: Floor,
    #[serde(rename = "Units")]
    pub units: Vec<UnitDetail>,
}

/// 房源及其类型
#[derive(Debug, Clone, Serialize)]
pub struct UnitDetail {
    #[serde(flatten)]
    pub unit: Unit,
    #[serde(rename = "UnitType")]
    pub unit_type: Option<UnitType>,
}

/// 房源及其所属楼层
#[derive(Debug, Clone, Serialize)]
pub struct UnitWithFloor {
    #[serde(flatten)]
    pub unit: Unit,
    #[serde(rename = "Floor")]
    pub floor: Option<Floor>,
}
