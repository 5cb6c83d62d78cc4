//! 请求与响应结构
//!
//! 层数等整数字段宽松解析：整数、小数（截断）或数字字符串均可，
//! 缺失、null 或无法解析时视为未提供

use bada_errors::{AppError, AppResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::str::FromStr;

use crate::application::{
    BulkUpdateUnitsCommand, CreateFloorCommand, CreateTowerCommand, UnitChanges,
    UpdateFloorCommand, UpdateProjectSettingsCommand, UpdateTowerCommand,
};
use crate::domain::entities::{Tower, Unit};
use crate::domain::enums::{FloorType, TowerKind, UnitStatus};
use crate::domain::services::TowerLayout;
use crate::domain::value_objects::{FloorId, TowerId, UnitId, UnitTypeId};

/// 新建楼栋时每层房源数的默认值
const DEFAULT_UNITS_PER_FLOOR: i32 = 4;

// ========== 宽松解析 ==========

/// 取字符串开头的整数部分，如 "12abc" -> 12
fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

fn int_from_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite())
                .map(|f| f.trunc() as i64)
        }),
        Value::String(s) => parse_leading_int(s),
        _ => None,
    }
}

fn lenient_int<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(int_from_value)
        .map(|n| n.clamp(i32::MIN as i64, i32::MAX as i64) as i32))
}

fn lenient_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(int_from_value))
}

/// 金额与面积：数字或数字字符串；null 与空字符串视为未提供
fn lenient_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => Decimal::from_str(s.trim())
            .map(Some)
            .map_err(|_| D::Error::custom(format!("invalid decimal: {}", s))),
        Some(Value::Number(n)) => Decimal::from_str(&n.to_string())
            .or_else(|_| Decimal::from_scientific(&n.to_string()))
            .map(Some)
            .map_err(|_| D::Error::custom(format!("invalid decimal: {}", n))),
        Some(other) => Err(D::Error::custom(format!("invalid decimal: {}", other))),
    }
}

// ========== 楼栋 ==========

/// 新建 / 更新楼栋请求
#[derive(Debug, Default, Deserialize)]
pub struct TowerRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<TowerKind>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub basement_levels: Option<i32>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub shop_levels: Option<i32>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub office_levels: Option<i32>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub podium_levels: Option<i32>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub residential_levels: Option<i32>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub units_per_floor: Option<i32>,
    #[serde(default)]
    pub site_name: Option<String>,
}

impl TowerRequest {
    fn layout(&self, default_units_per_floor: i32) -> TowerLayout {
        TowerLayout {
            basement_levels: self.basement_levels.unwrap_or(0),
            shop_levels: self.shop_levels.unwrap_or(0),
            office_levels: self.office_levels.unwrap_or(0),
            podium_levels: self.podium_levels.unwrap_or(0),
            residential_levels: self.residential_levels.unwrap_or(0),
            units_per_floor: self.units_per_floor.unwrap_or(default_units_per_floor),
        }
    }

    pub fn into_create_command(self) -> CreateTowerCommand {
        let layout = self.layout(DEFAULT_UNITS_PER_FLOOR);
        CreateTowerCommand {
            name: self.name.unwrap_or_default(),
            kind: self.kind.unwrap_or_default(),
            layout,
            site_name: self.site_name,
        }
    }

    /// 更新时未提供每层房源数则使用各层级默认值
    pub fn into_update_command(self, tower_id: TowerId) -> UpdateTowerCommand {
        let layout = self.layout(0);
        UpdateTowerCommand {
            tower_id,
            name: self.name,
            kind: self.kind,
            layout,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TowerResponse {
    pub message: &'static str,
    pub tower: Tower,
}

// ========== 楼层 ==========

#[derive(Debug, Default, Deserialize)]
pub struct CreateFloorRequest {
    #[serde(default, deserialize_with = "lenient_id")]
    pub tower_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub floor_number: Option<i32>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub floor_type: Option<FloorType>,
}

impl CreateFloorRequest {
    pub fn into_command(self) -> AppResult<CreateFloorCommand> {
        let tower_id = self
            .tower_id
            .ok_or_else(|| AppError::validation("tower_id is required"))?;
        let floor_number = self
            .floor_number
            .ok_or_else(|| AppError::validation("floor_number is required"))?;

        Ok(CreateFloorCommand {
            tower_id: TowerId(tower_id),
            floor_number,
            name: self.name.unwrap_or_default(),
            floor_type: self.floor_type.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateFloorRequest {
    #[serde(default, deserialize_with = "lenient_int")]
    pub floor_number: Option<i32>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub floor_type: Option<FloorType>,
}

impl UpdateFloorRequest {
    pub fn into_command(self, floor_id: FloorId) -> UpdateFloorCommand {
        UpdateFloorCommand {
            floor_id,
            floor_number: self.floor_number,
            name: self.name,
            floor_type: self.floor_type,
        }
    }
}

// ========== 房源 ==========

/// 房源编辑请求
#[derive(Debug, Default, Deserialize)]
pub struct UnitChangesRequest {
    #[serde(default)]
    pub unit_number: Option<String>,
    #[serde(default, deserialize_with = "lenient_id")]
    pub unit_type_id: Option<i64>,
    #[serde(default)]
    pub bhk_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub carpet_area: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub super_built_up_area: Option<Decimal>,
    #[serde(default)]
    pub status: Option<UnitStatus>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub price_per_sqft: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub discounted_price_per_sqft: Option<Decimal>,
}

impl From<UnitChangesRequest> for UnitChanges {
    fn from(req: UnitChangesRequest) -> Self {
        Self {
            unit_number: req.unit_number,
            unit_type_id: req.unit_type_id.map(UnitTypeId),
            bhk_type: req.bhk_type,
            carpet_area: req.carpet_area,
            super_built_up_area: req.super_built_up_area,
            status: req.status,
            price_per_sqft: req.price_per_sqft,
            discounted_price_per_sqft: req.discounted_price_per_sqft,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BulkUpdateRequest {
    #[serde(rename = "unitIds")]
    pub unit_ids: Vec<UnitId>,
    #[serde(default)]
    pub data: UnitChangesRequest,
}

impl From<BulkUpdateRequest> for BulkUpdateUnitsCommand {
    fn from(req: BulkUpdateRequest) -> Self {
        Self {
            unit_ids: req.unit_ids,
            changes: req.data.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UnitResponse {
    pub message: &'static str,
    pub unit: Unit,
}

#[derive(Debug, Serialize)]
pub struct BulkUpdateResponse {
    pub message: &'static str,
    pub updated: usize,
}

// ========== 项目设置 ==========

#[derive(Debug, Default, Deserialize)]
pub struct ProjectSettingsRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub regular_price_sqft: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub group_price_sqft: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub residential_rate: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub office_rate: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub shop_rate: Option<Decimal>,
}

impl From<ProjectSettingsRequest> for UpdateProjectSettingsCommand {
    fn from(req: ProjectSettingsRequest) -> Self {
        Self {
            name: req.name,
            regular_price_sqft: req.regular_price_sqft,
            group_price_sqft: req.group_price_sqft,
            residential_rate: req.residential_rate,
            office_rate: req.office_rate,
            shop_rate: req.shop_rate,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RepriceResponse {
    pub message: &'static str,
    pub repriced: usize,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_parse_leniently() {
        let req: TowerRequest = serde_json::from_value(serde_json::json!({
            "name": "A",
            "basement_levels": "2",
            "shop_levels": 1.9,
            "office_levels": "3 floors",
            "podium_levels": null,
            "residential_levels": "abc",
        }))
        .unwrap();

        let cmd = req.into_create_command();
        assert_eq!(cmd.layout.basement_levels, 2);
        assert_eq!(cmd.layout.shop_levels, 1);
        assert_eq!(cmd.layout.office_levels, 3);
        assert_eq!(cmd.layout.podium_levels, 0);
        assert_eq!(cmd.layout.residential_levels, 0);
        assert_eq!(cmd.layout.units_per_floor, 4);
        assert_eq!(cmd.kind, TowerKind::Tower);
    }

    #[test]
    fn test_update_defaults_units_per_floor_to_fallback() {
        let req: TowerRequest =
            serde_json::from_value(serde_json::json!({ "residential_levels": "-3" })).unwrap();
        let cmd = req.into_update_command(TowerId(9));
        assert_eq!(cmd.layout.units_per_floor, 0);
        assert_eq!(cmd.layout.residential_levels, -3);
        assert!(cmd.name.is_none());
        assert!(cmd.kind.is_none());
    }

    #[test]
    fn test_decimals_accept_numbers_and_strings() {
        let req: UnitChangesRequest = serde_json::from_value(serde_json::json!({
            "carpet_area": 850.5,
            "super_built_up_area": "1200.25",
            "price_per_sqft": "",
            "discounted_price_per_sqft": null,
            "unit_type_id": "3",
            "status": "ON_HOLD",
        }))
        .unwrap();

        assert_eq!(req.carpet_area, Some(Decimal::from_str("850.5").unwrap()));
        assert_eq!(req.super_built_up_area, Some(Decimal::from_str("1200.25").unwrap()));
        assert_eq!(req.price_per_sqft, None);
        assert_eq!(req.discounted_price_per_sqft, None);
        assert_eq!(req.unit_type_id, Some(3));
        assert_eq!(req.status, Some(UnitStatus::OnHold));
    }

    #[test]
    fn test_invalid_decimal_is_rejected() {
        let result: Result<UnitChangesRequest, _> =
            serde_json::from_value(serde_json::json!({ "carpet_area": "lots" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_create_floor_requires_tower_and_number() {
        let req: CreateFloorRequest =
            serde_json::from_value(serde_json::json!({ "name": "Terrace" })).unwrap();
        let err = req.into_command().unwrap_err();
        assert_eq!(err.message(), "tower_id is required");
    }
}
