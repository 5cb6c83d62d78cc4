//! 房源实体

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::enums::UnitStatus;
use crate::domain::services::PriceQuote;
use crate::domain::value_objects::{FloorId, UnitId, UnitTypeId};

/// 房源
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
    pub floor_id: FloorId,
    pub unit_type_id: Option<UnitTypeId>,
    pub unit_number: String,
    /// 户型标签，如 "2BHK"
    pub bhk_type: Option<String>,
    pub carpet_area: Decimal,
    pub super_built_up_area: Decimal,
    pub status: UnitStatus,
    /// 单价覆盖，大于 0 时优先于项目单价
    pub price_per_sqft: Option<Decimal>,
    pub discounted_price_per_sqft: Option<Decimal>,
    pub final_regular_price: Decimal,
    pub final_discounted_price: Decimal,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl Unit {
    /// 写入价格解析结果
    pub fn apply_quote(&mut self, quote: &PriceQuote) {
        self.final_regular_price = quote.final_regular_price;
        self.final_discounted_price = quote.final_discounted_price;
    }
}

/// 新建房源参数
///
/// 生成的房源面积与价格均为 0，状态为可售
#[derive(Debug, Clone, PartialEq)]
pub struct NewUnit {
    pub floor_id: FloorId,
    pub unit_number: String,
}

impl NewUnit {
    pub fn placeholder(floor_id: FloorId, unit_number: impl Into<String>) -> Self {
        Self {
            floor_id,
            unit_number: unit_number.into(),
        }
    }
}
