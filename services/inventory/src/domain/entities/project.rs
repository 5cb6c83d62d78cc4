//! 项目实体

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ProjectId;

/// 项目（全局定价设置）
///
/// 系统中只有 id = 1 的一行生效
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    /// 旧版统一单价，用于没有专属单价的楼层用途
    pub regular_price_sqft: Decimal,
    /// 团购单价
    pub group_price_sqft: Decimal,
    pub residential_rate: Decimal,
    pub office_rate: Decimal,
    pub shop_rate: Decimal,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// 新建项目参数
#[derive(Debug, Clone, PartialEq)]
pub struct NewProject {
    pub name: String,
    pub regular_price_sqft: Decimal,
    pub group_price_sqft: Decimal,
}

impl NewProject {
    /// 仅有名称、单价全部为 0 的项目
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            regular_price_sqft: Decimal::ZERO,
            group_price_sqft: Decimal::ZERO,
        }
    }
}
