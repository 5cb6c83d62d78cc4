//! 数据库行映射结构

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

/// 项目数据库行
#[derive(Debug, FromRow)]
pub struct ProjectRow {
    pub id: i64,
    pub name: String,
    pub regular_price_sqft: Decimal,
    pub group_price_sqft: Decimal,
    pub residential_rate: Decimal,
    pub office_rate: Decimal,
    pub shop_rate: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 楼栋数据库行
#[derive(Debug, FromRow)]
pub struct TowerRow {
    pub id: i64,
    pub name: String,
    #[sqlx(rename = "type")]
    pub kind: String,
    pub total_floors: i32,
    pub basement_levels: i32,
    pub shop_levels: i32,
    pub office_levels: i32,
    pub podium_levels: i32,
    pub residential_levels: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 楼层数据库行
#[derive(Debug, FromRow)]
pub struct FloorRow {
    pub id: i64,
    pub tower_id: i64,
    pub floor_number: i32,
    pub name: String,
    #[sqlx(rename = "type")]
    pub floor_type: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 房源数据库行
#[derive(Debug, FromRow)]
pub struct UnitRow {
    pub id: i64,
    pub floor_id: i64,
    pub unit_type_id: Option<i64>,
    pub unit_number: String,
    pub bhk_type: Option<String>,
    pub carpet_area: Decimal,
    pub super_built_up_area: Decimal,
    pub status: String,
    pub price_per_sqft: Option<Decimal>,
    pub discounted_price_per_sqft: Option<Decimal>,
    pub final_regular_price: Decimal,
    pub final_discounted_price: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 房源类型数据库行
#[derive(Debug, FromRow)]
pub struct UnitTypeRow {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
