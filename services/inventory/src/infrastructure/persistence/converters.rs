//! 数据库行到领域对象的转换
//!
//! 枚举列受 CHECK 约束保护，解析失败视为内部错误

use bada_errors::{AppError, AppResult};

use crate::domain::entities::{Floor, Project, Tower, Unit, UnitType};
use crate::domain::value_objects::{FloorId, ProjectId, TowerId, UnitId, UnitTypeId};

use super::rows::{FloorRow, ProjectRow, TowerRow, UnitRow, UnitTypeRow};

fn corrupt(column: &str, e: AppError) -> AppError {
    AppError::internal(format!("Invalid value in column {}: {}", column, e.message()))
}

pub fn project_from_row(row: ProjectRow) -> Project {
    Project {
        id: ProjectId(row.id),
        name: row.name,
        regular_price_sqft: row.regular_price_sqft,
        group_price_sqft: row.group_price_sqft,
        residential_rate: row.residential_rate,
        office_rate: row.office_rate,
        shop_rate: row.shop_rate,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}

pub fn tower_from_row(row: TowerRow) -> AppResult<Tower> {
    Ok(Tower {
        id: TowerId(row.id),
        name: row.name,
        kind: row.kind.parse().map_err(|e| corrupt("towers.type", e))?,
        total_floors: row.total_floors,
        basement_levels: row.basement_levels,
        shop_levels: row.shop_levels,
        office_levels: row.office_levels,
        podium_levels: row.podium_levels,
        residential_levels: row.residential_levels,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}

pub fn floor_from_row(row: FloorRow) -> AppResult<Floor> {
    Ok(Floor {
        id: FloorId(row.id),
        tower_id: TowerId(row.tower_id),
        floor_number: row.floor_number,
        name: row.name,
        floor_type: row.floor_type.parse().map_err(|e| corrupt("floors.type", e))?,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}

pub fn unit_from_row(row: UnitRow) -> AppResult<Unit> {
    Ok(Unit {
        id: UnitId(row.id),
        floor_id: FloorId(row.floor_id),
        unit_type_id: row.unit_type_id.map(UnitTypeId),
        unit_number: row.unit_number,
        bhk_type: row.bhk_type,
        carpet_area: row.carpet_area,
        super_built_up_area: row.super_built_up_area,
        status: row.status.parse().map_err(|e| corrupt("units.status", e))?,
        price_per_sqft: row.price_per_sqft,
        discounted_price_per_sqft: row.discounted_price_per_sqft,
        final_regular_price: row.final_regular_price,
        final_discounted_price: row.final_discounted_price,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}

pub fn unit_type_from_row(row: UnitTypeRow) -> UnitType {
    UnitType {
        id: UnitTypeId(row.id),
        name: row.name,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}

/// 批量转换
pub fn collect_rows<R, T>(rows: Vec<R>, convert: fn(R) -> AppResult<T>) -> AppResult<Vec<T>> {
    rows.into_iter().map(convert).collect()
}
