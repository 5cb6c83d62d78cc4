//! 房源命令

use bada_errors::{AppError, AppResult};
use rust_decimal::Decimal;

use crate::domain::entities::Unit;
use crate::domain::enums::UnitStatus;
use crate::domain::value_objects::{UnitId, UnitTypeId};

use super::ensure_amount;

/// 房源字段变更（未提供的字段保持原值）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnitChanges {
    pub unit_number: Option<String>,
    pub unit_type_id: Option<UnitTypeId>,
    pub bhk_type: Option<String>,
    pub carpet_area: Option<Decimal>,
    pub super_built_up_area: Option<Decimal>,
    pub status: Option<UnitStatus>,
    pub price_per_sqft: Option<Decimal>,
    pub discounted_price_per_sqft: Option<Decimal>,
}

impl UnitChanges {
    pub fn validate(&self) -> AppResult<()> {
        if matches!(&self.unit_number, Some(number) if number.is_empty()) {
            return Err(AppError::validation("Unit number is required"));
        }
        ensure_amount("carpet_area", self.carpet_area)?;
        ensure_amount("super_built_up_area", self.super_built_up_area)?;
        ensure_amount("price_per_sqft", self.price_per_sqft)?;
        ensure_amount("discounted_price_per_sqft", self.discounted_price_per_sqft)?;
        Ok(())
    }

    /// 应用到房源，价格由调用方随后重新解析
    pub fn apply_to(&self, unit: &mut Unit) {
        if let Some(number) = &self.unit_number {
            unit.unit_number = number.clone();
        }
        if let Some(type_id) = self.unit_type_id {
            unit.unit_type_id = Some(type_id);
        }
        if let Some(bhk) = &self.bhk_type {
            unit.bhk_type = Some(bhk.clone());
        }
        if let Some(area) = self.carpet_area {
            unit.carpet_area = area;
        }
        if let Some(area) = self.super_built_up_area {
            unit.super_built_up_area = area;
        }
        if let Some(status) = self.status {
            unit.status = status;
        }
        if let Some(rate) = self.price_per_sqft {
            unit.price_per_sqft = Some(rate);
        }
        if let Some(rate) = self.discounted_price_per_sqft {
            unit.discounted_price_per_sqft = Some(rate);
        }
    }
}

/// 更新单个房源命令
#[derive(Debug, Clone)]
pub struct UpdateUnitCommand {
    pub unit_id: UnitId,
    pub changes: UnitChanges,
}

impl UpdateUnitCommand {
    pub fn validate(&self) -> AppResult<()> {
        self.changes.validate()
    }
}

/// 批量更新房源命令
#[derive(Debug, Clone)]
pub struct BulkUpdateUnitsCommand {
    pub unit_ids: Vec<UnitId>,
    pub changes: UnitChanges,
}

impl BulkUpdateUnitsCommand {
    pub fn validate(&self) -> AppResult<()> {
        self.changes.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_area_rejected() {
        let changes = UnitChanges {
            super_built_up_area: Some(Decimal::from(-1)),
            ..Default::default()
        };
        let err = changes.validate().unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert!(err.message().contains("super_built_up_area"));
    }

    #[test]
    fn test_oversized_amounts_rejected() {
        let changes = UnitChanges {
            super_built_up_area: Some("79228162514264337593543950".parse().unwrap()),
            ..Default::default()
        };
        let err = changes.validate().unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert!(err.message().contains("super_built_up_area"));

        let changes = UnitChanges {
            price_per_sqft: Some(Decimal::from(100_000_000)),
            ..Default::default()
        };
        assert!(changes.validate().is_err());

        let changes = UnitChanges {
            price_per_sqft: Some("99999999.99".parse().unwrap()),
            ..Default::default()
        };
        assert!(changes.validate().is_ok());
    }

    #[test]
    fn test_empty_changes_are_valid() {
        assert!(UnitChanges::default().validate().is_ok());
    }
}
