//! 项目设置命令

use bada_errors::AppResult;
use rust_decimal::Decimal;

use crate::domain::entities::Project;

use super::ensure_amount;

/// 更新项目设置命令（未提供的字段保持原值）
#[derive(Debug, Clone, Default)]
pub struct UpdateProjectSettingsCommand {
    pub name: Option<String>,
    pub regular_price_sqft: Option<Decimal>,
    pub group_price_sqft: Option<Decimal>,
    pub residential_rate: Option<Decimal>,
    pub office_rate: Option<Decimal>,
    pub shop_rate: Option<Decimal>,
}

impl UpdateProjectSettingsCommand {
    pub fn validate(&self) -> AppResult<()> {
        ensure_amount("regular_price_sqft", self.regular_price_sqft)?;
        ensure_amount("group_price_sqft", self.group_price_sqft)?;
        ensure_amount("residential_rate", self.residential_rate)?;
        ensure_amount("office_rate", self.office_rate)?;
        ensure_amount("shop_rate", self.shop_rate)?;
        Ok(())
    }

    pub fn apply_to(&self, project: &mut Project) {
        if let Some(name) = &self.name {
            project.name = name.clone();
        }
        let rates = [
            (&mut project.regular_price_sqft, self.regular_price_sqft),
            (&mut project.group_price_sqft, self.group_price_sqft),
            (&mut project.residential_rate, self.residential_rate),
            (&mut project.office_rate, self.office_rate),
            (&mut project.shop_rate, self.shop_rate),
        ];
        for (field, value) in rates {
            if let Some(value) = value {
                *field = value;
            }
        }
    }
}

/// 初始数据命令
#[derive(Debug, Clone)]
pub struct SeedDefaultsCommand {
    pub project_name: String,
    pub regular_price_sqft: Decimal,
    pub group_price_sqft: Decimal,
}

impl From<&bada_config::SeedConfig> for SeedDefaultsCommand {
    fn from(seed: &bada_config::SeedConfig) -> Self {
        Self {
            project_name: seed.project_name.clone(),
            regular_price_sqft: seed.regular_price_sqft,
            group_price_sqft: seed.group_price_sqft,
        }
    }
}
