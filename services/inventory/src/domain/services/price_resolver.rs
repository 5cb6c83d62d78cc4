//! 价格解析
//!
//! 有效单价 = 房源单价覆盖（> 0）或按楼层用途取项目单价；
//! 最终价格 = 超建面积 × 单价，保留两位小数

use bada_errors::{AppError, AppResult};
use rust_decimal::Decimal;

use crate::domain::entities::{Project, Unit};
use crate::domain::enums::FloorType;

/// 项目单价表
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RateCard {
    pub residential_rate: Decimal,
    pub office_rate: Decimal,
    pub shop_rate: Decimal,
    pub regular_price_sqft: Decimal,
}

impl RateCard {
    /// 按楼层用途取单价，未单独定价的用途使用统一单价
    pub fn rate_for(&self, floor_type: FloorType) -> Decimal {
        match floor_type {
            FloorType::Residential => self.residential_rate,
            FloorType::Office => self.office_rate,
            FloorType::Shop => self.shop_rate,
            _ => self.regular_price_sqft,
        }
    }
}

impl From<&Project> for RateCard {
    fn from(project: &Project) -> Self {
        Self {
            residential_rate: project.residential_rate,
            office_rate: project.office_rate,
            shop_rate: project.shop_rate,
            regular_price_sqft: project.regular_price_sqft,
        }
    }
}

/// 参与定价的房源字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PricingInput {
    pub super_built_up_area: Decimal,
    pub price_per_sqft: Option<Decimal>,
    pub discounted_price_per_sqft: Option<Decimal>,
}

impl From<&Unit> for PricingInput {
    fn from(unit: &Unit) -> Self {
        Self {
            super_built_up_area: unit.super_built_up_area,
            price_per_sqft: unit.price_per_sqft,
            discounted_price_per_sqft: unit.discounted_price_per_sqft,
        }
    }
}

/// 价格解析结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceQuote {
    pub regular_rate: Decimal,
    pub discount_rate: Decimal,
    pub final_regular_price: Decimal,
    pub final_discounted_price: Decimal,
}

/// 解析房源价格
///
/// 折扣单价只取房源自身设置，没有全局默认值；面积与单价乘积溢出时返回校验错误
pub fn resolve(
    input: &PricingInput,
    floor_type: FloorType,
    rates: &RateCard,
) -> AppResult<PriceQuote> {
    let regular_rate = match input.price_per_sqft {
        Some(rate) if rate > Decimal::ZERO => rate,
        _ => rates.rate_for(floor_type),
    };
    let discount_rate = input
        .discounted_price_per_sqft
        .filter(|rate| *rate > Decimal::ZERO)
        .unwrap_or(Decimal::ZERO);

    let area = input.super_built_up_area.max(Decimal::ZERO);

    Ok(PriceQuote {
        regular_rate,
        discount_rate,
        final_regular_price: price(area, regular_rate)?,
        final_discounted_price: price(area, discount_rate)?,
    })
}

fn price(area: Decimal, rate: Decimal) -> AppResult<Decimal> {
    area.checked_mul(rate)
        .map(|total| total.round_dp(2))
        .ok_or_else(|| {
            AppError::validation(format!(
                "Price for area {} at rate {} is out of range",
                area, rate
            ))
        })
}
