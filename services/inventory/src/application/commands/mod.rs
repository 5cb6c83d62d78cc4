//! 命令定义

mod floor_commands;
mod project_commands;
mod tower_commands;
mod unit_commands;

pub use floor_commands::*;
pub use project_commands::*;
pub use tower_commands::*;
pub use unit_commands::*;

use bada_errors::{AppError, AppResult};
use rust_decimal::Decimal;

/// 面积与单价列为 NUMERIC(10, 2)
const AMOUNT_LIMIT: Decimal = Decimal::from_parts(100_000_000, 0, 0, false, 0);

/// 金额与面积不允许为负，且不超过列精度
fn ensure_amount(field: &str, value: Option<Decimal>) -> AppResult<()> {
    match value {
        Some(v) if v < Decimal::ZERO => Err(AppError::validation(format!(
            "{} must not be negative",
            field
        ))),
        Some(v) if v >= AMOUNT_LIMIT => Err(AppError::validation(format!(
            "{} must be less than {}",
            field, AMOUNT_LIMIT
        ))),
        _ => Ok(()),
    }
}
