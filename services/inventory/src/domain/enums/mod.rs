//! 枚举定义
//!
//! 数据库中以 TEXT 存储，通过 `as_str` / `FromStr` 转换

mod floor_type;
mod tower_kind;
mod unit_status;

pub use floor_type::*;
pub use tower_kind::*;
pub use unit_status::*;
