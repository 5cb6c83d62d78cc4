//! 实体定义

mod floor;
mod project;
mod structure;
mod tower;
mod unit;
mod unit_type;

pub use floor::*;
pub use project::*;
pub use structure::*;
pub use tower::*;
pub use unit::*;
pub use unit_type::*;
