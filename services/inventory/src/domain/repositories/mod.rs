//! 仓储接口

mod floor_repository;
mod project_repository;
mod tower_repository;
mod unit_repository;
mod unit_type_repository;

pub use floor_repository::*;
pub use project_repository::*;
pub use tower_repository::*;
pub use unit_repository::*;
pub use unit_type_repository::*;
