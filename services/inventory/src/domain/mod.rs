//! 领域层
//!
//! 实体、值对象、枚举、仓储接口，以及结构生成与价格解析两个领域服务

pub mod entities;
pub mod enums;
pub mod repositories;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use enums::*;
pub use repositories::*;
pub use services::*;
pub use value_objects::*;
