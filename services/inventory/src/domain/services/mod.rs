//! 领域服务

mod price_resolver;
mod structure_generator;

pub use price_resolver::*;
pub use structure_generator::*;
