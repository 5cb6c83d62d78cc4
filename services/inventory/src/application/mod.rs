//! 应用层

pub mod commands;
pub mod handler;

pub use commands::*;
pub use handler::ServiceHandler;
