//! bada-bootstrap - 统一服务启动骨架
//!
//! 配置加载、运行时初始化、基础设施创建、HTTP 服务与优雅关闭

mod health;
mod infrastructure;
mod metrics;
mod retry;
mod runtime;
mod starter;

pub use health::*;
pub use infrastructure::*;
pub use metrics::*;
pub use retry::*;
pub use runtime::*;
pub use starter::*;
