//! 房源类型仓储接口

use async_trait::async_trait;
use bada_errors::AppResult;

use crate::domain::entities::UnitType;

/// 房源类型仓储接口
#[async_trait]
pub trait UnitTypeRepository: Send + Sync {
    /// 全部房源类型，按 ID 升序
    async fn list(&self) -> AppResult<Vec<UnitType>>;

    /// 新建房源类型
    async fn create(&self, name: &str) -> AppResult<UnitType>;
}
