//! 房源仓储接口

use async_trait::async_trait;
use bada_errors::AppResult;

use crate::domain::entities::{NewUnit, Unit};
use crate::domain::value_objects::{FloorId, UnitId};

/// 房源仓储接口
#[async_trait]
pub trait UnitRepository: Send + Sync {
    /// 根据 ID 查找房源
    async fn find_by_id(&self, id: UnitId) -> AppResult<Option<Unit>>;

    /// 楼层下的全部房源，按房号字节序升序
    async fn list_by_floor(&self, floor_id: FloorId) -> AppResult<Vec<Unit>>;

    /// 全部房源，按 ID 升序
    async fn list_all(&self) -> AppResult<Vec<Unit>>;

    /// 新建占位房源
    async fn create(&self, unit: &NewUnit) -> AppResult<Unit>;

    /// 更新房源（含缓存价格）
    async fn update(&self, unit: &Unit) -> AppResult<Unit>;
}
