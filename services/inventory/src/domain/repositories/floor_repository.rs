//! 楼层仓储接口

use async_trait::async_trait;
use bada_errors::AppResult;

use crate::domain::entities::{Floor, NewFloor};
use crate::domain::value_objects::{FloorId, TowerId};

/// 楼层仓储接口
#[async_trait]
pub trait FloorRepository: Send + Sync {
    /// 根据 ID 查找楼层
    async fn find_by_id(&self, id: FloorId) -> AppResult<Option<Floor>>;

    /// 楼栋下的全部楼层，按楼层号升序
    async fn list_by_tower(&self, tower_id: TowerId) -> AppResult<Vec<Floor>>;

    /// 新建楼层
    async fn create(&self, floor: &NewFloor) -> AppResult<Floor>;

    /// 更新楼层
    async fn update(&self, floor: &Floor) -> AppResult<Floor>;

    /// 删除楼层（级联删除房源），返回删除行数
    async fn delete(&self, id: FloorId) -> AppResult<u64>;

    /// 删除楼栋下的全部楼层，返回删除行数
    async fn delete_by_tower(&self, tower_id: TowerId) -> AppResult<u64>;
}
