//! 楼栋仓储接口

use async_trait::async_trait;
use bada_errors::AppResult;

use crate::domain::entities::{NewTower, Tower};
use crate::domain::value_objects::TowerId;

/// 楼栋仓储接口
#[async_trait]
pub trait TowerRepository: Send + Sync {
    /// 根据 ID 查找楼栋
    async fn find_by_id(&self, id: TowerId) -> AppResult<Option<Tower>>;

    /// 全部楼栋，按 ID 升序
    async fn list(&self) -> AppResult<Vec<Tower>>;

    /// 新建楼栋
    async fn create(&self, tower: &NewTower) -> AppResult<Tower>;

    /// 更新楼栋
    async fn update(&self, tower: &Tower) -> AppResult<Tower>;

    /// 删除楼栋（级联删除楼层与房源），返回删除行数
    async fn delete(&self, id: TowerId) -> AppResult<u64>;
}
