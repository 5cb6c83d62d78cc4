//! 项目仓储接口

use async_trait::async_trait;
use bada_errors::AppResult;

use crate::domain::entities::{NewProject, Project};
use crate::domain::value_objects::ProjectId;

/// 项目仓储接口
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// 根据 ID 查找项目
    async fn find_by_id(&self, id: ProjectId) -> AppResult<Option<Project>>;

    /// 以指定 ID 创建项目
    async fn create(&self, id: ProjectId, project: &NewProject) -> AppResult<Project>;

    /// 更新名称与单价
    async fn update(&self, project: &Project) -> AppResult<Project>;
}
