//! 楼栋命令

use bada_errors::{AppError, AppResult};

use crate::domain::enums::TowerKind;
use crate::domain::services::TowerLayout;
use crate::domain::value_objects::TowerId;

/// 新建楼栋命令（同时生成结构）
#[derive(Debug, Clone)]
pub struct CreateTowerCommand {
    pub name: String,
    pub kind: TowerKind,
    pub layout: TowerLayout,
    /// 非空时同时更新项目名称
    pub site_name: Option<String>,
}

impl CreateTowerCommand {
    pub fn validate(&self) -> AppResult<()> {
        if self.name.is_empty() {
            return Err(AppError::validation("Name is required"));
        }
        Ok(())
    }
}

/// 更新楼栋命令（重建全部楼层与房源）
#[derive(Debug, Clone)]
pub struct UpdateTowerCommand {
    pub tower_id: TowerId,
    /// 为空时保持原值
    pub name: Option<String>,
    pub kind: Option<TowerKind>,
    pub layout: TowerLayout,
}

impl UpdateTowerCommand {
    pub fn validate(&self) -> AppResult<()> {
        if matches!(&self.name, Some(name) if name.is_empty()) {
            return Err(AppError::validation("Name is required"));
        }
        Ok(())
    }
}
