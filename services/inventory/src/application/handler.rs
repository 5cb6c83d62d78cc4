//! Business logic handler

use std::collections::HashMap;
use std::sync::Arc;

use bada_errors::{AppError, AppResult};
use futures::future::join_all;
use metrics::counter;
use tracing::{info, warn};

use crate::domain::entities::{
    DEFAULT_UNIT_TYPES, Floor, FloorStructure, NewFloor, NewProject, NewTower, NewUnit, Project,
    Tower, TowerStructure, Unit, UnitDetail, UnitType, UnitWithFloor,
};
use crate::domain::enums::FloorType;
use crate::domain::repositories::{
    FloorRepository, ProjectRepository, TowerRepository, UnitRepository, UnitTypeRepository,
};
use crate::domain::services::{PricingInput, RateCard, TowerLayout, generate, resolve};
use crate::domain::value_objects::{FloorId, ProjectId, TowerId, UnitId, UnitTypeId};

use super::commands::*;

pub struct ServiceHandler {
    project_repo: Arc<dyn ProjectRepository>,
    tower_repo: Arc<dyn TowerRepository>,
    floor_repo: Arc<dyn FloorRepository>,
    unit_repo: Arc<dyn UnitRepository>,
    unit_type_repo: Arc<dyn UnitTypeRepository>,
}

impl ServiceHandler {
    pub fn new(
        project_repo: Arc<dyn ProjectRepository>,
        tower_repo: Arc<dyn TowerRepository>,
        floor_repo: Arc<dyn FloorRepository>,
        unit_repo: Arc<dyn UnitRepository>,
        unit_type_repo: Arc<dyn UnitTypeRepository>,
    ) -> Self {
        Self {
            project_repo,
            tower_repo,
            floor_repo,
            unit_repo,
            unit_type_repo,
        }
    }

    // ========== 初始数据 ==========

    /// 写入初始房源类型与默认项目（已存在则跳过）
    pub async fn seed_defaults(&self, cmd: SeedDefaultsCommand) -> AppResult<()> {
        if self.unit_type_repo.list().await?.is_empty() {
            for name in DEFAULT_UNIT_TYPES {
                self.unit_type_repo.create(name).await?;
            }
            info!(count = DEFAULT_UNIT_TYPES.len(), "Unit types seeded");
        }

        if self.project_repo.find_by_id(ProjectId::DEFAULT).await?.is_none() {
            let project = NewProject {
                name: cmd.project_name,
                regular_price_sqft: cmd.regular_price_sqft,
                group_price_sqft: cmd.group_price_sqft,
            };
            self.project_repo.create(ProjectId::DEFAULT, &project).await?;
            info!(name = %project.name, "Default project created");
        }

        Ok(())
    }

    // ========== 楼栋结构 ==========

    /// 获取全部楼栋的完整结构
    pub async fn list_structures(&self) -> AppResult<Vec<TowerStructure>> {
        let unit_types = self.unit_type_index().await?;
        let towers = self.tower_repo.list().await?;

        let mut structures = Vec::with_capacity(towers.len());
        for tower in towers {
            structures.push(self.assemble_structure(tower, &unit_types).await?);
        }
        Ok(structures)
    }

    /// 获取单个楼栋的完整结构
    pub async fn get_tower_structure(&self, tower_id: TowerId) -> AppResult<TowerStructure> {
        let tower = self.find_tower(tower_id).await?;
        let unit_types = self.unit_type_index().await?;
        self.assemble_structure(tower, &unit_types).await
    }

    /// 新建楼栋并生成楼层与房源
    pub async fn create_tower(&self, cmd: CreateTowerCommand) -> AppResult<Tower> {
        cmd.validate()?;

        if let Some(site_name) = cmd.site_name.as_deref().filter(|s| !s.is_empty()) {
            self.rename_project(site_name).await?;
        }

        let tower = self
            .tower_repo
            .create(&NewTower::from_layout(cmd.name, cmd.kind, &cmd.layout))
            .await?;

        let (floors, units) = self.generate_structure(tower.id, &cmd.layout).await?;

        info!(
            tower_id = %tower.id,
            name = %tower.name,
            total_floors = tower.total_floors,
            floors,
            units,
            "Tower created"
        );
        Ok(tower)
    }

    /// 更新楼栋并重建结构
    ///
    /// 原有楼层与房源（含面积、价格、状态）全部删除后重新生成
    pub async fn update_tower(&self, cmd: UpdateTowerCommand) -> AppResult<Tower> {
        cmd.validate()?;

        let mut tower = self.find_tower(cmd.tower_id).await?;
        if let Some(name) = cmd.name {
            tower.name = name;
        }
        if let Some(kind) = cmd.kind {
            tower.kind = kind;
        }
        tower.apply_layout(&cmd.layout);
        let tower = self.tower_repo.update(&tower).await?;

        let removed = self.floor_repo.delete_by_tower(tower.id).await?;
        warn!(
            tower_id = %tower.id,
            removed_floors = removed,
            "Regenerating tower structure, existing floors and units discarded"
        );

        let (floors, units) = self.generate_structure(tower.id, &cmd.layout).await?;

        info!(
            tower_id = %tower.id,
            total_floors = tower.total_floors,
            floors,
            units,
            "Tower regenerated"
        );
        Ok(tower)
    }

    /// 删除楼栋
    pub async fn delete_tower(&self, tower_id: TowerId) -> AppResult<()> {
        let deleted = self.tower_repo.delete(tower_id).await?;
        info!(tower_id = %tower_id, deleted, "Tower deleted");
        Ok(())
    }

    // ========== 楼层 ==========

    /// 手动新增楼层
    pub async fn create_floor(&self, cmd: CreateFloorCommand) -> AppResult<Floor> {
        cmd.validate()?;
        self.find_tower(cmd.tower_id).await?;

        let floor = self
            .floor_repo
            .create(&NewFloor {
                tower_id: cmd.tower_id,
                floor_number: cmd.floor_number,
                name: cmd.name,
                floor_type: cmd.floor_type,
            })
            .await?;

        info!(floor_id = %floor.id, tower_id = %floor.tower_id, "Floor created");
        Ok(floor)
    }

    /// 更新楼层
    pub async fn update_floor(&self, cmd: UpdateFloorCommand) -> AppResult<Floor> {
        cmd.validate()?;

        let mut floor = self
            .floor_repo
            .find_by_id(cmd.floor_id)
            .await?
            .ok_or_else(|| AppError::not_found("Floor not found"))?;

        if let Some(number) = cmd.floor_number {
            floor.floor_number = number;
        }
        if let Some(name) = cmd.name {
            floor.name = name;
        }
        if let Some(floor_type) = cmd.floor_type {
            floor.floor_type = floor_type;
        }

        let floor = self.floor_repo.update(&floor).await?;
        info!(floor_id = %floor.id, "Floor updated");
        Ok(floor)
    }

    /// 删除楼层
    pub async fn delete_floor(&self, floor_id: FloorId) -> AppResult<()> {
        let deleted = self.floor_repo.delete(floor_id).await?;
        info!(floor_id = %floor_id, deleted, "Floor deleted");
        Ok(())
    }

    // ========== 房源 ==========

    /// 获取房源及其所属楼层
    pub async fn get_unit(&self, unit_id: UnitId) -> AppResult<UnitWithFloor> {
        let unit = self.find_unit(unit_id).await?;
        let floor = self.floor_repo.find_by_id(unit.floor_id).await?;
        Ok(UnitWithFloor { unit, floor })
    }

    /// 更新房源并重新解析价格
    pub async fn update_unit(&self, cmd: UpdateUnitCommand) -> AppResult<Unit> {
        cmd.validate()?;

        let unit = self.find_unit(cmd.unit_id).await?;
        let rates = self.current_rates().await?;
        let unit = self.reprice_and_save(unit, &cmd.changes, &rates).await?;

        counter!("inventory_units_priced_total").increment(1);
        info!(
            unit_id = %unit.id,
            final_regular_price = %unit.final_regular_price,
            final_discounted_price = %unit.final_discounted_price,
            "Unit updated"
        );
        Ok(unit)
    }

    /// 批量更新房源
    ///
    /// 各房源按自身楼层用途独立定价，写入并发执行；不存在的 ID 跳过。
    /// 不在事务中执行，出错时其余写入照常完成，返回第一个错误
    pub async fn bulk_update_units(&self, cmd: BulkUpdateUnitsCommand) -> AppResult<usize> {
        cmd.validate()?;

        let rates = self.current_rates().await?;
        let results = join_all(
            cmd.unit_ids
                .iter()
                .map(|id| self.bulk_update_one(*id, &cmd.changes, &rates)),
        )
        .await;

        let mut updated = 0;
        let mut first_error = None;
        for result in results {
            match result {
                Ok(true) => updated += 1,
                Ok(false) => {}
                Err(e) => {
                    warn!(error = %e, "Bulk unit update failed");
                    first_error.get_or_insert(e);
                }
            }
        }

        counter!("inventory_units_priced_total").increment(updated as u64);
        info!(
            requested = cmd.unit_ids.len(),
            updated,
            "Bulk unit update finished"
        );

        match first_error {
            Some(e) => Err(e),
            None => Ok(updated),
        }
    }

    // ========== 项目设置 ==========

    /// 获取项目设置
    pub async fn get_project_settings(&self) -> AppResult<Project> {
        self.project_repo
            .find_by_id(ProjectId::DEFAULT)
            .await?
            .ok_or_else(|| AppError::not_found("Project not found"))
    }

    /// 更新项目设置
    ///
    /// 已缓存的房源价格不会自动重新计算
    pub async fn update_project_settings(
        &self,
        cmd: UpdateProjectSettingsCommand,
    ) -> AppResult<Project> {
        cmd.validate()?;

        let mut project = self.get_project_settings().await?;
        cmd.apply_to(&mut project);
        let project = self.project_repo.update(&project).await?;

        info!(project_id = %project.id, "Project settings updated");
        Ok(project)
    }

    /// 按当前项目单价重新计算全部房源价格，返回价格发生变化的房源数
    pub async fn reprice_all_units(&self) -> AppResult<usize> {
        let rates = self.current_rates().await?;
        let units = self.unit_repo.list_all().await?;

        let mut floor_types: HashMap<FloorId, FloorType> = HashMap::new();
        let mut repriced = 0;

        for mut unit in units {
            let floor_type = match floor_types.get(&unit.floor_id) {
                Some(floor_type) => *floor_type,
                None => {
                    let floor_type = self.floor_type_of(unit.floor_id).await?;
                    floor_types.insert(unit.floor_id, floor_type);
                    floor_type
                }
            };

            let quote = resolve(&PricingInput::from(&unit), floor_type, &rates)?;
            if quote.final_regular_price == unit.final_regular_price
                && quote.final_discounted_price == unit.final_discounted_price
            {
                continue;
            }

            unit.apply_quote(&quote);
            self.unit_repo.update(&unit).await?;
            repriced += 1;
        }

        counter!("inventory_units_priced_total").increment(repriced as u64);
        info!(repriced, "Units repriced");
        Ok(repriced)
    }

    /// 获取房源类型列表
    pub async fn list_unit_types(&self) -> AppResult<Vec<UnitType>> {
        self.unit_type_repo.list().await
    }

    // ========== 内部方法 ==========

    async fn find_tower(&self, tower_id: TowerId) -> AppResult<Tower> {
        self.tower_repo
            .find_by_id(tower_id)
            .await?
            .ok_or_else(|| AppError::not_found("Tower not found"))
    }

    async fn find_unit(&self, unit_id: UnitId) -> AppResult<Unit> {
        self.unit_repo
            .find_by_id(unit_id)
            .await?
            .ok_or_else(|| AppError::not_found("Unit not found"))
    }

    async fn floor_type_of(&self, floor_id: FloorId) -> AppResult<FloorType> {
        Ok(self
            .floor_repo
            .find_by_id(floor_id)
            .await?
            .map(|floor| floor.floor_type)
            .unwrap_or_default())
    }

    /// 项目不存在时所有单价按 0 处理
    async fn current_rates(&self) -> AppResult<RateCard> {
        Ok(self
            .project_repo
            .find_by_id(ProjectId::DEFAULT)
            .await?
            .map(|project| RateCard::from(&project))
            .unwrap_or_default())
    }

    async fn rename_project(&self, name: &str) -> AppResult<()> {
        match self.project_repo.find_by_id(ProjectId::DEFAULT).await? {
            Some(mut project) => {
                project.name = name.to_string();
                self.project_repo.update(&project).await?;
            }
            None => {
                self.project_repo
                    .create(ProjectId::DEFAULT, &NewProject::named(name))
                    .await?;
            }
        }
        info!(name, "Project renamed from site name");
        Ok(())
    }

    async fn reprice_and_save(
        &self,
        mut unit: Unit,
        changes: &UnitChanges,
        rates: &RateCard,
    ) -> AppResult<Unit> {
        changes.apply_to(&mut unit);
        let floor_type = self.floor_type_of(unit.floor_id).await?;
        let quote = resolve(&PricingInput::from(&unit), floor_type, rates)?;
        unit.apply_quote(&quote);
        self.unit_repo.update(&unit).await
    }

    async fn bulk_update_one(
        &self,
        unit_id: UnitId,
        changes: &UnitChanges,
        rates: &RateCard,
    ) -> AppResult<bool> {
        let Some(unit) = self.unit_repo.find_by_id(unit_id).await? else {
            return Ok(false);
        };
        self.reprice_and_save(unit, changes, rates).await?;
        Ok(true)
    }

    /// 逐行写入生成的楼层与房源，返回 (楼层数, 房源数)
    async fn generate_structure(
        &self,
        tower_id: TowerId,
        layout: &TowerLayout,
    ) -> AppResult<(usize, usize)> {
        let plans = generate(layout);
        let mut unit_count = 0;

        for plan in &plans {
            let floor = self
                .floor_repo
                .create(&NewFloor {
                    tower_id,
                    floor_number: plan.floor_number,
                    name: plan.name.clone(),
                    floor_type: plan.floor_type,
                })
                .await?;

            for number in &plan.unit_numbers {
                self.unit_repo
                    .create(&NewUnit::placeholder(floor.id, number.as_str()))
                    .await?;
                unit_count += 1;
            }
        }

        counter!("inventory_towers_generated_total").increment(1);
        counter!("inventory_floors_generated_total").increment(plans.len() as u64);
        counter!("inventory_units_generated_total").increment(unit_count as u64);

        Ok((plans.len(), unit_count))
    }

    async fn unit_type_index(&self) -> AppResult<HashMap<UnitTypeId, UnitType>> {
        Ok(self
            .unit_type_repo
            .list()
            .await?
            .into_iter()
            .map(|t| (t.id, t))
            .collect())
    }

    async fn assemble_structure(
        &self,
        tower: Tower,
        unit_types: &HashMap<UnitTypeId, UnitType>,
    ) -> AppResult<TowerStructure> {
        let floors = self.floor_repo.list_by_tower(tower.id).await?;

        let mut floor_structures = Vec::with_capacity(floors.len());
        for floor in floors {
            let units = self
                .unit_repo
                .list_by_floor(floor.id)
                .await?
                .into_iter()
                .map(|unit| {
                    let unit_type = unit.unit_type_id.and_then(|id| unit_types.get(&id).cloned());
                    UnitDetail { unit, unit_type }
                })
                .collect();
            floor_structures.push(FloorStructure { floor, units });
        }

        Ok(TowerStructure {
            tower,
            floors: floor_structures,
        })
    }
}
