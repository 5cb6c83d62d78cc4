//! 测试辅助：内存仓储实现

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bada_errors::{AppError, AppResult};
use chrono::Utc;
use rust_decimal::Decimal;

use inventory::application::ServiceHandler;
use inventory::domain::entities::{
    Floor, NewFloor, NewProject, NewTower, NewUnit, Project, Tower, Unit, UnitType,
};
use inventory::domain::enums::UnitStatus;
use inventory::domain::repositories::{
    FloorRepository, ProjectRepository, TowerRepository, UnitRepository, UnitTypeRepository,
};
use inventory::domain::value_objects::{FloorId, ProjectId, TowerId, UnitId, UnitTypeId};

/// 共享的内存存储，模拟外键级联删除
#[derive(Default)]
pub struct Store {
    next_id: i64,
    pub projects: BTreeMap<i64, Project>,
    pub towers: BTreeMap<i64, Tower>,
    pub floors: BTreeMap<i64, Floor>,
    pub units: BTreeMap<i64, Unit>,
    pub unit_types: BTreeMap<i64, UnitType>,
    /// 更新时返回错误的房源 ID
    pub failing_units: Vec<i64>,
}

impl Store {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn cascade_floor(&mut self, floor_id: i64) {
        self.units.retain(|_, u| u.floor_id.0 != floor_id);
    }
}

#[derive(Clone, Default)]
pub struct MemoryRepos {
    pub store: Arc<Mutex<Store>>,
}

impl MemoryRepos {
    pub fn handler(&self) -> Arc<ServiceHandler> {
        Arc::new(ServiceHandler::new(
            Arc::new(self.clone()),
            Arc::new(self.clone()),
            Arc::new(self.clone()),
            Arc::new(self.clone()),
            Arc::new(self.clone()),
        ))
    }

    pub fn with_project(self, residential: i64, office: i64, shop: i64, regular: i64) -> Self {
        {
            let mut store = self.store.lock().unwrap();
            let now = Utc::now();
            store.projects.insert(
                1,
                Project {
                    id: ProjectId::DEFAULT,
                    name: "Default Project".to_string(),
                    regular_price_sqft: Decimal::from(regular),
                    group_price_sqft: Decimal::ZERO,
                    residential_rate: Decimal::from(residential),
                    office_rate: Decimal::from(office),
                    shop_rate: Decimal::from(shop),
                    created_at: now,
                    updated_at: now,
                },
            );
        }
        self
    }

    pub fn floors_of(&self, tower_id: TowerId) -> Vec<Floor> {
        let store = self.store.lock().unwrap();
        let mut floors: Vec<Floor> = store
            .floors
            .values()
            .filter(|f| f.tower_id == tower_id)
            .cloned()
            .collect();
        floors.sort_by_key(|f| f.floor_number);
        floors
    }

    pub fn units_of(&self, floor_id: FloorId) -> Vec<Unit> {
        let store = self.store.lock().unwrap();
        store
            .units
            .values()
            .filter(|u| u.floor_id == floor_id)
            .cloned()
            .collect()
    }

    pub fn unit_count(&self) -> usize {
        self.store.lock().unwrap().units.len()
    }

    pub fn fail_updates_for(&self, unit_id: UnitId) {
        self.store.lock().unwrap().failing_units.push(unit_id.0);
    }
}

#[async_trait]
impl ProjectRepository for MemoryRepos {
    async fn find_by_id(&self, id: ProjectId) -> AppResult<Option<Project>> {
        Ok(self.store.lock().unwrap().projects.get(&id.0).cloned())
    }

    async fn create(&self, id: ProjectId, project: &NewProject) -> AppResult<Project> {
        let now = Utc::now();
        let project = Project {
            id,
            name: project.name.clone(),
            regular_price_sqft: project.regular_price_sqft,
            group_price_sqft: project.group_price_sqft,
            residential_rate: Decimal::ZERO,
            office_rate: Decimal::ZERO,
            shop_rate: Decimal::ZERO,
            created_at: now,
            updated_at: now,
        };
        self.store
            .lock()
            .unwrap()
            .projects
            .insert(id.0, project.clone());
        Ok(project)
    }

    async fn update(&self, project: &Project) -> AppResult<Project> {
        let mut store = self.store.lock().unwrap();
        let slot = store
            .projects
            .get_mut(&project.id.0)
            .ok_or_else(|| AppError::not_found("Project not found"))?;
        *slot = Project {
            updated_at: Utc::now(),
            ..project.clone()
        };
        Ok(slot.clone())
    }
}

#[async_trait]
impl TowerRepository for MemoryRepos {
    async fn find_by_id(&self, id: TowerId) -> AppResult<Option<Tower>> {
        Ok(self.store.lock().unwrap().towers.get(&id.0).cloned())
    }

    async fn list(&self) -> AppResult<Vec<Tower>> {
        Ok(self.store.lock().unwrap().towers.values().cloned().collect())
    }

    async fn create(&self, tower: &NewTower) -> AppResult<Tower> {
        let mut store = self.store.lock().unwrap();
        let id = store.next_id();
        let now = Utc::now();
        let tower = Tower {
            id: TowerId(id),
            name: tower.name.clone(),
            kind: tower.kind,
            total_floors: tower.total_floors,
            basement_levels: tower.basement_levels,
            shop_levels: tower.shop_levels,
            office_levels: tower.office_levels,
            podium_levels: tower.podium_levels,
            residential_levels: tower.residential_levels,
            created_at: now,
            updated_at: now,
        };
        store.towers.insert(id, tower.clone());
        Ok(tower)
    }

    async fn update(&self, tower: &Tower) -> AppResult<Tower> {
        let mut store = self.store.lock().unwrap();
        let slot = store
            .towers
            .get_mut(&tower.id.0)
            .ok_or_else(|| AppError::not_found("Tower not found"))?;
        *slot = tower.clone();
        Ok(slot.clone())
    }

    async fn delete(&self, id: TowerId) -> AppResult<u64> {
        let mut store = self.store.lock().unwrap();
        let floor_ids: Vec<i64> = store
            .floors
            .values()
            .filter(|f| f.tower_id == id)
            .map(|f| f.id.0)
            .collect();
        for floor_id in floor_ids {
            store.floors.remove(&floor_id);
            store.cascade_floor(floor_id);
        }
        Ok(store.towers.remove(&id.0).map_or(0, |_| 1))
    }
}

#[async_trait]
impl FloorRepository for MemoryRepos {
    async fn find_by_id(&self, id: FloorId) -> AppResult<Option<Floor>> {
        Ok(self.store.lock().unwrap().floors.get(&id.0).cloned())
    }

    async fn list_by_tower(&self, tower_id: TowerId) -> AppResult<Vec<Floor>> {
        Ok(self.floors_of(tower_id))
    }

    async fn create(&self, floor: &NewFloor) -> AppResult<Floor> {
        let mut store = self.store.lock().unwrap();
        let id = store.next_id();
        let now = Utc::now();
        let floor = Floor {
            id: FloorId(id),
            tower_id: floor.tower_id,
            floor_number: floor.floor_number,
            name: floor.name.clone(),
            floor_type: floor.floor_type,
            created_at: now,
            updated_at: now,
        };
        store.floors.insert(id, floor.clone());
        Ok(floor)
    }

    async fn update(&self, floor: &Floor) -> AppResult<Floor> {
        let mut store = self.store.lock().unwrap();
        let slot = store
            .floors
            .get_mut(&floor.id.0)
            .ok_or_else(|| AppError::not_found("Floor not found"))?;
        *slot = floor.clone();
        Ok(slot.clone())
    }

    async fn delete(&self, id: FloorId) -> AppResult<u64> {
        let mut store = self.store.lock().unwrap();
        store.cascade_floor(id.0);
        Ok(store.floors.remove(&id.0).map_or(0, |_| 1))
    }

    async fn delete_by_tower(&self, tower_id: TowerId) -> AppResult<u64> {
        let mut store = self.store.lock().unwrap();
        let floor_ids: Vec<i64> = store
            .floors
            .values()
            .filter(|f| f.tower_id == tower_id)
            .map(|f| f.id.0)
            .collect();
        for floor_id in &floor_ids {
            store.floors.remove(floor_id);
            store.cascade_floor(*floor_id);
        }
        Ok(floor_ids.len() as u64)
    }
}

#[async_trait]
impl UnitRepository for MemoryRepos {
    async fn find_by_id(&self, id: UnitId) -> AppResult<Option<Unit>> {
        Ok(self.store.lock().unwrap().units.get(&id.0).cloned())
    }

    async fn list_by_floor(&self, floor_id: FloorId) -> AppResult<Vec<Unit>> {
        let mut units = self.units_of(floor_id);
        units.sort_by(|a, b| a.unit_number.cmp(&b.unit_number));
        Ok(units)
    }

    async fn list_all(&self) -> AppResult<Vec<Unit>> {
        Ok(self.store.lock().unwrap().units.values().cloned().collect())
    }

    async fn create(&self, unit: &NewUnit) -> AppResult<Unit> {
        let mut store = self.store.lock().unwrap();
        let id = store.next_id();
        let now = Utc::now();
        let unit = Unit {
            id: UnitId(id),
            floor_id: unit.floor_id,
            unit_type_id: None,
            unit_number: unit.unit_number.clone(),
            bhk_type: None,
            carpet_area: Decimal::ZERO,
            super_built_up_area: Decimal::ZERO,
            status: UnitStatus::Available,
            price_per_sqft: None,
            discounted_price_per_sqft: None,
            final_regular_price: Decimal::ZERO,
            final_discounted_price: Decimal::ZERO,
            created_at: now,
            updated_at: now,
        };
        store.units.insert(id, unit.clone());
        Ok(unit)
    }

    async fn update(&self, unit: &Unit) -> AppResult<Unit> {
        let mut store = self.store.lock().unwrap();
        if store.failing_units.contains(&unit.id.0) {
            return Err(AppError::database("connection reset by peer"));
        }
        let slot = store
            .units
            .get_mut(&unit.id.0)
            .ok_or_else(|| AppError::not_found("Unit not found"))?;
        *slot = unit.clone();
        Ok(slot.clone())
    }
}

#[async_trait]
impl UnitTypeRepository for MemoryRepos {
    async fn list(&self) -> AppResult<Vec<UnitType>> {
        Ok(self.store.lock().unwrap().unit_types.values().cloned().collect())
    }

    async fn create(&self, name: &str) -> AppResult<UnitType> {
        let mut store = self.store.lock().unwrap();
        let id = store.next_id();
        let now = Utc::now();
        let unit_type = UnitType {
            id: UnitTypeId(id),
            name: name.to_string(),
            created_at: now,
            updated_at: now,
        };
        store.unit_types.insert(id, unit_type.clone());
        Ok(unit_type)
    }
}
