//! PostgreSQL repository implementation

use async_trait::async_trait;
use bada_errors::{AppError, AppResult};
use sqlx::PgPool;

use crate::domain::entities::{Floor, NewFloor, NewProject, NewTower, NewUnit, Project, Tower, Unit, UnitType};
use crate::domain::enums::UnitStatus;
use crate::domain::repositories::{
    FloorRepository, ProjectRepository, TowerRepository, UnitRepository, UnitTypeRepository,
};
use crate::domain::value_objects::{FloorId, ProjectId, TowerId, UnitId};

use super::converters::{
    collect_rows, floor_from_row, project_from_row, tower_from_row, unit_from_row,
    unit_type_from_row,
};
use super::rows::{FloorRow, ProjectRow, TowerRow, UnitRow, UnitTypeRow};

const PROJECT_COLUMNS: &str = "id, name, regular_price_sqft, group_price_sqft, residential_rate, \
     office_rate, shop_rate, created_at, updated_at";

const TOWER_COLUMNS: &str = "id, name, type, total_floors, basement_levels, shop_levels, \
     office_levels, podium_levels, residential_levels, created_at, updated_at";

const FLOOR_COLUMNS: &str = "id, tower_id, floor_number, name, type, created_at, updated_at";

const UNIT_COLUMNS: &str = "id, floor_id, unit_type_id, unit_number, bhk_type, carpet_area, \
     super_built_up_area, status, price_per_sqft, discounted_price_per_sqft, \
     final_regular_price, final_discounted_price, created_at, updated_at";

// ============================================================================
// ProjectRepository 实现
// ============================================================================

pub struct PostgresProjectRepository {
    pool: PgPool,
}

impl PostgresProjectRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectRepository for PostgresProjectRepository {
    async fn find_by_id(&self, id: ProjectId) -> AppResult<Option<Project>> {
        let sql = format!("SELECT {} FROM projects WHERE id = $1", PROJECT_COLUMNS);
        let row = sqlx::query_as::<_, ProjectRow>(&sql)
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to query project: {}", e)))?;

        Ok(row.map(project_from_row))
    }

    async fn create(&self, id: ProjectId, project: &NewProject) -> AppResult<Project> {
        let sql = format!(
            "INSERT INTO projects (id, name, regular_price_sqft, group_price_sqft) \
             VALUES ($1, $2, $3, $4) RETURNING {}",
            PROJECT_COLUMNS
        );
        let row = sqlx::query_as::<_, ProjectRow>(&sql)
            .bind(id.0)
            .bind(&project.name)
            .bind(project.regular_price_sqft)
            .bind(project.group_price_sqft)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to create project: {}", e)))?;

        Ok(project_from_row(row))
    }

    async fn update(&self, project: &Project) -> AppResult<Project> {
        let sql = format!(
            r#"
            UPDATE projects SET
                name = $2, regular_price_sqft = $3, group_price_sqft = $4,
                residential_rate = $5, office_rate = $6, shop_rate = $7,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            PROJECT_COLUMNS
        );
        let row = sqlx::query_as::<_, ProjectRow>(&sql)
            .bind(project.id.0)
            .bind(&project.name)
            .bind(project.regular_price_sqft)
            .bind(project.group_price_sqft)
            .bind(project.residential_rate)
            .bind(project.office_rate)
            .bind(project.shop_rate)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to update project: {}", e)))?
            .ok_or_else(|| AppError::not_found("Project not found"))?;

        Ok(project_from_row(row))
    }
}

// ============================================================================
// TowerRepository 实现
// ============================================================================

pub struct PostgresTowerRepository {
    pool: PgPool,
}

impl PostgresTowerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TowerRepository for PostgresTowerRepository {
    async fn find_by_id(&self, id: TowerId) -> AppResult<Option<Tower>> {
        let sql = format!("SELECT {} FROM towers WHERE id = $1", TOWER_COLUMNS);
        let row = sqlx::query_as::<_, TowerRow>(&sql)
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to query tower: {}", e)))?;

        row.map(tower_from_row).transpose()
    }

    async fn list(&self) -> AppResult<Vec<Tower>> {
        let sql = format!("SELECT {} FROM towers ORDER BY id ASC", TOWER_COLUMNS);
        let rows = sqlx::query_as::<_, TowerRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to list towers: {}", e)))?;

        collect_rows(rows, tower_from_row)
    }

    async fn create(&self, tower: &NewTower) -> AppResult<Tower> {
        let sql = format!(
            r#"
            INSERT INTO towers (
                name, type, total_floors, basement_levels, shop_levels,
                office_levels, podium_levels, residential_levels
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {}
            "#,
            TOWER_COLUMNS
        );
        let row = sqlx::query_as::<_, TowerRow>(&sql)
            .bind(&tower.name)
            .bind(tower.kind.as_str())
            .bind(tower.total_floors)
            .bind(tower.basement_levels)
            .bind(tower.shop_levels)
            .bind(tower.office_levels)
            .bind(tower.podium_levels)
            .bind(tower.residential_levels)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to create tower: {}", e)))?;

        tower_from_row(row)
    }

    async fn update(&self, tower: &Tower) -> AppResult<Tower> {
        let sql = format!(
            r#"
            UPDATE towers SET
                name = $2, type = $3, total_floors = $4, basement_levels = $5,
                shop_levels = $6, office_levels = $7, podium_levels = $8,
                residential_levels = $9, updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            TOWER_COLUMNS
        );
        let row = sqlx::query_as::<_, TowerRow>(&sql)
            .bind(tower.id.0)
            .bind(&tower.name)
            .bind(tower.kind.as_str())
            .bind(tower.total_floors)
            .bind(tower.basement_levels)
            .bind(tower.shop_levels)
            .bind(tower.office_levels)
            .bind(tower.podium_levels)
            .bind(tower.residential_levels)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to update tower: {}", e)))?
            .ok_or_else(|| AppError::not_found("Tower not found"))?;

        tower_from_row(row)
    }

    async fn delete(&self, id: TowerId) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM towers WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete tower: {}", e)))?;

        Ok(result.rows_affected())
    }
}

// ============================================================================
// FloorRepository 实现
// ============================================================================

pub struct PostgresFloorRepository {
    pool: PgPool,
}

impl PostgresFloorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FloorRepository for PostgresFloorRepository {
    async fn find_by_id(&self, id: FloorId) -> AppResult<Option<Floor>> {
        let sql = format!("SELECT {} FROM floors WHERE id = $1", FLOOR_COLUMNS);
        let row = sqlx::query_as::<_, FloorRow>(&sql)
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to query floor: {}", e)))?;

        row.map(floor_from_row).transpose()
    }

    async fn list_by_tower(&self, tower_id: TowerId) -> AppResult<Vec<Floor>> {
        let sql = format!(
            "SELECT {} FROM floors WHERE tower_id = $1 ORDER BY floor_number ASC, id ASC",
            FLOOR_COLUMNS
        );
        let rows = sqlx::query_as::<_, FloorRow>(&sql)
            .bind(tower_id.0)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to list floors: {}", e)))?;

        collect_rows(rows, floor_from_row)
    }

    async fn create(&self, floor: &NewFloor) -> AppResult<Floor> {
        let sql = format!(
            "INSERT INTO floors (tower_id, floor_number, name, type) \
             VALUES ($1, $2, $3, $4) RETURNING {}",
            FLOOR_COLUMNS
        );
        let row = sqlx::query_as::<_, FloorRow>(&sql)
            .bind(floor.tower_id.0)
            .bind(floor.floor_number)
            .bind(&floor.name)
            .bind(floor.floor_type.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to create floor: {}", e)))?;

        floor_from_row(row)
    }

    async fn update(&self, floor: &Floor) -> AppResult<Floor> {
        let sql = format!(
            "UPDATE floors SET floor_number = $2, name = $3, type = $4, updated_at = NOW() \
             WHERE id = $1 RETURNING {}",
            FLOOR_COLUMNS
        );
        let row = sqlx::query_as::<_, FloorRow>(&sql)
            .bind(floor.id.0)
            .bind(floor.floor_number)
            .bind(&floor.name)
            .bind(floor.floor_type.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to update floor: {}", e)))?
            .ok_or_else(|| AppError::not_found("Floor not found"))?;

        floor_from_row(row)
    }

    async fn delete(&self, id: FloorId) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM floors WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete floor: {}", e)))?;

        Ok(result.rows_affected())
    }

    async fn delete_by_tower(&self, tower_id: TowerId) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM floors WHERE tower_id = $1")
            .bind(tower_id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete floors: {}", e)))?;

        Ok(result.rows_affected())
    }
}

// ============================================================================
// UnitRepository 实现
// ============================================================================

pub struct PostgresUnitRepository {
    pool: PgPool,
}

impl PostgresUnitRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UnitRepository for PostgresUnitRepository {
    async fn find_by_id(&self, id: UnitId) -> AppResult<Option<Unit>> {
        let sql = format!("SELECT {} FROM units WHERE id = $1", UNIT_COLUMNS);
        let row = sqlx::query_as::<_, UnitRow>(&sql)
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to query unit: {}", e)))?;

        row.map(unit_from_row).transpose()
    }

    async fn list_by_floor(&self, floor_id: FloorId) -> AppResult<Vec<Unit>> {
        let sql = format!(
            "SELECT {} FROM units WHERE floor_id = $1 ORDER BY unit_number COLLATE \"C\" ASC, id ASC",
            UNIT_COLUMNS
        );
        let rows = sqlx::query_as::<_, UnitRow>(&sql)
            .bind(floor_id.0)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to list units: {}", e)))?;

        collect_rows(rows, unit_from_row)
    }

    async fn list_all(&self) -> AppResult<Vec<Unit>> {
        let sql = format!("SELECT {} FROM units ORDER BY id ASC", UNIT_COLUMNS);
        let rows = sqlx::query_as::<_, UnitRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to list units: {}", e)))?;

        collect_rows(rows, unit_from_row)
    }

    async fn create(&self, unit: &NewUnit) -> AppResult<Unit> {
        let sql = format!(
            "INSERT INTO units (floor_id, unit_number, status) VALUES ($1, $2, $3) RETURNING {}",
            UNIT_COLUMNS
        );
        let row = sqlx::query_as::<_, UnitRow>(&sql)
            .bind(unit.floor_id.0)
            .bind(&unit.unit_number)
            .bind(UnitStatus::Available.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to create unit: {}", e)))?;

        unit_from_row(row)
    }

    async fn update(&self, unit: &Unit) -> AppResult<Unit> {
        let sql = format!(
            r#"
            UPDATE units SET
                unit_type_id = $2, unit_number = $3, bhk_type = $4,
                carpet_area = $5, super_built_up_area = $6, status = $7,
                price_per_sqft = $8, discounted_price_per_sqft = $9,
                final_regular_price = $10, final_discounted_price = $11,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            UNIT_COLUMNS
        );
        let row = sqlx::query_as::<_, UnitRow>(&sql)
            .bind(unit.id.0)
            .bind(unit.unit_type_id.map(|id| id.0))
            .bind(&unit.unit_number)
            .bind(&unit.bhk_type)
            .bind(unit.carpet_area)
            .bind(unit.super_built_up_area)
            .bind(unit.status.as_str())
            .bind(unit.price_per_sqft)
            .bind(unit.discounted_price_per_sqft)
            .bind(unit.final_regular_price)
            .bind(unit.final_discounted_price)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to update unit: {}", e)))?
            .ok_or_else(|| AppError::not_found("Unit not found"))?;

        unit_from_row(row)
    }
}

// ============================================================================
// UnitTypeRepository 实现
// ============================================================================

pub struct PostgresUnitTypeRepository {
    pool: PgPool,
}

impl PostgresUnitTypeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UnitTypeRepository for PostgresUnitTypeRepository {
    async fn list(&self) -> AppResult<Vec<UnitType>> {
        let rows = sqlx::query_as::<_, UnitTypeRow>(
            "SELECT id, name, created_at, updated_at FROM unit_types ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list unit types: {}", e)))?;

        Ok(rows.into_iter().map(unit_type_from_row).collect())
    }

    async fn create(&self, name: &str) -> AppResult<UnitType> {
        let row = sqlx::query_as::<_, UnitTypeRow>(
            "INSERT INTO unit_types (name) VALUES ($1) RETURNING id, name, created_at, updated_at",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create unit type: {}", e)))?;

        Ok(unit_type_from_row(row))
    }
}
