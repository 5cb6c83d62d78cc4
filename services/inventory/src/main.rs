//! inventory Service - 楼栋结构与房源定价

use std::sync::Arc;

use bada_adapter_postgres::MigrationManager;
use bada_bootstrap::{Infrastructure, run_http_server};
use tracing::info;

use inventory::api;
use inventory::application::{SeedDefaultsCommand, ServiceHandler};
use inventory::infrastructure::persistence::{
    PostgresFloorRepository, PostgresProjectRepository, PostgresTowerRepository,
    PostgresUnitRepository, PostgresUnitTypeRepository, migrations,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    run_http_server("config", |infra: Arc<Infrastructure>| async move {
        info!("Initializing inventory Service...");

        let pool = infra.postgres_pool();
        let report = MigrationManager::new(pool.clone())
            .migrate(&migrations())
            .await?;
        info!(
            applied = report.applied_count(),
            skipped = report.skipped.len(),
            "Schema migrations finished"
        );

        let project_repo = Arc::new(PostgresProjectRepository::new(pool.clone()));
        let tower_repo = Arc::new(PostgresTowerRepository::new(pool.clone()));
        let floor_repo = Arc::new(PostgresFloorRepository::new(pool.clone()));
        let unit_repo = Arc::new(PostgresUnitRepository::new(pool.clone()));
        let unit_type_repo = Arc::new(PostgresUnitTypeRepository::new(pool));
        info!("Repositories initialized");

        let handler = Arc::new(ServiceHandler::new(
            project_repo,
            tower_repo,
            floor_repo,
            unit_repo,
            unit_type_repo,
        ));
        handler
            .seed_defaults(SeedDefaultsCommand::from(&infra.config().seed))
            .await?;

        Ok(api::router(handler))
    })
    .await
}
