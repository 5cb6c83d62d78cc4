//! HTTP API
//!
//! 所有业务路由挂在 `/api` 下，CORS 与请求日志由 bootstrap 统一添加

mod dto;
mod extract;
mod floors;
mod projects;
mod towers;
mod units;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, patch, post, put};

use crate::application::ServiceHandler;

pub use dto::*;
pub use extract::{Json, Path};

pub type AppState = Arc<ServiceHandler>;

/// 构建服务路由
pub fn router(handler: Arc<ServiceHandler>) -> Router {
    let api = Router::new()
        .route("/structures", get(towers::list_structures))
        .route("/towers", post(towers::create_tower))
        .route(
            "/towers/{id}",
            get(towers::get_tower)
                .put(towers::update_tower)
                .delete(towers::delete_tower),
        )
        .route("/floors", post(floors::create_floor))
        .route(
            "/floors/{id}",
            put(floors::update_floor).delete(floors::delete_floor),
        )
        .route("/units/bulk", patch(units::bulk_update_units))
        .route("/units/{id}", get(units::get_unit).patch(units::update_unit))
        .route(
            "/projects/settings",
            get(projects::get_settings).put(projects::update_settings),
        )
        .route("/projects/settings/reprice", post(projects::reprice_units))
        .route("/unittypes", get(projects::list_unit_types));

    Router::new()
        .route("/", get(banner))
        .nest("/api", api)
        .with_state(handler)
}

async fn banner() -> &'static str {
    "Bada Builder API is running"
}
