//! Persistence implementations

mod converters;
mod postgres;
mod rows;
mod schema;

pub use postgres::{
    PostgresFloorRepository, PostgresProjectRepository, PostgresTowerRepository,
    PostgresUnitRepository, PostgresUnitTypeRepository,
};
pub use schema::migrations;
