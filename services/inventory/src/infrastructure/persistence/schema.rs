//! 数据库结构迁移

use bada_adapter_postgres::Migration;

const CREATE_PROJECTS: &str = r#"
CREATE TABLE IF NOT EXISTS projects (
    id BIGSERIAL PRIMARY KEY,
    name VARCHAR(255) NOT NULL DEFAULT 'Bada Builder Project',
    regular_price_sqft NUMERIC(10, 2) NOT NULL DEFAULT 0,
    group_price_sqft NUMERIC(10, 2) NOT NULL DEFAULT 0,
    residential_rate NUMERIC(10, 2) NOT NULL DEFAULT 0,
    office_rate NUMERIC(10, 2) NOT NULL DEFAULT 0,
    shop_rate NUMERIC(10, 2) NOT NULL DEFAULT 0,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);
"#;

const CREATE_TOWERS_AND_FLOORS: &str = r#"
CREATE TABLE IF NOT EXISTS towers (
    id BIGSERIAL PRIMARY KEY,
    name VARCHAR(255) NOT NULL,
    type VARCHAR(16) NOT NULL DEFAULT 'TOWER' CHECK (type IN ('TOWER', 'BUNGALOW')),
    total_floors INTEGER NOT NULL DEFAULT 0,
    basement_levels INTEGER NOT NULL DEFAULT 0,
    shop_levels INTEGER NOT NULL DEFAULT 0,
    office_levels INTEGER NOT NULL DEFAULT 0,
    podium_levels INTEGER NOT NULL DEFAULT 0,
    residential_levels INTEGER NOT NULL DEFAULT 0,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE TABLE IF NOT EXISTS floors (
    id BIGSERIAL PRIMARY KEY,
    tower_id BIGINT NOT NULL REFERENCES towers (id) ON DELETE CASCADE,
    floor_number INTEGER NOT NULL,
    name VARCHAR(255) NOT NULL,
    type VARCHAR(16) NOT NULL DEFAULT 'RESIDENTIAL' CHECK (
        type IN ('RESIDENTIAL', 'COMMERCIAL', 'PARKING', 'AMENITY', 'OFFICE', 'SHOP', 'BASEMENT')
    ),
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE INDEX IF NOT EXISTS idx_floors_tower_id ON floors (tower_id);
"#;

const CREATE_UNIT_TYPES_AND_UNITS: &str = r#"
CREATE TABLE IF NOT EXISTS unit_types (
    id BIGSERIAL PRIMARY KEY,
    name VARCHAR(255) NOT NULL UNIQUE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE TABLE IF NOT EXISTS units (
    id BIGSERIAL PRIMARY KEY,
    floor_id BIGINT NOT NULL REFERENCES floors (id) ON DELETE CASCADE,
    unit_type_id BIGINT REFERENCES unit_types (id) ON DELETE SET NULL,
    unit_number VARCHAR(64) NOT NULL,
    bhk_type VARCHAR(32),
    carpet_area NUMERIC(10, 2) NOT NULL DEFAULT 0 CHECK (carpet_area >= 0),
    super_built_up_area NUMERIC(10, 2) NOT NULL DEFAULT 0 CHECK (super_built_up_area >= 0),
    status VARCHAR(16) NOT NULL DEFAULT 'AVAILABLE' CHECK (status IN ('AVAILABLE', 'ON_HOLD', 'BOOKED')),
    price_per_sqft NUMERIC(10, 2),
    discounted_price_per_sqft NUMERIC(10, 2),
    final_regular_price NUMERIC(15, 2) NOT NULL DEFAULT 0,
    final_discounted_price NUMERIC(15, 2) NOT NULL DEFAULT 0,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE INDEX IF NOT EXISTS idx_units_floor_id ON units (floor_id);
"#;

/// 按版本排列的全部迁移
pub fn migrations() -> Vec<Migration> {
    vec![
        Migration::new(1, "create_projects", CREATE_PROJECTS),
        Migration::new(2, "create_towers_and_floors", CREATE_TOWERS_AND_FLOORS),
        Migration::new(3, "create_unit_types_and_units", CREATE_UNIT_TYPES_AND_UNITS),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_are_ordered_and_unique() {
        let versions: Vec<i64> = migrations().iter().map(|m| m.version).collect();
        assert_eq!(versions, vec![1, 2, 3]);
    }

    #[test]
    fn test_structure_deletes_cascade() {
        assert!(CREATE_TOWERS_AND_FLOORS.contains("REFERENCES towers (id) ON DELETE CASCADE"));
        assert!(CREATE_UNIT_TYPES_AND_UNITS.contains("REFERENCES floors (id) ON DELETE CASCADE"));
        assert!(CREATE_UNIT_TYPES_AND_UNITS.contains("REFERENCES unit_types (id) ON DELETE SET NULL"));
    }
}
