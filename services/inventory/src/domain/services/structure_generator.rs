//! 楼栋结构生成
//!
//! 按固定顺序（地下室 → 商铺 → 办公 → 停车 → 住宅）逐层展开楼栋配置。
//! 地下室从 -1 向下编号；其余各层共用一个从 0 开始的位置索引，
//! 因此没有商铺和办公时，停车层从地面（0）开始。

use crate::domain::enums::FloorType;

/// 楼栋层数配置
///
/// 负数不做校验：对应层级不生成楼层，但仍计入总层数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TowerLayout {
    pub basement_levels: i32,
    pub shop_levels: i32,
    pub office_levels: i32,
    pub podium_levels: i32,
    pub residential_levels: i32,
    /// 每层房源数，0 表示使用各层级的默认值
    pub units_per_floor: i32,
}

impl TowerLayout {
    pub fn total_floors(&self) -> i32 {
        self.basement_levels
            + self.shop_levels
            + self.office_levels
            + self.podium_levels
            + self.residential_levels
    }
}

/// 单个楼层的生成结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloorPlan {
    pub floor_number: i32,
    pub name: String,
    pub floor_type: FloorType,
    pub unit_numbers: Vec<String>,
}

/// 楼层相对地面的位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    /// 序号 1..=N，楼层号为 -序号
    BelowGround,
    /// 占用共享的位置索引
    AboveGround,
}

/// 层级规格
struct TierSpec {
    floor_type: FloorType,
    placement: Placement,
    levels: fn(&TowerLayout) -> i32,
    unit_count: fn(i32) -> i32,
    floor_name: fn(i32) -> String,
    unit_number: fn(i32, i32) -> String,
}

const TIERS: [TierSpec; 5] = [
    TierSpec {
        floor_type: FloorType::Basement,
        placement: Placement::BelowGround,
        levels: |l: &TowerLayout| l.basement_levels,
        unit_count: |_| 1,
        floor_name: |i| format!("Basement {}", i),
        unit_number: |i, _| format!("B{}", i),
    },
    TierSpec {
        floor_type: FloorType::Shop,
        placement: Placement::AboveGround,
        levels: |l: &TowerLayout| l.shop_levels,
        unit_count: |per_floor| fallback_count(per_floor, 2),
        floor_name: |index| {
            if index == 0 {
                "Ground Floor (Shops)".to_string()
            } else {
                format!("Shop Level {}", index)
            }
        },
        unit_number: |index, u| {
            if index == 0 {
                format!("S-G-{}", u)
            } else {
                format!("S-{}-{}", index, u)
            }
        },
    },
    TierSpec {
        floor_type: FloorType::Office,
        placement: Placement::AboveGround,
        levels: |l: &TowerLayout| l.office_levels,
        unit_count: |per_floor| fallback_count(per_floor, 2),
        floor_name: |index| format!("Office Level {}", index),
        unit_number: |index, u| format!("OFF-{}-{}", index, u),
    },
    TierSpec {
        floor_type: FloorType::Parking,
        placement: Placement::AboveGround,
        levels: |l: &TowerLayout| l.podium_levels,
        unit_count: |per_floor| fallback_count(per_floor, 10),
        floor_name: |index| {
            if index == 0 {
                "Ground (Stilt Parking)".to_string()
            } else {
                format!("Parking Level {}", index)
            }
        },
        unit_number: |index, u| format!("P-{}-{}", index, u),
    },
    TierSpec {
        floor_type: FloorType::Residential,
        placement: Placement::AboveGround,
        levels: |l: &TowerLayout| l.residential_levels,
        unit_count: |per_floor| per_floor.max(0),
        floor_name: |index| {
            if index == 0 {
                "Ground Floor".to_string()
            } else {
                format!("Floor {}", index)
            }
        },
        unit_number: |index, u| format!("{}{:02}", index, u),
    },
];

fn fallback_count(per_floor: i32, fallback: i32) -> i32 {
    if per_floor > 0 { per_floor } else { fallback }
}

/// 生成楼栋的全部楼层及房源编号
pub fn generate(layout: &TowerLayout) -> Vec<FloorPlan> {
    let mut plans = Vec::new();
    let mut index = 0;

    for tier in &TIERS {
        for level in 1..=(tier.levels)(layout) {
            let position = match tier.placement {
                Placement::BelowGround => level,
                Placement::AboveGround => index,
            };
            let floor_number = match tier.placement {
                Placement::BelowGround => -level,
                Placement::AboveGround => index,
            };

            let unit_numbers = (1..=(tier.unit_count)(layout.units_per_floor))
                .map(|u| (tier.unit_number)(position, u))
                .collect();

            plans.push(FloorPlan {
                floor_number,
                name: (tier.floor_name)(position),
                floor_type: tier.floor_type,
                unit_numbers,
            });

            if tier.placement == Placement::AboveGround {
                index += 1;
            }
        }
    }

    plans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(basement: i32, shop: i32, office: i32, podium: i32, residential: i32, per_floor: i32) -> TowerLayout {
        TowerLayout {
            basement_levels: basement,
            shop_levels: shop,
            office_levels: office,
            podium_levels: podium,
            residential_levels: residential,
            units_per_floor: per_floor,
        }
    }

    #[test]
    fn test_floor_count_matches_total() {
        let layout = layout(2, 1, 2, 1, 10, 4);
        let plans = generate(&layout);
        assert_eq!(plans.len(), 16);
        assert_eq!(layout.total_floors(), 16);
    }

    #[test]
    fn test_basements_are_negative_with_single_placeholder() {
        let plans = generate(&layout(3, 0, 0, 0, 0, 6));
        let numbers: Vec<i32> = plans.iter().map(|p| p.floor_number).collect();
        assert_eq!(numbers, vec![-1, -2, -3]);
        assert_eq!(plans[1].name, "Basement 2");
        assert_eq!(plans[1].floor_type, FloorType::Basement);
        assert_eq!(plans[1].unit_numbers, vec!["B2".to_string()]);
    }

    #[test]
    fn test_above_ground_numbering_is_contiguous_across_tiers() {
        let plans = generate(&layout(1, 1, 1, 1, 2, 2));
        let above: Vec<(i32, FloorType)> = plans
            .iter()
            .filter(|p| p.floor_number >= 0)
            .map(|p| (p.floor_number, p.floor_type))
            .collect();
        assert_eq!(
            above,
            vec![
                (0, FloorType::Shop),
                (1, FloorType::Office),
                (2, FloorType::Parking),
                (3, FloorType::Residential),
                (4, FloorType::Residential),
            ]
        );
        assert_eq!(plans[1].name, "Ground Floor (Shops)");
        assert_eq!(plans[1].unit_numbers, vec!["S-G-1", "S-G-2"]);
        assert_eq!(plans[2].name, "Office Level 1");
        assert_eq!(plans[2].unit_numbers, vec!["OFF-1-1", "OFF-1-2"]);
        assert_eq!(plans[3].name, "Parking Level 2");
        assert_eq!(plans[4].name, "Floor 3");
        assert_eq!(plans[4].unit_numbers, vec!["301", "302"]);
    }

    #[test]
    fn test_parking_takes_ground_without_shops_or_offices() {
        let plans = generate(&layout(0, 0, 0, 1, 1, 0));
        assert_eq!(plans[0].floor_number, 0);
        assert_eq!(plans[0].name, "Ground (Stilt Parking)");
        assert_eq!(plans[0].unit_numbers.len(), 10);
        assert_eq!(plans[0].unit_numbers[9], "P-0-10");
        assert_eq!(plans[1].name, "Floor 1");
    }

    #[test]
    fn test_zero_units_per_floor_uses_tier_fallbacks() {
        let plans = generate(&layout(0, 2, 1, 1, 1, 0));
        assert_eq!(plans[0].unit_numbers.len(), 2);
        assert_eq!(plans[1].unit_numbers, vec!["S-1-1", "S-1-2"]);
        assert_eq!(plans[2].unit_numbers.len(), 2);
        assert_eq!(plans[3].unit_numbers.len(), 10);
        assert!(plans[4].unit_numbers.is_empty());
    }

    #[test]
    fn test_positive_units_per_floor_below_fallback_is_kept() {
        let plans = generate(&layout(0, 2, 1, 1, 0, 1));
        assert_eq!(plans[0].unit_numbers, vec!["S-G-1"]);
        assert_eq!(plans[1].unit_numbers, vec!["S-1-1"]);
        assert_eq!(plans[2].unit_numbers, vec!["OFF-2-1"]);
        assert_eq!(plans[3].unit_numbers, vec!["P-3-1"]);
    }

    #[test]
    fn test_residential_unit_numbers_pad_ordinal() {
        let plans = generate(&layout(0, 0, 0, 0, 13, 3));
        assert_eq!(plans[0].name, "Ground Floor");
        assert_eq!(plans[0].unit_numbers, vec!["001", "002", "003"]);
        assert_eq!(plans[12].floor_number, 12);
        assert_eq!(plans[12].unit_numbers, vec!["1201", "1202", "1203"]);
    }

    #[test]
    fn test_negative_counts_generate_nothing_but_enter_total() {
        let layout = layout(-2, 0, 0, 0, 3, 4);
        let plans = generate(&layout);
        assert_eq!(plans.len(), 3);
        assert_eq!(layout.total_floors(), 1);
        assert!(plans.iter().all(|p| p.floor_type == FloorType::Residential));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let layout = layout(1, 1, 1, 1, 4, 5);
        assert_eq!(generate(&layout), generate(&layout));
    }
}
