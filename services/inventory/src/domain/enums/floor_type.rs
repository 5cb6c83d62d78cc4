//! 楼层用途

use std::fmt;
use std::str::FromStr;

use bada_errors::AppError;
use serde::{Deserialize, Serialize};

/// 楼层用途
///
/// 决定价格解析时使用项目的哪一档单价
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FloorType {
    /// 住宅
    #[default]
    Residential,
    /// 商铺
    Shop,
    /// 办公
    Office,
    /// 停车
    Parking,
    /// 地下室
    Basement,
    /// 商业
    Commercial,
    /// 配套设施
    Amenity,
}

impl FloorType {
    pub const ALL: [FloorType; 7] = [
        FloorType::Residential,
        FloorType::Shop,
        FloorType::Office,
        FloorType::Parking,
        FloorType::Basement,
        FloorType::Commercial,
        FloorType::Amenity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FloorType::Residential => "RESIDENTIAL",
            FloorType::Shop => "SHOP",
            FloorType::Office => "OFFICE",
            FloorType::Parking => "PARKING",
            FloorType::Basement => "BASEMENT",
            FloorType::Commercial => "COMMERCIAL",
            FloorType::Amenity => "AMENITY",
        }
    }
}

impl fmt::Display for FloorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FloorType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FloorType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| AppError::validation(format!("Invalid floor type: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_type_round_trips_through_text() {
        for floor_type in FloorType::ALL {
            assert_eq!(floor_type.as_str().parse::<FloorType>().unwrap(), floor_type);
        }
    }

    #[test]
    fn test_floor_type_rejects_unknown() {
        let err = "ROOFTOP".parse::<FloorType>().unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert!("residential".parse::<FloorType>().is_err());
    }

    #[test]
    fn test_floor_type_json_uses_upper_case() {
        assert_eq!(
            serde_json::to_string(&FloorType::Parking).unwrap(),
            "\"PARKING\""
        );
        let parsed: FloorType = serde_json::from_str("\"AMENITY\"").unwrap();
        assert_eq!(parsed, FloorType::Amenity);
    }
}
