//! 房源销售状态

use std::fmt;
use std::str::FromStr;

use bada_errors::AppError;
use serde::{Deserialize, Serialize};

/// 房源销售状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnitStatus {
    /// 可售
    #[default]
    Available,
    /// 保留
    OnHold,
    /// 已预订
    Booked,
}

impl UnitStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitStatus::Available => "AVAILABLE",
            UnitStatus::OnHold => "ON_HOLD",
            UnitStatus::Booked => "BOOKED",
        }
    }

    pub fn is_sellable(&self) -> bool {
        matches!(self, UnitStatus::Available)
    }
}

impl fmt::Display for UnitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AVAILABLE" => Ok(UnitStatus::Available),
            "ON_HOLD" => Ok(UnitStatus::OnHold),
            "BOOKED" => Ok(UnitStatus::Booked),
            other => Err(AppError::validation(format!("Invalid unit status: {}", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text_mapping() {
        assert_eq!(UnitStatus::OnHold.as_str(), "ON_HOLD");
        assert_eq!("BOOKED".parse::<UnitStatus>().unwrap(), UnitStatus::Booked);
        assert_eq!(
            serde_json::to_string(&UnitStatus::OnHold).unwrap(),
            "\"ON_HOLD\""
        );
        assert!(UnitStatus::default().is_sellable());
    }
}
