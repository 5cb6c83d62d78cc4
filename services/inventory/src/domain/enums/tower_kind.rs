//! 楼栋类型

use std::fmt;
use std::str::FromStr;

use bada_errors::AppError;
use serde::{Deserialize, Serialize};

/// 楼栋类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TowerKind {
    /// 高层楼栋
    #[default]
    Tower,
    /// 独栋
    Bungalow,
}

impl TowerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TowerKind::Tower => "TOWER",
            TowerKind::Bungalow => "BUNGALOW",
        }
    }
}

impl fmt::Display for TowerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TowerKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TOWER" => Ok(TowerKind::Tower),
            "BUNGALOW" => Ok(TowerKind::Bungalow),
            other => Err(AppError::validation(format!("Invalid tower type: {}", other))),
        }
    }
}
