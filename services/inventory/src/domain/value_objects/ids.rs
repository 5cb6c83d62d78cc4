//! 强类型 ID 定义
//!
//! 所有 ID 均为数据库自增主键

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, From)]
        #[serde(transparent)]
        #[display("{_0}")]
        pub struct $name(pub i64);

        impl $name {
            pub fn value(&self) -> i64 {
                self.0
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().parse()?))
            }
        }
    };
}

define_id!(
    /// 项目 ID
    ProjectId
);

define_id!(
    /// 楼栋 ID
    TowerId
);

define_id!(
    /// 楼层 ID
    FloorId
);

define_id!(
    /// 房源 ID
    UnitId
);

define_id!(
    /// 房源类型 ID
    UnitTypeId
);

impl ProjectId {
    /// 唯一的项目行，价格解析只读取这一行
    pub const DEFAULT: ProjectId = ProjectId(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display_and_parse() {
        let id: TowerId = " 42 ".parse().unwrap();
        assert_eq!(id, TowerId(42));
        assert_eq!(id.to_string(), "42");
        assert!("abc".parse::<UnitId>().is_err());
    }

    #[test]
    fn test_id_serializes_as_number() {
        assert_eq!(serde_json::to_string(&FloorId(7)).unwrap(), "7");
        let id: UnitTypeId = serde_json::from_str("3").unwrap();
        assert_eq!(id, UnitTypeId(3));
    }
}
