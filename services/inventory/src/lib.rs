//! inventory - 楼栋 / 楼层 / 房源管理服务

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
