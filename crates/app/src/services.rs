//! Use-case services orchestrating domain objects through ports.

pub mod dashboard_service;
pub mod device_service;
pub mod project_service;
