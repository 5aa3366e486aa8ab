//! Application service layer - use cases, config, repository wiring

pub mod app;
pub mod config;
pub mod repository;
pub mod sample_data;
