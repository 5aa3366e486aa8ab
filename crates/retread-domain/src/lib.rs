//! Domain layer for retread ROI proposals
//!
//! Models, the ROI engine, dashboard aggregation and repository traits.
//! Nothing in this crate performs I/O.

pub mod model;
pub mod repository;
pub mod service;
