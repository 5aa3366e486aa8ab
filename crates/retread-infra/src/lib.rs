//! Infrastructure layer - persistence implementations

pub mod persistence;
