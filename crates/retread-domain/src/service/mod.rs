//! Domain services

pub mod clients;
pub mod dashboard;
pub mod roi_engine;
pub mod rounding;

pub use clients::{client_stats, summarize_company, ClientStats, CompanySummary};
pub use dashboard::{dashboard_stats, recent_activity, ActivityEntry, ActivityKind, DashboardStats};
pub use roi_engine::{compute, compute_with_profile};
