use serde::{Deserialize, Serialize};

/// Number of years covered by a projection
pub const PROJECTION_YEARS: usize = 5;

/// Financial and environmental outcome of switching a fleet to retreads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiProjection {
    pub annual_savings: i64,
    pub five_year_savings: i64,
    pub co2_reduction_tonnes: f64,
    pub roi_percent: f64,
    pub cost_per_km: f64,
    pub payback_period_months: u32,
    /// Cumulative savings at the end of years 1..=5
    pub savings_breakdown: [i64; PROJECTION_YEARS],
}
