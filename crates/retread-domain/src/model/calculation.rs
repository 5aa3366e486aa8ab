use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::fleet::FleetProfile;
use super::projection::RoiProjection;

/// Environmental side of a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalImpact {
    pub tires_retreaded_per_year: u32,
    pub co2_reduction_tonnes: f64,
}

/// Stored snapshot of one engine run for a proposal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    pub id: String,
    pub proposal_id: String,
    pub fleet: FleetProfile,
    pub projection: RoiProjection,
    pub environmental_impact: EnvironmentalImpact,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCalculation {
    pub proposal_id: String,
    pub fleet: FleetProfile,
    pub projection: RoiProjection,
    pub environmental_impact: EnvironmentalImpact,
}

impl NewCalculation {
    pub fn into_calculation(self, id: String, now: DateTime<Utc>) -> Calculation {
        Calculation {
            id,
            proposal_id: self.proposal_id,
            fleet: self.fleet,
            projection: self.projection,
            environmental_impact: self.environmental_impact,
            created_at: now,
        }
    }
}
