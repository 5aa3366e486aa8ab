//! Commercial proposal records

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::fleet::FleetProfile;
use super::projection::RoiProjection;

/// Lifecycle status of a proposal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProposalStatus {
    #[default]
    Draft,
    Sent,
    UnderReview,
    Accepted,
    Rejected,
}

impl ProposalStatus {
    pub const ALL: [ProposalStatus; 5] = [
        ProposalStatus::Draft,
        ProposalStatus::Sent,
        ProposalStatus::UnderReview,
        ProposalStatus::Accepted,
        ProposalStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProposalStatus::Draft => "draft",
            ProposalStatus::Sent => "sent",
            ProposalStatus::UnderReview => "under_review",
            ProposalStatus::Accepted => "accepted",
            ProposalStatus::Rejected => "rejected",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProposalStatus::Draft => "Draft",
            ProposalStatus::Sent => "Sent",
            ProposalStatus::UnderReview => "Under review",
            ProposalStatus::Accepted => "Accepted",
            ProposalStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for ProposalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProposalStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProposalStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s.trim())
            .ok_or_else(|| format!("unknown proposal status '{}'", s))
    }
}

/// Headline figures copied from the projection onto the proposal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposalResults {
    pub calculated_roi: f64,
    pub annual_savings: i64,
    pub five_year_savings: i64,
    pub co2_reduction: f64,
    pub cost_per_km: f64,
    /// Months
    pub payback_period: u32,
}

impl From<&RoiProjection> for ProposalResults {
    fn from(projection: &RoiProjection) -> Self {
        Self {
            calculated_roi: projection.roi_percent,
            annual_savings: projection.annual_savings,
            five_year_savings: projection.five_year_savings,
            co2_reduction: projection.co2_reduction_tonnes,
            cost_per_km: projection.cost_per_km,
            payback_period: projection.payback_period_months,
        }
    }
}

/// Proposal sent to a client company
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Proposal {
    pub id: String,
    pub company_id: String,
    pub fleet: FleetProfile,
    #[serde(default)]
    pub results: Option<ProposalResults>,
    #[serde(default)]
    pub status: ProposalStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProposal {
    pub company_id: String,
    pub fleet: FleetProfile,
    #[serde(default)]
    pub results: Option<ProposalResults>,
    #[serde(default)]
    pub status: ProposalStatus,
}

impl NewProposal {
    pub fn into_proposal(self, id: String, now: DateTime<Utc>) -> Proposal {
        Proposal {
            id,
            company_id: self.company_id,
            fleet: self.fleet,
            results: self.results,
            status: self.status,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update; `None` fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProposalUpdate {
    #[serde(default)]
    pub status: Option<ProposalStatus>,
    #[serde(default)]
    pub fleet: Option<FleetProfile>,
    #[serde(default)]
    pub results: Option<ProposalResults>,
}

impl ProposalUpdate {
    pub fn status(status: ProposalStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }
}

impl Proposal {
    /// Merge an update and refresh `updated_at`
    pub fn apply(&mut self, update: ProposalUpdate, now: DateTime<Utc>) {
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(fleet) = update.fleet {
            self.fleet = fleet;
        }
        if let Some(results) = update.results {
            self.results = Some(results);
        }
        self.updated_at = now;
    }

    pub fn calculated_roi(&self) -> Option<f64> {
        self.results.as_ref().map(|r| r.calculated_roi)
    }

    pub fn co2_reduction(&self) -> Option<f64> {
        self.results.as_ref().map(|r| r.co2_reduction)
    }
}
