//! Dashboard aggregation over stored proposals

use std::collections::HashMap;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::rounding::round_to_i64;
use crate::model::{Company, Proposal, ProposalStatus};

/// Headline numbers for the dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub proposals_this_month: usize,
    /// Accepted proposals, percent of all proposals
    pub conversion_rate: i64,
    /// Mean calculated ROI percent; proposals without results count as 0
    pub average_roi: i64,
    /// Sum of annual CO2 reductions scaled by 10
    pub co2_saved: i64,
}

pub fn dashboard_stats(proposals: &[Proposal], today: NaiveDate) -> DashboardStats {
    if proposals.is_empty() {
        return DashboardStats::default();
    }
    let total = proposals.len() as f64;

    let proposals_this_month = proposals
        .iter()
        .filter(|p| same_month(p.created_at.date_naive(), today))
        .count();

    let accepted = proposals
        .iter()
        .filter(|p| p.status == ProposalStatus::Accepted)
        .count();

    let total_roi: f64 = proposals.iter().map(|p| p.calculated_roi().unwrap_or(0.0)).sum();
    let total_co2: f64 = proposals.iter().map(|p| p.co2_reduction().unwrap_or(0.0)).sum();

    DashboardStats {
        proposals_this_month,
        conversion_rate: round_to_i64(accepted as f64 / total * 100.0),
        average_roi: round_to_i64(total_roi / total),
        co2_saved: round_to_i64(total_co2 * 10.0),
    }
}

pub(crate) fn same_month(date: NaiveDate, today: NaiveDate) -> bool {
    date.year() == today.year() && date.month() == today.month()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    ProposalAccepted,
    ProposalSent,
    CalculationCreated,
}

/// One line of the recent-activity feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    /// Id of the proposal the entry describes
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    pub company_name: Option<String>,
}

/// Activity for the `limit` most recently updated proposals, newest first
pub fn recent_activity(proposals: &[Proposal], companies: &[Company], limit: usize) -> Vec<ActivityEntry> {
    let names: HashMap<&str, &str> = companies
        .iter()
        .map(|c| (c.id.as_str(), c.name.as_str()))
        .collect();

    let mut recent: Vec<&Proposal> = proposals.iter().collect();
    recent.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));

    recent
        .into_iter()
        .take(limit)
        .map(|p| {
            let company_name = names.get(p.company_id.as_str()).map(|n| n.to_string());
            let who = company_name.as_deref().unwrap_or("unknown company");
            let (kind, description) = match p.status {
                ProposalStatus::Accepted => {
                    (ActivityKind::ProposalAccepted, format!("Proposal accepted by {}", who))
                }
                ProposalStatus::Sent => (ActivityKind::ProposalSent, format!("Proposal sent to {}", who)),
                _ => (
                    ActivityKind::CalculationCreated,
                    format!("New ROI calculation for {}", who),
                ),
            };
            ActivityEntry {
                id: p.id.clone(),
                kind,
                description,
                timestamp: p.updated_at,
                company_name,
            }
        })
        .collect()
}
