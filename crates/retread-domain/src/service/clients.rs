//! Per-company proposal summaries

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::dashboard::same_month;
use crate::model::{Company, Proposal};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanySummary {
    pub company: Company,
    pub proposal_count: usize,
    pub last_proposal_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientStats {
    pub total: usize,
    /// Companies with at least one proposal
    pub with_proposals: usize,
    pub new_this_month: usize,
}

pub fn summarize_company(company: &Company, proposals: &[Proposal]) -> CompanySummary {
    let own = proposals.iter().filter(|p| p.company_id == company.id);
    let (proposal_count, last_proposal_at) = own.fold((0, None), |(count, last), p| {
        let last = match last {
            Some(t) if t >= p.created_at => Some(t),
            _ => Some(p.created_at),
        };
        (count + 1, last)
    });
    CompanySummary {
        company: company.clone(),
        proposal_count,
        last_proposal_at,
    }
}

pub fn client_stats(companies: &[Company], proposals: &[Proposal], today: NaiveDate) -> ClientStats {
    ClientStats {
        total: companies.len(),
        with_proposals: companies
            .iter()
            .filter(|c| proposals.iter().any(|p| p.company_id == c.id))
            .count(),
        new_this_month: companies
            .iter()
            .filter(|c| same_month(c.created_at.date_naive(), today))
            .count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FleetProfile, NewCompany, NewProposal, ProposalStatus, VehicleType};
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    fn proposal(id: &str, company_id: &str, when: DateTime<Utc>) -> Proposal {
        NewProposal {
            company_id: company_id.to_string(),
            fleet: FleetProfile::new(42, 80_000, VehicleType::MediumTruck, 1.48).unwrap(),
            results: None,
            status: ProposalStatus::Draft,
        }
        .into_proposal(id.to_string(), when)
    }

    #[test]
    fn test_summary_counts_and_latest() {
        let company = NewCompany::named("Fleet Services SA").into_company("3".to_string(), at(2024, 1, 11));
        let proposals = vec![
            proposal("a", "3", at(2024, 1, 13)),
            proposal("b", "3", at(2024, 2, 1)),
            proposal("c", "1", at(2024, 3, 1)),
        ];
        let summary = summarize_company(&company, &proposals);
        assert_eq!(summary.proposal_count, 2);
        assert_eq!(summary.last_proposal_at, Some(at(2024, 2, 1)));
    }

    #[test]
    fn test_summary_without_proposals() {
        let company = NewCompany::named("Logistics Plus").into_company("2".to_string(), at(2024, 1, 12));
        let summary = summarize_company(&company, &[]);
        assert_eq!(summary.proposal_count, 0);
        assert!(summary.last_proposal_at.is_none());
    }

    #[test]
    fn test_client_stats() {
        let companies = vec![
            NewCompany::named("A").into_company("1".to_string(), at(2024, 1, 10)),
            NewCompany::named("B").into_company("2".to_string(), at(2023, 12, 30)),
        ];
        let proposals = vec![proposal("a", "1", at(2024, 1, 15))];
        let today = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let stats = client_stats(&companies, &proposals, today);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.with_proposals, 1);
        assert_eq!(stats.new_this_month, 1);
    }
}
