//! Query Service - read-side views over stored data
//!
//! Joins proposals with their companies and feeds the dashboard aggregations
//! in `retread_domain::service`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use retread_domain::model::{Calculation, Company, Proposal};
use retread_domain::repository::{CalculationRepository, CompanyRepository, ProposalRepository};
use retread_domain::service::{
    client_stats, dashboard_stats, recent_activity, summarize_company, ActivityEntry, ClientStats,
    CompanySummary, DashboardStats,
};
use retread_types::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposalWithCompany {
    pub proposal: Proposal,
    pub company: Option<Company>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyDetail {
    pub company: Company,
    pub proposals: Vec<Proposal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposalDetail {
    pub proposal: Proposal,
    pub company: Option<Company>,
    pub calculations: Vec<Calculation>,
}

// ============================================================================
// Company Queries
// ============================================================================

/// Company summaries, optionally filtered by a search term
pub fn company_summaries<C, P>(companies: &C, proposals: &P, search: Option<&str>) -> Result<Vec<CompanySummary>>
where
    C: CompanyRepository,
    P: ProposalRepository,
{
    let all_proposals = proposals.find_all()?;
    Ok(companies
        .find_all()?
        .iter()
        .filter(|c| search.map(|term| c.matches(term)).unwrap_or(true))
        .map(|c| summarize_company(c, &all_proposals))
        .collect())
}

pub fn company_detail<C, P>(companies: &C, proposals: &P, id: &str) -> Result<Option<CompanyDetail>>
where
    C: CompanyRepository,
    P: ProposalRepository,
{
    let Some(company) = companies.find_by_id(id)? else {
        return Ok(None);
    };
    let proposals = proposals.find_by_company(&company.id)?;
    Ok(Some(CompanyDetail { company, proposals }))
}

pub fn client_overview<C, P>(companies: &C, proposals: &P, today: NaiveDate) -> Result<ClientStats>
where
    C: CompanyRepository,
    P: ProposalRepository,
{
    Ok(client_stats(&companies.find_all()?, &proposals.find_all()?, today))
}

// ============================================================================
// Proposal Queries
// ============================================================================

/// Proposals newest first, each joined with its company
pub fn proposals_with_company<C, P>(
    companies: &C,
    proposals: &P,
    company_id: Option<&str>,
) -> Result<Vec<ProposalWithCompany>>
where
    C: CompanyRepository,
    P: ProposalRepository,
{
    let list = match company_id {
        Some(id) => proposals.find_by_company(id)?,
        None => proposals.find_all()?,
    };
    list.into_iter()
        .map(|proposal| -> Result<ProposalWithCompany> {
            let company = companies.find_by_id(&proposal.company_id)?;
            Ok(ProposalWithCompany { proposal, company })
        })
        .collect()
}

pub fn proposal_detail<C, P, K>(
    companies: &C,
    proposals: &P,
    calculations: &K,
    id: &str,
) -> Result<Option<ProposalDetail>>
where
    C: CompanyRepository,
    P: ProposalRepository,
    K: CalculationRepository,
{
    let Some(proposal) = proposals.find_by_id(id)? else {
        return Ok(None);
    };
    let company = companies.find_by_id(&proposal.company_id)?;
    let calculations = calculations.find_by_proposal(&proposal.id)?;
    Ok(Some(ProposalDetail {
        proposal,
        company,
        calculations,
    }))
}

// ============================================================================
// Dashboard Queries
// ============================================================================

pub fn dashboard<P: ProposalRepository>(proposals: &P, today: NaiveDate) -> Result<DashboardStats> {
    Ok(dashboard_stats(&proposals.find_all()?, today))
}

pub fn activity<C, P>(companies: &C, proposals: &P, limit: usize) -> Result<Vec<ActivityEntry>>
where
    C: CompanyRepository,
    P: ProposalRepository,
{
    Ok(recent_activity(&proposals.find_all()?, &companies.find_all()?, limit))
}
