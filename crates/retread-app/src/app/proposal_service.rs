//! Proposal Service - ROI calculation and proposal lifecycle
//!
//! Every engine run attached to a proposal is also recorded as a
//! `Calculation`, so a proposal's history of projections is preserved when
//! its fleet parameters change. When the second of the two writes fails the
//! first one is removed again, so a proposal never lacks its calculation.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use retread_domain::model::{
    Calculation, FleetProfile, NewCalculation, NewProposal, Proposal, ProposalResults,
    ProposalStatus, ProposalUpdate, RoiProjection, RoiRequest,
};
use retread_domain::repository::{CalculationRepository, CompanyRepository, ProposalRepository};
use retread_domain::service::roi_engine;
use retread_types::{Result, StoreError};

/// Validate a loosely-typed request and run the engine
pub fn calculate(request: &RoiRequest) -> Result<RoiProjection> {
    let fleet = FleetProfile::try_from(request)?;
    Ok(roi_engine::compute(&fleet)?)
}

/// A proposal together with the calculation that produced its figures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposalRecord {
    pub proposal: Proposal,
    pub calculation: Calculation,
}

pub struct ProposalService<'a, C, P, K> {
    companies: &'a C,
    proposals: &'a P,
    calculations: &'a K,
}

impl<'a, C, P, K> ProposalService<'a, C, P, K>
where
    C: CompanyRepository,
    P: ProposalRepository,
    K: CalculationRepository,
{
    pub fn new(companies: &'a C, proposals: &'a P, calculations: &'a K) -> Self {
        Self {
            companies,
            proposals,
            calculations,
        }
    }

    /// Compute and store a draft proposal for an existing company
    pub fn create(&self, company_id: &str, fleet: FleetProfile) -> Result<ProposalRecord> {
        self.create_with_status(company_id, fleet, ProposalStatus::Draft)
    }

    pub fn create_with_status(
        &self,
        company_id: &str,
        fleet: FleetProfile,
        status: ProposalStatus,
    ) -> Result<ProposalRecord> {
        if self.companies.find_by_id(company_id)?.is_none() {
            return Err(StoreError::UnknownReference {
                entity: "Company",
                id: company_id.to_string(),
            }
            .into());
        }

        let projection = roi_engine::compute(&fleet)?;
        let proposal = self.proposals.create(NewProposal {
            company_id: company_id.to_string(),
            fleet,
            results: Some(ProposalResults::from(&projection)),
            status,
        })?;
        let calculation = match self.record_calculation(&proposal.id, &fleet, projection) {
            Ok(calculation) => calculation,
            Err(e) => {
                if let Err(rollback) = self.proposals.delete(&proposal.id) {
                    warn!(proposal_id = %proposal.id, error = %rollback, "failed to remove proposal without calculation");
                }
                return Err(e);
            }
        };

        info!(
            proposal_id = %proposal.id,
            roi_percent = calculation.projection.roi_percent,
            "proposal created"
        );
        Ok(ProposalRecord {
            proposal,
            calculation,
        })
    }

    pub fn update_status(&self, id: &str, status: ProposalStatus) -> Result<Proposal> {
        let proposal = self.proposals.update(id, ProposalUpdate::status(status))?;
        info!(proposal_id = %id, status = %status, "proposal status changed");
        Ok(proposal)
    }

    /// Replace the fleet parameters of a proposal and recompute its figures
    pub fn recalculate(&self, id: &str, fleet: FleetProfile) -> Result<ProposalRecord> {
        if self.proposals.find_by_id(id)?.is_none() {
            return Err(StoreError::NotFound {
                entity: "Proposal",
                id: id.to_string(),
            }
            .into());
        }

        let projection = roi_engine::compute(&fleet)?;
        let results = ProposalResults::from(&projection);
        let calculation = self.record_calculation(id, &fleet, projection)?;
        let update = ProposalUpdate {
            status: None,
            fleet: Some(fleet),
            results: Some(results),
        };
        let proposal = match self.proposals.update(id, update) {
            Ok(proposal) => proposal,
            Err(e) => {
                if let Err(rollback) = self.calculations.delete(&calculation.id) {
                    warn!(calculation_id = %calculation.id, error = %rollback, "failed to remove orphaned calculation");
                }
                return Err(e);
            }
        };

        info!(proposal_id = %id, "proposal recalculated");
        Ok(ProposalRecord {
            proposal,
            calculation,
        })
    }

    fn record_calculation(
        &self,
        proposal_id: &str,
        fleet: &FleetProfile,
        projection: RoiProjection,
    ) -> Result<Calculation> {
        self.calculations.create(NewCalculation {
            proposal_id: proposal_id.to_string(),
            fleet: *fleet,
            environmental_impact: roi_engine::environmental_impact(fleet, &projection),
            projection,
        })
    }
}
