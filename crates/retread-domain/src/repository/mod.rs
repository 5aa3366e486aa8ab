//! Repository trait definitions for data persistence

use crate::model::{
    Calculation, Company, NewCalculation, NewCompany, NewProposal, Proposal, ProposalUpdate,
};
use retread_types::Error;

/// Repository for client companies
pub trait CompanyRepository {
    /// Store a new company, assigning its id and timestamps
    fn create(&self, company: NewCompany) -> Result<Company, Error>;

    /// Find a company by id
    fn find_by_id(&self, id: &str) -> Result<Option<Company>, Error>;

    /// Find all companies, sorted by name
    fn find_all(&self) -> Result<Vec<Company>, Error>;
}

/// Repository for proposals
pub trait ProposalRepository {
    /// Store a new proposal, assigning its id and timestamps
    fn create(&self, proposal: NewProposal) -> Result<Proposal, Error>;

    /// Find a proposal by id
    fn find_by_id(&self, id: &str) -> Result<Option<Proposal>, Error>;

    /// Find all proposals, newest first
    fn find_all(&self) -> Result<Vec<Proposal>, Error>;

    /// Find proposals addressed to one company, newest first
    fn find_by_company(&self, company_id: &str) -> Result<Vec<Proposal>, Error>;

    /// Apply a partial update; fails with `StoreError::NotFound` for unknown ids
    fn update(&self, id: &str, update: ProposalUpdate) -> Result<Proposal, Error>;

    /// Remove a proposal; fails with `StoreError::NotFound` for unknown ids
    fn delete(&self, id: &str) -> Result<(), Error>;
}

/// Repository for stored engine runs
pub trait CalculationRepository {
    fn create(&self, calculation: NewCalculation) -> Result<Calculation, Error>;

    fn find_by_id(&self, id: &str) -> Result<Option<Calculation>, Error>;

    /// Calculations recorded for a proposal, oldest first
    fn find_by_proposal(&self, proposal_id: &str) -> Result<Vec<Calculation>, Error>;

    fn delete(&self, id: &str) -> Result<(), Error>;
}
