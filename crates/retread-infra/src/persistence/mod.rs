//! Persistence implementations
//!
//! File-based implementations of the domain repository traits. Each entity
//! type lives in its own JSON file under the store directory.

mod file_calculation_repo;
mod file_company_repo;
mod file_proposal_repo;
mod json_store;

pub use file_calculation_repo::FileCalculationRepository;
pub use file_company_repo::FileCompanyRepository;
pub use file_proposal_repo::FileProposalRepository;
pub use json_store::{JsonFileStore, Record};

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
