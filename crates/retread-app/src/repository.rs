//! Repository adapters for persistence layer

use std::path::Path;

use retread_infra::persistence::{
    FileCalculationRepository, FileCompanyRepository, FileProposalRepository,
};
use retread_types::Result;
use tracing::debug;

use crate::app::ProposalService;
use crate::config::Config;

/// File-backed repositories sharing one store directory
pub struct Repositories {
    pub companies: FileCompanyRepository,
    pub proposals: FileProposalRepository,
    pub calculations: FileCalculationRepository,
}

impl Repositories {
    /// Open all repositories under `store_dir`
    pub fn open_at(store_dir: &Path) -> Result<Self> {
        debug!(store_dir = %store_dir.display(), "opening repositories");
        Ok(Self {
            companies: FileCompanyRepository::open(store_dir)?,
            proposals: FileProposalRepository::open(store_dir)?,
            calculations: FileCalculationRepository::open(store_dir)?,
        })
    }

    pub fn proposal_service(
        &self,
    ) -> ProposalService<'_, FileCompanyRepository, FileProposalRepository, FileCalculationRepository>
    {
        ProposalService::new(&self.companies, &self.proposals, &self.calculations)
    }
}

/// Open all repositories in the configured store directory
pub fn open_repositories(config: &Config) -> Result<Repositories> {
    let store_dir = config.store_dir()?;
    Repositories::open_at(&store_dir)
}

