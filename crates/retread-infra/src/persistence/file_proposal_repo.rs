//! File-based proposal repository

use std::path::Path;

use chrono::Utc;
use tracing::info;

use retread_domain::model::{NewProposal, Proposal, ProposalUpdate};
use retread_domain::repository::ProposalRepository;
use retread_types::{Error, Result};

use super::json_store::JsonFileStore;
use super::new_id;

/// Proposals stored in `proposals.json`
pub struct FileProposalRepository {
    store: JsonFileStore<Proposal>,
}

impl FileProposalRepository {
    pub fn open(store_dir: &Path) -> Result<Self> {
        Ok(Self {
            store: JsonFileStore::open(store_dir, "proposals.json")?,
        })
    }

    fn newest_first(mut proposals: Vec<Proposal>) -> Vec<Proposal> {
        proposals.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
        proposals
    }
}

impl ProposalRepository for FileProposalRepository {
    fn create(&self, proposal: NewProposal) -> std::result::Result<Proposal, Error> {
        let proposal = proposal.into_proposal(new_id(), Utc::now());
        let proposal = self.store.insert(proposal)?;
        info!(id = %proposal.id, company_id = %proposal.company_id, "proposal created");
        Ok(proposal)
    }

    fn find_by_id(&self, id: &str) -> std::result::Result<Option<Proposal>, Error> {
        Ok(self.store.get(id))
    }

    fn find_all(&self) -> std::result::Result<Vec<Proposal>, Error> {
        Ok(Self::newest_first(self.store.values()))
    }

    fn find_by_company(&self, company_id: &str) -> std::result::Result<Vec<Proposal>, Error> {
        let own = self
            .store
            .values()
            .into_iter()
            .filter(|p| p.company_id == company_id)
            .collect();
        Ok(Self::newest_first(own))
    }

    fn update(&self, id: &str, update: ProposalUpdate) -> std::result::Result<Proposal, Error> {
        let now = Utc::now();
        let updated = self.store.update_with(id, |p| p.apply(update, now))?;
        info!(id = %updated.id, status = %updated.status, "proposal updated");
        Ok(updated)
    }

    fn delete(&self, id: &str) -> std::result::Result<(), Error> {
        self.store.remove(id)?;
        info!(id = %id, "proposal deleted");
        Ok(())
    }
}
