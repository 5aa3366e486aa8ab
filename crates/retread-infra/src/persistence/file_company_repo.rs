//! File-based company repository

use std::path::Path;

use chrono::Utc;
use tracing::info;

use retread_domain::model::{Company, NewCompany};
use retread_domain::repository::CompanyRepository;
use retread_types::{Error, Result};

use super::json_store::JsonFileStore;
use super::new_id;

/// Companies stored in `companies.json`
pub struct FileCompanyRepository {
    store: JsonFileStore<Company>,
}

impl FileCompanyRepository {
    pub fn open(store_dir: &Path) -> Result<Self> {
        Ok(Self {
            store: JsonFileStore::open(store_dir, "companies.json")?,
        })
    }

    pub fn count(&self) -> usize {
        self.store.len()
    }
}

impl CompanyRepository for FileCompanyRepository {
    fn create(&self, company: NewCompany) -> std::result::Result<Company, Error> {
        let company = company.into_company(new_id(), Utc::now());
        let company = self.store.insert(company)?;
        info!(id = %company.id, name = %company.name, "company created");
        Ok(company)
    }

    fn find_by_id(&self, id: &str) -> std::result::Result<Option<Company>, Error> {
        Ok(self.store.get(id))
    }

    fn find_all(&self) -> std::result::Result<Vec<Company>, Error> {
        let mut companies = self.store.values();
        companies.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(companies)
    }
}
