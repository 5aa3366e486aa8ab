//! File-based calculation repository

use std::path::Path;

use chrono::Utc;
use tracing::debug;

use retread_domain::model::{Calculation, NewCalculation};
use retread_domain::repository::CalculationRepository;
use retread_types::{Error, Result};

use super::json_store::JsonFileStore;
use super::new_id;

/// Calculations stored in `calculations.json`
pub struct FileCalculationRepository {
    store: JsonFileStore<Calculation>,
}

impl FileCalculationRepository {
    pub fn open(store_dir: &Path) -> Result<Self> {
        Ok(Self {
            store: JsonFileStore::open(store_dir, "calculations.json")?,
        })
    }
}

impl CalculationRepository for FileCalculationRepository {
    fn create(&self, calculation: NewCalculation) -> std::result::Result<Calculation, Error> {
        let calculation = calculation.into_calculation(new_id(), Utc::now());
        let calculation = self.store.insert(calculation)?;
        debug!(id = %calculation.id, proposal_id = %calculation.proposal_id, "calculation recorded");
        Ok(calculation)
    }

    fn delete(&self, id: &str) -> std::result::Result<(), Error> {
        self.store.remove(id)?;
        debug!(id = %id, "calculation deleted");
        Ok(())
    }

    fn find_by_id(&self, id: &str) -> std::result::Result<Option<Calculation>, Error> {
        Ok(self.store.get(id))
    }

    fn find_by_proposal(&self, proposal_id: &str) -> std::result::Result<Vec<Calculation>, Error> {
        let mut own: Vec<_> = self
            .store
            .values()
            .into_iter()
            .filter(|c| c.proposal_id == proposal_id)
            .collect();
        own.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(own)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use retread_domain::model::{FleetProfile, VehicleType};
    use retread_domain::service::roi_engine;
    use tempfile::tempdir;

    fn new_calculation(proposal_id: &str) -> NewCalculation {
        let fleet = FleetProfile::new(87, 120_000, VehicleType::HeavyTruck, 1.55).unwrap();
        let projection = roi_engine::compute(&fleet).unwrap();
        NewCalculation {
            proposal_id: proposal_id.to_string(),
            fleet,
            environmental_impact: roi_engine::environmental_impact(&fleet, &projection),
            projection,
        }
    }

    #[test]
    fn test_find_by_proposal() {
        let dir = tempdir().unwrap();
        let repo = FileCalculationRepository::open(dir.path()).unwrap();
        repo.create(new_calculation("p1")).unwrap();
        repo.create(new_calculation("p2")).unwrap();
        repo.create(new_calculation("p1")).unwrap();
        let own = repo.find_by_proposal("p1").unwrap();
        assert_eq!(own.len(), 2);
        assert!(own[0].created_at <= own[1].created_at);
    }

    #[test]
    fn test_projection_survives_reopen() {
        let dir = tempdir().unwrap();
        let created = {
            let repo = FileCalculationRepository::open(dir.path()).unwrap();
            repo.create(new_calculation("p1")).unwrap()
        };
        let repo = FileCalculationRepository::open(dir.path()).unwrap();
        let found = repo.find_by_id(&created.id).unwrap().unwrap();
        assert_eq!(found.projection, created.projection);
        assert_eq!(found.projection.annual_savings, 290_829);
        assert_eq!(found.environmental_impact.tires_retreaded_per_year, 348);
    }

    #[test]
    fn test_delete_calculation() {
        let dir = tempdir().unwrap();
        let repo = FileCalculationRepository::open(dir.path()).unwrap();
        let kept = repo.create(new_calculation("p1")).unwrap();
        let dropped = repo.create(new_calculation("p1")).unwrap();

        repo.delete(&dropped.id).unwrap();
        let own = repo.find_by_proposal("p1").unwrap();
        assert_eq!(own.len(), 1);
        assert_eq!(own[0].id, kept.id);
    }
}
