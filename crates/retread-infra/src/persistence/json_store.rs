//! Generic JSON-file record store

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use retread_domain::model::{Calculation, Company, Proposal};
use retread_types::{Result, StoreError};

/// Entity stored in a [`JsonFileStore`]
pub trait Record: Clone + Serialize + DeserializeOwned {
    /// Entity name used in error messages
    const ENTITY: &'static str;

    fn id(&self) -> &str;
}

impl Record for Company {
    const ENTITY: &'static str = "Company";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Proposal {
    const ENTITY: &'static str = "Proposal";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Calculation {
    const ENTITY: &'static str = "Calculation";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Map of records keyed by id, loaded on open and rewritten on every mutation
///
/// The cache only changes after the file write succeeds.
pub struct JsonFileStore<T: Record> {
    store_path: PathBuf,
    records: RefCell<HashMap<String, T>>,
}

impl<T: Record> JsonFileStore<T> {
    /// Create or load the store file `<store_dir>/<file_name>`
    pub fn open(store_dir: &Path, file_name: &str) -> Result<Self> {
        fs::create_dir_all(store_dir)?;
        let store_path = store_dir.join(file_name);

        let records: HashMap<String, T> = if store_path.exists() {
            let file = File::open(&store_path)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).map_err(|e| {
                StoreError::Corrupted(format!("{}: {}", store_path.display(), e))
            })?
        } else {
            HashMap::new()
        };

        debug!(
            entity = T::ENTITY,
            path = %store_path.display(),
            count = records.len(),
            "opened record store"
        );

        Ok(Self {
            store_path,
            records: RefCell::new(records),
        })
    }

    pub fn path(&self) -> &Path {
        &self.store_path
    }

    fn persist(&self, records: &HashMap<String, T>) -> Result<()> {
        let file = File::create(&self.store_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, records)?;
        writer.flush()?;
        Ok(())
    }

    /// Write `next` to disk, then make it the cached state
    fn commit(&self, next: HashMap<String, T>) -> Result<()> {
        self.persist(&next)?;
        *self.records.borrow_mut() = next;
        Ok(())
    }

    /// Insert or replace a record
    pub fn insert(&self, record: T) -> Result<T> {
        let mut next = self.records.borrow().clone();
        next.insert(record.id().to_string(), record.clone());
        self.commit(next)?;
        Ok(record)
    }

    /// Remove a record; fails for unknown ids
    pub fn remove(&self, id: &str) -> Result<T> {
        let mut next = self.records.borrow().clone();
        let removed = next.remove(id).ok_or_else(|| StoreError::NotFound {
            entity: T::ENTITY,
            id: id.to_string(),
        })?;
        self.commit(next)?;
        Ok(removed)
    }

    pub fn get(&self, id: &str) -> Option<T> {
        self.records.borrow().get(id).cloned()
    }

    /// All records in unspecified order
    pub fn values(&self) -> Vec<T> {
        self.records.borrow().values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }

    /// Modify a record in place and persist; fails for unknown ids
    pub fn update_with<F>(&self, id: &str, f: F) -> Result<T>
    where
        F: FnOnce(&mut T),
    {
        let mut next = self.records.borrow().clone();
        let record = next.get_mut(id).ok_or_else(|| StoreError::NotFound {
            entity: T::ENTITY,
            id: id.to_string(),
        })?;
        f(record);
        let updated = record.clone();
        self.commit(next)?;
        Ok(updated)
    }
}
