//! Document-collection station store
//!
//! Stations live in one JSON document collection named `distributori`, keyed
//! by the stringified station id - the same addressing the hosted document
//! database uses. The collection is a single file; every write goes through
//! a temp file in the same directory followed by an atomic rename, and a
//! sidecar lock file (shared for reads, exclusive for writes) serializes
//! access across processes. A reader therefore always sees either the
//! collection before a batch commit or after it, never in between.

use std::collections::{BTreeMap, HashSet};
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tracing::debug;

use crate::domain::province::province_matches;
use crate::domain::result::{Error, Result};
use crate::domain::{PriceChange, Station};
use crate::ports::StationStore;

/// Collection name, shared with the original deployment
const COLLECTION: &str = "distributori";

fn store_err(err: impl std::fmt::Display) -> Error {
    Error::store_unavailable(err.to_string())
}

/// Station store backed by a JSON document collection on disk
pub struct DocumentStationStore {
    path: PathBuf,
    lock_path: PathBuf,
}

impl DocumentStationStore {
    /// Open (or prepare) the collection under the given directory
    pub fn open(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir).map_err(store_err)?;
        Ok(Self {
            path: dir.join(format!("{}.json", COLLECTION)),
            lock_path: dir.join(format!("{}.lock", COLLECTION)),
        })
    }

    /// Replace the whole collection with the given stations.
    ///
    /// Seeding is a persistence-adapter affair: the core store contract has
    /// no create or delete operations.
    pub fn seed(&self, stations: &[Station]) -> Result<usize> {
        for station in stations {
            station.validate().map_err(Error::invalid_argument)?;
        }
        let _guard = self.acquire_lock(true)?;
        let documents: BTreeMap<String, Station> = stations
            .iter()
            .map(|s| (s.id.to_string(), s.clone()))
            .collect();
        self.write_documents(&documents)?;
        debug!(count = stations.len(), "seeded {} collection", COLLECTION);
        Ok(stations.len())
    }

    /// Take the collection lock; released when the returned handle drops
    fn acquire_lock(&self, exclusive: bool) -> Result<File> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .open(&self.lock_path)
            .map_err(store_err)?;
        if exclusive {
            FileExt::lock_exclusive(&file).map_err(store_err)?;
        } else {
            FileExt::lock_shared(&file).map_err(store_err)?;
        }
        Ok(file)
    }

    /// Read the collection; a missing file is the empty collection
    fn read_documents(&self) -> Result<BTreeMap<String, Station>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(err) => return Err(store_err(err)),
        };
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content).map_err(store_err)
    }

    /// Atomically replace the collection file
    fn write_documents(&self, documents: &BTreeMap<String, Station>) -> Result<()> {
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(store_err)?;
        serde_json::to_writer_pretty(&mut tmp, documents).map_err(store_err)?;
        tmp.persist(&self.path).map_err(store_err)?;
        Ok(())
    }

    fn ordered(documents: BTreeMap<String, Station>) -> Vec<Station> {
        let mut stations: Vec<Station> = documents.into_values().collect();
        stations.sort_by_key(|s| s.id);
        stations
    }
}

impl StationStore for DocumentStationStore {
    fn list_all_ordered(&self) -> Result<Vec<Station>> {
        let _guard = self.acquire_lock(false)?;
        Ok(Self::ordered(self.read_documents()?))
    }

    fn get_by_id(&self, id: u32) -> Result<Option<Station>> {
        let _guard = self.acquire_lock(false)?;
        let mut documents = self.read_documents()?;
        Ok(documents.remove(&id.to_string()))
    }

    fn get_by_province(&self, token: &str) -> Result<Vec<Station>> {
        let _guard = self.acquire_lock(false)?;
        let mut seen = HashSet::new();
        Ok(Self::ordered(self.read_documents()?)
            .into_iter()
            .filter(|s| province_matches(&s.province, token))
            .filter(|s| seen.insert(s.id))
            .collect())
    }

    fn apply_batch_price_update(&self, ids: &[u32], change: &PriceChange) -> Result<usize> {
        let _guard = self.acquire_lock(true)?;
        let mut documents = self.read_documents()?;

        for id in ids {
            if !documents.contains_key(&id.to_string()) {
                return Err(Error::store_unavailable(format!(
                    "station {} vanished before commit",
                    id
                )));
            }
        }

        for id in ids {
            if let Some(station) = documents.get_mut(&id.to_string()) {
                change.apply_to(station);
            }
        }

        self.write_documents(&documents)?;
        debug!(count = ids.len(), "committed batch price update");
        Ok(ids.len())
    }
}
