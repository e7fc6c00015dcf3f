//! In-memory station store
//!
//! A process-local ordered collection behind a read-write lock. Reads share
//! the read lock and never block each other; the batch price commit is the
//! sole mutation path and holds the write lock for its whole read-check-write
//! cycle, so readers never observe a partially-applied batch.

use std::collections::HashSet;
use std::sync::RwLock;

use crate::domain::province::province_matches;
use crate::domain::result::{Error, Result};
use crate::domain::{PriceChange, Station};
use crate::ports::StationStore;

/// In-memory station store, kept sorted by id
pub struct MemoryStationStore {
    stations: RwLock<Vec<Station>>,
}

impl MemoryStationStore {
    pub fn new() -> Self {
        Self::with_stations(Vec::new())
    }

    /// Create a store holding the given stations, in any input order
    pub fn with_stations(mut stations: Vec<Station>) -> Self {
        stations.sort_by_key(|s| s.id);
        Self {
            stations: RwLock::new(stations),
        }
    }
}

impl Default for MemoryStationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StationStore for MemoryStationStore {
    fn list_all_ordered(&self) -> Result<Vec<Station>> {
        let stations = self.stations.read().unwrap();
        Ok(stations.clone())
    }

    fn get_by_id(&self, id: u32) -> Result<Option<Station>> {
        let stations = self.stations.read().unwrap();
        Ok(stations.iter().find(|s| s.id == id).cloned())
    }

    fn get_by_province(&self, token: &str) -> Result<Vec<Station>> {
        let stations = self.stations.read().unwrap();
        let mut seen = HashSet::new();
        Ok(stations
            .iter()
            .filter(|s| province_matches(&s.province, token))
            .filter(|s| seen.insert(s.id))
            .cloned()
            .collect())
    }

    fn apply_batch_price_update(&self, ids: &[u32], change: &PriceChange) -> Result<usize> {
        let mut stations = self.stations.write().unwrap();

        // Stage against the current state before touching anything: a missing
        // id means the store no longer matches what the caller resolved.
        for id in ids {
            if !stations.iter().any(|s| s.id == *id) {
                return Err(Error::store_unavailable(format!(
                    "station {} vanished before commit",
                    id
                )));
            }
        }

        for station in stations.iter_mut() {
            if ids.contains(&station.id) {
                change.apply_to(station);
            }
        }

        Ok(ids.len())
    }
}
