//! Station store port - persistence abstraction

use crate::domain::result::Result;
use crate::domain::{PriceChange, Station};

/// Persistence boundary for the station fleet
///
/// Implementations (adapters) provide the actual storage: a process-local
/// ordered collection or an external document collection. All calls are
/// synchronous from the core's point of view; retry policy and timeouts
/// belong to the adapter.
pub trait StationStore: Send + Sync {
    /// All stations, strictly ascending by id
    fn list_all_ordered(&self) -> Result<Vec<Station>>;

    /// Single station by id, if present
    fn get_by_id(&self, id: u32) -> Result<Option<Station>>;

    /// Stations whose province matches the token, as code or full name,
    /// de-duplicated by id
    fn get_by_province(&self, token: &str) -> Result<Vec<Station>>;

    /// Apply one price change to exactly the stations named by `ids`.
    ///
    /// The batch is atomic with respect to observers of the store: either all
    /// listed updates become visible together or, on underlying failure, none
    /// do and the error is `StoreUnavailable`. Returns the applied count.
    fn apply_batch_price_update(&self, ids: &[u32], change: &PriceChange) -> Result<usize>;
}
