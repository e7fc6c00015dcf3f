//! Staroil Core - Business logic for fuel station fleet management
//!
//! This crate implements the core domain logic following hexagonal architecture:
//!
//! - **domain**: Core business entities (Station, province resolution, errors)
//! - **ports**: Trait definition for the persistence boundary (StationStore)
//! - **services**: Query and price-update orchestration
//! - **adapters**: Concrete stores (in-memory, JSON document collection)

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use adapters::{DocumentStationStore, MemoryStationStore};
use config::Config;
use ports::StationStore;
use services::{PriceUpdateService, QueryService};

// Re-export commonly used types at crate root
pub use domain::result::{Error, Result as CoreResult};
pub use domain::{FuelLevels, FuelPrices, PriceChange, Station};
pub use services::{GeoCollection, PriceUpdateOutcome, ProvinceSummary};

/// Main context for Staroil operations
///
/// This is the primary entry point for all business logic. It holds the
/// configuration, the active station store and both services. Demo mode
/// serves the seeded in-memory fleet; otherwise the `distributori` document
/// collection under the staroil directory is used.
pub struct StaroilContext {
    pub config: Config,
    pub store: Arc<dyn StationStore>,
    pub query_service: QueryService,
    pub price_service: PriceUpdateService,
}

impl StaroilContext {
    /// Create a new Staroil context
    pub fn new(staroil_dir: &Path) -> Result<Self> {
        let config = Config::load(staroil_dir)?;

        let store: Arc<dyn StationStore> = if config.demo_mode {
            Arc::new(MemoryStationStore::with_stations(adapters::seed::demo_stations()))
        } else {
            Arc::new(DocumentStationStore::open(staroil_dir)?)
        };

        let query_service = QueryService::new(Arc::clone(&store));
        let price_service = PriceUpdateService::new(Arc::clone(&store));

        Ok(Self {
            config,
            store,
            query_service,
            price_service,
        })
    }
}
