//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic and port interactions. Each service
//! holds the store behind its port trait and never sees the concrete
//! backing.

mod price;
mod query;

pub use price::{PriceUpdateOutcome, PriceUpdateService, UpdatedPrices};
pub use query::{
    GeoCollection, GeoFeature, GeoPoint, GeoProperties, ProvinceSummary, QueryService,
    StationLevels,
};
