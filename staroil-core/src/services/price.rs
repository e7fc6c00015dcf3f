//! Price update service - province-scoped batch price changes

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::domain::result::{Error, Result};
use crate::domain::PriceChange;
use crate::ports::StationStore;

/// Round a price to the 3 decimals used everywhere on the wire
fn round_price(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Price update service: validates and applies one price change to every
/// station in a resolved province, atomically
pub struct PriceUpdateService {
    store: Arc<dyn StationStore>,
}

impl PriceUpdateService {
    pub fn new(store: Arc<dyn StationStore>) -> Self {
        Self { store }
    }

    /// Update fuel prices for all stations in a province.
    ///
    /// Validation failures and an empty province match are reported as
    /// distinct errors before anything is staged; the commit itself is
    /// all-or-nothing through the store.
    pub fn update_province_prices(
        &self,
        token: &str,
        change: PriceChange,
    ) -> Result<PriceUpdateOutcome> {
        if change.is_empty() {
            return Err(Error::invalid_argument(
                "at least one of benzina or diesel must be specified",
            ));
        }
        if matches!(change.benzina, Some(p) if p <= 0.0) {
            return Err(Error::invalid_argument("benzina price must be > 0"));
        }
        if matches!(change.diesel, Some(p) if p <= 0.0) {
            return Err(Error::invalid_argument("diesel price must be > 0"));
        }

        let matches = self.store.get_by_province(token)?;
        if matches.is_empty() {
            return Err(Error::not_found("no station found for province"));
        }

        let staged = PriceChange {
            benzina: change.benzina.map(round_price),
            diesel: change.diesel.map(round_price),
        };
        let ids: Vec<u32> = matches.iter().map(|s| s.id).collect();

        let applied = self.store.apply_batch_price_update(&ids, &staged)?;
        info!(token, applied, "province price update committed");

        let details = ids
            .iter()
            .map(|id| UpdatedPrices {
                id: *id,
                benzina: staged.benzina,
                diesel: staged.diesel,
            })
            .collect();

        Ok(PriceUpdateOutcome {
            province: token.to_string(),
            applied,
            details,
        })
    }
}

/// Result of a province price update
#[derive(Debug, Clone, Serialize)]
pub struct PriceUpdateOutcome {
    #[serde(rename = "provincia")]
    pub province: String,
    #[serde(rename = "aggiornati")]
    pub applied: usize,
    #[serde(rename = "dettaglio")]
    pub details: Vec<UpdatedPrices>,
}

/// Post-update prices for one station; only the changed fields are present
#[derive(Debug, Clone, Serialize)]
pub struct UpdatedPrices {
    pub id: u32,
    #[serde(rename = "prezzo_benzina", skip_serializing_if = "Option::is_none")]
    pub benzina: Option<f64>,
    #[serde(rename = "prezzo_diesel", skip_serializing_if = "Option::is_none")]
    pub diesel: Option<f64>,
}
