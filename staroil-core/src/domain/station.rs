//! Station domain model

use serde::{Deserialize, Serialize};

fn default_price_benzina() -> f64 {
    1.899
}

fn default_price_diesel() -> f64 {
    1.799
}

/// A fuel distribution station
///
/// Field names on the wire are the canonical Italian ones consumed by the
/// existing web frontends; they must not change. The province is always the
/// short code ("MI"); the full name is a lookup alias, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: u32,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "provincia")]
    pub province: String,
    pub lat: f64,
    pub lon: f64,
    /// Litres currently held per fuel type; read-only to this core
    #[serde(rename = "livello_carburante", default)]
    pub fuel_level: FuelLevels,
    /// Price per litre in EUR; mutated only through the price update service
    #[serde(rename = "prezzo_benzina", default = "default_price_benzina")]
    pub price_benzina: f64,
    #[serde(rename = "prezzo_diesel", default = "default_price_diesel")]
    pub price_diesel: f64,
}

impl Station {
    /// Create a station with default prices and empty tanks
    pub fn new(id: u32, name: impl Into<String>, province: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            id,
            name: name.into(),
            province: province.into(),
            lat,
            lon,
            fuel_level: FuelLevels::default(),
            price_benzina: default_price_benzina(),
            price_diesel: default_price_diesel(),
        }
    }

    /// Current prices as a wire-shaped pair
    pub fn prices(&self) -> FuelPrices {
        FuelPrices {
            benzina: self.price_benzina,
            diesel: self.price_diesel,
        }
    }

    /// Validate station data against the store invariants
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.id == 0 {
            return Err("station id must be positive");
        }
        if self.name.trim().is_empty() {
            return Err("station name cannot be empty");
        }
        if self.province.trim().is_empty() {
            return Err("province cannot be empty");
        }
        if self.price_benzina <= 0.0 || self.price_diesel <= 0.0 {
            return Err("fuel prices must be > 0");
        }
        if self.fuel_level.benzina < 0.0 || self.fuel_level.diesel < 0.0 {
            return Err("fuel levels cannot be negative");
        }
        Ok(())
    }
}

/// Litres held per fuel type
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FuelLevels {
    #[serde(default)]
    pub benzina: f64,
    #[serde(default)]
    pub diesel: f64,
}

/// Price per litre per fuel type
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuelPrices {
    pub benzina: f64,
    pub diesel: f64,
}

/// A partial price change: absent fields are left untouched
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PriceChange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benzina: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diesel: Option<f64>,
}

impl PriceChange {
    /// True when neither fuel price is specified
    pub fn is_empty(&self) -> bool {
        self.benzina.is_none() && self.diesel.is_none()
    }

    /// Apply the change to a station in place
    pub fn apply_to(&self, station: &mut Station) {
        if let Some(benzina) = self.benzina {
            station.price_benzina = benzina;
        }
        if let Some(diesel) = self.diesel {
            station.price_diesel = diesel;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_station_validation() {
        let mut station = Station::new(1, "Iperstaroil Milano Nord", "MI", 45.515, 9.205);
        assert!(station.validate().is_ok());

        station.price_benzina = 0.0;
        assert!(station.validate().is_err());

        station.price_benzina = 1.949;
        station.fuel_level.diesel = -1.0;
        assert!(station.validate().is_err());
    }

    #[test]
    fn test_wire_field_names() {
        let station = Station::new(3, "Iperstaroil Torino Centro", "TO", 45.071, 7.686);
        let json = serde_json::to_value(&station).unwrap();

        assert_eq!(json["nome"], "Iperstaroil Torino Centro");
        assert_eq!(json["provincia"], "TO");
        assert!(json["livello_carburante"].get("benzina").is_some());
        assert_eq!(json["prezzo_benzina"], 1.899);
        assert_eq!(json["prezzo_diesel"], 1.799);
    }

    #[test]
    fn test_missing_prices_default_on_load() {
        // Documents written before the price fields existed load with defaults
        let json = r#"{"id": 9, "nome": "Test", "provincia": "MI", "lat": 45.0, "lon": 9.0}"#;
        let station: Station = serde_json::from_str(json).unwrap();
        assert_eq!(station.price_benzina, 1.899);
        assert_eq!(station.price_diesel, 1.799);
        assert_eq!(station.fuel_level, FuelLevels::default());
    }

    #[test]
    fn test_price_change_apply() {
        let mut station = Station::new(1, "Test", "MI", 45.0, 9.0);
        let change = PriceChange {
            benzina: Some(1.999),
            diesel: None,
        };
        change.apply_to(&mut station);
        assert_eq!(station.price_benzina, 1.999);
        assert_eq!(station.price_diesel, 1.799);
    }
}
