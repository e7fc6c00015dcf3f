//! Query service - read operations over the station fleet

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::domain::result::{Error, Result};
use crate::domain::{FuelLevels, FuelPrices, Station};
use crate::ports::StationStore;

/// Query service for station lookups and aggregation
pub struct QueryService {
    store: Arc<dyn StationStore>,
}

impl QueryService {
    pub fn new(store: Arc<dyn StationStore>) -> Self {
        Self { store }
    }

    /// All stations, ascending by id
    pub fn list_all(&self) -> Result<Vec<Station>> {
        self.store.list_all_ordered()
    }

    /// Single station by id
    pub fn get_one(&self, id: u32) -> Result<Station> {
        self.store
            .get_by_id(id)?
            .ok_or_else(|| Error::not_found(format!("station {}", id)))
    }

    /// Stations in a province (code or full name) with summed fuel levels.
    ///
    /// An empty match is a valid result with zero totals, not an error.
    pub fn province_levels(&self, token: &str) -> Result<ProvinceSummary> {
        let matches = self.store.get_by_province(token)?;
        debug!(token, matched = matches.len(), "province lookup");

        let totals = FuelLevels {
            benzina: matches.iter().map(|s| s.fuel_level.benzina).sum(),
            diesel: matches.iter().map(|s| s.fuel_level.diesel).sum(),
        };

        Ok(ProvinceSummary {
            province: token.to_string(),
            stations: matches.into_iter().map(StationLevels::from).collect(),
            totals,
        })
    }

    /// The whole fleet as a GeoJSON FeatureCollection, in `list_all` order
    pub fn geo_collection(&self) -> Result<GeoCollection> {
        let features = self
            .store
            .list_all_ordered()?
            .into_iter()
            .map(GeoFeature::from)
            .collect();
        Ok(GeoCollection::new(features))
    }
}

/// Stations and litre totals for one province
#[derive(Debug, Clone, Serialize)]
pub struct ProvinceSummary {
    /// The caller's token, echoed back as given
    #[serde(rename = "provincia")]
    pub province: String,
    #[serde(rename = "distributori")]
    pub stations: Vec<StationLevels>,
    #[serde(rename = "totali_litri")]
    pub totals: FuelLevels,
}

/// Per-station levels and prices inside a province summary
#[derive(Debug, Clone, Serialize)]
pub struct StationLevels {
    pub id: u32,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "provincia")]
    pub province: String,
    #[serde(rename = "livello_carburante")]
    pub fuel_level: FuelLevels,
    #[serde(rename = "prezzi")]
    pub prices: FuelPrices,
}

impl From<Station> for StationLevels {
    fn from(station: Station) -> Self {
        let prices = station.prices();
        Self {
            id: station.id,
            name: station.name,
            province: station.province,
            fuel_level: station.fuel_level,
            prices,
        }
    }
}

/// GeoJSON FeatureCollection over the fleet
#[derive(Debug, Clone, Serialize)]
pub struct GeoCollection {
    #[serde(rename = "type")]
    pub collection_type: String,
    pub features: Vec<GeoFeature>,
}

impl GeoCollection {
    fn new(features: Vec<GeoFeature>) -> Self {
        Self {
            collection_type: "FeatureCollection".to_string(),
            features,
        }
    }
}

/// One station as a GeoJSON Feature
#[derive(Debug, Clone, Serialize)]
pub struct GeoFeature {
    #[serde(rename = "type")]
    pub feature_type: String,
    pub properties: GeoProperties,
    pub geometry: GeoPoint,
}

#[derive(Debug, Clone, Serialize)]
pub struct GeoProperties {
    pub id: u32,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "provincia")]
    pub province: String,
    #[serde(rename = "prezzi")]
    pub prices: FuelPrices,
    #[serde(rename = "livello_carburante")]
    pub fuel_level: FuelLevels,
}

/// GeoJSON Point geometry; coordinates are `[lon, lat]`
#[derive(Debug, Clone, Serialize)]
pub struct GeoPoint {
    #[serde(rename = "type")]
    pub point_type: String,
    pub coordinates: [f64; 2],
}

impl From<Station> for GeoFeature {
    fn from(station: Station) -> Self {
        let prices = station.prices();
        Self {
            feature_type: "Feature".to_string(),
            geometry: GeoPoint {
                point_type: "Point".to_string(),
                coordinates: [station.lon, station.lat],
            },
            properties: GeoProperties {
                id: station.id,
                name: station.name,
                province: station.province,
                prices,
                fuel_level: station.fuel_level,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryStationStore;
    use crate::adapters::seed::demo_stations;

    fn service() -> QueryService {
        QueryService::new(Arc::new(MemoryStationStore::with_stations(demo_stations())))
    }

    #[test]
    fn test_list_all_is_ordered() {
        let ids: Vec<u32> = service().list_all().unwrap().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_get_one() {
        let svc = service();
        assert_eq!(svc.get_one(5).unwrap().province, "NA");
        assert!(matches!(svc.get_one(42), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_province_totals_sum_litres() {
        let summary = service().province_levels("MI").unwrap();
        assert_eq!(summary.stations.len(), 2);
        assert_eq!(summary.totals.benzina, 20000.0);
        assert_eq!(summary.totals.diesel, 22000.0);
    }

    #[test]
    fn test_province_totals_same_for_code_and_name() {
        let svc = service();
        let by_code = svc.province_levels("MI").unwrap();
        let by_name = svc.province_levels("Milano").unwrap();
        assert_eq!(by_code.totals, by_name.totals);
        // the caller's token is echoed, not normalized
        assert_eq!(by_name.province, "Milano");
    }

    #[test]
    fn test_empty_province_is_not_an_error() {
        let summary = service().province_levels("XX").unwrap();
        assert!(summary.stations.is_empty());
        assert_eq!(summary.totals.benzina, 0.0);
        assert_eq!(summary.totals.diesel, 0.0);
    }

    #[test]
    fn test_geo_collection_shape() {
        let geo = service().geo_collection().unwrap();
        assert_eq!(geo.collection_type, "FeatureCollection");
        assert_eq!(geo.features.len(), 6);

        let first = &geo.features[0];
        assert_eq!(first.feature_type, "Feature");
        assert_eq!(first.geometry.point_type, "Point");
        // coordinates are [lon, lat]
        assert_eq!(first.geometry.coordinates, [9.205, 45.515]);

        let json = serde_json::to_value(&geo).unwrap();
        assert_eq!(json["features"][0]["properties"]["nome"], "Iperstaroil Milano Nord");
        assert_eq!(json["type"], "FeatureCollection");
    }
}
