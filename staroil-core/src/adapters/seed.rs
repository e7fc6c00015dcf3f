//! Seed fleet for demo mode and initial document-store population

use crate::domain::{FuelLevels, Station};

/// The six Iperstaroil stations
pub fn demo_stations() -> Vec<Station> {
    vec![
        Station {
            id: 1,
            name: "Iperstaroil Milano Nord".to_string(),
            province: "MI".to_string(),
            lat: 45.515,
            lon: 9.205,
            fuel_level: FuelLevels {
                benzina: 12000.0,
                diesel: 15000.0,
            },
            price_benzina: 1.949,
            price_diesel: 1.829,
        },
        Station {
            id: 2,
            name: "Iperstaroil Milano Sud".to_string(),
            province: "MI".to_string(),
            lat: 45.405,
            lon: 9.165,
            fuel_level: FuelLevels {
                benzina: 8000.0,
                diesel: 7000.0,
            },
            price_benzina: 1.939,
            price_diesel: 1.819,
        },
        Station {
            id: 3,
            name: "Iperstaroil Torino Centro".to_string(),
            province: "TO".to_string(),
            lat: 45.071,
            lon: 7.686,
            fuel_level: FuelLevels {
                benzina: 6000.0,
                diesel: 5000.0,
            },
            price_benzina: 1.929,
            price_diesel: 1.809,
        },
        Station {
            id: 4,
            name: "Iperstaroil Roma Est".to_string(),
            province: "RM".to_string(),
            lat: 41.909,
            lon: 12.62,
            fuel_level: FuelLevels {
                benzina: 14000.0,
                diesel: 11000.0,
            },
            price_benzina: 1.919,
            price_diesel: 1.799,
        },
        Station {
            id: 5,
            name: "Iperstaroil Napoli Ovest".to_string(),
            province: "NA".to_string(),
            lat: 40.851,
            lon: 14.268,
            fuel_level: FuelLevels {
                benzina: 3000.0,
                diesel: 2500.0,
            },
            price_benzina: 1.959,
            price_diesel: 1.839,
        },
        Station {
            id: 6,
            name: "Iperstaroil Bologna Fiera".to_string(),
            province: "BO".to_string(),
            lat: 44.512,
            lon: 11.36,
            fuel_level: FuelLevels {
                benzina: 9000.0,
                diesel: 10500.0,
            },
            price_benzina: 1.925,
            price_diesel: 1.805,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_fleet_is_valid() {
        let stations = demo_stations();
        assert_eq!(stations.len(), 6);
        for station in &stations {
            assert!(station.validate().is_ok(), "station {} invalid", station.id);
        }
    }
}
