//! Core domain entities
//!
//! Pure data structures and pure logic only - no I/O or external
//! dependencies live here.

pub mod province;
pub mod result;
mod station;

pub use station::{FuelLevels, FuelPrices, PriceChange, Station};
