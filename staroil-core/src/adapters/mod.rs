//! Concrete store implementations
//!
//! Two interchangeable backings for the `StationStore` port: a process-local
//! in-memory collection (demo mode) and a JSON document collection on disk.
//! Only one is active at a time; the services never know which.

pub mod documents;
pub mod memory;
pub mod seed;

pub use documents::DocumentStationStore;
pub use memory::MemoryStationStore;
