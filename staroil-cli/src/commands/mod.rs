//! CLI command implementations

pub mod demo;
pub mod geo;
pub mod prices;
pub mod province;
pub mod seed;
pub mod station;
pub mod stations;

use std::path::PathBuf;

use anyhow::{Context, Result};
use staroil_core::StaroilContext;

/// Get the staroil directory from environment or default
pub fn get_staroil_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("STAROIL_DIR") {
        PathBuf::from(dir)
    } else {
        dirs::home_dir()
            .expect("Could not find home directory")
            .join(".staroil")
    }
}

/// Get or create the staroil context
pub fn get_context() -> Result<StaroilContext> {
    let staroil_dir = get_staroil_dir();

    std::fs::create_dir_all(&staroil_dir)
        .with_context(|| format!("Failed to create staroil directory: {:?}", staroil_dir))?;

    StaroilContext::new(&staroil_dir).context("Failed to initialize staroil context")
}
