//! Seed command - populate the document collection with the demo fleet

use anyhow::Result;
use dialoguer::Confirm;

use staroil_core::adapters::seed::demo_stations;
use staroil_core::adapters::DocumentStationStore;
use staroil_core::config::Config;
use staroil_core::ports::StationStore;

use super::get_staroil_dir;
use crate::output;

pub fn run(force: bool) -> Result<()> {
    let staroil_dir = get_staroil_dir();
    std::fs::create_dir_all(&staroil_dir)?;

    let config = Config::load(&staroil_dir)?;
    if config.demo_mode {
        output::warning("Demo mode is on; queries serve the in-memory fleet, not this collection.");
    }

    let store = DocumentStationStore::open(&staroil_dir)?;
    let existing = store.list_all_ordered()?;

    if !existing.is_empty() && !force {
        let overwrite = Confirm::new()
            .with_prompt(format!(
                "Collection 'distributori' already holds {} station(s). Overwrite with the demo fleet?",
                existing.len()
            ))
            .default(false)
            .interact()?;
        if !overwrite {
            println!("Aborted.");
            return Ok(());
        }
    }

    let count = store.seed(&demo_stations())?;
    output::success(&format!("Seeded {} station(s)", count));

    Ok(())
}
