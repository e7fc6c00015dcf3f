//! Stations command - list the whole fleet

use anyhow::Result;

use super::get_context;
use crate::output;

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let stations = ctx.query_service.list_all()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&stations)?);
        return Ok(());
    }

    if stations.is_empty() {
        output::warning("No stations in the store. Run 'staroil seed' or 'staroil demo on'.");
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["Id", "Name", "Province", "Benzina", "Diesel"]);
    for station in &stations {
        table.add_row(vec![
            station.id.to_string(),
            station.name.clone(),
            station.province.clone(),
            output::format_price(station.price_benzina),
            output::format_price(station.price_diesel),
        ]);
    }

    println!("{}", table);
    println!();
    println!("{} station(s)", stations.len());

    Ok(())
}
