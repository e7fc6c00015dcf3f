//! Province command - stations and fuel totals for one province

use anyhow::Result;
use colored::Colorize;

use staroil_core::domain::province::full_province_name;

use super::get_context;
use crate::output;

pub fn run(token: &str, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let summary = ctx.query_service.province_levels(token)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("{}", full_province_name(token).bold());
    println!();

    if summary.stations.is_empty() {
        output::warning("No stations match this province.");
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["Id", "Name", "Benzina in tank", "Diesel in tank"]);
    for station in &summary.stations {
        table.add_row(vec![
            station.id.to_string(),
            station.name.clone(),
            output::format_litres(station.fuel_level.benzina),
            output::format_litres(station.fuel_level.diesel),
        ]);
    }

    println!("{}", table);
    println!();
    println!(
        "Totals: {} benzina, {} diesel",
        output::format_litres(summary.totals.benzina),
        output::format_litres(summary.totals.diesel)
    );

    Ok(())
}
