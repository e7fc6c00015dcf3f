//! Station command - show one station in detail

use anyhow::Result;
use colored::Colorize;

use super::get_context;
use crate::output;

pub fn run(id: u32, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let station = ctx.query_service.get_one(id)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&station)?);
        return Ok(());
    }

    println!("{}", station.name.bold());
    println!();

    let mut table = output::create_table();
    table.add_row(vec!["Id", &station.id.to_string()]);
    table.add_row(vec!["Province", &station.province]);
    table.add_row(vec![
        "Location",
        &format!("{:.3}, {:.3}", station.lat, station.lon),
    ]);
    table.add_row(vec![
        "Benzina",
        &format!(
            "{} ({} in tank)",
            output::format_price(station.price_benzina),
            output::format_litres(station.fuel_level.benzina)
        ),
    ]);
    table.add_row(vec![
        "Diesel",
        &format!(
            "{} ({} in tank)",
            output::format_price(station.price_diesel),
            output::format_litres(station.fuel_level.diesel)
        ),
    ]);

    println!("{}", table);

    Ok(())
}
