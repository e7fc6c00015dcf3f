//! Prices command - province-scoped batch price update

use anyhow::Result;

use staroil_core::PriceChange;

use super::get_context;
use crate::output;

pub fn run(province: &str, benzina: Option<f64>, diesel: Option<f64>, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let change = PriceChange { benzina, diesel };

    let outcome = ctx.price_service.update_province_prices(province, change)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["Id", "Benzina", "Diesel"]);
    for detail in &outcome.details {
        table.add_row(vec![
            detail.id.to_string(),
            detail
                .benzina
                .map(output::format_price)
                .unwrap_or_else(|| "unchanged".to_string()),
            detail
                .diesel
                .map(output::format_price)
                .unwrap_or_else(|| "unchanged".to_string()),
        ]);
    }

    println!("{}", table);
    println!();
    output::success(&format!(
        "Updated {} station(s) in {}",
        outcome.applied, outcome.province
    ));

    Ok(())
}
