//! Geo command - the fleet as a GeoJSON FeatureCollection

use anyhow::Result;

use super::get_context;

pub fn run() -> Result<()> {
    let ctx = get_context()?;
    let collection = ctx.query_service.geo_collection()?;
    println!("{}", serde_json::to_string_pretty(&collection)?);
    Ok(())
}
