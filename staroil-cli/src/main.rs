//! Staroil CLI - fuel station fleet in your terminal

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{demo, geo, prices, province, seed, station, stations};

/// Staroil - fuel station fleet in your terminal
#[derive(Parser)]
#[command(name = "staroil", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all stations, ordered by id
    Stations {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single station
    Station {
        /// Station id
        id: u32,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show stations and fuel totals for a province (code or full name)
    Province {
        /// Province token, e.g. "MI" or "Milano"
        token: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the fleet as a GeoJSON FeatureCollection
    Geo,

    /// Update fuel prices for every station in a province
    Prices {
        /// Province token, e.g. "MI" or "Milano"
        province: String,
        /// New benzina price in EUR per litre
        #[arg(long)]
        benzina: Option<f64>,
        /// New diesel price in EUR per litre
        #[arg(long)]
        diesel: Option<f64>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Seed the document collection with the demo fleet
    Seed {
        /// Skip the overwrite confirmation prompt
        #[arg(long, short)]
        force: bool,
    },

    /// Manage demo mode
    Demo {
        #[command(subcommand)]
        command: Option<demo::DemoCommands>,
    },
}

fn main() -> ExitCode {
    init_logging();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Stations { json } => stations::run(json),
        Commands::Station { id, json } => station::run(id, json),
        Commands::Province { token, json } => province::run(&token, json),
        Commands::Geo => geo::run(),
        Commands::Prices {
            province,
            benzina,
            diesel,
            json,
        } => prices::run(&province, benzina, diesel, json),
        Commands::Seed { force } => seed::run(force),
        Commands::Demo { command } => demo::run(command),
    }
}

/// Set up structured logging on stderr; tables and JSON stay clean on stdout
fn init_logging() {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("staroil=warn,staroil_core=warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
