#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Generates court boundary `GeoJSON` for the map.
//!
//! ```text
//! particourts_generate [--config <path>] [--year <year>] all
//! particourts_generate districts
//! particourts_generate circuits
//! particourts_generate assign-ids
//! particourts_generate circuits-list
//! particourts_generate lookup district "District of Colorado"
//! particourts_generate lookup state tx
//! particourts_generate lookup division w
//! particourts_generate lookup compose tx w
//! ```
//!
//! Running with no subcommand enters interactive mode.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use particourts_court::all_circuits;
use particourts_generate::{
    PipelineConfig, Target, assign_ids, format_circuits, format_district_ids, generate,
};
use particourts_geography_models::{
    districts::{compose_district_name, district_id},
    states,
};

#[derive(Parser)]
#[command(
    name = "particourts_generate",
    about = "Court composition map data generator"
)]
struct Cli {
    /// Pipeline config file (defaults to `$PARTICOURTS_CONFIG`)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Year to compute ages and service as of
    #[arg(long, global = true)]
    year: Option<i32>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Enrich district and circuit boundaries
    All,
    /// Enrich district boundaries only
    Districts,
    /// Enrich circuit boundaries only
    Circuits,
    /// Resolve missing district court ids against the boundary file
    AssignIds,
    /// Print the circuit court registry
    CircuitsList,
    /// Query the static lookup tables
    Lookup {
        #[command(subcommand)]
        table: LookupTable,
    },
}

#[derive(Subcommand)]
enum LookupTable {
    /// District court id by full name
    District {
        /// e.g. "Western District of Texas"
        name: String,
    },
    /// State name by postal abbreviation
    State {
        /// e.g. "TX"
        abbreviation: String,
    },
    /// Division direction by code
    Division {
        /// One of E, W, N, S
        code: String,
    },
    /// District court name and id from a state and optional division
    Compose {
        /// e.g. "TX"
        state: String,
        /// One of E, W, N, S
        division: Option<String>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let mut config = PipelineConfig::load(cli.config.as_deref())?;
    if cli.year.is_some() {
        config.as_of_year = cli.year;
    }

    let Some(command) = cli.command else {
        return particourts_generate::interactive::run(&config);
    };

    match command {
        Commands::All => generate(&config, Target::All)?,
        Commands::Districts => generate(&config, Target::Districts)?,
        Commands::Circuits => generate(&config, Target::Circuits)?,
        Commands::AssignIds => print!("{}", format_district_ids(&assign_ids(&config)?)),
        Commands::CircuitsList => print!("{}", format_circuits(&all_circuits())),
        Commands::Lookup { table } => match table {
            LookupTable::District { name } => println!("{}", district_id(&name)),
            LookupTable::State { abbreviation } => {
                println!("{}", states::state_name(&abbreviation));
            }
            LookupTable::Division { code } => println!("{}", states::division(&code)),
            LookupTable::Compose { state, division } => {
                let name = compose_district_name(&state, division.as_deref().unwrap_or_default());
                println!("{}  {name}", district_id(&name));
            }
        },
    }

    Ok(())
}
