//! Interactive menu for the generate tool.
//!
//! Lets users pick an output and tweak the run without memorizing CLI
//! flags.

use dialoguer::{Confirm, Input, Select};
use particourts_court::all_circuits;
use particourts_geography_models::districts::district_id;

use crate::{
    PipelineConfig, Target, assign_ids, current_year, format_circuits, format_district_ids,
    generate,
};

/// Runs the interactive menu against `config`.
///
/// # Errors
///
/// Returns an error if user input or the chosen action fails.
pub fn run(config: &PipelineConfig) -> Result<(), Box<dyn std::error::Error>> {
    let choices = &[
        "Generate all boundaries",
        "Generate district boundaries",
        "Generate circuit boundaries",
        "Assign district court ids",
        "List circuit courts",
        "Look up a district court id",
    ];

    let selection = Select::new()
        .with_prompt("What would you like to do?")
        .items(choices)
        .default(0)
        .interact()?;

    let target = match selection {
        0 => Target::All,
        1 => Target::Districts,
        2 => Target::Circuits,
        3 => {
            print!("{}", format_district_ids(&assign_ids(config)?));
            return Ok(());
        }
        4 => {
            print!("{}", format_circuits(&all_circuits()));
            return Ok(());
        }
        _ => {
            let name: String = Input::new()
                .with_prompt("District court name")
                .interact_text()?;
            println!("{}", district_id(name.trim()));
            return Ok(());
        }
    };

    let mut config = config.clone();
    let default_year = current_year(&config);

    let year: i32 = Input::new()
        .with_prompt("Compute ages and service as of year")
        .default(default_year)
        .interact_text()?;
    config.as_of_year = Some(year);

    let outputs = match target {
        Target::All => format!(
            "{} and {}",
            config.district_output.display(),
            config.circuit_output.display()
        ),
        Target::Districts => config.district_output.display().to_string(),
        Target::Circuits => config.circuit_output.display().to_string(),
    };

    let proceed = Confirm::new()
        .with_prompt(format!("Write {outputs}?"))
        .default(true)
        .interact()?;

    if !proceed {
        println!("Cancelled.");
        return Ok(());
    }

    generate(&config, target)?;

    Ok(())
}
