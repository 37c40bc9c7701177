//! Decode command - print the records a data file decodes to.

use std::path::PathBuf;

use colored::Colorize;

use crate::cli::DelimiterChoice;
use crate::pet::Pet;

pub fn run(
    file: PathBuf,
    json_output: bool,
    delimiter: DelimiterChoice,
) -> Result<(), Box<dyn std::error::Error>> {
    let grid = tabbind::read_path(&file, &delimiter.grid_config())?;
    let pets: Vec<Pet> = tabbind::decode_all(&grid.rows)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&pets)?);
        return Ok(());
    }

    println!(
        "{} {} records from {}",
        "Decoded".green().bold(),
        pets.len().to_string().white().bold(),
        file.display().to_string().cyan()
    );
    for pet in &pets {
        println!("  {:?}", pet);
    }

    Ok(())
}
