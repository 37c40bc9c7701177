//! Roundtrip command - decode a data file and encode it again.

use std::io;
use std::path::PathBuf;

use colored::Colorize;

use crate::cli::DelimiterChoice;
use crate::pet::Pet;

pub fn run(
    file: PathBuf,
    output: Option<PathBuf>,
    delimiter: DelimiterChoice,
) -> Result<(), Box<dyn std::error::Error>> {
    let grid = tabbind::read_path(&file, &delimiter.grid_config())?;
    let pets: Vec<Pet> = tabbind::decode_all(&grid.rows)?;
    let encoded = tabbind::encode(&pets)?;

    // Write back with whatever delimiter the input turned out to use.
    let config = grid.config(&delimiter.grid_config());

    match output {
        Some(path) => {
            tabbind::write_path(&path, &encoded, &config)?;
            eprintln!(
                "{} {} records to {}",
                "Wrote".green().bold(),
                pets.len(),
                path.display().to_string().cyan()
            );
        }
        None => tabbind::write_grid(io::stdout().lock(), &encoded, &config)?,
    }

    Ok(())
}
