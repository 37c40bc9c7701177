//! Header command - print the columns the pet shape binds.

use std::io;

use tabbind::DescriptorTable;

use crate::cli::DelimiterChoice;
use crate::pet::Pet;

pub fn run(delimiter: DelimiterChoice) -> Result<(), Box<dyn std::error::Error>> {
    let table = DescriptorTable::<Pet>::resolve()?;
    tabbind::write_grid(io::stdout().lock(), &[table.header()], &delimiter.grid_config())?;
    Ok(())
}
