//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use tabbind::GridConfig;

/// tabbind: bind delimited text to typed records
#[derive(Parser)]
#[command(name = "tabbind")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decode a data file into pet records and print them
    Decode {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Input delimiter
        #[arg(short, long, default_value = "auto")]
        delimiter: DelimiterChoice,
    },

    /// Decode a data file and encode the records again
    Roundtrip {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Delimiter for input and output
        #[arg(short, long, default_value = "auto")]
        delimiter: DelimiterChoice,
    },

    /// Print the header row of the pet record shape
    Header {
        /// Output delimiter
        #[arg(short, long, default_value = "comma")]
        delimiter: DelimiterChoice,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DelimiterChoice {
    /// Detect from the input; comma on output
    #[default]
    Auto,
    Comma,
    Tab,
    Semicolon,
    Pipe,
}

impl DelimiterChoice {
    pub fn byte(self) -> Option<u8> {
        match self {
            DelimiterChoice::Auto => None,
            DelimiterChoice::Comma => Some(b','),
            DelimiterChoice::Tab => Some(b'\t'),
            DelimiterChoice::Semicolon => Some(b';'),
            DelimiterChoice::Pipe => Some(b'|'),
        }
    }

    pub fn grid_config(self) -> GridConfig {
        GridConfig {
            delimiter: self.byte(),
            ..GridConfig::default()
        }
    }
}

impl std::str::FromStr for DelimiterChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(DelimiterChoice::Auto),
            "comma" | "," | "csv" => Ok(DelimiterChoice::Comma),
            "tab" | "\t" | "tsv" => Ok(DelimiterChoice::Tab),
            "semicolon" | ";" => Ok(DelimiterChoice::Semicolon),
            "pipe" | "|" => Ok(DelimiterChoice::Pipe),
            _ => Err(format!(
                "Unknown delimiter: {}. Use auto, comma, tab, semicolon, or pipe.",
                s
            )),
        }
    }
}

impl std::fmt::Display for DelimiterChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DelimiterChoice::Auto => write!(f, "auto"),
            DelimiterChoice::Comma => write!(f, "comma"),
            DelimiterChoice::Tab => write!(f, "tab"),
            DelimiterChoice::Semicolon => write!(f, "semicolon"),
            DelimiterChoice::Pipe => write!(f, "pipe"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delimiter_choice_parsing() {
        assert_eq!("TSV".parse::<DelimiterChoice>().unwrap(), DelimiterChoice::Tab);
        assert_eq!(";".parse::<DelimiterChoice>().unwrap().byte(), Some(b';'));
        assert_eq!(DelimiterChoice::Auto.grid_config().delimiter, None);
        assert!("space".parse::<DelimiterChoice>().is_err());
    }

    #[test]
    fn test_cli_parses_roundtrip() {
        let cli = Cli::try_parse_from(["tabbind", "-v", "roundtrip", "pets.csv", "-d", "tab"]).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Roundtrip {
                file, delimiter, ..
            } => {
                assert_eq!(file, PathBuf::from("pets.csv"));
                assert_eq!(delimiter, DelimiterChoice::Tab);
            }
            _ => panic!("expected roundtrip"),
        }
    }
}
