//! Delimiter detection.

use std::io::{BufRead, BufReader};

/// Delimiters to try when auto-detecting.
const DELIMITERS: &[u8] = &[b'\t', b',', b';', b'|'];

/// Lines sampled when auto-detecting.
const SAMPLE_LINES: usize = 10;

/// Pick the delimiter that splits the first lines most consistently.
///
/// Falls back to comma when nothing stands out, including for empty input.
pub(crate) fn detect_delimiter(bytes: &[u8], quote: u8) -> u8 {
    let lines: Vec<String> = BufReader::new(bytes)
        .lines()
        .take(SAMPLE_LINES)
        .map_while(|l| l.ok())
        .filter(|l| !l.trim().is_empty())
        .collect();

    let mut best_delimiter = b',';
    let mut best_score = 0;

    for &delim in DELIMITERS {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| count_delimiter_in_line(line, delim, quote))
            .collect();

        let Some(&first_count) = counts.first() else {
            continue;
        };
        if first_count == 0 {
            continue;
        }

        let consistent = counts.iter().all(|&c| c == first_count);
        let mean = counts.iter().sum::<usize>() as f64 / counts.len() as f64;
        let variance = counts
            .iter()
            .map(|&c| (c as f64 - mean).powi(2))
            .sum::<f64>()
            / counts.len() as f64;

        // Tab wins ties: it rarely shows up inside real values.
        let score = if consistent {
            first_count * 1000 + if delim == b'\t' { 100 } else { 0 }
        } else if variance < 1.0 {
            first_count * 100
        } else {
            first_count
        };

        if score > best_score {
            best_score = score;
            best_delimiter = delim;
        }
    }

    best_delimiter
}

/// Count delimiter occurrences in a line, skipping quoted sections.
fn count_delimiter_in_line(line: &str, delimiter: u8, quote: u8) -> usize {
    let delim_char = delimiter as char;
    let quote_char = quote as char;
    let mut count = 0;
    let mut in_quotes = false;

    for ch in line.chars() {
        if ch == quote_char {
            in_quotes = !in_quotes;
        } else if ch == delim_char && !in_quotes {
            count += 1;
        }
    }

    count
}
