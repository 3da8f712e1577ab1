//! Merge command implementation
//!
//! Owns the file handles for one invocation: the two inputs are opened for
//! reading and the output is created (or truncated) before any merge work
//! starts, and all three are dropped on every exit path. The merged count
//! goes to stderr so the output file carries data only.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::cli::Cli;
use crate::error::{IntmergeError, Result};
use crate::merge;

/// Run merge command
pub fn run(cli: Cli) -> Result<()> {
    let input_a = open_input(&cli.input_a)?;
    let input_b = open_input(&cli.input_b)?;
    let output =
        File::create(&cli.output).map_err(|e| IntmergeError::OutputCreateFailed {
            path: cli.output.display().to_string(),
            reason: e.to_string(),
        })?;

    let mut writer = BufWriter::new(output);
    let result = merge::merge(input_a, input_b, &mut writer)?;
    // Surface write-behind failures (e.g. a full disk) before reporting.
    writer.flush()?;

    eprintln!("{} items merged", result.items_written);
    Ok(())
}

/// Open one input file for buffered reading, naming the path on failure
fn open_input(path: &Path) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| IntmergeError::InputOpenFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
}
