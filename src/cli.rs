//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::Parser;
use std::path::PathBuf;

/// intmerge - two-way external merge step
///
/// Merge two text files of sorted integers into one sorted output file.
#[derive(Parser, Debug)]
#[command(
    name = "intmerge",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Merge two sorted integer files into one",
    long_about = "Reads two text files of whitespace-separated integers, each already in \
                  non-decreasing order, and writes their merge to the output file, one \
                  integer per line. Intended as the pairwise merge step of an external \
                  merge sort; the merged count is reported on stderr.",
    after_help = "Example:\n   \
                  intmerge run_0.txt run_1.txt merged.txt\n\n\
                  Inputs are consumed as streams: the first token that is not a valid \
                  integer (or end of file) ends that input."
)]
pub struct Cli {
    /// First sorted input file
    pub input_a: PathBuf,

    /// Second sorted input file
    pub input_b: PathBuf,

    /// Output file (created, or truncated if it exists)
    pub output: PathBuf,
}
