// crates/cli/src/args.rs
use crate::options::OutputFormat;
use crate::parsers::TimeoutArg;
use clap::{ArgAction, Parser, ValueHint};
use std::path::PathBuf;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "letter_counts",
    version = crate::VERSION,
    about = "Count letter frequencies across files, one worker per file"
)]
pub struct Args {
    /// Files to count (none is valid and reports all zeros)
    #[arg(value_hint = ValueHint::FilePath)]
    pub paths: Vec<PathBuf>,

    /// Read more file names from this list, one per line (`-` for stdin)
    #[arg(long, value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub files_from: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Give up on workers that have not reported after this many seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<TimeoutArg>,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}
