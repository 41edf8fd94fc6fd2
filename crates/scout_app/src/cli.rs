use std::path::PathBuf;

use clap::Args;
use scout_logging::{LevelFilter, LogDestination};

/// Flags shared by both binaries.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Directory for result files (default: $SCOUT_OUTPUT_DIR, else the working directory)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
    /// Log debug details to stderr
    #[arg(short, long)]
    pub verbose: bool,
    /// Also write the log to ./scout.log
    #[arg(long)]
    pub log_file: bool,
}

pub fn init_logging(args: &CommonArgs) {
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let destination = if args.log_file {
        LogDestination::Both
    } else {
        LogDestination::Terminal
    };
    scout_logging::initialize(destination, level);
}
