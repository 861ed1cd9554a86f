use crate::services::DEFAULT_PARALLELISM;
use clap::builder::TypedValueParser;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dir_processor")]
#[command(about = "Rename files with sequence numbers and strip markup tags in parallel")]
#[command(version)]
pub struct Cli {
    /// Target directory to process
    pub dir: PathBuf,

    /// Number of parallel workers
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_PARALLELISM,
        value_parser = clap::value_parser!(u64).range(1..).map(|n| n as usize)
    )]
    pub parallel: usize,

    /// Assign sequence numbers in alphabetical order instead of listing order
    #[arg(long)]
    pub sort: bool,

    /// Process every file and report all failures instead of stopping at the first
    #[arg(long)]
    pub keep_going: bool,

    /// Write a JSON run report to this path
    #[arg(short, long)]
    pub report: Option<PathBuf>,

    /// Suppress console progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
