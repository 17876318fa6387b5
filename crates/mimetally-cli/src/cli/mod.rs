use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod args;


pub use args::{ClassifyArgs, RunArgs, SumArgs};

#[derive(Debug, Parser)]
#[command(name = "mimetally")]
#[command(
    about = "Classify MIME usage-count logs into valid/potential/invalid reports",
    version
)]
pub struct Cli {
    /// Directory holding the mapping file and the environment count files.
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Without a subcommand the full batch runs against the root directory.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Classify every environment count file and write the CSV reports.
    Run(RunArgs),
    /// Sum the count column of one count file (cross-check).
    Sum(SumArgs),
    /// Classify a single label against the mapping table.
    Classify(ClassifyArgs),
}
