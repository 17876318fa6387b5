use clap::Args;

pub const DEFAULT_MAPPING: &str = "mimeTypes.csv";

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Mapping file name, resolved case-insensitively under the root.
    #[arg(long, default_value = DEFAULT_MAPPING)]
    pub mapping: String,
    /// Print the run summary as JSON instead of the human-readable lines.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            mapping: DEFAULT_MAPPING.to_string(),
            json: false,
        }
    }
}

#[derive(Debug, Args)]
pub struct SumArgs {
    /// Count file name, resolved case-insensitively under the root.
    pub file: String,
}

#[derive(Debug, Args)]
pub struct ClassifyArgs {
    pub entry: String,
    #[arg(long, default_value = DEFAULT_MAPPING)]
    pub mapping: String,
}
