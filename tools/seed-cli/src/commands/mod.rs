//! CLI command implementations.

pub mod check;
pub mod generate;

use clap::Args;

/// Arguments for the generate command.
#[derive(Args, Default)]
pub struct GenerateArgs {
    /// Directory to write products.json and reviews.json into.
    #[arg(short, long)]
    pub out_dir: Option<String>,

    /// Seed for a reproducible run.
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// Arguments for the check command.
#[derive(Args, Default)]
pub struct CheckArgs {
    /// Directory holding products.json and reviews.json.
    #[arg(short, long)]
    pub out_dir: Option<String>,
}
