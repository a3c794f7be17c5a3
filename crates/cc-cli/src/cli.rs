//! CLI argument parsing for craftcalc

use std::path::PathBuf;

use clap::Parser;

/// craftcalc - batch-based raw material calculator for crafting recipes
#[derive(Parser, Debug)]
#[command(name = "craftcalc")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the recipes JSON file
    ///
    /// Overrides the default resolution order (CRAFTCALC_RECIPES environment
    /// variable, ./recipes.json, then the configuration directory). When the
    /// file is missing or malformed, the built-in recipe set is used.
    #[arg(long)]
    pub recipes: Option<PathBuf>,

    /// Write the built-in recipe set to the recipes path and exit
    ///
    /// Gives you an editable recipes.json seeded with the default recipes.
    /// Refuses to overwrite an existing file.
    #[arg(long)]
    pub init: bool,
}

impl Cli {
    /// Parse CLI arguments from environment
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
