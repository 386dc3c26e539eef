//! Command-line interface for dice-overlap.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **split**: Show the sorted multigrams of a string
//! - **coefficient**: Dice coefficient between two strings
//! - **overlap**: Match the strings of one list file to those of another
//!
//! ## Usage
//!
//! ```text
//! # Multigrams of a string
//! dice-overlap split "alpha bravo"
//!
//! # Similarity of two strings using trigrams
//! dice-overlap coefficient night nacht --multigram-length 3
//!
//! # Match last quarter's labels to this quarter's, as JSON
//! dice-overlap overlap previous.txt current.txt --format json
//!
//! # Read the first list from stdin
//! cat previous.txt | dice-overlap overlap - current.json
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::core::config::DiceConfig;

pub mod coefficient;
pub mod overlap;
pub mod split;

#[derive(Parser)]
#[command(name = "dice-overlap")]
#[command(version)]
#[command(about = "Dice coefficient string similarity and list overlap")]
#[command(
    long_about = "dice-overlap scores string similarity with the Dice coefficient over character multigrams.\n\nIt can also match the strings of one list to another, for example to follow labels that were renamed, reordered, added or removed:\n- Pairs are accepted only when each is the other's best candidate\n- Pairs scoring below the match minimum are left unmatched\n- No string is matched twice"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// JSON config file with `multigram_length` and `match_minimum`
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Width of each multigram (overrides the config file, default 2)
    #[arg(short = 'k', long, global = true)]
    pub multigram_length: Option<usize>,

    /// Minimum coefficient for an overlap match, 0 to 1 (overrides the config file, default 0.5)
    #[arg(short = 'm', long, global = true)]
    pub match_minimum: Option<f64>,
}

impl Cli {
    /// Build the effective configuration: defaults, then the config file, then flags
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be loaded or a value is out of range.
    pub fn dice_config(&self) -> anyhow::Result<DiceConfig> {
        let mut config = match &self.config {
            Some(path) => DiceConfig::load_from_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => DiceConfig::default(),
        };

        if let Some(length) = self.multigram_length {
            config = config.with_multigram_length(length)?;
        }
        if let Some(minimum) = self.match_minimum {
            config = config.with_match_minimum(minimum)?;
        }

        Ok(config)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the sorted multigrams of a string
    Split(split::SplitArgs),

    /// Compute the Dice coefficient between two strings
    Coefficient(coefficient::CoefficientArgs),

    /// Match the strings of one list to the strings of another
    Overlap(overlap::OverlapArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
