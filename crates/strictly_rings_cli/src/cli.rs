//! Command-line interface for strictly_rings.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Rings - peg-and-ring color sorting puzzle engine
#[derive(Parser, Debug)]
#[command(name = "strictly_rings")]
#[command(about = "Validate level packs and replay ring sorting games", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load a level pack and print a summary of every level
    Validate {
        /// Path to the level pack (TOML)
        levels: PathBuf,
    },

    /// Replay a sequence of peg selections on one level
    Play {
        /// Path to the level pack (TOML)
        levels: PathBuf,

        /// Level to play (0-based)
        #[arg(short, long, default_value = "0")]
        level: usize,

        /// Peg indices to select, in order (e.g. 0,2,1,0)
        #[arg(short, long, value_delimiter = ',')]
        picks: Vec<usize>,

        /// Print session events as JSON lines
        #[arg(long)]
        json: bool,
    },
}
