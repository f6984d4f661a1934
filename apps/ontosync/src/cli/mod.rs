//! # ontosync CLI Module
//!
//! This module implements the CLI interface for ontosync.
//!
//! ## Available Commands
//!
//! - `normalize` - Run the normalization pipeline and write the result
//! - `axioms` - List the axioms of one kind, or of every kind
//! - `stats` - Show triple and axiom counts and the ontology header

mod commands;

use clap::{Parser, Subcommand};
use ontosync_core::SyncError;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// ontosync - OWL graph/axiom synchronization
///
/// Loads a triple graph (JSON array of triples or a binary snapshot),
/// normalizes it and reads it as OWL 2 axioms.
#[derive(Parser, Debug)]
#[command(name = "ontosync")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Engine configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Use the strict profile: ambiguous punning is an error
    #[arg(long, global = true)]
    pub strict: bool,

    /// Skip the normalization pipeline
    #[arg(long, global = true)]
    pub raw: bool,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Normalize a graph and write it out
    Normalize {
        /// Input file (.json triples or snapshot)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file (.json triples or snapshot)
        #[arg(short, long)]
        output: PathBuf,
    },

    /// List axioms
    Axioms {
        /// Input file (.json triples or snapshot)
        #[arg(short, long)]
        input: PathBuf,

        /// Axiom kind, e.g. SubClassOf (default: all kinds)
        #[arg(short, long)]
        kind: Option<String>,
    },

    /// Show graph and axiom statistics
    Stats {
        /// Input file (.json triples or snapshot)
        #[arg(short, long)]
        input: PathBuf,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), SyncError> {
    let config = load_config(cli.config.as_deref(), cli.strict, cli.raw)?;
    let json_mode = cli.json_mode;

    match cli.command {
        Commands::Normalize { input, output } => cmd_normalize(config, &input, &output, json_mode),
        Commands::Axioms { input, kind } => cmd_axioms(config, &input, kind.as_deref(), json_mode),
        Commands::Stats { input } => cmd_stats(config, &input, json_mode),
    }
}
