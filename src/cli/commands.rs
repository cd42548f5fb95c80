//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - list: print the catalog, optionally filtered
//! - show: print one tool's card
//! - docs: print one tool's documentation page
//! - open: open a tool on the ADZDiag platform
//! - categories: print the category chips
//!
//! With no subcommand the catalog TUI is launched.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// adzdiag - Browse the ADZDiag ECU tool catalog from the terminal
#[derive(Parser, Debug)]
#[command(name = "adzdiag")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List catalog tools
    List {
        /// Only show tools in this category (use "all" for every category)
        #[arg(short = 'C', long)]
        category: Option<String>,

        /// Only show tools whose name or summary contains this text
        #[arg(short, long)]
        query: Option<String>,

        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one tool's summary card
    Show {
        /// Tool slug, e.g. "vag-dsg-immo-off"
        id: String,
    },

    /// Print one tool's documentation page
    Docs {
        /// Tool slug to document
        id: String,
    },

    /// Open a tool's page on the ADZDiag platform
    Open {
        /// Tool slug to open
        id: String,
    },

    /// List the filter categories
    Categories,
}
