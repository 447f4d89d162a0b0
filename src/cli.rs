//! Command-line interface definitions and parsing
//!
//! # Commands
//!
//! - **pick**: interactive picker; prints the chosen shortcode (default)
//! - **list**: print the entries matching a query without a UI
//! - **config**: inspect or create the configuration file
//!
//! # Examples
//!
//! ```bash
//! # Pick interactively, starting from a query
//! emopick pick --query smi
//!
//! # Print the glyph instead of the shortcode
//! emopick pick --print-glyph
//!
//! # Scripting
//! emopick list heart --json
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Searchable emoji picker for the terminal
#[derive(Parser, Debug)]
#[command(name = "emopick")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Pick an emoji interactively
    #[command(alias = "p")]
    Pick {
        /// Initial query
        #[arg(short, long)]
        query: Option<String>,

        /// Debounce delay in milliseconds
        #[arg(long)]
        debounce_ms: Option<u64>,

        /// Glyph table file (TOML) replacing the built-in table
        #[arg(short, long)]
        glyphs: Option<PathBuf>,

        /// Print the glyph instead of the shortcode
        #[arg(long)]
        print_glyph: bool,
    },

    /// List entries matching a query
    #[command(alias = "ls")]
    List {
        /// Query to filter by (all entries when omitted)
        query: Option<String>,

        /// Output as a JSON array
        #[arg(long)]
        json: bool,

        /// Glyph table file (TOML) replacing the built-in table
        #[arg(short, long)]
        glyphs: Option<PathBuf>,
    },

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Configuration subcommands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the config file path
    Path,
    /// Print the effective configuration
    Show,
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The command to run, defaulting to an interactive pick
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Pick {
            query: None,
            debounce_ms: None,
            glyphs: None,
            print_glyph: false,
        })
    }
}
