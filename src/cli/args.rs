//! CLI argument definitions using clap
//!
//! Commands:
//! - docintel init
//! - docintel serve [--port <port>]
//! - docintel ingest            (record JSON on stdin)
//! - docintel get --id <id>
//! - docintel list
//! - docintel query             (query JSON on stdin)
//! - docintel alerts
//! - docintel clear
//! - docintel health

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// docintel - document metadata registry with keyword search and compliance alerts
#[derive(Parser, Debug)]
#[command(name = "docintel")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to a JSON configuration file; APP_* variables override it
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the document store if it does not exist
    Init,

    /// Start the HTTP server
    Serve {
        /// Port to bind, overriding the configured one
        #[arg(long)]
        port: Option<u16>,
    },

    /// Register one document read as JSON from stdin
    Ingest,

    /// Print one stored document
    Get {
        /// Document identifier
        #[arg(long)]
        id: String,
    },

    /// Print every stored document
    List,

    /// Answer one query read as JSON from stdin
    Query,

    /// Print current compliance alerts
    Alerts,

    /// Remove every stored document
    Clear,

    /// Print the settings summary
    Health,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
