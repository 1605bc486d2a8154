//! CLI module
//!
//! Provides command-line access to the registry:
//! - init / clear: store lifecycle
//! - ingest / get / list: document metadata
//! - query / alerts: derived views
//! - serve: HTTP server
//! - health: settings summary

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{alerts, clear, get, health, ingest, init, list, query, run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_request, write_error, write_response};
