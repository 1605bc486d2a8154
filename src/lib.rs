//! docintel - a minimal document-metadata registry
//!
//! - **`registry`**: file-backed store of document metadata records
//! - **`query`**: keyword search with exact-match filters over the registry
//! - **`compliance`**: rule-based alerts derived from registry contents
//! - **`model`**: shared wire and domain types
//! - **`config`**, **`observability`**, **`http_server`**, **`cli`**: the
//!   ambient layers around the core

pub mod cli;
pub mod compliance;
pub mod config;
pub mod http_server;
pub mod model;
pub mod observability;
pub mod query;
pub mod registry;
