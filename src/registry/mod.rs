//! # Registry
//!
//! File-backed key-value store of document metadata records.
//!
//! - One JSON file, parsed in full on every operation, rewritten in full on
//!   every write
//! - One mutex per registry serializing every operation
//! - Unparseable content reads as an empty store; I/O failures propagate

mod errors;
#[allow(clippy::module_inception)]
mod registry;
mod store;

pub use errors::{RegistryError, RegistryResult};
pub use registry::DocumentRegistry;
pub use store::{StoreContents, StoreFile, StoredEntry};
