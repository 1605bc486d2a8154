//! # Compliance
//!
//! Rule-based alerting over registry contents. Two static rules; alerts are
//! derived on demand and never stored.

mod rules;
mod service;

pub use rules::{ComplianceRule, VERIFIED_LANGUAGES};
pub use service::{evaluate, ComplianceService};
