//! Static compliance rules

use crate::model::{AlertSeverity, DocumentRecord};

/// Language codes that have verified disclosures
pub const VERIFIED_LANGUAGES: [&str; 6] = ["en", "es", "fr", "de", "it", "zh"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplianceRule {
    /// The record carries no reporting period
    MissingReportingPeriod,
    /// The language code is outside [`VERIFIED_LANGUAGES`]
    UnverifiedLanguage,
}

impl ComplianceRule {
    /// Evaluation order of the rules for each document
    pub const ALL: [ComplianceRule; 2] = [
        ComplianceRule::MissingReportingPeriod,
        ComplianceRule::UnverifiedLanguage,
    ];

    pub fn rule_id(&self) -> &'static str {
        match self {
            ComplianceRule::MissingReportingPeriod => "missing_reporting_period",
            ComplianceRule::UnverifiedLanguage => "unverified_language",
        }
    }

    pub fn severity(&self) -> AlertSeverity {
        match self {
            ComplianceRule::MissingReportingPeriod => AlertSeverity::Medium,
            ComplianceRule::UnverifiedLanguage => AlertSeverity::Low,
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            ComplianceRule::MissingReportingPeriod => {
                "Document metadata is missing a reporting period."
            }
            ComplianceRule::UnverifiedLanguage => {
                "Language code is outside the verified set; ensure translated disclosures are available."
            }
        }
    }

    /// Deterministic alert id for `document_id` under this rule
    pub fn alert_id(&self, document_id: &str) -> String {
        let suffix = match self {
            ComplianceRule::MissingReportingPeriod => "missing-reporting-period",
            ComplianceRule::UnverifiedLanguage => "unverified-language",
        };
        format!("{}-{}", document_id, suffix)
    }

    pub fn violated_by(&self, document: &DocumentRecord) -> bool {
        match self {
            ComplianceRule::MissingReportingPeriod => document.reporting_period.is_none(),
            ComplianceRule::UnverifiedLanguage => {
                let language = document.language.to_lowercase();
                !VERIFIED_LANGUAGES.contains(&language.as_str())
            }
        }
    }
}
