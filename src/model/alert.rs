//! Compliance alert types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    Low,
    Medium,
    High,
    Critical,
}

/// Review state of an alert. Alerts are derived on demand, so every
/// emitted alert is `New`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertStatus {
    New,
    InReview,
    Resolved,
    FalsePositive,
}

/// Compliance alert surfaced by the evaluator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceAlert {
    pub alert_id: String,
    pub document_id: String,
    pub rule_id: String,
    pub severity: AlertSeverity,
    pub status: AlertStatus,
    pub summary: String,
    pub created_at: DateTime<Utc>,
    pub assignee: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceAlertList {
    pub alerts: Vec<ComplianceAlert>,
    pub total: usize,
}

impl ComplianceAlertList {
    pub fn new(alerts: Vec<ComplianceAlert>) -> Self {
        let total = alerts.len();
        Self { alerts, total }
    }
}
