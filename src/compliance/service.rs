//! # Compliance Service
//!
//! Recomputes alerts from the full registry on every call. Nothing is
//! persisted, deduplicated or transitioned between calls.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::rules::ComplianceRule;
use crate::model::{AlertStatus, ComplianceAlert, ComplianceAlertList, DocumentRecord};
use crate::observability::{Event, Logger};
use crate::registry::{DocumentRegistry, RegistryResult};

pub struct ComplianceService {
    registry: Arc<DocumentRegistry>,
}

impl ComplianceService {
    pub fn new(registry: Arc<DocumentRegistry>) -> Self {
        Self { registry }
    }

    /// One alert per (document, violated rule), stamped with the evaluation time
    pub fn list_alerts(&self) -> RegistryResult<ComplianceAlertList> {
        let documents = self.registry.list()?;
        let alerts = evaluate(&documents, Utc::now());

        Logger::event(
            Event::AlertsEvaluated,
            &[
                ("documents", documents.len().to_string().as_str()),
                ("alerts", alerts.len().to_string().as_str()),
            ],
        );

        Ok(ComplianceAlertList::new(alerts))
    }
}

/// Apply every rule to every document, in document then rule order
pub fn evaluate(documents: &[DocumentRecord], now: DateTime<Utc>) -> Vec<ComplianceAlert> {
    documents
        .iter()
        .flat_map(|document| {
            ComplianceRule::ALL
                .into_iter()
                .filter(move |rule| rule.violated_by(document))
                .map(move |rule| build_alert(rule, document, now))
        })
        .collect()
}

fn build_alert(rule: ComplianceRule, document: &DocumentRecord, now: DateTime<Utc>) -> ComplianceAlert {
    let document_id = document.document_id.as_deref().unwrap_or("unknown");
    ComplianceAlert {
        alert_id: rule.alert_id(document_id),
        document_id: document_id.to_string(),
        rule_id: rule.rule_id().to_string(),
        severity: rule.severity(),
        status: AlertStatus::New,
        summary: rule.summary().to_string(),
        created_at: now,
        assignee: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dated(id: &str) -> DocumentRecord {
        DocumentRecord::new("t1", "Acme", "Fund A", "factsheet", "a.pdf")
            .with_id(id)
            .with_reporting_period(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap())
    }

    #[test]
    fn test_compliant_document_has_no_alerts() {
        assert!(evaluate(&[dated("d1")], Utc::now()).is_empty());
    }

    #[test]
    fn test_both_rules_fire_independently() {
        let mut doc = dated("d1").with_language("xx");
        doc.reporting_period = None;

        let now = Utc::now();
        let alerts = evaluate(&[doc], now);
        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].rule_id, "missing_reporting_period");
        assert_eq!(alerts[1].rule_id, "unverified_language");
        assert!(alerts.iter().all(|a| a.created_at == now));
        assert!(alerts.iter().all(|a| a.status == AlertStatus::New));
        assert!(alerts.iter().all(|a| a.assignee.is_none()));
    }

    #[test]
    fn test_alerts_follow_document_order() {
        let docs = vec![dated("a").with_language("xx"), dated("b").with_language("yy")];
        let alerts = evaluate(&docs, Utc::now());
        let ids: Vec<_> = alerts.iter().map(|a| a.alert_id.as_str()).collect();
        assert_eq!(ids, vec!["a-unverified-language", "b-unverified-language"]);
    }
}
