//! Exact-match metadata filters
//!
//! Filters look fields up by their wire name through [`DocumentField`]
//! rather than by reflecting over the serialized record.

use std::collections::BTreeMap;

use crate::model::DocumentRecord;

/// Filterable fields of a [`DocumentRecord`], by wire name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentField {
    DocumentId,
    TenantId,
    Issuer,
    Product,
    DocumentType,
    ReportingPeriod,
    Language,
    Source,
    Version,
    Filename,
    ContentUrl,
}

impl DocumentField {
    pub const ALL: [DocumentField; 11] = [
        DocumentField::DocumentId,
        DocumentField::TenantId,
        DocumentField::Issuer,
        DocumentField::Product,
        DocumentField::DocumentType,
        DocumentField::ReportingPeriod,
        DocumentField::Language,
        DocumentField::Source,
        DocumentField::Version,
        DocumentField::Filename,
        DocumentField::ContentUrl,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DocumentField::DocumentId => "document_id",
            DocumentField::TenantId => "tenant_id",
            DocumentField::Issuer => "issuer",
            DocumentField::Product => "product",
            DocumentField::DocumentType => "document_type",
            DocumentField::ReportingPeriod => "reporting_period",
            DocumentField::Language => "language",
            DocumentField::Source => "source",
            DocumentField::Version => "version",
            DocumentField::Filename => "filename",
            DocumentField::ContentUrl => "content_url",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }

    /// The field rendered as its JSON text form.
    ///
    /// An unset optional field (`document_id`, `reporting_period`,
    /// `content_url`) renders as "", the same as an unknown field name, so a
    /// filter value of "" selects records where the field is unset. No
    /// placeholder text such as "None" or "null" ever matches.
    pub fn value_of(&self, record: &DocumentRecord) -> String {
        match self {
            DocumentField::DocumentId => record.document_id.clone().unwrap_or_default(),
            DocumentField::TenantId => record.tenant_id.clone(),
            DocumentField::Issuer => record.issuer.clone(),
            DocumentField::Product => record.product.clone(),
            DocumentField::DocumentType => record.document_type.clone(),
            DocumentField::ReportingPeriod => record
                .reporting_period
                .map(|d| d.to_string())
                .unwrap_or_default(),
            DocumentField::Language => record.language.clone(),
            DocumentField::Source => record.source.as_str().to_string(),
            DocumentField::Version => record.version.to_string(),
            DocumentField::Filename => record.filename.clone(),
            DocumentField::ContentUrl => record.content_url.clone().unwrap_or_default(),
        }
    }
}

/// Field value by wire name; unknown names read as ""
pub fn field_value(record: &DocumentRecord, name: &str) -> String {
    DocumentField::from_name(name)
        .map(|field| field.value_of(record))
        .unwrap_or_default()
}

/// True when every filter equals the record's field, case-insensitively.
/// No filters (or an empty map) pass everything.
pub fn matches_filters(record: &DocumentRecord, filters: Option<&BTreeMap<String, String>>) -> bool {
    let Some(filters) = filters else {
        return true;
    };
    filters
        .iter()
        .all(|(name, expected)| field_value(record, name).to_lowercase() == expected.to_lowercase())
}
