//! CLI command implementations
//!
//! Every command resolves settings, opens the registry once and hands
//! `Arc` handles to whatever it drives.

use std::path::Path;
use std::sync::Arc;

use serde_json::{json, Value};

use crate::compliance::ComplianceService;
use crate::config::Settings;
use crate::http_server::{AppState, HttpServer};
use crate::model::{DocumentRecord, QueryRequest};
use crate::observability::{Event, Logger};
use crate::query::QueryEngine;
use crate::registry::DocumentRegistry;

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::{read_request, write_error, write_response};

/// Main CLI entry point. This is the only function main.rs should call.
///
/// Failures are reported as an error line on stdout before returning.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    let result = run_command(cli.config.as_deref(), cli.command);
    if let Err(e) = &result {
        write_error(e.code_str(), e.message())?;
    }
    result
}

pub fn run_command(config: Option<&Path>, cmd: Command) -> CliResult<()> {
    let settings = load_settings(config)?;

    match cmd {
        Command::Init => init(&settings),
        Command::Serve { port } => serve(settings, port),
        Command::Ingest => ingest(&settings, read_request()?),
        Command::Get { id } => get(&settings, &id),
        Command::List => list(&settings),
        Command::Query => query(&settings, read_request()?),
        Command::Alerts => alerts(&settings),
        Command::Clear => clear(&settings),
        Command::Health => health(&settings),
    }
}

fn load_settings(config: Option<&Path>) -> CliResult<Settings> {
    let settings = Settings::load(config)?;
    Logger::set_min_severity(settings.severity()?);
    Logger::event(
        Event::ConfigLoaded,
        &[
            ("environment", settings.environment.as_str()),
            (
                "document_store_path",
                settings.document_store_path.display().to_string().as_str(),
            ),
        ],
    );
    Ok(settings)
}

fn open_registry(settings: &Settings) -> CliResult<Arc<DocumentRegistry>> {
    Ok(Arc::new(DocumentRegistry::open(&settings.document_store_path)?))
}

/// Create the store file (and its directories) if missing
pub fn init(settings: &Settings) -> CliResult<()> {
    let registry = open_registry(settings)?;
    write_response(json!({
        "initialized": true,
        "document_store_path": registry.path().display().to_string(),
    }))
}

/// Start the HTTP server and block until it stops
pub fn serve(mut settings: Settings, port: Option<u16>) -> CliResult<()> {
    if let Some(port) = port {
        settings.http.port = port;
    }

    let registry = open_registry(&settings)?;
    let server = HttpServer::new(Arc::new(AppState::new(settings, registry)));

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

pub fn ingest(settings: &Settings, record: DocumentRecord) -> CliResult<()> {
    record.validate()?;
    let response = open_registry(settings)?.register(record)?;
    write_response(serde_json::to_value(response)?)
}

pub fn get(settings: &Settings, document_id: &str) -> CliResult<()> {
    let record = open_registry(settings)?
        .get(document_id)?
        .ok_or_else(|| CliError::not_found(document_id))?;
    write_response(serde_json::to_value(record)?)
}

pub fn list(settings: &Settings) -> CliResult<()> {
    let records = open_registry(settings)?.list()?;
    write_response(serde_json::to_value(records)?)
}

pub fn query(settings: &Settings, request: QueryRequest) -> CliResult<()> {
    request.validate()?;
    let engine = QueryEngine::new(open_registry(settings)?);
    write_response(serde_json::to_value(engine.answer(&request)?)?)
}

pub fn alerts(settings: &Settings) -> CliResult<()> {
    let service = ComplianceService::new(open_registry(settings)?);
    write_response(serde_json::to_value(service.list_alerts()?)?)
}

pub fn clear(settings: &Settings) -> CliResult<()> {
    open_registry(settings)?.clear()?;
    write_response(json!({"cleared": true}))
}

pub fn health(settings: &Settings) -> CliResult<()> {
    let mut summary = settings.summary();
    if let Value::Object(map) = &mut summary {
        map.insert("status".to_string(), json!("ok"));
    }
    write_response(summary)
}

#[cfg(test)]
mod tests {
    use super::super::errors::CliErrorCode;
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn settings(temp_dir: &TempDir) -> Settings {
        Settings {
            document_store_path: temp_dir.path().join("data").join("documents.json"),
            ..Settings::default()
        }
    }

    fn create_config(temp_dir: &TempDir) -> PathBuf {
        let config_path = temp_dir.path().join("docintel.json");
        let config = json!({
            "document_store_path": temp_dir.path().join("data").join("documents.json"),
        });
        fs::write(&config_path, config.to_string()).unwrap();
        config_path
    }

    fn record() -> DocumentRecord {
        DocumentRecord::new("t1", "Acme", "Fund A", "factsheet", "a.pdf")
    }

    fn stored(settings: &Settings) -> Vec<DocumentRecord> {
        DocumentRegistry::open(&settings.document_store_path)
            .unwrap()
            .list()
            .unwrap()
    }

    #[test]
    fn test_init_creates_store() {
        let temp_dir = TempDir::new().unwrap();
        let settings = settings(&temp_dir);

        init(&settings).unwrap();

        assert!(settings.document_store_path.exists());
        assert!(stored(&settings).is_empty());
    }

    #[test]
    fn test_ingest_then_get() {
        let temp_dir = TempDir::new().unwrap();
        let settings = settings(&temp_dir);

        ingest(&settings, record().with_id("doc-1")).unwrap();
        get(&settings, "doc-1").unwrap();

        let records = stored(&settings);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0], record().with_id("doc-1"));
    }

    #[test]
    fn test_get_unknown_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let settings = settings(&temp_dir);

        let result = get(&settings, "missing");
        assert_eq!(result.unwrap_err().code(), &CliErrorCode::NotFound);
    }

    #[test]
    fn test_ingest_rejects_invalid_record() {
        let temp_dir = TempDir::new().unwrap();
        let settings = settings(&temp_dir);

        let mut invalid = record();
        invalid.version = 0;

        let result = ingest(&settings, invalid);
        assert_eq!(result.unwrap_err().code(), &CliErrorCode::InvalidInput);
        assert!(stored(&settings).is_empty());
    }

    #[test]
    fn test_query_validates_max_results() {
        let temp_dir = TempDir::new().unwrap();
        let settings = settings(&temp_dir);

        let result = query(&settings, QueryRequest::new("fund").with_max_results(0));
        assert_eq!(result.unwrap_err().code(), &CliErrorCode::InvalidInput);
    }

    #[test]
    fn test_query_alerts_and_clear() {
        let temp_dir = TempDir::new().unwrap();
        let settings = settings(&temp_dir);

        ingest(&settings, record()).unwrap();
        query(&settings, QueryRequest::new("fund")).unwrap();
        alerts(&settings).unwrap();
        list(&settings).unwrap();

        clear(&settings).unwrap();
        assert!(stored(&settings).is_empty());
    }

    #[test]
    fn test_run_command_uses_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = create_config(&temp_dir);

        run_command(Some(&config_path), Command::Init).unwrap();
        assert!(temp_dir.path().join("data").join("documents.json").exists());

        let result = run_command(
            Some(&config_path),
            Command::Get {
                id: "missing".to_string(),
            },
        );
        assert_eq!(result.unwrap_err().code(), &CliErrorCode::NotFound);
    }

    #[test]
    fn test_run_command_rejects_bad_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("docintel.json");
        fs::write(&config_path, "{ not json").unwrap();

        let result = run_command(Some(&config_path), Command::Health);
        assert_eq!(result.unwrap_err().code(), &CliErrorCode::ConfigError);
    }
}
