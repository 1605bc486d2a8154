//! JSON I/O handling for CLI
//!
//! - Input: one JSON object on stdin
//! - Output: one JSON object per line on stdout

use std::io::{self, Read, Write};

use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use super::errors::{CliError, CliResult};

/// Read one JSON value of type `T` from stdin
pub fn read_request<T: DeserializeOwned>() -> CliResult<T> {
    let mut input = String::new();
    io::stdin().lock().read_to_string(&mut input)?;
    parse_request(&input)
}

fn parse_request<T: DeserializeOwned>(input: &str) -> CliResult<T> {
    if input.trim().is_empty() {
        return Err(CliError::io_error("Empty input"));
    }
    Ok(serde_json::from_str(input)?)
}

/// Write a success response to stdout
pub fn write_response(data: Value) -> CliResult<()> {
    write_line(&ok_envelope(data))
}

/// Write an error response to stdout
pub fn write_error(code: &str, message: &str) -> CliResult<()> {
    write_line(&error_envelope(code, message))
}

fn ok_envelope(data: Value) -> Value {
    json!({
        "status": "ok",
        "data": data
    })
}

fn error_envelope(code: &str, message: &str) -> Value {
    json!({
        "status": "error",
        "code": code,
        "message": message
    })
}

fn write_line(value: &Value) -> CliResult<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer(&mut stdout, value)?;
    writeln!(stdout)?;
    stdout.flush()?;
    Ok(())
}
