//! CLI response formatting and output.
//!
//! Provides the JSON envelope, the human-readable report, and exit code mapping.

use fix_params::codemod::{FileOutcome, FileStatus, MigrationEvent};
use fix_params::error::Hint;
use fix_params::{Error, ErrorCode, Result};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CliResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CliError>,
}

#[derive(Debug, Serialize)]
pub struct CliError {
    pub code: String,
    pub message: String,
    pub details: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hints: Option<Vec<Hint>>,
}

impl<T: Serialize> CliResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            Error::internal_json(e.to_string(), Some("serialize response".to_string()))
        })
    }
}

impl CliResponse<()> {
    pub fn from_error(err: &Error) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(CliError {
                code: err.code.as_str().to_string(),
                message: err.message.clone(),
                details: err.details.clone(),
                hints: if err.hints.is_empty() {
                    None
                } else {
                    Some(err.hints.clone())
                },
            }),
        }
    }
}

fn print_response<T: Serialize>(response: &CliResponse<T>) -> Result<()> {
    use std::io::{self, Write};

    let payload = response.to_json()?;
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = writeln!(handle, "{}", payload) {
        if e.kind() == io::ErrorKind::BrokenPipe {
            return Ok(()); // Exit gracefully on SIGPIPE
        }
        return Err(Error::internal_io(
            e.to_string(),
            Some("write stdout".to_string()),
        ));
    }
    Ok(())
}

pub fn print_result<T: Serialize>(result: &Result<T>) -> Result<()> {
    match result {
        Ok(data) => print_response(&CliResponse::success(data)),
        Err(err) => print_response(&CliResponse::<()>::from_error(err)),
    }
}

pub fn exit_code_for_error(code: ErrorCode) -> i32 {
    match code {
        ErrorCode::ValidationMissingArgument | ErrorCode::ValidationInvalidArgument => 2,

        ErrorCode::InternalIoError | ErrorCode::InternalJsonError => 1,
    }
}

// ============================================================================
// Human-readable report
// ============================================================================

/// Print one progress line for a pipeline event, if it warrants one.
pub fn print_event(event: MigrationEvent<'_>) {
    match event {
        MigrationEvent::Found(count) => println!("Found {} API route files\n", count),
        MigrationEvent::File(outcome) => {
            if let Some(line) = outcome_line(outcome) {
                println!("{}", line);
            }
        }
    }
}

fn outcome_line(outcome: &FileOutcome) -> Option<String> {
    match outcome.status {
        FileStatus::Fixed => Some(format!("✅ Fixed: {}", outcome.path)),
        FileStatus::WouldFix => Some(format!("🔍 Would fix: {}", outcome.path)),
        FileStatus::AnchorMissing => Some(format!("⚠️  Skipped (no anchor): {}", outcome.path)),
        FileStatus::AlreadyMigrated | FileStatus::NoParams => None,
    }
}

pub fn print_summary() {
    println!("\n✅ All API routes updated!");
}

/// Human-mode error output goes to stderr so stdout keeps only report lines.
pub fn print_error(err: &Error) {
    eprintln!("Error [{}]: {}", err.code.as_str(), err.message);
    if let Some(context) = err.details.get("context").and_then(|c| c.as_str()) {
        eprintln!("  {}", context);
    }
    if let Some(error) = err.details.get("error").and_then(|c| c.as_str()) {
        eprintln!("  {}", error);
    }
    for hint in &err.hints {
        eprintln!("  hint: {}", hint.message);
    }
}
