//! Result envelope printed by every command.
//!
//! Success:
//!
//! ```json
//! { "schemaVersion": 1, "ok": true, "command": "connect",
//!   "data": { "connected": true, "session": { "networkIdentifier": "1", "address": "0x..." } } }
//! ```
//!
//! Failure:
//!
//! ```json
//! { "schemaVersion": 1, "ok": false, "command": "connect",
//!   "error": { "code": "INVALID_ADDRESS", "message": "...", "details": { "address": "0x12" } } }
//! ```
//!
//! `-f text` prints top-level data fields one per line instead.


use std::io::{self, Write};

use serde::Serialize;
use serde_json::Value;

pub const SCHEMA_VERSION: u32 = 1;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
	/// Pretty-printed JSON
	#[default]
	Json,
	/// One JSON document per line
	Ndjson,
	/// Human-readable
	Text,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandResult<T> {
	pub schema_version: u32,
	pub ok: bool,
	pub command: &'static str,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub data: Option<T>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub error: Option<CommandError>,
}

impl<T: Serialize> CommandResult<T> {
	pub fn success(command: &'static str, data: T) -> Self {
		Self {
			schema_version: SCHEMA_VERSION,
			ok: true,
			command,
			data: Some(data),
			error: None,
		}
	}

	pub fn failure(command: &'static str, error: CommandError) -> Self {
		Self {
			schema_version: SCHEMA_VERSION,
			ok: false,
			command,
			data: None,
			error: Some(error),
		}
	}

	/// Writes the envelope to stdout.
	pub fn print(&self, format: OutputFormat) {
		let rendered = match format {
			OutputFormat::Json => serde_json::to_string_pretty(self).ok(),
			OutputFormat::Ndjson => serde_json::to_string(self).ok(),
			OutputFormat::Text => Some(self.render_text()),
		};
		if let Some(rendered) = rendered {
			let _ = writeln!(io::stdout().lock(), "{rendered}");
		}
	}

	fn render_text(&self) -> String {
		if let Some(error) = &self.error {
			return error.to_string();
		}
		match self.data.as_ref().and_then(|data| serde_json::to_value(data).ok()) {
			Some(Value::Object(fields)) => fields
				.iter()
				.map(|(key, value)| format!("{key}: {}", text_value(value)))
				.collect::<Vec<_>>()
				.join("\n"),
			Some(other) => text_value(&other),
			None => String::new(),
		}
	}
}

fn text_value(value: &Value) -> String {
	match value {
		Value::String(text) => text.clone(),
		other => other.to_string(),
	}
}

#[derive(Debug, Clone, Serialize)]
pub struct CommandError {
	pub code: ErrorCode,
	pub message: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub details: Option<Value>,
}

impl std::fmt::Display for CommandError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "error[{}]: {}", self.code, self.message)
	}
}

/// Stable codes for scripts to branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
	InvalidAddress,
	StorageError,
	ConfigError,
	IoError,
	InvalidInput,
	InternalError,
}

impl ErrorCode {
	pub const fn as_str(self) -> &'static str {
		match self {
			ErrorCode::InvalidAddress => "INVALID_ADDRESS",
			ErrorCode::StorageError => "STORAGE_ERROR",
			ErrorCode::ConfigError => "CONFIG_ERROR",
			ErrorCode::IoError => "IO_ERROR",
			ErrorCode::InvalidInput => "INVALID_INPUT",
			ErrorCode::InternalError => "INTERNAL_ERROR",
		}
	}
}

impl std::fmt::Display for ErrorCode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

pub fn print_error_stderr(error: &CommandError) {
	eprintln!("{error}");
}
