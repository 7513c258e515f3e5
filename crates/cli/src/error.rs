use thiserror::Error;
use wconn::ConnectorError;

use crate::output::{CommandError, ErrorCode};

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
	#[error(transparent)]
	Connector(#[from] ConnectorError),

	#[error("invalid input: {0}")]
	InvalidInput(String),

	#[error("config error: {0}")]
	Config(String),

	#[error(transparent)]
	Io(#[from] std::io::Error),

	#[error(transparent)]
	Json(#[from] serde_json::Error),
}

impl CliError {
	/// Convert this error to a CommandError for structured output
	pub fn to_command_error(&self) -> CommandError {
		let (code, message, details) = match self {
			CliError::Connector(ConnectorError::InvalidAddress { address }) => (
				ErrorCode::InvalidAddress,
				format!("Address failed validation: {address}"),
				Some(serde_json::json!({ "address": address })),
			),
			CliError::Connector(ConnectorError::Storage(msg)) => (ErrorCode::StorageError, msg.clone(), None),
			CliError::Connector(ConnectorError::Json(err)) => (ErrorCode::InternalError, format!("JSON error: {err}"), None),
			CliError::InvalidInput(msg) => (ErrorCode::InvalidInput, msg.clone(), None),
			CliError::Config(msg) => (ErrorCode::ConfigError, msg.clone(), None),
			CliError::Io(err) => (ErrorCode::IoError, err.to_string(), None),
			CliError::Json(err) => (ErrorCode::InvalidInput, format!("JSON error: {err}"), None),
		};

		CommandError { code, message, details }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn invalid_address_maps_to_dedicated_code() {
		let err = CliError::from(ConnectorError::InvalidAddress { address: "nope".into() });
		let cmd = err.to_command_error();
		assert_eq!(cmd.code, ErrorCode::InvalidAddress);
		assert!(cmd.message.contains("nope"));
		assert_eq!(cmd.details.unwrap()["address"], "nope");
	}

	#[test]
	fn storage_failure_maps_to_storage_code() {
		let err = CliError::from(ConnectorError::storage("disk full"));
		assert_eq!(err.to_command_error().code, ErrorCode::StorageError);
	}
}
