//! Error shapes raised by remote wallet transports.
//!
//! A transport (for example a remote-session bridge to a mobile wallet) reports
//! failures as JSON objects discriminated by a `type` field:
//!
//! ```json
//! { "type": "tx_failed", "txHash": "ABCD...", "message": "out of gas" }
//! ```
//!
//! These shapes are matched structurally. Any object carrying a recognised
//! `type` tag is treated as that shape, regardless of which module built it.

use serde::{Deserialize, Serialize};

/// Field that discriminates transport error shapes.
pub const TRANSPORT_TAG: &str = "type";

/// Opaque transaction payload as submitted by the host application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TxRequest(pub serde_json::Value);

impl TxRequest {
	pub fn new(value: serde_json::Value) -> Self {
		Self(value)
	}
}

impl From<serde_json::Value> for TxRequest {
	fn from(value: serde_json::Value) -> Self {
		Self(value)
	}
}

/// Transport-specific failure, before normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TransportError {
	/// The user rejected the request in the wallet.
	UserDenied,
	/// The wallet did not answer in time.
	Timeout {
		#[serde(default)]
		message: String,
	},
	/// The wallet could not build the transaction (simulation, fee estimation).
	CreateTxFailed {
		#[serde(default)]
		message: String,
	},
	/// The transaction was broadcast but failed.
	TxFailed {
		/// Hash of the failed transaction, when the chain assigned one.
		#[serde(default, rename = "txHash", alias = "txhash", skip_serializing_if = "Option::is_none")]
		tx_hash: Option<String>,
		#[serde(default)]
		message: String,
	},
	/// Any other transaction failure reported by the transport.
	TxUnspecifiedError {
		#[serde(default)]
		message: String,
	},
	/// Any byte-signing failure reported by the transport.
	SignBytesUnspecifiedError {
		#[serde(default)]
		message: String,
	},
}

impl TransportError {
	/// Tag value written to the `type` field for this shape.
	pub fn tag(&self) -> &'static str {
		match self {
			Self::UserDenied => "user_denied",
			Self::Timeout { .. } => "timeout",
			Self::CreateTxFailed { .. } => "create_tx_failed",
			Self::TxFailed { .. } => "tx_failed",
			Self::TxUnspecifiedError { .. } => "tx_unspecified_error",
			Self::SignBytesUnspecifiedError { .. } => "sign_bytes_unspecified_error",
		}
	}

	/// Human-readable message carried by the shape, if any.
	pub fn message(&self) -> Option<&str> {
		match self {
			Self::UserDenied => None,
			Self::Timeout { message }
			| Self::CreateTxFailed { message }
			| Self::TxFailed { message, .. }
			| Self::TxUnspecifiedError { message }
			| Self::SignBytesUnspecifiedError { message } => Some(message),
		}
	}
}
