//! Normalization of wallet transport errors.
//!
//! Every failure from a wallet operation is funnelled through one of two entry
//! points, [`normalize_tx_error`] for transaction flows and
//! [`normalize_sign_bytes_error`] for raw byte signing, and comes out as a
//! [`NormalizedError`]. Both are total: unrecognised input is downgraded to the
//! flow's unspecified variant instead of escaping raw.
//!
//! Dispatch runs in two phases:
//!
//! 1. Already-normalized errors are returned unchanged, so normalizing twice is
//!    a no-op.
//! 2. Transport shapes are mapped onto their counterparts, attaching the
//!    original request payload supplied by the caller.

mod raw;

use serde::{Deserialize, Serialize};
use tracing::debug;
use wconn_protocol::{TransportError, TxRequest};

pub use raw::{RawError, ShapeTag, is_shape};

/// Field that discriminates [`NormalizedError`] variants when serialized.
pub const NORMALIZED_TAG: &str = "kind";

/// Closed set of wallet errors handed to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "kind", rename_all_fields = "camelCase")]
pub enum NormalizedError {
	#[error("user denied the request")]
	UserDenied,

	#[error("wallet timed out: {message}")]
	Timeout { message: String },

	#[error("failed to create transaction: {message}")]
	CreateTxFailed { tx: TxRequest, message: String },

	#[error("transaction failed: {message}")]
	TxFailed {
		tx: TxRequest,
		#[serde(default)]
		tx_hash: Option<String>,
		message: String,
		#[serde(default)]
		raw_log: Option<serde_json::Value>,
	},

	#[error("transaction error: {message}")]
	TxUnspecifiedError { tx: TxRequest, message: String },

	#[error("byte signing error: {message}")]
	SignBytesUnspecifiedError { bytes: Vec<u8>, message: String },
}

impl NormalizedError {
	/// Variant name as written to the `kind` field.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::UserDenied => "UserDenied",
			Self::Timeout { .. } => "Timeout",
			Self::CreateTxFailed { .. } => "CreateTxFailed",
			Self::TxFailed { .. } => "TxFailed",
			Self::TxUnspecifiedError { .. } => "TxUnspecifiedError",
			Self::SignBytesUnspecifiedError { .. } => "SignBytesUnspecifiedError",
		}
	}

	pub fn message(&self) -> Option<&str> {
		match self {
			Self::UserDenied => None,
			Self::Timeout { message }
			| Self::CreateTxFailed { message, .. }
			| Self::TxFailed { message, .. }
			| Self::TxUnspecifiedError { message, .. }
			| Self::SignBytesUnspecifiedError { message, .. } => Some(message),
		}
	}
}

/// Normalizes a failure raised while creating, signing, or broadcasting `tx`.
pub fn normalize_tx_error(tx: &TxRequest, error: impl Into<RawError>) -> NormalizedError {
	let error = error.into();
	debug!(target = "wconn.normalize", flow = "tx", shape = ?error.shape(), "normalizing wallet error");

	let transport = match error {
		RawError::Normalized(err) => return err,
		RawError::Transport(transport) => transport,
		other => return tx_unspecified(tx, &other),
	};

	match transport {
		TransportError::UserDenied => NormalizedError::UserDenied,
		TransportError::Timeout { message } => NormalizedError::Timeout { message },
		TransportError::CreateTxFailed { message } => NormalizedError::CreateTxFailed { tx: tx.clone(), message },
		TransportError::TxFailed { tx_hash, message } => NormalizedError::TxFailed {
			tx: tx.clone(),
			tx_hash,
			message,
			raw_log: None,
		},
		TransportError::TxUnspecifiedError { message } => NormalizedError::TxUnspecifiedError { tx: tx.clone(), message },
		other @ TransportError::SignBytesUnspecifiedError { .. } => tx_unspecified(tx, &RawError::Transport(other)),
	}
}

/// Normalizes a failure raised while signing raw `bytes`.
pub fn normalize_sign_bytes_error(bytes: &[u8], error: impl Into<RawError>) -> NormalizedError {
	let error = error.into();
	debug!(target = "wconn.normalize", flow = "sign_bytes", shape = ?error.shape(), "normalizing wallet error");

	let transport = match error {
		RawError::Normalized(err) => return err,
		RawError::Transport(transport) => transport,
		other => return sign_bytes_unspecified(bytes, &other),
	};

	match transport {
		TransportError::UserDenied => NormalizedError::UserDenied,
		TransportError::Timeout { message } => NormalizedError::Timeout { message },
		TransportError::SignBytesUnspecifiedError { message } => NormalizedError::SignBytesUnspecifiedError {
			bytes: bytes.to_vec(),
			message,
		},
		other => sign_bytes_unspecified(bytes, &RawError::Transport(other)),
	}
}

fn tx_unspecified(tx: &TxRequest, error: &RawError) -> NormalizedError {
	NormalizedError::TxUnspecifiedError {
		tx: tx.clone(),
		message: error.fallback_message(),
	}
}

fn sign_bytes_unspecified(bytes: &[u8], error: &RawError) -> NormalizedError {
	NormalizedError::SignBytesUnspecifiedError {
		bytes: bytes.to_vec(),
		message: error.fallback_message(),
	}
}
