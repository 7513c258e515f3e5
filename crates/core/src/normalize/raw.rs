//! Tagged representation of errors arriving from wallet transports.

use serde_json::Value;
use wconn_protocol::{TRANSPORT_TAG, TransportError};

use super::{NORMALIZED_TAG, NormalizedError};

/// An error as received at the transport boundary, before normalization.
///
/// Built structurally with [`RawError::from_value`]: the value's fields decide
/// the variant, never the module that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum RawError {
	/// Already one of this library's own variants.
	Normalized(NormalizedError),
	/// A recognised transport shape.
	Transport(TransportError),
	/// Error-like value with a message (a native error object).
	Native { message: String },
	/// Anything else: strings, numbers, `null`, unrecognised objects.
	Opaque(Value),
}

/// Known transport error shapes, in matching order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeTag {
	UserDenied,
	Timeout,
	CreateTxFailed,
	TxFailed,
	TxUnspecifiedError,
	SignBytesUnspecifiedError,
}

impl ShapeTag {
	pub fn of(err: &TransportError) -> Self {
		match err {
			TransportError::UserDenied => Self::UserDenied,
			TransportError::Timeout { .. } => Self::Timeout,
			TransportError::CreateTxFailed { .. } => Self::CreateTxFailed,
			TransportError::TxFailed { .. } => Self::TxFailed,
			TransportError::TxUnspecifiedError { .. } => Self::TxUnspecifiedError,
			TransportError::SignBytesUnspecifiedError { .. } => Self::SignBytesUnspecifiedError,
		}
	}
}

/// Returns `true` when `err` matches the transport shape `tag`.
pub fn is_shape(err: &RawError, tag: ShapeTag) -> bool {
	err.shape() == Some(tag)
}

impl RawError {
	/// Classifies an arbitrary JSON value by its fields.
	///
	/// A `kind` tag naming one of our variants wins, then a `type` tag naming a
	/// transport shape, then a string `message`. Tagged objects that fail to
	/// decode fall through to the next rule.
	pub fn from_value(value: Value) -> Self {
		if let Some(fields) = value.as_object() {
			if fields.contains_key(NORMALIZED_TAG) {
				if let Ok(err) = serde_json::from_value::<NormalizedError>(value.clone()) {
					return Self::Normalized(err);
				}
			}
			if fields.contains_key(TRANSPORT_TAG) {
				if let Ok(err) = serde_json::from_value::<TransportError>(value.clone()) {
					return Self::Transport(err);
				}
			}
			if let Some(message) = fields.get("message").and_then(Value::as_str) {
				return Self::Native {
					message: message.to_string(),
				};
			}
		}
		Self::Opaque(value)
	}

	/// Wraps a Rust error as a native error-like value.
	pub fn native(err: &(dyn std::error::Error + 'static)) -> Self {
		Self::Native { message: err.to_string() }
	}

	/// Transport shape of this error, if it is one.
	pub fn shape(&self) -> Option<ShapeTag> {
		match self {
			Self::Transport(err) => Some(ShapeTag::of(err)),
			_ => None,
		}
	}

	/// Message used when this error is downgraded to an unspecified variant.
	///
	/// Never empty.
	pub fn fallback_message(&self) -> String {
		let message = match self {
			Self::Normalized(err) => err.to_string(),
			Self::Transport(err) => err.message().unwrap_or_default().to_string(),
			Self::Native { message } => message.clone(),
			Self::Opaque(Value::String(text)) => text.clone(),
			Self::Opaque(value) => value.to_string(),
		};
		if !message.is_empty() {
			return message;
		}
		match self {
			Self::Transport(err) => err.tag().to_string(),
			Self::Opaque(value) => value.to_string(),
			_ => "unknown error".to_string(),
		}
	}
}

impl From<Value> for RawError {
	fn from(value: Value) -> Self {
		Self::from_value(value)
	}
}

impl From<NormalizedError> for RawError {
	fn from(err: NormalizedError) -> Self {
		Self::Normalized(err)
	}
}

impl From<TransportError> for RawError {
	fn from(err: TransportError) -> Self {
		Self::Transport(err)
	}
}
