//! Read-only session record.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Opaque key identifying the chain/network an address is scoped to.
///
/// Any JSON value: a chain id string, a number, or a host-defined network
/// object. The library never interprets it; it is stored and compared as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NetworkIdentifier(Value);

impl NetworkIdentifier {
	pub fn new(value: impl Into<Value>) -> Self {
		Self(value.into())
	}

	/// The identifier when it is a plain string.
	pub fn as_str(&self) -> Option<&str> {
		self.0.as_str()
	}

	pub fn as_value(&self) -> &Value {
		&self.0
	}
}

/// Strings print bare; other values print as JSON text.
impl fmt::Display for NetworkIdentifier {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.0 {
			Value::String(id) => f.write_str(id),
			other => write!(f, "{other}"),
		}
	}
}

impl From<&str> for NetworkIdentifier {
	fn from(id: &str) -> Self {
		Self(Value::String(id.to_string()))
	}
}

impl From<String> for NetworkIdentifier {
	fn from(id: String) -> Self {
		Self(Value::String(id))
	}
}

impl From<Value> for NetworkIdentifier {
	fn from(value: Value) -> Self {
		Self(value)
	}
}

/// A read-only wallet view: a network scope plus an account address.
///
/// Serialized as `{"networkIdentifier": ..., "address": "..."}`. There is no
/// schema version; shape changes are caught by load-time validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
	/// Network the address is scoped to.
	#[serde(default)]
	pub network_identifier: NetworkIdentifier,
	/// Chain-specific account address.
	pub address: String,
}

impl Session {
	pub fn new(network_identifier: impl Into<NetworkIdentifier>, address: impl Into<String>) -> Self {
		Self {
			network_identifier: network_identifier.into(),
			address: address.into(),
		}
	}
}
