//! Session persistence at a fixed storage key.

use tracing::{debug, warn};
use wconn_protocol::Session;

use crate::address::AddressValidator;
use crate::config::DEFAULT_STORAGE_KEY;
use crate::error::{ConnectorError, Result};
use crate::storage::KeyValueStorage;

/// Reads, writes, and clears the one persisted [`Session`].
///
/// Entries that fail to decode or whose address fails validation are deleted
/// on load and reported as absent, so a corrupt entry never blocks a fresh
/// connect.
pub struct SessionStore<S> {
	storage: S,
	key: String,
	validator: Box<dyn AddressValidator>,
}

impl<S: KeyValueStorage> SessionStore<S> {
	/// Creates a store using [`DEFAULT_STORAGE_KEY`].
	pub fn new(storage: S, validator: impl AddressValidator + 'static) -> Self {
		Self::with_key(storage, DEFAULT_STORAGE_KEY, validator)
	}

	pub fn with_key(storage: S, key: impl Into<String>, validator: impl AddressValidator + 'static) -> Self {
		Self {
			storage,
			key: key.into(),
			validator: Box::new(validator),
		}
	}

	pub fn key(&self) -> &str {
		&self.key
	}

	pub fn storage(&self) -> &S {
		&self.storage
	}

	/// Loads the stored session, healing corrupt entries.
	pub fn load(&self) -> Result<Option<Session>> {
		let Some(raw) = self.storage.get(&self.key)? else {
			debug!(target = "wconn.session", key = %self.key, "no stored session");
			return Ok(None);
		};

		match self.decode(&raw) {
			Ok(session) => {
				debug!(target = "wconn.session", key = %self.key, network = %session.network_identifier, "loaded session");
				Ok(Some(session))
			}
			Err(reason) => {
				warn!(target = "wconn.session", key = %self.key, reason, "removing corrupt session entry");
				self.storage.remove(&self.key)?;
				Ok(None)
			}
		}
	}

	/// Validates and persists `session`, overwriting any previous entry.
	pub fn save(&self, session: &Session) -> Result<()> {
		if !self.validator.validate(&session.address) {
			return Err(ConnectorError::InvalidAddress {
				address: session.address.clone(),
			});
		}
		let content = serde_json::to_string(session)?;
		self.storage.set(&self.key, &content)?;
		debug!(target = "wconn.session", key = %self.key, network = %session.network_identifier, "saved session");
		Ok(())
	}

	/// Removes the stored session. No-op when nothing is stored.
	pub fn clear(&self) -> Result<()> {
		self.storage.remove(&self.key)?;
		debug!(target = "wconn.session", key = %self.key, "cleared session");
		Ok(())
	}

	fn decode(&self, raw: &str) -> std::result::Result<Session, &'static str> {
		let value: serde_json::Value = serde_json::from_str(raw).map_err(|_| "entry is not valid JSON")?;
		let Some(address) = value.get("address").and_then(serde_json::Value::as_str) else {
			return Err("entry has no string address");
		};
		if !self.validator.validate(address) {
			return Err("stored address failed validation");
		}
		serde_json::from_value(value).map_err(|_| "entry does not match the session shape")
	}
}

impl<S> std::fmt::Debug for SessionStore<S> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("SessionStore").field("key", &self.key).finish_non_exhaustive()
	}
}
