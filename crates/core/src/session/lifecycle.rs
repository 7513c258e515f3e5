//! Connect/reconnect/disconnect for read-only sessions.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::info;
use wconn_protocol::{NetworkIdentifier, Session};

use super::store::SessionStore;
use crate::error::Result;
use crate::storage::KeyValueStorage;

/// Entry point for read-only wallet sessions.
pub struct ReadonlyConnector<S> {
	store: Arc<SessionStore<S>>,
}

impl<S: KeyValueStorage> ReadonlyConnector<S> {
	pub fn new(store: SessionStore<S>) -> Self {
		Self { store: Arc::new(store) }
	}

	pub fn store(&self) -> &SessionStore<S> {
		&self.store
	}

	/// Persists `options` and returns a live handle.
	///
	/// Fails with [`ConnectorError::InvalidAddress`](crate::ConnectorError::InvalidAddress)
	/// without touching storage when the address is rejected.
	pub fn connect(&self, options: Session) -> Result<SessionHandle<S>> {
		self.store.save(&options)?;
		info!(target = "wconn.session", network = %options.network_identifier, address = %options.address, "read-only wallet connected");
		Ok(SessionHandle::new(options, Arc::clone(&self.store)))
	}

	/// Restores the stored session, if one survives validation.
	///
	/// The loaded entry is wrapped as-is; it is not written back.
	pub fn reconnect_if_exists(&self) -> Result<Option<SessionHandle<S>>> {
		let Some(session) = self.store.load()? else {
			return Ok(None);
		};
		info!(target = "wconn.session", network = %session.network_identifier, "restored read-only wallet");
		Ok(Some(SessionHandle::new(session, Arc::clone(&self.store))))
	}
}

/// A connected read-only session plus its bound `disconnect`.
pub struct SessionHandle<S> {
	session: Session,
	store: Arc<SessionStore<S>>,
	connected: AtomicBool,
}

impl<S: KeyValueStorage> SessionHandle<S> {
	fn new(session: Session, store: Arc<SessionStore<S>>) -> Self {
		Self {
			session,
			store,
			connected: AtomicBool::new(true),
		}
	}

	pub fn address(&self) -> &str {
		&self.session.address
	}

	pub fn network_identifier(&self) -> &NetworkIdentifier {
		&self.session.network_identifier
	}

	pub fn session(&self) -> &Session {
		&self.session
	}

	/// `false` once [`disconnect`](Self::disconnect) has run on this handle.
	pub fn is_connected(&self) -> bool {
		self.connected.load(Ordering::Acquire)
	}

	/// Removes the stored session. Safe to call repeatedly; fields stay readable.
	pub fn disconnect(&self) -> Result<()> {
		self.store.clear()?;
		if self.connected.swap(false, Ordering::AcqRel) {
			info!(target = "wconn.session", address = %self.session.address, "read-only wallet disconnected");
		}
		Ok(())
	}
}

impl<S> std::fmt::Debug for SessionHandle<S> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("SessionHandle")
			.field("session", &self.session)
			.field("connected", &self.connected.load(Ordering::Relaxed))
			.finish()
	}
}
