//! Read-only wallet connector core.
//!
//! - [`session`]: persisted session store and connect/reconnect lifecycle
//! - [`normalize`]: mapping of transport errors onto [`NormalizedError`]
//! - [`modal`]: address-entry modal as a pure state machine
//! - [`probe`]: bounded wait for a wallet extension to announce itself
//! - [`user_agent`]: mobile/desktop browser classification
//!
//! Storage and address validation are injected through [`KeyValueStorage`] and
//! [`AddressValidator`], so the same logic runs against browser `localStorage`,
//! a file, or memory.

pub mod address;
pub mod config;
pub mod error;
pub mod modal;
pub mod normalize;
pub mod probe;
pub mod session;
pub mod storage;
pub mod user_agent;

pub use address::{AddressValidator, HexAddressValidator};
pub use config::{ConnectorConfig, ProbeConfig};
pub use error::{ConnectorError, Result};
pub use modal::{ModalEvent, ModalOutcome, ModalState};
pub use normalize::{NormalizedError, RawError, ShapeTag, normalize_sign_bytes_error, normalize_tx_error};
pub use probe::ReadinessProbe;
pub use session::{ReadonlyConnector, SessionHandle, SessionStore};
pub use storage::{KeyValueStorage, MemoryStorage};
pub use user_agent::UserAgentClass;
pub use wconn_protocol::{NetworkIdentifier, Session, TransportError, TxRequest};
