//! Shapes shared between the wconn library, its browser binding, and the CLI.
//!
//! - [`Session`]: the record persisted at the session storage key
//! - [`TransportError`]: tagged error shapes raised by remote wallet transports
//! - [`TxRequest`]: opaque transaction payload carried through error reports

pub mod session;
pub mod transport;

pub use session::{NetworkIdentifier, Session};
pub use transport::{TRANSPORT_TAG, TransportError, TxRequest};
