//! Read-only session persistence and lifecycle.
//!
//! [`SessionStore`] owns the single storage entry; [`ReadonlyConnector`] turns
//! stored sessions into live [`SessionHandle`]s and back.

/// Connect/reconnect/disconnect orchestration.
pub mod lifecycle;
/// Single-key session persistence with load-time validation.
pub mod store;

pub use lifecycle::{ReadonlyConnector, SessionHandle};
pub use store::SessionStore;

#[cfg(test)]
mod tests;
