//! Native host for read-only wallet sessions.
//!
//! Backs the session store with a JSON file under the user's data directory so
//! the connect/reconnect/disconnect lifecycle can be driven from scripts.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod output;
pub mod state;
pub mod storage;
