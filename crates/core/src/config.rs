//! Connector configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "__readonly_wallet_session__";
/// Interval between extension readiness checks.
pub const DEFAULT_PROBE_INTERVAL_MS: u64 = 500;
/// Total time to wait for an extension before giving up.
pub const DEFAULT_PROBE_TIMEOUT_MS: u64 = 3000;

fn default_storage_key() -> String {
	DEFAULT_STORAGE_KEY.to_string()
}

/// Top-level connector settings. Every field has a default, so `{}` is valid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConnectorConfig {
	/// Storage key holding the serialized session.
	#[serde(default = "default_storage_key")]
	pub storage_key: String,
	#[serde(default)]
	pub probe: ProbeConfig,
}

impl Default for ConnectorConfig {
	fn default() -> Self {
		Self {
			storage_key: default_storage_key(),
			probe: ProbeConfig::default(),
		}
	}
}

/// Extension readiness polling settings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProbeConfig {
	#[serde(default = "ProbeConfig::default_interval_ms")]
	pub interval_ms: u64,
	#[serde(default = "ProbeConfig::default_timeout_ms")]
	pub timeout_ms: u64,
}

impl ProbeConfig {
	fn default_interval_ms() -> u64 {
		DEFAULT_PROBE_INTERVAL_MS
	}

	fn default_timeout_ms() -> u64 {
		DEFAULT_PROBE_TIMEOUT_MS
	}

	pub fn interval(&self) -> Duration {
		Duration::from_millis(self.interval_ms)
	}

	pub fn timeout(&self) -> Duration {
		Duration::from_millis(self.timeout_ms)
	}
}

impl Default for ProbeConfig {
	fn default() -> Self {
		Self {
			interval_ms: DEFAULT_PROBE_INTERVAL_MS,
			timeout_ms: DEFAULT_PROBE_TIMEOUT_MS,
		}
	}
}
