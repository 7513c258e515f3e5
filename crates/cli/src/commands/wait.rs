use std::time::Duration;

use serde_json::json;
use tracing::debug;
use wconn::{ConnectorConfig, ReadinessProbe, ReadonlyConnector};

use crate::error::Result;
use crate::output::{CommandResult, OutputFormat};
use crate::storage::FileStorage;

/// Polls the store until another process persists a session.
pub async fn execute(
	connector: &ReadonlyConnector<FileStorage>,
	config: &ConnectorConfig,
	timeout_ms: Option<u64>,
	interval_ms: Option<u64>,
	format: OutputFormat,
) -> Result<()> {
	let mut probe = ReadinessProbe::from(config.probe);
	if let Some(ms) = timeout_ms {
		probe = probe.with_timeout(Duration::from_millis(ms));
	}
	if let Some(ms) = interval_ms {
		probe.interval = Duration::from_millis(ms);
	}

	let store = connector.store();
	let ready = probe
		.wait_until_ready(
			false,
			|| match store.load() {
				Ok(session) => session.is_some(),
				Err(err) => {
					debug!(target = "wconn.cli", error = %err, "session check failed");
					false
				}
			},
			tokio::time::sleep,
		)
		.await;

	let session = if ready { store.load()? } else { None };
	let data = json!({
		"ready": ready,
		"session": session,
		"timeoutMs": probe.timeout.as_millis() as u64,
	});
	CommandResult::success("wait", data).print(format);
	Ok(())
}
