use serde_json::{Value, json};
use tracing::info;
use wconn::{NetworkIdentifier, ReadonlyConnector, Session};

use crate::error::Result;
use crate::output::{CommandResult, OutputFormat};
use crate::storage::FileStorage;

type Connector = ReadonlyConnector<FileStorage>;

pub fn connect(connector: &Connector, network: String, address: String, format: OutputFormat) -> Result<()> {
	let handle = connector.connect(Session::new(parse_network(network), address))?;
	info!(target = "wconn.cli", address = handle.address(), "connected");

	let data = json!({ "connected": true, "session": handle.session() });
	CommandResult::success("connect", data).print(format);
	Ok(())
}

/// A JSON object names a structured network; anything else is a plain id.
fn parse_network(network: String) -> NetworkIdentifier {
	match serde_json::from_str::<Value>(&network) {
		Ok(value @ Value::Object(_)) => NetworkIdentifier::from(value),
		_ => NetworkIdentifier::from(network),
	}
}

pub fn reconnect(connector: &Connector, format: OutputFormat) -> Result<()> {
	let data = match connector.reconnect_if_exists()? {
		Some(handle) => json!({ "connected": true, "session": handle.session() }),
		None => json!({ "connected": false, "session": null }),
	};
	CommandResult::success("reconnect", data).print(format);
	Ok(())
}

/// Reports the stored session after self-healing, plus where it lives.
pub fn status(connector: &Connector, format: OutputFormat) -> Result<()> {
	let store = connector.store();
	let session = store.load()?;

	let data = json!({
		"active": session.is_some(),
		"session": session,
		"key": store.key(),
		"path": store.storage().path_for(store.key()),
	});
	CommandResult::success("status", data).print(format);
	Ok(())
}

pub fn disconnect(connector: &Connector, format: OutputFormat) -> Result<()> {
	let was_connected = match connector.reconnect_if_exists()? {
		Some(handle) => {
			handle.disconnect()?;
			true
		}
		None => false,
	};
	info!(target = "wconn.cli", was_connected, "disconnected");

	let data = json!({ "disconnected": true, "wasConnected": was_connected });
	CommandResult::success("disconnect", data).print(format);
	Ok(())
}
