mod normalize;
mod session;
mod wait;

use tracing::debug;
use wconn::{ConnectorConfig, HexAddressValidator, ReadonlyConnector, SessionStore};

use crate::cli::{Cli, Commands};
use crate::error::Result;
use crate::state::{StatePaths, load_config};
use crate::storage::FileStorage;

pub async fn dispatch(cli: Cli) -> Result<()> {
	let Cli {
		format,
		state_dir,
		config,
		command,
		..
	} = cli;
	let paths = StatePaths::resolve(config, state_dir);

	match command {
		// Normalization is stateless; no config or storage is touched.
		Commands::Normalize { flow, error, tx, bytes } => normalize::execute(flow, &error, tx.as_deref(), bytes.as_deref(), format),
		Commands::Connect { network, address } => {
			let (connector, _) = open(&paths)?;
			session::connect(&connector, network, address, format)
		}
		Commands::Reconnect => session::reconnect(&open(&paths)?.0, format),
		Commands::Status => session::status(&open(&paths)?.0, format),
		Commands::Disconnect => session::disconnect(&open(&paths)?.0, format),
		Commands::Wait { timeout_ms, interval_ms } => {
			let (connector, config) = open(&paths)?;
			wait::execute(&connector, &config, timeout_ms, interval_ms, format).await
		}
	}
}

/// Loads config and builds the file-backed connector.
fn open(paths: &StatePaths) -> Result<(ReadonlyConnector<FileStorage>, ConnectorConfig)> {
	let config = load_config(&paths.config_file)?;
	debug!(
		target = "wconn.cli",
		config = %paths.config_file.display(),
		state_dir = %paths.state_dir.display(),
		key = %config.storage_key,
		"resolved state"
	);

	let store = SessionStore::with_key(FileStorage::new(&paths.state_dir), config.storage_key.clone(), HexAddressValidator::new());
	Ok((ReadonlyConnector::new(store), config))
}
