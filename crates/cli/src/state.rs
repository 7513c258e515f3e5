//! Config and state locations for the CLI.

use std::fs;
use std::path::{Path, PathBuf};

use wconn::ConnectorConfig;

use crate::error::{CliError, Result};

/// File paths for CLI config and session state.
///
/// Defaults follow XDG (`~/.config/wconn/config.json`, `~/.local/share/wconn/`).
#[derive(Debug, Clone)]
pub struct StatePaths {
	pub config_file: PathBuf,
	pub state_dir: PathBuf,
}

impl StatePaths {
	pub fn resolve(config_override: Option<PathBuf>, state_override: Option<PathBuf>) -> Self {
		let config_home = std::env::var_os("XDG_CONFIG_HOME")
			.map(PathBuf::from)
			.or_else(dirs::config_dir)
			.unwrap_or_else(|| PathBuf::from("."));

		let data_home = std::env::var_os("XDG_DATA_HOME")
			.map(PathBuf::from)
			.or_else(dirs::data_dir)
			.unwrap_or_else(|| PathBuf::from("."));

		Self {
			config_file: config_override.unwrap_or_else(|| config_home.join("wconn").join("config.json")),
			state_dir: state_override.unwrap_or_else(|| data_home.join("wconn")),
		}
	}
}

/// Loads connector config; a missing file yields defaults.
pub fn load_config(path: &Path) -> Result<ConnectorConfig> {
	let content = match fs::read_to_string(path) {
		Ok(c) => c,
		Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(ConnectorConfig::default()),
		Err(err) => return Err(CliError::Io(err)),
	};
	serde_json::from_str(&content).map_err(|err| CliError::Config(format!("{}: {err}", path.display())))
}
