use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "wconn")]
#[command(about = "Read-only wallet connector: persist a watched address and normalize wallet errors")]
#[command(version)]
pub struct Cli {
	/// Increase verbosity (-v info, -vv debug)
	#[arg(short, long, global = true, action = clap::ArgAction::Count)]
	pub verbose: u8,

	/// Output format: json (default), ndjson, or text
	#[arg(short = 'f', long, global = true, value_enum, default_value = "json")]
	pub format: OutputFormat,

	/// Directory holding the persisted session
	#[arg(long, global = true, value_name = "DIR", env = "WCONN_STATE_DIR")]
	pub state_dir: Option<PathBuf>,

	/// Connector config file (JSON)
	#[arg(long, global = true, value_name = "FILE", env = "WCONN_CONFIG")]
	pub config: Option<PathBuf>,

	#[command(subcommand)]
	pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
	/// Watch an address on a network and persist the session
	Connect {
		/// Network identifier: a chain id, or a JSON object for structured networks
		#[arg(short, long)]
		network: String,

		/// Address to watch
		#[arg(short, long)]
		address: String,
	},

	/// Restore the persisted session, if any
	Reconnect,

	/// Show the persisted session and where it is stored
	Status,

	/// Forget the persisted session
	Disconnect,

	/// Map a raw wallet error (JSON) onto a normalized error
	Normalize {
		#[arg(long, value_enum, default_value = "tx")]
		flow: NormalizeFlow,

		/// Raw error as JSON; a bare string is read as an error message
		#[arg(short, long, value_name = "JSON")]
		error: String,

		/// Transaction payload attached in the tx flow
		#[arg(long, value_name = "JSON")]
		tx: Option<String>,

		/// Bytes attached in the sign-bytes flow, hex encoded
		#[arg(long, value_name = "HEX")]
		bytes: Option<String>,
	},

	/// Poll until a session is persisted or the timeout elapses
	Wait {
		/// Overrides the configured probe timeout
		#[arg(long, value_name = "MS")]
		timeout_ms: Option<u64>,

		/// Overrides the configured probe interval
		#[arg(long, value_name = "MS")]
		interval_ms: Option<u64>,
	},
}

impl Commands {
	/// Name reported in the output envelope.
	pub fn name(&self) -> &'static str {
		match self {
			Commands::Connect { .. } => "connect",
			Commands::Reconnect => "reconnect",
			Commands::Status => "status",
			Commands::Disconnect => "disconnect",
			Commands::Normalize { .. } => "normalize",
			Commands::Wait { .. } => "wait",
		}
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum NormalizeFlow {
	/// Creating, signing, or broadcasting a transaction
	#[default]
	Tx,
	/// Signing raw bytes
	SignBytes,
}

#[cfg(test)]
mod tests {
	use clap::CommandFactory;

	use super::*;

	#[test]
	fn cli_definition_is_consistent() {
		Cli::command().debug_assert();
	}

	#[test]
	fn parses_connect_with_globals_after_subcommand() {
		let cli = Cli::try_parse_from(["wconn", "connect", "-n", "1", "-a", "0xabc", "-f", "text", "-vv"]).unwrap();
		assert_eq!(cli.verbose, 2);
		assert_eq!(cli.format, OutputFormat::Text);
		let Commands::Connect { network, address } = cli.command else {
			panic!("expected connect");
		};
		assert_eq!(network, "1");
		assert_eq!(address, "0xabc");
	}

	#[test]
	fn normalize_flow_defaults_to_tx() {
		let cli = Cli::try_parse_from(["wconn", "normalize", "--error", "{}"]).unwrap();
		let Commands::Normalize { flow, .. } = cli.command else {
			panic!("expected normalize");
		};
		assert_eq!(flow, NormalizeFlow::Tx);
	}

	#[test]
	fn sign_bytes_flow_uses_kebab_case() {
		let cli = Cli::try_parse_from(["wconn", "normalize", "--flow", "sign-bytes", "--error", "{}"]).unwrap();
		assert_eq!(cli.command.name(), "normalize");
		assert!(matches!(
			cli.command,
			Commands::Normalize {
				flow: NormalizeFlow::SignBytes,
				..
			}
		));
	}
}
