use serde_json::Value;
use wconn::{RawError, TxRequest, normalize_sign_bytes_error, normalize_tx_error};

use crate::cli::NormalizeFlow;
use crate::error::{CliError, Result};
use crate::output::{CommandResult, OutputFormat};

pub fn execute(flow: NormalizeFlow, error: &str, tx: Option<&str>, bytes: Option<&str>, format: OutputFormat) -> Result<()> {
	let raw = parse_raw_error(error);

	let normalized = match flow {
		NormalizeFlow::Tx => {
			let tx = match tx {
				Some(tx) => TxRequest::new(serde_json::from_str::<Value>(tx).map_err(|e| CliError::InvalidInput(format!("--tx is not valid JSON: {e}")))?),
				None => TxRequest::default(),
			};
			normalize_tx_error(&tx, raw)
		}
		NormalizeFlow::SignBytes => {
			let bytes = match bytes {
				Some(hex) => decode_hex(hex)?,
				None => Vec::new(),
			};
			normalize_sign_bytes_error(&bytes, raw)
		}
	};

	CommandResult::success("normalize", normalized).print(format);
	Ok(())
}

/// Input that is not JSON is treated as a bare message string.
fn parse_raw_error(input: &str) -> RawError {
	let value = serde_json::from_str(input).unwrap_or_else(|_| Value::String(input.to_string()));
	RawError::from_value(value)
}

fn decode_hex(input: &str) -> Result<Vec<u8>> {
	let digits = input.strip_prefix("0x").unwrap_or(input);
	if digits.len() % 2 != 0 {
		return Err(CliError::InvalidInput(format!("--bytes has an odd number of hex digits: {input}")));
	}
	(0..digits.len())
		.step_by(2)
		.map(|i| {
			digits
				.get(i..i + 2)
				.and_then(|pair| u8::from_str_radix(pair, 16).ok())
				.ok_or_else(|| CliError::InvalidInput(format!("--bytes is not valid hex: {input}")))
		})
		.collect()
}
