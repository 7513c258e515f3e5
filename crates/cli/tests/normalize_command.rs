//! Integration tests for `wconn normalize`.

use std::process::Command;

use serde_json::{Value, json};

fn normalize(args: &[&str]) -> (bool, Value) {
	let output = Command::new(env!("CARGO_BIN_EXE_wconn"))
		.env_remove("WCONN_LOG")
		.args(["-f", "ndjson", "normalize"])
		.args(args)
		.output()
		.expect("failed to execute wconn");

	let stdout = String::from_utf8_lossy(&output.stdout).to_string();
	let parsed = serde_json::from_str::<Value>(&stdout).unwrap_or_else(|_| json!({ "raw": stdout }));
	(output.status.success(), parsed)
}

#[test]
fn tx_failed_carries_payload_and_hash() {
	let (ok, json) = normalize(&[
		"--error",
		r#"{"type":"tx_failed","txHash":"AB12","message":"out of gas"}"#,
		"--tx",
		r#"{"memo":"rent"}"#,
	]);
	assert!(ok);
	assert_eq!(json["command"], "normalize");
	assert_eq!(json["data"]["kind"], "TxFailed");
	assert_eq!(json["data"]["txHash"], "AB12");
	assert_eq!(json["data"]["message"], "out of gas");
	assert_eq!(json["data"]["tx"], json!({ "memo": "rent" }));
}

#[test]
fn normalized_input_passes_through() {
	let input = json!({ "kind": "Timeout", "message": "slow wallet" }).to_string();
	let (ok, json) = normalize(&["--flow", "sign-bytes", "--error", &input]);
	assert!(ok);
	assert_eq!(json["data"], json!({ "kind": "Timeout", "message": "slow wallet" }));
}

#[test]
fn sign_bytes_fallback_keeps_bytes() {
	let (ok, json) = normalize(&["--flow", "sign-bytes", "--error", "connection reset", "--bytes", "0x0102ff"]);
	assert!(ok);
	assert_eq!(json["data"]["kind"], "SignBytesUnspecifiedError");
	assert_eq!(json["data"]["bytes"], json!([1, 2, 255]));
	assert_eq!(json["data"]["message"], "connection reset");
}

#[test]
fn opaque_values_still_normalize() {
	for input in ["{}", "42", "null", "[1,2]"] {
		let (ok, json) = normalize(&["--error", input]);
		assert!(ok, "failed for {input}");
		assert_eq!(json["data"]["kind"], "TxUnspecifiedError");
		assert!(!json["data"]["message"].as_str().unwrap_or_default().is_empty(), "empty message for {input}");
	}
}

#[test]
fn normalize_ignores_broken_config() {
	let tmp = tempfile::TempDir::new().unwrap();
	let config = tmp.path().join("config.json");
	std::fs::write(&config, "[").unwrap();

	let output = Command::new(env!("CARGO_BIN_EXE_wconn"))
		.env_remove("WCONN_LOG")
		.arg("--config")
		.arg(&config)
		.args(["-f", "ndjson", "normalize", "--error", r#"{"type":"user_denied"}"#])
		.output()
		.expect("failed to execute wconn");
	assert!(output.status.success());
	let json: Value = serde_json::from_slice(&output.stdout).unwrap();
	assert_eq!(json["data"]["kind"], "UserDenied");
}

#[test]
fn invalid_tx_json_is_an_input_error() {
	let (ok, json) = normalize(&["--error", "{}", "--tx", "{oops"]);
	assert!(!ok);
	assert_eq!(json["error"]["code"], "INVALID_INPUT");
}

#[test]
fn invalid_hex_is_an_input_error() {
	let (ok, json) = normalize(&["--flow", "sign-bytes", "--error", "{}", "--bytes", "xyz"]);
	assert!(!ok);
	assert_eq!(json["error"]["code"], "INVALID_INPUT");
}
