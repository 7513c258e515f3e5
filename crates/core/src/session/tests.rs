use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use serde_json::json;
use wconn_protocol::Session;

use super::*;
use crate::address::HexAddressValidator;
use crate::config::DEFAULT_STORAGE_KEY;
use crate::error::{ConnectorError, Result};
use crate::storage::{KeyValueStorage, MemoryStorage};

const ALICE: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";
const BOB: &str = "0x70997970C51812dc3A010C7d01b50e0d17dc79C8";

fn store_with(storage: &Arc<MemoryStorage>) -> SessionStore<Arc<MemoryStorage>> {
	SessionStore::new(Arc::clone(storage), HexAddressValidator::new())
}

fn raw_entry(storage: &MemoryStorage) -> Option<String> {
	storage.get(DEFAULT_STORAGE_KEY).unwrap()
}

#[test]
fn load_after_save_returns_equal_session() {
	let storage = Arc::new(MemoryStorage::new());
	let store = store_with(&storage);
	let session = Session::new("mainnet", ALICE);

	store.save(&session).unwrap();
	assert_eq!(store.load().unwrap(), Some(session));
}

#[test]
fn save_overwrites_previous_session() {
	let storage = Arc::new(MemoryStorage::new());
	let store = store_with(&storage);

	store.save(&Session::new("mainnet", ALICE)).unwrap();
	store.save(&Session::new("testnet", BOB)).unwrap();
	assert_eq!(store.load().unwrap(), Some(Session::new("testnet", BOB)));
	assert_eq!(storage.len(), 1);
}

#[test]
fn invalid_save_leaves_empty_storage_empty() {
	let storage = Arc::new(MemoryStorage::new());
	let store = store_with(&storage);

	let err = store.save(&Session::new("mainnet", "not-a-real-address")).unwrap_err();
	match err {
		ConnectorError::InvalidAddress { address } => assert_eq!(address, "not-a-real-address"),
		other => panic!("expected InvalidAddress, got {other:?}"),
	}
	assert!(storage.is_empty());
}

#[test]
fn invalid_save_keeps_previous_entry() {
	let storage = Arc::new(MemoryStorage::new());
	let store = store_with(&storage);
	store.save(&Session::new("mainnet", ALICE)).unwrap();
	let before = raw_entry(&storage);

	assert!(store.save(&Session::new("mainnet", "0x1234")).unwrap_err().is_invalid_address());
	assert_eq!(raw_entry(&storage), before);
}

#[test]
fn unparseable_entry_is_removed_on_load() {
	let storage = Arc::new(MemoryStorage::new());
	storage.set(DEFAULT_STORAGE_KEY, "{not json").unwrap();
	let store = store_with(&storage);

	assert_eq!(store.load().unwrap(), None);
	assert_eq!(raw_entry(&storage), None);
}

#[test]
fn entry_without_address_is_removed_on_load() {
	let storage = Arc::new(MemoryStorage::new());
	storage.set(DEFAULT_STORAGE_KEY, r#"{"networkIdentifier":"mainnet"}"#).unwrap();
	let store = store_with(&storage);

	assert_eq!(store.load().unwrap(), None);
	assert_eq!(raw_entry(&storage), None);
}

#[test]
fn entry_with_non_string_address_is_removed_on_load() {
	let storage = Arc::new(MemoryStorage::new());
	storage.set(DEFAULT_STORAGE_KEY, r#"{"networkIdentifier":"mainnet","address":42}"#).unwrap();
	let store = store_with(&storage);

	assert_eq!(store.load().unwrap(), None);
	assert_eq!(raw_entry(&storage), None);
}

#[test]
fn entry_with_invalid_address_is_removed_on_load() {
	let storage = Arc::new(MemoryStorage::new());
	storage
		.set(DEFAULT_STORAGE_KEY, r#"{"networkIdentifier":"mainnet","address":"not-a-real-address"}"#)
		.unwrap();
	let store = store_with(&storage);

	assert_eq!(store.load().unwrap(), None);
	assert_eq!(raw_entry(&storage), None);
}

#[test]
fn object_network_identifier_round_trips() {
	let storage = Arc::new(MemoryStorage::new());
	let store = store_with(&storage);
	let session = Session::new(json!({ "name": "mainnet", "chainID": "columbus-5" }), ALICE);

	store.save(&session).unwrap();
	assert_eq!(store.load().unwrap(), Some(session));
	assert!(raw_entry(&storage).is_some());
}

#[test]
fn object_network_identifier_written_by_host_is_kept() {
	let storage = Arc::new(MemoryStorage::new());
	let entry = json!({ "networkIdentifier": { "name": "mainnet", "chainID": "columbus-5" }, "address": ALICE });
	storage.set(DEFAULT_STORAGE_KEY, &entry.to_string()).unwrap();
	let store = store_with(&storage);

	let loaded = store.load().unwrap().expect("valid entry survives");
	assert_eq!(loaded.network_identifier.as_value(), &entry["networkIdentifier"]);
	assert!(raw_entry(&storage).is_some());
}

#[test]
fn entry_without_network_identifier_is_kept() {
	let storage = Arc::new(MemoryStorage::new());
	storage.set(DEFAULT_STORAGE_KEY, &format!(r#"{{"address":"{ALICE}"}}"#)).unwrap();
	let store = store_with(&storage);

	let loaded = store.load().unwrap().expect("address alone is a valid entry");
	assert_eq!(loaded.address, ALICE);
	assert!(raw_entry(&storage).is_some());
}

#[test]
fn clear_is_a_noop_when_empty() {
	let storage = Arc::new(MemoryStorage::new());
	let store = store_with(&storage);
	store.clear().unwrap();
	store.clear().unwrap();
	assert!(storage.is_empty());
}

#[test]
fn custom_key_isolates_entries() {
	let storage = Arc::new(MemoryStorage::new());
	let store = SessionStore::with_key(Arc::clone(&storage), "custom", HexAddressValidator::new());
	store.save(&Session::new("mainnet", ALICE)).unwrap();

	assert!(storage.get("custom").unwrap().is_some());
	assert_eq!(raw_entry(&storage), None);
}

#[test]
fn connect_load_disconnect_round_trip() {
	let storage = Arc::new(MemoryStorage::new());
	let connector = ReadonlyConnector::new(store_with(&storage));

	let handle = connector.connect(Session::new("X", ALICE)).unwrap();
	assert_eq!(handle.address(), ALICE);
	assert_eq!(handle.network_identifier().as_str(), Some("X"));
	assert!(handle.is_connected());
	assert_eq!(connector.store().load().unwrap(), Some(Session::new("X", ALICE)));

	handle.disconnect().unwrap();
	assert_eq!(connector.store().load().unwrap(), None);
	assert!(!handle.is_connected());
	// Handle stays readable after disconnect.
	assert_eq!(handle.address(), ALICE);
}

#[test]
fn repeated_disconnect_succeeds() {
	let storage = Arc::new(MemoryStorage::new());
	let connector = ReadonlyConnector::new(store_with(&storage));
	let handle = connector.connect(Session::new("X", ALICE)).unwrap();

	handle.disconnect().unwrap();
	handle.disconnect().unwrap();
	assert!(storage.is_empty());
}

#[test]
fn connect_propagates_invalid_address() {
	let storage = Arc::new(MemoryStorage::new());
	let connector = ReadonlyConnector::new(store_with(&storage));

	let err = connector.connect(Session::new("X", "nope")).unwrap_err();
	assert!(err.is_invalid_address());
	assert!(storage.is_empty());
}

#[test]
fn reconnect_with_empty_storage_returns_none() {
	let storage = Arc::new(MemoryStorage::new());
	let connector = ReadonlyConnector::new(store_with(&storage));
	assert!(connector.reconnect_if_exists().unwrap().is_none());
}

#[test]
fn reconnect_with_corrupt_entry_returns_none_and_heals() {
	let storage = Arc::new(MemoryStorage::new());
	storage
		.set(DEFAULT_STORAGE_KEY, r#"{"address":"not-a-real-address","networkIdentifier":"X"}"#)
		.unwrap();
	let connector = ReadonlyConnector::new(store_with(&storage));

	assert!(connector.reconnect_if_exists().unwrap().is_none());
	assert_eq!(raw_entry(&storage), None);
}

#[test]
fn reconnect_restores_connected_session() {
	let storage = Arc::new(MemoryStorage::new());
	let connector = ReadonlyConnector::new(store_with(&storage));
	connector.connect(Session::new("X", BOB)).unwrap();

	let restored = connector.reconnect_if_exists().unwrap().expect("stored session");
	assert_eq!(restored.session(), &Session::new("X", BOB));

	restored.disconnect().unwrap();
	assert!(connector.reconnect_if_exists().unwrap().is_none());
}

struct BrokenStorage;

impl KeyValueStorage for BrokenStorage {
	fn get(&self, _key: &str) -> Result<Option<String>> {
		Err(ConnectorError::storage("quota exceeded"))
	}

	fn set(&self, _key: &str, _value: &str) -> Result<()> {
		Err(ConnectorError::storage("quota exceeded"))
	}

	fn remove(&self, _key: &str) -> Result<()> {
		Err(ConnectorError::storage("quota exceeded"))
	}
}

#[test]
fn backend_failures_are_surfaced() {
	let store = SessionStore::new(BrokenStorage, HexAddressValidator::new());
	assert!(matches!(store.load(), Err(ConnectorError::Storage(_))));
	assert!(matches!(store.save(&Session::new("X", ALICE)), Err(ConnectorError::Storage(_))));
	assert!(matches!(store.clear(), Err(ConnectorError::Storage(_))));
}

/// Memory storage that counts writes and can be told to refuse them.
#[derive(Default)]
struct WriteCountingStorage {
	inner: MemoryStorage,
	writes: AtomicUsize,
	read_only: AtomicBool,
}

impl KeyValueStorage for WriteCountingStorage {
	fn get(&self, key: &str) -> Result<Option<String>> {
		self.inner.get(key)
	}

	fn set(&self, key: &str, value: &str) -> Result<()> {
		self.writes.fetch_add(1, Ordering::SeqCst);
		if self.read_only.load(Ordering::SeqCst) {
			return Err(ConnectorError::storage("read-only"));
		}
		self.inner.set(key, value)
	}

	fn remove(&self, key: &str) -> Result<()> {
		self.inner.remove(key)
	}
}

#[test]
fn reconnect_does_not_write_back() {
	let storage = Arc::new(WriteCountingStorage::default());
	let connector = ReadonlyConnector::new(SessionStore::new(Arc::clone(&storage), HexAddressValidator::new()));
	connector.connect(Session::new("X", ALICE)).unwrap();
	assert_eq!(storage.writes.load(Ordering::SeqCst), 1);

	storage.read_only.store(true, Ordering::SeqCst);
	let restored = connector.reconnect_if_exists().unwrap().expect("stored session");
	assert_eq!(restored.session(), &Session::new("X", ALICE));
	assert_eq!(storage.writes.load(Ordering::SeqCst), 1);
}
