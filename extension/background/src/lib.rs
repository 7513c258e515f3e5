//! Browser binding for the read-only wallet connector.
//!
//! Exposes the session lifecycle over `localStorage`, error normalization for
//! values thrown by wallet SDKs, the address modal, and the extension
//! readiness probe to page scripts.

mod convert;
mod modal;
mod storage;

use std::cell::RefCell;
use std::time::Duration;

use js_sys::{Array, Reflect};
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use wconn::{
    ConnectorConfig, ReadinessProbe, ReadonlyConnector, Session, SessionHandle,
    SessionStore, TxRequest, normalize_sign_bytes_error, normalize_tx_error, user_agent,
};

pub use modal::AddressModal;
pub use storage::LocalStorage;

use convert::{HostValidator, connector_error, raw_error_from_js, to_js};

const LOG_LIMIT: usize = 40;

thread_local! {
    static LOG: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// Read-only wallet backed by `localStorage`.
#[wasm_bindgen]
pub struct ReadonlyWallet {
    connector: ReadonlyConnector<LocalStorage>,
    probe: ReadinessProbe,
}

#[wasm_bindgen]
impl ReadonlyWallet {
    /// `config` is an optional `{ storageKey, probe: { intervalMs, timeoutMs } }`.
    /// `validator` replaces the default hex address check with a JS predicate.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue, validator: Option<js_sys::Function>) -> Result<ReadonlyWallet, JsValue> {
        let config: ConnectorConfig = if config.is_undefined() || config.is_null() {
            ConnectorConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };

        let validator = HostValidator::new(validator, None);
        let store = SessionStore::with_key(LocalStorage::from_window()?, config.storage_key.clone(), validator);
        Ok(ReadonlyWallet {
            connector: ReadonlyConnector::new(store),
            probe: ReadinessProbe::from(config.probe),
        })
    }

    /// Persists `{ networkIdentifier, address }` and returns a live session.
    pub fn connect(&self, options: JsValue) -> Result<WalletSession, JsValue> {
        let session: Session = serde_wasm_bindgen::from_value(options)?;
        let handle = self.connector.connect(session).map_err(connector_error)?;
        push_log(&format!("connected {}", handle.address()));
        Ok(WalletSession { handle })
    }

    #[wasm_bindgen(js_name = reconnectIfExists)]
    pub fn reconnect_if_exists(&self) -> Result<Option<WalletSession>, JsValue> {
        let handle = self.connector.reconnect_if_exists().map_err(connector_error)?;
        if let Some(handle) = &handle {
            push_log(&format!("restored {}", handle.address()));
        }
        Ok(handle.map(|handle| WalletSession { handle }))
    }

    /// Resolves `true` once `globalThis[flag]` is truthy, `false` on timeout.
    #[wasm_bindgen(js_name = waitForExtension)]
    pub fn wait_for_extension(&self, flag: String, timeout_ms: Option<u32>, bypass: bool) -> js_sys::Promise {
        let probe = match timeout_ms {
            Some(ms) => self.probe.with_timeout(Duration::from_millis(ms.into())),
            None => self.probe,
        };
        wasm_bindgen_futures::future_to_promise(async move {
            let global = js_sys::global();
            let key = JsValue::from_str(&flag);
            let ready = probe
                .wait_until_ready(
                    bypass,
                    || Reflect::get(&global, &key).map(|v| v.is_truthy()).unwrap_or(false),
                    sleep,
                )
                .await;
            push_log(&format!("extension flag {flag}: ready={ready}"));
            Ok(JsValue::from_bool(ready))
        })
    }
}

/// Live read-only session.
#[wasm_bindgen]
pub struct WalletSession {
    handle: SessionHandle<LocalStorage>,
}

#[wasm_bindgen]
impl WalletSession {
    #[wasm_bindgen(getter)]
    pub fn address(&self) -> String {
        self.handle.address().to_string()
    }

    /// The identifier as passed to `connect`: a string or a network object.
    #[wasm_bindgen(getter, js_name = networkIdentifier)]
    pub fn network_identifier(&self) -> JsValue {
        to_js(self.handle.network_identifier()).unwrap_or(JsValue::NULL)
    }

    #[wasm_bindgen(getter)]
    pub fn connected(&self) -> bool {
        self.handle.is_connected()
    }

    /// Clears the persisted session. Safe to call more than once.
    pub fn disconnect(&self) -> Result<(), JsValue> {
        self.handle.disconnect().map_err(connector_error)?;
        push_log(&format!("disconnected {}", self.handle.address()));
        Ok(())
    }

    #[wasm_bindgen(js_name = toJSON)]
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        to_js(self.handle.session())
    }
}

/// Maps anything thrown while creating, signing, or broadcasting `tx`.
#[wasm_bindgen(js_name = normalizeTxError)]
pub fn normalize_tx_error_js(tx: JsValue, error: JsValue) -> Result<JsValue, JsValue> {
    let tx = TxRequest::new(serde_wasm_bindgen::from_value::<Value>(tx).unwrap_or(Value::Null));
    to_js(&normalize_tx_error(&tx, raw_error_from_js(&error)))
}

/// Maps anything thrown while signing raw `bytes`.
#[wasm_bindgen(js_name = normalizeSignBytesError)]
pub fn normalize_sign_bytes_error_js(bytes: &[u8], error: JsValue) -> Result<JsValue, JsValue> {
    to_js(&normalize_sign_bytes_error(bytes, raw_error_from_js(&error)))
}

/// One of `mobile`, `desktop_chrome`, `desktop_chromium`, `desktop_other`.
#[wasm_bindgen(js_name = classifyUserAgent)]
pub fn classify_user_agent(ua: &str) -> Result<JsValue, JsValue> {
    to_js(&user_agent::classify(ua))
}

#[wasm_bindgen(js_name = isMobile)]
pub fn is_mobile(ua: &str) -> bool {
    user_agent::is_mobile(ua)
}

#[wasm_bindgen(js_name = recentLogs)]
pub fn recent_logs() -> Array {
    LOG.with(|log| log.borrow().iter().map(|line| JsValue::from_str(line)).collect())
}

async fn sleep(duration: Duration) {
    let ms = duration.as_millis().min(i32::MAX as u128) as i32;
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        set_timeout(&resolve, ms);
    });
    let _ = JsFuture::from(promise).await;
}

fn push_log(line: &str) {
    web_sys::console::debug_1(&JsValue::from_str(line));
    LOG.with(|log| {
        let mut vec = log.borrow_mut();
        append_bounded(&mut vec, line.to_string());
    });
}

fn append_bounded(lines: &mut Vec<String>, line: String) {
    lines.push(line);
    if lines.len() > LOG_LIMIT {
        let excess = lines.len() - LOG_LIMIT;
        lines.drain(0..excess);
    }
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = setTimeout)]
    fn set_timeout(callback: &js_sys::Function, ms: i32) -> JsValue;
}
