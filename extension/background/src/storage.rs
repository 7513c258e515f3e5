use wasm_bindgen::JsValue;
use wconn::{ConnectorError, KeyValueStorage};

use crate::convert::stringify_js_error;

/// `window.localStorage` as a [`KeyValueStorage`].
pub struct LocalStorage {
    inner: web_sys::Storage,
}

impl LocalStorage {
    pub fn from_window() -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window available"))?;
        let inner = window
            .local_storage()?
            .ok_or_else(|| JsValue::from_str("localStorage is disabled"))?;
        Ok(Self { inner })
    }
}

impl KeyValueStorage for LocalStorage {
    fn get(&self, key: &str) -> wconn::Result<Option<String>> {
        self.inner
            .get_item(key)
            .map_err(|err| ConnectorError::storage(stringify_js_error(err)))
    }

    fn set(&self, key: &str, value: &str) -> wconn::Result<()> {
        self.inner
            .set_item(key, value)
            .map_err(|err| ConnectorError::storage(stringify_js_error(err)))
    }

    fn remove(&self, key: &str) -> wconn::Result<()> {
        self.inner
            .remove_item(key)
            .map_err(|err| ConnectorError::storage(stringify_js_error(err)))
    }
}
