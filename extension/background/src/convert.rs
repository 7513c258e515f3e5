//! Conversions between JS values and connector types.

use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::{JsCast, JsValue};
use wconn::{AddressValidator, ConnectorError, HexAddressValidator, RawError};

/// Reads an arbitrary thrown value as a [`RawError`].
///
/// `Error` instances keep `message` on a non-enumerable property, so it is
/// copied onto the decoded object before classification.
pub fn raw_error_from_js(error: &JsValue) -> RawError {
    let value: Value = serde_wasm_bindgen::from_value(error.clone()).unwrap_or(Value::Null);
    let value = match error.dyn_ref::<js_sys::Error>() {
        Some(js_error) => with_native_message(value, js_error.message().into()),
        None => value,
    };
    RawError::from_value(value)
}

/// Adds `message` to `value` unless it already carries one.
pub fn with_native_message(value: Value, message: String) -> Value {
    match value {
        Value::Object(mut fields) => {
            fields.entry("message").or_insert(Value::String(message));
            Value::Object(fields)
        }
        _ => serde_json::json!({ "message": message }),
    }
}

/// Address check shared by the wallet and the modal: the host's JS predicate
/// when one is given, hex addresses otherwise.
pub struct HostValidator {
    predicate: Option<js_sys::Function>,
    fallback: HexAddressValidator,
}

impl HostValidator {
    pub fn new(predicate: Option<js_sys::Function>, chain_id: Option<u32>) -> Self {
        let fallback = match chain_id {
            Some(id) => HexAddressValidator::with_chain_id(id.into()),
            None => HexAddressValidator::new(),
        };
        Self { predicate, fallback }
    }
}

impl AddressValidator for HostValidator {
    fn validate(&self, address: &str) -> bool {
        match &self.predicate {
            Some(predicate) => predicate
                .call1(&JsValue::NULL, &JsValue::from_str(address))
                .map(|result| result.is_truthy())
                .unwrap_or(false),
            None => self.fallback.validate(address),
        }
    }
}

/// Serializes to plain JS objects (`null` for `None`, objects for maps).
pub fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(JsValue::from)
}

pub fn connector_error(err: ConnectorError) -> JsValue {
    let name = match &err {
        ConnectorError::InvalidAddress { .. } => "InvalidAddress",
        ConnectorError::Storage(_) => "StorageError",
        ConnectorError::Json(_) => "JsonError",
    };
    let js_error = js_sys::Error::new(&err.to_string());
    js_error.set_name(name);
    js_error.into()
}

pub fn stringify_js_error(err: JsValue) -> String {
    err.as_string()
        .or_else(|| js_sys::JSON::stringify(&err).ok()?.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}
