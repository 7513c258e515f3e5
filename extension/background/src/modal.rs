use serde_json::Value;
use wasm_bindgen::prelude::*;
use wconn::modal::{self, ModalEvent, ModalOutcome, ModalState};
use wconn::{NetworkIdentifier, Session};

use crate::convert::{HostValidator, to_js};

/// Address-entry modal driven from the page's own markup.
#[wasm_bindgen]
pub struct AddressModal {
    state: ModalState,
    validator: HostValidator,
}

#[wasm_bindgen]
impl AddressModal {
    /// `validator` is the same JS predicate given to `ReadonlyWallet`; without
    /// one, hex addresses are checked (EIP-1191 when `chain_id` is set).
    #[wasm_bindgen(constructor)]
    pub fn new(chain_id: Option<u32>, validator: Option<js_sys::Function>) -> AddressModal {
        AddressModal {
            state: ModalState::Closed,
            validator: HostValidator::new(validator, chain_id),
        }
    }

    /// `networks` is an array of identifiers: strings or network objects.
    pub fn open(&mut self, networks: JsValue) -> Result<(), JsValue> {
        let networks: Vec<Value> = serde_wasm_bindgen::from_value(networks)?;
        self.apply(ModalEvent::Open(networks.into_iter().map(NetworkIdentifier::from).collect()));
        Ok(())
    }

    #[wasm_bindgen(js_name = selectNetwork)]
    pub fn select_network(&mut self, index: usize) {
        self.apply(ModalEvent::SelectNetwork(index));
    }

    pub fn input(&mut self, value: String) {
        self.apply(ModalEvent::Input(value));
    }

    /// Returns the confirmed `{ networkIdentifier, address }`, or `null` when
    /// the address was rejected.
    pub fn submit(&mut self) -> Result<JsValue, JsValue> {
        match self.apply(ModalEvent::Submit) {
            Some(ModalOutcome::Confirmed(session)) => to_js::<Session>(&session),
            _ => Ok(JsValue::NULL),
        }
    }

    pub fn cancel(&mut self) {
        self.apply(ModalEvent::Cancel);
    }

    #[wasm_bindgen(getter, js_name = isOpen)]
    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open(_))
    }

    #[wasm_bindgen(getter, js_name = canSubmit)]
    pub fn can_submit(&self) -> bool {
        match &self.state {
            ModalState::Open(form) => form.can_submit(&self.validator),
            ModalState::Closed => false,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn error(&self) -> Option<String> {
        match &self.state {
            ModalState::Open(form) => form.error.clone(),
            ModalState::Closed => None,
        }
    }

    #[wasm_bindgen(getter, js_name = selectedNetwork)]
    pub fn selected_network(&self) -> JsValue {
        match &self.state {
            ModalState::Open(form) => form
                .selected_network()
                .and_then(|network| to_js(network).ok())
                .unwrap_or(JsValue::NULL),
            ModalState::Closed => JsValue::NULL,
        }
    }
}

impl AddressModal {
    fn apply(&mut self, event: ModalEvent) -> Option<ModalOutcome> {
        let state = std::mem::take(&mut self.state);
        let (next, outcome) = modal::step(state, event, &self.validator);
        self.state = next;
        outcome
    }
}
