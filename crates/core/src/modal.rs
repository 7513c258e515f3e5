//! Address-entry modal as a pure state machine.
//!
//! Rendering lives with the host; this module only decides what a keystroke or
//! click does. [`step`] consumes the current state and one event and returns
//! the next state plus, when the modal closes, what it produced.

use tracing::debug;
use wconn_protocol::{NetworkIdentifier, Session};

use crate::address::AddressValidator;

/// Message shown under the input when submit is attempted with a bad address.
pub const INVALID_ADDRESS_MESSAGE: &str = "Invalid address";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ModalState {
	#[default]
	Closed,
	Open(ModalForm),
}

/// Contents of an open modal.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalForm {
	/// Networks offered in the selector.
	pub networks: Vec<NetworkIdentifier>,
	/// Index into `networks`.
	pub selected: usize,
	/// Address as typed, untrimmed.
	pub input: String,
	/// Validation message from the last rejected submit.
	pub error: Option<String>,
}

impl ModalForm {
	/// `None` when `selected` is out of range, e.g. a host-built form with no networks.
	pub fn selected_network(&self) -> Option<&NetworkIdentifier> {
		self.networks.get(self.selected)
	}

	/// Whether the submit control should be enabled.
	pub fn can_submit(&self, validator: &dyn AddressValidator) -> bool {
		validator.validate(self.input.trim())
	}
}

#[derive(Debug, Clone, PartialEq)]
pub enum ModalEvent {
	/// Show the modal with the given network choices; the first is preselected.
	Open(Vec<NetworkIdentifier>),
	SelectNetwork(usize),
	Input(String),
	Submit,
	Cancel,
}

/// What a closing modal hands back to the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum ModalOutcome {
	Confirmed(Session),
	Cancelled,
}

/// Applies `event` to `state`.
///
/// Events other than `Open` are ignored while closed, as are out-of-range
/// network selections and `Open` with no networks.
pub fn step(state: ModalState, event: ModalEvent, validator: &dyn AddressValidator) -> (ModalState, Option<ModalOutcome>) {
	match (state, event) {
		(state, ModalEvent::Open(networks)) => {
			if networks.is_empty() {
				debug!(target = "wconn.modal", "ignoring open without networks");
				return (state, None);
			}
			let form = ModalForm {
				networks,
				selected: 0,
				input: String::new(),
				error: None,
			};
			(ModalState::Open(form), None)
		}
		(ModalState::Closed, _) => (ModalState::Closed, None),
		(ModalState::Open(mut form), ModalEvent::SelectNetwork(index)) => {
			if index < form.networks.len() {
				form.selected = index;
			}
			(ModalState::Open(form), None)
		}
		(ModalState::Open(mut form), ModalEvent::Input(input)) => {
			form.input = input;
			form.error = None;
			(ModalState::Open(form), None)
		}
		(ModalState::Open(mut form), ModalEvent::Submit) => {
			let address = form.input.trim();
			if !validator.validate(address) {
				form.error = Some(INVALID_ADDRESS_MESSAGE.to_string());
				return (ModalState::Open(form), None);
			}
			let Some(network) = form.selected_network().cloned() else {
				debug!(target = "wconn.modal", "ignoring submit without a selected network");
				return (ModalState::Open(form), None);
			};
			let session = Session::new(network, address);
			(ModalState::Closed, Some(ModalOutcome::Confirmed(session)))
		}
		(ModalState::Open(_), ModalEvent::Cancel) => (ModalState::Closed, Some(ModalOutcome::Cancelled)),
	}
}
