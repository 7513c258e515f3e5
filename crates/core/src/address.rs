//! Account address validation.

use std::str::FromStr;

use alloy_primitives::Address;

/// Chain-specific account address predicate. Must be pure.
pub trait AddressValidator {
	fn validate(&self, address: &str) -> bool;
}

impl<F> AddressValidator for F
where
	F: Fn(&str) -> bool,
{
	fn validate(&self, address: &str) -> bool {
		self(address)
	}
}

/// Validates `0x`-prefixed 20-byte hex account addresses.
///
/// All-lowercase and all-uppercase input is accepted as-is. Mixed-case input
/// must carry a valid EIP-55 checksum, since a mixed-case address with a bad
/// checksum is almost always a typo.
#[derive(Debug, Clone, Copy, Default)]
pub struct HexAddressValidator {
	/// Chain id for EIP-1191 checksums. `None` uses plain EIP-55.
	pub chain_id: Option<u64>,
}

impl HexAddressValidator {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_chain_id(chain_id: u64) -> Self {
		Self { chain_id: Some(chain_id) }
	}
}

impl AddressValidator for HexAddressValidator {
	fn validate(&self, address: &str) -> bool {
		let Some(digits) = address.strip_prefix("0x") else {
			return false;
		};
		if digits.len() != 40 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
			return false;
		}

		let has_lower = digits.bytes().any(|b| b.is_ascii_lowercase());
		let has_upper = digits.bytes().any(|b| b.is_ascii_uppercase());
		if has_lower && has_upper {
			Address::parse_checksummed(address, self.chain_id).is_ok()
		} else {
			Address::from_str(address).is_ok()
		}
	}
}
