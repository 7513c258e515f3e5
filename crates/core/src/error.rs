use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConnectorError>;

#[derive(Debug, Error)]
pub enum ConnectorError {
	/// Address rejected by the chain's validation predicate. Nothing was written.
	#[error("invalid address: {address}")]
	InvalidAddress { address: String },

	/// The storage backend failed to read, write, or remove an entry.
	#[error("storage backend failed: {0}")]
	Storage(String),

	#[error(transparent)]
	Json(#[from] serde_json::Error),
}

impl ConnectorError {
	pub fn storage(err: impl std::fmt::Display) -> Self {
		Self::Storage(err.to_string())
	}

	pub fn is_invalid_address(&self) -> bool {
		matches!(self, Self::InvalidAddress { .. })
	}
}
