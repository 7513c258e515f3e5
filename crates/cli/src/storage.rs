//! File-backed [`KeyValueStorage`]: one JSON file per key.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use wconn::{ConnectorError, KeyValueStorage};

#[derive(Debug, Clone)]
pub struct FileStorage {
	dir: PathBuf,
}

impl FileStorage {
	pub fn new(dir: impl Into<PathBuf>) -> Self {
		Self { dir: dir.into() }
	}

	/// File backing `key`. Characters outside `[A-Za-z0-9_-]` become `_`.
	pub fn path_for(&self, key: &str) -> PathBuf {
		let name: String = key
			.chars()
			.map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '-' { c } else { '_' })
			.collect();
		self.dir.join(format!("{name}.json"))
	}
}

impl KeyValueStorage for FileStorage {
	fn get(&self, key: &str) -> wconn::Result<Option<String>> {
		match fs::read_to_string(self.path_for(key)) {
			Ok(content) => Ok(Some(content)),
			Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
			Err(err) => Err(ConnectorError::storage(err)),
		}
	}

	fn set(&self, key: &str, value: &str) -> wconn::Result<()> {
		fs::create_dir_all(&self.dir).map_err(ConnectorError::storage)?;
		fs::write(self.path_for(key), value).map_err(ConnectorError::storage)
	}

	fn remove(&self, key: &str) -> wconn::Result<()> {
		match fs::remove_file(self.path_for(key)) {
			Ok(()) => Ok(()),
			Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
			Err(err) => Err(ConnectorError::storage(err)),
		}
	}
}
