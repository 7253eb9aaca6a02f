//! Table options.
//!
//! ```toml
//! update_policy = "serialized"
//! name_lookup = "indexed"
//!
//! [serialize]
//! indent = 4
//! declaration = false
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// How [`SymbolTable::set_value`](crate::SymbolTable::set_value) orders its
/// read, compare, write and notify steps against concurrent updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdatePolicy {
	/// The whole sequence runs under a per-symbol gate, so updates to one
	/// symbol form a single chain of notified transitions.
	#[default]
	Serialized,
	/// Each step takes the container lock for its own duration only.
	/// Concurrent updates to one symbol may classify against stale values.
	Relaxed,
}

/// How names are resolved to ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameLookup {
	/// Linear scan over every symbol.
	#[default]
	Scan,
	/// Secondary name index maintained alongside the symbols.
	Indexed,
}

/// XML export options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SerializeConfig {
	/// Spaces per nesting level; 0 writes the document on one line.
	pub indent: usize,
	/// Emit the `<?xml ...?>` declaration.
	pub declaration: bool,
}

impl Default for SerializeConfig {
	fn default() -> Self {
		Self {
			indent: 2,
			declaration: true,
		}
	}
}

/// Options for a [`SymbolTable`](crate::SymbolTable).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableConfig {
	pub update_policy: UpdatePolicy,
	pub name_lookup: NameLookup,
	pub serialize: SerializeConfig,
}

impl TableConfig {
	/// Parses options from TOML text. Missing keys take their defaults.
	pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(text)?)
	}

	/// Reads and parses a TOML options file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let path = path.as_ref();
		let text = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		Self::from_toml_str(&text)
	}
}

/// Errors raised while loading a [`TableConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// Error parsing TOML.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),
}
