use std::fmt;

use thiserror::Error;

use crate::{SubscriptionId, SymbolId};

/// How a caller addressed a symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbolKey {
	/// Numeric id.
	Id(SymbolId),
	/// Dotted name.
	Name(String),
}

impl fmt::Display for SymbolKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			SymbolKey::Id(id) => write!(f, "id {id}"),
			SymbolKey::Name(name) => write!(f, "name '{name}'"),
		}
	}
}

/// Errors returned by [`SymbolTable`](crate::SymbolTable) operations.
///
/// Every failure is local to the call; the table is left unchanged.
#[derive(Debug, Error)]
pub enum TableError {
	/// No symbol matches the id or name.
	#[error("symbol not found: {0}")]
	NotFound(SymbolKey),

	/// A symbol with this id is already stored.
	#[error("symbol id {0} already exists")]
	AlreadyExists(SymbolId),

	/// The symbol already has a subscription with this id.
	#[error("subscription {subscription} already registered on symbol {symbol}")]
	SubscriptionExists {
		/// Symbol the registration targeted.
		symbol: SymbolId,
		/// Colliding subscription id.
		subscription: SubscriptionId,
	},

	/// The symbol has no subscription with this id.
	#[error("subscription {subscription} not registered on symbol {symbol}")]
	SubscriptionNotFound {
		/// Symbol the removal targeted.
		symbol: SymbolId,
		/// Missing subscription id.
		subscription: SubscriptionId,
	},

	/// Writing the XML document failed.
	#[error("serialization failed: {0}")]
	Serialize(String),
}

impl TableError {
	pub(crate) fn not_found_id(id: SymbolId) -> Self {
		TableError::NotFound(SymbolKey::Id(id))
	}

	pub(crate) fn not_found_name(name: &str) -> Self {
		TableError::NotFound(SymbolKey::Name(name.to_string()))
	}
}

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, TableError>;
