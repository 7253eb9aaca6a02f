use std::fmt;
use std::sync::Arc;

use parking_lot::ReentrantMutex;
use tagdb_value::{FromValue, Value, ValueCell, ValueError, ValueKind};

use crate::SubscriptionRegistry;

/// Externally assigned symbol id.
pub type SymbolId = u64;

/// Per-symbol gate held across a serialized update.
pub(crate) type Gate = Arc<ReentrantMutex<()>>;

/// One named, typed entry of a [`SymbolTable`](crate::SymbolTable).
///
/// Values returned by the table are copies. Subscriptions on a copy are a
/// snapshot and registering on it does not reach the table.
#[derive(Clone)]
pub struct Symbol {
	id: SymbolId,
	name: String,
	description: String,
	pub(crate) cell: ValueCell,
	pub(crate) subscriptions: SubscriptionRegistry,
	pub(crate) gate: Gate,
}

impl Symbol {
	pub fn new(id: SymbolId, name: impl Into<String>, description: impl Into<String>, value: impl Into<Value>) -> Self {
		Self {
			id,
			name: name.into(),
			description: description.into(),
			cell: ValueCell::new(value),
			subscriptions: SubscriptionRegistry::new(),
			gate: Arc::new(ReentrantMutex::new(())),
		}
	}

	/// The folder standing for the table root, returned for the empty name.
	pub fn root() -> Self {
		Self::new(0, "", "", Value::Null)
	}

	/// Returns true for the root folder.
	pub fn is_root(&self) -> bool {
		self.name.is_empty()
	}

	pub fn id(&self) -> SymbolId {
		self.id
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn description(&self) -> &str {
		&self.description
	}

	pub fn kind(&self) -> ValueKind {
		self.cell.kind()
	}

	pub fn value(&self) -> &Value {
		self.cell.value()
	}

	/// Reads the value as `T`, failing if the symbol holds another kind.
	pub fn get<T: FromValue>(&self) -> Result<&T, ValueError> {
		self.cell.get()
	}

	pub fn subscriptions(&self) -> &SubscriptionRegistry {
		&self.subscriptions
	}
}

impl fmt::Debug for Symbol {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Symbol")
			.field("id", &self.id)
			.field("name", &self.name)
			.field("description", &self.description)
			.field("value", self.cell.value())
			.field("subscriptions", &self.subscriptions.ids())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn kind_follows_value() {
		let symbol = Symbol::new(3, "a.b", "desc", 2.5f64);
		assert_eq!(symbol.kind(), ValueKind::Float64);
		assert_eq!(symbol.get::<f64>(), Ok(&2.5));
		assert!(symbol.get::<f32>().is_err());
		assert!(!symbol.is_root());
	}

	#[test]
	fn root_is_an_empty_folder() {
		let root = Symbol::root();
		assert!(root.is_root());
		assert_eq!(root.id(), 0);
		assert_eq!(root.kind(), ValueKind::Null);
		assert!(root.subscriptions().is_empty());
	}
}
