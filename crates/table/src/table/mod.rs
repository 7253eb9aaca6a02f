use tagdb_concurrent::ConcurrentOrderedMap;
use tagdb_value::{Value, ValueChange, ValueKind};
use tracing::{debug, warn};

use crate::serialize::{Folder, write_xml};
use crate::{
	NameLookup, Result, Subscription, SubscriptionId, Symbol, SymbolId, TableConfig, TableError,
};

mod names;
mod update;


use names::NameIndex;

/// Concurrent table of [`Symbol`]s keyed by id.
///
/// Many threads may call any operation at once. Lookups return copies, so a
/// returned [`Symbol`] stays valid however the table changes afterwards.
///
/// Names are not required to be unique. Every name-addressed operation picks
/// the symbol with the lowest id among those sharing the name, and so does
/// [`SymbolTable::serialize`].
#[derive(Debug, Default)]
pub struct SymbolTable {
	symbols: ConcurrentOrderedMap<SymbolId, Symbol>,
	names: NameIndex,
	config: TableConfig,
}

impl SymbolTable {
	/// Creates an empty table with default options.
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_config(config: TableConfig) -> Self {
		Self {
			config,
			..Self::default()
		}
	}

	pub fn config(&self) -> &TableConfig {
		&self.config
	}

	fn indexed(&self) -> bool {
		self.config.name_lookup == NameLookup::Indexed
	}

	/// Stores a new symbol with no subscriptions.
	///
	/// Fails with [`TableError::AlreadyExists`] if `id` is taken; the stored
	/// symbol is left as it was.
	pub fn insert(
		&self,
		id: SymbolId,
		name: impl Into<String>,
		description: impl Into<String>,
		value: impl Into<Value>,
	) -> Result<()> {
		let symbol = Symbol::new(id, name, description, value);
		let mut symbols = self.symbols.write();
		if symbols.contains_key(&id) {
			warn!(id, name = symbol.name(), "rejected insert of existing symbol id");
			return Err(TableError::AlreadyExists(id));
		}
		if self.indexed() {
			self.names.add(symbol.name(), id);
		}
		debug!(id, name = symbol.name(), kind = %symbol.kind(), "inserted symbol");
		symbols.insert(id, symbol);
		Ok(())
	}

	/// Stores a new symbol whose value is parsed from `text` as `kind`.
	///
	/// Malformed text stores the zero value of `kind`; see [`Value::parse`].
	pub fn insert_parsed(
		&self,
		id: SymbolId,
		name: impl Into<String>,
		description: impl Into<String>,
		kind: ValueKind,
		text: &str,
	) -> Result<()> {
		self.insert(id, name, description, Value::parse(kind, text))
	}

	/// Returns a copy of the symbol with `id`.
	pub fn get(&self, id: SymbolId) -> Result<Symbol> {
		self.symbols.get(&id).ok_or_else(|| TableError::not_found_id(id))
	}

	/// Returns a copy of the symbol named `name`.
	///
	/// The empty name addresses the table root and yields [`Symbol::root`].
	pub fn get_by_name(&self, name: &str) -> Result<Symbol> {
		if name.is_empty() {
			return Ok(Symbol::root());
		}
		let id = self.resolve(name)?;
		self.get(id).map_err(|_| TableError::not_found_name(name))
	}

	/// Resolves an exact name to the lowest id stored under it.
	pub fn resolve_name(&self, name: &str) -> Option<SymbolId> {
		if self.indexed() {
			self.names.first(name)
		} else {
			self.symbols.find_map(|id, symbol| (symbol.name() == name).then_some(*id))
		}
	}

	fn resolve(&self, name: &str) -> Result<SymbolId> {
		self.resolve_name(name)
			.ok_or_else(|| TableError::not_found_name(name))
	}

	pub fn contains(&self, id: SymbolId) -> bool {
		self.symbols.contains_key(&id)
	}

	/// Replaces the value of symbol `id` and notifies matching subscriptions.
	///
	/// Returns how the new value compares to the old one. Callbacks run on
	/// this thread before the call returns, with no container lock held.
	/// Under [`UpdatePolicy::Serialized`](crate::UpdatePolicy::Serialized)
	/// they run while holding the symbol's update gate: a callback may update
	/// the same symbol again from its own thread, but two callbacks on
	/// different threads that each update the other's symbol deadlock.
	pub fn set_value(&self, id: SymbolId, value: impl Into<Value>) -> Result<ValueChange> {
		let value = value.into();
		self.update(id, move |_| value)
	}

	/// [`SymbolTable::set_value`] addressed by name.
	pub fn set_value_by_name(&self, name: &str, value: impl Into<Value>) -> Result<ValueChange> {
		let id = self.resolve(name)?;
		self.set_value(id, value)
	}

	/// Parses `text` as the symbol's current kind and stores the result.
	pub fn set_value_parsed(&self, id: SymbolId, text: &str) -> Result<ValueChange> {
		self.update(id, |current| Value::parse(current.kind(), text))
	}

	/// Registers a subscription on symbol `id`.
	pub fn add_subscription(&self, id: SymbolId, subscription: Subscription) -> Result<()> {
		let subscription_id = subscription.id();
		let added = self
			.symbols
			.with(&id, |symbol| symbol.subscriptions.add(subscription))
			.ok_or_else(|| TableError::not_found_id(id))?;
		if !added {
			warn!(symbol = id, subscription = subscription_id, "rejected duplicate subscription id");
			return Err(TableError::SubscriptionExists {
				symbol: id,
				subscription: subscription_id,
			});
		}
		debug!(symbol = id, subscription = subscription_id, "added subscription");
		Ok(())
	}

	pub fn add_subscription_by_name(&self, name: &str, subscription: Subscription) -> Result<()> {
		let id = self.resolve(name)?;
		self.add_subscription(id, subscription)
	}

	/// Unregisters a subscription from symbol `id`, returning it.
	pub fn remove_subscription(&self, id: SymbolId, subscription: SubscriptionId) -> Result<Subscription> {
		let removed = self
			.symbols
			.with(&id, |symbol| symbol.subscriptions.remove(subscription))
			.ok_or_else(|| TableError::not_found_id(id))?
			.ok_or(TableError::SubscriptionNotFound {
				symbol: id,
				subscription,
			})?;
		debug!(symbol = id, subscription, "removed subscription");
		Ok(removed)
	}

	pub fn remove_subscription_by_name(&self, name: &str, subscription: SubscriptionId) -> Result<Subscription> {
		let id = self.resolve(name)?;
		self.remove_subscription(id, subscription)
	}

	/// Deletes symbol `id` together with its subscriptions.
	pub fn remove(&self, id: SymbolId) -> Result<Symbol> {
		let mut symbols = self.symbols.write();
		let symbol = symbols.remove(&id).ok_or_else(|| TableError::not_found_id(id))?;
		if self.indexed() {
			self.names.remove(symbol.name(), id);
		}
		debug!(id, name = symbol.name(), "removed symbol");
		Ok(symbol)
	}

	pub fn remove_by_name(&self, name: &str) -> Result<Symbol> {
		let id = self.resolve(name)?;
		self.remove(id).map_err(|_| TableError::not_found_name(name))
	}

	/// Deletes every symbol.
	pub fn clear(&self) {
		let mut symbols = self.symbols.write();
		symbols.clear();
		self.names.clear();
		debug!("cleared symbol table");
	}

	pub fn len(&self) -> usize {
		self.symbols.len()
	}

	pub fn is_empty(&self) -> bool {
		self.symbols.is_empty()
	}

	/// Stored ids in ascending order.
	pub fn ids(&self) -> Vec<SymbolId> {
		self.symbols.keys()
	}

	/// Copies of every symbol in id order, taken under one lock.
	pub fn symbols(&self) -> Vec<Symbol> {
		self.symbols.values()
	}

	/// Rebuilds the folder tree implied by the dotted names.
	pub fn tree(&self) -> Folder {
		let symbols = self.symbols.read();
		Folder::from_symbols(symbols.values())
	}

	/// Exports the table as a UTF-8 XML document.
	///
	/// Each dotted name becomes a chain of `<folder name=...>` elements ending
	/// in a `<symbol id=... name=... desc=... type=.../>` leaf, under a
	/// `<symboltable>` root. Siblings follow the lexicographic order of the
	/// full names.
	pub fn serialize(&self) -> Result<Vec<u8>> {
		write_xml(&self.tree(), &self.config.serialize)
	}

	/// [`SymbolTable::serialize`] as a string.
	pub fn serialize_to_string(&self) -> Result<String> {
		String::from_utf8(self.serialize()?).map_err(|e| TableError::Serialize(e.to_string()))
	}
}
