use std::collections::BTreeSet;

use tagdb_concurrent::ConcurrentOrderedMap;

use crate::SymbolId;

/// Secondary name index used by [`NameLookup::Indexed`](crate::NameLookup::Indexed).
///
/// Every name maps to the ids stored under it, so duplicates resolve to the
/// lowest id. Writers update the index while holding the symbols write
/// guard, which keeps the two structures in step. Lock order is always
/// symbols before names.
#[derive(Debug, Default)]
pub(super) struct NameIndex {
	ids: ConcurrentOrderedMap<String, BTreeSet<SymbolId>>,
}

impl NameIndex {
	pub(super) fn add(&self, name: &str, id: SymbolId) {
		self.ids.with_or_default(name.to_string(), |ids| {
			ids.insert(id);
		});
	}

	pub(super) fn remove(&self, name: &str, id: SymbolId) {
		let mut map = self.ids.write();
		if let Some(ids) = map.get_mut(name) {
			ids.remove(&id);
			if ids.is_empty() {
				map.remove(name);
			}
		}
	}

	/// Lowest id stored under `name`.
	pub(super) fn first(&self, name: &str) -> Option<SymbolId> {
		self.ids.read().get(name).and_then(|ids| ids.first().copied())
	}

	pub(super) fn clear(&self) {
		self.ids.clear();
	}

	#[cfg(test)]
	pub(super) fn len(&self) -> usize {
		self.ids.len()
	}
}
