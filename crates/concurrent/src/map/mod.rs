use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt;
use std::ops::RangeBounds;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};


/// Ordered map behind a single reader/writer lock.
///
/// Reads take the shared lock and writes take the exclusive lock, each for the
/// duration of one call. Nothing borrowed from the map escapes a call: lookups
/// clone out, and closure-based accessors ([`Self::with`], [`Self::with_mut`])
/// run while the lock is held.
///
/// The lock is not reentrant. Calling back into the same map from inside a
/// closure passed to [`Self::with_mut`], [`Self::retain`] or the other
/// closure-taking methods deadlocks.
pub struct ConcurrentOrderedMap<K, V> {
	inner: RwLock<BTreeMap<K, V>>,
}

impl<K: Ord, V> ConcurrentOrderedMap<K, V> {
	/// Creates an empty map.
	pub fn new() -> Self {
		Self {
			inner: RwLock::new(BTreeMap::new()),
		}
	}

	/// Inserts `value` under `key` unless the key is already present.
	///
	/// Returns false, leaving the existing entry untouched, on collision.
	pub fn insert(&self, key: K, value: V) -> bool {
		match self.inner.write().entry(key) {
			Entry::Vacant(slot) => {
				slot.insert(value);
				true
			}
			Entry::Occupied(_) => false,
		}
	}

	/// Inserts a value built by `make` unless the key is already present.
	///
	/// `make` only runs when the slot is vacant.
	pub fn emplace(&self, key: K, make: impl FnOnce() -> V) -> bool {
		match self.inner.write().entry(key) {
			Entry::Vacant(slot) => {
				slot.insert(make());
				true
			}
			Entry::Occupied(_) => false,
		}
	}

	/// Inserts or overwrites, returning the previous value.
	pub fn upsert(&self, key: K, value: V) -> Option<V> {
		self.inner.write().insert(key, value)
	}

	/// Runs `f` against the entry for `key` under the shared lock.
	pub fn with<R>(&self, key: &K, f: impl FnOnce(&V) -> R) -> Option<R> {
		self.inner.read().get(key).map(f)
	}

	/// Runs `f` against the entry for `key` under the exclusive lock.
	pub fn with_mut<R>(&self, key: &K, f: impl FnOnce(&mut V) -> R) -> Option<R> {
		self.inner.write().get_mut(key).map(f)
	}

	/// Returns true if `key` is present.
	pub fn contains_key(&self, key: &K) -> bool {
		self.inner.read().contains_key(key)
	}

	/// Returns 1 if `key` is present, 0 otherwise.
	pub fn count(&self, key: &K) -> usize {
		usize::from(self.contains_key(key))
	}

	/// Returns the number of entries.
	pub fn len(&self) -> usize {
		self.inner.read().len()
	}

	/// Returns true if the map holds no entries.
	pub fn is_empty(&self) -> bool {
		self.inner.read().is_empty()
	}

	/// Returns the first entry in key order for which `f` yields `Some`.
	///
	/// The whole scan runs under one shared lock.
	pub fn find_map<R>(&self, mut f: impl FnMut(&K, &V) -> Option<R>) -> Option<R> {
		self.inner.read().iter().find_map(|(k, v)| f(k, v))
	}

	/// Visits every entry in key order under the shared lock.
	pub fn for_each(&self, mut f: impl FnMut(&K, &V)) {
		for (k, v) in self.inner.read().iter() {
			f(k, v);
		}
	}

	/// Removes `key`, returning its value.
	pub fn remove(&self, key: &K) -> Option<V> {
		self.inner.write().remove(key)
	}

	/// Keeps only the entries for which `keep` returns true.
	pub fn retain(&self, mut keep: impl FnMut(&K, &mut V) -> bool) {
		self.inner.write().retain(|k, v| keep(k, v));
	}

	/// Removes every entry.
	pub fn clear(&self) {
		self.inner.write().clear();
	}

	/// Replaces the whole contents, returning the previous map.
	pub fn assign(&self, entries: impl IntoIterator<Item = (K, V)>) -> BTreeMap<K, V> {
		let next: BTreeMap<K, V> = entries.into_iter().collect();
		std::mem::replace(&mut *self.inner.write(), next)
	}

	/// Runs `f` against the entry for `key`, inserting `make()` first if absent.
	///
	/// Always takes the exclusive lock, since the lookup may insert.
	pub fn get_or_insert_with<R>(&self, key: K, make: impl FnOnce() -> V, f: impl FnOnce(&mut V) -> R) -> R {
		f(self.inner.write().entry(key).or_insert_with(make))
	}

	/// Acquires the shared lock for a compound read.
	pub fn read(&self) -> RwLockReadGuard<'_, BTreeMap<K, V>> {
		self.inner.read()
	}

	/// Acquires the exclusive lock for a compound update.
	pub fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<K, V>> {
		self.inner.write()
	}

	/// Consumes the map, returning the inner [`BTreeMap`].
	pub fn into_inner(self) -> BTreeMap<K, V> {
		self.inner.into_inner()
	}
}

impl<K: Ord, V: Default> ConcurrentOrderedMap<K, V> {
	/// Indexed access that default-constructs missing entries.
	pub fn with_or_default<R>(&self, key: K, f: impl FnOnce(&mut V) -> R) -> R {
		self.get_or_insert_with(key, V::default, f)
	}
}

impl<K: Ord, V: Clone> ConcurrentOrderedMap<K, V> {
	/// Returns a copy of the value for `key`.
	pub fn get(&self, key: &K) -> Option<V> {
		self.inner.read().get(key).cloned()
	}

	/// Returns a copy of every value in key order.
	pub fn values(&self) -> Vec<V> {
		self.inner.read().values().cloned().collect()
	}
}

impl<K: Ord + Clone, V> ConcurrentOrderedMap<K, V> {
	/// Returns the keys in order.
	pub fn keys(&self) -> Vec<K> {
		self.inner.read().keys().cloned().collect()
	}

	/// Removes every entry whose key falls in `range`, returning them in key order.
	pub fn remove_range<R: RangeBounds<K>>(&self, range: R) -> Vec<(K, V)> {
		let mut map = self.inner.write();
		let doomed: Vec<K> = map.range(range).map(|(k, _)| k.clone()).collect();
		doomed
			.into_iter()
			.filter_map(|k| map.remove_entry(&k))
			.collect()
	}
}

impl<K: Ord + Clone, V: Clone> ConcurrentOrderedMap<K, V> {
	/// Returns a copy of the first entry in key order.
	pub fn first_key_value(&self) -> Option<(K, V)> {
		self.inner
			.read()
			.first_key_value()
			.map(|(k, v)| (k.clone(), v.clone()))
	}

	/// Returns a copy of the whole map taken under one shared lock.
	pub fn snapshot(&self) -> BTreeMap<K, V> {
		self.inner.read().clone()
	}
}

impl<K: Ord, V> Default for ConcurrentOrderedMap<K, V> {
	fn default() -> Self {
		Self::new()
	}
}

impl<K: Ord + Clone, V: Clone> Clone for ConcurrentOrderedMap<K, V> {
	fn clone(&self) -> Self {
		Self::from(self.snapshot())
	}
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for ConcurrentOrderedMap<K, V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_map().entries(self.inner.read().iter()).finish()
	}
}

impl<K: Ord, V> From<BTreeMap<K, V>> for ConcurrentOrderedMap<K, V> {
	fn from(map: BTreeMap<K, V>) -> Self {
		Self {
			inner: RwLock::new(map),
		}
	}
}

impl<K: Ord, V> FromIterator<(K, V)> for ConcurrentOrderedMap<K, V> {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self::from(iter.into_iter().collect::<BTreeMap<K, V>>())
	}
}
