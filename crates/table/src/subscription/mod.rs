use std::fmt;
use std::sync::Arc;

use tagdb_concurrent::ConcurrentOrderedMap;
use tagdb_value::ValueChange;

mod notification;

#[cfg(test)]
mod tests;

pub use notification::{ChangeEvent, Notification};

/// Subscription id, unique within one symbol's registry.
pub type SubscriptionId = i32;

/// Callback invoked synchronously on the updating thread.
pub type Callback = Arc<dyn Fn(&Notification<'_>) + Send + Sync>;

/// Who a subscription notifies, which selects the notification variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubscriptionCategory {
	ServerNotify,
	ClientNotify,
	DatabaseSync,
	TransactionSync,
	Coded,
}

/// Which classified changes fire a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FirePolicy {
	/// Never fires.
	#[default]
	None,
	/// Fires on any increase or decrease.
	AnyChange,
	Increase,
	Decrease,
}

impl FirePolicy {
	/// Returns true if a transition classified as `change` fires this policy.
	pub fn fires_on(self, change: ValueChange) -> bool {
		match self {
			FirePolicy::None => false,
			FirePolicy::AnyChange => change.is_change(),
			FirePolicy::Increase => change == ValueChange::Increase,
			FirePolicy::Decrease => change == ValueChange::Decrease,
		}
	}
}

/// A registered change subscription.
#[derive(Clone)]
pub struct Subscription {
	id: SubscriptionId,
	category: SubscriptionCategory,
	policy: FirePolicy,
	callback: Callback,
}

impl Subscription {
	pub fn new(
		id: SubscriptionId,
		category: SubscriptionCategory,
		policy: FirePolicy,
		callback: impl Fn(&Notification<'_>) + Send + Sync + 'static,
	) -> Self {
		Self {
			id,
			category,
			policy,
			callback: Arc::new(callback),
		}
	}

	pub fn id(&self) -> SubscriptionId {
		self.id
	}

	pub fn category(&self) -> SubscriptionCategory {
		self.category
	}

	pub fn policy(&self) -> FirePolicy {
		self.policy
	}

	/// Returns true if this subscription fires for `change`.
	pub fn fires_on(&self, change: ValueChange) -> bool {
		self.policy.fires_on(change)
	}

	/// Wraps `event` in this subscription's notification variant and runs the callback.
	pub fn notify(&self, event: ChangeEvent<'_>) {
		(self.callback)(&Notification::new(self.category, self.id, event));
	}
}

impl fmt::Debug for Subscription {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Subscription")
			.field("id", &self.id)
			.field("category", &self.category)
			.field("policy", &self.policy)
			.finish_non_exhaustive()
	}
}

/// Per-symbol set of subscriptions ordered by id.
#[derive(Debug, Clone, Default)]
pub struct SubscriptionRegistry {
	entries: ConcurrentOrderedMap<SubscriptionId, Subscription>,
}

impl SubscriptionRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers `subscription`.
	///
	/// Returns false without replacing anything if its id is already taken.
	pub fn add(&self, subscription: Subscription) -> bool {
		self.entries.insert(subscription.id, subscription)
	}

	/// Removes the subscription with `id`.
	pub fn remove(&self, id: SubscriptionId) -> Option<Subscription> {
		self.entries.remove(&id)
	}

	pub fn contains(&self, id: SubscriptionId) -> bool {
		self.entries.contains_key(&id)
	}

	pub fn get(&self, id: SubscriptionId) -> Option<Subscription> {
		self.entries.get(&id)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Registered ids in ascending order.
	pub fn ids(&self) -> Vec<SubscriptionId> {
		self.entries.keys()
	}

	/// Subscriptions that fire for `change`, in ascending id order.
	///
	/// The result is a copy, so callbacks can run after the lock is released.
	pub fn matching(&self, change: ValueChange) -> Vec<Subscription> {
		if !change.is_change() {
			return Vec::new();
		}
		let mut fired = Vec::new();
		self.entries.for_each(|_, sub| {
			if sub.fires_on(change) {
				fired.push(sub.clone());
			}
		});
		fired
	}

	pub fn clear(&self) {
		self.entries.clear();
	}
}
