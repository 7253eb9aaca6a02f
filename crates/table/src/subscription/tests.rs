use std::sync::Arc;

use parking_lot::Mutex;
use tagdb_value::{Value, ValueChange, ValueKind};

use super::*;

fn noop(id: SubscriptionId, policy: FirePolicy) -> Subscription {
	Subscription::new(id, SubscriptionCategory::ServerNotify, policy, |_| {})
}

#[test]
fn fire_policy_table() {
	use ValueChange as C;

	for (policy, none, inc, dec) in [
		(FirePolicy::None, false, false, false),
		(FirePolicy::AnyChange, false, true, true),
		(FirePolicy::Increase, false, true, false),
		(FirePolicy::Decrease, false, false, true),
	] {
		assert_eq!(policy.fires_on(C::None), none, "{policy:?} on None");
		assert_eq!(policy.fires_on(C::Increase), inc, "{policy:?} on Increase");
		assert_eq!(policy.fires_on(C::Decrease), dec, "{policy:?} on Decrease");
	}
}

#[test]
fn duplicate_ids_are_rejected() {
	let registry = SubscriptionRegistry::new();
	assert!(registry.add(noop(3, FirePolicy::Increase)));
	assert!(!registry.add(noop(3, FirePolicy::Decrease)));
	assert_eq!(registry.len(), 1);
	assert_eq!(registry.get(3).map(|s| s.policy()), Some(FirePolicy::Increase));
}

#[test]
fn matching_is_ordered_by_id() {
	let registry = SubscriptionRegistry::new();
	registry.add(noop(15, FirePolicy::AnyChange));
	registry.add(noop(2, FirePolicy::Increase));
	registry.add(noop(5, FirePolicy::Decrease));
	registry.add(noop(9, FirePolicy::None));

	let ids = |change| registry.matching(change).iter().map(Subscription::id).collect::<Vec<_>>();
	assert_eq!(ids(ValueChange::Increase), vec![2, 15]);
	assert_eq!(ids(ValueChange::Decrease), vec![5, 15]);
	assert!(ids(ValueChange::None).is_empty());
	assert_eq!(registry.ids(), vec![2, 5, 9, 15]);
}

#[test]
fn remove_and_clear() {
	let registry = SubscriptionRegistry::new();
	registry.add(noop(1, FirePolicy::AnyChange));
	registry.add(noop(2, FirePolicy::AnyChange));
	assert_eq!(registry.remove(1).map(|s| s.id()), Some(1));
	assert!(registry.remove(1).is_none());
	assert!(registry.contains(2));
	registry.clear();
	assert!(registry.is_empty());
}

#[test]
fn notify_builds_category_variant() {
	let seen: Arc<Mutex<Vec<(SubscriptionCategory, Option<SubscriptionId>, String)>>> = Arc::default();
	let old = Value::from(1i32);
	let new = Value::from(2i32);
	let event = ChangeEvent {
		symbol_id: 4,
		symbol_name: "plant.pump.rpm",
		kind: ValueKind::Int32,
		old: &old,
		new: &new,
		change: ValueChange::Increase,
	};

	for (id, category) in [
		(1, SubscriptionCategory::ServerNotify),
		(2, SubscriptionCategory::ClientNotify),
		(15, SubscriptionCategory::DatabaseSync),
		(5, SubscriptionCategory::TransactionSync),
		(7, SubscriptionCategory::Coded),
	] {
		let seen = Arc::clone(&seen);
		let sub = Subscription::new(id, category, FirePolicy::AnyChange, move |n| {
			let entry = (n.category(), n.transaction_id(), n.event().symbol_name.to_string());
			seen.lock().push(entry);
		});
		sub.notify(event);
	}

	let seen = seen.lock();
	assert_eq!(seen.len(), 5);
	assert_eq!(seen[0], (SubscriptionCategory::ServerNotify, None, "plant.pump.rpm".to_string()));
	assert_eq!(seen[1].1, None);
	assert_eq!(seen[2].1, Some(15));
	assert_eq!(seen[3].1, Some(5));
	assert_eq!(seen[4].0, SubscriptionCategory::Coded);
}

#[test]
fn notification_exposes_values() {
	let old = Value::from("a");
	let new = Value::from("b");
	let event = ChangeEvent {
		symbol_id: 1,
		symbol_name: "s",
		kind: ValueKind::String,
		old: &old,
		new: &new,
		change: ValueChange::Increase,
	};
	let n = Notification::new(SubscriptionCategory::TransactionSync, 42, event);
	assert_eq!(n.event().old, &Value::from("a"));
	assert_eq!(n.event().new, &Value::from("b"));
	assert_eq!(n.transaction_id(), Some(42));
	assert!(matches!(n, Notification::TransactionSync { transaction_id: 42, .. }));
}
