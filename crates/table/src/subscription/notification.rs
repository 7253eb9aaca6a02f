use tagdb_value::{Value, ValueChange, ValueKind};

use super::{SubscriptionCategory, SubscriptionId};
use crate::SymbolId;

/// The transition a notification describes.
///
/// Borrowed values are only valid for the duration of the callback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChangeEvent<'a> {
	pub symbol_id: SymbolId,
	pub symbol_name: &'a str,
	/// Kind of the value after the update.
	pub kind: ValueKind,
	pub old: &'a Value,
	pub new: &'a Value,
	pub change: ValueChange,
}

/// Payload handed to a subscription callback, one variant per category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Notification<'a> {
	ServerNotify(ChangeEvent<'a>),
	ClientNotify(ChangeEvent<'a>),
	DatabaseSync {
		event: ChangeEvent<'a>,
		transaction_id: SubscriptionId,
	},
	TransactionSync {
		event: ChangeEvent<'a>,
		transaction_id: SubscriptionId,
	},
	Coded(ChangeEvent<'a>),
}

impl<'a> Notification<'a> {
	/// Builds the payload for a subscriber of `category`.
	///
	/// Sync categories carry the subscriber's own id as the transaction id.
	pub fn new(category: SubscriptionCategory, subscription: SubscriptionId, event: ChangeEvent<'a>) -> Self {
		match category {
			SubscriptionCategory::ServerNotify => Notification::ServerNotify(event),
			SubscriptionCategory::ClientNotify => Notification::ClientNotify(event),
			SubscriptionCategory::DatabaseSync => Notification::DatabaseSync {
				event,
				transaction_id: subscription,
			},
			SubscriptionCategory::TransactionSync => Notification::TransactionSync {
				event,
				transaction_id: subscription,
			},
			SubscriptionCategory::Coded => Notification::Coded(event),
		}
	}

	/// Returns the common change data.
	pub fn event(&self) -> &ChangeEvent<'a> {
		match self {
			Notification::ServerNotify(event)
			| Notification::ClientNotify(event)
			| Notification::Coded(event)
			| Notification::DatabaseSync { event, .. }
			| Notification::TransactionSync { event, .. } => event,
		}
	}

	pub fn category(&self) -> SubscriptionCategory {
		match self {
			Notification::ServerNotify(_) => SubscriptionCategory::ServerNotify,
			Notification::ClientNotify(_) => SubscriptionCategory::ClientNotify,
			Notification::DatabaseSync { .. } => SubscriptionCategory::DatabaseSync,
			Notification::TransactionSync { .. } => SubscriptionCategory::TransactionSync,
			Notification::Coded(_) => SubscriptionCategory::Coded,
		}
	}

	/// Transaction id for the sync categories.
	pub fn transaction_id(&self) -> Option<SubscriptionId> {
		match self {
			Notification::DatabaseSync { transaction_id, .. } | Notification::TransactionSync { transaction_id, .. } => {
				Some(*transaction_id)
			}
			_ => None,
		}
	}
}
