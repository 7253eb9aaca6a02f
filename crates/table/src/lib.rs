//! Concurrent in-memory tag database.
//!
//! A [`SymbolTable`] holds typed [`Symbol`]s addressed by numeric id or by a
//! dotted hierarchical name such as `plant.line1.sensor3.temperature`. Each
//! symbol carries its own [`SubscriptionRegistry`]; updating a value through
//! [`SymbolTable::set_value`] classifies the transition and synchronously
//! notifies the subscriptions whose [`FirePolicy`] matches it.
//!
//! The table can be exported as an XML document whose folder structure
//! mirrors the dotted names (see [`SymbolTable::serialize`]).
//!
//! ```
//! use tagdb_table::{FirePolicy, Subscription, SubscriptionCategory, SymbolTable, ValueChange};
//!
//! let table = SymbolTable::new();
//! table.insert(1, "line1.speed", "conveyor speed", 10i32).unwrap();
//! table
//! 	.add_subscription(1, Subscription::new(7, SubscriptionCategory::ServerNotify, FirePolicy::Increase, |n| {
//! 		assert_eq!(n.event().symbol_name, "line1.speed");
//! 	}))
//! 	.unwrap();
//!
//! assert_eq!(table.set_value(1, 12i32).unwrap(), ValueChange::Increase);
//! ```

/// Runtime options loaded from TOML.
pub mod config;
/// Error types for table operations.
pub mod error;
/// Tree reconstruction and XML export.
pub mod serialize;
/// Change subscriptions and notification payloads.
pub mod subscription;
/// One table entry.
pub mod symbol;
/// The symbol table and its update protocol.
pub mod table;

pub use config::{ConfigError, NameLookup, SerializeConfig, TableConfig, UpdatePolicy};
pub use error::{Result, SymbolKey, TableError};
pub use serialize::{Folder, Leaf, Node};
pub use subscription::{
	Callback, ChangeEvent, FirePolicy, Notification, Subscription, SubscriptionCategory, SubscriptionId,
	SubscriptionRegistry,
};
pub use symbol::{Symbol, SymbolId};
pub use table::SymbolTable;
pub use tagdb_value::{Value, ValueChange, ValueKind};
