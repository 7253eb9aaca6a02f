//! The read, compare, write, notify sequence behind `set_value`.

use std::sync::Arc;

use tagdb_value::{Value, ValueChange, compare};
use tracing::trace;

use super::SymbolTable;
use crate::{ChangeEvent, Result, Subscription, Symbol, SymbolId, TableError, UpdatePolicy};

/// State captured by the write step, dispatched after the lock is released.
struct Applied {
	name: String,
	old: Value,
	new: Value,
	change: ValueChange,
	fired: Vec<Subscription>,
}

impl SymbolTable {
	pub(super) fn update(&self, id: SymbolId, next: impl FnOnce(&Value) -> Value) -> Result<ValueChange> {
		match self.config.update_policy {
			UpdatePolicy::Serialized => self.update_serialized(id, next),
			UpdatePolicy::Relaxed => self.update_relaxed(id, next),
		}
	}

	/// Runs the whole sequence under the symbol's gate.
	///
	/// The container lock is taken once for read, compare, write and
	/// subscription lookup, then released before callbacks run. The gate is
	/// held until the last callback returns, so another thread updating the
	/// same symbol waits for this chain of notifications to finish.
	fn update_serialized(&self, id: SymbolId, next: impl FnOnce(&Value) -> Value) -> Result<ValueChange> {
		let mut next = Some(next);
		loop {
			let gate = self
				.symbols
				.with(&id, |symbol| Arc::clone(&symbol.gate))
				.ok_or_else(|| TableError::not_found_id(id))?;
			let _held = gate.lock();

			let applied = self
				.symbols
				.with_mut(&id, |symbol| {
					// Deleted and re-inserted while we waited on the old gate.
					if !Arc::ptr_eq(&symbol.gate, &gate) {
						return None;
					}
					next.take().map(|next| apply(symbol, next))
				})
				.ok_or_else(|| TableError::not_found_id(id))?;

			if let Some(applied) = applied {
				dispatch(id, &applied);
				return Ok(applied.change);
			}
			trace!(id, "symbol replaced during update, retrying");
		}
	}

	/// Runs each step under its own container lock.
	///
	/// Concurrent updates of one symbol may classify against a value another
	/// thread has already replaced, so notifications can describe transitions
	/// that never became the stored state.
	fn update_relaxed(&self, id: SymbolId, next: impl FnOnce(&Value) -> Value) -> Result<ValueChange> {
		let (name, old) = self
			.symbols
			.with(&id, |symbol| (symbol.name().to_string(), symbol.value().clone()))
			.ok_or_else(|| TableError::not_found_id(id))?;

		let new = next(&old);
		let change = compare(&old, &new);
		trace!(id, change = ?change, "classified value update");

		self.symbols
			.with_mut(&id, |symbol| {
				symbol.cell.set(new.clone());
			})
			.ok_or_else(|| TableError::not_found_id(id))?;

		let fired = self
			.symbols
			.with(&id, |symbol| symbol.subscriptions.matching(change))
			.unwrap_or_default();

		dispatch(
			id,
			&Applied {
				name,
				old,
				new,
				change,
				fired,
			},
		);
		Ok(change)
	}
}

fn apply(symbol: &mut Symbol, next: impl FnOnce(&Value) -> Value) -> Applied {
	let new = next(symbol.value());
	let change = symbol.cell.compare(&new);
	trace!(id = symbol.id(), change = ?change, "classified value update");
	let old = symbol.cell.set(new.clone());
	Applied {
		name: symbol.name().to_string(),
		old,
		new,
		change,
		fired: symbol.subscriptions.matching(change),
	}
}

fn dispatch(id: SymbolId, applied: &Applied) {
	let event = ChangeEvent {
		symbol_id: id,
		symbol_name: &applied.name,
		kind: applied.new.kind(),
		old: &applied.old,
		new: &applied.new,
		change: applied.change,
	};
	for subscription in &applied.fired {
		trace!(
			symbol = id,
			subscription = subscription.id(),
			category = ?subscription.category(),
			"dispatching change notification"
		);
		subscription.notify(event);
	}
}

