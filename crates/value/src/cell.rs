use std::cmp::Ordering;

use crate::{FromValue, Value, ValueError, ValueKind};

/// Classification of a candidate value against the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ValueChange {
	/// Equal, unordered, or not comparable.
	#[default]
	None,
	/// The candidate orders after the current value.
	Increase,
	/// The candidate orders before the current value.
	Decrease,
}

impl ValueChange {
	/// Maps `candidate.partial_cmp(current)` to a change.
	pub fn from_ordering(ordering: Option<Ordering>) -> Self {
		match ordering {
			Some(Ordering::Greater) => ValueChange::Increase,
			Some(Ordering::Less) => ValueChange::Decrease,
			Some(Ordering::Equal) | None => ValueChange::None,
		}
	}

	/// Returns true for [`ValueChange::Increase`] and [`ValueChange::Decrease`].
	pub fn is_change(self) -> bool {
		self != ValueChange::None
	}
}

/// Classifies replacing `current` with `candidate`.
///
/// Only Boolean, Int32, Float32, Float64 and String payloads are ordered, and
/// only against a candidate of the same kind. Everything else, including NaN
/// and kind changes, is [`ValueChange::None`].
pub fn compare(current: &Value, candidate: &Value) -> ValueChange {
	let ordering = match (current, candidate) {
		(Value::Boolean(cur), Value::Boolean(new)) => new.partial_cmp(cur),
		(Value::Int32(cur), Value::Int32(new)) => new.partial_cmp(cur),
		(Value::Float32(cur), Value::Float32(new)) => new.partial_cmp(cur),
		(Value::Float64(cur), Value::Float64(new)) => new.partial_cmp(cur),
		(Value::String(cur), Value::String(new)) => new.partial_cmp(cur),
		_ => None,
	};
	ValueChange::from_ordering(ordering)
}

/// Holder for one symbol's value.
///
/// The cell does no locking of its own; the owning container serializes
/// access to it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValueCell {
	value: Value,
}

impl ValueCell {
	/// Creates a cell holding `value`.
	pub fn new(value: impl Into<Value>) -> Self {
		Self {
			value: value.into(),
		}
	}

	/// Returns the kind of the held value.
	pub fn kind(&self) -> ValueKind {
		self.value.kind()
	}

	/// Returns the held value.
	pub fn value(&self) -> &Value {
		&self.value
	}

	/// Consumes the cell, returning the held value.
	pub fn into_value(self) -> Value {
		self.value
	}

	/// Replaces the held value, returning the previous one.
	///
	/// The kind tag follows the new payload, so a kind change is allowed.
	pub fn set(&mut self, value: impl Into<Value>) -> Value {
		std::mem::replace(&mut self.value, value.into())
	}

	/// Borrows the held payload as `T`.
	pub fn get<T: FromValue>(&self) -> Result<&T, ValueError> {
		self.value.get()
	}

	/// Classifies replacing the held value with `candidate`.
	pub fn compare(&self, candidate: &Value) -> ValueChange {
		compare(&self.value, candidate)
	}
}

impl From<Value> for ValueCell {
	fn from(value: Value) -> Self {
		Self { value }
	}
}
