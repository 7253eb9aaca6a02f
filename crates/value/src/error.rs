use thiserror::Error;

use crate::ValueKind;

/// Errors raised when reading a [`Value`](crate::Value) as a concrete type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValueError {
	/// The stored payload is not of the requested kind.
	#[error("type mismatch: expected {expected}, found {found}")]
	TypeMismatch {
		/// Kind of the requested Rust type.
		expected: ValueKind,
		/// Kind actually stored.
		found: ValueKind,
	},
}
