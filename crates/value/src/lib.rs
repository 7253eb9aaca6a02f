//! Typed values held by tag symbols.
//!
//! A [`Value`] is a closed sum over the primitive kinds a tag may carry. Its
//! [`ValueKind`] is derived from the variant, so the payload and the kind tag
//! can never disagree. [`ValueCell`] wraps a value with the replace and
//! compare operations used by the symbol table when a tag is updated.

/// Value holder with change classification.
pub mod cell;
/// Error types for typed extraction.
pub mod error;
/// Closed set of value kinds.
pub mod kind;
/// The tagged value type and lenient text parsing.
pub mod value;

pub use cell::{ValueCell, ValueChange, compare};
pub use error::ValueError;
pub use kind::ValueKind;
pub use value::{FromValue, TICKS_PER_SECOND, Value, datetime_from_ticks, ticks_from_datetime};
