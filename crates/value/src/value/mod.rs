use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use uuid::Uuid;

use crate::{ValueError, ValueKind};

mod parse;

#[cfg(test)]
mod tests;

pub use parse::{TICKS_PER_SECOND, datetime_from_ticks, ticks_from_datetime};

/// A dynamically typed tag value.
///
/// Exactly one payload is held at a time and [`Value::kind`] is derived from
/// the variant.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
	/// No payload.
	#[default]
	Null,
	/// Boolean payload.
	Boolean(bool),
	/// Signed 8-bit payload.
	SignedByte(i8),
	/// Unsigned 8-bit payload.
	Byte(u8),
	/// Signed 16-bit payload.
	Int16(i16),
	/// Unsigned 16-bit payload.
	UInt16(u16),
	/// Signed 32-bit payload.
	Int32(i32),
	/// Unsigned 32-bit payload.
	UInt32(u32),
	/// Signed 64-bit payload.
	Int64(i64),
	/// Unsigned 64-bit payload.
	UInt64(u64),
	/// Single precision payload.
	Float32(f32),
	/// Double precision payload.
	Float64(f64),
	/// UTF-8 string payload.
	String(String),
	/// UTC timestamp payload.
	DateTime(DateTime<Utc>),
	/// GUID payload.
	Guid(Uuid),
	/// UTF-16 code units.
	WideString(Vec<u16>),
}

impl Value {
	/// Returns the kind tag of the stored payload.
	pub fn kind(&self) -> ValueKind {
		match self {
			Value::Null => ValueKind::Null,
			Value::Boolean(_) => ValueKind::Boolean,
			Value::SignedByte(_) => ValueKind::SignedByte,
			Value::Byte(_) => ValueKind::Byte,
			Value::Int16(_) => ValueKind::Int16,
			Value::UInt16(_) => ValueKind::UInt16,
			Value::Int32(_) => ValueKind::Int32,
			Value::UInt32(_) => ValueKind::UInt32,
			Value::Int64(_) => ValueKind::Int64,
			Value::UInt64(_) => ValueKind::UInt64,
			Value::Float32(_) => ValueKind::Float32,
			Value::Float64(_) => ValueKind::Float64,
			Value::String(_) => ValueKind::String,
			Value::DateTime(_) => ValueKind::DateTime,
			Value::Guid(_) => ValueKind::Guid,
			Value::WideString(_) => ValueKind::WideString,
		}
	}

	/// Returns the zero value of `kind`.
	///
	/// Timestamps start at tick zero (1601-01-01T00:00:00Z) and GUIDs are nil.
	pub fn zero(kind: ValueKind) -> Self {
		match kind {
			ValueKind::Null => Value::Null,
			ValueKind::Boolean => Value::Boolean(false),
			ValueKind::SignedByte => Value::SignedByte(0),
			ValueKind::Byte => Value::Byte(0),
			ValueKind::Int16 => Value::Int16(0),
			ValueKind::UInt16 => Value::UInt16(0),
			ValueKind::Int32 => Value::Int32(0),
			ValueKind::UInt32 => Value::UInt32(0),
			ValueKind::Int64 => Value::Int64(0),
			ValueKind::UInt64 => Value::UInt64(0),
			ValueKind::Float32 => Value::Float32(0.0),
			ValueKind::Float64 => Value::Float64(0.0),
			ValueKind::String => Value::String(String::new()),
			ValueKind::DateTime => Value::DateTime(datetime_from_ticks(0)),
			ValueKind::Guid => Value::Guid(Uuid::nil()),
			ValueKind::WideString => Value::WideString(Vec::new()),
		}
	}

	/// Builds a [`Value::WideString`] from UTF-8 text.
	pub fn wide(text: &str) -> Self {
		Value::WideString(text.encode_utf16().collect())
	}

	/// Returns true for [`Value::Null`].
	pub fn is_null(&self) -> bool {
		matches!(self, Value::Null)
	}

	/// Reads the payload as `T`.
	///
	/// Fails with [`ValueError::TypeMismatch`] when the stored kind is not the
	/// kind of `T`; payloads are never reinterpreted.
	pub fn get<T: FromValue>(&self) -> Result<&T, ValueError> {
		T::from_value(self).ok_or(ValueError::TypeMismatch {
			expected: T::KIND,
			found: self.kind(),
		})
	}

	/// Reads the payload as `T`, returning `None` on a kind mismatch.
	pub fn try_get<T: FromValue>(&self) -> Option<&T> {
		T::from_value(self)
	}
}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Value::Null => f.write_str("null"),
			Value::Boolean(v) => write!(f, "{v}"),
			Value::SignedByte(v) => write!(f, "{v}"),
			Value::Byte(v) => write!(f, "{v}"),
			Value::Int16(v) => write!(f, "{v}"),
			Value::UInt16(v) => write!(f, "{v}"),
			Value::Int32(v) => write!(f, "{v}"),
			Value::UInt32(v) => write!(f, "{v}"),
			Value::Int64(v) => write!(f, "{v}"),
			Value::UInt64(v) => write!(f, "{v}"),
			Value::Float32(v) => write!(f, "{v}"),
			Value::Float64(v) => write!(f, "{v}"),
			Value::String(v) => f.write_str(v),
			Value::DateTime(v) => f.write_str(&v.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
			Value::Guid(v) => write!(f, "{}", v.braced()),
			Value::WideString(units) => f.write_str(&String::from_utf16_lossy(units)),
		}
	}
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Value::String(v.to_string())
	}
}

// Seal FromValue so the kind table below stays the only mapping.
mod sealed {
	pub trait Sealed {}
}

/// Rust types that can be borrowed out of a [`Value`].
pub trait FromValue: sealed::Sealed + Sized {
	/// Kind whose payload has this Rust type.
	const KIND: ValueKind;

	/// Borrows the payload if `value` holds [`Self::KIND`].
	fn from_value(value: &Value) -> Option<&Self>;
}

macro_rules! payload_types {
	($($ty:ty => $variant:ident),* $(,)?) => {
		$(
			impl sealed::Sealed for $ty {}

			impl FromValue for $ty {
				const KIND: ValueKind = ValueKind::$variant;

				fn from_value(value: &Value) -> Option<&Self> {
					match value {
						Value::$variant(v) => Some(v),
						_ => None,
					}
				}
			}

			impl From<$ty> for Value {
				fn from(v: $ty) -> Self {
					Value::$variant(v)
				}
			}
		)*
	};
}

payload_types! {
	bool => Boolean,
	i8 => SignedByte,
	u8 => Byte,
	i16 => Int16,
	u16 => UInt16,
	i32 => Int32,
	u32 => UInt32,
	i64 => Int64,
	u64 => UInt64,
	f32 => Float32,
	f64 => Float64,
	String => String,
	DateTime<Utc> => DateTime,
	Uuid => Guid,
	Vec<u16> => WideString,
}
