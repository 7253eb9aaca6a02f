use std::fmt;

/// Kind tag of a [`Value`](crate::Value).
///
/// The discriminant is the ordinal written to serialized output, so variants
/// must not be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(u8)]
pub enum ValueKind {
	/// No value.
	#[default]
	Null = 0,
	/// `bool`.
	Boolean = 1,
	/// `i8`.
	SignedByte = 2,
	/// `u8`.
	Byte = 3,
	/// `i16`.
	Int16 = 4,
	/// `u16`.
	UInt16 = 5,
	/// `i32`.
	Int32 = 6,
	/// `u32`.
	UInt32 = 7,
	/// `i64`.
	Int64 = 8,
	/// `u64`.
	UInt64 = 9,
	/// `f32`.
	Float32 = 10,
	/// `f64`.
	Float64 = 11,
	/// UTF-8 string.
	String = 12,
	/// UTC timestamp.
	DateTime = 13,
	/// 128-bit GUID.
	Guid = 14,
	/// UTF-16 string.
	WideString = 15,
}

impl ValueKind {
	/// Alias kept for tag definitions that speak of a generic "number".
	pub const NUMBER: ValueKind = ValueKind::Float32;
	/// Alias kept for tag definitions that speak of a generic "integer".
	pub const INTEGER: ValueKind = ValueKind::Int32;

	/// Every kind in ordinal order.
	pub const ALL: [ValueKind; 16] = [
		ValueKind::Null,
		ValueKind::Boolean,
		ValueKind::SignedByte,
		ValueKind::Byte,
		ValueKind::Int16,
		ValueKind::UInt16,
		ValueKind::Int32,
		ValueKind::UInt32,
		ValueKind::Int64,
		ValueKind::UInt64,
		ValueKind::Float32,
		ValueKind::Float64,
		ValueKind::String,
		ValueKind::DateTime,
		ValueKind::Guid,
		ValueKind::WideString,
	];

	/// Returns the serialized ordinal of this kind.
	pub const fn ordinal(self) -> u8 {
		self as u8
	}

	/// Looks up a kind by its serialized ordinal.
	pub fn from_ordinal(ordinal: u8) -> Option<Self> {
		Self::ALL.get(ordinal as usize).copied()
	}

	/// Returns true if values of this kind can be classified as an increase or
	/// decrease when they change.
	///
	/// Every other kind is stored and retrieved but always compares as
	/// [`ValueChange::None`](crate::ValueChange::None).
	pub const fn is_ordered(self) -> bool {
		matches!(
			self,
			ValueKind::Boolean
				| ValueKind::Float32
				| ValueKind::Float64
				| ValueKind::String
				| ValueKind::Int32
		)
	}

	/// Returns the display name of this kind.
	pub const fn name(self) -> &'static str {
		match self {
			ValueKind::Null => "null",
			ValueKind::Boolean => "boolean",
			ValueKind::SignedByte => "sbyte",
			ValueKind::Byte => "byte",
			ValueKind::Int16 => "int16",
			ValueKind::UInt16 => "uint16",
			ValueKind::Int32 => "int32",
			ValueKind::UInt32 => "uint32",
			ValueKind::Int64 => "int64",
			ValueKind::UInt64 => "uint64",
			ValueKind::Float32 => "float32",
			ValueKind::Float64 => "float64",
			ValueKind::String => "string",
			ValueKind::DateTime => "datetime",
			ValueKind::Guid => "guid",
			ValueKind::WideString => "wstring",
		}
	}
}

impl fmt::Display for ValueKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}
