//! Lenient conversion of tag text into typed values.
//!
//! Parsing never fails. Text that cannot be read as the requested kind
//! degrades to that kind's zero value, and integers outside the target width
//! clamp to its minimum or maximum.

use std::num::IntErrorKind;

use chrono::{DateTime, FixedOffset, Utc};
use uuid::Uuid;

use super::Value;
use crate::ValueKind;

/// Timestamp ticks per second (100 ns resolution).
pub const TICKS_PER_SECOND: u64 = 10_000_000;

/// Seconds from the tick epoch (1601-01-01) to the Unix epoch.
const TICK_EPOCH_OFFSET_SECS: i64 = 11_644_473_600;

impl Value {
	/// Parses `text` as a value of `kind`.
	///
	/// - booleans are false only for empty text or text starting with `0`
	/// - integers use a locale-independent decimal parse and clamp on overflow
	/// - floats use the standard parse
	/// - GUIDs accept the braced hyphenated layout (and the other uuid layouts)
	/// - timestamps accept unsigned 100 ns ticks since 1601-01-01 or RFC 3339
	/// - strings pass through unchanged
	pub fn parse(kind: ValueKind, text: &str) -> Value {
		match kind {
			ValueKind::Null => Value::Null,
			ValueKind::Boolean => Value::Boolean(parse_bool(text)),
			ValueKind::SignedByte => Value::SignedByte(clamp(parse_wide(text), i8::MIN, i8::MAX)),
			ValueKind::Byte => Value::Byte(clamp(parse_wide(text), u8::MIN, u8::MAX)),
			ValueKind::Int16 => Value::Int16(clamp(parse_wide(text), i16::MIN, i16::MAX)),
			ValueKind::UInt16 => Value::UInt16(clamp(parse_wide(text), u16::MIN, u16::MAX)),
			ValueKind::Int32 => Value::Int32(clamp(parse_wide(text), i32::MIN, i32::MAX)),
			ValueKind::UInt32 => Value::UInt32(clamp(parse_wide(text), u32::MIN, u32::MAX)),
			ValueKind::Int64 => Value::Int64(clamp(parse_wide(text), i64::MIN, i64::MAX)),
			ValueKind::UInt64 => Value::UInt64(clamp(parse_wide(text), u64::MIN, u64::MAX)),
			ValueKind::Float32 => Value::Float32(text.trim().parse().unwrap_or(0.0)),
			ValueKind::Float64 => Value::Float64(text.trim().parse().unwrap_or(0.0)),
			ValueKind::String => Value::String(text.to_string()),
			ValueKind::DateTime => Value::DateTime(parse_datetime(text)),
			ValueKind::Guid => Value::Guid(Uuid::parse_str(text.trim()).unwrap_or(Uuid::nil())),
			ValueKind::WideString => Value::wide(text),
		}
	}
}

fn parse_bool(text: &str) -> bool {
	!matches!(text.as_bytes().first(), None | Some(b'0'))
}

/// Reads a decimal integer wide enough for every supported width.
fn parse_wide(text: &str) -> i128 {
	match text.trim().parse::<i128>() {
		Ok(v) => v,
		Err(e) => match e.kind() {
			IntErrorKind::PosOverflow => i128::MAX,
			IntErrorKind::NegOverflow => i128::MIN,
			_ => 0,
		},
	}
}

fn clamp<T>(wide: i128, min: T, max: T) -> T
where
	T: Copy + Into<i128> + TryFrom<i128>,
{
	if wide <= min.into() {
		return min;
	}
	if wide >= max.into() {
		return max;
	}
	T::try_from(wide).unwrap_or(min)
}

fn parse_datetime(text: &str) -> DateTime<Utc> {
	let text = text.trim();
	if let Ok(ticks) = text.parse::<u64>() {
		return datetime_from_ticks(ticks);
	}
	DateTime::<FixedOffset>::parse_from_rfc3339(text)
		.map(|dt| dt.with_timezone(&Utc))
		.unwrap_or_else(|_| datetime_from_ticks(0))
}

/// Converts 100 ns ticks since 1601-01-01 into a UTC timestamp.
pub fn datetime_from_ticks(ticks: u64) -> DateTime<Utc> {
	let secs = (ticks / TICKS_PER_SECOND) as i64 - TICK_EPOCH_OFFSET_SECS;
	let nanos = ((ticks % TICKS_PER_SECOND) * 100) as u32;
	DateTime::<Utc>::from_timestamp(secs, nanos).unwrap_or_default()
}

/// Converts a UTC timestamp into 100 ns ticks since 1601-01-01.
///
/// Timestamps before the tick epoch saturate to zero.
pub fn ticks_from_datetime(dt: &DateTime<Utc>) -> u64 {
	let secs = dt.timestamp().saturating_add(TICK_EPOCH_OFFSET_SECS);
	if secs < 0 {
		return 0;
	}
	(secs as u64)
		.saturating_mul(TICKS_PER_SECOND)
		.saturating_add(u64::from(dt.timestamp_subsec_nanos() / 100))
}
