use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use uuid::Uuid;

use super::*;

#[test]
fn test_kind_follows_variant() {
	assert_eq!(Value::Null.kind(), ValueKind::Null);
	assert_eq!(Value::from(true).kind(), ValueKind::Boolean);
	assert_eq!(Value::from(45i32).kind(), ValueKind::INTEGER);
	assert_eq!(Value::from(45.3f32).kind(), ValueKind::NUMBER);
	assert_eq!(Value::from(1.2f64).kind(), ValueKind::Float64);
	assert_eq!(Value::from("s").kind(), ValueKind::String);
	assert_eq!(Value::wide("w").kind(), ValueKind::WideString);
	assert_eq!(Value::from(Uuid::nil()).kind(), ValueKind::Guid);
}

#[test]
fn test_typed_get() {
	let v = Value::from(41i32);
	assert_eq!(v.get::<i32>(), Ok(&41));
	assert_eq!(v.try_get::<i32>(), Some(&41));

	let s = Value::from("folder1.s");
	assert_eq!(s.get::<String>().map(String::as_str), Ok("folder1.s"));
}

#[test]
fn test_typed_get_mismatch_is_an_error() {
	let v = Value::from(1.1f64);
	assert_eq!(
		v.get::<f32>(),
		Err(ValueError::TypeMismatch {
			expected: ValueKind::Float32,
			found: ValueKind::Float64,
		})
	);
	assert!(v.try_get::<i64>().is_none());
	assert!(Value::Null.get::<bool>().is_err());
}

#[test]
fn test_zero_matches_kind() {
	for kind in ValueKind::ALL {
		assert_eq!(Value::zero(kind).kind(), kind);
	}
	assert_eq!(Value::zero(ValueKind::Guid), Value::Guid(Uuid::nil()));
	assert_eq!(
		Value::zero(ValueKind::DateTime),
		Value::DateTime(Utc.with_ymd_and_hms(1601, 1, 1, 0, 0, 0).unwrap())
	);
}

#[test]
fn test_parse_bool_uses_leading_character() {
	assert_eq!(Value::parse(ValueKind::Boolean, "0"), Value::Boolean(false));
	assert_eq!(Value::parse(ValueKind::Boolean, "0x1"), Value::Boolean(false));
	assert_eq!(Value::parse(ValueKind::Boolean, ""), Value::Boolean(false));
	assert_eq!(Value::parse(ValueKind::Boolean, "1"), Value::Boolean(true));
	assert_eq!(Value::parse(ValueKind::Boolean, "yes"), Value::Boolean(true));
}

#[test]
fn test_parse_integers_clamp_to_width() {
	assert_eq!(Value::parse(ValueKind::SignedByte, "300"), Value::SignedByte(i8::MAX));
	assert_eq!(Value::parse(ValueKind::SignedByte, "-300"), Value::SignedByte(i8::MIN));
	assert_eq!(Value::parse(ValueKind::Byte, "-1"), Value::Byte(0));
	assert_eq!(Value::parse(ValueKind::UInt16, "70000"), Value::UInt16(u16::MAX));
	assert_eq!(Value::parse(ValueKind::Int32, " 45 "), Value::Int32(45));
	assert_eq!(Value::parse(ValueKind::Int32, "+7"), Value::Int32(7));
	assert_eq!(
		Value::parse(ValueKind::UInt64, "999999999999999999999999999999999999999999999"),
		Value::UInt64(u64::MAX)
	);
	assert_eq!(
		Value::parse(ValueKind::Int64, "-999999999999999999999999999999999999999999999"),
		Value::Int64(i64::MIN)
	);
}

#[test]
fn test_parse_malformed_numbers_degrade_to_zero() {
	assert_eq!(Value::parse(ValueKind::Int32, "12abc"), Value::Int32(0));
	assert_eq!(Value::parse(ValueKind::UInt32, ""), Value::UInt32(0));
	assert_eq!(Value::parse(ValueKind::Float32, "four"), Value::Float32(0.0));
	assert_eq!(Value::parse(ValueKind::Float64, "1.5e3"), Value::Float64(1500.0));
}

#[test]
fn test_parse_guid() {
	let text = "{67e55044-10b1-426f-9247-bb680e5fe0c8}";
	let parsed = Value::parse(ValueKind::Guid, text);
	assert_eq!(parsed.to_string(), text);
	assert_eq!(Value::parse(ValueKind::Guid, "{not-a-guid}"), Value::Guid(Uuid::nil()));
}

#[test]
fn test_parse_datetime_from_ticks_and_rfc3339() {
	let unix_epoch_ticks = 11_644_473_600 * TICKS_PER_SECOND;
	assert_eq!(
		Value::parse(ValueKind::DateTime, &unix_epoch_ticks.to_string()),
		Value::DateTime(Utc.timestamp_opt(0, 0).unwrap())
	);
	assert_eq!(
		Value::parse(ValueKind::DateTime, "2021-02-01T12:30:00+02:00"),
		Value::DateTime(Utc.with_ymd_and_hms(2021, 2, 1, 10, 30, 0).unwrap())
	);
	assert_eq!(Value::parse(ValueKind::DateTime, "yesterday"), Value::zero(ValueKind::DateTime));
}

#[test]
fn test_ticks_conversion() {
	let dt = Utc.with_ymd_and_hms(2021, 2, 1, 10, 30, 0).unwrap();
	assert_eq!(datetime_from_ticks(ticks_from_datetime(&dt)), dt);
	assert_eq!(ticks_from_datetime(&datetime_from_ticks(0)), 0);
}

#[test]
fn test_parse_strings_pass_through() {
	assert_eq!(Value::parse(ValueKind::String, " a.b "), Value::from(" a.b "));
	assert_eq!(Value::parse(ValueKind::WideString, "żółw").to_string(), "żółw");
	assert_eq!(Value::parse(ValueKind::Null, "anything"), Value::Null);
}

#[test]
fn test_display() {
	assert_eq!(Value::Null.to_string(), "null");
	assert_eq!(Value::from(false).to_string(), "false");
	assert_eq!(Value::from(-3i16).to_string(), "-3");
	assert_eq!(
		Value::DateTime(Utc.with_ymd_and_hms(2021, 2, 1, 10, 30, 0).unwrap()).to_string(),
		"2021-02-01T10:30:00Z"
	);
}

proptest! {
	#[test]
	fn prop_int16_parse_clamps(n in any::<i64>()) {
		let expected = n.clamp(i16::MIN as i64, i16::MAX as i64) as i16;
		prop_assert_eq!(Value::parse(ValueKind::Int16, &n.to_string()), Value::Int16(expected));
	}

	#[test]
	fn prop_byte_parse_clamps(n in any::<i32>()) {
		let expected = n.clamp(0, u8::MAX as i32) as u8;
		prop_assert_eq!(Value::parse(ValueKind::Byte, &n.to_string()), Value::Byte(expected));
	}
}
