use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use uuid::Uuid;

use crate::{ConfError, ConfigEnum, Decimal, EnumDescriptor, EnumRepr, EnumValue, FromRaw, Kind, TargetKind, Value, parse};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TestEnum {
	Zero,
	One,
	Two,
	Undeclared(i64),
}

const TEST_ENUM: EnumDescriptor = EnumDescriptor::new("TestEnum", &[("Zero", 0), ("One", 1), ("Two", 2)]);

impl ConfigEnum for TestEnum {
	const DESCRIPTOR: &'static EnumDescriptor = &TEST_ENUM;

	fn from_enum_value(value: EnumValue) -> Self {
		match value.ordinal() {
			0 => Self::Zero,
			1 => Self::One,
			2 => Self::Two,
			other => Self::Undeclared(other),
		}
	}
}

crate::impl_from_raw_for_enum!(TestEnum);

const ALL_KINDS: &[Kind] = &[
	Kind::Boolean,
	Kind::Byte,
	Kind::Int16,
	Kind::Int32,
	Kind::Int64,
	Kind::Float32,
	Kind::Float64,
	Kind::Decimal,
	Kind::Duration,
	Kind::Timestamp,
	Kind::UniqueId,
	Kind::Enum(&TEST_ENUM),
];

fn ok<T: FromRaw>(text: &str) -> T {
	T::from_raw(Some(text)).unwrap_or_else(|err| panic!("{text:?} should parse: {err}"))
}

fn err_message<T: FromRaw + std::fmt::Debug>(text: Option<&str>) -> String {
	T::from_raw(text).expect_err("value should not parse").to_string()
}

fn datetime(y: i32, m: u32, d: u32, hh: u32, mm: u32, ss: u32) -> NaiveDateTime {
	NaiveDate::from_ymd_opt(y, m, d)
		.and_then(|date| date.and_hms_opt(hh, mm, ss))
		.expect("valid date")
}

#[test]
fn blank_input_fails_for_every_required_kind() {
	for kind in ALL_KINDS {
		for raw in [None, Some(""), Some("   ")] {
			let err = parse(raw, kind.required()).expect_err("blank input should fail");
			let ConfError::Parse { kind: name, text } = err else {
				panic!("expected parse failure for {kind}");
			};
			assert_eq!(name, kind.name());
			assert_eq!(text, raw.unwrap_or_default());
		}
	}
}

#[test]
fn blank_input_is_no_value_for_every_nullable_kind() {
	for kind in ALL_KINDS.iter().chain([&Kind::Text]) {
		for raw in [None, Some(""), Some("   "), Some("\t \n")] {
			let value = parse(raw, kind.nullable()).expect("blank nullable input succeeds");
			assert_eq!(value, None, "{kind} with {raw:?}");
		}
	}
}

#[test]
fn failure_message_names_nullable_wrapper_and_original_text() {
	let err = parse(Some(" yes "), Kind::Boolean.nullable()).expect_err("yes is not a boolean");
	assert_eq!(err.to_string(), "Cannot parse Nullable<Boolean> from string value ' yes '");

	let err = parse(None, Kind::Int32.required()).expect_err("absent int fails");
	assert_eq!(err.to_string(), "Cannot parse Int32 from string value ''");

	let err = parse(Some("   "), Kind::Int32.required()).expect_err("blank int fails");
	assert_eq!(err.to_string(), "Cannot parse Int32 from string value '   '");

	let err = parse(Some("unknown"), Kind::Enum(&TEST_ENUM).required()).expect_err("unknown member fails");
	assert_eq!(err.to_string(), "Cannot parse TestEnum from string value 'unknown'");
}

#[test]
fn text_is_returned_verbatim() {
	assert_eq!(ok::<String>("text"), "text");
	assert_eq!(ok::<String>(""), "");
	assert_eq!(ok::<String>("   "), "   ");
	assert_eq!(ok::<String>("  padded  "), "  padded  ");
	assert_eq!(err_message::<String>(None), "Cannot parse Text from string value ''");

	assert_eq!(ok::<Option<String>>("  padded  "), Some("  padded  ".to_owned()));
	assert_eq!(ok::<Option<String>>("   "), None);
	assert_eq!(Option::<String>::from_raw(None).expect("absent text"), None);

	assert_eq!(parse(Some("   "), Kind::Text.required()).expect("present text"), Some(Value::Text("   ".to_owned())));
}

#[test]
fn booleans_are_case_insensitive_keywords() {
	for text in ["true", "True", "TRUE", "TrUe", "true   "] {
		assert!(ok::<bool>(text), "{text:?}");
	}
	for text in ["false", "False", "FALSE", "FaLsE", "   false"] {
		assert!(!ok::<bool>(text), "{text:?}");
	}
	assert_eq!(ok::<Option<bool>>("TRUE"), Some(true));

	assert_eq!(err_message::<bool>(Some("yes")), "Cannot parse Boolean from string value 'yes'");
	assert_eq!(err_message::<bool>(Some("1")), "Cannot parse Boolean from string value '1'");
	assert_eq!(err_message::<Option<bool>>(Some("yes")), "Cannot parse Nullable<Boolean> from string value 'yes'");
}

#[test]
fn byte_boundaries() {
	assert_eq!(ok::<u8>("255"), 255);
	assert_eq!(ok::<u8>("   25   "), 25);
	assert_eq!(ok::<u8>("+7"), 7);
	assert_eq!(ok::<u8>("-0"), 0);

	assert_eq!(err_message::<u8>(Some("256")), "Cannot parse Byte from string value '256'");
	assert_eq!(err_message::<u8>(Some("-1")), "Cannot parse Byte from string value '-1'");
	assert_eq!(err_message::<u8>(Some("1e2")), "Cannot parse Byte from string value '1e2'");
	assert_eq!(err_message::<Option<u8>>(Some("-38")), "Cannot parse Nullable<Byte> from string value '-38'");
	assert_eq!(err_message::<Option<u8>>(Some("NaN")), "Cannot parse Nullable<Byte> from string value 'NaN'");
}

#[test]
fn signed_integer_widths() {
	assert_eq!(ok::<i16>("-38"), -38);
	assert_eq!(ok::<i16>("32767"), i16::MAX);
	assert_eq!(ok::<i16>("-32768"), i16::MIN);
	assert_eq!(err_message::<i16>(Some("100000")), "Cannot parse Int16 from string value '100000'");

	assert_eq!(ok::<i32>("100000"), 100_000);
	assert_eq!(err_message::<i32>(Some("10000000000")), "Cannot parse Int32 from string value '10000000000'");

	assert_eq!(ok::<i64>("10000000000"), 10_000_000_000);
	assert_eq!(ok::<i64>("-9223372036854775808"), i64::MIN);
	assert_eq!(
		err_message::<i64>(Some("10000000000000000000")),
		"Cannot parse Int64 from string value '10000000000000000000'"
	);
	assert_eq!(
		err_message::<Option<i64>>(Some("99999999999999999999999999999999999999999999")),
		"Cannot parse Nullable<Int64> from string value '99999999999999999999999999999999999999999999'"
	);
}

#[test]
fn integers_reject_non_digit_forms() {
	for text in ["1e2", "NaN", "1.0", "1,000", "1 000", "0x10", "--1", "+-1", "+", "٣"] {
		assert!(i32::from_raw(Some(text)).is_err(), "{text:?} should not parse");
	}
}

#[test]
fn float32_values_and_specials() {
	assert_eq!(ok::<f32>("2.5"), 2.5);
	assert_eq!(ok::<f32>("   2.5   "), 2.5);
	assert_eq!(ok::<f32>("-0.2"), -0.2);
	assert_eq!(ok::<f32>("-.2"), -0.2);
	assert_eq!(ok::<f32>("3.4e-12"), 3.4e-12);
	assert_eq!(ok::<f32>("+0"), 0.0);
	assert_eq!(ok::<f32>("-0"), 0.0);

	assert!(ok::<f32>("NaN").is_nan());
	assert_eq!(ok::<f32>("Infinity"), f32::INFINITY);
	assert_eq!(ok::<f32>("-Infinity"), f32::NEG_INFINITY);

	assert_eq!(err_message::<f32>(Some("+Infinity")), "Cannot parse Float32 from string value '+Infinity'");
	assert_eq!(err_message::<f32>(Some("2,5")), "Cannot parse Float32 from string value '2,5'");
	assert_eq!(err_message::<f32>(Some("1e39")), "Cannot parse Float32 from string value '1e39'");
	assert_eq!(err_message::<Option<f32>>(Some("1e39")), "Cannot parse Nullable<Float32> from string value '1e39'");
}

#[test]
fn float64_values_and_specials() {
	assert_eq!(ok::<f64>("1e39"), 1e39);
	assert_eq!(ok::<f64>("0.12345678901234567890"), 0.12345678901234568);
	assert!(ok::<Option<f64>>("NaN").is_some_and(f64::is_nan));
	assert_eq!(ok::<f64>("-Infinity"), f64::NEG_INFINITY);

	assert_eq!(err_message::<f64>(Some("1e309")), "Cannot parse Float64 from string value '1e309'");
	assert_eq!(err_message::<f64>(Some("+Infinity")), "Cannot parse Float64 from string value '+Infinity'");
	for text in ["nan", "infinity", "inf", "-inf", "2,5", "1e", "e5", "."] {
		assert!(f64::from_raw(Some(text)).is_err(), "{text:?} should not parse");
	}
}

#[test]
fn decimals_reject_specials() {
	assert_eq!(ok::<Decimal>("2.5"), Decimal::new(25, 1).expect("in range"));
	assert_eq!(ok::<Option<Decimal>>(" -.2 "), Decimal::new(-2, 1));
	assert_eq!(err_message::<Decimal>(Some("NaN")), "Cannot parse Decimal from string value 'NaN'");
	assert_eq!(err_message::<Decimal>(Some("Infinity")), "Cannot parse Decimal from string value 'Infinity'");
	assert_eq!(
		err_message::<Option<Decimal>>(Some("100000000000000000000000000000")),
		"Cannot parse Nullable<Decimal> from string value '100000000000000000000000000000'"
	);
}

#[test]
fn durations_allow_elapsed_hours() {
	assert_eq!(ok::<TimeDelta>("15:20:57"), TimeDelta::seconds(15 * 3_600 + 20 * 60 + 57));
	assert_eq!(ok::<TimeDelta>("   15:20:57   "), TimeDelta::seconds(55_257));
	assert_eq!(ok::<TimeDelta>("15:20:57.123"), TimeDelta::seconds(55_257) + TimeDelta::milliseconds(123));
	assert_eq!(ok::<TimeDelta>("39:20:57"), TimeDelta::seconds(39 * 3_600 + 20 * 60 + 57));
	assert_eq!(ok::<TimeDelta>("1:15:20:57"), TimeDelta::days(1) + TimeDelta::seconds(55_257));
	assert_eq!(ok::<TimeDelta>("1.15:20:57"), TimeDelta::days(1) + TimeDelta::seconds(55_257));
	assert_eq!(ok::<TimeDelta>("-00:30"), -TimeDelta::minutes(30));
	assert_eq!(ok::<TimeDelta>("3"), TimeDelta::days(3));

	assert_eq!(err_message::<TimeDelta>(Some("unknown")), "Cannot parse Duration from string value 'unknown'");
	for text in ["1:24:00:00", "00:60:00", "00:00:60", "00:00:00.12345678", "1:2:3:4:5", ":30", "12:", "1.5"] {
		assert!(TimeDelta::from_raw(Some(text)).is_err(), "{text:?} should not parse");
	}
	assert_eq!(err_message::<Option<TimeDelta>>(Some("x")), "Cannot parse Nullable<Duration> from string value 'x'");
}

#[test]
fn timestamps_use_invariant_formats() {
	assert_eq!(ok::<NaiveDateTime>("1983-05-25"), datetime(1983, 5, 25, 0, 0, 0));
	assert_eq!(ok::<NaiveDateTime>("   1983-05-25   "), datetime(1983, 5, 25, 0, 0, 0));
	assert_eq!(ok::<NaiveDateTime>("2000-11-21 15:20:57"), datetime(2000, 11, 21, 15, 20, 57));
	assert_eq!(ok::<NaiveDateTime>("2000/11/21 15:20:57"), datetime(2000, 11, 21, 15, 20, 57));
	assert_eq!(ok::<NaiveDateTime>("2000-11-21T15:20:57"), datetime(2000, 11, 21, 15, 20, 57));

	assert_eq!(err_message::<NaiveDateTime>(Some("unknown")), "Cannot parse Timestamp from string value 'unknown'");
	for text in ["2000-13-01", "2000-02-30", "21/11/2000", "2000-11-21 25:00:00"] {
		assert!(NaiveDateTime::from_raw(Some(text)).is_err(), "{text:?} should not parse");
	}
}

#[test]
fn unique_id_forms_are_equivalent() {
	let id = Uuid::from_u128(0x2DC0B86E_3E16_445A_88B8_C39EFF611331);
	for text in [
		"{2DC0B86E-3E16-445A-88B8-C39EFF611331}",
		"   {2DC0B86E-3E16-445A-88B8-C39EFF611331}   ",
		"2DC0B86E-3E16-445A-88B8-C39EFF611331",
		"2dc0b86e-3e16-445a-88b8-c39eff611331",
		"2dc0b86e3e16445a88b8c39eff611331",
	] {
		assert_eq!(ok::<Uuid>(text), id, "{text:?}");
	}

	assert_eq!(err_message::<Uuid>(Some("unknown")), "Cannot parse UniqueId from string value 'unknown'");
	for text in [
		"urn:uuid:2dc0b86e-3e16-445a-88b8-c39eff611331",
		"{2dc0b86e3e16445a88b8c39eff611331}",
		"2dc0b86e-3e16-445a-88b8-c39eff61133",
		"2dc0b86e-3e16-445a-88b8-c39eff61133g",
	] {
		assert!(Uuid::from_raw(Some(text)).is_err(), "{text:?} should not parse");
	}
}

#[test]
fn enums_parse_by_name_or_ordinal() {
	assert_eq!(ok::<TestEnum>("Zero"), TestEnum::Zero);
	assert_eq!(ok::<TestEnum>("   Zero   "), TestEnum::Zero);
	assert_eq!(ok::<TestEnum>("one"), TestEnum::One);
	assert_eq!(ok::<TestEnum>("TWO"), TestEnum::Two);
	assert_eq!(ok::<TestEnum>("two"), TestEnum::Two);

	assert_eq!(ok::<TestEnum>("0"), TestEnum::Zero);
	assert_eq!(ok::<TestEnum>("2"), TestEnum::Two);
	assert_eq!(ok::<TestEnum>("3"), TestEnum::Undeclared(3));
	assert_eq!(ok::<TestEnum>("-4"), TestEnum::Undeclared(-4));
	assert_eq!(ok::<Option<TestEnum>>("one"), Some(TestEnum::One));
	assert_eq!(Option::<TestEnum>::from_raw(Some("  ")).expect("blank enum"), None);

	assert_eq!(err_message::<TestEnum>(Some("unknown")), "Cannot parse TestEnum from string value 'unknown'");
	assert_eq!(
		err_message::<Option<TestEnum>>(Some("Three")),
		"Cannot parse Nullable<TestEnum> from string value 'Three'"
	);
}

#[test]
fn dynamic_enum_values_keep_undeclared_ordinals() {
	let target = Kind::Enum(&TEST_ENUM).required();
	let Some(Value::Enum(value)) = parse(Some("3"), target).expect("ordinal parses") else {
		panic!("expected enum value");
	};
	assert_eq!(value.ordinal(), 3);
	assert!(!value.is_declared());
	assert_eq!(value.to_string(), "3");

	let Some(Value::Enum(value)) = parse(Some("tWo"), target).expect("name parses") else {
		panic!("expected enum value");
	};
	assert_eq!(value.name(), Some("Two"));
}

const BYTE_ENUM: EnumDescriptor = EnumDescriptor::new("ByteEnum", &[("Low", 0), ("High", 255)]).with_repr(EnumRepr::U8);
const WIDE_ENUM: EnumDescriptor = EnumDescriptor::new("WideEnum", &[("Far", 5_000_000_000)]).with_repr(EnumRepr::I64);

#[test]
fn enum_ordinals_must_fit_the_backing_type() {
	assert_eq!(err_message::<TestEnum>(Some("5000000000")), "Cannot parse TestEnum from string value '5000000000'");
	assert_eq!(ok::<TestEnum>("2147483647"), TestEnum::Undeclared(i64::from(i32::MAX)));
	assert!(TestEnum::from_raw(Some("-2147483649")).is_err());

	let target = Kind::Enum(&BYTE_ENUM).required();
	assert!(parse(Some("255"), target).is_ok());
	assert!(parse(Some("256"), target).is_err());
	assert!(parse(Some("-1"), target).is_err());
	assert!(parse(Some("high"), target).is_ok());

	let target = Kind::Enum(&WIDE_ENUM).nullable();
	let Some(Value::Enum(value)) = parse(Some("5000000000"), target).expect("fits i64") else {
		panic!("expected enum value");
	};
	assert_eq!(value.name(), Some("Far"));
}

#[test]
fn display_round_trips_through_parse() {
	let values = [
		Value::Boolean(true),
		Value::Byte(255),
		Value::Int16(i16::MIN),
		Value::Int32(-38),
		Value::Int64(i64::MAX),
		Value::Float32(3.4e-12),
		Value::Float32(f32::MAX),
		Value::Float64(1e39),
		Value::Float64(f64::MIN_POSITIVE),
		Value::Float64(f64::NEG_INFINITY),
		Value::Decimal(Decimal::new(-123_456, 3).expect("in range")),
		Value::Duration(TimeDelta::days(2) + TimeDelta::seconds(3_723) + TimeDelta::microseconds(500)),
		Value::Duration(-TimeDelta::seconds(90)),
		Value::Timestamp(datetime(1983, 5, 25, 0, 0, 0)),
		Value::Timestamp(datetime(2000, 11, 21, 15, 20, 57) + TimeDelta::milliseconds(250)),
		Value::UniqueId(Uuid::from_u128(0x2DC0B86E_3E16_445A_88B8_C39EFF611331)),
		Value::Enum(EnumValue::new(&TEST_ENUM, 1)),
		Value::Enum(EnumValue::new(&TEST_ENUM, 42)),
	];

	for value in values {
		let text = value.to_string();
		let parsed = parse(Some(text.as_str()), TargetKind::Required(value.kind())).expect("formatted value parses");
		assert_eq!(parsed, Some(value.clone()), "round trip through {text:?}");
	}

	let text = Value::Float64(f64::NAN).to_string();
	assert_eq!(text, "NaN");
	assert!(matches!(parse(Some(text.as_str()), Kind::Float64.required()), Ok(Some(Value::Float64(value))) if value.is_nan()));
}

#[test]
fn parse_is_deterministic() {
	for (raw, target) in [
		(Some("42"), Kind::Int32.required()),
		(Some("bad"), Kind::Int32.nullable()),
		(None, Kind::Text.nullable()),
	] {
		let first = parse(raw, target).map_err(|err| err.to_string());
		let second = parse(raw, target).map_err(|err| err.to_string());
		assert_eq!(first, second);
	}
}
