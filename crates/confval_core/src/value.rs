use std::fmt;

use chrono::{NaiveDateTime, TimeDelta};
use uuid::Uuid;

use crate::parse::format_duration;
use crate::{Decimal, EnumDescriptor, Kind};

/// Parsed value, one variant per [`Kind`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Untrimmed text.
	Text(String),
	/// Boolean scalar.
	Boolean(bool),
	/// Unsigned 8-bit integer.
	Byte(u8),
	/// Signed 16-bit integer.
	Int16(i16),
	/// Signed 32-bit integer.
	Int32(i32),
	/// Signed 64-bit integer.
	Int64(i64),
	/// 32-bit float, specials included.
	Float32(f32),
	/// 64-bit float, specials included.
	Float64(f64),
	/// Base-10 decimal.
	Decimal(Decimal),
	/// Signed elapsed time.
	Duration(TimeDelta),
	/// Date and time without zone.
	Timestamp(NaiveDateTime),
	/// 128-bit identifier.
	UniqueId(Uuid),
	/// Enumeration member or out-of-range ordinal.
	Enum(EnumValue),
}

impl Value {
	/// Kind this value was parsed as.
	pub fn kind(&self) -> Kind {
		match self {
			Self::Text(_) => Kind::Text,
			Self::Boolean(_) => Kind::Boolean,
			Self::Byte(_) => Kind::Byte,
			Self::Int16(_) => Kind::Int16,
			Self::Int32(_) => Kind::Int32,
			Self::Int64(_) => Kind::Int64,
			Self::Float32(_) => Kind::Float32,
			Self::Float64(_) => Kind::Float64,
			Self::Decimal(_) => Kind::Decimal,
			Self::Duration(_) => Kind::Duration,
			Self::Timestamp(_) => Kind::Timestamp,
			Self::UniqueId(_) => Kind::UniqueId,
			Self::Enum(value) => Kind::Enum(value.descriptor()),
		}
	}
}

/// Formats in the same grammar the parser accepts for the value's kind.
impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Text(value) => f.write_str(value),
			Self::Boolean(value) => write!(f, "{value}"),
			Self::Byte(value) => write!(f, "{value}"),
			Self::Int16(value) => write!(f, "{value}"),
			Self::Int32(value) => write!(f, "{value}"),
			Self::Int64(value) => write!(f, "{value}"),
			Self::Float32(value) => format_float(f64::from(*value), &value.to_string(), f),
			Self::Float64(value) => format_float(*value, &value.to_string(), f),
			Self::Decimal(value) => write!(f, "{value}"),
			Self::Duration(value) => format_duration(value, f),
			Self::Timestamp(value) => write!(f, "{}", value.format("%Y-%m-%d %H:%M:%S%.f")),
			Self::UniqueId(value) => write!(f, "{}", value.hyphenated()),
			Self::Enum(value) => write!(f, "{value}"),
		}
	}
}

fn format_float(value: f64, finite: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
	if value.is_nan() {
		f.write_str("NaN")
	} else if value == f64::INFINITY {
		f.write_str("Infinity")
	} else if value == f64::NEG_INFINITY {
		f.write_str("-Infinity")
	} else {
		f.write_str(finite)
	}
}

/// Enumeration value identified by ordinal.
///
/// Ordinals without a declared member are valid values; `name` is `None` for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumValue {
	descriptor: &'static EnumDescriptor,
	ordinal: i64,
}

impl EnumValue {
	/// Wrap `ordinal` as a value of the described enumeration.
	pub fn new(descriptor: &'static EnumDescriptor, ordinal: i64) -> Self {
		Self { descriptor, ordinal }
	}

	/// Enumeration this value belongs to.
	pub fn descriptor(&self) -> &'static EnumDescriptor {
		self.descriptor
	}

	/// Underlying ordinal.
	pub fn ordinal(&self) -> i64 {
		self.ordinal
	}

	/// Declared member name for the ordinal, if any.
	pub fn name(&self) -> Option<&'static str> {
		self.descriptor.name_of(self.ordinal)
	}

	/// Whether the ordinal matches a declared member.
	pub fn is_declared(&self) -> bool {
		self.name().is_some()
	}
}

impl fmt::Display for EnumValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.name() {
			Some(name) => f.write_str(name),
			None => write!(f, "{}", self.ordinal),
		}
	}
}
