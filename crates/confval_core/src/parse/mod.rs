mod duration;
mod enumeration;
mod float;
mod integer;
pub(crate) mod number;
mod timestamp;
mod unique_id;

use chrono::{NaiveDateTime, TimeDelta};
use uuid::Uuid;

pub(crate) use duration::format_duration;
use enumeration::parse_enum_value;

use crate::decimal::parse_decimal;
use crate::{ConfError, Decimal, EnumDescriptor, EnumValue, Kind, Result, TargetKind, Value};

/// Rust type produced by one non-text kind.
pub(crate) trait Scalar: Sized {
	const KIND: Kind;

	/// Parse already-trimmed, non-blank text.
	fn parse_text(text: &str) -> Option<Self>;
}

impl Scalar for bool {
	const KIND: Kind = Kind::Boolean;

	fn parse_text(text: &str) -> Option<Self> {
		if text.eq_ignore_ascii_case("true") {
			Some(true)
		} else if text.eq_ignore_ascii_case("false") {
			Some(false)
		} else {
			None
		}
	}
}

impl Scalar for Decimal {
	const KIND: Kind = Kind::Decimal;

	fn parse_text(text: &str) -> Option<Self> {
		parse_decimal(text)
	}
}

/// Parse raw text as `target`.
///
/// `Ok(None)` is returned only for nullable targets whose input is absent or blank.
/// Required text accepts any present string verbatim; every other required kind
/// fails on absent or blank input.
pub fn parse(raw: Option<&str>, target: TargetKind) -> Result<Option<Value>> {
	let value = match (raw, target) {
		(Some(raw), TargetKind::Required(Kind::Text)) => return Ok(Some(Value::Text(raw.to_owned()))),
		(Some(raw), _) if !is_blank(raw) => parse_present(raw, target.kind()),
		(_, TargetKind::Nullable(_)) => return Ok(None),
		(_, TargetKind::Required(_)) => None,
	};

	value.map(Some).ok_or_else(|| ConfError::parse(target, raw))
}

fn parse_present(raw: &str, kind: Kind) -> Option<Value> {
	let text = raw.trim();
	match kind {
		Kind::Text => Some(Value::Text(raw.to_owned())),
		Kind::Boolean => bool::parse_text(text).map(Value::Boolean),
		Kind::Byte => u8::parse_text(text).map(Value::Byte),
		Kind::Int16 => i16::parse_text(text).map(Value::Int16),
		Kind::Int32 => i32::parse_text(text).map(Value::Int32),
		Kind::Int64 => i64::parse_text(text).map(Value::Int64),
		Kind::Float32 => f32::parse_text(text).map(Value::Float32),
		Kind::Float64 => f64::parse_text(text).map(Value::Float64),
		Kind::Decimal => Decimal::parse_text(text).map(Value::Decimal),
		Kind::Duration => TimeDelta::parse_text(text).map(Value::Duration),
		Kind::Timestamp => NaiveDateTime::parse_text(text).map(Value::Timestamp),
		Kind::UniqueId => Uuid::parse_text(text).map(Value::UniqueId),
		Kind::Enum(descriptor) => parse_enum_value(text, descriptor).map(Value::Enum),
	}
}

fn is_blank(raw: &str) -> bool {
	raw.trim().is_empty()
}

/// Present, non-blank input, trimmed.
fn present(raw: Option<&str>) -> Option<&str> {
	raw.map(str::trim).filter(|text| !text.is_empty())
}

/// Rust types that can be parsed from raw configuration text.
pub trait FromRaw: Sized {
	/// Kind and nullability this type parses as.
	fn target() -> TargetKind;

	/// Parse raw text, `None` meaning absent.
	fn from_raw(raw: Option<&str>) -> Result<Self>;
}

fn required<T: Scalar>(raw: Option<&str>) -> Result<T> {
	present(raw)
		.and_then(T::parse_text)
		.ok_or_else(|| ConfError::parse(TargetKind::Required(T::KIND), raw))
}

fn nullable<T: Scalar>(raw: Option<&str>) -> Result<Option<T>> {
	let Some(text) = present(raw) else {
		return Ok(None);
	};
	T::parse_text(text)
		.map(Some)
		.ok_or_else(|| ConfError::parse(TargetKind::Nullable(T::KIND), raw))
}

macro_rules! from_raw_scalar {
	($($ty:ty),* $(,)?) => {
		$(
			impl FromRaw for $ty {
				fn target() -> TargetKind {
					TargetKind::Required(<$ty as Scalar>::KIND)
				}

				fn from_raw(raw: Option<&str>) -> Result<Self> {
					required(raw)
				}
			}

			impl FromRaw for Option<$ty> {
				fn target() -> TargetKind {
					TargetKind::Nullable(<$ty as Scalar>::KIND)
				}

				fn from_raw(raw: Option<&str>) -> Result<Self> {
					nullable(raw)
				}
			}
		)*
	};
}

from_raw_scalar!(bool, u8, i16, i32, i64, f32, f64, Decimal, TimeDelta, NaiveDateTime, Uuid);

impl FromRaw for String {
	fn target() -> TargetKind {
		TargetKind::Required(Kind::Text)
	}

	fn from_raw(raw: Option<&str>) -> Result<Self> {
		raw.map(str::to_owned).ok_or_else(|| ConfError::parse(Self::target(), raw))
	}
}

impl FromRaw for Option<String> {
	fn target() -> TargetKind {
		TargetKind::Nullable(Kind::Text)
	}

	fn from_raw(raw: Option<&str>) -> Result<Self> {
		Ok(raw.filter(|raw| !is_blank(raw)).map(str::to_owned))
	}
}

/// Rust enumeration backed by an [`EnumDescriptor`].
///
/// Implement [`FromRaw`] for the type with [`impl_from_raw_for_enum!`](crate::impl_from_raw_for_enum).
pub trait ConfigEnum: Sized {
	/// Enumeration name and declared members.
	const DESCRIPTOR: &'static EnumDescriptor;

	/// Convert a parsed value, which may carry an undeclared ordinal.
	fn from_enum_value(value: EnumValue) -> Self;
}

/// Parse a required enumeration value.
pub fn parse_enum<E: ConfigEnum>(raw: Option<&str>) -> Result<E> {
	present(raw)
		.and_then(|text| parse_enum_value(text, E::DESCRIPTOR))
		.map(E::from_enum_value)
		.ok_or_else(|| ConfError::parse(TargetKind::Required(Kind::Enum(E::DESCRIPTOR)), raw))
}

/// Parse a nullable enumeration value.
pub fn parse_enum_nullable<E: ConfigEnum>(raw: Option<&str>) -> Result<Option<E>> {
	let Some(text) = present(raw) else {
		return Ok(None);
	};
	parse_enum_value(text, E::DESCRIPTOR)
		.map(|value| Some(E::from_enum_value(value)))
		.ok_or_else(|| ConfError::parse(TargetKind::Nullable(Kind::Enum(E::DESCRIPTOR)), raw))
}

impl<E: ConfigEnum> FromRaw for Option<E> {
	fn target() -> TargetKind {
		TargetKind::Nullable(Kind::Enum(E::DESCRIPTOR))
	}

	fn from_raw(raw: Option<&str>) -> Result<Self> {
		parse_enum_nullable(raw)
	}
}

/// Implement [`FromRaw`] for a [`ConfigEnum`] type.
///
/// `Option<E>` is covered for every [`ConfigEnum`] already.
#[macro_export]
macro_rules! impl_from_raw_for_enum {
	($ty:ty) => {
		impl $crate::FromRaw for $ty {
			fn target() -> $crate::TargetKind {
				$crate::TargetKind::Required($crate::Kind::Enum(<$ty as $crate::ConfigEnum>::DESCRIPTOR))
			}

			fn from_raw(raw: Option<&str>) -> $crate::Result<Self> {
				$crate::parse_enum(raw)
			}
		}
	};
}

#[cfg(test)]
mod tests;
