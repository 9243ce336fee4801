use std::str::FromStr;

use crate::Kind;
use crate::parse::Scalar;
use crate::parse::number::scan;

/// Float types sharing the invariant grammar.
trait Float: FromStr + Copy {
	const NAN: Self;
	const INFINITY: Self;
	const NEG_INFINITY: Self;

	fn is_finite(self) -> bool;
}

impl Float for f32 {
	const NAN: Self = f32::NAN;
	const INFINITY: Self = f32::INFINITY;
	const NEG_INFINITY: Self = f32::NEG_INFINITY;

	fn is_finite(self) -> bool {
		f32::is_finite(self)
	}
}

impl Float for f64 {
	const NAN: Self = f64::NAN;
	const INFINITY: Self = f64::INFINITY;
	const NEG_INFINITY: Self = f64::NEG_INFINITY;

	fn is_finite(self) -> bool {
		f64::is_finite(self)
	}
}

/// Special tokens are case-sensitive; `+Infinity` is not accepted.
fn parse_float<T: Float>(text: &str) -> Option<T> {
	match text {
		"NaN" => return Some(T::NAN),
		"Infinity" => return Some(T::INFINITY),
		"-Infinity" => return Some(T::NEG_INFINITY),
		_ => {}
	}

	scan(text)?;
	text.parse::<T>().ok().filter(|value| value.is_finite())
}

impl Scalar for f32 {
	const KIND: Kind = Kind::Float32;

	fn parse_text(text: &str) -> Option<Self> {
		parse_float(text)
	}
}

impl Scalar for f64 {
	const KIND: Kind = Kind::Float64;

	fn parse_text(text: &str) -> Option<Self> {
		parse_float(text)
	}
}
