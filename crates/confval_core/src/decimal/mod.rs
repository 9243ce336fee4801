use std::fmt;
use std::str::FromStr;

use crate::parse::number::scan;
use crate::{ConfError, Kind, Result, TargetKind};

/// Largest representable scale (digits after the decimal point).
pub const MAX_SCALE: u32 = 28;
/// Largest representable magnitude, `2^96 - 1`.
const MAX_MAGNITUDE: u128 = (1 << 96) - 1;
/// Decimal digits in [`MAX_MAGNITUDE`].
const MAX_DIGITS: usize = 29;

/// Base-10 number with a 96-bit magnitude and a scale of `0..=28`.
///
/// Equality is by numeric value: `2.5 == 2.50` and `-0 == 0`.
/// Display keeps the scale as written.
#[derive(Debug, Clone, Copy)]
pub struct Decimal {
	magnitude: u128,
	scale: u32,
	negative: bool,
}

impl Decimal {
	/// Zero with scale 0.
	pub const ZERO: Self = Self {
		magnitude: 0,
		scale: 0,
		negative: false,
	};
	/// Largest representable value.
	pub const MAX: Self = Self {
		magnitude: MAX_MAGNITUDE,
		scale: 0,
		negative: false,
	};
	/// Smallest representable value.
	pub const MIN: Self = Self {
		magnitude: MAX_MAGNITUDE,
		scale: 0,
		negative: true,
	};

	/// Build `mantissa * 10^-scale`, or `None` when out of range.
	pub fn new(mantissa: i128, scale: u32) -> Option<Self> {
		let magnitude = mantissa.unsigned_abs();
		if magnitude > MAX_MAGNITUDE || scale > MAX_SCALE {
			return None;
		}
		Some(Self {
			magnitude,
			scale,
			negative: mantissa < 0,
		})
	}

	/// Signed integer mantissa.
	pub fn mantissa(&self) -> i128 {
		// magnitude is at most 96 bits wide
		let magnitude = self.magnitude as i128;
		if self.negative { -magnitude } else { magnitude }
	}

	/// Number of digits after the decimal point.
	pub fn scale(&self) -> u32 {
		self.scale
	}

	/// Whether the value is exactly zero.
	pub fn is_zero(&self) -> bool {
		self.magnitude == 0
	}

	/// Whether the value is strictly negative.
	pub fn is_sign_negative(&self) -> bool {
		self.negative && self.magnitude != 0
	}

	/// Drop trailing fractional zeros; zero becomes unsigned with scale 0.
	pub fn normalize(self) -> Self {
		if self.magnitude == 0 {
			return Self::ZERO;
		}

		let mut out = self;
		while out.scale > 0 && out.magnitude % 10 == 0 {
			out.magnitude /= 10;
			out.scale -= 1;
		}
		out
	}
}

impl PartialEq for Decimal {
	fn eq(&self, other: &Self) -> bool {
		let left = self.normalize();
		let right = other.normalize();
		left.magnitude == right.magnitude && left.scale == right.scale && left.negative == right.negative
	}
}

impl Eq for Decimal {}

impl fmt::Display for Decimal {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.is_sign_negative() {
			f.write_str("-")?;
		}

		let digits = self.magnitude.to_string();
		let scale = self.scale as usize;
		if scale == 0 {
			return f.write_str(&digits);
		}

		let padded = format!("{digits:0>width$}", width = scale + 1);
		let (integral, fraction) = padded.split_at(padded.len() - scale);
		write!(f, "{integral}.{fraction}")
	}
}

impl FromStr for Decimal {
	type Err = ConfError;

	fn from_str(text: &str) -> Result<Self> {
		parse_decimal(text.trim()).ok_or_else(|| ConfError::parse(TargetKind::Required(Kind::Decimal), Some(text)))
	}
}

/// Parse decimal or scientific notation into a [`Decimal`].
///
/// Integral overflow fails. Digits beyond the 28th fractional place, or beyond
/// what the 96-bit magnitude holds, are rounded half to even.
pub(crate) fn parse_decimal(text: &str) -> Option<Decimal> {
	let number = scan(text)?;

	let mut digits: Vec<u8> = number
		.integral
		.bytes()
		.chain(number.fraction.bytes())
		.map(|byte| byte - b'0')
		.skip_while(|digit| *digit == 0)
		.collect();
	let mut scale = i64::try_from(number.fraction.len()).ok()?.saturating_sub(number.exponent);

	if scale < 0 {
		if !digits.is_empty() {
			let shift = usize::try_from(-scale).ok()?;
			if digits.len().saturating_add(shift) > MAX_DIGITS {
				return None;
			}
			digits.resize(digits.len() + shift, 0);
		}
		scale = 0;
	}

	// Everything lies below the last representable place.
	if scale > i64::from(MAX_SCALE) + digits.len() as i64 + 1 {
		return Some(Decimal {
			magnitude: 0,
			scale: MAX_SCALE,
			negative: number.negative,
		});
	}

	let mut round = 0_u8;
	let mut sticky = false;
	while scale > i64::from(MAX_SCALE) || exceeds_magnitude(&digits) {
		if scale == 0 {
			return None;
		}
		sticky |= round != 0;
		round = digits.pop().unwrap_or(0);
		scale -= 1;
	}

	let mut magnitude = digits.iter().fold(0_u128, |acc, digit| acc * 10 + u128::from(*digit));
	if round > 5 || (round == 5 && (sticky || magnitude % 2 == 1)) {
		magnitude += 1;
		if magnitude > MAX_MAGNITUDE {
			if scale == 0 {
				return None;
			}
			magnitude = (magnitude + 5) / 10;
			scale -= 1;
		}
	}

	Some(Decimal {
		magnitude,
		scale: u32::try_from(scale).ok()?,
		negative: number.negative,
	})
}

fn exceeds_magnitude(digits: &[u8]) -> bool {
	match digits.len() {
		len if len > MAX_DIGITS => true,
		MAX_DIGITS => digits.iter().fold(0_u128, |acc, digit| acc * 10 + u128::from(*digit)) > MAX_MAGNITUDE,
		_ => false,
	}
}
