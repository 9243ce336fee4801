/// Decimal number split into its lexical parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Number<'a> {
	pub negative: bool,
	/// Digits before the decimal point, possibly empty.
	pub integral: &'a str,
	/// Digits after the decimal point, possibly empty.
	pub fraction: &'a str,
	/// Saturates at `i64::MAX` in magnitude, far beyond any digit count.
	pub exponent: i64,
}

/// Split an optional leading `+` or `-`.
pub(crate) fn split_sign(text: &str) -> (bool, &str) {
	if let Some(rest) = text.strip_prefix('-') {
		(true, rest)
	} else if let Some(rest) = text.strip_prefix('+') {
		(false, rest)
	} else {
		(false, text)
	}
}

/// Whether `text` is non-empty and made of ASCII digits only.
pub(crate) fn is_digits(text: &str) -> bool {
	!text.is_empty() && text.bytes().all(|byte| byte.is_ascii_digit())
}

/// Scan `[+-]?(digits[.digits]|.digits)([eE][+-]?digits)?`.
pub(crate) fn scan(text: &str) -> Option<Number<'_>> {
	let (negative, rest) = split_sign(text);
	let (mantissa, exponent) = match rest.find(['e', 'E']) {
		Some(idx) => (&rest[..idx], Some(&rest[idx + 1..])),
		None => (rest, None),
	};

	let (integral, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
	if integral.is_empty() && fraction.is_empty() {
		return None;
	}
	if !integral.bytes().all(|byte| byte.is_ascii_digit()) || !fraction.bytes().all(|byte| byte.is_ascii_digit()) {
		return None;
	}

	let exponent = match exponent {
		Some(text) => parse_exponent(text)?,
		None => 0,
	};

	Some(Number {
		negative,
		integral,
		fraction,
		exponent,
	})
}

fn parse_exponent(text: &str) -> Option<i64> {
	let (negative, digits) = split_sign(text);
	if !is_digits(digits) {
		return None;
	}

	let mut value = 0_i64;
	for byte in digits.bytes() {
		value = value.saturating_mul(10).saturating_add(i64::from(byte - b'0'));
	}
	Some(if negative { -value } else { value })
}
