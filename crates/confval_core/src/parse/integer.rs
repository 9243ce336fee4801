use crate::Kind;
use crate::parse::Scalar;
use crate::parse::number::{is_digits, split_sign};

/// Parse an optionally signed run of decimal digits into the target width.
pub(crate) fn parse_integer<T: TryFrom<i128>>(text: &str) -> Option<T> {
	let (negative, digits) = split_sign(text);
	if !is_digits(digits) {
		return None;
	}

	let mut value = 0_i128;
	for byte in digits.bytes() {
		value = value.checked_mul(10)?.checked_add(i128::from(byte - b'0'))?;
	}
	T::try_from(if negative { -value } else { value }).ok()
}

macro_rules! integer_scalar {
	($($ty:ty => $kind:ident),* $(,)?) => {
		$(
			impl Scalar for $ty {
				const KIND: Kind = Kind::$kind;

				fn parse_text(text: &str) -> Option<Self> {
					parse_integer(text)
				}
			}
		)*
	};
}

integer_scalar! {
	u8 => Byte,
	i16 => Int16,
	i32 => Int32,
	i64 => Int64,
}
