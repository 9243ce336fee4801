use crate::parse::integer::parse_integer;
use crate::parse::number::{is_digits, split_sign};
use crate::{EnumDescriptor, EnumValue};

/// Parse a member name (any case) or an integer ordinal.
///
/// Ordinals must fit the backing type but are not checked against the declared members.
pub(crate) fn parse_enum_value(text: &str, descriptor: &'static EnumDescriptor) -> Option<EnumValue> {
	if is_ordinal(text) {
		return parse_integer::<i64>(text)
			.filter(|ordinal| descriptor.repr.contains(*ordinal))
			.map(|ordinal| EnumValue::new(descriptor, ordinal));
	}

	descriptor.ordinal_of(text).map(|ordinal| EnumValue::new(descriptor, ordinal))
}

fn is_ordinal(text: &str) -> bool {
	is_digits(split_sign(text).1)
}
