use uuid::Uuid;

use crate::Kind;
use crate::parse::Scalar;

const SIMPLE_LEN: usize = 32;
const HYPHENATED_LEN: usize = 36;

/// Accept `{hyphenated}`, `hyphenated` or 32 hex digits, any case.
pub(crate) fn parse_unique_id(text: &str) -> Option<Uuid> {
	let inner = match text.strip_prefix('{') {
		Some(rest) => rest.strip_suffix('}').filter(|inner| inner.len() == HYPHENATED_LEN)?,
		None => text,
	};

	match inner.len() {
		SIMPLE_LEN | HYPHENATED_LEN => Uuid::try_parse(inner).ok(),
		_ => None,
	}
}

impl Scalar for Uuid {
	const KIND: Kind = Kind::UniqueId;

	fn parse_text(text: &str) -> Option<Self> {
		parse_unique_id(text)
	}
}
