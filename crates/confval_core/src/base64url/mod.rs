//! Base64Url encoding (RFC 4648 §5) without padding.
//!
//! Decoding accepts both the URL-safe and standard alphabets and restores the
//! padding from the text length.

use base64::Engine;
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};

use crate::{ConfError, Result};

/// Encode bytes as unpadded Base64Url text.
pub fn encode(bytes: &[u8]) -> String {
	URL_SAFE_NO_PAD.encode(bytes)
}

/// Decode unpadded Base64Url text.
///
/// A length of `4n + 1` can never come from [`encode`] and fails with
/// [`ConfError::InvalidBase64Length`].
pub fn decode(text: &str) -> Result<Vec<u8>> {
	let padding = match text.len() % 4 {
		0 => 0,
		2 => 2,
		3 => 1,
		_ => return Err(ConfError::InvalidBase64Length { len: text.len() }),
	};

	let mut standard: String = text
		.chars()
		.map(|ch| match ch {
			'-' => '+',
			'_' => '/',
			other => other,
		})
		.collect();
	standard.push_str(&"=".repeat(padding));

	Ok(STANDARD.decode(standard)?)
}
