use thiserror::Error;

use crate::TargetKind;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, ConfError>;

/// Errors produced while resolving and parsing configuration values.
#[derive(Debug, Error)]
pub enum ConfError {
	/// A required value was absent from the source.
	#[error("Configuration parameter '{name}' is not found")]
	MissingParameter {
		/// Name that was looked up.
		name: String,
	},
	/// Text could not be converted to the requested kind.
	#[error("Cannot parse {kind} from string value '{text}'")]
	Parse {
		/// Display name of the requested kind, `Nullable<..>` included.
		kind: String,
		/// Original untrimmed text, empty when the value was absent.
		text: String,
	},
	/// Text could not be deserialized as JSON of the requested type.
	#[error("Configuration parameter '{name}' should contain JSON value of type {type_name}: {source}")]
	InvalidJson {
		/// Name that was looked up.
		name: String,
		/// Rust type the value was deserialized into.
		type_name: &'static str,
		/// Underlying deserializer failure.
		#[source]
		source: serde_json::Error,
	},
	/// Base64Url text length leaves a single dangling character.
	#[error("invalid Base64Url length {len}")]
	InvalidBase64Length {
		/// Length of the offending text.
		len: usize,
	},
	/// Base64Url text contained invalid symbols or trailing bits.
	#[error("invalid Base64Url text: {0}")]
	Base64(#[from] base64::DecodeError),
	/// A dictionary source already holds a value for this name.
	#[error("another value was already specified for name '{name}'")]
	DuplicateName {
		/// Name as given by the caller.
		name: String,
	},
	/// Name is empty after normalization.
	#[error("'{name}' cannot be used as a value name")]
	InvalidName {
		/// Name as given by the caller.
		name: String,
	},
	/// Environment file could not be read or parsed.
	#[error("env file: {0}")]
	EnvFile(#[from] dotenvy::Error),
}

impl ConfError {
	/// Build a parse failure for `target`, echoing the raw text.
	pub fn parse(target: TargetKind, raw: Option<&str>) -> Self {
		Self::Parse {
			kind: target.to_string(),
			text: raw.unwrap_or_default().to_owned(),
		}
	}
}
