use crate::ValueSource;

/// Reads the process environment, optionally under a fixed name prefix.
///
/// Variables that are unset or not valid Unicode are absent.
#[derive(Debug, Clone, Default)]
pub struct EnvSource {
	prefix: Option<String>,
}

impl EnvSource {
	/// Look names up verbatim.
	pub fn new() -> Self {
		Self::default()
	}

	/// Look `name` up as `{prefix}{name}`.
	pub fn with_prefix(prefix: impl Into<String>) -> Self {
		Self { prefix: Some(prefix.into()) }
	}

	/// Configured prefix, if any.
	pub fn prefix(&self) -> Option<&str> {
		self.prefix.as_deref()
	}
}

impl ValueSource for EnvSource {
	fn value(&self, name: &str) -> Option<String> {
		match &self.prefix {
			Some(prefix) => std::env::var(format!("{prefix}{name}")).ok(),
			None => std::env::var(name).ok(),
		}
	}
}
