use std::collections::BTreeMap;

use crate::{ConfError, Result, ValueSource};

/// Map whose names ignore case and all whitespace.
///
/// `" Max Size "`, `"maxsize"` and `"MAX SIZE"` address the same value.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
	entries: BTreeMap<String, (String, String)>,
}

impl MemorySource {
	/// Empty source.
	pub fn new() -> Self {
		Self::default()
	}

	/// Insert a new value.
	///
	/// Fails with [`ConfError::InvalidName`] when the name is blank and with
	/// [`ConfError::DuplicateName`] when its normalized form is already stored.
	pub fn add(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
		let key = key(name)?;
		if self.entries.contains_key(&key) {
			return Err(ConfError::DuplicateName { name: name.to_owned() });
		}
		self.entries.insert(key, (name.to_owned(), value.into()));
		Ok(())
	}

	/// Store a value, replacing any previous one under the same normalized name.
	pub fn set(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
		let key = key(name)?;
		self.entries.insert(key, (name.to_owned(), value.into()));
		Ok(())
	}

	/// Remove a value, returning it when present.
	pub fn remove(&mut self, name: &str) -> Option<String> {
		self.entries.remove(&normalize(name)?).map(|(_, value)| value)
	}

	/// Drop every value.
	pub fn clear(&mut self) {
		self.entries.clear();
	}

	/// Stored names, as last written.
	pub fn names(&self) -> Vec<&str> {
		self.entries.values().map(|(name, _)| name.as_str()).collect()
	}

	/// Number of stored values.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether no values are stored.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl ValueSource for MemorySource {
	fn value(&self, name: &str) -> Option<String> {
		self.entries.get(&normalize(name)?).map(|(_, value)| value.clone())
	}
}

fn key(name: &str) -> Result<String> {
	normalize(name).ok_or_else(|| ConfError::InvalidName { name: name.to_owned() })
}

fn normalize(name: &str) -> Option<String> {
	let key: String = name.chars().filter(|ch| !ch.is_whitespace()).flat_map(char::to_lowercase).collect();
	(!key.is_empty()).then_some(key)
}
