use std::collections::BTreeMap;

use crate::{ConfError, Result, ValueSource};

/// Name/value pairs held in memory.
///
/// With case-insensitive lookup, names are compared after Unicode lowercasing
/// while [`names`](Self::names) still reports them as first added.
#[derive(Debug, Clone, Default)]
pub struct DictionarySource {
	case_insensitive: bool,
	entries: BTreeMap<String, (String, String)>,
}

impl DictionarySource {
	/// Empty dictionary with the given name comparison.
	pub fn new(case_insensitive: bool) -> Self {
		Self {
			case_insensitive,
			entries: BTreeMap::new(),
		}
	}

	/// Build a dictionary from pairs, failing on the first duplicate name.
	pub fn from_pairs<I, K, V>(case_insensitive: bool, pairs: I) -> Result<Self>
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		let mut source = Self::new(case_insensitive);
		for (name, value) in pairs {
			source.add(name, value)?;
		}
		Ok(source)
	}

	/// Insert a new value. Names already present fail with [`ConfError::DuplicateName`].
	pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) -> Result<()> {
		let name = name.into();
		let key = self.key(&name);
		if self.entries.contains_key(&key) {
			return Err(ConfError::DuplicateName { name });
		}
		self.entries.insert(key, (name, value.into()));
		Ok(())
	}

	/// Insert or replace a value.
	pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
		let name = name.into();
		let key = self.key(&name);
		self.entries.insert(key, (name, value.into()));
	}

	/// Remove a value, returning it when present.
	pub fn remove(&mut self, name: &str) -> Option<String> {
		self.entries.remove(&self.key(name)).map(|(_, value)| value)
	}

	/// Drop every value.
	pub fn clear(&mut self) {
		self.entries.clear();
	}

	/// Stored names, as first added.
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

	fn key(&self, name: &str) -> String {
		if self.case_insensitive { name.to_lowercase() } else { name.to_owned() }
	}
}

impl ValueSource for DictionarySource {
	fn value(&self, name: &str) -> Option<String> {
		self.entries.get(&self.key(name)).map(|(_, value)| value.clone())
	}
}
