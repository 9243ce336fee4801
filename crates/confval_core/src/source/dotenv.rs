use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::{Result, ValueSource};

/// Values read from `.env` syntax without touching the process environment.
///
/// A name assigned more than once keeps its last value.
#[derive(Debug, Clone, Default)]
pub struct DotenvSource {
	values: BTreeMap<String, String>,
}

impl DotenvSource {
	/// Load a `.env` file.
	pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let source = Self::collect(dotenvy::from_path_iter(path)?)?;
		debug!(path = %path.display(), count = source.values.len(), "loaded env file");
		Ok(source)
	}

	/// Load `.env` content from a reader.
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		Self::collect(dotenvy::from_read_iter(reader))
	}

	/// Load `.env` content from a string.
	pub fn parse(text: &str) -> Result<Self> {
		Self::from_reader(text.as_bytes())
	}

	/// Names defined by the file, sorted.
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.values.keys().map(String::as_str)
	}

	fn collect<I>(items: I) -> Result<Self>
	where
		I: Iterator<Item = dotenvy::Result<(String, String)>>,
	{
		let mut values = BTreeMap::new();
		for item in items {
			let (name, value) = item?;
			values.insert(name, value);
		}
		Ok(Self { values })
	}
}

impl ValueSource for DotenvSource {
	fn value(&self, name: &str) -> Option<String> {
		self.values.get(name).cloned()
	}
}
