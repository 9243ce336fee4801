mod dictionary;
mod dotenv;
mod env;
mod memory;

/// In-memory map with optional case-insensitive names.
pub use dictionary::DictionarySource;
/// Values loaded from `.env` text.
pub use dotenv::DotenvSource;
/// Process environment lookup.
pub use env::EnvSource;
/// Whitespace- and case-insensitive in-memory map.
pub use memory::MemorySource;

/// Lookup collaborator: returns the raw text stored under `name`, if any.
pub trait ValueSource {
	/// Raw value for `name`, or `None` when absent.
	fn value(&self, name: &str) -> Option<String>;
}

impl<S: ValueSource + ?Sized> ValueSource for &S {
	fn value(&self, name: &str) -> Option<String> {
		(**self).value(name)
	}
}
