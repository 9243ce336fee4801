use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use crate::{ConfError, FromRaw, Result, TargetKind, Value, ValueSource, parse};

/// Typed lookups over any [`ValueSource`].
///
/// Absence is decided by the source alone: a value set to `""` is present and
/// goes through the parser.
pub trait ValueSourceExt: ValueSource {
	/// Whether the source has no value for `name`.
	fn is_absent(&self, name: &str) -> bool {
		self.value(name).is_none()
	}

	/// Resolve and parse a required value.
	fn get<T: FromRaw>(&self, name: &str) -> Result<T> {
		let raw = lookup(self, name)?;
		T::from_raw(Some(&raw)).inspect_err(|err| debug!(name, kind = %T::target(), %err, "value failed to parse"))
	}

	/// Resolve and parse a value, returning `default` untouched when absent.
	fn get_or<T: FromRaw>(&self, name: &str, default: T) -> Result<T> {
		match self.value(name) {
			Some(raw) => T::from_raw(Some(&raw)).inspect_err(|err| debug!(name, kind = %T::target(), %err, "value failed to parse")),
			None => {
				trace!(name, "value absent, using default");
				Ok(default)
			}
		}
	}

	/// Resolve and parse a value whose kind is chosen at runtime.
	fn get_kind(&self, name: &str, target: TargetKind) -> Result<Option<Value>> {
		let raw = lookup(self, name)?;
		parse(Some(&raw), target).inspect_err(|err| debug!(name, kind = %target, %err, "value failed to parse"))
	}

	/// Runtime-kind variant of [`get_or`](Self::get_or).
	fn get_kind_or(&self, name: &str, target: TargetKind, default: Option<Value>) -> Result<Option<Value>> {
		match self.value(name) {
			Some(raw) => parse(Some(&raw), target).inspect_err(|err| debug!(name, kind = %target, %err, "value failed to parse")),
			None => {
				trace!(name, "value absent, using default");
				Ok(default)
			}
		}
	}

	/// Resolve a required value holding JSON.
	fn get_json<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
		let raw = lookup(self, name)?;
		parse_json(name, &raw)
	}

	/// Resolve a JSON value, returning `default` untouched when absent.
	fn get_json_or<T: DeserializeOwned>(&self, name: &str, default: T) -> Result<T> {
		match self.value(name) {
			Some(raw) => parse_json(name, &raw),
			None => Ok(default),
		}
	}
}

impl<S: ValueSource + ?Sized> ValueSourceExt for S {}

fn lookup<S: ValueSource + ?Sized>(source: &S, name: &str) -> Result<String> {
	source.value(name).ok_or_else(|| {
		debug!(name, "value not found");
		ConfError::MissingParameter { name: name.to_owned() }
	})
}

fn parse_json<T: DeserializeOwned>(name: &str, raw: &str) -> Result<T> {
	serde_json::from_str(raw).map_err(|source| ConfError::InvalidJson {
		name: name.to_owned(),
		type_name: std::any::type_name::<T>(),
		source,
	})
}
