use std::path::Path;
use std::str::FromStr;

use clap::ValueEnum;
use confval::{DotenvSource, EnvSource, Kind, TargetKind, Value, ValueSource};
use serde::Serialize;

/// Kinds selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
	Text,
	Bool,
	Byte,
	#[value(name = "i16")]
	Int16,
	#[value(name = "i32")]
	Int32,
	#[value(name = "i64")]
	Int64,
	#[value(name = "f32")]
	Float32,
	#[value(name = "f64")]
	Float64,
	Decimal,
	Duration,
	Timestamp,
	Uuid,
}

impl From<KindArg> for Kind {
	fn from(value: KindArg) -> Self {
		match value {
			KindArg::Text => Kind::Text,
			KindArg::Bool => Kind::Boolean,
			KindArg::Byte => Kind::Byte,
			KindArg::Int16 => Kind::Int16,
			KindArg::Int32 => Kind::Int32,
			KindArg::Int64 => Kind::Int64,
			KindArg::Float32 => Kind::Float32,
			KindArg::Float64 => Kind::Float64,
			KindArg::Decimal => Kind::Decimal,
			KindArg::Duration => Kind::Duration,
			KindArg::Timestamp => Kind::Timestamp,
			KindArg::Uuid => Kind::UniqueId,
		}
	}
}

/// `NAME:kind` pair, nullable when the kind ends with `?`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueSpec {
	pub name: String,
	pub target: TargetKind,
}

impl FromStr for ValueSpec {
	type Err = String;

	fn from_str(text: &str) -> Result<Self, Self::Err> {
		let (name, kind) = text
			.rsplit_once(':')
			.ok_or_else(|| format!("expected NAME:kind, got '{text}'"))?;
		if name.is_empty() {
			return Err(format!("missing name in '{text}'"));
		}

		let (kind, nullable) = match kind.strip_suffix('?') {
			Some(kind) => (kind, true),
			None => (kind, false),
		};
		let kind = Kind::from(<KindArg as ValueEnum>::from_str(kind, true)?);
		let target = if nullable { kind.nullable() } else { kind.required() };

		Ok(Self {
			name: name.to_owned(),
			target,
		})
	}
}

/// Open the env file when given, else the process environment under `prefix`.
pub fn open_source(env_file: Option<&Path>, prefix: Option<String>) -> confval::Result<Box<dyn ValueSource>> {
	let source: Box<dyn ValueSource> = match (env_file, prefix) {
		(Some(path), _) => Box::new(DotenvSource::from_path(path)?),
		(None, Some(prefix)) => Box::new(EnvSource::with_prefix(prefix)),
		(None, None) => Box::new(EnvSource::new()),
	};
	Ok(source)
}

/// JSON rendering of a parsed value: numbers and booleans stay native, the rest is display text.
pub fn value_json(value: &Value) -> serde_json::Value {
	match value {
		Value::Text(text) => serde_json::Value::from(text.as_str()),
		Value::Boolean(flag) => serde_json::Value::from(*flag),
		Value::Byte(number) => serde_json::Value::from(*number),
		Value::Int16(number) => serde_json::Value::from(*number),
		Value::Int32(number) => serde_json::Value::from(*number),
		Value::Int64(number) => serde_json::Value::from(*number),
		Value::Float32(number) if number.is_finite() => serde_json::Value::from(f64::from(*number)),
		Value::Float64(number) if number.is_finite() => serde_json::Value::from(*number),
		other => serde_json::Value::from(other.to_string()),
	}
}

pub fn emit_json<T: Serialize>(value: &T) {
	match serde_json::to_string_pretty(value) {
		Ok(text) => println!("{text}"),
		Err(err) => eprintln!("error: failed to encode json output: {err}"),
	}
}
