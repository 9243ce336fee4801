use std::path::PathBuf;

use confval::{Kind, ValueSourceExt, parse};
use serde::Serialize;
use tracing::debug;

use crate::cmd::util::{KindArg, emit_json, open_source, value_json};

#[derive(clap::Args)]
pub struct Args {
	pub name: String,
	#[arg(long, value_enum)]
	pub kind: KindArg,
	#[arg(long)]
	pub nullable: bool,
	#[arg(long)]
	pub env_file: Option<PathBuf>,
	#[arg(long, conflicts_with = "env_file")]
	pub prefix: Option<String>,
	#[arg(long)]
	pub default: Option<String>,
	#[arg(long)]
	pub json: bool,
}

#[derive(Serialize)]
struct GetJson {
	name: String,
	kind: String,
	present: bool,
	value: Option<serde_json::Value>,
}

/// Resolve one value and print it parsed.
pub fn run(args: Args) -> confval::Result<()> {
	let Args {
		name,
		kind,
		nullable,
		env_file,
		prefix,
		default,
		json,
	} = args;

	let kind = Kind::from(kind);
	let target = if nullable { kind.nullable() } else { kind.required() };
	let source = open_source(env_file.as_deref(), prefix)?;

	let value = match default {
		Some(default) => {
			debug!(%name, %default, "parsing default");
			let default = parse(Some(&default), target)?;
			source.get_kind_or(&name, target, default)?
		}
		None => source.get_kind(&name, target)?,
	};

	if json {
		let payload = GetJson {
			present: !source.is_absent(&name),
			kind: target.to_string(),
			name,
			value: value.as_ref().map(value_json),
		};
		emit_json(&payload);
		return Ok(());
	}

	match value {
		Some(value) => println!("{value}"),
		None => println!("null"),
	}
	Ok(())
}
