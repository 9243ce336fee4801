use std::path::PathBuf;

use confval::{DotenvSource, ValueSourceExt};
use serde::Serialize;

use crate::cmd::util::{ValueSpec, emit_json, value_json};

#[derive(clap::Args)]
pub struct Args {
	pub env_file: PathBuf,
	#[arg(required = true, value_name = "NAME:KIND")]
	pub specs: Vec<ValueSpec>,
	#[arg(long)]
	pub json: bool,
}

#[derive(Serialize)]
struct CheckJson {
	path: String,
	ok: bool,
	values: Vec<CheckValueJson>,
}

#[derive(Serialize)]
struct CheckValueJson {
	name: String,
	kind: String,
	ok: bool,
	value: Option<serde_json::Value>,
	error: Option<String>,
}

/// Parse every requested name from an env file, failing if any value does not parse.
pub fn run(args: Args) -> confval::Result<()> {
	let Args { env_file, specs, json } = args;

	let source = DotenvSource::from_path(&env_file)?;
	let results: Vec<_> = specs
		.into_iter()
		.map(|spec| {
			let result = source.get_kind(&spec.name, spec.target);
			(spec, result)
		})
		.collect();

	if json {
		let values: Vec<CheckValueJson> = results
			.iter()
			.map(|(spec, result)| CheckValueJson {
				name: spec.name.clone(),
				kind: spec.target.to_string(),
				ok: result.is_ok(),
				value: result.as_ref().ok().and_then(|value| value.as_ref().map(value_json)),
				error: result.as_ref().err().map(ToString::to_string),
			})
			.collect();
		emit_json(&CheckJson {
			path: env_file.display().to_string(),
			ok: values.iter().all(|item| item.ok),
			values,
		});
	} else {
		println!("name\tkind\tresult");
		for (spec, result) in &results {
			let rendered = match result {
				Ok(Some(value)) => value.to_string(),
				Ok(None) => "null".to_owned(),
				Err(err) => format!("error: {err}"),
			};
			println!("{}\t{}\t{}", spec.name, spec.target, rendered);
		}
	}

	match results.into_iter().find_map(|(_, result)| result.err()) {
		Some(err) => Err(err),
		None => Ok(()),
	}
}
