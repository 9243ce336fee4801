#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

mod cmd;

#[derive(Parser)]
#[command(name = "confval", about = "Typed configuration value inspection tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Resolve and parse one value.
	Get(cmd::get::Args),
	/// Parse several values from an env file.
	Check(cmd::check::Args),
	/// Encode or decode Base64Url text.
	B64(cmd::b64::Args),
}

fn main() {
	Registry::default()
		.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
		.with(EnvFilter::try_from_default_env().unwrap_or(EnvFilter::new("warn")))
		.init();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> confval::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Get(args) => cmd::get::run(args),
		Commands::Check(args) => cmd::check::run(args),
		Commands::B64(args) => cmd::b64::run(args),
	}
}
