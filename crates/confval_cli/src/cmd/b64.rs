use clap::Subcommand;
use confval::base64url;

#[derive(clap::Args)]
pub struct Args {
	#[command(subcommand)]
	pub action: Action,
}

#[derive(Subcommand)]
pub enum Action {
	/// Encode UTF-8 text.
	Encode { text: String },
	/// Decode to UTF-8 text, replacing invalid sequences.
	Decode { text: String },
}

/// Run a Base64Url conversion.
pub fn run(args: Args) -> confval::Result<()> {
	match args.action {
		Action::Encode { text } => println!("{}", base64url::encode(text.as_bytes())),
		Action::Decode { text } => {
			let bytes = base64url::decode(&text)?;
			println!("{}", String::from_utf8_lossy(&bytes));
		}
	}
	Ok(())
}
