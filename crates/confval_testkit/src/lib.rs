//! Shared test helpers for workspace crates.

use std::path::{Path, PathBuf};
use std::process::Output;

const FIXTURES_DIR: &str = "fixtures";

/// Nearest ancestor of this crate that holds the shared `fixtures/` directory.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.ancestors()
		.find(|dir| dir.join(FIXTURES_DIR).is_dir())
		.unwrap_or(manifest_dir)
		.to_path_buf()
}

/// Path of a named file under the shared `fixtures/` directory.
pub fn fixture_path(name: &str) -> PathBuf {
	workspace_root().join(FIXTURES_DIR).join(name)
}

/// Parse a successful command's stdout as JSON, panicking with its stderr otherwise.
pub fn stdout_json(output: &Output) -> serde_json::Value {
	assert!(
		output.status.success(),
		"command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}
