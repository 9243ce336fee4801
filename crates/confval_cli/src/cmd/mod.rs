/// Base64Url encode/decode command.
pub mod b64;
/// Multi-value env file check command.
pub mod check;
/// Single value lookup command.
pub mod get;
/// Shared argument types and output helpers.
pub mod util;
