//! Typed parsing of raw configuration strings.
//!
//! Raw values come from a [`ValueSource`] (dictionary, `.env` file, process
//! environment). [`ValueSourceExt`] resolves a name and hands the text to
//! [`parse`] or a [`FromRaw`] type, which apply one leniency policy: trimming,
//! case-insensitive keywords and nullable semantics for blank input.

/// URL-safe, unpadded Base64 codec.
pub mod base64url;
mod decimal;
mod error;
mod kind;
mod parse;
mod resolve;
mod source;
mod value;

/// Fixed-point decimal kind.
pub use decimal::{Decimal, MAX_SCALE};
/// Error and result aliases.
pub use error::{ConfError, Result};
/// Kind model and enumeration descriptors.
pub use kind::{EnumDescriptor, EnumRepr, Kind, TargetKind};
/// Parser entry points and typed front end.
pub use parse::{ConfigEnum, FromRaw, parse, parse_enum, parse_enum_nullable};
/// Name resolution over a source.
pub use resolve::ValueSourceExt;
/// Lookup collaborators.
pub use source::{DictionarySource, DotenvSource, EnvSource, MemorySource, ValueSource};
/// Parsed value types.
pub use value::{EnumValue, Value};
