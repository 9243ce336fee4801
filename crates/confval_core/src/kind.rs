use std::fmt;

/// Closed set of value kinds the parser can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
	/// Arbitrary text, returned untrimmed.
	Text,
	/// Case-insensitive `true` / `false`.
	Boolean,
	/// Unsigned 8-bit integer.
	Byte,
	/// Signed 16-bit integer.
	Int16,
	/// Signed 32-bit integer.
	Int32,
	/// Signed 64-bit integer.
	Int64,
	/// 32-bit binary float.
	Float32,
	/// 64-bit binary float.
	Float64,
	/// 96-bit base-10 decimal.
	Decimal,
	/// Signed elapsed time.
	Duration,
	/// Calendar date and time without zone.
	Timestamp,
	/// 128-bit identifier.
	UniqueId,
	/// Member of a closed enumeration.
	Enum(&'static EnumDescriptor),
}

impl Kind {
	/// Name used in diagnostics.
	pub fn name(&self) -> &'static str {
		match self {
			Self::Text => "Text",
			Self::Boolean => "Boolean",
			Self::Byte => "Byte",
			Self::Int16 => "Int16",
			Self::Int32 => "Int32",
			Self::Int64 => "Int64",
			Self::Float32 => "Float32",
			Self::Float64 => "Float64",
			Self::Decimal => "Decimal",
			Self::Duration => "Duration",
			Self::Timestamp => "Timestamp",
			Self::UniqueId => "UniqueId",
			Self::Enum(descriptor) => descriptor.name,
		}
	}

	/// Target where absence is an error.
	pub fn required(self) -> TargetKind {
		TargetKind::Required(self)
	}

	/// Target where absence and blank text parse to no value.
	pub fn nullable(self) -> TargetKind {
		TargetKind::Nullable(self)
	}
}

impl fmt::Display for Kind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Requested output of one parse call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
	/// A value must be produced.
	Required(Kind),
	/// Absent or blank input yields no value.
	Nullable(Kind),
}

impl TargetKind {
	/// Wrapped value kind.
	pub fn kind(&self) -> Kind {
		match self {
			Self::Required(kind) | Self::Nullable(kind) => *kind,
		}
	}

	/// Whether absence is a valid outcome.
	pub fn is_nullable(&self) -> bool {
		matches!(self, Self::Nullable(_))
	}
}

impl fmt::Display for TargetKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Required(kind) => write!(f, "{kind}"),
			Self::Nullable(kind) => write!(f, "Nullable<{kind}>"),
		}
	}
}

/// Integer type backing an enumeration's ordinals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnumRepr {
	/// `i8`.
	I8,
	/// `u8`.
	U8,
	/// `i16`.
	I16,
	/// `u16`.
	U16,
	/// `i32`.
	#[default]
	I32,
	/// `u32`.
	U32,
	/// `i64`.
	I64,
}

impl EnumRepr {
	/// Whether `ordinal` fits the backing type.
	pub fn contains(self, ordinal: i64) -> bool {
		match self {
			Self::I8 => i8::try_from(ordinal).is_ok(),
			Self::U8 => u8::try_from(ordinal).is_ok(),
			Self::I16 => i16::try_from(ordinal).is_ok(),
			Self::U16 => u16::try_from(ordinal).is_ok(),
			Self::I32 => i32::try_from(ordinal).is_ok(),
			Self::U32 => u32::try_from(ordinal).is_ok(),
			Self::I64 => true,
		}
	}
}

/// Static description of an enumeration: its name and declared members.
#[derive(Debug, PartialEq, Eq)]
pub struct EnumDescriptor {
	/// Enumeration name used in diagnostics.
	pub name: &'static str,
	/// Declared `(member name, ordinal)` pairs.
	pub members: &'static [(&'static str, i64)],
	/// Ordinal width; ordinal text outside it fails to parse.
	pub repr: EnumRepr,
}

impl EnumDescriptor {
	/// Describe an `i32`-backed enumeration.
	pub const fn new(name: &'static str, members: &'static [(&'static str, i64)]) -> Self {
		Self {
			name,
			members,
			repr: EnumRepr::I32,
		}
	}

	/// Same enumeration with a different backing type.
	pub const fn with_repr(self, repr: EnumRepr) -> Self {
		Self { repr, ..self }
	}

	/// Look up a member ordinal by case-insensitive name.
	pub fn ordinal_of(&self, member: &str) -> Option<i64> {
		self.members
			.iter()
			.find(|(name, _)| name.eq_ignore_ascii_case(member))
			.map(|(_, ordinal)| *ordinal)
	}

	/// Look up the first member declared with `ordinal`.
	pub fn name_of(&self, ordinal: i64) -> Option<&'static str> {
		self.members.iter().find(|(_, value)| *value == ordinal).map(|(name, _)| *name)
	}
}
