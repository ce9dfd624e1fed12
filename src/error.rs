/*!
# Flagpole: Errors.

Everything that can go wrong while declaring, parsing, or querying flags
ends up as a [`FlagError`]. Parse-time failures are routed through the
owning [`FlagSet`](crate::FlagSet)'s [`ErrorHandling`](crate::ErrorHandling)
mode before they reach the caller.
*/

use crate::ArgBound;



/// # Boxed Error.
///
/// This is what [`Value::set`](crate::Value::set) returns on failure, leaving
/// custom value types free to use whatever error they like.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;



#[derive(Debug, thiserror::Error)]
/// # Flag Error.
pub enum FlagError {
	#[error("unknown flag: {name}")]
	/// # Unknown Flag.
	///
	/// The name is reported as written, dashes and all.
	UnknownFlag {
		/// # Name (e.g. `--foo` or `-x`).
		name: String,
	},

	#[error("bad flag syntax: {arg}")]
	/// # Malformed Flag.
	///
	/// Things like `---x` or `--=x`.
	BadSyntax {
		/// # The Offending Argument.
		arg: String,
	},

	#[error("flag needs an argument: {name}")]
	/// # Missing Value.
	MissingValue {
		/// # Name (as written).
		name: String,
	},

	#[error("invalid argument {raw:?} for {name:?} flag: {source}")]
	/// # Invalid Value.
	///
	/// The flag's value rejected the raw string.
	InvalidValue {
		/// # Flag Name.
		name: String,

		/// # Raw Value.
		raw: String,

		/// # Underlying Cause.
		source: BoxError,
	},

	#[error("flag redefined: {name}")]
	/// # Name Conflict.
	NameConflict {
		/// # Normalized Name.
		name: String,
	},

	#[error("unable to redefine {shorthand:?} shorthand for {name:?}: it's already used for {existing:?}")]
	/// # Shorthand Conflict.
	ShorthandConflict {
		/// # Shorthand.
		shorthand: String,

		/// # Flag Being Declared.
		name: String,

		/// # Flag Already Using It.
		existing: String,
	},

	#[error("flag accessed but not defined: {name}")]
	/// # No Such Flag.
	NoSuchFlag {
		/// # Name.
		name: String,
	},

	#[error("trying to get {expected} value of flag {name:?} of type {actual}")]
	/// # Wrong Type.
	TypeMismatch {
		/// # Flag Name.
		name: String,

		/// # Requested Type Tag.
		expected: &'static str,

		/// # Declared Type Tag.
		actual: String,
	},

	#[error("expected {bound} {expected} arg(s), received {actual}")]
	/// # Positional Count.
	ArgCountViolation {
		/// # Kind of Bound.
		bound: ArgBound,

		/// # Bound Value.
		expected: usize,

		/// # Actual Positional Count.
		actual: usize,
	},

	#[error("{name}: {source}")]
	/// # Visitor Rejection.
	///
	/// A [`FlagSet::parse_all`](crate::FlagSet::parse_all) callback returned
	/// an error.
	Callback {
		/// # Flag Name.
		name: String,

		/// # Underlying Cause.
		source: BoxError,
	},

	#[error("help requested")]
	/// # Help Requested.
	///
	/// This is returned when `--help` or `-h` is passed but no such flag was
	/// declared. It isn't really a failure.
	HelpRequested,
}

impl FlagError {
	#[must_use]
	/// # Is Help?
	pub const fn is_help(&self) -> bool { matches!(self, Self::HelpRequested) }

	#[must_use]
	/// # Exit Code.
	///
	/// Help is a success (`0`); everything else is a usage error (`2`).
	pub const fn exit_code(&self) -> i32 {
		if self.is_help() { 0 } else { 2 }
	}
}
