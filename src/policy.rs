/*!
# Flagpole: Parse Policy.

These knobs decide what a [`FlagSet`](crate::FlagSet) does when something
goes sideways, and what it is willing to overlook.
*/

use std::fmt;



#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
/// # Error Handling Mode.
pub enum ErrorHandling {
	#[default]
	/// # Return the Error.
	///
	/// The walk stops and the error is handed back. Anything already applied
	/// stays applied.
	Continue,

	/// # Print and Exit.
	///
	/// The error and usage are written to the output sink and the process
	/// exits with status `2` (or `0` for help requests).
	Exit,

	/// # Print and Panic.
	Panic,
}



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Tolerance.
///
/// What to quietly skip over rather than treat as an error.
pub struct Tolerance {
	/// # Skip Unknown Flags.
	pub unknown_flags: bool,

	/// # Skip Unknown Values.
	///
	/// When an unknown flag is skipped and the token after it doesn't look
	/// like a flag, skip that token too. Has no effect unless
	/// `unknown_flags` is set.
	pub unknown_values: bool,
}

impl Default for Tolerance {
	fn default() -> Self {
		Self {
			unknown_flags: false,
			unknown_values: true,
		}
	}
}

impl Tolerance {
	#[must_use]
	/// # Lenient.
	///
	/// Skip unknown flags and anything that looks like their value.
	pub const fn lenient() -> Self {
		Self {
			unknown_flags: true,
			unknown_values: true,
		}
	}
}



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Positional Bound Kind.
pub enum ArgBound {
	/// # Exactly N.
	Exactly,

	/// # N or More.
	AtLeast,

	/// # N or Fewer.
	AtMost,
}

impl fmt::Display for ArgBound {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl ArgBound {
	#[must_use]
	/// # As String Slice.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Exactly => "exactly",
			Self::AtLeast => "at least",
			Self::AtMost => "at most",
		}
	}
}



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Positional Count Requirement.
///
/// These are checked after the walk finishes, never during.
pub struct ArgCount {
	/// # Kind.
	pub bound: ArgBound,

	/// # Count.
	pub n: usize,
}

impl ArgCount {
	#[must_use]
	/// # Exactly N.
	pub const fn exactly(n: usize) -> Self { Self { bound: ArgBound::Exactly, n } }

	#[must_use]
	/// # At Least N.
	pub const fn at_least(n: usize) -> Self { Self { bound: ArgBound::AtLeast, n } }

	#[must_use]
	/// # At Most N.
	pub const fn at_most(n: usize) -> Self { Self { bound: ArgBound::AtMost, n } }

	#[must_use]
	/// # Satisfied?
	pub const fn check(self, actual: usize) -> bool {
		match self.bound {
			ArgBound::Exactly => actual == self.n,
			ArgBound::AtLeast => actual >= self.n,
			ArgBound::AtMost => actual <= self.n,
		}
	}
}



#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn t_arg_count() {
		assert!(ArgCount::exactly(2).check(2));
		assert!(! ArgCount::exactly(2).check(3));
		assert!(ArgCount::at_least(1).check(4));
		assert!(! ArgCount::at_least(1).check(0));
		assert!(ArgCount::at_most(1).check(0));
		assert!(! ArgCount::at_most(1).check(2));
	}

	#[test]
	fn t_tolerance() {
		let t = Tolerance::default();
		assert!(! t.unknown_flags, "Unknown flags should be errors by default.");
		assert!(t.unknown_values);
		assert!(Tolerance::lenient().unknown_flags);
	}
}
