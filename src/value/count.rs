/*!
# Flagpole: Counters.
*/

use crate::BoxError;
use std::{
	any::Any,
	fmt,
};
use super::{
	Handle,
	Scalar,
	Value,
};



#[derive(Clone)]
/// # Count Value.
///
/// Each bare occurrence bumps the total by one, so `-vvv` means `3`. An
/// explicit number (`--verbose=3`) assigns outright.
///
/// ## Examples
///
/// ```
/// use flagpole::FlagSet;
///
/// let mut flags = FlagSet::new("demo");
/// let verbose = flags.count_p("verbose", "v", "more noise").unwrap();
///
/// flags.parse(["-vv", "--verbose"]).unwrap();
/// assert_eq!(verbose.get(), 3);
/// ```
pub struct CountValue(Handle<isize>);

impl fmt::Display for CountValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", *self.0.read())
	}
}

impl CountValue {
	#[must_use]
	/// # New.
	pub const fn new(dest: Handle<isize>) -> Self { Self(dest) }

	#[must_use]
	/// # Destination.
	pub const fn handle(&self) -> &Handle<isize> { &self.0 }
}

impl Value for CountValue {
	fn set(&mut self, raw: &str) -> Result<(), BoxError> {
		if raw == "+1" { self.0.update(|n| *n = n.saturating_add(1)); }
		else {
			let n = <isize as Scalar>::parse(raw)?;
			self.0.replace(n);
		}
		Ok(())
	}

	fn type_tag(&self) -> &str { "count" }
	fn no_value_default(&self) -> Option<&str> { Some("+1") }
	fn as_any(&self) -> &dyn Any { self }
	fn clone_box(&self) -> Box<dyn Value> { Box::new(self.clone()) }
}
