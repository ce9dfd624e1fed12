/*!
# Flagpole: Values.

Every flag owns exactly one [`Value`]: a little box that knows how to
parse a raw string into itself, print itself back out, and name its type.
The parser never looks inside; it just hands over strings.

The built-in implementations write through a [`Handle`], a cheap, shared
cell that the caller keeps a copy of to read the result after parsing.
*/

mod count;
mod duration;
mod func;
mod map;
mod net;
mod scalar;
mod slice;

pub use count::CountValue;
pub use duration::{
	format_duration,
	parse_duration,
};
pub use func::FuncValue;
pub use map::{
	MapScalar,
	MapValue,
};
pub use net::IpNet;
pub use scalar::{
	Scalar,
	ScalarValue,
	Validator,
};
pub use slice::{
	ArrayValue,
	SliceValue,
};

use crate::BoxError;
use parking_lot::{
	RwLock,
	RwLockReadGuard,
};
use std::{
	any::Any,
	fmt,
	sync::Arc,
};



/// # Flag Value.
///
/// This is the one seam between the parser and the values it fills in.
///
/// The [`Display`](fmt::Display) output is the value's current string
/// representation. It need not match whatever was last passed to
/// [`Value::set`] verbatim, but feeding it back into `set` must not change
/// anything.
pub trait Value: fmt::Display + Send + Sync + 'static {
	/// # Set From String.
	///
	/// Called once per occurrence, in command-line order. Accumulating types
	/// decide for themselves whether that means replace, append, or bump.
	///
	/// ## Errors
	///
	/// Return an error if the raw string can't be coerced.
	fn set(&mut self, raw: &str) -> Result<(), BoxError>;

	/// # Type Tag.
	///
	/// A short name like `bool`, `int64`, or `stringSlice`, used by the
	/// typed getters and the usage table.
	fn type_tag(&self) -> &str;

	/// # Bool-Like?
	///
	/// Bool-like values can appear without a value, e.g. `--verbose`.
	fn is_bool_like(&self) -> bool { false }

	/// # No-Value Default.
	///
	/// The value to use when the flag is given without one. Declaring
	/// a flag copies this onto the [`Flag`](crate::Flag), where it can be
	/// overridden.
	fn no_value_default(&self) -> Option<&str> {
		if self.is_bool_like() { Some("true") }
		else { None }
	}

	/// # As Any.
	///
	/// This lets the typed getters downcast back to a known value type.
	fn as_any(&self) -> &dyn Any;

	/// # Boxed Clone.
	///
	/// Used when flags are copied from one set into another. The built-in
	/// types share their [`Handle`], so both copies still write to the same
	/// destination.
	fn clone_box(&self) -> Box<dyn Value>;
}

impl Clone for Box<dyn Value> {
	fn clone(&self) -> Self { self.clone_box() }
}

impl fmt::Debug for dyn Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Value")
			.field("type", &self.type_tag())
			.field("value", &self.to_string())
			.finish()
	}
}



#[derive(Debug, Default)]
/// # Shared Destination.
///
/// A handle is what the typed declaration methods return, and what the
/// `*_var` methods write into. Clones point at the same value.
///
/// ## Examples
///
/// ```
/// use flagpole::FlagSet;
///
/// let mut flags = FlagSet::new("demo");
/// let port = flags.u16("port", 8080, "listen port").unwrap();
/// flags.parse(["--port=9000"]).unwrap();
/// assert_eq!(port.get(), 9000);
/// ```
pub struct Handle<T>(Arc<RwLock<T>>);

impl<T> Clone for Handle<T> {
	fn clone(&self) -> Self { Self(Arc::clone(&self.0)) }
}

impl<T> Handle<T> {
	#[must_use]
	/// # New.
	pub fn new(value: T) -> Self { Self(Arc::new(RwLock::new(value))) }

	/// # Read.
	///
	/// Borrow the current value.
	pub fn read(&self) -> RwLockReadGuard<'_, T> { self.0.read() }

	/// # Replace.
	///
	/// Swap in a new value, returning the old one.
	pub fn replace(&self, value: T) -> T {
		std::mem::replace(&mut *self.0.write(), value)
	}

	/// # Update.
	///
	/// Mutate the value in place.
	pub fn update<F, R>(&self, cb: F) -> R
	where F: FnOnce(&mut T) -> R { cb(&mut self.0.write()) }

	#[must_use]
	/// # Same Destination?
	pub fn ptr_eq(&self, other: &Self) -> bool { Arc::ptr_eq(&self.0, &other.0) }
}

impl<T: Clone> Handle<T> {
	#[must_use]
	/// # Get (Cloned).
	pub fn get(&self) -> T { self.0.read().clone() }
}



#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
/// # Value Error.
///
/// The coercion errors raised by the built-in value types.
pub enum ValueError {
	#[error("invalid {kind} syntax: {raw:?}")]
	/// # Unparseable.
	Syntax {
		/// # Target Type.
		kind: &'static str,

		/// # Raw Input.
		raw: String,
	},

	#[error("{raw:?} is out of range for {kind}")]
	/// # Out of Range.
	Range {
		/// # Target Type.
		kind: &'static str,

		/// # Raw Input.
		raw: String,
	},

	#[error("{raw:?} must be formatted as key=value")]
	/// # Not a Pair.
	Pair {
		/// # Raw Input.
		raw: String,
	},

	#[error("parse error on {raw:?}: {reason}")]
	/// # Bad CSV.
	Csv {
		/// # Raw Input.
		raw: String,

		/// # What Went Wrong.
		reason: &'static str,
	},

	#[error("{0}")]
	/// # Rejected by a Validator.
	Invalid(String),
}



#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn t_handle() {
		let a = Handle::new(5_u8);
		let b = a.clone();
		assert!(a.ptr_eq(&b));

		assert_eq!(b.replace(6), 5);
		assert_eq!(a.get(), 6);

		a.update(|v| *v += 1);
		assert_eq!(*b.read(), 7);

		assert!(! a.ptr_eq(&Handle::new(7)));
	}

	#[test]
	fn t_boxed_clone() {
		let h = Handle::new(String::new());
		let mut a: Box<dyn Value> = Box::new(ScalarValue::new(h.clone()));
		let mut b = a.clone();

		a.set("one").unwrap();
		assert_eq!(b.to_string(), "one", "Clones should share a destination.");
		b.set("two").unwrap();
		assert_eq!(h.get(), "two");
		assert_eq!(format!("{a:?}"), r#"Value { type: "string", value: "two" }"#);
	}
}
