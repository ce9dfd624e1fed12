/*!
# Flagpole: Callback Values.
*/

use crate::BoxError;
use std::{
	any::Any,
	fmt,
	sync::Arc,
};
use super::Value;



/// # Callback.
type Callback = Arc<dyn Fn(&str) -> Result<(), BoxError> + Send + Sync>;



#[derive(Clone)]
/// # Func Value.
///
/// Instead of storing anything, each occurrence is handed straight to a
/// callback. The bool-like flavor can be given without a value, in which
/// case the callback receives `"true"`.
///
/// ## Examples
///
/// ```
/// use flagpole::{FlagSet, Handle};
///
/// let seen = Handle::new(Vec::<String>::new());
/// let sink = seen.clone();
///
/// let mut flags = FlagSet::new("demo");
/// flags.func("tag", "add a tag", move |s| {
///     sink.update(|v| v.push(s.to_owned()));
///     Ok(())
/// }).unwrap();
///
/// flags.parse(["--tag=a", "--tag", "b"]).unwrap();
/// assert_eq!(seen.get(), ["a", "b"]);
/// ```
pub struct FuncValue {
	/// # Callback.
	cb: Callback,

	/// # Bool-Like?
	bool_like: bool,
}

impl fmt::Display for FuncValue {
	fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result { Ok(()) }
}

impl FuncValue {
	#[must_use]
	/// # New (Value Required).
	pub fn new<F>(cb: F) -> Self
	where F: Fn(&str) -> Result<(), BoxError> + Send + Sync + 'static {
		Self { cb: Arc::new(cb), bool_like: false }
	}

	#[must_use]
	/// # New (Bool-Like).
	pub fn new_bool<F>(cb: F) -> Self
	where F: Fn(&str) -> Result<(), BoxError> + Send + Sync + 'static {
		Self { cb: Arc::new(cb), bool_like: true }
	}
}

impl Value for FuncValue {
	fn set(&mut self, raw: &str) -> Result<(), BoxError> { (self.cb)(raw) }

	fn type_tag(&self) -> &str {
		if self.bool_like { "boolfunc" } else { "func" }
	}

	fn is_bool_like(&self) -> bool { self.bool_like }
	fn as_any(&self) -> &dyn Any { self }
	fn clone_box(&self) -> Box<dyn Value> { Box::new(self.clone()) }
}
