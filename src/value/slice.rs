/*!
# Flagpole: List Values.
*/

use crate::{
	BoxError,
	csv,
};
use std::{
	any::Any,
	fmt,
	sync::Arc,
};
use super::{
	Handle,
	Scalar,
	Validator,
	Value,
	ValueError,
};



/// # Slice Value.
///
/// A list of [`Scalar`] items. Each occurrence of the flag is read as one
/// comma-separated record (double quotes can protect embedded commas). The
/// first occurrence replaces the default; later ones append.
///
/// ## Examples
///
/// ```
/// use flagpole::FlagSet;
///
/// let mut flags = FlagSet::new("demo");
/// let ids = flags.i32_slice("ids", vec![9], "ids to process").unwrap();
///
/// flags.parse(["--ids=1,2", "--ids", "3"]).unwrap();
/// assert_eq!(ids.get(), vec![1, 2, 3]);
/// ```
pub struct SliceValue<T: Scalar> {
	/// # Destination.
	dest: Handle<Vec<T>>,

	/// # Touched?
	changed: bool,

	/// # Validators.
	validators: Vec<Validator<T>>,
}

impl<T: Scalar> Clone for SliceValue<T> {
	fn clone(&self) -> Self {
		Self {
			dest: self.dest.clone(),
			changed: self.changed,
			validators: self.validators.clone(),
		}
	}
}

impl<T: Scalar> fmt::Display for SliceValue<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let dest = self.dest.read();
		write!(f, "[{}]", csv::write_record(dest.iter().map(Scalar::render)))
	}
}

impl<T: Scalar> SliceValue<T> {
	#[must_use]
	/// # New.
	pub const fn new(dest: Handle<Vec<T>>) -> Self {
		Self { dest, changed: false, validators: Vec::new() }
	}

	#[must_use]
	/// # With Validator.
	///
	/// The check is run against each item individually.
	pub fn with_validator<F>(mut self, cb: F) -> Self
	where F: Fn(&T) -> Result<(), String> + Send + Sync + 'static {
		self.validators.push(Arc::new(cb));
		self
	}

	#[must_use]
	/// # Destination.
	pub const fn handle(&self) -> &Handle<Vec<T>> { &self.dest }

	/// # Append One.
	///
	/// Parse and push a single item, bypassing the CSV handling.
	///
	/// ## Errors
	///
	/// Returns an error if the item is invalid.
	pub fn append(&mut self, raw: &str) -> Result<(), ValueError> {
		let v = self.parse_one(raw)?;
		self.dest.update(|d| d.push(v));
		Ok(())
	}

	/// # Replace All.
	///
	/// Parse every item and swap them in wholesale. Nothing is stored unless
	/// every item is valid.
	///
	/// ## Errors
	///
	/// Returns the first item error encountered.
	pub fn replace<I, S>(&mut self, items: I) -> Result<(), ValueError>
	where I: IntoIterator<Item=S>, S: AsRef<str> {
		let items = items.into_iter()
			.map(|s| self.parse_one(s.as_ref()))
			.collect::<Result<Vec<T>, ValueError>>()?;
		self.dest.replace(items);
		Ok(())
	}

	#[must_use]
	/// # Items as Strings.
	pub fn get_slice(&self) -> Vec<String> {
		self.dest.read().iter().map(Scalar::render).collect()
	}

	/// # Parse and Validate One.
	fn parse_one(&self, raw: &str) -> Result<T, ValueError> {
		let v = T::parse(raw)?;
		for cb in &self.validators { cb(&v).map_err(ValueError::Invalid)?; }
		Ok(v)
	}
}

impl<T: Scalar> Value for SliceValue<T> {
	fn set(&mut self, raw: &str) -> Result<(), BoxError> {
		let fields =
			if raw.is_empty() { Vec::new() }
			else { csv::read_record(raw)? };

		let items = fields.iter()
			.map(|s| self.parse_one(s))
			.collect::<Result<Vec<T>, ValueError>>()?;

		if self.changed { self.dest.update(|d| d.extend(items)); }
		else {
			self.dest.replace(items);
			self.changed = true;
		}
		Ok(())
	}

	fn type_tag(&self) -> &str { T::SLICE_TAG }
	fn as_any(&self) -> &dyn Any { self }
	fn clone_box(&self) -> Box<dyn Value> { Box::new(self.clone()) }
}



#[derive(Clone)]
/// # Array Value.
///
/// Like a string [`SliceValue`], except each occurrence is taken verbatim,
/// commas and all.
pub struct ArrayValue {
	/// # Destination.
	dest: Handle<Vec<String>>,

	/// # Touched?
	changed: bool,
}

impl fmt::Display for ArrayValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[{}]", csv::write_record(self.dest.read().iter()))
	}
}

impl ArrayValue {
	#[must_use]
	/// # New.
	pub const fn new(dest: Handle<Vec<String>>) -> Self {
		Self { dest, changed: false }
	}

	#[must_use]
	/// # Destination.
	pub const fn handle(&self) -> &Handle<Vec<String>> { &self.dest }
}

impl Value for ArrayValue {
	fn set(&mut self, raw: &str) -> Result<(), BoxError> {
		if self.changed { self.dest.update(|d| d.push(raw.to_owned())); }
		else {
			self.dest.replace(vec![raw.to_owned()]);
			self.changed = true;
		}
		Ok(())
	}

	fn type_tag(&self) -> &str { "stringArray" }
	fn as_any(&self) -> &dyn Any { self }
	fn clone_box(&self) -> Box<dyn Value> { Box::new(self.clone()) }
}



#[cfg(test)]
mod test {
	use super::*;
	use std::time::Duration;

	#[test]
	fn t_string_slice() {
		let h = Handle::new(vec!["default".to_owned()]);
		let mut v = SliceValue::new(h.clone());
		assert_eq!(v.to_string(), "[default]");

		v.set(r#"one,"two,three""#).unwrap();
		assert_eq!(h.get(), ["one", "two,three"]);
		assert_eq!(v.to_string(), r#"[one,"two,three"]"#);

		v.set("four").unwrap();
		assert_eq!(h.get(), ["one", "two,three", "four"]);

		assert!(v.set(r#""open"#).is_err());
		assert_eq!(h.get().len(), 3, "Failed sets should not store anything.");
	}

	#[test]
	fn t_empty() {
		let h = Handle::new(vec![1_u8, 2]);
		let mut v = SliceValue::new(h.clone());
		v.set("").unwrap();
		assert!(h.get().is_empty(), "Bug: empty input should clear the default.");
		assert_eq!(v.to_string(), "[]");
	}

	#[test]
	fn t_typed() {
		let h = Handle::new(Vec::<Duration>::new());
		let mut v = SliceValue::new(h.clone());
		assert_eq!(v.type_tag(), "durationSlice");
		v.set("1s,2m").unwrap();
		assert_eq!(v.to_string(), "[1s,2m0s]");

		// One bad item spoils the bunch.
		assert!(v.set("3s,nope").is_err());
		assert_eq!(h.get().len(), 2);

		let h = Handle::new(Vec::<bool>::new());
		let mut v = SliceValue::new(h.clone());
		v.set("true,0,T").unwrap();
		assert_eq!(h.get(), [true, false, true]);
		assert_eq!(v.type_tag(), "boolSlice");
		assert!(! v.is_bool_like(), "Bool slices still need a value.");
	}

	#[test]
	fn t_append_replace() {
		let h = Handle::new(vec![1_i64]);
		let mut v = SliceValue::new(h.clone())
			.with_validator(|n: &i64| if *n < 0 { Err("negative".to_owned()) } else { Ok(()) });

		v.append("2").unwrap();
		assert_eq!(h.get(), [1, 2]);

		v.replace(["7", "8"]).unwrap();
		assert_eq!(v.get_slice(), ["7", "8"]);

		assert!(v.replace(["9", "-1"]).is_err());
		assert_eq!(h.get(), [7, 8], "Bug: partial replace.");
		assert!(v.append("-5").is_err());
	}

	#[test]
	fn t_idempotent() {
		let h = Handle::new(Vec::<String>::new());
		let mut v = SliceValue::new(h.clone());
		v.set(r#"a,"b,c",d"#).unwrap();

		let rendered = v.to_string();
		let inner = rendered.trim_start_matches('[').trim_end_matches(']').to_owned();
		let mut fresh = SliceValue::new(Handle::new(Vec::<String>::new()));
		fresh.set(&inner).unwrap();
		assert_eq!(fresh.to_string(), rendered);
	}

	#[test]
	fn t_array() {
		let h = Handle::new(vec!["x".to_owned()]);
		let mut v = ArrayValue::new(h.clone());
		v.set("one,two").unwrap();
		v.set("three").unwrap();
		assert_eq!(h.get(), ["one,two", "three"]);
		assert_eq!(v.to_string(), r#"["one,two",three]"#);
		assert_eq!(v.type_tag(), "stringArray");
	}
}
