/*!
# Flagpole: Map Values.
*/

use crate::{
	BoxError,
	csv,
};
use std::{
	any::Any,
	collections::BTreeMap,
	fmt,
};
use super::{
	Handle,
	Scalar,
	Value,
	ValueError,
};



/// # Map Scalar.
///
/// Value types usable on the right-hand side of a [`MapValue`].
pub trait MapScalar: Scalar {
	/// # Map Type Tag.
	const MAP_TAG: &'static str;
}

impl MapScalar for String { const MAP_TAG: &'static str = "stringToString"; }
impl MapScalar for isize { const MAP_TAG: &'static str = "stringToInt"; }
impl MapScalar for i64 { const MAP_TAG: &'static str = "stringToInt64"; }



/// # Map Value.
///
/// Each occurrence is either a single `key=value` pair, or a comma-separated
/// record of them. The first occurrence replaces the default; later ones
/// are merged in, overwriting existing keys.
///
/// ## Examples
///
/// ```
/// use flagpole::FlagSet;
/// use std::collections::BTreeMap;
///
/// let mut flags = FlagSet::new("demo");
/// let labels = flags.string_to_string("label", BTreeMap::new(), "labels").unwrap();
///
/// flags.parse(["--label=a=1,b=2", "--label", "c=x,y"]).unwrap();
/// let labels = labels.get();
/// assert_eq!(labels["a"], "1");
/// assert_eq!(labels["c"], "x,y");
/// ```
pub struct MapValue<V: MapScalar> {
	/// # Destination.
	dest: Handle<BTreeMap<String, V>>,

	/// # Touched?
	changed: bool,
}

impl<V: MapScalar> Clone for MapValue<V> {
	fn clone(&self) -> Self {
		Self { dest: self.dest.clone(), changed: self.changed }
	}
}

impl<V: MapScalar> fmt::Display for MapValue<V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let dest = self.dest.read();
		let pairs = dest.iter().map(|(k, v)| format!("{k}={}", v.render()));
		write!(f, "[{}]", csv::write_record(pairs))
	}
}

impl<V: MapScalar> MapValue<V> {
	#[must_use]
	/// # New.
	pub const fn new(dest: Handle<BTreeMap<String, V>>) -> Self {
		Self { dest, changed: false }
	}

	#[must_use]
	/// # Destination.
	pub const fn handle(&self) -> &Handle<BTreeMap<String, V>> { &self.dest }
}

impl<V: MapScalar> Value for MapValue<V> {
	fn set(&mut self, raw: &str) -> Result<(), BoxError> {
		// A lone pair is taken as-is, so its value may contain commas.
		let fields =
			if raw.matches('=').count() == 1 {
				vec![raw.trim_matches('"').to_owned()]
			}
			else { csv::read_record(raw)? };

		let mut out = BTreeMap::new();
		for pair in fields {
			let (k, v) = pair.split_once('=')
				.ok_or_else(|| ValueError::Pair { raw: pair.clone() })?;
			out.insert(k.to_owned(), V::parse(v)?);
		}

		if self.changed { self.dest.update(|d| d.extend(out)); }
		else {
			self.dest.replace(out);
			self.changed = true;
		}
		Ok(())
	}

	fn type_tag(&self) -> &str { V::MAP_TAG }
	fn as_any(&self) -> &dyn Any { self }
	fn clone_box(&self) -> Box<dyn Value> { Box::new(self.clone()) }
}
