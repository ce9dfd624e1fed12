/*!
# Flagpole: Scalar Values.
*/

use bytesize::ByteSize;
use crate::BoxError;
use std::{
	any::Any,
	fmt,
	net::IpAddr,
	sync::Arc,
	time::Duration,
};
use super::{
	Handle,
	IpNet,
	Value,
	ValueError,
};
use uuid::Uuid;



/// # Validator.
///
/// A check run against the freshly-parsed value before it is stored.
pub type Validator<T> = Arc<dyn Fn(&T) -> Result<(), String> + Send + Sync>;



/// # Scalar.
///
/// A single parseable, printable item. Implementing this is all it takes to
/// get a plain value ([`ScalarValue`]) and a list value
/// ([`SliceValue`](super::SliceValue)) for free.
pub trait Scalar: Clone + Send + Sync + 'static {
	/// # Type Tag.
	const TYPE_TAG: &'static str;

	/// # Slice Type Tag.
	const SLICE_TAG: &'static str;

	/// # Bool-Like?
	const BOOL_LIKE: bool = false;

	/// # Ignore Empty Input?
	const SKIP_EMPTY: bool = false;

	/// # Parse.
	///
	/// ## Errors
	///
	/// Return an error if the string is not a valid representation.
	fn parse(raw: &str) -> Result<Self, ValueError>;

	/// # Render.
	fn render(&self) -> String;
}

impl Scalar for bool {
	const TYPE_TAG: &'static str = "bool";
	const SLICE_TAG: &'static str = "boolSlice";
	const BOOL_LIKE: bool = true;

	fn parse(raw: &str) -> Result<Self, ValueError> {
		match raw {
			"1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
			"0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
			_ => Err(ValueError::Syntax { kind: Self::TYPE_TAG, raw: raw.to_owned() }),
		}
	}

	fn render(&self) -> String { self.to_string() }
}

impl Scalar for String {
	const TYPE_TAG: &'static str = "string";
	const SLICE_TAG: &'static str = "stringSlice";

	fn parse(raw: &str) -> Result<Self, ValueError> { Ok(raw.to_owned()) }

	fn render(&self) -> String { self.clone() }
}

/// # Helper: Integer Scalars.
macro_rules! int_scalar {
	($($ty:ty, $tag:literal, $slice:literal);+ $(;)?) => ($(
		impl Scalar for $ty {
			const TYPE_TAG: &'static str = $tag;
			const SLICE_TAG: &'static str = $slice;

			fn parse(raw: &str) -> Result<Self, ValueError> {
				let n = parse_int(raw, $tag)?;
				Self::try_from(n).map_err(|_| ValueError::Range { kind: $tag, raw: raw.to_owned() })
			}

			fn render(&self) -> String { self.to_string() }
		}
	)+);
}

int_scalar!(
	i8,    "int8",   "int8Slice";
	i16,   "int16",  "int16Slice";
	i32,   "int32",  "int32Slice";
	i64,   "int64",  "int64Slice";
	isize, "int",    "intSlice";
	u8,    "uint8",  "uint8Slice";
	u16,   "uint16", "uint16Slice";
	u32,   "uint32", "uint32Slice";
	u64,   "uint64", "uint64Slice";
	usize, "uint",   "uintSlice";
);

/// # Helper: Float Scalars.
macro_rules! float_scalar {
	($($ty:ty, $tag:literal, $slice:literal);+ $(;)?) => ($(
		impl Scalar for $ty {
			const TYPE_TAG: &'static str = $tag;
			const SLICE_TAG: &'static str = $slice;

			fn parse(raw: &str) -> Result<Self, ValueError> {
				raw.parse::<Self>().map_err(|_| ValueError::Syntax { kind: $tag, raw: raw.to_owned() })
			}

			fn render(&self) -> String { self.to_string() }
		}
	)+);
}

float_scalar!(
	f32, "float32", "float32Slice";
	f64, "float64", "float64Slice";
);

impl Scalar for Duration {
	const TYPE_TAG: &'static str = "duration";
	const SLICE_TAG: &'static str = "durationSlice";

	fn parse(raw: &str) -> Result<Self, ValueError> { super::parse_duration(raw) }

	fn render(&self) -> String { super::format_duration(*self) }
}

impl Scalar for IpAddr {
	const TYPE_TAG: &'static str = "ip";
	const SLICE_TAG: &'static str = "ipSlice";
	const SKIP_EMPTY: bool = true;

	fn parse(raw: &str) -> Result<Self, ValueError> {
		raw.trim().parse::<Self>()
			.map_err(|_| ValueError::Syntax { kind: Self::TYPE_TAG, raw: raw.to_owned() })
	}

	fn render(&self) -> String { self.to_string() }
}

impl Scalar for IpNet {
	const TYPE_TAG: &'static str = "ipNet";
	const SLICE_TAG: &'static str = "ipNetSlice";

	fn parse(raw: &str) -> Result<Self, ValueError> { raw.trim().parse::<Self>() }

	fn render(&self) -> String { self.to_string() }
}

impl Scalar for Uuid {
	const TYPE_TAG: &'static str = "uuid";
	const SLICE_TAG: &'static str = "uuidSlice";

	fn parse(raw: &str) -> Result<Self, ValueError> {
		Self::parse_str(raw.trim())
			.map_err(|_| ValueError::Syntax { kind: Self::TYPE_TAG, raw: raw.to_owned() })
	}

	fn render(&self) -> String { self.hyphenated().to_string() }
}

impl Scalar for ByteSize {
	const TYPE_TAG: &'static str = "byte-size";
	const SLICE_TAG: &'static str = "byteSizeSlice";

	fn parse(raw: &str) -> Result<Self, ValueError> {
		raw.trim().parse::<Self>()
			.map_err(|_| ValueError::Syntax { kind: Self::TYPE_TAG, raw: raw.to_owned() })
	}

	/// # Render.
	///
	/// The human-friendly form rounds, so fall back to plain bytes whenever
	/// it wouldn't parse back to the same number.
	fn render(&self) -> String {
		let pretty = self.to_string();
		if pretty.parse::<Self>().is_ok_and(|b| b == *self) { pretty }
		else { format!("{}B", self.as_u64()) }
	}
}



/// # Parse Integer.
///
/// Integers may carry a sign, a `0x`/`0o`/`0b` (or bare leading `0` octal)
/// prefix, and single `_` separators between digits or after a prefix.
pub(crate) fn parse_int(raw: &str, kind: &'static str) -> Result<i128, ValueError> {
	let syntax = || ValueError::Syntax { kind, raw: raw.to_owned() };

	let (neg, body) = match raw.as_bytes().first() {
		Some(b'-') => (true, &raw[1..]),
		Some(b'+') => (false, &raw[1..]),
		_ => (false, raw),
	};

	let (radix, digits) =
		if let Some(d) = body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")) { (16, d) }
		else if let Some(d) = body.strip_prefix("0o").or_else(|| body.strip_prefix("0O")) { (8, d) }
		else if let Some(d) = body.strip_prefix("0b").or_else(|| body.strip_prefix("0B")) { (2, d) }
		else if body.len() > 1 && body.starts_with('0') { (8, &body[1..]) }
		else { (10, body) };

	// Underscores may follow a prefix or sit between digits.
	let digits =
		if radix == 10 { digits }
		else { digits.strip_prefix('_').unwrap_or(digits) };
	if digits.starts_with('_') || digits.ends_with('_') || digits.contains("__") {
		return Err(syntax());
	}
	let digits: String = digits.chars().filter(|&c| c != '_').collect();

	if digits.is_empty() || ! digits.chars().all(|c| c.is_digit(radix)) {
		return Err(syntax());
	}

	let n = i128::from_str_radix(&digits, radix)
		.map_err(|_| ValueError::Range { kind, raw: raw.to_owned() })?;
	Ok(if neg { -n } else { n })
}



/// # Scalar Value.
///
/// The [`Value`] behind plain (non-list) flags.
pub struct ScalarValue<T: Scalar> {
	/// # Destination.
	dest: Handle<T>,

	/// # Validators.
	validators: Vec<Validator<T>>,
}

impl<T: Scalar> Clone for ScalarValue<T> {
	fn clone(&self) -> Self {
		Self {
			dest: self.dest.clone(),
			validators: self.validators.clone(),
		}
	}
}

impl<T: Scalar> fmt::Display for ScalarValue<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.dest.read().render())
	}
}

impl<T: Scalar> ScalarValue<T> {
	#[must_use]
	/// # New.
	pub const fn new(dest: Handle<T>) -> Self {
		Self { dest, validators: Vec::new() }
	}

	#[must_use]
	/// # With Validator.
	///
	/// ## Examples
	///
	/// ```
	/// use flagpole::{FlagSet, Handle, value::ScalarValue};
	///
	/// let port = Handle::new(8080_u16);
	/// let value = ScalarValue::new(port.clone())
	///     .with_validator(|p: &u16| if *p < 1024 { Err("too low".to_owned()) } else { Ok(()) });
	///
	/// let mut flags = FlagSet::new("demo");
	/// flags.var(Box::new(value), "port", "", "listen port").unwrap();
	/// assert!(flags.parse(["--port=80"]).is_err());
	/// assert_eq!(port.get(), 8080);
	/// ```
	pub fn with_validator<F>(mut self, cb: F) -> Self
	where F: Fn(&T) -> Result<(), String> + Send + Sync + 'static {
		self.validators.push(Arc::new(cb));
		self
	}

	#[must_use]
	/// # Destination.
	pub const fn handle(&self) -> &Handle<T> { &self.dest }
}

impl<T: Scalar> Value for ScalarValue<T> {
	fn set(&mut self, raw: &str) -> Result<(), BoxError> {
		if raw.is_empty() && T::SKIP_EMPTY { return Ok(()); }

		let v = T::parse(raw)?;
		for cb in &self.validators { cb(&v).map_err(ValueError::Invalid)?; }
		self.dest.replace(v);
		Ok(())
	}

	fn type_tag(&self) -> &str { T::TYPE_TAG }
	fn is_bool_like(&self) -> bool { T::BOOL_LIKE }
	fn as_any(&self) -> &dyn Any { self }
	fn clone_box(&self) -> Box<dyn Value> { Box::new(self.clone()) }
}
