/*!
# Flagpole: Typed Getters.

These read a flag's current value by name, checking the declared type along
the way. Most of the time the [`Handle`](crate::Handle) returned at
declaration is the easier route; these exist for code that only has the set.
*/

use bytesize::ByteSize;
use crate::{
	csv,
	Flag,
	FlagError,
	FlagSet,
	value::{
		ArrayValue,
		CountValue,
		IpNet,
		MapScalar,
		MapValue,
		Scalar,
		ScalarValue,
		SliceValue,
		ValueError,
	},
};
use std::{
	collections::BTreeMap,
	net::IpAddr,
	time::Duration,
};
use uuid::Uuid;



/// # Helper: Named Scalar Getters.
macro_rules! get {
	($($ty:ty, $fn:ident);+ $(;)?) => ($(
		#[doc = concat!("# Get `", stringify!($ty), "`.")]
		///
		/// ## Errors
		///
		/// Returns an error if the flag doesn't exist or has a different type.
		pub fn $fn(&self, name: &str) -> Result<$ty, FlagError> { self.get::<$ty>(name) }
	)+);
}

/// # Helper: Named Slice Getters.
macro_rules! get_slice {
	($($ty:ty, $fn:ident);+ $(;)?) => ($(
		#[doc = concat!("# Get `Vec<", stringify!($ty), ">`.")]
		///
		/// ## Errors
		///
		/// Returns an error if the flag doesn't exist or has a different type.
		pub fn $fn(&self, name: &str) -> Result<Vec<$ty>, FlagError> {
			self.get_slice::<$ty>(name)
		}
	)+);
}



/// ## Typed Getters.
impl FlagSet {
	/// # Get Scalar.
	///
	/// ## Examples
	///
	/// ```
	/// use flagpole::FlagSet;
	///
	/// let mut flags = FlagSet::new("demo");
	/// flags.i32("n", 5, "a number").unwrap();
	/// flags.parse(["--n=0x10"]).unwrap();
	///
	/// assert_eq!(flags.get::<i32>("n").unwrap(), 16);
	/// assert!(flags.get::<u8>("n").is_err()); // Wrong type.
	/// ```
	///
	/// ## Errors
	///
	/// Returns an error if the flag doesn't exist or has a different type.
	pub fn get<T: Scalar>(&self, name: &str) -> Result<T, FlagError> {
		let flag = self.typed(name, T::TYPE_TAG)?;
		if let Some(v) = flag.value().as_any().downcast_ref::<ScalarValue<T>>() {
			return Ok(v.handle().get());
		}

		// Custom values just need to print something parseable.
		let raw = flag.value().to_string();
		T::parse(&raw).map_err(|e| invalid(flag, raw, e))
	}

	/// # Get List.
	///
	/// ## Errors
	///
	/// Returns an error if the flag doesn't exist or has a different type.
	pub fn get_slice<T: Scalar>(&self, name: &str) -> Result<Vec<T>, FlagError> {
		let flag = self.typed(name, T::SLICE_TAG)?;
		if let Some(v) = flag.value().as_any().downcast_ref::<SliceValue<T>>() {
			return Ok(v.handle().get());
		}

		let raw = flag.value().to_string();
		bracketed(&raw)
			.and_then(|fields| fields.iter().map(|f| T::parse(f)).collect())
			.map_err(|e| invalid(flag, raw.clone(), e))
	}

	/// # Get Map.
	///
	/// ## Errors
	///
	/// Returns an error if the flag doesn't exist or has a different type.
	pub fn get_map<V: MapScalar>(&self, name: &str) -> Result<BTreeMap<String, V>, FlagError> {
		let flag = self.typed(name, V::MAP_TAG)?;
		if let Some(v) = flag.value().as_any().downcast_ref::<MapValue<V>>() {
			return Ok(v.handle().get());
		}

		let raw = flag.value().to_string();
		bracketed(&raw)
			.and_then(|fields| fields.into_iter()
				.map(|pair| {
					let (k, v) = pair.split_once('=')
						.ok_or_else(|| ValueError::Pair { raw: pair.clone() })?;
					Ok((k.to_owned(), V::parse(v)?))
				})
				.collect()
			)
			.map_err(|e| invalid(flag, raw.clone(), e))
	}

	get!(
		bool,     get_bool;
		String,   get_string;
		i8,       get_i8;
		i16,      get_i16;
		i32,      get_i32;
		i64,      get_i64;
		isize,    get_isize;
		u8,       get_u8;
		u16,      get_u16;
		u32,      get_u32;
		u64,      get_u64;
		usize,    get_usize;
		f32,      get_f32;
		f64,      get_f64;
		Duration, get_duration;
		IpAddr,   get_ip;
		IpNet,    get_ip_net;
		Uuid,     get_uuid;
		ByteSize, get_byte_size;
	);

	get_slice!(
		bool,     get_bool_slice;
		String,   get_string_slice;
		i32,      get_i32_slice;
		i64,      get_i64_slice;
		isize,    get_isize_slice;
		u32,      get_u32_slice;
		u64,      get_u64_slice;
		usize,    get_usize_slice;
		f32,      get_f32_slice;
		f64,      get_f64_slice;
		Duration, get_duration_slice;
		IpAddr,   get_ip_slice;
		IpNet,    get_ip_net_slice;
		Uuid,     get_uuid_slice;
	);

	/// # Get String Array.
	///
	/// ## Errors
	///
	/// Returns an error if the flag doesn't exist or has a different type.
	pub fn get_string_array(&self, name: &str) -> Result<Vec<String>, FlagError> {
		let flag = self.typed(name, "stringArray")?;
		if let Some(v) = flag.value().as_any().downcast_ref::<ArrayValue>() {
			return Ok(v.handle().get());
		}

		let raw = flag.value().to_string();
		bracketed(&raw).map_err(|e| invalid(flag, raw.clone(), e))
	}

	/// # Get String-to-String Map.
	///
	/// ## Errors
	///
	/// Returns an error if the flag doesn't exist or has a different type.
	pub fn get_string_to_string(&self, name: &str)
	-> Result<BTreeMap<String, String>, FlagError> { self.get_map(name) }

	/// # Get String-to-Int Map.
	///
	/// ## Errors
	///
	/// Returns an error if the flag doesn't exist or has a different type.
	pub fn get_string_to_int(&self, name: &str)
	-> Result<BTreeMap<String, isize>, FlagError> { self.get_map(name) }

	/// # Get String-to-Int64 Map.
	///
	/// ## Errors
	///
	/// Returns an error if the flag doesn't exist or has a different type.
	pub fn get_string_to_int64(&self, name: &str)
	-> Result<BTreeMap<String, i64>, FlagError> { self.get_map(name) }

	/// # Get Count.
	///
	/// ## Errors
	///
	/// Returns an error if the flag doesn't exist or has a different type.
	pub fn get_count(&self, name: &str) -> Result<isize, FlagError> {
		let flag = self.typed(name, "count")?;
		if let Some(v) = flag.value().as_any().downcast_ref::<CountValue>() {
			return Ok(v.handle().get());
		}

		let raw = flag.value().to_string();
		<isize as Scalar>::parse(&raw).map_err(|e| invalid(flag, raw, e))
	}
}

impl FlagSet {
	/// # Find and Type-Check.
	fn typed(&self, name: &str, expected: &'static str) -> Result<&Flag, FlagError> {
		let flag = self.lookup(name)
			.ok_or_else(|| FlagError::NoSuchFlag { name: name.to_owned() })?;
		if flag.type_tag() == expected { Ok(flag) }
		else {
			Err(FlagError::TypeMismatch {
				name: flag.name().to_owned(),
				expected,
				actual: flag.type_tag().to_owned(),
			})
		}
	}
}



/// # Unwrap `[a,b]`.
///
/// Strip the brackets from a collection's string form and split the rest as
/// a CSV record.
fn bracketed(raw: &str) -> Result<Vec<String>, ValueError> {
	let inner = raw.strip_prefix('[')
		.and_then(|r| r.strip_suffix(']'))
		.unwrap_or(raw);
	if inner.is_empty() { Ok(Vec::new()) }
	else { csv::read_record(inner) }
}

/// # Invalid Value Error.
fn invalid(flag: &Flag, raw: String, err: ValueError) -> FlagError {
	FlagError::InvalidValue {
		name: flag.display_name(),
		raw,
		source: Box::new(err),
	}
}



#[cfg(test)]
mod test {
	use super::*;
	use crate::{
		BoxError,
		Handle,
		Value,
	};
	use std::{
		any::Any,
		fmt,
	};

	#[test]
	fn t_get() {
		let mut set = FlagSet::new("t");
		set.bool("bool", false, "").unwrap();
		set.i8("i8", 0, "").unwrap();
		set.u64("u64", 0, "").unwrap();
		set.f64("f64", 0.0, "").unwrap();
		set.duration("dur", Duration::ZERO, "").unwrap();
		set.ip_net("net", IpNet::new(IpAddr::from([0, 0, 0, 0]), 0).unwrap(), "").unwrap();

		set.parse([
			"--bool",
			"--i8=-8",
			"--u64=25",
			"--f64=2718e28",
			"--dur=1h",
			"--net=10.0.0.0/8",
		]).unwrap();

		assert!(set.get_bool("bool").unwrap());
		assert_eq!(set.get_i8("i8").unwrap(), -8);
		assert_eq!(set.get_u64("u64").unwrap(), 25);
		assert_eq!(set.get_f64("f64").unwrap(), 2718e28);
		assert_eq!(set.get_duration("dur").unwrap(), Duration::from_secs(3600));
		assert_eq!(set.get_ip_net("net").unwrap().to_string(), "10.0.0.0/8");
	}

	#[test]
	fn t_errors() {
		let mut set = FlagSet::new("t");
		set.i32("n", 0, "").unwrap();

		assert!(matches!(set.get_i32("missing"), Err(FlagError::NoSuchFlag { .. })));
		assert!(matches!(
			set.get_string("n"),
			Err(FlagError::TypeMismatch { expected: "string", .. }),
		));
		assert_eq!(
			set.get_i64("n").unwrap_err().to_string(),
			r#"trying to get int64 value of flag "n" of type int32"#,
		);
	}

	#[test]
	fn t_collections() {
		let mut set = FlagSet::new("t");
		set.string_slice("list", vec!["a".to_owned()], "").unwrap();
		set.usize_slice("nums", Vec::new(), "").unwrap();
		set.string_array("arr", Vec::new(), "").unwrap();
		set.string_to_int64("map", BTreeMap::new(), "").unwrap();
		set.count_p("verbose", "v", "").unwrap();

		assert_eq!(set.get_string_slice("list").unwrap(), ["a"]);
		assert!(set.get_usize_slice("nums").unwrap().is_empty());

		set.parse(["--list=x,y", "--nums", "1,2", "--arr=a,b", "--map=k=7", "-vv"]).unwrap();
		assert_eq!(set.get_string_slice("list").unwrap(), ["x", "y"]);
		assert_eq!(set.get_usize_slice("nums").unwrap(), [1, 2]);
		assert_eq!(set.get_string_array("arr").unwrap(), ["a,b"]);
		assert_eq!(set.get_string_to_int64("map").unwrap()["k"], 7);
		assert_eq!(set.get_count("verbose").unwrap(), 2);
	}

	#[derive(Clone)]
	/// # Custom Value Sharing the `int32` Tag.
	struct Doubler(Handle<i32>);

	impl fmt::Display for Doubler {
		fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
			write!(f, "{}", self.0.get() * 2)
		}
	}

	impl Value for Doubler {
		fn set(&mut self, raw: &str) -> Result<(), BoxError> {
			self.0.replace(raw.parse()?);
			Ok(())
		}
		fn type_tag(&self) -> &str { "int32" }
		fn as_any(&self) -> &dyn Any { self }
		fn clone_box(&self) -> Box<dyn Value> { Box::new(self.clone()) }
	}

	#[test]
	fn t_custom_fallback() {
		let mut set = FlagSet::new("t");
		set.var(Box::new(Doubler(Handle::new(0))), "double", "", "").unwrap();
		set.parse(["--double=21"]).unwrap();
		assert_eq!(set.get_i32("double").unwrap(), 42);
	}
}
