/*!
# Flagpole: Typed Declarations.

Each built-in type gets three methods:
* `x(name, default, usage)` returns a [`Handle`] to the value;
* `x_p(name, shorthand, default, usage)` is the same, plus a shorthand;
* `x_var(&handle, name, shorthand, default, usage)` writes to an existing handle and returns the [`Flag`] for further tweaking.
*/

use bytesize::ByteSize;
use crate::{
	BoxError,
	Flag,
	FlagError,
	FlagSet,
	Handle,
	value::{
		ArrayValue,
		CountValue,
		FuncValue,
		IpNet,
		MapScalar,
		MapValue,
		Scalar,
		ScalarValue,
		SliceValue,
	},
};
use std::{
	collections::BTreeMap,
	net::IpAddr,
	time::Duration,
};
use uuid::Uuid;



/// # Helper: Scalar Declarations.
macro_rules! scalar {
	($($ty:ty, $label:literal, $name:ident, $name_p:ident, $name_var:ident);+ $(;)?) => ($(
		#[doc = concat!("# Declare ", $label, " Flag.")]
		///
		/// ## Errors
		///
		/// Returns an error if the name is already taken.
		pub fn $name(&mut self, name: &str, default: $ty, usage: &str)
		-> Result<Handle<$ty>, FlagError> {
			self.scalar_p(name, "", default, usage)
		}

		#[doc = concat!("# Declare ", $label, " Flag (With Shorthand).")]
		///
		/// ## Errors
		///
		/// Returns an error if the name or shorthand is already taken.
		pub fn $name_p(&mut self, name: &str, shorthand: &str, default: $ty, usage: &str)
		-> Result<Handle<$ty>, FlagError> {
			self.scalar_p(name, shorthand, default, usage)
		}

		#[doc = concat!("# Declare ", $label, " Flag (Existing Handle).")]
		///
		/// The handle is reset to the default.
		///
		/// ## Errors
		///
		/// Returns an error if the name or shorthand is already taken.
		pub fn $name_var(
			&mut self,
			dest: &Handle<$ty>,
			name: &str,
			shorthand: &str,
			default: $ty,
			usage: &str,
		) -> Result<&mut Flag, FlagError> {
			dest.replace(default);
			self.scalar_with(ScalarValue::new(dest.clone()), name, shorthand, usage)
		}
	)+);
}

/// # Helper: Slice Declarations.
macro_rules! slice {
	($($ty:ty, $label:literal, $name:ident, $name_p:ident, $name_var:ident);+ $(;)?) => ($(
		#[doc = concat!("# Declare ", $label, " List Flag.")]
		///
		/// ## Errors
		///
		/// Returns an error if the name is already taken.
		pub fn $name(&mut self, name: &str, default: Vec<$ty>, usage: &str)
		-> Result<Handle<Vec<$ty>>, FlagError> {
			self.slice_p(name, "", default, usage)
		}

		#[doc = concat!("# Declare ", $label, " List Flag (With Shorthand).")]
		///
		/// ## Errors
		///
		/// Returns an error if the name or shorthand is already taken.
		pub fn $name_p(&mut self, name: &str, shorthand: &str, default: Vec<$ty>, usage: &str)
		-> Result<Handle<Vec<$ty>>, FlagError> {
			self.slice_p(name, shorthand, default, usage)
		}

		#[doc = concat!("# Declare ", $label, " List Flag (Existing Handle).")]
		///
		/// ## Errors
		///
		/// Returns an error if the name or shorthand is already taken.
		pub fn $name_var(
			&mut self,
			dest: &Handle<Vec<$ty>>,
			name: &str,
			shorthand: &str,
			default: Vec<$ty>,
			usage: &str,
		) -> Result<&mut Flag, FlagError> {
			dest.replace(default);
			self.slice_with(SliceValue::new(dest.clone()), name, shorthand, usage)
		}
	)+);
}

/// # Helper: Map Declarations.
macro_rules! map {
	($($ty:ty, $label:literal, $name:ident, $name_p:ident, $name_var:ident);+ $(;)?) => ($(
		#[doc = concat!("# Declare ", $label, " Map Flag.")]
		///
		/// ## Errors
		///
		/// Returns an error if the name is already taken.
		pub fn $name(&mut self, name: &str, default: BTreeMap<String, $ty>, usage: &str)
		-> Result<Handle<BTreeMap<String, $ty>>, FlagError> {
			self.map_p(name, "", default, usage)
		}

		#[doc = concat!("# Declare ", $label, " Map Flag (With Shorthand).")]
		///
		/// ## Errors
		///
		/// Returns an error if the name or shorthand is already taken.
		pub fn $name_p(
			&mut self,
			name: &str,
			shorthand: &str,
			default: BTreeMap<String, $ty>,
			usage: &str,
		) -> Result<Handle<BTreeMap<String, $ty>>, FlagError> {
			self.map_p(name, shorthand, default, usage)
		}

		#[doc = concat!("# Declare ", $label, " Map Flag (Existing Handle).")]
		///
		/// ## Errors
		///
		/// Returns an error if the name or shorthand is already taken.
		pub fn $name_var(
			&mut self,
			dest: &Handle<BTreeMap<String, $ty>>,
			name: &str,
			shorthand: &str,
			default: BTreeMap<String, $ty>,
			usage: &str,
		) -> Result<&mut Flag, FlagError> {
			dest.replace(default);
			self.var(Box::new(MapValue::new(dest.clone())), name, shorthand, usage)
		}
	)+);
}



/// ## Generic Declarations.
impl FlagSet {
	/// # Declare Scalar Flag (Prepared Value).
	///
	/// This is the way to go when a value needs a validator, or for custom
	/// [`Scalar`] types.
	///
	/// ## Errors
	///
	/// Returns an error if the name or shorthand is already taken.
	pub fn scalar_with<T: Scalar>(
		&mut self,
		value: ScalarValue<T>,
		name: &str,
		shorthand: &str,
		usage: &str,
	) -> Result<&mut Flag, FlagError> {
		self.var(Box::new(value), name, shorthand, usage)
	}

	/// # Declare List Flag (Prepared Value).
	///
	/// ## Errors
	///
	/// Returns an error if the name or shorthand is already taken.
	pub fn slice_with<T: Scalar>(
		&mut self,
		value: SliceValue<T>,
		name: &str,
		shorthand: &str,
		usage: &str,
	) -> Result<&mut Flag, FlagError> {
		self.var(Box::new(value), name, shorthand, usage)
	}

	/// # Declare Scalar Flag.
	///
	/// ## Errors
	///
	/// Returns an error if the name or shorthand is already taken.
	pub fn scalar_p<T: Scalar>(&mut self, name: &str, shorthand: &str, default: T, usage: &str)
	-> Result<Handle<T>, FlagError> {
		let dest = Handle::new(default);
		self.scalar_with(ScalarValue::new(dest.clone()), name, shorthand, usage)?;
		Ok(dest)
	}

	/// # Declare List Flag.
	///
	/// ## Errors
	///
	/// Returns an error if the name or shorthand is already taken.
	pub fn slice_p<T: Scalar>(&mut self, name: &str, shorthand: &str, default: Vec<T>, usage: &str)
	-> Result<Handle<Vec<T>>, FlagError> {
		let dest = Handle::new(default);
		self.slice_with(SliceValue::new(dest.clone()), name, shorthand, usage)?;
		Ok(dest)
	}

	/// # Declare Map Flag.
	///
	/// ## Errors
	///
	/// Returns an error if the name or shorthand is already taken.
	pub fn map_p<V: MapScalar>(
		&mut self,
		name: &str,
		shorthand: &str,
		default: BTreeMap<String, V>,
		usage: &str,
	) -> Result<Handle<BTreeMap<String, V>>, FlagError> {
		let dest = Handle::new(default);
		self.var(Box::new(MapValue::new(dest.clone())), name, shorthand, usage)?;
		Ok(dest)
	}
}

/// ## Scalars.
impl FlagSet {
	scalar!(
		bool,     "Bool",      bool,      bool_p,      bool_var;
		i8,       "i8",        i8,        i8_p,        i8_var;
		i16,      "i16",       i16,       i16_p,       i16_var;
		i32,      "i32",       i32,       i32_p,       i32_var;
		i64,      "i64",       i64,       i64_p,       i64_var;
		isize,    "isize",     isize,     isize_p,     isize_var;
		u8,       "u8",        u8,        u8_p,        u8_var;
		u16,      "u16",       u16,       u16_p,       u16_var;
		u32,      "u32",       u32,       u32_p,       u32_var;
		u64,      "u64",       u64,       u64_p,       u64_var;
		usize,    "usize",     usize,     usize_p,     usize_var;
		f32,      "f32",       f32,       f32_p,       f32_var;
		f64,      "f64",       f64,       f64_p,       f64_var;
		Duration, "Duration",  duration,  duration_p,  duration_var;
		IpAddr,   "IP",        ip,        ip_p,        ip_var;
		IpNet,    "IP Network", ip_net,   ip_net_p,    ip_net_var;
		Uuid,     "UUID",      uuid,      uuid_p,      uuid_var;
		ByteSize, "Byte Size", byte_size, byte_size_p, byte_size_var;
	);
}

/// ## Strings.
impl FlagSet {
	/// # Declare String Flag.
	///
	/// ## Errors
	///
	/// Returns an error if the name is already taken.
	pub fn string(&mut self, name: &str, default: &str, usage: &str)
	-> Result<Handle<String>, FlagError> {
		self.scalar_p(name, "", default.to_owned(), usage)
	}

	/// # Declare String Flag (With Shorthand).
	///
	/// ## Errors
	///
	/// Returns an error if the name or shorthand is already taken.
	pub fn string_p(&mut self, name: &str, shorthand: &str, default: &str, usage: &str)
	-> Result<Handle<String>, FlagError> {
		self.scalar_p(name, shorthand, default.to_owned(), usage)
	}

	/// # Declare String Flag (Existing Handle).
	///
	/// ## Errors
	///
	/// Returns an error if the name or shorthand is already taken.
	pub fn string_var(
		&mut self,
		dest: &Handle<String>,
		name: &str,
		shorthand: &str,
		default: &str,
		usage: &str,
	) -> Result<&mut Flag, FlagError> {
		dest.replace(default.to_owned());
		self.scalar_with(ScalarValue::new(dest.clone()), name, shorthand, usage)
	}
}

/// ## Lists.
impl FlagSet {
	slice!(
		bool,     "Bool",     bool_slice,     bool_slice_p,     bool_slice_var;
		String,   "String",   string_slice,   string_slice_p,   string_slice_var;
		i32,      "i32",      i32_slice,      i32_slice_p,      i32_slice_var;
		i64,      "i64",      i64_slice,      i64_slice_p,      i64_slice_var;
		isize,    "isize",    isize_slice,    isize_slice_p,    isize_slice_var;
		u32,      "u32",      u32_slice,      u32_slice_p,      u32_slice_var;
		u64,      "u64",      u64_slice,      u64_slice_p,      u64_slice_var;
		usize,    "usize",    usize_slice,    usize_slice_p,    usize_slice_var;
		f32,      "f32",      f32_slice,      f32_slice_p,      f32_slice_var;
		f64,      "f64",      f64_slice,      f64_slice_p,      f64_slice_var;
		Duration, "Duration", duration_slice, duration_slice_p, duration_slice_var;
		IpAddr,   "IP",       ip_slice,       ip_slice_p,       ip_slice_var;
		IpNet,    "IP Network", ip_net_slice, ip_net_slice_p,   ip_net_slice_var;
		Uuid,     "UUID",     uuid_slice,     uuid_slice_p,     uuid_slice_var;
	);

	/// # Declare String Array Flag.
	///
	/// Unlike [`FlagSet::string_slice`], each value is taken verbatim; commas
	/// are not special.
	///
	/// ## Errors
	///
	/// Returns an error if the name is already taken.
	pub fn string_array(&mut self, name: &str, default: Vec<String>, usage: &str)
	-> Result<Handle<Vec<String>>, FlagError> {
		self.string_array_p(name, "", default, usage)
	}

	/// # Declare String Array Flag (With Shorthand).
	///
	/// ## Errors
	///
	/// Returns an error if the name or shorthand is already taken.
	pub fn string_array_p(&mut self, name: &str, shorthand: &str, default: Vec<String>, usage: &str)
	-> Result<Handle<Vec<String>>, FlagError> {
		let dest = Handle::new(default);
		self.var(Box::new(ArrayValue::new(dest.clone())), name, shorthand, usage)?;
		Ok(dest)
	}

	/// # Declare String Array Flag (Existing Handle).
	///
	/// ## Errors
	///
	/// Returns an error if the name or shorthand is already taken.
	pub fn string_array_var(
		&mut self,
		dest: &Handle<Vec<String>>,
		name: &str,
		shorthand: &str,
		default: Vec<String>,
		usage: &str,
	) -> Result<&mut Flag, FlagError> {
		dest.replace(default);
		self.var(Box::new(ArrayValue::new(dest.clone())), name, shorthand, usage)
	}
}

/// ## Maps.
impl FlagSet {
	map!(
		String, "String-to-String", string_to_string, string_to_string_p, string_to_string_var;
		isize,  "String-to-Int",    string_to_int,    string_to_int_p,    string_to_int_var;
		i64,    "String-to-Int64",  string_to_int64,  string_to_int64_p,  string_to_int64_var;
	);
}

/// ## Counters and Callbacks.
impl FlagSet {
	/// # Declare Count Flag.
	///
	/// Counters start at zero and go up by one each time the flag is given
	/// without a value.
	///
	/// ## Errors
	///
	/// Returns an error if the name is already taken.
	pub fn count(&mut self, name: &str, usage: &str) -> Result<Handle<isize>, FlagError> {
		self.count_p(name, "", usage)
	}

	/// # Declare Count Flag (With Shorthand).
	///
	/// ## Errors
	///
	/// Returns an error if the name or shorthand is already taken.
	pub fn count_p(&mut self, name: &str, shorthand: &str, usage: &str)
	-> Result<Handle<isize>, FlagError> {
		let dest = Handle::new(0);
		self.count_var(&dest, name, shorthand, usage)?;
		Ok(dest)
	}

	/// # Declare Count Flag (Existing Handle).
	///
	/// The handle is reset to zero.
	///
	/// ## Errors
	///
	/// Returns an error if the name or shorthand is already taken.
	pub fn count_var(&mut self, dest: &Handle<isize>, name: &str, shorthand: &str, usage: &str)
	-> Result<&mut Flag, FlagError> {
		dest.replace(0);
		self.var(Box::new(CountValue::new(dest.clone())), name, shorthand, usage)
	}

	/// # Declare Callback Flag.
	///
	/// The callback receives each value as it is parsed.
	///
	/// ## Errors
	///
	/// Returns an error if the name is already taken.
	pub fn func<F>(&mut self, name: &str, usage: &str, cb: F) -> Result<&mut Flag, FlagError>
	where F: Fn(&str) -> Result<(), BoxError> + Send + Sync + 'static {
		self.func_p(name, "", usage, cb)
	}

	/// # Declare Callback Flag (With Shorthand).
	///
	/// ## Errors
	///
	/// Returns an error if the name or shorthand is already taken.
	pub fn func_p<F>(&mut self, name: &str, shorthand: &str, usage: &str, cb: F)
	-> Result<&mut Flag, FlagError>
	where F: Fn(&str) -> Result<(), BoxError> + Send + Sync + 'static {
		self.var(Box::new(FuncValue::new(cb)), name, shorthand, usage)
	}

	/// # Declare Bool-Like Callback Flag.
	///
	/// Like [`FlagSet::func`], except the value is optional; the callback
	/// receives `"true"` when none is given.
	///
	/// ## Errors
	///
	/// Returns an error if the name is already taken.
	pub fn bool_func<F>(&mut self, name: &str, usage: &str, cb: F) -> Result<&mut Flag, FlagError>
	where F: Fn(&str) -> Result<(), BoxError> + Send + Sync + 'static {
		self.bool_func_p(name, "", usage, cb)
	}

	/// # Declare Bool-Like Callback Flag (With Shorthand).
	///
	/// ## Errors
	///
	/// Returns an error if the name or shorthand is already taken.
	pub fn bool_func_p<F>(&mut self, name: &str, shorthand: &str, usage: &str, cb: F)
	-> Result<&mut Flag, FlagError>
	where F: Fn(&str) -> Result<(), BoxError> + Send + Sync + 'static {
		self.var(Box::new(FuncValue::new_bool(cb)), name, shorthand, usage)
	}
}



#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn t_scalars() {
		let mut set = FlagSet::new("t");
		let b = set.bool("bool", false, "").unwrap();
		let s = set.string_p("string", "s", "0", "").unwrap();
		let n = set.i64("int64", 0, "").unwrap();
		let u = set.usize("uint", 0, "").unwrap();
		let d = set.duration("duration", Duration::from_secs(5), "").unwrap();
		let ip = set.ip("ip", IpAddr::from([127, 0, 0, 1]), "").unwrap();
		let size = set.byte_size("size", ByteSize::b(0), "").unwrap();

		assert_eq!(set.lookup("duration").map(Flag::default_value), Some("5s"));

		set.parse([
			"--bool",
			"-s", "hello",
			"--int64=0x23",
			"--uint", "24",
			"--duration=2m",
			"--ip=10.11.12.13",
			"--size=2MB",
		]).unwrap();

		assert!(b.get());
		assert_eq!(s.get(), "hello");
		assert_eq!(n.get(), 0x23);
		assert_eq!(u.get(), 24);
		assert_eq!(d.get(), Duration::from_secs(120));
		assert_eq!(ip.get(), IpAddr::from([10, 11, 12, 13]));
		assert_eq!(size.get(), ByteSize::b(2_000_000));
	}

	#[test]
	fn t_var() {
		let mut set = FlagSet::new("t");
		let h = Handle::new(99_u16);
		set.u16_var(&h, "port", "p", 8080, "").unwrap();
		assert_eq!(h.get(), 8080, "Declaring should reset to the default.");

		set.parse(["-p1234"]).unwrap();
		assert_eq!(h.get(), 1234);
	}

	#[test]
	fn t_collections() {
		let mut set = FlagSet::new("t");
		let ints = set.i32_slice("ints", vec![9], "").unwrap();
		let arr = set.string_array("arr", Vec::new(), "").unwrap();
		let map = set.string_to_int("map", BTreeMap::new(), "").unwrap();
		let count = set.count_p("verbose", "v", "").unwrap();

		set.parse([
			"--ints=1,2", "--ints=3",
			"--arr=a,b", "--arr=c",
			"--map=a=1,b=2", "--map", "c=3",
			"-vvv", "--verbose",
		]).unwrap();

		assert_eq!(ints.get(), [1, 2, 3]);
		assert_eq!(arr.get(), ["a,b", "c"]);
		assert_eq!(map.get().len(), 3);
		assert_eq!(count.get(), 4);
	}

	#[test]
	fn t_count_assign() {
		let mut set = FlagSet::new("t");
		let count = set.count_p("verbose", "v", "").unwrap();
		set.parse(["-v=3", "-v"]).unwrap();
		assert_eq!(count.get(), 4);
	}

	#[test]
	fn t_validator() {
		let mut set = FlagSet::new("t");
		let h = Handle::new(1_u8);
		let value = ScalarValue::new(h.clone())
			.with_validator(|n: &u8| if *n <= 9 { Ok(()) } else { Err("level must be 0-9".to_owned()) });
		set.scalar_with(value, "level", "l", "").unwrap();

		set.parse(["-l", "7"]).unwrap();
		assert_eq!(h.get(), 7);

		let err = set.parse(["-l", "10"]).unwrap_err();
		assert_eq!(err.to_string(), r#"invalid argument "10" for "-l, --level" flag: level must be 0-9"#);
		assert_eq!(h.get(), 7);
	}
}
