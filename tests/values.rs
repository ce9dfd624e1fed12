/*!
# Flagpole: Values and Metadata.
*/

use flagpole::{
	BoxError,
	FlagSet,
	Handle,
	Nargs,
	Value,
	value::SliceValue,
};
use std::{
	any::Any,
	collections::BTreeMap,
	fmt,
	sync::{
		Arc,
		atomic::{
			AtomicUsize,
			Ordering::SeqCst,
		},
	},
};



#[derive(Clone, Default)]
/// # User-Defined List.
struct FlagVar(Handle<Vec<String>>);

impl fmt::Display for FlagVar {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[{}]", self.0.read().join(" "))
	}
}

impl Value for FlagVar {
	fn set(&mut self, raw: &str) -> Result<(), BoxError> {
		self.0.update(|v| v.push(raw.to_owned()));
		Ok(())
	}

	fn type_tag(&self) -> &str { "flagVar" }
	fn as_any(&self) -> &dyn Any { self }
	fn clone_box(&self) -> Box<dyn Value> { Box::new(self.clone()) }
}



#[test]
fn t_user_defined() {
	let v = FlagVar::default();
	let mut set = FlagSet::new("test");
	set.var(Box::new(v.clone()), "v", "v", "usage").unwrap();

	set.parse(["--v=1", "-v2", "-v", "3"]).unwrap();
	assert_eq!(v.0.read().len(), 3);
	assert_eq!(v.to_string(), "[1 2 3]");
	assert_eq!(set.lookup("v").map(|f| f.type_tag()), Some("flagVar"));
}

#[test]
fn t_count() {
	let mut set = FlagSet::new("test");
	let v = set.count_p("verbose", "v", "verbosity").unwrap();

	for (args, expected) in [
		(&[][..], 0),
		(&["-v"][..], 1),
		(&["-vvv"][..], 3),
		(&["-v", "-v", "-v"][..], 3),
		(&["-v", "--verbose", "-v"][..], 3),
		(&["-v=3", "-v"][..], 4),
		(&["--verbose=0"][..], 0),
		(&["-v=0"][..], 0),
	] {
		let mut set = FlagSet::new("test");
		let v = set.count_p("verbose", "v", "verbosity").unwrap();
		set.parse(args.iter().copied()).unwrap();
		assert_eq!(v.get(), expected, "Bug: wrong count for {args:?}.");
		assert_eq!(set.get_count("verbose").unwrap(), expected);
	}

	assert!(set.parse(["--verbose=a"]).is_err(), "Bug: counts must be numeric.");
	assert_eq!(v.get(), 0);
}

#[test]
fn t_string_slice() {
	let mut set = FlagSet::new("test");
	let s = set.string_slice("ss", vec!["default".to_owned()], "").unwrap();

	set.parse(Vec::<String>::new()).unwrap();
	assert_eq!(s.get(), ["default"], "Bug: the default should survive an empty parse.");

	set.parse(["--ss=one,two", r#"--ss="three,four",five"#, "--ss="]).unwrap();
	assert_eq!(s.get(), ["one", "two", "three,four", "five"]);
	assert_eq!(set.lookup("ss").unwrap().value().to_string(), r#"[one,two,"three,four",five]"#);
}

#[test]
fn t_typed_slices() {
	let mut set = FlagSet::new("test");
	let ints = set.i64_slice("ints", Vec::new(), "").unwrap();
	let bools = set.bool_slice("bools", Vec::new(), "").unwrap();
	let floats = set.f64_slice("floats", Vec::new(), "").unwrap();

	set.parse(["--ints=1,-2", "--ints", "3", "--bools=true,F,1", "--floats=1.5"]).unwrap();
	assert_eq!(ints.get(), [1, -2, 3]);
	assert_eq!(bools.get(), [true, false, true]);
	assert_eq!(floats.get(), [1.5]);

	assert!(set.parse(["--ints=1,x"]).is_err(), "Bug: x is not an int.");
}

#[test]
fn t_slice_validator() {
	let h = Handle::new(Vec::<u32>::new());
	let value = SliceValue::new(h.clone())
		.with_validator(|n: &u32| if *n == 0 { Err("zero is not allowed".to_owned()) } else { Ok(()) });

	let mut set = FlagSet::new("test");
	set.slice_with(value, "ports", "p", "").unwrap();
	set.parse(["-p", "80,443"]).unwrap();
	assert_eq!(h.get(), [80, 443]);

	let err = set.parse(["-p", "1,0"]).unwrap_err();
	assert!(err.to_string().contains("zero is not allowed"));
}

#[test]
fn t_string_array() {
	let mut set = FlagSet::new("test");
	let arr = set.string_array_p("arr", "a", vec!["x".to_owned()], "").unwrap();

	set.parse(["--arr=one,two", "-a", "three", "--arr="]).unwrap();
	assert_eq!(arr.get(), ["one,two", "three", ""]);
}

#[test]
fn t_maps() {
	let mut set = FlagSet::new("test");
	let labels = set.string_to_string(
		"label",
		BTreeMap::from([("default".to_owned(), "x".to_owned())]),
		"",
	).unwrap();
	let limits = set.string_to_int("limit", BTreeMap::new(), "").unwrap();

	set.parse(["--label", "a=1,b=2", "--label=c=x,y", "--limit=cpu=2,mem=512"]).unwrap();

	let labels = labels.get();
	assert_eq!(labels.len(), 3, "Bug: the default should have been replaced.");
	assert_eq!(labels["a"], "1");
	assert_eq!(labels["c"], "x,y");

	let limits = limits.get();
	assert_eq!(limits["cpu"], 2);
	assert_eq!(limits["mem"], 512);

	assert!(set.parse(["--limit=cpu=two"]).is_err());
	assert!(set.parse(["--label=nope"]).is_err());
}

#[test]
fn t_nargs() {
	let mut set = FlagSet::new("test");
	let pair = set.string_slice("pair", Vec::new(), "").unwrap();
	set.lookup_mut("pair").unwrap().with_nargs(Nargs::Exact(2));
	let rest = set.i32_slice_p("nums", "n", Vec::new(), "").unwrap();
	set.lookup_mut("nums").unwrap().with_nargs(Nargs::Remaining);

	set.parse(["--pair", "a,b", "c", "-n", "1", "2", "3", "--pair=d", "tail"]).unwrap();
	assert_eq!(pair.get(), ["a,b", "c", "d"]);
	assert_eq!(rest.get(), [1, 2, 3]);
	assert_eq!(set.args(), ["tail"]);

	assert!(set.parse(["--pair", "only-one"]).is_err(), "Bug: two values were required.");
	assert!(set.parse(["-n", "--pair=x"]).is_err(), "Bug: at least one value was required.");
}

#[test]
fn t_optarg_delimiter() {
	let mut set = FlagSet::new("test");
	let color = set.string_p("color", "c", "auto", "").unwrap();
	set.lookup_mut("color").unwrap()
		.with_no_value_default("always")
		.with_optarg_delimiter(':');
	let all = set.bool_p("all", "a", false, "").unwrap();

	set.parse(["-c"]).unwrap();
	assert_eq!(color.get(), "always");

	set.parse(["-c:never"]).unwrap();
	assert_eq!(color.get(), "never");

	// Without the delimiter, an optional-value shorthand keeps clustering.
	set.parse(["-ca"]).unwrap();
	assert_eq!(color.get(), "always");
	assert!(all.get(), "Bug: -a should have been clustered.");
}

#[test]
fn t_func() {
	let hits = Arc::new(AtomicUsize::new(0));
	let seen = Handle::new(Vec::<String>::new());

	let mut set = FlagSet::new("test");
	{
		let seen = seen.clone();
		set.func_p("tag", "t", "add a tag", move |s| {
			if s.is_empty() { return Err("empty tag".into()); }
			seen.update(|v| v.push(s.to_owned()));
			Ok(())
		}).unwrap();
	}
	{
		let hits = Arc::clone(&hits);
		set.bool_func("ping", "ping", move |s| {
			assert_eq!(s, "true", "Bug: bool funcs default to true.");
			hits.fetch_add(1, SeqCst);
			Ok(())
		}).unwrap();
	}

	set.parse(["--tag=a", "-t", "b", "--ping", "--ping"]).unwrap();
	assert_eq!(seen.get(), ["a", "b"]);
	assert_eq!(hits.load(SeqCst), 2);

	let err = set.parse(["--tag="]).unwrap_err();
	assert!(err.to_string().ends_with("empty tag"));

	// Funcs print as nothing.
	assert_eq!(set.lookup("tag").unwrap().value().to_string(), "");
}

#[test]
fn t_visit_order() {
	let names = ["C", "B", "A", "D"];
	let mut set = FlagSet::new("test").with_sort_flags(false);
	for name in names { set.bool(name, false, "").unwrap(); }

	let mut got = Vec::new();
	set.visit_all(|f| got.push(f.name().to_owned()));
	assert_eq!(got, names, "Bug: visit_all should use declaration order.");

	// Set in reverse; visit should follow.
	for name in names.iter().rev() { set.set(name, "true").unwrap(); }
	let mut got = Vec::new();
	set.visit(|f| got.push(f.name().to_owned()));
	assert_eq!(got, ["D", "A", "B", "C"]);

	set.set_sort_flags(true);
	let mut got = Vec::new();
	set.visit(|f| got.push(f.name().to_owned()));
	assert_eq!(got, ["A", "B", "C", "D"]);
}

#[test]
fn t_merge() {
	let mut a = FlagSet::new("a");
	a.string_p("one", "o", "1", "").unwrap();

	let mut b = FlagSet::new("b");
	let two = b.string_p("two", "t", "2", "").unwrap();

	a.merge(&b).unwrap();
	a.parse(["-t", "changed"]).unwrap();
	assert_eq!(two.get(), "changed", "Bug: merged flags should share destinations.");

	// A second merge would collide.
	assert!(a.merge(&b).is_err());

	// Shorthands collide too.
	let mut c = FlagSet::new("c");
	c.bool_p("other", "o", false, "").unwrap();
	let err = a.merge(&c).unwrap_err();
	assert_eq!(
		err.to_string(),
		r#"unable to redefine "o" shorthand for "other": it's already used for "one""#,
	);
	assert!(a.lookup("other").is_none(), "Bug: failed merges should add nothing.");
}

#[test]
fn t_annotations() {
	let mut set = FlagSet::new("test");
	set.string("file", "", "").unwrap();
	set.set_annotation("file", "completion", vec!["*.txt", "*.md"]).unwrap();

	let flag = set.lookup("file").unwrap();
	assert_eq!(flag.annotations()["completion"], ["*.txt", "*.md"]);

	assert!(set.set_annotation("missing", "k", Vec::<String>::new()).is_err());
	assert!(set.mark_hidden("missing").is_err());
	assert!(set.mark_deprecated("missing", "gone").is_err());
}

#[test]
fn t_hidden() {
	let mut set = FlagSet::new("test");
	set.bool("secret", false, "").unwrap();
	assert!(set.has_available_flags());

	set.mark_hidden("secret").unwrap();
	assert!(set.has_flags());
	assert!(! set.has_available_flags(), "Bug: the only flag is hidden.");
	assert!(set.flag_usages().is_empty());

	// Hidden flags still work.
	set.parse(["--secret"]).unwrap();
	assert!(set.changed("secret"));
}
