/*!
# Benchmark: `flagpole::FlagSet::parse`
*/

use brunch::{
	Bench,
	benches,
};
use flagpole::FlagSet;

/// # Declared Set.
fn flags() -> FlagSet {
	let mut set = FlagSet::new("bench");
	set.bool_p("quiet", "q", false, "").unwrap();
	set.count_p("verbose", "v", "").unwrap();
	set.string_p("key", "k", "", "").unwrap();
	set.usize_p("threads", "t", 1, "").unwrap();
	set.string_slice("tag", Vec::new(), "").unwrap();
	set
}

/// # Arguments.
const ARGS: [&str; 9] = [
	"-qvv",
	"--key=val",
	"-t4",
	"--tag",
	"a,b,c",
	"/foo/bar",
	"--verb",
	"--",
	"/bar/baz",
];

benches!(
	Bench::new("flagpole::FlagSet::new + declarations")
		.run(flags),

	Bench::spacer(),

	Bench::new("flagpole::FlagSet::parse(mixed)")
		.run_seeded_with(flags, |mut f| f.parse(ARGS).is_ok()),

	Bench::new("flagpole::FlagSet::parse(positionals)")
		.run_seeded_with(flags, |mut f| f.parse(["one", "two", "three", "four"]).is_ok()),

	Bench::spacer(),

	Bench::new("flagpole::FlagSet::flag_usages()")
		.run_seeded_with(flags, |f| f.flag_usages()),
);
