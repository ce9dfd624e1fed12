/*!
# Flagpole: Argument Walker.

The walker consumes raw arguments left to right and turns them into a
stream of [`Event`]s: flag assignments, positionals, and the `--`
terminator. It consults the [`FlagSet`] to resolve names but never touches
values; applying assignments is the set's business.
*/

use crate::{
	csv,
	Flag,
	FlagError,
	FlagSet,
	Nargs,
};
use std::collections::VecDeque;



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Walker State.
enum State {
	/// # Looking for Flags.
	ReadingArgs,

	/// # Everything Else is Positional.
	AfterDashDash,

	/// # Finished.
	Done,
}



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Walk Event.
pub(crate) enum Event {
	/// # Flag Assignment.
	Assign {
		/// # Flag Index.
		index: usize,

		/// # Raw Value.
		raw: String,

		/// # Via Shorthand?
		shorthand: bool,
	},

	/// # Positional Argument.
	Positional(String),

	/// # End of Flags (`--`).
	Terminator,
}



/// # Argument Walker.
pub(crate) struct Walker {
	/// # Remaining Arguments.
	args: VecDeque<String>,

	/// # State.
	state: State,

	/// # Flag Seen?
	///
	/// Non-interspersed mode only stops at a bare argument once at least one
	/// flag has gone by.
	flags_seen: bool,

	/// # Queued Events.
	///
	/// A shorthand cluster can produce several events at once.
	pending: VecDeque<Result<Event, FlagError>>,
}

impl Walker {
	/// # New.
	pub(crate) fn new<I, S>(args: I) -> Self
	where I: IntoIterator<Item=S>, S: Into<String> {
		Self {
			args: args.into_iter().map(Into::into).collect(),
			state: State::ReadingArgs,
			flags_seen: false,
			pending: VecDeque::new(),
		}
	}

	/// # Next Event.
	///
	/// Errors are terminal; once one is returned, the walk is over.
	pub(crate) fn next(&mut self, set: &FlagSet) -> Option<Result<Event, FlagError>> {
		loop {
			if let Some(next) = self.pending.pop_front() {
				if next.is_err() {
					self.pending.clear();
					self.state = State::Done;
				}
				return Some(next);
			}

			match self.state {
				State::Done => return None,
				State::AfterDashDash => {
					let Some(next) = self.args.pop_front() else {
						self.state = State::Done;
						return None;
					};
					return Some(Ok(Event::Positional(next)));
				},
				State::ReadingArgs => {
					let Some(next) = self.args.pop_front() else {
						self.state = State::Done;
						return None;
					};
					self.classify(set, next);
				},
			}
		}
	}

	/// # Classify Token.
	fn classify(&mut self, set: &FlagSet, arg: String) {
		if arg == "--" {
			tracing::trace!("terminator");
			self.state = State::AfterDashDash;
			self.pending.push_back(Ok(Event::Terminator));
		}
		else if ! arg.starts_with('-') || arg == "-" {
			tracing::trace!(%arg, "positional");
			if ! set.interspersed() && self.flags_seen {
				self.state = State::AfterDashDash;
			}
			self.pending.push_back(Ok(Event::Positional(arg)));
		}
		else {
			self.flags_seen = true;
			if let Some(body) = arg.strip_prefix("--") { self.long(set, &arg, body); }
			else { self.short(set, &arg[1..]); }
		}
	}

	/// # Long Flag.
	fn long(&mut self, set: &FlagSet, arg: &str, body: &str) {
		tracing::trace!(arg, "long flag");
		if body.starts_with(['-', '=']) {
			self.pending.push_back(Err(FlagError::BadSyntax { arg: arg.to_owned() }));
			return;
		}

		let (name, attached) = match body.split_once('=') {
			Some((k, v)) => (k, Some(v)),
			None => (body, None),
		};

		match set.resolve_long(name) {
			Ok(Some(index)) => {
				let flag = set.flag_at(index);
				let next = self.value_for(flag, attached, arg);
				self.push_assign(index, next, false);
			},
			Ok(None) =>
				if name == "help" { self.pending.push_back(Err(FlagError::HelpRequested)); }
				else if set.tolerance().unknown_flags {
					tracing::trace!(arg, "skipping unknown flag");
					if attached.is_none() { self.strip_unknown_value(set); }
				}
				else {
					self.pending.push_back(Err(FlagError::UnknownFlag { name: format!("--{name}") }));
				},
			Err(e) => { self.pending.push_back(Err(e)); },
		}
	}

	/// # Short Flag(s).
	fn short(&mut self, set: &FlagSet, body: &str) {
		tracing::trace!(body, "short flag(s)");

		// Whole-word matches take priority over clustering: a multi-character
		// shorthand, or (outside POSIX mode) a long name.
		let (word, attached) = match body.split_once('=') {
			Some((k, v)) => (k, Some(v)),
			None => (body, None),
		};
		if 1 < word.chars().count() {
			if let Some(index) = set.resolve_short(word) {
				let next = self.value_for(set.flag_at(index), attached, &format!("-{word}"));
				self.push_assign(index, next, true);
				return;
			}
			if ! set.posix() {
				match set.resolve_long_exact(word) {
					Ok(Some(index)) => {
						let next = self.value_for(set.flag_at(index), attached, &format!("-{word}"));
						self.push_assign(index, next, false);
						return;
					},
					Ok(None) => {},
					Err(e) => {
						self.pending.push_back(Err(e));
						return;
					},
				}
			}
		}

		let mut rest = body;
		while let Some(c) = rest.chars().next() {
			let after = &rest[c.len_utf8()..];
			let Some(index) = set.resolve_short(&rest[..c.len_utf8()]) else {
				if c == 'h' {
					self.pending.push_back(Err(FlagError::HelpRequested));
					return;
				}
				if set.tolerance().unknown_flags {
					tracing::trace!(shorthand = %c, "skipping unknown shorthand");
					// An attached value goes down with it.
					if after.starts_with('=') { return; }
					if after.is_empty() { self.strip_unknown_value(set); }
					rest = after;
					continue;
				}
				self.pending.push_back(Err(FlagError::UnknownFlag { name: format!("-{c}") }));
				return;
			};

			let flag = set.flag_at(index);
			let next =
				// -s=value
				if let Some(v) = after.strip_prefix('=') {
					rest = "";
					Ok(v.to_owned())
				}
				// -s:value, for optional-value flags only.
				else if let Some(v) = flag.optarg_delimiter
					.filter(|_| flag.no_value_default.is_some() && ! flag.value.is_bool_like())
					.and_then(|d| after.strip_prefix(d))
				{
					rest = "";
					Ok(v.to_owned())
				}
				// -s (optional value), keep clustering.
				else if let Some(v) = flag.no_value_default.as_deref() {
					rest = after;
					Ok(v.to_owned())
				}
				// -svalue
				else if ! after.is_empty() {
					rest = "";
					Ok(after.to_owned())
				}
				// -s value
				else {
					rest = "";
					self.take_values(flag, &format!("-{c}"))
				};

			self.push_assign(index, next, true);
		}
	}

	/// # Long-Style Value.
	///
	/// The attached value, the no-value default, or the next argument(s), in
	/// that order.
	fn value_for(&mut self, flag: &Flag, attached: Option<&str>, arg: &str)
	-> Result<String, FlagError> {
		if let Some(v) = attached { Ok(v.to_owned()) }
		else if let Some(v) = flag.no_value_default.as_deref() { Ok(v.to_owned()) }
		else { self.take_values(flag, arg) }
	}

	/// # Take Value(s) From Following Arguments.
	fn take_values(&mut self, flag: &Flag, arg: &str) -> Result<String, FlagError> {
		let missing = || FlagError::MissingValue { name: arg.to_owned() };
		match flag.nargs {
			None | Some(Nargs::Exact(0 | 1)) => self.args.pop_front().ok_or_else(missing),
			Some(Nargs::Exact(n)) => {
				if self.args.len() < n { return Err(missing()); }
				let taken: Vec<String> = self.args.drain(..n).collect();
				Ok(csv::write_record(taken))
			},
			Some(Nargs::Remaining) => {
				let n = self.args.iter()
					.take_while(|a| ! looks_like_flag(a))
					.count();
				if n == 0 { return Err(missing()); }
				let taken: Vec<String> = self.args.drain(..n).collect();
				Ok(csv::write_record(taken))
			},
		}
	}

	/// # Queue Assignment.
	fn push_assign(&mut self, index: usize, raw: Result<String, FlagError>, shorthand: bool) {
		self.pending.push_back(raw.map(|raw| Event::Assign { index, raw, shorthand }));
	}

	/// # Strip Unknown Flag's Value.
	///
	/// When an unknown flag is skipped, the next argument goes with it if it
	/// doesn't look like a flag.
	fn strip_unknown_value(&mut self, set: &FlagSet) {
		if
			set.tolerance().unknown_values &&
			self.args.front().is_some_and(|a| ! a.starts_with('-'))
		{
			let _ = self.args.pop_front();
		}
	}
}

/// # Looks Like a Flag?
fn looks_like_flag(arg: &str) -> bool { arg.starts_with('-') && arg != "-" }



#[cfg(test)]
mod test {
	use super::*;

	/// # Walk Everything.
	fn walk(set: &FlagSet, args: &[&str]) -> Vec<Result<Event, String>> {
		let mut walker = Walker::new(args.iter().copied());
		let mut out = Vec::new();
		while let Some(next) = walker.next(set) {
			out.push(next.map_err(|e| e.to_string()));
		}
		out
	}

	/// # Assignment Shorthand.
	fn assign(index: usize, raw: &str, shorthand: bool) -> Result<Event, String> {
		Ok(Event::Assign { index, raw: raw.to_owned(), shorthand })
	}

	/// # Positional Shorthand.
	fn pos(raw: &str) -> Result<Event, String> { Ok(Event::Positional(raw.to_owned())) }

	/// # Test Set.
	///
	/// Indexes: 0 = a (bool), 1 = b (bool), 2 = s (string), 3 = n (int).
	fn set() -> FlagSet {
		let mut set = FlagSet::new("walk");
		set.bool_p("boola", "a", false, "").unwrap();
		set.bool_p("boolb", "b", false, "").unwrap();
		set.string_p("str", "s", "", "").unwrap();
		set.isize_p("num", "n", 0, "").unwrap();
		set
	}

	#[test]
	fn t_long() {
		let set = set();
		assert_eq!(
			walk(&set, &["--boola", "--str=x", "--str", "y", "--num=", "--str="]),
			vec![
				assign(0, "true", false),
				assign(2, "x", false),
				assign(2, "y", false),
				assign(3, "", false),
				assign(2, "", false),
			],
		);

		// Required values can look like anything.
		assert_eq!(walk(&set, &["--str", "--boola"]), vec![assign(2, "--boola", false)]);

		assert_eq!(
			walk(&set, &["--str"]),
			vec![Err("flag needs an argument: --str".to_owned())],
		);
	}

	#[test]
	fn t_short() {
		let set = set();
		assert_eq!(
			walk(&set, &["-ab", "-sfoo", "-s=bar", "-s", "baz", "-as", "x"]),
			vec![
				assign(0, "true", true),
				assign(1, "true", true),
				assign(2, "foo", true),
				assign(2, "bar", true),
				assign(2, "baz", true),
				assign(0, "true", true),
				assign(2, "x", true),
			],
		);

		// Earlier cluster members still go through before the error.
		assert_eq!(
			walk(&set, &["-az", "-b"]),
			vec![
				assign(0, "true", true),
				Err("unknown flag: -z".to_owned()),
			],
		);
	}

	#[test]
	fn t_positional() {
		let set = set();
		assert_eq!(
			walk(&set, &["one", "-", "", "--boola", "two", "--", "-s", "--x"]),
			vec![
				pos("one"),
				pos("-"),
				pos(""),
				assign(0, "true", false),
				pos("two"),
				Ok(Event::Terminator),
				pos("-s"),
				pos("--x"),
			],
		);
	}

	#[test]
	fn t_interspersed() {
		let mut set = set();
		set.set_interspersed(false);
		assert_eq!(
			walk(&set, &["first", "--boola", "break", "--boolb"]),
			vec![
				pos("first"),
				assign(0, "true", false),
				pos("break"),
				pos("--boolb"),
			],
		);
	}

	#[test]
	fn t_bad_syntax() {
		let set = set();
		for arg in ["---boola", "--=x", "--=", "---"] {
			assert_eq!(
				walk(&set, &[arg, "--boolb"]),
				vec![Err(format!("bad flag syntax: {arg}"))],
				"Bug: {arg:?} should be bad syntax.",
			);
		}
	}

	#[test]
	fn t_help() {
		let set = set();
		assert_eq!(walk(&set, &["--help"]), vec![Err("help requested".to_owned())]);
		assert_eq!(walk(&set, &["-ah"]), vec![assign(0, "true", true), Err("help requested".to_owned())]);
	}

	#[test]
	fn t_nargs() {
		let mut set = set();
		set.string_slice("list", Vec::new(), "").unwrap();
		set.string_slice("rest", Vec::new(), "").unwrap();
		set.lookup_mut("list").unwrap().with_nargs(Nargs::Exact(2));
		set.lookup_mut("rest").unwrap().with_nargs(Nargs::Remaining);

		assert_eq!(
			walk(&set, &["--list", "a,b", "c", "d"]),
			vec![assign(4, r#""a,b",c"#, false), pos("d")],
		);
		assert_eq!(
			walk(&set, &["--list", "a"]),
			vec![Err("flag needs an argument: --list".to_owned())],
		);
		assert_eq!(
			walk(&set, &["--rest", "a", "-", "b", "--boola"]),
			vec![assign(5, "a,-,b", false), assign(0, "true", false)],
		);
		assert_eq!(
			walk(&set, &["--rest", "--boola"]),
			vec![Err("flag needs an argument: --rest".to_owned())],
		);

		// An attached value wins.
		assert_eq!(walk(&set, &["--list=x", "y"]), vec![assign(4, "x", false), pos("y")]);
	}

	#[test]
	fn t_optarg_delimiter() {
		let mut set = set();
		set.string_p("opt", "o", "", "").unwrap();
		set.lookup_mut("opt")
			.unwrap()
			.with_no_value_default("auto")
			.with_optarg_delimiter(':');

		assert_eq!(
			walk(&set, &["-o", "-o:x", "-ao", "-oa"]),
			vec![
				assign(4, "auto", true),
				assign(4, "x", true),
				assign(0, "true", true),
				assign(4, "auto", true),
				assign(4, "auto", true),
				assign(0, "true", true),
			],
		);

		// Flags requiring a value take the delimiter as part of it.
		set.string_p("req", "r", "", "").unwrap();
		set.lookup_mut("req").unwrap().with_optarg_delimiter(':');
		assert_eq!(walk(&set, &["-r:x"]), vec![assign(5, ":x", true)]);
	}
}
