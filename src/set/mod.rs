/*!
# Flagpole: Flag Sets.

A [`FlagSet`] owns a group of declared flags and everything that happens to
them: name resolution, parsing, value assignment, and the policy applied
when something goes wrong.
*/

mod declare;
mod query;

use crate::{
	abbrev,
	ArgCount,
	BoxError,
	ErrorHandling,
	Flag,
	FlagError,
	Tolerance,
	usage,
	Value,
	walk::{
		Event,
		Walker,
	},
};
use indexmap::IndexSet;
use std::{
	collections::{
		HashMap,
		HashSet,
	},
	fmt,
	io::Write,
	sync::Arc,
};



/// # Normalization Callback.
type NormalizeFn = Box<dyn Fn(&str) -> String + Send + Sync>;

/// # Usage Callback.
type UsageFn = Arc<dyn Fn(&mut FlagSet) + Send + Sync>;



/// # Flag Set.
///
/// Declare flags, then call [`FlagSet::parse`] with the arguments. Values are
/// written to the [`Handle`](crate::Handle)s returned by the declaration
/// methods; everything else (positionals, what was set, etc.) can be
/// queried from the set afterwards.
///
/// ## Examples
///
/// ```
/// use flagpole::FlagSet;
///
/// let mut flags = FlagSet::new("demo");
/// let verbose = flags.bool_p("verbose", "v", false, "say more").unwrap();
/// let name = flags.string("name", "world", "who to greet").unwrap();
///
/// flags.parse(["-v", "--name", "Bob", "extra"]).unwrap();
/// assert!(verbose.get());
/// assert_eq!(name.get(), "Bob");
/// assert_eq!(flags.args(), ["extra"]);
/// ```
pub struct FlagSet {
	/// # Name.
	name: String,

	/// # Parsed?
	parsed: bool,

	/// # Flags (Declaration Order).
	flags: Vec<Flag>,

	/// # Normalized Name to Index.
	formal: HashMap<String, usize>,

	/// # Shorthand to Index.
	shorthands: HashMap<String, usize>,

	/// # Set Flag Indexes (First-Set Order).
	actual: IndexSet<usize>,

	/// # Names That Collided on Re-Normalization.
	conflicts: HashSet<String>,

	/// # Positional Arguments.
	args: Vec<String>,

	/// # Positional Count at `--`.
	args_len_at_dash: Option<usize>,

	/// # Error Handling.
	error_handling: ErrorHandling,

	/// # Tolerance.
	tolerance: Tolerance,

	/// # Interspersed Positionals?
	interspersed: bool,

	/// # POSIX Mode?
	posix: bool,

	/// # Sort Flags When Visiting?
	sort_flags: bool,

	/// # Resolve Long-Name Abbreviations?
	abbreviations: bool,

	/// # Positional Count Requirements.
	arg_counts: Vec<ArgCount>,

	/// # Name Normalization.
	normalize: Option<NormalizeFn>,

	/// # Output Sink.
	output: Box<dyn Write + Send>,

	/// # Usage Callback.
	usage: Option<UsageFn>,
}

impl fmt::Debug for FlagSet {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FlagSet")
			.field("name", &self.name)
			.field("parsed", &self.parsed)
			.field("flags", &self.flags)
			.field("args", &self.args)
			.field("args_len_at_dash", &self.args_len_at_dash)
			.field("error_handling", &self.error_handling)
			.field("tolerance", &self.tolerance)
			.field("interspersed", &self.interspersed)
			.field("posix", &self.posix)
			.finish_non_exhaustive()
	}
}

impl Default for FlagSet {
	fn default() -> Self { Self::new("") }
}

/// ## Construction and Settings.
impl FlagSet {
	#[must_use]
	/// # New.
	///
	/// Create an empty set using the default settings: errors are returned
	/// rather than acted on, unknown flags are errors, flags and
	/// positionals may be interspersed, and long names can be abbreviated.
	pub fn new<S: Into<String>>(name: S) -> Self {
		Self {
			name: name.into(),
			parsed: false,
			flags: Vec::new(),
			formal: HashMap::new(),
			shorthands: HashMap::new(),
			actual: IndexSet::new(),
			conflicts: HashSet::new(),
			args: Vec::new(),
			args_len_at_dash: None,
			error_handling: ErrorHandling::Continue,
			tolerance: Tolerance::default(),
			interspersed: true,
			posix: true,
			sort_flags: true,
			abbreviations: true,
			arg_counts: Vec::new(),
			normalize: None,
			output: Box::new(std::io::stderr()),
			usage: None,
		}
	}

	#[must_use]
	/// # With Error Handling.
	pub fn with_error_handling(mut self, mode: ErrorHandling) -> Self {
		self.error_handling = mode;
		self
	}

	#[must_use]
	/// # With Tolerance.
	///
	/// ## Examples
	///
	/// ```
	/// use flagpole::{FlagSet, Tolerance};
	///
	/// let mut flags = FlagSet::new("demo").with_tolerance(Tolerance::lenient());
	/// let quiet = flags.bool("quiet", false, "say less").unwrap();
	///
	/// flags.parse(["--mystery", "value", "--quiet", "file"]).unwrap();
	/// assert!(quiet.get());
	/// assert_eq!(flags.args(), ["file"]);
	/// ```
	pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
		self.tolerance = tolerance;
		self
	}

	#[must_use]
	/// # With Interspersed Positionals.
	///
	/// When disabled, the first bare argument after a flag ends flag
	/// processing; it and everything after it are positional.
	pub fn with_interspersed(mut self, interspersed: bool) -> Self {
		self.interspersed = interspersed;
		self
	}

	#[must_use]
	/// # With POSIX Mode.
	///
	/// When disabled, single-dash words like `-name=value` are also matched
	/// against long names.
	pub fn with_posix(mut self, posix: bool) -> Self {
		self.posix = posix;
		self
	}

	#[must_use]
	/// # With Sorted Flags.
	///
	/// When disabled, [`FlagSet::visit`] and friends use declaration (or
	/// first-set) order instead.
	pub fn with_sort_flags(mut self, sort: bool) -> Self {
		self.sort_flags = sort;
		self
	}

	#[must_use]
	/// # With Abbreviations.
	///
	/// When enabled (the default), `--verb` will match `--verbose` so long as
	/// no other long name starts with `verb`.
	pub fn with_abbreviations(mut self, abbreviations: bool) -> Self {
		self.abbreviations = abbreviations;
		self
	}

	#[must_use]
	/// # With Positional Count Requirement.
	///
	/// ## Examples
	///
	/// ```
	/// use flagpole::{ArgCount, FlagSet};
	///
	/// let mut flags = FlagSet::new("demo").with_arg_count(ArgCount::at_least(1));
	/// assert!(flags.parse(Vec::<String>::new()).is_err());
	/// ```
	pub fn with_arg_count(mut self, count: ArgCount) -> Self {
		self.arg_counts.push(count);
		self
	}

	#[must_use]
	/// # With Normalization Function.
	pub fn with_normalize_func<F>(mut self, cb: F) -> Self
	where F: Fn(&str) -> String + Send + Sync + 'static {
		self.set_normalize_func(cb);
		self
	}

	#[must_use]
	/// # With Output Sink.
	///
	/// Usage text, deprecation notices, and (outside
	/// [`ErrorHandling::Continue`]) errors are written here. The default is
	/// `stderr`.
	pub fn with_output<W>(mut self, out: W) -> Self
	where W: Write + Send + 'static {
		self.output = Box::new(out);
		self
	}

	#[must_use]
	/// # With Usage Callback.
	///
	/// Replace the default usage printer.
	pub fn with_usage<F>(mut self, cb: F) -> Self
	where F: Fn(&mut Self) + Send + Sync + 'static {
		self.usage = Some(Arc::new(cb));
		self
	}

	/// # Set Error Handling.
	pub fn set_error_handling(&mut self, mode: ErrorHandling) {
		self.error_handling = mode;
	}

	/// # Set Tolerance.
	pub fn set_tolerance(&mut self, tolerance: Tolerance) {
		self.tolerance = tolerance;
	}

	/// # Set Interspersed Positionals.
	pub fn set_interspersed(&mut self, interspersed: bool) {
		self.interspersed = interspersed;
	}

	/// # Set Sorted Flags.
	pub fn set_sort_flags(&mut self, sort: bool) { self.sort_flags = sort; }

	/// # Set Output Sink.
	pub fn set_output<W>(&mut self, out: W)
	where W: Write + Send + 'static {
		self.output = Box::new(out);
	}

	/// # Set Usage Callback.
	pub fn set_usage<F>(&mut self, cb: F)
	where F: Fn(&mut Self) + Send + Sync + 'static {
		self.usage = Some(Arc::new(cb));
	}

	/// # Set Normalization Function.
	///
	/// Names are normalized when declared and when looked up, letting
	/// `--dry_run` match `--dry-run`, for example.
	///
	/// Flags declared before the switch are re-keyed (and renamed) under the
	/// new function. If two of them end up with the same name, that name
	/// becomes unusable: looking it up during a parse will fail with
	/// [`FlagError::NameConflict`].
	///
	/// ## Examples
	///
	/// ```
	/// use flagpole::FlagSet;
	///
	/// let mut flags = FlagSet::new("demo");
	/// let dry = flags.bool("dry-run", false, "pretend").unwrap();
	/// flags.set_normalize_func(|name| name.replace('_', "-"));
	///
	/// flags.parse(["--dry_run"]).unwrap();
	/// assert!(dry.get());
	/// ```
	pub fn set_normalize_func<F>(&mut self, cb: F)
	where F: Fn(&str) -> String + Send + Sync + 'static {
		self.normalize = Some(Box::new(cb));

		let mut formal = HashMap::with_capacity(self.flags.len());
		let mut conflicts = HashSet::new();
		for idx in 0..self.flags.len() {
			let key = self.normalize_name(&self.flags[idx].name);
			if formal.contains_key(&key) {
				tracing::warn!(name = %key, "normalization collapsed two flags");
				conflicts.insert(key.clone());
			}
			else { formal.insert(key.clone(), idx); }
			self.flags[idx].name = key;
		}

		self.formal = formal;
		self.conflicts = conflicts;
	}
}

/// ## Getters.
impl FlagSet {
	#[must_use]
	/// # Name.
	pub fn name(&self) -> &str { &self.name }

	#[must_use]
	/// # Parsed?
	///
	/// Returns `true` once [`FlagSet::parse`] has been called.
	pub const fn parsed(&self) -> bool { self.parsed }

	#[must_use]
	/// # Error Handling.
	pub const fn error_handling(&self) -> ErrorHandling { self.error_handling }

	#[must_use]
	/// # Tolerance.
	pub const fn tolerance(&self) -> Tolerance { self.tolerance }

	#[must_use]
	/// # Interspersed Positionals?
	pub const fn interspersed(&self) -> bool { self.interspersed }

	#[must_use]
	/// # POSIX Mode?
	pub const fn posix(&self) -> bool { self.posix }

	#[must_use]
	/// # Sorted Flags?
	pub const fn sort_flags(&self) -> bool { self.sort_flags }

	#[must_use]
	/// # Abbreviations?
	pub const fn abbreviations(&self) -> bool { self.abbreviations }

	/// # Output Sink.
	pub fn output(&mut self) -> &mut (dyn Write + Send) { self.output.as_mut() }
}

/// ## Declaration.
impl FlagSet {
	/// # Declare Flag.
	///
	/// Add a flag backed by any [`Value`]. The typed declaration methods all
	/// end up here.
	///
	/// ## Errors
	///
	/// Returns an error if the name or shorthand is already taken. (Outside
	/// [`ErrorHandling::Continue`], the usual exit/panic applies instead.)
	pub fn var(&mut self, value: Box<dyn Value>, name: &str, shorthand: &str, usage: &str)
	-> Result<&mut Flag, FlagError> {
		let flag = Flag::new(name.to_owned(), shorthand.to_owned(), usage.to_owned(), value);
		let idx = match self.insert(flag) {
			Ok(idx) => idx,
			Err(e) => return Err(self.escalate(e)),
		};
		Ok(&mut self.flags[idx])
	}

	/// # Insert Flag.
	///
	/// Normalize the name, check for conflicts, and store the flag.
	fn insert(&mut self, mut flag: Flag) -> Result<usize, FlagError> {
		flag.name = self.normalize_name(&flag.name);
		self.check_insert(&flag)?;

		let idx = self.flags.len();
		tracing::trace!(name = %flag.name, shorthand = %flag.shorthand, "declared");
		self.formal.insert(flag.name.clone(), idx);
		if ! flag.shorthand.is_empty() {
			self.shorthands.insert(flag.shorthand.clone(), idx);
		}
		if flag.changed { self.actual.insert(idx); }
		self.flags.push(flag);
		Ok(idx)
	}

	/// # Check Name and Shorthand Are Free.
	///
	/// The flag name is expected to be normalized already.
	fn check_insert(&self, flag: &Flag) -> Result<(), FlagError> {
		if self.formal.contains_key(&flag.name) || self.conflicts.contains(&flag.name) {
			return Err(FlagError::NameConflict { name: flag.name.clone() });
		}
		if let Some(&idx) = self.shorthands.get(&flag.shorthand) {
			return Err(FlagError::ShorthandConflict {
				shorthand: flag.shorthand.clone(),
				name: flag.name.clone(),
				existing: self.flags[idx].name.clone(),
			});
		}
		Ok(())
	}

	/// # Add Flags From Another Set.
	///
	/// Copies of the other set's flags are added, skipping any whose name is
	/// already present here. The copies share their destinations with the
	/// originals.
	///
	/// ## Errors
	///
	/// Returns an error if a copied flag's shorthand is already taken.
	pub fn add_flag_set(&mut self, other: &Self) -> Result<(), FlagError> {
		for flag in &other.flags {
			let key = self.normalize_name(&flag.name);
			if ! self.formal.contains_key(&key) && ! self.conflicts.contains(&key) {
				self.insert(flag.clone())?;
			}
		}
		Ok(())
	}

	/// # Merge Another Set.
	///
	/// Like [`FlagSet::add_flag_set`], except any overlap is an error. Nothing
	/// is added unless everything can be.
	///
	/// ## Errors
	///
	/// Returns an error if any name or shorthand is already taken.
	pub fn merge(&mut self, other: &Self) -> Result<(), FlagError> {
		// Our normalization might collapse names the other set keeps apart.
		let mut names = HashSet::new();
		for flag in &other.flags {
			let mut copy = flag.clone();
			copy.name = self.normalize_name(&copy.name);
			self.check_insert(&copy)?;
			if ! names.insert(copy.name.clone()) {
				return Err(FlagError::NameConflict { name: copy.name });
			}
		}

		for flag in &other.flags { self.insert(flag.clone())?; }
		Ok(())
	}
}

/// ## Metadata.
impl FlagSet {
	/// # Mark Deprecated.
	///
	/// Deprecated flags still work, but using one prints a notice to the
	/// output sink. They are also hidden from the usage table.
	///
	/// ## Errors
	///
	/// Returns an error if there is no such flag.
	pub fn mark_deprecated(&mut self, name: &str, message: &str) -> Result<(), FlagError> {
		let flag = self.require_mut(name)?;
		flag.deprecated = Some(message.to_owned());
		flag.hidden = true;
		Ok(())
	}

	/// # Mark Shorthand Deprecated.
	///
	/// The long form keeps working quietly; the shorthand prints a notice,
	/// and is left out of the usage table.
	///
	/// ## Errors
	///
	/// Returns an error if there is no such flag.
	pub fn mark_shorthand_deprecated(&mut self, name: &str, message: &str) -> Result<(), FlagError> {
		let flag = self.require_mut(name)?;
		flag.shorthand_deprecated = Some(message.to_owned());
		Ok(())
	}

	/// # Mark Hidden.
	///
	/// ## Errors
	///
	/// Returns an error if there is no such flag.
	pub fn mark_hidden(&mut self, name: &str) -> Result<(), FlagError> {
		self.require_mut(name)?.hidden = true;
		Ok(())
	}

	/// # Set Annotation.
	///
	/// Annotations are free-form metadata; the parser ignores them.
	///
	/// ## Errors
	///
	/// Returns an error if there is no such flag.
	pub fn set_annotation<S>(&mut self, name: &str, key: &str, values: Vec<S>)
	-> Result<(), FlagError>
	where S: Into<String> {
		let flag = self.require_mut(name)?;
		flag.annotations.insert(key.to_owned(), values.into_iter().map(Into::into).collect());
		Ok(())
	}

	/// # Look Up (Mutable), or Error.
	fn require_mut(&mut self, name: &str) -> Result<&mut Flag, FlagError> {
		self.lookup_mut(name).ok_or_else(|| FlagError::NoSuchFlag { name: name.to_owned() })
	}
}

/// ## Parsing.
impl FlagSet {
	/// # Parse.
	///
	/// Walk the arguments (not including the program name), assigning flag
	/// values and collecting positionals.
	///
	/// ## Errors
	///
	/// Unknown flags, missing or invalid values, and positional count
	/// violations are all errors. What happens next depends on the
	/// [`ErrorHandling`] mode; with the default, the error is simply
	/// returned. Flags assigned before the error stay assigned.
	pub fn parse<I, S>(&mut self, args: I) -> Result<(), FlagError>
	where I: IntoIterator<Item=S>, S: Into<String> {
		self.parse_all(args, |_, _| Ok(()))
	}

	/// # Parse (With Visitor).
	///
	/// Same as [`FlagSet::parse`], except `cb` is called with the flag and
	/// raw value after each successful assignment, in command-line order.
	///
	/// ## Examples
	///
	/// ```
	/// use flagpole::FlagSet;
	///
	/// let mut flags = FlagSet::new("demo");
	/// flags.bool_p("all", "a", false, "everything").unwrap();
	/// flags.string_p("sep", "s", ",", "separator").unwrap();
	///
	/// let mut seen = Vec::new();
	/// flags.parse_all(["-as", ";"], |flag, raw| {
	///     seen.push(format!("{}={raw}", flag.name()));
	///     Ok(())
	/// }).unwrap();
	/// assert_eq!(seen, ["all=true", "sep=;"]);
	/// ```
	///
	/// ## Errors
	///
	/// Same as [`FlagSet::parse`], plus [`FlagError::Callback`] if the
	/// callback returns an error.
	pub fn parse_all<I, S, F>(&mut self, args: I, mut cb: F) -> Result<(), FlagError>
	where
		I: IntoIterator<Item=S>,
		S: Into<String>,
		F: FnMut(&Flag, &str) -> Result<(), BoxError>,
	{
		self.parsed = true;
		self.args.clear();
		self.args_len_at_dash = None;

		let res = self.walk(Walker::new(args), &mut cb)
			.and_then(|()| self.check_arg_counts());
		res.map_err(|e| self.escalate(e))
	}

	/// # Set.
	///
	/// Assign a value programmatically, exactly as if it had been passed on
	/// the command line. Abbreviations are not accepted here.
	///
	/// ## Errors
	///
	/// Returns an error if the flag does not exist, collides with another
	/// after normalization, or rejects the value.
	pub fn set(&mut self, name: &str, value: &str) -> Result<(), FlagError> {
		let idx = self.resolve_long_exact(name)?
			.ok_or_else(|| FlagError::NoSuchFlag { name: name.to_owned() })?;
		self.apply(idx, value, false)
	}

	/// # Walk.
	fn walk(&mut self, mut walker: Walker, cb: &mut dyn FnMut(&Flag, &str) -> Result<(), BoxError>)
	-> Result<(), FlagError> {
		while let Some(next) = walker.next(self) {
			match next? {
				Event::Assign { index, raw, shorthand } => {
					self.apply(index, &raw, shorthand)?;
					let flag = &self.flags[index];
					cb(flag, &raw).map_err(|source| FlagError::Callback {
						name: flag.name.clone(),
						source,
					})?;
				},
				Event::Positional(arg) => {
					tracing::debug!(%arg, "positional");
					self.args.push(arg);
				},
				Event::Terminator => {
					tracing::debug!(at = self.args.len(), "terminator");
					self.args_len_at_dash = Some(self.args.len());
				},
			}
		}
		Ok(())
	}

	/// # Apply Assignment.
	fn apply(&mut self, idx: usize, raw: &str, shorthand: bool) -> Result<(), FlagError> {
		let flag = &mut self.flags[idx];
		if let Err(source) = flag.value.set(raw) {
			return Err(FlagError::InvalidValue {
				name: flag.display_name(),
				raw: raw.to_owned(),
				source,
			});
		}
		tracing::debug!(flag = %flag.name, raw, "assigned");

		flag.changed = true;
		self.actual.insert(idx);

		// Write failures aren't worth failing the parse over.
		if let Some(msg) = flag.deprecated.as_deref() {
			tracing::warn!(flag = %flag.name, "deprecated flag used");
			let _ = writeln!(self.output, "Flag --{} has been deprecated, {msg}", flag.name);
		}
		if shorthand {
			if let Some(msg) = flag.shorthand_deprecated.as_deref() {
				tracing::warn!(flag = %flag.name, "deprecated shorthand used");
				let _ = writeln!(self.output, "Flag shorthand -{} has been deprecated, {msg}", flag.shorthand);
			}
		}

		Ok(())
	}

	/// # Check Positional Counts.
	fn check_arg_counts(&self) -> Result<(), FlagError> {
		let actual = self.args.len();
		for count in &self.arg_counts {
			if ! count.check(actual) {
				return Err(FlagError::ArgCountViolation {
					bound: count.bound,
					expected: count.n,
					actual,
				});
			}
		}
		Ok(())
	}

	/// # Escalate Error.
	///
	/// Help requests always trigger the usage callback. Beyond that, what
	/// happens depends on the error-handling mode.
	fn escalate(&mut self, err: FlagError) -> FlagError {
		if err.is_help() { self.usage(); }

		match self.error_handling {
			ErrorHandling::Continue => err,
			ErrorHandling::Exit => {
				if ! err.is_help() {
					let _ = writeln!(self.output, "{err}");
					self.usage();
				}
				let _ = self.output.flush();
				std::process::exit(err.exit_code());
			},
			ErrorHandling::Panic => {
				if ! err.is_help() { let _ = writeln!(self.output, "{err}"); }
				let _ = self.output.flush();
				panic!("{err}");
			},
		}
	}
}

/// ## Lookup.
impl FlagSet {
	#[must_use]
	/// # Look Up Flag.
	///
	/// The name is normalized, but must otherwise match exactly.
	pub fn lookup(&self, name: &str) -> Option<&Flag> {
		self.lookup_index(name).map(|idx| &self.flags[idx])
	}

	/// # Look Up Flag (Mutable).
	pub fn lookup_mut(&mut self, name: &str) -> Option<&mut Flag> {
		self.lookup_index(name).map(|idx| &mut self.flags[idx])
	}

	#[must_use]
	/// # Look Up Flag by Shorthand.
	///
	/// An empty shorthand never matches anything.
	///
	/// ## Panics
	///
	/// This will panic if given more than one character; shorthands are
	/// single letters.
	pub fn lookup_by_shorthand(&self, shorthand: &str) -> Option<&Flag> {
		assert!(
			shorthand.chars().nth(1).is_none(),
			"can not look up shorthand which is more than one character: {shorthand:?}",
		);
		if shorthand.is_empty() { None }
		else { self.resolve_short(shorthand).map(|idx| &self.flags[idx]) }
	}

	#[must_use]
	/// # Changed?
	///
	/// Returns `true` if the named flag exists and has been set.
	pub fn changed(&self, name: &str) -> bool {
		self.lookup(name).is_some_and(Flag::changed)
	}

	#[must_use]
	/// # Is Set?
	///
	/// Returns `true` if the named flag is among those set so far.
	pub fn is_set(&self, name: &str) -> bool {
		self.lookup_index(name).is_some_and(|idx| self.actual.contains(&idx))
	}

	#[must_use]
	/// # Positional Arguments.
	pub fn args(&self) -> &[String] { &self.args }

	#[must_use]
	/// # Positional Argument.
	pub fn arg(&self, idx: usize) -> Option<&str> {
		self.args.get(idx).map(String::as_str)
	}

	#[must_use]
	/// # Number of Positional Arguments.
	pub fn n_arg(&self) -> usize { self.args.len() }

	#[must_use]
	/// # Positional Count at `--`.
	///
	/// Returns the number of positionals that came before the `--`
	/// terminator, or `None` if there wasn't one.
	pub const fn args_len_at_dash(&self) -> Option<usize> { self.args_len_at_dash }

	#[must_use]
	/// # Number of Flags Set.
	pub fn n_flag(&self) -> usize { self.actual.len() }

	#[must_use]
	/// # Has Flags?
	pub fn has_flags(&self) -> bool { ! self.flags.is_empty() }

	#[must_use]
	/// # Has Visible Flags?
	pub fn has_available_flags(&self) -> bool { self.flags.iter().any(|f| ! f.hidden) }

	/// # Visit Set Flags.
	///
	/// Call `cb` for each flag that has been set, sorted by name unless
	/// sorting has been disabled.
	pub fn visit<F>(&self, mut cb: F)
	where F: FnMut(&Flag) {
		let mut idx: Vec<usize> = self.actual.iter().copied().collect();
		if self.sort_flags { idx.sort_by(|a, b| self.flags[*a].name.cmp(&self.flags[*b].name)); }
		for i in idx { cb(&self.flags[i]); }
	}

	/// # Visit All Flags.
	///
	/// Call `cb` for every flag, sorted by name unless sorting has been
	/// disabled.
	pub fn visit_all<F>(&self, mut cb: F)
	where F: FnMut(&Flag) {
		for flag in self.ordered() { cb(flag); }
	}

	/// # All Flags, In Visiting Order.
	fn ordered(&self) -> Vec<&Flag> {
		let mut out: Vec<&Flag> = self.flags.iter().collect();
		if self.sort_flags { out.sort_by(|a, b| a.name.cmp(&b.name)); }
		out
	}
}

/// ## Usage.
impl FlagSet {
	#[must_use]
	/// # Flag Usage Table.
	///
	/// Return the help table for all visible flags, one per line.
	pub fn flag_usages(&self) -> String { usage::render(self.ordered()) }

	/// # Print Flag Usage Table.
	///
	/// Write [`FlagSet::flag_usages`] to the output sink.
	pub fn print_defaults(&mut self) {
		let table = self.flag_usages();
		let _ = self.output.write_all(table.as_bytes());
	}

	/// # Print Usage.
	///
	/// Call the usage callback, or if none was set, print a generic header
	/// followed by the flag table.
	pub fn usage(&mut self) {
		if let Some(cb) = self.usage.clone() { cb(self); }
		else {
			let _ =
				if self.name.is_empty() { writeln!(self.output, "Usage:") }
				else { writeln!(self.output, "Usage of {}:", self.name) };
			self.print_defaults();
		}
	}
}

/// ## Resolution (Internal).
impl FlagSet {
	/// # Normalize Name.
	pub(crate) fn normalize_name(&self, name: &str) -> String {
		match &self.normalize {
			Some(cb) => cb(name),
			None => name.to_owned(),
		}
	}

	/// # Exact Index.
	fn lookup_index(&self, name: &str) -> Option<usize> {
		let key = self.normalize_name(name);
		if self.conflicts.contains(&key) { None }
		else { self.formal.get(&key).copied() }
	}

	/// # Flag by Index.
	pub(crate) fn flag_at(&self, idx: usize) -> &Flag { &self.flags[idx] }

	/// # Resolve Long Name (Exact).
	pub(crate) fn resolve_long_exact(&self, name: &str) -> Result<Option<usize>, FlagError> {
		let key = self.normalize_name(name);
		if self.conflicts.contains(&key) { Err(FlagError::NameConflict { name: key }) }
		else { Ok(self.formal.get(&key).copied()) }
	}

	/// # Resolve Long Name.
	///
	/// Exact matches win; failing that, an unambiguous abbreviation will do.
	pub(crate) fn resolve_long(&self, name: &str) -> Result<Option<usize>, FlagError> {
		let exact = self.resolve_long_exact(name)?;
		if exact.is_some() || ! self.abbreviations { return Ok(exact); }

		let key = self.normalize_name(name);
		let Some(full) = abbrev::resolve(self.formal.keys().map(String::as_str), &key) else {
			return Ok(None);
		};
		tracing::trace!(abbreviation = %key, name = full, "expanded");
		if self.conflicts.contains(full) {
			return Err(FlagError::NameConflict { name: full.to_owned() });
		}
		Ok(self.formal.get(full).copied())
	}

	/// # Resolve Shorthand.
	pub(crate) fn resolve_short(&self, shorthand: &str) -> Option<usize> {
		if shorthand.is_empty() { None }
		else { self.shorthands.get(shorthand).copied() }
	}
}
