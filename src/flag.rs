/*!
# Flagpole: Flag.
*/

use crate::Value;
use std::collections::BTreeMap;



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Value Count.
///
/// By default a flag takes (at most) one value. List-type flags can be told
/// to gobble up several bare arguments instead, which are then joined into
/// a single comma-separated record before being handed to the value.
pub enum Nargs {
	/// # Exactly This Many.
	Exact(usize),

	/// # Everything Up to the Next Flag.
	Remaining,
}



#[derive(Debug, Clone)]
/// # Flag.
///
/// One declared option. Flags are created by the [`FlagSet`](crate::FlagSet)
/// declaration methods, which hand back a `&mut Flag` for any further
/// tweaking.
///
/// ## Examples
///
/// ```
/// use flagpole::FlagSet;
///
/// let mut flags = FlagSet::new("demo");
/// let level = flagpole::Handle::new(0_u8);
/// flags.u8_var(&level, "level", "l", 1, "compression level")
///     .unwrap()
///     .with_no_value_default("9");
///
/// flags.parse(["-l"]).unwrap();
/// assert_eq!(level.get(), 9);
/// ```
pub struct Flag {
	/// # (Normalized) Name.
	pub(crate) name: String,

	/// # Shorthand.
	pub(crate) shorthand: String,

	/// # Usage.
	pub(crate) usage: String,

	/// # Value.
	pub(crate) value: Box<dyn Value>,

	/// # Default Value (As String).
	pub(crate) default_value: String,

	/// # No-Value Default.
	pub(crate) no_value_default: Option<String>,

	/// # Changed?
	pub(crate) changed: bool,

	/// # Annotations.
	pub(crate) annotations: BTreeMap<String, Vec<String>>,

	/// # Deprecation Message.
	pub(crate) deprecated: Option<String>,

	/// # Shorthand Deprecation Message.
	pub(crate) shorthand_deprecated: Option<String>,

	/// # Hidden?
	pub(crate) hidden: bool,

	/// # Optional-Value Delimiter.
	pub(crate) optarg_delimiter: Option<char>,

	/// # Value Count.
	pub(crate) nargs: Option<Nargs>,
}

/// ## Getters.
impl Flag {
	#[must_use]
	/// # Name.
	pub fn name(&self) -> &str { &self.name }

	#[must_use]
	/// # Shorthand.
	///
	/// This is empty if the flag has none.
	pub fn shorthand(&self) -> &str { &self.shorthand }

	#[must_use]
	/// # Usage.
	pub fn usage(&self) -> &str { &self.usage }

	#[must_use]
	/// # Value.
	pub fn value(&self) -> &dyn Value { self.value.as_ref() }

	#[must_use]
	/// # Type Tag.
	pub fn type_tag(&self) -> &str { self.value.type_tag() }

	#[must_use]
	/// # Default Value.
	///
	/// The value's string form as it was when the flag was declared.
	pub fn default_value(&self) -> &str { &self.default_value }

	#[must_use]
	/// # No-Value Default.
	pub fn no_value_default(&self) -> Option<&str> { self.no_value_default.as_deref() }

	#[must_use]
	/// # Changed?
	///
	/// Returns `true` if the value has been set at least once.
	pub const fn changed(&self) -> bool { self.changed }

	#[must_use]
	/// # Annotations.
	pub const fn annotations(&self) -> &BTreeMap<String, Vec<String>> { &self.annotations }

	#[must_use]
	/// # Deprecation Message.
	pub fn deprecated(&self) -> Option<&str> { self.deprecated.as_deref() }

	#[must_use]
	/// # Shorthand Deprecation Message.
	pub fn shorthand_deprecated(&self) -> Option<&str> { self.shorthand_deprecated.as_deref() }

	#[must_use]
	/// # Hidden?
	pub const fn hidden(&self) -> bool { self.hidden }

	#[must_use]
	/// # Optional-Value Delimiter.
	pub const fn optarg_delimiter(&self) -> Option<char> { self.optarg_delimiter }

	#[must_use]
	/// # Value Count.
	pub const fn nargs(&self) -> Option<Nargs> { self.nargs }
}

/// ## Setters.
impl Flag {
	/// # With No-Value Default.
	///
	/// Make the value optional, substituting this when none is given.
	pub fn with_no_value_default<S>(&mut self, nvd: S) -> &mut Self
	where S: Into<String> {
		self.no_value_default = Some(nvd.into());
		self
	}

	/// # Without No-Value Default.
	///
	/// Make the value required, even for bool-like flags.
	pub fn without_no_value_default(&mut self) -> &mut Self {
		self.no_value_default = None;
		self
	}

	/// # With Optional-Value Delimiter.
	///
	/// Let an optional-value shorthand accept an attached value after this
	/// character, e.g. `-o:value` with `:`, where `-ovalue` would otherwise be
	/// read as a cluster. It has no effect on bool-like flags or flags that
	/// require a value.
	pub fn with_optarg_delimiter(&mut self, delimiter: char) -> &mut Self {
		self.optarg_delimiter = Some(delimiter);
		self
	}

	/// # With Value Count.
	pub fn with_nargs(&mut self, nargs: Nargs) -> &mut Self {
		self.nargs = Some(nargs);
		self
	}

	/// # With Hidden.
	///
	/// Hidden flags still work; they're just left out of the usage table.
	pub fn with_hidden(&mut self, hidden: bool) -> &mut Self {
		self.hidden = hidden;
		self
	}
}

impl Flag {
	#[must_use]
	/// # New.
	pub(crate) fn new(name: String, shorthand: String, usage: String, value: Box<dyn Value>) -> Self {
		let default_value = value.to_string();
		let no_value_default = value.no_value_default().map(str::to_owned);
		Self {
			name,
			shorthand,
			usage,
			value,
			default_value,
			no_value_default,
			changed: false,
			annotations: BTreeMap::new(),
			deprecated: None,
			shorthand_deprecated: None,
			hidden: false,
			optarg_delimiter: None,
			nargs: None,
		}
	}

	#[must_use]
	/// # Display Name.
	///
	/// This is how the flag is referred to in value errors: `-s, --name` or
	/// just `--name`.
	pub(crate) fn display_name(&self) -> String {
		if self.shorthand.is_empty() { format!("--{}", self.name) }
		else { format!("-{}, --{}", self.shorthand, self.name) }
	}
}
