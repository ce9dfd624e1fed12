/*!
# Flagpole

Flagpole is a POSIX/GNU-style command-line flag parser built around a
[`FlagSet`]: declare typed flags, parse the arguments, then read the
values back through the [`Handle`]s the declarations returned.

It understands:
* long flags, with the value attached (`--name=value`) or following (`--name value`);
* shorthand flags, alone (`-v`), clustered (`-abc`), or with attached values (`-nvalue`, `-n=value`);
* optional values via per-flag no-value defaults;
* `--` termination, and (optionally) flags after positionals;
* unambiguous long-name abbreviations (`--verb` for `--verbose`);
* name normalization, deprecation, hiding, and annotations.

Every value type implements the small [`Value`] trait, so custom
types slot right in.



## Example

```
use flagpole::FlagSet;

let mut flags = FlagSet::new("demo");
let verbose = flags.count_p("verbose", "v", "more noise").unwrap();
let threads = flags.usize_p("threads", "t", 1, "worker `count`").unwrap();
let tags = flags.string_slice("tag", Vec::new(), "tags to apply").unwrap();

flags.parse(["-vv", "--threads=4", "--tag", "a,b", "--", "-not-a-flag"]).unwrap();

assert_eq!(verbose.get(), 2);
assert_eq!(threads.get(), 4);
assert_eq!(tags.get(), ["a", "b"]);
assert_eq!(flags.args(), ["-not-a-flag"]);
assert_eq!(flags.args_len_at_dash(), Some(0));
```



## Errors

Parse failures are routed through the set's [`ErrorHandling`] mode:
returned (the default), printed before exiting, or printed before
panicking. Unknown flags can be tolerated via [`Tolerance`].
*/

#![forbid(unsafe_code)]

#![deny(
	clippy::allow_attributes_without_reason,
	clippy::correctness,
	unreachable_pub,
)]

#![warn(
	clippy::complexity,
	clippy::nursery,
	clippy::pedantic,
	clippy::perf,
	clippy::style,

	clippy::allow_attributes,
	clippy::clone_on_ref_ptr,
	clippy::create_dir,
	clippy::filetype_is_file,
	clippy::format_push_string,
	clippy::get_unwrap,
	clippy::impl_trait_in_params,
	clippy::lossy_float_literal,
	clippy::missing_assert_message,
	clippy::missing_docs_in_private_items,
	clippy::needless_raw_strings,
	clippy::panic_in_result_fn,
	clippy::pub_without_shorthand,
	clippy::rest_pat_in_fully_bound_structs,
	clippy::semicolon_inside_block,
	clippy::str_to_string,
	clippy::string_to_string,
	clippy::todo,
	clippy::undocumented_unsafe_blocks,
	clippy::unneeded_field_pattern,
	clippy::unseparated_literal_suffix,
	clippy::unwrap_in_result,

	macro_use_extern_crate,
	missing_copy_implementations,
	missing_docs,
	non_ascii_idents,
	trivial_casts,
	trivial_numeric_casts,
	unused_crate_dependencies,
	unused_extern_crates,
	unused_import_braces,
)]

#![cfg_attr(docsrs, feature(doc_cfg))]



pub mod abbrev;
mod csv;
mod error;
mod flag;
pub mod global;
mod policy;
mod set;
mod usage;
pub mod value;
mod walk;

pub use error::{
	BoxError,
	FlagError,
};
pub use flag::{
	Flag,
	Nargs,
};
pub use policy::{
	ArgBound,
	ArgCount,
	ErrorHandling,
	Tolerance,
};
pub use set::FlagSet;
pub use value::{
	Handle,
	Value,
};
