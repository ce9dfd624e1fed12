/*!
# Flagpole: Command Line.

A process-wide [`FlagSet`] for programs that don't want to pass one
around. It is named after the running binary and exits on error, the way
most command-line tools would want.

## Examples

```no_run
use flagpole::global;

let verbose = global::command_line().bool_p("verbose", "v", false, "say more").unwrap();
global::parse();

if verbose.get() { println!("Positionals: {:?}", global::args()); }
```
*/

use crate::{
	ErrorHandling,
	FlagError,
	FlagSet,
};
use parking_lot::{
	Mutex,
	MutexGuard,
};
use std::{
	path::Path,
	sync::LazyLock,
};



/// # The Command-Line Set.
static COMMAND_LINE: LazyLock<Mutex<FlagSet>> = LazyLock::new(|| Mutex::new(fresh()));



/// # Command-Line Set.
///
/// Lock and return the global set, e.g. to declare flags on it.
///
/// The guard must be dropped before calling any of the other functions in
/// this module.
pub fn command_line() -> MutexGuard<'static, FlagSet> { COMMAND_LINE.lock() }

/// # Parse.
///
/// Parse the process arguments (minus the program path) against the global
/// set. Non-UTF-8 arguments are converted lossily.
///
/// Because the global set exits on error, this only returns if parsing
/// succeeds, unless its error handling has been changed.
///
/// ## Errors
///
/// Returns the parse error when the error handling mode is
/// [`ErrorHandling::Continue`].
pub fn parse() -> Result<(), FlagError> {
	let args = std::env::args_os()
		.skip(1)
		.map(|a| a.to_string_lossy().into_owned());
	COMMAND_LINE.lock().parse(args)
}

#[must_use]
/// # Parsed?
pub fn parsed() -> bool { COMMAND_LINE.lock().parsed() }

#[must_use]
/// # Positional Arguments.
pub fn args() -> Vec<String> { COMMAND_LINE.lock().args().to_vec() }

#[must_use]
/// # Positional Argument.
pub fn arg(idx: usize) -> Option<String> {
	COMMAND_LINE.lock().arg(idx).map(str::to_owned)
}

#[must_use]
/// # Positional Count.
pub fn n_arg() -> usize { COMMAND_LINE.lock().n_arg() }

#[must_use]
/// # Set Flag Count.
pub fn n_flag() -> usize { COMMAND_LINE.lock().n_flag() }

/// # Reset.
///
/// Replace the global set with a fresh, empty one.
pub fn reset() { *COMMAND_LINE.lock() = fresh(); }



/// # Fresh Set.
fn fresh() -> FlagSet {
	let name = std::env::args_os()
		.next()
		.and_then(|p| Path::new(&p).file_name().map(|n| n.to_string_lossy().into_owned()))
		.unwrap_or_default();
	FlagSet::new(name).with_error_handling(ErrorHandling::Exit)
}
