/*!
# Flagpole: Debug

This example declares a handful of flags, parses whatever arguments it is
fed, and prints the results.

Try something like:
cargo run --example debug -- -vv --name=Bob --tag a,b extra -- --not-a-flag
*/

use flagpole::{
	ErrorHandling,
	global,
};



fn main() {
	let (verbose, name, tags, threads) = {
		let mut set = global::command_line();
		set.set_error_handling(ErrorHandling::Exit);
		(
			set.count_p("verbose", "v", "more noise").unwrap(),
			set.string_p("name", "n", "world", "who to `greet`").unwrap(),
			set.string_slice_p("tag", "t", Vec::new(), "tags to apply").unwrap(),
			set.usize("threads", 1, "worker count").unwrap(),
		)
	};

	// Exits on error (or help).
	let _ = global::parse();

	let set = global::command_line();
	println!("\x1b[2mFLAGS:\x1b[0m");
	println!("verbose: {}", verbose.get());
	println!("name:    {}", name.get());
	println!("tags:    {:?}", tags.get());
	println!("threads: {}", threads.get());
	println!();

	println!("\x1b[2mCHANGED:\x1b[0m");
	set.visit(|f| println!("--{} = {}", f.name(), f.value()));
	println!();

	println!("\x1b[2mPOSITIONALS:\x1b[0m");
	println!("{:?}", set.args());
	if let Some(dash) = set.args_len_at_dash() {
		println!("({dash} before the terminator)");
	}
	println!();

	println!("\x1b[2mUSAGE:\x1b[0m");
	print!("{}", set.flag_usages());
}
