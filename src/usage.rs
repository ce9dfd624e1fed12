/*!
# Flagpole: Usage Table.
*/

use crate::Flag;
use std::fmt::Write;



/// # Render Usage Table.
///
/// Build the aligned, one-flag-per-line help table for the (non-hidden)
/// flags, in the order given.
pub(crate) fn render(flags: Vec<&Flag>) -> String {
	let mut lines: Vec<(String, String)> = Vec::with_capacity(flags.len());
	let mut width = 0;

	for flag in flags {
		if flag.hidden() { continue; }

		let mut left =
			if flag.shorthand().is_empty() || flag.shorthand_deprecated().is_some() {
				format!("      --{}", flag.name())
			}
			else { format!("  -{}, --{}", flag.shorthand(), flag.name()) };

		let (varname, usage) = unquote_usage(flag);
		if ! varname.is_empty() {
			left.push(' ');
			left.push_str(&varname);
		}

		if let Some(nvd) = flag.no_value_default() {
			match flag.type_tag() {
				"string" => { let _ = write!(left, "[=\"{nvd}\"]"); },
				"bool" | "boolfunc" => if nvd != "true" { let _ = write!(left, "[={nvd}]"); },
				"count" => if nvd != "+1" { let _ = write!(left, "[={nvd}]"); },
				_ => { let _ = write!(left, "[={nvd}]"); },
			}
		}

		// The widest left side, plus one for the separator.
		width = width.max(left.len() + 1);

		let mut right = usage;
		if ! is_zero_default(flag) {
			if flag.type_tag() == "string" {
				let _ = write!(right, " (default {:?})", flag.default_value());
			}
			else {
				let _ = write!(right, " (default {})", flag.default_value());
			}
		}
		if let Some(msg) = flag.deprecated() {
			let _ = write!(right, " (DEPRECATED: {msg})");
		}

		lines.push((left, right));
	}

	let indent = " ".repeat(width + 2);
	let mut out = String::new();
	for (left, right) in lines {
		let pad = " ".repeat(width - left.len() + 2);
		let right = right.replace('\n', &format!("\n{indent}"));
		let _ = writeln!(out, "{left}{pad}{right}");
	}
	out
}



/// # Unquote Usage.
///
/// Pull a placeholder name out of the usage text, if it has one wrapped in
/// backticks, otherwise derive one from the type. Returns the name and the
/// (de-backticked) usage.
fn unquote_usage(flag: &Flag) -> (String, String) {
	let usage = flag.usage();
	if let Some(start) = usage.find('`') {
		if let Some(len) = usage[start + 1..].find('`') {
			let end = start + 1 + len;
			let name = usage[start + 1..end].to_owned();
			let rest = format!("{}{}{}", &usage[..start], name, &usage[end + 1..]);
			return (name, rest);
		}
	}

	let name = match flag.type_tag() {
		"bool" | "boolfunc" => "",
		"func" => "value",
		"float64" => "float",
		"int64" => "int",
		"uint64" => "uint",
		"stringSlice" => "strings",
		"intSlice" => "ints",
		"uintSlice" => "uints",
		"boolSlice" => "bools",
		other => other,
	};
	(name.to_owned(), usage.to_owned())
}

/// # Zero Default?
///
/// Zero defaults are left out of the usage table.
fn is_zero_default(flag: &Flag) -> bool {
	let def = flag.default_value();
	match def {
		"" | "0" | "0s" | "false" | "[]" => true,
		_ => match flag.type_tag() {
			"ip" => def.parse::<std::net::IpAddr>().is_ok_and(|ip| ip.is_unspecified()),
			"ipNet" => matches!(def, "0.0.0.0/0" | "::/0"),
			"uuid" => def.bytes().all(|b| matches!(b, b'0' | b'-')),
			"byte-size" => def.starts_with('0') && ! def.contains('.'),
			_ => false,
		},
	}
}
