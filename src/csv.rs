/*!
# Flagpole: CSV Records.

Slice and map values accept a single comma-separated record, with
double-quoted fields allowed to embed commas (and doubled quotes). This is
just enough CSV for that job: one record, no multi-line handling.
*/

use crate::value::ValueError;



/// # Read Record.
///
/// Split `src` into its fields.
///
/// ## Errors
///
/// Stray quotes inside an unquoted field, junk after a closing quote, and
/// unterminated quoted fields are all errors.
pub(crate) fn read_record(src: &str) -> Result<Vec<String>, ValueError> {
	let mut out = Vec::new();
	let mut field = String::new();
	let mut chars = src.chars().peekable();

	loop {
		// Quoted field.
		if chars.peek() == Some(&'"') {
			chars.next();
			loop {
				match chars.next() {
					Some('"') =>
						if chars.peek() == Some(&'"') {
							chars.next();
							field.push('"');
						}
						else { break; },
					Some(c) => { field.push(c); },
					None => return Err(ValueError::Csv { raw: src.to_owned(), reason: "unterminated quote" }),
				}
			}

			// Only a comma or the end may follow.
			match chars.next() {
				Some(',') => { out.push(std::mem::take(&mut field)); },
				None => {
					out.push(field);
					return Ok(out);
				},
				Some(_) => return Err(ValueError::Csv { raw: src.to_owned(), reason: "extraneous character after quote" }),
			}
		}
		// Bare field.
		else {
			loop {
				match chars.next() {
					Some(',') => {
						out.push(std::mem::take(&mut field));
						break;
					},
					Some('"') => return Err(ValueError::Csv { raw: src.to_owned(), reason: "bare quote in unquoted field" }),
					Some(c) => { field.push(c); },
					None => {
						out.push(field);
						return Ok(out);
					},
				}
			}
		}
	}
}

/// # Write Record.
///
/// Join fields with commas, quoting any that would otherwise read back
/// differently.
pub(crate) fn write_record<I, S>(fields: I) -> String
where I: IntoIterator<Item=S>, S: AsRef<str> {
	let mut out = String::new();
	for (idx, field) in fields.into_iter().enumerate() {
		if idx != 0 { out.push(','); }
		let field = field.as_ref();
		if needs_quotes(field) {
			out.push('"');
			for c in field.chars() {
				if c == '"' { out.push('"'); }
				out.push(c);
			}
			out.push('"');
		}
		else { out.push_str(field); }
	}
	out
}

/// # Needs Quotes?
fn needs_quotes(field: &str) -> bool {
	field.starts_with([' ', '\t']) ||
	field.contains([',', '"', '\r', '\n'])
}
