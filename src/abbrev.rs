/*!
# Flagpole: Abbreviations.

A prefix is a valid abbreviation if and only if exactly one word in the
candidate list starts with it. Whole words always resolve to themselves,
even when they are also a prefix of some longer word (`uint` vs `uint16`).
*/

use std::collections::BTreeMap;



#[must_use]
/// # Abbreviation Table.
///
/// Build a map of every valid abbreviation — including each full word — to
/// the word it stands for.
///
/// ## Examples
///
/// ```
/// let table = flagpole::abbrev::table(["hello", "help", "sync"]);
/// assert_eq!(table.get("hell").map(String::as_str), Some("hello"));
/// assert_eq!(table.get("s").map(String::as_str), Some("sync"));
/// assert!(table.get("hel").is_none()); // Ambiguous.
/// ```
pub fn table<I, S>(words: I) -> BTreeMap<String, String>
where I: IntoIterator<Item=S>, S: AsRef<str> {
	let words: Vec<String> = words.into_iter().map(|w| w.as_ref().to_owned()).collect();
	let mut out = BTreeMap::new();

	for word in &words {
		// Prefixes end on char boundaries, shortest first.
		for (end, _) in word.char_indices().skip(1).chain(std::iter::once((word.len(), ' '))) {
			let prefix = &word[..end];
			if prefix == word {
				out.insert(word.clone(), word.clone());
			}
			else if unique(&words, prefix) {
				out.entry(prefix.to_owned()).or_insert_with(|| word.clone());
			}
		}
	}

	out
}

/// # Resolve.
///
/// Return the word `prefix` exactly matches, or failing that, the only word
/// it is a prefix of.
pub fn resolve<'a, I>(words: I, prefix: &str) -> Option<&'a str>
where I: IntoIterator<Item=&'a str> {
	if prefix.is_empty() { return None; }

	let mut found = None;
	for word in words {
		if word == prefix { return Some(word); }
		if word.starts_with(prefix) {
			// Two hits is as bad as none, but an exact match might still
			// turn up later in the list.
			found = match found {
				None => Some(Some(word)),
				Some(_) => Some(None),
			};
		}
	}

	found.flatten()
}

/// # Unique Prefix?
fn unique(words: &[String], prefix: &str) -> bool {
	let mut hits = words.iter().filter(|w| w.starts_with(prefix));
	hits.next().is_some() && hits.next().is_none()
}



#[cfg(test)]
mod test {
	use super::*;

	const WORDS: [&str; 6] = ["hello", "help", "sync", "uint", "uint16", "uint64"];

	#[test]
	fn t_table() {
		let expected: BTreeMap<String, String> = [
			("hello", "hello"),
			("hell", "hello"),
			("help", "help"),
			("sync", "sync"),
			("syn", "sync"),
			("sy", "sync"),
			("s", "sync"),
			("uint", "uint"),
			("uint16", "uint16"),
			("uint1", "uint16"),
			("uint64", "uint64"),
			("uint6", "uint64"),
		].into_iter()
			.map(|(k, v)| (k.to_owned(), v.to_owned()))
			.collect();

		assert_eq!(table(WORDS), expected);
	}

	#[test]
	fn t_resolve() {
		for (prefix, expected) in [
			("hell", Some("hello")),
			("hel", None),
			("s", Some("sync")),
			("uint", Some("uint")),
			("uint1", Some("uint16")),
			("uint6", Some("uint64")),
			("uin", None),
			("", None),
			("nope", None),
		] {
			assert_eq!(
				resolve(WORDS.iter().copied(), prefix),
				expected,
				"Bug: wrong resolution for {prefix:?}.",
			);
		}
	}

	#[test]
	fn t_resolve_agrees() {
		// Every table entry should resolve the same way.
		for (k, v) in table(WORDS) {
			assert_eq!(resolve(WORDS.iter().copied(), &k), Some(v.as_str()));
		}
	}

	#[test]
	fn t_multibyte() {
		let t = table(["björk", "bach"]);
		assert_eq!(t.get("bj").map(String::as_str), Some("björk"));
		assert_eq!(t.get("bjö").map(String::as_str), Some("björk"));
		assert!(t.get("b").is_none());
	}
}
