/*!
# Flagpole: Durations.

Durations are written as a sequence of decimal numbers with unit suffixes,
like `300ms`, `1.5h`, or `2h45m`. Valid units are `ns`, `us` (or `µs`),
`ms`, `s`, `m`, and `h`. A bare `0` is also fine.
*/

use std::{
	fmt::Write,
	time::Duration,
};
use super::ValueError;



/// # Units (Suffix, Nanoseconds).
const UNITS: [(&str, u128); 8] = [
	("ns", 1),
	("us", 1_000),
	("µs", 1_000),
	("μs", 1_000),
	("ms", 1_000_000),
	("s", 1_000_000_000),
	("m", 60_000_000_000),
	("h", 3_600_000_000_000),
];



/// # Parse Duration.
///
/// ## Errors
///
/// Returns an error for negative, malformed, or overflowing input.
///
/// ## Examples
///
/// ```
/// use std::time::Duration;
/// use flagpole::value::parse_duration;
///
/// assert_eq!(parse_duration("2m").unwrap(), Duration::from_secs(120));
/// assert_eq!(parse_duration("1.5s").unwrap(), Duration::from_millis(1500));
/// ```
pub fn parse_duration(raw: &str) -> Result<Duration, ValueError> {
	let syntax = || ValueError::Syntax { kind: "duration", raw: raw.to_owned() };

	let mut s = raw.strip_prefix('+').unwrap_or(raw);
	if s == "0" { return Ok(Duration::ZERO); }
	if s.is_empty() || s.starts_with('-') { return Err(syntax()); }

	let mut total: u128 = 0;
	while ! s.is_empty() {
		// The number.
		let end = s.find(|c: char| ! c.is_ascii_digit() && c != '.').unwrap_or(s.len());
		let (num, rest) = s.split_at(end);
		if num.is_empty() || num == "." { return Err(syntax()); }

		// The unit; the longest match wins so `ms` isn't read as `m`.
		let (unit, scale) = UNITS.iter()
			.filter(|(u, _)| rest.starts_with(u))
			.max_by_key(|(u, _)| u.len())
			.ok_or_else(syntax)?;
		s = &rest[unit.len()..];

		let (whole, frac) = num.split_once('.').unwrap_or((num, ""));
		if frac.contains('.') { return Err(syntax()); }

		let mut nanos: u128 =
			if whole.is_empty() { 0 }
			else {
				whole.parse::<u128>().map_err(|_| syntax())?
					.checked_mul(*scale)
					.ok_or_else(|| ValueError::Range { kind: "duration", raw: raw.to_owned() })?
			};

		// Fractional digits beyond the unit's precision are dropped.
		let mut place = *scale;
		for d in frac.bytes() {
			place /= 10;
			if place == 0 { break; }
			nanos += u128::from(d - b'0') * place;
		}

		total = total.checked_add(nanos)
			.ok_or_else(|| ValueError::Range { kind: "duration", raw: raw.to_owned() })?;
	}

	let secs = u64::try_from(total / 1_000_000_000)
		.map_err(|_| ValueError::Range { kind: "duration", raw: raw.to_owned() })?;
	#[expect(clippy::cast_possible_truncation, reason = "Remainder is under a billion.")]
	let sub = (total % 1_000_000_000) as u32;
	Ok(Duration::new(secs, sub))
}

#[must_use]
/// # Format Duration.
///
/// The output always parses back to the same value. Whole-second durations
/// render as hours/minutes/seconds (`1h30m0s`); shorter ones use the
/// largest fitting sub-second unit (`250ms`).
pub fn format_duration(d: Duration) -> String {
	let nanos = d.as_nanos();
	if nanos == 0 { return "0s".to_owned(); }

	// Under a second, use the smallest exact unit.
	if nanos < 1_000_000_000 {
		return
			if nanos < 1_000 { format!("{nanos}ns") }
			else if nanos < 1_000_000 { format!("{}µs", trim_frac(nanos, 1_000)) }
			else { format!("{}ms", trim_frac(nanos, 1_000_000)) };
	}

	let secs = d.as_secs();
	let (h, m, s) = (secs / 3600, (secs / 60) % 60, secs % 60);
	let frac = d.subsec_nanos();

	let mut out = String::new();
	if h != 0 { let _ = write!(out, "{h}h"); }
	if h != 0 || m != 0 { let _ = write!(out, "{m}m"); }
	if frac == 0 { let _ = write!(out, "{s}s"); }
	else {
		let exact = u128::from(s) * 1_000_000_000 + u128::from(frac);
		let _ = write!(out, "{}s", trim_frac(exact, 1_000_000_000));
	}
	out
}

/// # Decimal With Trailing Zeroes Trimmed.
fn trim_frac(n: u128, scale: u128) -> String {
	let whole = n / scale;
	let frac = n % scale;
	if frac == 0 { return whole.to_string(); }

	let width = scale.ilog10() as usize;
	let digits = format!("{frac:0width$}");
	format!("{whole}.{}", digits.trim_end_matches('0'))
}



#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn t_parse() {
		for (raw, expected) in [
			("0", Duration::ZERO),
			("5s", Duration::from_secs(5)),
			("2m", Duration::from_secs(120)),
			("1h30m", Duration::from_secs(5400)),
			("1.5h", Duration::from_secs(5400)),
			("300ms", Duration::from_millis(300)),
			("1.5s", Duration::from_millis(1500)),
			(".5s", Duration::from_millis(500)),
			("10us", Duration::from_micros(10)),
			("10µs", Duration::from_micros(10)),
			("7ns", Duration::from_nanos(7)),
			("1m1ms", Duration::from_millis(60_001)),
			("+3s", Duration::from_secs(3)),
		] {
			assert_eq!(parse_duration(raw), Ok(expected), "Bug: wrong duration for {raw:?}.");
		}

		for raw in ["", "5", "-1s", "s", "1x", "1.2.3s", ".s", "1h-2m"] {
			assert!(parse_duration(raw).is_err(), "Bug: {raw:?} should not parse.");
		}
	}

	#[test]
	fn t_format() {
		for (d, expected) in [
			(Duration::ZERO, "0s"),
			(Duration::from_secs(1), "1s"),
			(Duration::from_secs(120), "2m0s"),
			(Duration::from_secs(5400), "1h30m0s"),
			(Duration::from_millis(1500), "1.5s"),
			(Duration::from_millis(250), "250ms"),
			(Duration::from_micros(1500), "1.5ms"),
			(Duration::from_nanos(42), "42ns"),
		] {
			assert_eq!(format_duration(d), expected);
		}
	}

	#[test]
	fn t_round_trip() {
		for n in [1_u64, 999, 1_000, 1_234_567, 1_000_000_000, 61_000_000_001, 3_600_000_000_000] {
			let d = Duration::from_nanos(n);
			assert_eq!(parse_duration(&format_duration(d)), Ok(d), "Bug: {n}ns did not round-trip.");
		}
	}
}
