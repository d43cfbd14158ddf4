//! Live input formatting for the contact form
//!
//! These run on every keystroke (phone) or when a field loses focus (names),
//! so they only reshape the text and never reject it.

use regex::Regex;
use std::sync::LazyLock;

static LOCAL_GROUPS: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"([0-9])([0-9])([0-9]{2})([0-9]{2})([0-9]{2})([0-9]{2})")
		.expect("LOCAL_GROUPS: invalid regex pattern")
});

static INTERNATIONAL_GROUPS: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"([0-9]{3})([0-9])([0-9]{2})([0-9]{2})([0-9]{2})([0-9]{2})")
		.expect("INTERNATIONAL_GROUPS: invalid regex pattern")
});

const LOCAL_MAX_DIGITS: usize = 10;
const INTERNATIONAL_MAX_DIGITS: usize = 12;

/// Reformats whatever the visitor typed into the phone input.
///
/// Non-digits are dropped. Numbers starting with `0` are capped at ten digits
/// and grouped as `0 6 12 34 56 78`; numbers starting with `212` are capped at
/// twelve digits and grouped as `+212 6 12 34 56 78`. Grouping only applies
/// once the number is complete.
///
/// # Examples
///
/// ```
/// use mnd_permis_forms::formatting::format_phone_input;
///
/// assert_eq!(format_phone_input("0612345678"), "0 6 12 34 56 78");
/// assert_eq!(format_phone_input("+212612345678"), "+212 6 12 34 56 78");
/// assert_eq!(format_phone_input("06-12"), "0612");
/// ```
pub fn format_phone_input(raw: &str) -> String {
	let mut digits: String = raw.chars().filter(char::is_ascii_digit).collect();

	if digits.starts_with('0') {
		digits.truncate(LOCAL_MAX_DIGITS);
		if digits.len() > 1 {
			return LOCAL_GROUPS
				.replacen(&digits, 1, "${1} ${2} ${3} ${4} ${5} ${6}")
				.into_owned();
		}
		digits
	} else if digits.starts_with("212") {
		digits.truncate(INTERNATIONAL_MAX_DIGITS);
		let grouped = INTERNATIONAL_GROUPS.replacen(&digits, 1, "${1} ${2} ${3} ${4} ${5} ${6}");
		format!("+{grouped}")
	} else {
		digits
	}
}

/// Upper-cases the first character of a name and lower-cases the rest.
///
/// ```
/// use mnd_permis_forms::formatting::capitalize_name;
///
/// assert_eq!(capitalize_name("eL aMRANI"), "El amrani");
/// assert_eq!(capitalize_name("élodie"), "Élodie");
/// ```
pub fn capitalize_name(raw: &str) -> String {
	let mut chars = raw.chars();
	match chars.next() {
		Some(first) => first
			.to_uppercase()
			.chain(chars.as_str().to_lowercase().chars())
			.collect(),
		None => String::new(),
	}
}
