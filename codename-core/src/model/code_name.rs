use std::fmt;

/// Normalizes a code-name string for comparison and storage.
///
/// - Trims leading and trailing whitespace
/// - Collapses internal whitespace runs to a single space
/// - Uppercases every character
///
/// Normalization is idempotent: normalizing an already normalized string
/// returns it unchanged.
pub fn normalize(raw: &str) -> String {
	raw.split_whitespace()
		.map(str::to_uppercase)
		.collect::<Vec<_>>()
		.join(" ")
}

/// A generated two-word code name.
///
/// The pair is stored in canonical uppercase form and is immutable once
/// produced. `Display` renders the `"ADJECTIVE NOUN"` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeName {
	adjective: String,
	noun: String,
}

impl CodeName {
	/// Builds a code name from one adjective and one noun.
	///
	/// Both words are normalized on construction, so mixed-case input from
	/// word-list files always yields the canonical uppercase pair.
	pub fn new(adjective: &str, noun: &str) -> Self {
		Self {
			adjective: normalize(adjective),
			noun: normalize(noun),
		}
	}

	/// Returns the adjective slot (uppercase).
	pub fn adjective(&self) -> &str {
		&self.adjective
	}

	/// Returns the noun slot (uppercase).
	pub fn noun(&self) -> &str {
		&self.noun
	}

	/// Returns the canonical `"ADJECTIVE NOUN"` form used for exclusion
	/// checks and persistence.
	pub fn normalized(&self) -> String {
		format!("{} {}", self.adjective, self.noun)
	}
}

impl fmt::Display for CodeName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} {}", self.adjective, self.noun)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn normalize_trims_collapses_and_uppercases() {
		assert_eq!(normalize("  brave   tiger "), "BRAVE TIGER");
		assert_eq!(normalize("Brave\tTiger"), "BRAVE TIGER");
	}

	#[test]
	fn normalize_is_idempotent() {
		let once = normalize("icy  table");
		assert_eq!(normalize(&once), once);
	}

	#[test]
	fn code_name_renders_canonical_form() {
		let name = CodeName::new("brave", "Tiger");
		assert_eq!(name.adjective(), "BRAVE");
		assert_eq!(name.noun(), "TIGER");
		assert_eq!(name.normalized(), "BRAVE TIGER");
		assert_eq!(name.to_string(), "BRAVE TIGER");
	}
}
