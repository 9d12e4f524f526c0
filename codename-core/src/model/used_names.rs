use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::Path;

use log::warn;

use crate::error::{CodenameError, Result};
use crate::io::read_file;
use crate::model::code_name::normalize;

/// Policy applied when a used-names file line does not parse as an
/// adjective-noun pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedPolicy {
	/// Skip the line with a logged warning and keep loading.
	Skip,
	/// Abort loading with `CodenameError::MalformedEntry`.
	Fail,
}

/// Set of previously generated code names, stored in normalized form.
///
/// # Responsibilities
/// - Parse used-name files (one pair per line, case-insensitive)
/// - Answer exclusion queries for freshly drawn pairs
///
/// # Invariants
/// - Every stored entry is in normalized form (uppercase, single space)
#[derive(Debug, Clone, Default)]
pub struct UsedNameSet {
	names: HashSet<String>,
}

impl UsedNameSet {
	/// Creates an empty set.
	pub fn new() -> Self {
		Self { names: HashSet::new() }
	}

	/// Loads a used-names file.
	///
	/// A missing file is a valid, common case ("no prior used names") and
	/// yields an empty set. Any other read failure is surfaced as
	/// `SourceUnavailable`.
	pub fn load<P: AsRef<Path>>(path: P, policy: MalformedPolicy) -> Result<Self> {
		let path = path.as_ref();
		let lines = match read_file(path) {
			Ok(lines) => lines,
			Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::new()),
			Err(e) => {
				return Err(CodenameError::SourceUnavailable {
					source_name: path.display().to_string(),
					reason: e.to_string(),
				});
			}
		};
		Self::from_lines(lines, policy)
	}

	/// Parses raw lines into a set of normalized pairs.
	///
	/// Blank lines are ignored. A line that is not exactly two
	/// whitespace-separated tokens is handled according to `policy`.
	pub fn from_lines<I, S>(lines: I, policy: MalformedPolicy) -> Result<Self>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut names = HashSet::new();
		for (index, line) in lines.into_iter().enumerate() {
			let line = line.as_ref().trim();
			if line.is_empty() {
				continue;
			}
			if line.split_whitespace().count() != 2 {
				match policy {
					MalformedPolicy::Skip => {
						warn!("skipping malformed used-name entry at line {}: {:?}", index + 1, line);
						continue;
					}
					MalformedPolicy::Fail => {
						return Err(CodenameError::MalformedEntry {
							line: index + 1,
							content: line.to_owned(),
						});
					}
				}
			}
			names.insert(normalize(line));
		}
		Ok(Self { names })
	}

	/// Checks whether a normalized pair is already used.
	pub fn contains(&self, normalized_pair: &str) -> bool {
		self.names.contains(normalized_pair)
	}

	/// Records a pair as used (in memory only).
	///
	/// Returns false if the pair was already present.
	pub fn insert(&mut self, normalized_pair: String) -> bool {
		self.names.insert(normalized_pair)
	}

	/// Returns the number of used names.
	pub fn len(&self) -> usize {
		self.names.len()
	}

	/// Returns true if no name has been used yet.
	pub fn is_empty(&self) -> bool {
		self.names.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn entries_are_normalized_on_load() {
		let set = UsedNameSet::from_lines(["brave tiger", "  Icy   Table  "], MalformedPolicy::Fail).unwrap();
		assert_eq!(set.len(), 2);
		assert!(set.contains("BRAVE TIGER"));
		assert!(set.contains("ICY TABLE"));
	}

	#[test]
	fn blank_lines_are_ignored() {
		let set = UsedNameSet::from_lines(["", "brave tiger", "   "], MalformedPolicy::Fail).unwrap();
		assert_eq!(set.len(), 1);
	}

	#[test]
	fn skip_policy_keeps_loading_past_malformed_lines() {
		let lines = ["brave tiger", "justoneword", "icy table", "one two three"];
		let set = UsedNameSet::from_lines(lines, MalformedPolicy::Skip).unwrap();
		assert_eq!(set.len(), 2);
		assert!(set.contains("BRAVE TIGER"));
		assert!(set.contains("ICY TABLE"));
	}

	#[test]
	fn fail_policy_reports_the_offending_line() {
		let lines = ["brave tiger", "justoneword"];
		match UsedNameSet::from_lines(lines, MalformedPolicy::Fail) {
			Err(CodenameError::MalformedEntry { line, content }) => {
				assert_eq!(line, 2);
				assert_eq!(content, "justoneword");
			}
			other => panic!("expected MalformedEntry, got {:?}", other),
		}
	}

	#[test]
	fn missing_file_yields_an_empty_set() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("no_such_file.txt");
		let set = UsedNameSet::load(&path, MalformedPolicy::Fail).unwrap();
		assert!(set.is_empty());
	}

	#[test]
	fn insert_reports_duplicates() {
		let mut set = UsedNameSet::new();
		assert!(set.insert("BRAVE TIGER".to_owned()));
		assert!(!set.insert("BRAVE TIGER".to_owned()));
	}
}
