//! Word list and used-name sources.
//!
//! A word list for one slot comes from a local file (one word per line),
//! from the snapshot compiled into the binary, or from a live fetch of the
//! corpora lists. The used-names file is read through
//! [`UsedNameSet::load`](crate::model::used_names::UsedNameSet::load) and
//! written back through [`append_used_name`].

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{CodenameError, Result};
use crate::io::{append_line, read_file};
use crate::model::code_name::CodeName;
use crate::model::word_list::WordList;

/// Bundled snapshots of the corpora word lists, one word per line.
const BUNDLED_ADJECTIVES: &str = include_str!("../data/adjectives.txt");
const BUNDLED_NOUNS: &str = include_str!("../data/nouns.txt");

/// Fixed remote locations of the corpora word lists.
const ADJECTIVES_URL: &str =
	"https://raw.githubusercontent.com/dariusk/corpora/master/data/words/adjs.json";
const NOUNS_URL: &str =
	"https://raw.githubusercontent.com/dariusk/corpora/master/data/words/nouns.json";

/// The slot a word list feeds (first or second word of the pair).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordKind {
	Adjective,
	Noun,
}

impl WordKind {
	/// Returns the bundled snapshot for this slot.
	fn bundled(self) -> &'static str {
		match self {
			WordKind::Adjective => BUNDLED_ADJECTIVES,
			WordKind::Noun => BUNDLED_NOUNS,
		}
	}

	/// Returns the fixed corpora URL for this slot.
	fn url(self) -> &'static str {
		match self {
			WordKind::Adjective => ADJECTIVES_URL,
			WordKind::Noun => NOUNS_URL,
		}
	}
}

/// Remote corpora document holding the adjective list.
#[derive(Deserialize)]
struct AdjectiveDocument {
	adjs: Vec<String>,
}

/// Remote corpora document holding the noun list.
#[derive(Deserialize)]
struct NounDocument {
	nouns: Vec<String>,
}

/// Where a word list is read from.
#[derive(Debug, Clone)]
pub enum WordSource {
	/// A local file, one word per line.
	Local(PathBuf),
	/// The snapshot compiled into the binary.
	Bundled,
	/// The fixed corpora URL for the slot.
	Remote,
}

impl WordSource {
	/// Loads the word list for one slot.
	///
	/// # Errors
	/// Returns `SourceUnavailable` if the local file cannot be read or the
	/// remote list cannot be fetched and decoded. A failed remote fetch
	/// never falls back to the bundled snapshot.
	pub fn load(&self, kind: WordKind) -> Result<WordList> {
		match self {
			WordSource::Local(path) => load_local(path),
			WordSource::Bundled => Ok(WordList::from_lines(kind.bundled().lines())),
			WordSource::Remote => fetch_remote(kind),
		}
	}
}

fn load_local(path: &Path) -> Result<WordList> {
	let lines = read_file(path).map_err(|e| CodenameError::SourceUnavailable {
		source_name: path.display().to_string(),
		reason: e.to_string(),
	})?;
	Ok(WordList::from_lines(lines))
}

/// Fetches one corpora word list and extracts the slot's word array.
fn fetch_remote(kind: WordKind) -> Result<WordList> {
	let url = kind.url();
	let unavailable = |reason: String| CodenameError::SourceUnavailable {
		source_name: url.to_owned(),
		reason,
	};

	let response = reqwest::blocking::get(url)
		.and_then(|response| response.error_for_status())
		.map_err(|e| unavailable(e.to_string()))?;

	let words = match kind {
		WordKind::Adjective => {
			response
				.json::<AdjectiveDocument>()
				.map_err(|e| unavailable(e.to_string()))?
				.adjs
		}
		WordKind::Noun => {
			response
				.json::<NounDocument>()
				.map_err(|e| unavailable(e.to_string()))?
				.nouns
		}
	};

	Ok(WordList::from_lines(words))
}

/// Records a generated code name in the used-names file.
///
/// The file is created when absent; the normalized form plus a line
/// terminator is appended. The write is attempted once and never retried.
///
/// # Errors
/// Returns `PersistenceFailure` if the append fails.
pub fn append_used_name<P: AsRef<Path>>(path: P, name: &CodeName) -> Result<()> {
	let path = path.as_ref();
	append_line(path, &name.normalized()).map_err(|e| CodenameError::PersistenceFailure {
		path: path.display().to_string(),
		source: e,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::generator::Generator;
	use crate::model::used_names::{MalformedPolicy, UsedNameSet};
	use rand::SeedableRng;
	use rand::rngs::StdRng;
	use std::fs;

	#[test]
	fn bundled_lists_are_non_empty_single_words() {
		for kind in [WordKind::Adjective, WordKind::Noun] {
			let list = WordSource::Bundled.load(kind).unwrap();
			assert!(!list.is_empty());
			for line in kind.bundled().lines().filter(|line| !line.trim().is_empty()) {
				assert_eq!(line.split_whitespace().count(), 1, "bad bundled word {:?}", line);
			}
		}
	}

	#[test]
	fn local_file_load_drops_blank_lines() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("adjectives.txt");
		fs::write(&path, "brave\n\n  icy  \n").unwrap();

		let list = WordSource::Local(path).load(WordKind::Adjective).unwrap();
		assert_eq!(list.len(), 2);
	}

	#[test]
	fn unreadable_local_file_is_source_unavailable() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("no_such_file.txt");

		match WordSource::Local(path).load(WordKind::Noun) {
			Err(CodenameError::SourceUnavailable { .. }) => (),
			other => panic!("expected SourceUnavailable, got {:?}", other),
		}
	}

	#[test]
	fn append_creates_the_file_when_absent() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("used.txt");

		append_used_name(&path, &CodeName::new("icy", "table")).unwrap();

		let contents = fs::read_to_string(&path).unwrap();
		assert_eq!(contents, "ICY TABLE\n");
	}

	#[test]
	fn appended_name_is_excluded_on_the_next_run() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("used.txt");
		fs::write(&path, "BRAVE TIGER\n").unwrap();

		let adjectives = || WordList::from_lines(["brave", "icy"]);
		let nouns = || WordList::from_lines(["tiger", "table"]);
		let mut rng = StdRng::seed_from_u64(7);

		let used = UsedNameSet::load(&path, MalformedPolicy::Fail).unwrap();
		let generator = Generator::new(adjectives(), nouns(), used).unwrap();
		let first = generator.generate(&mut rng).unwrap();
		assert_ne!(first.normalized(), "BRAVE TIGER");

		append_used_name(&path, &first).unwrap();

		let contents = fs::read_to_string(&path).unwrap();
		let lines: Vec<&str> = contents.lines().collect();
		assert!(lines.contains(&"BRAVE TIGER"));
		assert!(lines.contains(&first.normalized().as_str()));

		// A rerun against the updated file never returns a recorded name
		let used = UsedNameSet::load(&path, MalformedPolicy::Fail).unwrap();
		let generator = Generator::new(adjectives(), nouns(), used).unwrap();
		for _ in 0..20 {
			let next = generator.generate(&mut rng).unwrap().normalized();
			assert_ne!(next, "BRAVE TIGER");
			assert_ne!(next, first.normalized());
		}
	}
}
