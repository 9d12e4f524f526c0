use rand::Rng;
use rand::seq::IndexedRandom;

/// Ordered sequence of candidate words for one slot (adjective or noun).
///
/// # Invariants
/// - Every stored word is non-empty and carries no surrounding whitespace
/// - Duplicates are allowed; they only skew selection probability
#[derive(Debug, Clone)]
pub struct WordList {
	words: Vec<String>,
}

impl WordList {
	/// Builds a word list from raw lines.
	///
	/// Surrounding whitespace is trimmed and blank lines are ignored,
	/// matching the one-word-per-line file format. Case is kept as supplied.
	pub fn from_lines<I, S>(lines: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		Self {
			words: lines
				.into_iter()
				.filter_map(|line| {
					let word = line.as_ref().trim();
					if word.is_empty() { None } else { Some(word.to_owned()) }
				})
				.collect(),
		}
	}

	/// Returns true if the list holds no words.
	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	/// Returns the number of candidate words.
	pub fn len(&self) -> usize {
		self.words.len()
	}

	/// Draws one word uniformly at random.
	///
	/// Returns `None` if the list is empty.
	pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
		self.words.choose(rng).map(String::as_str)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	#[test]
	fn blank_lines_are_dropped_and_words_trimmed() {
		let list = WordList::from_lines(["brave", "", "  icy  ", "   "]);
		assert_eq!(list.len(), 2);
		assert!(!list.is_empty());
	}

	#[test]
	fn choose_on_empty_list_returns_none() {
		let list = WordList::from_lines(Vec::<String>::new());
		let mut rng = StdRng::seed_from_u64(1);
		assert!(list.choose(&mut rng).is_none());
	}

	#[test]
	fn choose_returns_a_stored_word() {
		let list = WordList::from_lines(["brave", "icy"]);
		let mut rng = StdRng::seed_from_u64(1);
		for _ in 0..10 {
			let word = list.choose(&mut rng).unwrap();
			assert!(word == "brave" || word == "icy");
		}
	}
}
