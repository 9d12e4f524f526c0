use log::debug;
use rand::Rng;

use crate::error::{CodenameError, Result};
use crate::model::code_name::CodeName;
use crate::model::used_names::UsedNameSet;
use crate::model::word_list::WordList;

/// Multiplier applied to the adjective-noun cross product to derive the
/// default attempt budget.
pub const DEFAULT_ATTEMPT_FACTOR: usize = 16;

/// High-level generator producing an unused adjective-noun pair.
///
/// # Responsibilities
/// - Hold the candidate word lists and the exclusion set
/// - Draw one word per slot uniformly at random, with replacement
/// - Guarantee termination through a bounded attempt budget
///
/// # Invariants
/// - Both word lists are non-empty (checked on construction)
/// - A returned code name is never a member of the exclusion set
#[derive(Debug)]
pub struct Generator {
	adjectives: WordList,
	nouns: WordList,
	used: UsedNameSet,
	max_attempts: usize,
}

impl Generator {
	/// Creates a generator from two word lists and an exclusion set.
	///
	/// The default attempt budget is `DEFAULT_ATTEMPT_FACTOR` times the size
	/// of the adjective-noun cross product, so a heavily used name space is
	/// explored thoroughly before giving up.
	///
	/// # Errors
	/// Returns `InvalidInput` if either word list is empty.
	pub fn new(adjectives: WordList, nouns: WordList, used: UsedNameSet) -> Result<Self> {
		if adjectives.is_empty() {
			return Err(CodenameError::InvalidInput("adjective list is empty".to_owned()));
		}
		if nouns.is_empty() {
			return Err(CodenameError::InvalidInput("noun list is empty".to_owned()));
		}

		let max_attempts = DEFAULT_ATTEMPT_FACTOR
			.saturating_mul(adjectives.len())
			.saturating_mul(nouns.len());

		Ok(Self { adjectives, nouns, used, max_attempts })
	}

	/// Overrides the attempt budget.
	///
	/// A budget of zero is clamped to one so at least one draw happens.
	pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
		self.max_attempts = max_attempts.max(1);
		self
	}

	/// Generates one code name absent from the exclusion set.
	///
	/// # Behavior
	/// - Draws one adjective and one noun uniformly at random, independently
	///   and with replacement.
	/// - Normalizes the pair and checks set membership.
	/// - Returns the first pair not found in the set.
	///
	/// The random source is injected, so a seeded generator reproduces the
	/// same sequence of draws.
	///
	/// # Errors
	/// Returns `Exhausted` if no unused pair is found within the attempt
	/// budget. An exclusion set covering the whole cross product is the
	/// typical cause.
	pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<CodeName> {
		for attempt in 1..=self.max_attempts {
			// Impossible to panic, both lists are checked non-empty on construction
			let adjective = self.adjectives.choose(rng).unwrap();
			let noun = self.nouns.choose(rng).unwrap();

			let candidate = CodeName::new(adjective, noun);
			if !self.used.contains(&candidate.normalized()) {
				debug!("found unused code name after {} attempt(s)", attempt);
				return Ok(candidate);
			}
		}

		Err(CodenameError::Exhausted { attempts: self.max_attempts })
	}
}
