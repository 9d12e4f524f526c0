//! Top-level module for the code-name generation system.
//!
//! This crate provides a two-word code-name generator, including:
//! - The code name value type (`CodeName`)
//! - Candidate word lists (`WordList`)
//! - The set of already used names (`UsedNameSet`)
//! - A high-level generation interface (`Generator`)

/// Code name value type and pair normalization.
///
/// Normalization (trim, uppercase, single-space separation) is the canonical
/// form used for comparison, display and persistence.
pub mod code_name;

/// Ordered candidate word list for one slot (adjective or noun).
pub mod word_list;

/// Set of previously generated names, stored in normalized form.
///
/// Handles used-name file parsing with an explicit malformed-line policy.
pub mod used_names;

/// High-level interface producing an unused code name.
///
/// Draws uniformly at random from both word lists with a bounded
/// attempt budget so generation always terminates.
pub mod generator;
