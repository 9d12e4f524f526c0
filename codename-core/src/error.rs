use thiserror::Error;

/// Result type for code-name operations.
pub type Result<T> = std::result::Result<T, CodenameError>;

/// Errors that can occur while loading word material or generating a name.
///
/// Every failure is detected at the point of occurrence and surfaced to the
/// caller; none of these conditions is retried or silently recovered.
#[derive(Debug, Error)]
pub enum CodenameError {
	/// A requested word-list source (local file or remote list) could not be read.
	#[error("word source unavailable ({source_name}): {reason}")]
	SourceUnavailable { source_name: String, reason: String },

	/// An input word list is empty; nothing can be drawn from it.
	#[error("invalid input: {0}")]
	InvalidInput(String),

	/// No unused pair was found within the attempt budget.
	#[error("no unused code name found after {attempts} attempts")]
	Exhausted { attempts: usize },

	/// A used-names file line does not parse as an adjective-noun pair.
	#[error("malformed used-name entry at line {line}: {content:?}")]
	MalformedEntry { line: usize, content: String },

	/// Appending the generated name to the used-names file failed.
	#[error("failed to record used code name in {path}: {source}")]
	PersistenceFailure {
		path: String,
		#[source]
		source: std::io::Error,
	},
}
