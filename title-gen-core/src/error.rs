use thiserror::Error;

/// Errors raised by the row generator and its I/O helpers.
#[derive(Debug, Error)]
pub enum GenerationError {
	/// Fewer than four distinct feature phrases were supplied.
	///
	/// A title needs three features plus a distinct sell point, so the
	/// word lists are rejected before anything is drawn.
	#[error("at least 4 distinct feature phrases are required, got {found}")]
	InsufficientFeatures { found: usize },

	/// A generation setting was set to an inconsistent value.
	#[error("invalid setting: {0}")]
	InvalidSetting(String),

	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	#[error("CSV error: {0}")]
	Csv(#[from] csv::Error),
}
