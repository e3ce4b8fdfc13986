use std::ops::RangeInclusive;

use crate::error::GenerationError;

/// Tunable parameters of a generation run.
///
/// The defaults reproduce the nominal behavior: titles aimed at
/// 90..=120 effective characters with 10 attempts, keywords accumulated
/// until 220 contributed characters without ever passing 340.
///
/// # Invariants
/// - `title_min_len <= title_max_len`
/// - `max_attempts >= 1`
/// - `keyword_target <= keyword_ceiling`
///
/// Fields are private and changed through validating setters, so a
/// `GenerationSettings` is always consistent.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationSettings {
	title_min_len: usize,
	title_max_len: usize,
	max_attempts: usize,
	keyword_target: usize,
	keyword_ceiling: usize,
}

impl Default for GenerationSettings {
	fn default() -> Self {
		Self {
			title_min_len: 90,
			title_max_len: 120,
			max_attempts: 10,
			keyword_target: 220,
			keyword_ceiling: 340,
		}
	}
}

impl GenerationSettings {
	/// Accepted effective-length window of a title (inclusive).
	pub fn title_window(&self) -> RangeInclusive<usize> {
		self.title_min_len..=self.title_max_len
	}

	/// Total number of title candidates tried, first one included.
	pub fn max_attempts(&self) -> usize {
		self.max_attempts
	}

	/// Keyword accumulation continues while the total is below this value.
	pub fn keyword_target(&self) -> usize {
		self.keyword_target
	}

	/// Hard ceiling on the total contributed length of the keywords.
	pub fn keyword_ceiling(&self) -> usize {
		self.keyword_ceiling
	}

	/// Sets the title length window.
	///
	/// # Errors
	/// Returns an error if `min > max`.
	pub fn set_title_window(&mut self, min: usize, max: usize) -> Result<(), GenerationError> {
		if min > max {
			return Err(GenerationError::InvalidSetting(format!(
				"title window minimum ({min}) is above its maximum ({max})"
			)));
		}
		self.title_min_len = min;
		self.title_max_len = max;
		Ok(())
	}

	/// Sets the title attempt budget.
	///
	/// # Errors
	/// Returns an error if `attempts` is 0.
	pub fn set_max_attempts(&mut self, attempts: usize) -> Result<(), GenerationError> {
		if attempts == 0 {
			return Err(GenerationError::InvalidSetting("at least one title attempt is required".to_owned()));
		}
		self.max_attempts = attempts;
		Ok(())
	}

	/// Sets the keyword target and ceiling.
	///
	/// # Errors
	/// Returns an error if `target > ceiling`.
	pub fn set_keyword_budget(&mut self, target: usize, ceiling: usize) -> Result<(), GenerationError> {
		if target > ceiling {
			return Err(GenerationError::InvalidSetting(format!(
				"keyword target ({target}) is above the ceiling ({ceiling})"
			)));
		}
		self.keyword_target = target;
		self.keyword_ceiling = ceiling;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_match_nominal_values() {
		let settings = GenerationSettings::default();
		assert_eq!(settings.title_window(), 90..=120);
		assert_eq!(settings.max_attempts(), 10);
		assert_eq!(settings.keyword_target(), 220);
		assert_eq!(settings.keyword_ceiling(), 340);
	}

	#[test]
	fn setters_reject_inconsistent_values() {
		let mut settings = GenerationSettings::default();
		assert!(settings.set_title_window(121, 120).is_err());
		assert!(settings.set_max_attempts(0).is_err());
		assert!(settings.set_keyword_budget(341, 340).is_err());
		assert_eq!(settings, GenerationSettings::default());
	}

	#[test]
	fn setters_apply_valid_values() {
		let mut settings = GenerationSettings::default();
		settings.set_title_window(50, 50).unwrap();
		settings.set_max_attempts(3).unwrap();
		settings.set_keyword_budget(10, 20).unwrap();
		assert_eq!(settings.title_window(), 50..=50);
		assert_eq!(settings.max_attempts(), 3);
		assert_eq!(settings.keyword_target(), 10);
		assert_eq!(settings.keyword_ceiling(), 20);
	}
}
