use std::collections::HashSet;

use serde::Serialize;

use crate::error::GenerationError;

/// Minimum number of distinct features needed to build a title
/// (three features plus a distinct sell point).
pub const MIN_FEATURES: usize = 4;

/// Model used when the caller does not supply one.
pub const DEFAULT_MODEL: &str = "One Plus 12";

/// Built-in feature phrases.
pub const DEFAULT_FEATURES: [&str; 15] = [
	"Snapdragon 8 Gen2", "16GB RAM", "108MP Camera", "8000mAh Battery",
	"7.3 inch Display", "1TB Storage", "Screen Fingerprint", "Facial Recognition",
	"Dual SIM", "Android 15 OS", "Electroplated Frame", "Frosted AG Glass Back",
	"Fast Charging", "5G", "Premium Build",
];

/// Built-in marketing phrases, used whenever no marketing list is given.
pub const DEFAULT_MARKETING: [&str; 38] = [
	"Global Hot Sale", "Limited Time Offer", "Flash Deal", "Exclusive Offer",
	"Super Discount", "Bulk Order", "Factory Direct", "Best Seller",
	"Free Shipping", "Fast Delivery", "Crazy Promotion", "Massive Savings",
	"Top Rated", "Money Back Guarantee", "High Performance", "Durable Design",
	"User Friendly", "Eco Friendly", "Hot Trending", "Must Have",
	"New Arrival", "Best Value", "Clearance Sale", "Season Sale",
	"Lowest Price", "Deal of the Day", "Customer Favorite", "Hot Pick",
	"Limited Stock", "Free Gift", "Bonus Offer", "Price Drop",
	"Online Exclusive", "Shop Now", "Hurry Up", "Don’t Miss",
	"Save Big", "Big Savings",
];

/// Validated inputs of a generation run.
///
/// # Invariants
/// - `features` holds at least `MIN_FEATURES` pairwise-distinct phrases
/// - `marketing` is never empty
///
/// Once built, the lists are immutable for the whole run.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct WordLists {
	model: String,
	features: Vec<String>,
	marketing: Vec<String>,
}

impl WordLists {
	/// Builds and validates the word lists.
	///
	/// # Behavior
	/// - Repeated features are collapsed, the first occurrence keeps its position.
	/// - An empty `marketing` list falls back to `DEFAULT_MARKETING`.
	///
	/// # Errors
	/// Returns `InsufficientFeatures` if fewer than `MIN_FEATURES` distinct
	/// features remain.
	pub fn new<S: Into<String>>(
		model: S,
		features: Vec<String>,
		marketing: Vec<String>,
	) -> Result<Self, GenerationError> {
		let mut seen = HashSet::new();
		let features: Vec<String> = features
			.into_iter()
			.filter(|feature| seen.insert(feature.clone()))
			.collect();

		if features.len() < MIN_FEATURES {
			return Err(GenerationError::InsufficientFeatures { found: features.len() });
		}

		let marketing = if marketing.is_empty() {
			log::debug!("No marketing phrases supplied, using the default list");
			default_marketing()
		} else {
			marketing
		};

		Ok(Self { model: model.into(), features, marketing })
	}

	/// Word lists made only of the built-in defaults.
	pub fn defaults() -> Self {
		Self {
			model: DEFAULT_MODEL.to_owned(),
			features: default_features(),
			marketing: default_marketing(),
		}
	}

	pub fn model(&self) -> &str {
		&self.model
	}

	pub fn features(&self) -> &[String] {
		&self.features
	}

	pub fn marketing(&self) -> &[String] {
		&self.marketing
	}
}

/// Owned copy of `DEFAULT_FEATURES`.
pub fn default_features() -> Vec<String> {
	DEFAULT_FEATURES.iter().map(|s| (*s).to_owned()).collect()
}

/// Owned copy of `DEFAULT_MARKETING`.
pub fn default_marketing() -> Vec<String> {
	DEFAULT_MARKETING.iter().map(|s| (*s).to_owned()).collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn phrases(items: &[&str]) -> Vec<String> {
		items.iter().map(|s| (*s).to_owned()).collect()
	}

	#[test]
	fn rejects_fewer_than_four_features() {
		let err = WordLists::new("X1", phrases(&["a", "b", "c"]), phrases(&["m"])).unwrap_err();
		assert!(matches!(err, GenerationError::InsufficientFeatures { found: 3 }));
	}

	#[test]
	fn duplicates_do_not_count_towards_the_minimum() {
		let err = WordLists::new("X1", phrases(&["a", "b", "c", "a", "b"]), phrases(&["m"])).unwrap_err();
		assert!(matches!(err, GenerationError::InsufficientFeatures { found: 3 }));
	}

	#[test]
	fn keeps_first_occurrence_order() {
		let lists = WordLists::new("X1", phrases(&["b", "a", "b", "c", "d"]), phrases(&["m"])).unwrap();
		assert_eq!(lists.features(), phrases(&["b", "a", "c", "d"]).as_slice());
	}

	#[test]
	fn empty_marketing_falls_back_to_defaults() {
		let lists = WordLists::new("X1", phrases(&["a", "b", "c", "d"]), Vec::new()).unwrap();
		assert_eq!(lists.marketing().len(), DEFAULT_MARKETING.len());
		assert_eq!(lists.marketing()[0], "Global Hot Sale");
	}

	#[test]
	fn defaults_are_valid() {
		let lists = WordLists::defaults();
		let rebuilt = WordLists::new(
			lists.model(),
			lists.features().to_vec(),
			lists.marketing().to_vec(),
		)
		.unwrap();
		assert_eq!(lists, rebuilt);
	}
}
