use std::collections::HashSet;

use rand::Rng;
use rand::seq::IndexedRandom;

use super::settings::GenerationSettings;
use super::word_lists::WordLists;

/// Character count of a phrase with every space removed.
pub fn contributed_len(phrase: &str) -> usize {
	phrase.chars().filter(|c| *c != ' ').count()
}

/// Composes a keyword list from the word lists.
///
/// # Behavior
/// - The pool is every feature and marketing phrase, lowercased. Phrases
///   present in both lists stay duplicated in the pool.
/// - Phrases are drawn uniformly while the accumulated contributed length is
///   below `settings.keyword_target()`.
/// - A phrase already accumulated is skipped.
/// - Accumulation stops, without adding the phrase, as soon as a draw would
///   push the total above `settings.keyword_ceiling()`.
/// - Accumulation also stops once every distinct pool phrase has been
///   taken, which is the only way a small pool can end below the target.
///
/// Returns the accumulated phrases in draw order.
pub fn compose_keywords<R: Rng + ?Sized>(
	lists: &WordLists,
	settings: &GenerationSettings,
	rng: &mut R,
) -> Vec<String> {
	let pool: Vec<String> = lists
		.features()
		.iter()
		.chain(lists.marketing())
		.map(|phrase| phrase.to_lowercase())
		.collect();
	let distinct = pool.iter().collect::<HashSet<_>>().len();

	let mut keywords: Vec<String> = Vec::new();
	let mut total = 0;

	while total < settings.keyword_target() {
		if keywords.len() == distinct {
			log::debug!("Keyword pool exhausted at length {} (target {})", total, settings.keyword_target());
			break;
		}

		let Some(phrase) = pool.choose(rng) else { break };
		if keywords.contains(phrase) {
			continue;
		}

		let length = contributed_len(phrase);
		if total + length > settings.keyword_ceiling() {
			break;
		}
		keywords.push(phrase.clone());
		total += length;
	}

	keywords
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn total_len(keywords: &[String]) -> usize {
		keywords.iter().map(|k| contributed_len(k)).sum()
	}

	#[test]
	fn contributed_len_ignores_spaces() {
		assert_eq!(contributed_len("Fast Charging"), 12);
		assert_eq!(contributed_len("a, b"), 3);
		assert_eq!(contributed_len("   "), 0);
	}

	#[test]
	fn small_pool_terminates_with_every_phrase() {
		// Five distinct 30 character phrases: the whole pool only reaches 150.
		let phrases: Vec<String> = ['a', 'b', 'c', 'd', 'e']
			.iter()
			.map(|c| c.to_string().repeat(30))
			.collect();
		let lists = WordLists::new("X", phrases[..4].to_vec(), phrases[4..].to_vec()).unwrap();
		let mut rng = StdRng::seed_from_u64(1);

		let mut keywords = compose_keywords(&lists, &GenerationSettings::default(), &mut rng);
		assert_eq!(total_len(&keywords), 150);
		keywords.sort();
		assert_eq!(keywords, phrases);
	}

	#[test]
	fn large_pool_stays_unique_and_under_the_ceiling() {
		let lists = WordLists::defaults();
		let settings = GenerationSettings::default();

		for seed in 0..100 {
			let mut rng = StdRng::seed_from_u64(seed);
			let keywords = compose_keywords(&lists, &settings, &mut rng);

			let unique: HashSet<&String> = keywords.iter().collect();
			assert_eq!(unique.len(), keywords.len());
			assert!(total_len(&keywords) <= 340);
			assert!(keywords.iter().all(|k| *k == k.to_lowercase()));
		}
	}

	#[test]
	fn ceiling_stops_accumulation_before_the_target() {
		// The first phrase brings the total to 200; any second one would reach 400.
		let features: Vec<String> = ['p', 'q', 'r', 's']
			.iter()
			.map(|c| c.to_string().repeat(200))
			.collect();
		let lists = WordLists::new("X", features, vec!["t".repeat(200)]).unwrap();
		let mut rng = StdRng::seed_from_u64(8);

		let keywords = compose_keywords(&lists, &GenerationSettings::default(), &mut rng);
		assert_eq!(keywords.len(), 1);
		assert_eq!(total_len(&keywords), 200);
	}

	#[test]
	fn case_variants_across_lists_are_taken_once() {
		let features = vec!["Fast Delivery".to_owned(), "b".to_owned(), "c".to_owned(), "d".to_owned()];
		let lists = WordLists::new("X", features, vec!["fast delivery".to_owned()]).unwrap();
		let mut rng = StdRng::seed_from_u64(2);

		let keywords = compose_keywords(&lists, &GenerationSettings::default(), &mut rng);
		assert_eq!(keywords.len(), 4);
		assert_eq!(keywords.iter().filter(|k| *k == "fast delivery").count(), 1);
	}
}
