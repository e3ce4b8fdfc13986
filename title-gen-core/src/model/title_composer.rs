use rand::Rng;
use rand::seq::IndexedRandom;

use super::settings::GenerationSettings;
use super::word_lists::WordLists;

/// Number of features placed at the front of a title.
const TRIPLE_SIZE: usize = 3;

/// Highest index the model can be inserted at. The marketing phrase
/// always stays last.
const MAX_MODEL_INDEX: usize = 4;

/// Outcome of a title composition.
#[derive(Clone, Debug, PartialEq)]
pub struct ComposedTitle {
	/// Space-joined title.
	pub text: String,
	/// Character count of `text` without commas.
	pub effective_len: usize,
	/// Number of candidates drawn, this one included.
	pub attempts: usize,
}

/// Character count of a title with every comma removed.
pub fn effective_len(title: &str) -> usize {
	title.chars().filter(|c| *c != ',').count()
}

/// Composes a title from the word lists.
///
/// Each attempt draws three distinct features, a sell point among the
/// remaining features and a marketing phrase, then inserts the model at a
/// random index in `0..=4` and joins everything with single spaces.
///
/// The first candidate whose effective length falls inside
/// `settings.title_window()` is returned. Once `settings.max_attempts()`
/// candidates have been drawn the last one is returned anyway: the window
/// is a preference, not a guarantee.
///
/// `WordLists` guarantees at least four distinct features and one marketing
/// phrase, so composition itself cannot fail.
pub fn compose_title<R: Rng + ?Sized>(
	lists: &WordLists,
	settings: &GenerationSettings,
	rng: &mut R,
) -> ComposedTitle {
	let window = settings.title_window();
	let mut attempts = 0;

	loop {
		let text = draw_candidate(lists, rng);
		let length = effective_len(&text);
		attempts += 1;

		if window.contains(&length) || attempts >= settings.max_attempts() {
			if !window.contains(&length) {
				log::debug!(
					"No title within {}..={} after {} attempts, keeping length {}",
					window.start(), window.end(), attempts, length
				);
			}
			return ComposedTitle { text, effective_len: length, attempts };
		}
	}
}

/// Draws a single title candidate.
fn draw_candidate<R: Rng + ?Sized>(lists: &WordLists, rng: &mut R) -> String {
	let features = lists.features();

	let mut parts: Vec<&str> = features
		.choose_multiple(rng, TRIPLE_SIZE)
		.map(String::as_str)
		.collect();

	let sell_points: Vec<&str> = features
		.iter()
		.map(String::as_str)
		.filter(|feature| !parts.contains(feature))
		.collect();
	parts.extend(sell_points.choose(rng).copied());
	parts.extend(lists.marketing().choose(rng).map(String::as_str));

	let index = rng.random_range(0..=MAX_MODEL_INDEX).min(parts.len());
	parts.insert(index, lists.model());

	parts.join(" ")
}
