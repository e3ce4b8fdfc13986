use std::sync::mpsc;
use std::thread;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::GenerationError;
use super::keyword_composer::compose_keywords;
use super::settings::GenerationSettings;
use super::title_composer::compose_title;
use super::word_lists::WordLists;

/// One generated spreadsheet row.
///
/// `keywords` holds the keyword phrases joined with `\n`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct GeneratedRow {
	pub title: String,
	pub keywords: String,
}

/// Row generator bound to a set of word lists.
///
/// # Responsibilities
/// - Compose titles and keyword lists from the same immutable word lists
/// - Produce batches of rows, in order, from an explicit random source
/// - Optionally spread a batch over worker threads without changing its output
///
/// Title and keywords of a row are independent draws.
#[derive(Clone, Debug)]
pub struct Generator {
	lists: WordLists,
	settings: GenerationSettings,
}

impl Generator {
	pub fn new(lists: WordLists, settings: GenerationSettings) -> Self {
		Self { lists, settings }
	}

	pub fn lists(&self) -> &WordLists {
		&self.lists
	}

	pub fn settings(&self) -> &GenerationSettings {
		&self.settings
	}

	/// Composes a single title (see `compose_title`).
	pub fn title<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
		compose_title(&self.lists, &self.settings, rng).text
	}

	/// Composes a single keyword blob, phrases joined with `\n`.
	pub fn keywords<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
		compose_keywords(&self.lists, &self.settings, rng).join("\n")
	}

	/// Generates one row: the title is drawn first, then the keywords.
	pub fn row<R: Rng + ?Sized>(&self, rng: &mut R) -> GeneratedRow {
		let title = self.title(rng);
		let keywords = self.keywords(rng);
		GeneratedRow { title, keywords }
	}

	/// Generates `num` rows in order on the current thread.
	pub fn generate<R: Rng + ?Sized>(&self, num: usize, rng: &mut R) -> Vec<GeneratedRow> {
		log::info!("Generating {} rows for model '{}'", num, self.lists.model());
		(0..num).map(|_| self.row(rng)).collect()
	}

	/// Generates `num` rows using worker threads.
	///
	/// # Behavior
	/// - Draws one seed per row from `rng`, up front and in row order.
	/// - Splits the seeds into chunks (based on the CPU count).
	/// - Each worker builds its rows with one `StdRng` per row seed.
	/// - Chunks are reassembled in their original order.
	///
	/// # Notes
	/// The output only depends on `rng`, never on the number of threads, so a
	/// seeded `rng` gives the same batch on every machine. It differs from
	/// `generate` with the same `rng`, since draws are no longer shared.
	pub fn generate_parallel<R: Rng + ?Sized>(&self, num: usize, rng: &mut R) -> Vec<GeneratedRow> {
		if num == 0 {
			return Vec::new();
		}
		log::info!("Generating {} rows for model '{}' in parallel", num, self.lists.model());

		let seeds: Vec<u64> = (0..num).map(|_| rng.random()).collect();
		let chunks = num_cpus::get().max(1);
		let chunk_size = num.div_ceil(chunks);

		let (tx, rx) = mpsc::channel();
		let mut parts: Vec<(usize, Vec<GeneratedRow>)> = thread::scope(|scope| {
			for (index, chunk) in seeds.chunks(chunk_size).enumerate() {
				let tx = tx.clone();
				scope.spawn(move || {
					let rows: Vec<GeneratedRow> = chunk
						.iter()
						.map(|seed| self.row(&mut StdRng::seed_from_u64(*seed)))
						.collect();
					tx.send((index, rows)).expect("Failed to send from thread");
				});
			}
			drop(tx);
			rx.iter().collect()
		});

		parts.sort_by_key(|(index, _)| *index);
		parts.into_iter().flat_map(|(_, rows)| rows).collect()
	}
}

/// Generates `num` rows with the default settings.
///
/// # Parameters
/// - `model`: product identifier inserted once in every title.
/// - `features`: feature phrases, at least 4 distinct ones.
/// - `marketing`: marketing phrases; an empty list uses the built-in defaults.
/// - `num`: number of rows.
/// - `rng`: random source; seed it for reproducible batches.
///
/// # Errors
/// Returns `InsufficientFeatures` before drawing anything if `features`
/// holds fewer than 4 distinct phrases.
pub fn generate_batch<R: Rng + ?Sized>(
	model: &str,
	features: Vec<String>,
	marketing: Vec<String>,
	num: usize,
	rng: &mut R,
) -> Result<Vec<GeneratedRow>, GenerationError> {
	let lists = WordLists::new(model, features, marketing)?;
	let generator = Generator::new(lists, GenerationSettings::default());
	Ok(generator.generate(num, rng))
}
