//! Listing title and keyword generation library.
//!
//! This crate assembles marketplace listing titles and keyword lists from
//! user supplied word lists:
//! - Title composition within a target length window (bounded retries)
//! - Keyword accumulation within a length budget
//! - Batch generation, sequential or spread over worker threads
//! - Word-list parsing and two-column spreadsheet (CSV) export
//!
//! Every random draw goes through an explicit random source, so seeded
//! runs are reproducible.

/// Word lists, generation settings and the composers built on them.
pub mod model;

/// Word-list parsing and spreadsheet export.
pub mod io;

/// Error type shared by the whole crate.
pub mod error;

pub use error::GenerationError;
pub use model::generator::{generate_batch, GeneratedRow, Generator};
pub use model::settings::GenerationSettings;
pub use model::word_lists::WordLists;
