//! Top-level module for listing generation.
//!
//! This module provides:
//! - Validated input word lists and built-in defaults (`WordLists`)
//! - Tunable length windows and budgets (`GenerationSettings`)
//! - Title and keyword composition
//! - A batch interface producing spreadsheet rows (`Generator`)

/// Batch generation of (title, keywords) rows.
///
/// Exposes the row type, the sequential and parallel batch paths and the
/// `generate_batch` entry point.
pub mod generator;

/// Model, feature and marketing word lists, with the built-in defaults.
pub mod word_lists;

/// Length windows, attempt budget and keyword budget.
pub mod settings;

/// Bounded-retry title composition within a length window.
pub mod title_composer;

/// Greedy keyword accumulation within a length budget.
pub mod keyword_composer;
