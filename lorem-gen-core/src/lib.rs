//! Placeholder ("lorem ipsum") text generation library.
//!
//! This crate provides:
//! - A fixed pseudo-Latin word bank
//! - Random sentence generation with an optional comma embellishment
//! - Paragraph and document composition, the first paragraph always opening
//!   with the canonical "Lorem ipsum dolor sit amet" sentence
//! - Boundary input handling (count clamping, seeding)
//!
//! Everything is pure computation: no I/O, no shared mutable state.

/// Word bank, generators and generation parameters.
pub mod model;

pub use model::generator::{
	CANONICAL_SENTENCE, Generator, generate_document, generate_sentence, join_paragraphs,
};
pub use model::generation_input::{GenerationInput, MAX_COUNT};
