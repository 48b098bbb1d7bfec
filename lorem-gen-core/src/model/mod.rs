//! Top-level module for the placeholder text generator.
//!
//! This module provides:
//! - The fixed vocabulary (`word_bank`)
//! - Validated sentence length ranges (`WordRange`)
//! - The optional comma embellishment (`CommaRule`)
//! - Boundary parameters with clamping (`GenerationInput`)
//! - Sentence, paragraph and document generation (`Generator`)

/// Sentence, paragraph and document generation.
///
/// Exposes the `Generator` type with an injectable random source and the
/// stateless `generate_document` entry point.
pub mod generator;

/// Boundary parameters for a document request.
///
/// Clamps raw counts and carries the optional seed and comma rule.
pub mod generation_input;

/// Fixed pseudo-Latin vocabulary with indexed access.
pub mod word_bank;

/// Inclusive word count range of a sentence.
pub mod word_range;

/// Comma embellishment for long sentences.
pub mod comma_rule;
