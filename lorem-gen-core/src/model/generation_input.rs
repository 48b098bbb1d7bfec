use serde::{Deserialize, Serialize};

use crate::model::comma_rule::CommaRule;

/// Highest paragraph or sentence count accepted at the boundary.
pub const MAX_COUNT: usize = 100;

/// Boundary parameters for one document request.
///
/// `GenerationInput` is the type shells (server, UI, demo) fill from user
/// input. Counts coming from outside are signed and possibly out of range:
/// they are clamped to `[0, MAX_COUNT]` here, never inside the generator.
///
/// # Invariants
/// - `paragraphs <= MAX_COUNT`
/// - `sentences <= MAX_COUNT`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(try_from = "RawGenerationInput")]
pub struct GenerationInput {
	/// Number of paragraphs to generate.
	paragraphs: usize,

	/// Number of sentences in each paragraph.
	sentences: usize,

	/// Optional seed for reproducible output.
	pub seed: Option<u64>,

	/// Comma embellishment applied to long sentences.
	comma_rule: CommaRule,
}

/// Unchecked wire form; counts above `MAX_COUNT` are rejected.
#[derive(Deserialize)]
struct RawGenerationInput {
	paragraphs: usize,
	sentences: usize,
	seed: Option<u64>,
	comma_rule: CommaRule,
}

impl TryFrom<RawGenerationInput> for GenerationInput {
	type Error = String;

	fn try_from(raw: RawGenerationInput) -> Result<Self, Self::Error> {
		if raw.paragraphs > MAX_COUNT || raw.sentences > MAX_COUNT {
			return Err(format!(
				"counts must not exceed {MAX_COUNT}, got {} paragraphs and {} sentences",
				raw.paragraphs, raw.sentences
			));
		}
		Ok(Self {
			paragraphs: raw.paragraphs,
			sentences: raw.sentences,
			seed: raw.seed,
			comma_rule: raw.comma_rule,
		})
	}
}

impl GenerationInput {
	/// Creates an input from raw counts, clamped to `[0, MAX_COUNT]`.
	pub fn new(paragraphs: i64, sentences: i64) -> Self {
		Self {
			paragraphs: Self::clamp_count(paragraphs),
			sentences: Self::clamp_count(sentences),
			seed: None,
			comma_rule: CommaRule::default(),
		}
	}

	/// Creates an input from already parsed counts, capped at `MAX_COUNT`.
	pub fn with_counts(paragraphs: usize, sentences: usize) -> Self {
		Self {
			paragraphs: paragraphs.min(MAX_COUNT),
			sentences: sentences.min(MAX_COUNT),
			..Self::default()
		}
	}

	/// Clamps a raw count to `[0, MAX_COUNT]`.
	pub fn clamp_count(value: i64) -> usize {
		value.clamp(0, MAX_COUNT as i64) as usize
	}

	/// Parses a count typed by a user.
	///
	/// Anything that is not an integer counts as 0; the result is clamped.
	pub fn parse_count(value: &str) -> usize {
		value
			.trim()
			.parse::<i64>()
			.map(Self::clamp_count)
			.unwrap_or(0)
	}

	pub fn paragraphs(&self) -> usize {
		self.paragraphs
	}

	pub fn sentences(&self) -> usize {
		self.sentences
	}

	pub fn comma_rule(&self) -> CommaRule {
		self.comma_rule
	}

	/// Sets the paragraph count (clamped).
	pub fn set_paragraphs(&mut self, paragraphs: i64) {
		self.paragraphs = Self::clamp_count(paragraphs);
	}

	/// Sets the sentence count (clamped).
	pub fn set_sentences(&mut self, sentences: i64) {
		self.sentences = Self::clamp_count(sentences);
	}

	/// Sets the probability of the comma embellishment.
	///
	/// # Errors
	/// Returns an error if the value is outside `[0.0, 1.0]`.
	pub fn set_comma_probability(&mut self, probability: f64) -> Result<(), String> {
		self.comma_rule = self.comma_rule.with_probability(probability)?;
		Ok(())
	}

	/// Replaces the whole comma rule.
	pub fn set_comma_rule(&mut self, comma_rule: CommaRule) {
		self.comma_rule = comma_rule;
	}
}

impl Default for GenerationInput {
	/// 3 paragraphs of 5 sentences.
	fn default() -> Self {
		Self::new(3, 5)
	}
}
