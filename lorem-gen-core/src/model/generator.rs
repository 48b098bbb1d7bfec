use crate::model::comma_rule::CommaRule;
use crate::model::generation_input::GenerationInput;
use crate::model::word_bank;
use crate::model::word_range::WordRange;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Fixed sentence opening the first paragraph of every document.
pub const CANONICAL_SENTENCE: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit.";

/// Separator placed between paragraphs when a document is flattened to text.
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Placeholder text generator.
///
/// # Responsibilities
/// - Own the random source (injectable for reproducible output)
/// - Build sentences from the word bank, with the optional comma rule
/// - Compose sentences into paragraphs and paragraphs into documents
///
/// A generator holds no state besides its random source: two generators
/// seeded identically produce identical documents.
#[derive(Debug, Clone)]
pub struct Generator<R = StdRng> {
	rng: R,
	comma_rule: CommaRule,
}

impl Generator<StdRng> {
	/// Creates a generator seeded from the operating system.
	pub fn new() -> Self {
		Self::with_rng(StdRng::from_os_rng())
	}

	/// Creates a reproducible generator.
	pub fn from_seed(seed: u64) -> Self {
		Self::with_rng(StdRng::seed_from_u64(seed))
	}

	/// Creates a generator configured by a `GenerationInput`.
	///
	/// Uses the input seed when present, the OS otherwise.
	pub fn from_input(input: &GenerationInput) -> Self {
		let mut generator = match input.seed {
			Some(seed) => Self::from_seed(seed),
			None => Self::new(),
		};
		generator.comma_rule = input.comma_rule();
		generator
	}
}

impl Default for Generator<StdRng> {
	fn default() -> Self {
		Self::new()
	}
}

impl<R: Rng> Generator<R> {
	/// Creates a generator on top of any random source.
	pub fn with_rng(rng: R) -> Self {
		Self { rng, comma_rule: CommaRule::default() }
	}

	/// Replaces the comma embellishment rule.
	pub fn set_comma_rule(&mut self, comma_rule: CommaRule) {
		self.comma_rule = comma_rule;
	}

	pub fn comma_rule(&self) -> CommaRule {
		self.comma_rule
	}

	/// Generates one sentence holding between `min_words` and `max_words` words.
	///
	/// # Errors
	/// Returns an error if `min_words > max_words` or `min_words == 0`.
	pub fn generate_sentence(&mut self, min_words: usize, max_words: usize) -> Result<String, String> {
		let range = WordRange::new(min_words, max_words)?;
		Ok(self.sentence(range))
	}

	/// Generates one sentence from an already validated range.
	///
	/// # Behavior
	/// - Draws the length, then every word independently
	/// - Lets the comma rule pick at most one word to suffix with `,`
	/// - Capitalizes the first character and appends a period
	pub fn sentence(&mut self, range: WordRange) -> String {
		let length = range.sample(&mut self.rng);
		let words: Vec<&str> = (0..length)
			.map(|_| word_bank::random_word(&mut self.rng))
			.collect();
		let comma = self.comma_rule.pick(&mut self.rng, length);

		let mut sentence = String::new();
		for (index, word) in words.iter().enumerate() {
			if index > 0 {
				sentence.push(' ');
			}
			sentence.push_str(word);
			if comma == Some(index) {
				sentence.push(',');
			}
		}
		sentence.push('.');

		let sentence = capitalize(&sentence);
		log::trace!("sentence of {length} words: {sentence}");
		sentence
	}

	/// Generates a paragraph of `sentence_count` sentences.
	///
	/// When `is_first` is set, the canonical sentence opens the paragraph and
	/// counts as one of the requested sentences (it is still emitted when
	/// `sentence_count` is 0). Otherwise an empty count yields an empty string.
	pub fn generate_paragraph(&mut self, sentence_count: usize, is_first: bool) -> String {
		let mut sentences: Vec<String> = Vec::with_capacity(sentence_count.max(1));
		let mut count = sentence_count;

		if is_first {
			sentences.push(CANONICAL_SENTENCE.to_owned());
			count = count.saturating_sub(1);
		}

		for _ in 0..count {
			sentences.push(self.sentence(WordRange::PARAGRAPH));
		}

		sentences.join(" ")
	}

	/// Generates a document of `paragraph_count` paragraphs.
	///
	/// Only the paragraph at index 0 is opened by the canonical sentence.
	/// Counts are used as given; see `GenerationInput` for clamping.
	pub fn generate_document(&mut self, paragraph_count: usize, sentences_per_paragraph: usize) -> Vec<String> {
		log::debug!(
			"generating {paragraph_count} paragraphs of {sentences_per_paragraph} sentences"
		);
		(0..paragraph_count)
			.map(|index| self.generate_paragraph(sentences_per_paragraph, index == 0))
			.collect()
	}

	/// Generates the document described by `input`, ignoring its seed.
	pub fn generate(&mut self, input: &GenerationInput) -> Vec<String> {
		self.generate_document(input.paragraphs(), input.sentences())
	}
}

/// Generates a document with a fresh OS-seeded generator.
///
/// Safe to call from any thread: nothing is shared between calls.
pub fn generate_document(paragraph_count: usize, sentences_per_paragraph: usize) -> Vec<String> {
	Generator::new().generate_document(paragraph_count, sentences_per_paragraph)
}

/// Generates a sentence with a fresh OS-seeded generator.
///
/// # Errors
/// Returns an error if `min_words > max_words` or `min_words == 0`.
pub fn generate_sentence(min_words: usize, max_words: usize) -> Result<String, String> {
	Generator::new().generate_sentence(min_words, max_words)
}

/// Flattens a document into copyable text, paragraphs separated by a blank line.
pub fn join_paragraphs(paragraphs: &[String]) -> String {
	paragraphs.join(PARAGRAPH_SEPARATOR)
}

/// Uppercases the first character (UTF-8 aware).
fn capitalize(s: &str) -> String {
	let mut chars = s.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}
