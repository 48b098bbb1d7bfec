use rand::Rng;

/// Fixed vocabulary used to build every generated sentence.
///
/// # Invariants
/// - Non-empty
/// - Every token is lowercase ASCII, without whitespace or punctuation
const WORDS: [&str; 63] = [
	"ad", "adipiscing", "aliqua", "aliquip", "amet", "anim", "aute", "cillum", "commodo",
	"consectetur", "consequat", "culpa", "cupidatat", "deserunt", "do", "dolor", "dolore",
	"duis", "ea", "eiusmod", "elit", "enim", "esse", "est", "et", "eu", "ex", "excepteur",
	"exercitation", "fugiat", "id", "in", "incididunt", "ipsum", "irure", "labore", "laboris",
	"laborum", "lorem", "magna", "minim", "mollit", "nisi", "non", "nostrud", "nulla",
	"occaecat", "officia", "pariatur", "proident", "qui", "quis", "reprehenderit", "sed",
	"sint", "sit", "sunt", "tempor", "ullamco", "ut", "velit", "veniam", "voluptate",
];

/// Returns the token at `index`, or `None` if out of bounds.
pub fn word(index: usize) -> Option<&'static str> {
	WORDS.get(index).copied()
}

/// Number of tokens in the bank.
pub fn len() -> usize {
	WORDS.len()
}

/// The whole bank, in its fixed order.
pub fn words() -> &'static [&'static str] {
	&WORDS
}

/// Draws one token uniformly (with replacement).
pub(crate) fn random_word<R: Rng>(rng: &mut R) -> &'static str {
	WORDS[rng.random_range(0..WORDS.len())]
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	#[test]
	fn bank_is_lowercase_tokens() {
		assert!(len() > 0);
		for token in words() {
			assert!(!token.is_empty());
			assert!(token.chars().all(|c| c.is_ascii_lowercase()), "bad token {token}");
		}
	}

	#[test]
	fn lookup_by_index() {
		assert_eq!(word(0), Some("ad"));
		assert_eq!(word(len() - 1), Some("voluptate"));
		assert_eq!(word(len()), None);
	}

	#[test]
	fn random_word_comes_from_bank() {
		let mut rng = StdRng::seed_from_u64(7);
		for _ in 0..500 {
			assert!(words().contains(&random_word(&mut rng)));
		}
	}
}
