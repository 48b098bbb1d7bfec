use rand::Rng;
use serde::{Deserialize, Serialize};

/// Optional comma embellishment applied to long sentences.
///
/// A sentence longer than `min_length` words gets, with probability
/// `probability`, one comma suffixed to a word picked uniformly from
/// `[margin, length - margin]`. The rule is skipped whenever that index
/// range is empty.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(try_from = "RawCommaRule")]
pub struct CommaRule {
	probability: f64,
	min_length: usize,
	margin: usize,
}

/// Unchecked wire form, validated through `CommaRule::new`.
#[derive(Deserialize)]
struct RawCommaRule {
	probability: f64,
	min_length: usize,
	margin: usize,
}

impl TryFrom<RawCommaRule> for CommaRule {
	type Error = String;

	fn try_from(raw: RawCommaRule) -> Result<Self, Self::Error> {
		CommaRule::new(raw.probability, raw.min_length, raw.margin)
	}
}

impl CommaRule {
	/// Creates a comma rule.
	///
	/// # Errors
	/// Returns an error if `probability` is outside `[0.0, 1.0]`.
	pub fn new(probability: f64, min_length: usize, margin: usize) -> Result<Self, String> {
		if !(0.0..=1.0).contains(&probability) {
			return Err(format!("Comma probability must be between 0.0 and 1.0, got {probability}"));
		}
		Ok(Self { probability, min_length, margin })
	}

	/// A rule that never places a comma.
	pub fn disabled() -> Self {
		Self { probability: 0.0, ..Self::default() }
	}

	pub fn probability(&self) -> f64 {
		self.probability
	}

	/// Returns a copy of this rule with another probability.
	///
	/// # Errors
	/// Returns an error if `probability` is outside `[0.0, 1.0]`.
	pub fn with_probability(self, probability: f64) -> Result<Self, String> {
		Self::new(probability, self.min_length, self.margin)
	}

	/// Picks the index of the word that receives the comma, if any.
	///
	/// Draws nothing from `rng` when the sentence is too short, so
	/// disabling the rule for short sentences leaves the stream untouched.
	pub fn pick<R: Rng>(&self, rng: &mut R, length: usize) -> Option<usize> {
		if length <= self.min_length || self.probability <= 0.0 {
			return None;
		}
		// Last index stays strictly before the end of the sentence
		let last = length.checked_sub(self.margin.max(1))?;
		if last < self.margin {
			return None;
		}
		if !rng.random_bool(self.probability) {
			return None;
		}
		Some(rng.random_range(self.margin..=last))
	}
}

impl Default for CommaRule {
	/// 30% chance on sentences of more than 10 words, 3 words away from the ends.
	fn default() -> Self {
		Self { probability: 0.3, min_length: 10, margin: 3 }
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	#[test]
	fn rejects_bad_probability() {
		assert!(CommaRule::new(1.5, 10, 3).is_err());
		assert!(CommaRule::new(-0.1, 10, 3).is_err());
		assert!(CommaRule::default().with_probability(2.0).is_err());
	}

	#[test]
	fn short_sentences_never_get_commas() {
		let rule = CommaRule::new(1.0, 10, 3).unwrap();
		let mut rng = StdRng::seed_from_u64(3);
		for length in 1..=10 {
			assert_eq!(rule.pick(&mut rng, length), None);
		}
	}

	#[test]
	fn certain_rule_stays_inside_margin() {
		let rule = CommaRule::new(1.0, 10, 3).unwrap();
		let mut rng = StdRng::seed_from_u64(11);
		for _ in 0..500 {
			for length in 11..=15 {
				let index = rule.pick(&mut rng, length).unwrap();
				assert!((3..=length - 3).contains(&index));
			}
		}
	}

	#[test]
	fn guard_skips_empty_index_range() {
		// Low threshold but the margin cannot fit
		let rule = CommaRule::new(1.0, 0, 3).unwrap();
		let mut rng = StdRng::seed_from_u64(5);
		for length in 1..6 {
			assert_eq!(rule.pick(&mut rng, length), None);
		}
		assert_eq!(rule.pick(&mut rng, 6), Some(3));
	}

	#[test]
	fn deserialize_validates() {
		let json = r#"{"probability":2.0,"min_length":10,"margin":3}"#;
		assert!(serde_json::from_str::<CommaRule>(json).is_err());

		let json = r#"{"probability":0.3,"min_length":10,"margin":3}"#;
		assert_eq!(serde_json::from_str::<CommaRule>(json).unwrap(), CommaRule::default());
	}

	#[test]
	fn default_rule_rate() {
		let rule = CommaRule::default();
		let mut rng = StdRng::seed_from_u64(2024);
		let draws = 5000;
		let mut commas = 0;
		for i in 0..draws {
			let length = 11 + i % 5;
			if let Some(index) = rule.pick(&mut rng, length) {
				assert!((3..=length - 3).contains(&index));
				commas += 1;
			}
		}
		let rate = commas as f64 / draws as f64;
		assert!((0.27..=0.33).contains(&rate), "comma rate {rate}");
	}

	#[test]
	fn default_rule_skips_ten_words() {
		let rule = CommaRule::default();
		let mut rng = StdRng::seed_from_u64(10);
		for _ in 0..2000 {
			assert_eq!(rule.pick(&mut rng, 10), None);
		}
		assert_eq!(rule, CommaRule::new(0.3, 10, 3).unwrap());
	}

	#[test]
	fn disabled_rule() {
		let rule = CommaRule::disabled();
		let mut rng = StdRng::seed_from_u64(8);
		for _ in 0..200 {
			assert_eq!(rule.pick(&mut rng, 40), None);
		}
	}
}
