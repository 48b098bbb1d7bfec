use rand::Rng;
use serde::{Deserialize, Serialize};

/// Inclusive range of words a generated sentence may hold.
///
/// # Invariants
/// - `min >= 1`
/// - `min <= max`
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(try_from = "RawWordRange")]
pub struct WordRange {
	min: usize,
	max: usize,
}

/// Unchecked wire form, validated through `WordRange::new`.
#[derive(Deserialize)]
struct RawWordRange {
	min: usize,
	max: usize,
}

impl TryFrom<RawWordRange> for WordRange {
	type Error = String;

	fn try_from(raw: RawWordRange) -> Result<Self, Self::Error> {
		WordRange::new(raw.min, raw.max)
	}
}

impl WordRange {
	/// Range used for every sentence generated inside a paragraph.
	pub const PARAGRAPH: WordRange = WordRange { min: 5, max: 12 };

	/// Creates a validated range.
	///
	/// # Errors
	/// Returns an error if `min > max` or `min == 0`. Bounds are never
	/// swapped or clamped: a bad range is a bug in the caller.
	pub fn new(min: usize, max: usize) -> Result<Self, String> {
		if min > max {
			return Err(format!("min words ({min}) must not exceed max words ({max})"));
		}
		if min == 0 {
			return Err("min words must be >= 1".to_owned());
		}
		Ok(Self { min, max })
	}

	pub fn min(&self) -> usize {
		self.min
	}

	pub fn max(&self) -> usize {
		self.max
	}

	/// Returns `true` if `length` falls inside the range.
	pub fn contains(&self, length: usize) -> bool {
		(self.min..=self.max).contains(&length)
	}

	/// Draws a sentence length uniformly in `[min, max]`.
	pub(crate) fn sample<R: Rng>(&self, rng: &mut R) -> usize {
		rng.random_range(self.min..=self.max)
	}
}

impl Default for WordRange {
	/// 8 to 15 words.
	fn default() -> Self {
		Self { min: 8, max: 15 }
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	#[test]
	fn rejects_inverted_bounds() {
		assert!(WordRange::new(12, 5).is_err());
		assert!(WordRange::new(2, 1).is_err());
	}

	#[test]
	fn rejects_zero_min() {
		assert!(WordRange::new(0, 4).is_err());
		assert!(WordRange::new(0, 0).is_err());
	}

	#[test]
	fn accepts_single_value() {
		let range = WordRange::new(7, 7).unwrap();
		let mut rng = StdRng::seed_from_u64(1);
		for _ in 0..50 {
			assert_eq!(range.sample(&mut rng), 7);
		}
	}

	#[test]
	fn samples_stay_inside() {
		let mut rng = StdRng::seed_from_u64(99);
		let range = WordRange::PARAGRAPH;
		let mut seen_min = false;
		let mut seen_max = false;
		for _ in 0..2000 {
			let length = range.sample(&mut rng);
			assert!(range.contains(length));
			seen_min |= length == 5;
			seen_max |= length == 12;
		}
		assert!(seen_min && seen_max);
	}

	#[test]
	fn deserialize_validates() {
		assert!(serde_json::from_str::<WordRange>(r#"{"min":12,"max":5}"#).is_err());
		assert!(serde_json::from_str::<WordRange>(r#"{"min":0,"max":0}"#).is_err());

		let range: WordRange = serde_json::from_str(r#"{"min":5,"max":12}"#).unwrap();
		assert_eq!(range, WordRange::PARAGRAPH);
	}

	#[test]
	fn default_range() {
		let range = WordRange::default();
		assert_eq!((range.min(), range.max()), (8, 15));
	}
}
