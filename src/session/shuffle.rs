//! Display-order shuffling
//!
//! Words are shown in a uniform random permutation so their position leaks
//! nothing about their group.

use rand::Rng;
use rand::seq::SliceRandom;

/// Shuffle words in place with a Fisher-Yates pass
pub fn shuffle_words<R: Rng + ?Sized>(words: &mut [String], rng: &mut R) {
    words.shuffle(rng);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn words() -> Vec<String> {
        (0..16).map(|i| format!("W{i:02}")).collect()
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let original = words();
        let mut shuffled = original.clone();

        for _ in 0..50 {
            shuffle_words(&mut shuffled, &mut rng);
            let mut sorted = shuffled.clone();
            sorted.sort();
            assert_eq!(sorted, original);
        }
    }

    #[test]
    fn shuffle_handles_tiny_slices() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut empty: Vec<String> = Vec::new();
        shuffle_words(&mut empty, &mut rng);
        assert!(empty.is_empty());

        let mut one = vec!["ONLY".to_string()];
        shuffle_words(&mut one, &mut rng);
        assert_eq!(one, ["ONLY"]);
    }

    #[test]
    fn positions_are_uniform() {
        // Chi-square over a 16x16 position table. For a uniform shuffle the
        // statistic stays close to 240.
        const TRIALS: usize = 32_000;
        let mut rng = StdRng::seed_from_u64(42);
        let base = words();
        let mut counts = [[0usize; 16]; 16];

        for _ in 0..TRIALS {
            let mut w = base.clone();
            shuffle_words(&mut w, &mut rng);
            for (pos, word) in w.iter().enumerate() {
                let idx = base.iter().position(|b| b == word).unwrap();
                counts[idx][pos] += 1;
            }
        }

        let expected = TRIALS as f64 / 16.0;
        let chi_square: f64 = counts
            .iter()
            .flatten()
            .map(|&c| {
                let diff = c as f64 - expected;
                diff * diff / expected
            })
            .sum();

        assert!(chi_square < 340.0, "chi-square too high: {chi_square:.1}");
    }
}
