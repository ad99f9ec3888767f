use rand::{rngs::OsRng, Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

/// Lower-case ASCII alphabet used for generated words.
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// A generator of random words and word streams.
///
/// Uses the xoshiro256** PRNG so a failing run can be replayed from its seed.
///
/// # Examples
///
/// ```
/// use word_freq_util::fuzzer::Fuzzer;
///
/// let mut fuzzer = Fuzzer::new(Some([7u8; 32]));
///
/// let word = fuzzer.random_word(3, 8);
/// assert!((3..=8).contains(&word.len()));
///
/// let corpus = fuzzer.corpus(20, 200);
/// assert_eq!(corpus.len(), 200);
/// ```
pub struct Fuzzer {
    /// The seed used to initialize the PRNG.
    pub seed: [u8; 32],
    rng: Xoshiro256StarStar,
}

impl Fuzzer {
    /// Create a new fuzzer with an optional seed.
    ///
    /// If no seed is provided, a random seed will be generated using `OsRng`.
    pub fn new(seed: Option<[u8; 32]>) -> Self {
        let seed = seed.unwrap_or_else(|| {
            let mut bytes = [0u8; 32];
            OsRng.fill_bytes(&mut bytes);
            bytes
        });

        Self {
            seed,
            rng: Xoshiro256StarStar::from_seed(seed),
        }
    }

    /// Generate a random integer in the range [min, max] (inclusive).
    pub fn random_int(&mut self, min: usize, max: usize) -> usize {
        self.rng.gen_range(min..=max)
    }

    /// Pick a random element from a non-empty slice.
    pub fn pick<'a, T>(&mut self, elements: &'a [T]) -> &'a T {
        let idx = self.rng.gen_range(0..elements.len());
        &elements[idx]
    }

    /// Generate a random string of the specified length from the given characters.
    pub fn random_string(&mut self, len: usize, chars: &str) -> String {
        let chars: Vec<char> = chars.chars().collect();
        (0..len)
            .map(|_| chars[self.rng.gen_range(0..chars.len())])
            .collect()
    }

    /// Generate a lower-case ASCII word with a length in [min_len, max_len].
    pub fn random_word(&mut self, min_len: usize, max_len: usize) -> String {
        let len = self.random_int(min_len.max(1), max_len.max(min_len).max(1));
        self.random_string(len, ALPHABET)
    }

    /// Generate `vocabulary` distinct words, sorted alphabetically.
    pub fn vocabulary(&mut self, vocabulary: usize) -> Vec<String> {
        let mut words = std::collections::BTreeSet::new();
        while words.len() < vocabulary {
            let word = self.random_word(1, 10);
            words.insert(word);
        }
        words.into_iter().collect()
    }

    /// Generate a stream of `len` words drawn from a vocabulary of at most
    /// `vocabulary` distinct words.
    ///
    /// Draws are skewed towards the front of the vocabulary so the stream has
    /// a spread of frequencies, including ties and single occurrences.
    pub fn corpus(&mut self, vocabulary: usize, len: usize) -> Vec<String> {
        let words = self.vocabulary(vocabulary.max(1));
        (0..len)
            .map(|_| {
                // Pick from a random prefix, so earlier words come up more often.
                let end = self.random_int(1, words.len());
                self.pick(&words[..end]).clone()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuzzer_random_int() {
        let mut fuzzer = Fuzzer::new(None);

        for _ in 0..100 {
            let n = fuzzer.random_int(1, 10);
            assert!((1..=10).contains(&n));
        }
    }

    #[test]
    fn test_fuzzer_pick() {
        let mut fuzzer = Fuzzer::new(None);
        let choices = vec!["a", "b", "c"];

        for _ in 0..100 {
            let picked = fuzzer.pick(&choices);
            assert!(choices.contains(picked));
        }
    }

    #[test]
    fn test_fuzzer_reproducible() {
        let seed = [1u8; 32];

        let mut fuzzer1 = Fuzzer::new(Some(seed));
        let mut fuzzer2 = Fuzzer::new(Some(seed));

        assert_eq!(fuzzer1.corpus(50, 300), fuzzer2.corpus(50, 300));
    }

    #[test]
    fn test_fuzzer_random_word_alphabet() {
        let mut fuzzer = Fuzzer::new(None);

        for _ in 0..100 {
            let w = fuzzer.random_word(2, 6);
            assert!((2..=6).contains(&w.len()));
            assert!(w.chars().all(|c| ALPHABET.contains(c)));
        }
    }

    #[test]
    fn test_fuzzer_vocabulary_distinct_and_sorted() {
        let mut fuzzer = Fuzzer::new(Some([3u8; 32]));

        let vocab = fuzzer.vocabulary(64);
        assert_eq!(vocab.len(), 64);
        assert!(vocab.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_fuzzer_corpus_draws_from_vocabulary() {
        let mut fuzzer = Fuzzer::new(Some([9u8; 32]));

        let corpus = fuzzer.corpus(10, 500);
        let distinct: std::collections::BTreeSet<&String> = corpus.iter().collect();
        assert!(distinct.len() <= 10);
        assert!(corpus.iter().all(|w| !w.is_empty()));
    }

    #[test]
    fn test_fuzzer_corpus_favours_early_words() {
        let mut fuzzer = Fuzzer::new(Some([5u8; 32]));

        let vocab = Fuzzer::new(Some([5u8; 32])).vocabulary(10);
        let corpus = fuzzer.corpus(10, 5_000);
        let first = corpus.iter().filter(|w| **w == vocab[0]).count();
        let last = corpus.iter().filter(|w| **w == vocab[9]).count();
        assert!(first > last);
    }
}
