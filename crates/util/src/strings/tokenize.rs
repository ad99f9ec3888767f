use super::util::{is_whitespace, CharPredicate};

/// Keep only the characters accepted by `keep`, lower-cased.
///
/// May return an empty string when nothing in `raw` is kept.
///
/// # Examples
///
/// ```
/// use word_freq_util::strings::{clean_word, is_alphabetic};
///
/// assert_eq!(clean_word("Don't!", is_alphabetic), "dont");
/// assert_eq!(clean_word("1984", is_alphabetic), "");
/// ```
pub fn clean_word(raw: &str, keep: CharPredicate) -> String {
    // Lower-case the whole word at once: final sigma depends on its position.
    raw.chars()
        .filter(|&c| keep(c))
        .collect::<String>()
        .to_lowercase()
}

/// Split `line` on whitespace and clean every piece with [`clean_word`].
///
/// Pieces that clean down to nothing are dropped, so every yielded word is
/// non-empty.
///
/// # Examples
///
/// ```
/// use word_freq_util::strings::{tokenize, is_alphabetic};
///
/// let words: Vec<String> = tokenize("The cat -- the CAT's hat.", is_alphabetic).collect();
/// assert_eq!(words, vec!["the", "cat", "the", "cats", "hat"]);
/// ```
pub fn tokenize(line: &str, keep: CharPredicate) -> impl Iterator<Item = String> + '_ {
    line.split(is_whitespace)
        .filter(|piece| !piece.is_empty())
        .map(move |piece| clean_word(piece, keep))
        .filter(|word| !word.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strings::{is_alphabetic, is_ascii_letter};

    #[test]
    fn test_clean_word_lowercases() {
        assert_eq!(clean_word("HeLLo", is_alphabetic), "hello");
    }

    #[test]
    fn test_clean_word_folds_final_sigma() {
        assert_eq!(clean_word("ΟΔΌΣ", is_alphabetic), "οδός");
        assert_eq!(
            clean_word("ΟΔΌΣ", is_alphabetic),
            clean_word("οδός", is_alphabetic)
        );
        assert_eq!(clean_word("ΣΟΦΌΣ.", is_alphabetic), "σοφός");
    }

    #[test]
    fn test_tokenize_counts_greek_case_variants_as_one_word() {
        let words: Vec<String> = tokenize("ΟΔΌΣ οδός Οδός", is_alphabetic).collect();
        assert_eq!(words, vec!["οδός", "οδός", "οδός"]);
    }

    #[test]
    fn test_clean_word_strips_inner_punctuation() {
        assert_eq!(clean_word("well-known", is_alphabetic), "wellknown");
        assert_eq!(clean_word("\"quoted,\"", is_alphabetic), "quoted");
    }

    #[test]
    fn test_clean_word_ascii_mode_drops_accents() {
        assert_eq!(clean_word("café", is_ascii_letter), "caf");
        assert_eq!(clean_word("café", is_alphabetic), "café");
    }

    #[test]
    fn test_tokenize_empty_line() {
        assert_eq!(tokenize("", is_alphabetic).count(), 0);
        assert_eq!(tokenize("   \t  ", is_alphabetic).count(), 0);
    }

    #[test]
    fn test_tokenize_drops_non_words() {
        let words: Vec<String> = tokenize("42 -- ... x", is_alphabetic).collect();
        assert_eq!(words, vec!["x"]);
    }

    #[test]
    fn test_tokenize_mixed_whitespace() {
        let words: Vec<String> = tokenize("one\ttwo  three\r\n", is_alphabetic).collect();
        assert_eq!(words, vec!["one", "two", "three"]);
    }
}
