/// A predicate function for checking character properties.
pub type CharPredicate = fn(char) -> bool;

/// Check if a character is alphabetic (any script).
///
/// This is the default filter for word characters: digits and punctuation
/// are stripped from words.
///
/// # Examples
///
/// ```
/// use word_freq_util::strings::is_alphabetic;
///
/// assert!(is_alphabetic('a'));
/// assert!(is_alphabetic('Z'));
/// assert!(is_alphabetic('é'));
/// assert!(!is_alphabetic('5'));
/// assert!(!is_alphabetic('\''));
/// ```
pub fn is_alphabetic(ch: char) -> bool {
    ch.is_alphabetic()
}

/// Check if a character is an ASCII letter (`a-z`, `A-Z`).
///
/// # Examples
///
/// ```
/// use word_freq_util::strings::is_ascii_letter;
///
/// assert!(is_ascii_letter('q'));
/// assert!(is_ascii_letter('Q'));
/// assert!(!is_ascii_letter('é'));
/// assert!(!is_ascii_letter('-'));
/// ```
pub fn is_ascii_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

/// Check if a character is whitespace, i.e. a word separator.
///
/// # Examples
///
/// ```
/// use word_freq_util::strings::is_whitespace;
///
/// assert!(is_whitespace(' '));
/// assert!(is_whitespace('\t'));
/// assert!(is_whitespace('\n'));
/// assert!(!is_whitespace('a'));
/// ```
pub fn is_whitespace(ch: char) -> bool {
    ch.is_whitespace()
}
