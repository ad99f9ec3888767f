//! word-freq-util - Utility functions for word-freq
//!
//! Text tokenization, the stable merge sort used for frequency ranking, and a
//! seeded word generator for tests and benchmarks.

pub mod fuzzer;
pub mod sort;
pub mod strings;

// Re-exports for convenience
pub use fuzzer::Fuzzer;
pub use sort::{merge_sort_by, merge_sort_by_key};
pub use strings::{clean_word, is_alphabetic, is_ascii_letter, is_whitespace, tokenize, CharPredicate};
