//! String utilities.
//!
//! Character predicates and the whitespace tokenizer that turns raw text into
//! normalized words.

mod tokenize;
mod util;

pub use tokenize::{clean_word, tokenize};
pub use util::{is_alphabetic, is_ascii_letter, is_whitespace, CharPredicate};
