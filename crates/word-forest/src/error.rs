use std::fmt;

/// The fixed-size resource that ran out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CapacityKind {
    /// The word-id table (one slot per distinct word).
    Words,
    /// The character arena backing interned text.
    Characters,
}

impl fmt::Display for CapacityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CapacityKind::Words => f.write_str("word table"),
            CapacityKind::Characters => f.write_str("character arena"),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// Interning a new word would exceed a construction-time bound. Fatal for
    /// the counting run: the pool never grows.
    #[error("capacity exceeded: {kind} is full (limit {limit})")]
    CapacityExceeded { kind: CapacityKind, limit: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
