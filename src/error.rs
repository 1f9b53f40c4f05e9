use thiserror::Error;

/// Ways a candidate hand can be malformed.
///
/// All variants are fatal to the call and raised before any counting work;
/// the caller recovers by correcting the input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HandError {
    #[error("expected exactly 5 cards, got {0}")]
    WrongCardinality(usize),

    #[error("invalid rank: {0}")]
    InvalidRank(String),

    #[error("invalid suit: {0}")]
    InvalidSuit(String),
}
