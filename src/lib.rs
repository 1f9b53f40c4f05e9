//! Categorization of five-card poker hands.
//!
//! A `Hand` is exactly five `Card`s. Classification is a pure function of
//! rank and suit multiplicities: the `Evaluator` resolves overlapping
//! category memberships (a straight flush is also a flush) by checking the
//! highest-precedence `Category` first.

pub mod cards;
pub mod error;

pub use cards::*;
pub use error::HandError;

/// Random instance generation for testing.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

/// Classify a whitespace-separated five-card hand.
///
/// ```
/// assert_eq!(fivecard::classify("Ah Th Jh Qh Kh").unwrap().label(), "royalflush");
/// ```
pub fn classify(hand: &str) -> Result<Category, HandError> {
    Ok(Evaluator::from(Hand::try_from(hand)?).category())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_from_str() {
        assert_eq!(classify("7c 7s 7d 7h 2c").unwrap(), Category::FourOfAKind);
    }

    #[test]
    fn surfaces_parse_errors() {
        assert!(matches!(
            classify("Ah Th Jh Qh"),
            Err(HandError::WrongCardinality(4))
        ));
        assert!(matches!(
            classify("Ah Th Jh Qh Kx"),
            Err(HandError::InvalidSuit(_))
        ));
    }
}
