use super::card::Card;
use super::category::Category;
use super::evaluator::Evaluator;
use crate::error::HandError;

pub const HAND_SIZE: usize = 5;

/// An ordered sequence of exactly five Cards.
///
/// Order is input-preserved but never affects classification. Duplicate
/// (rank, suit) pairs are accepted; validation covers cardinality and the
/// individual fields only.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Hand([Card; HAND_SIZE]);

impl Hand {
    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.0
    }
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.0.iter().copied()
    }
    pub fn category(&self) -> Category {
        Evaluator::from(*self).category()
    }
}

impl From<[Card; HAND_SIZE]> for Hand {
    fn from(cards: [Card; HAND_SIZE]) -> Self {
        Self(cards)
    }
}

impl TryFrom<&[Card]> for Hand {
    type Error = HandError;
    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        match <[Card; HAND_SIZE]>::try_from(cards) {
            Ok(cards) => Ok(Self(cards)),
            Err(_) => Err(HandError::WrongCardinality(cards.len())),
        }
    }
}
impl TryFrom<Vec<Card>> for Hand {
    type Error = HandError;
    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Self::try_from(cards.as_slice())
    }
}

/// raw (rank, suit ordinal) pairs, e.g. [(1, 3), (10, 3), ...]
impl TryFrom<&[(u8, u8)]> for Hand {
    type Error = HandError;
    fn try_from(pairs: &[(u8, u8)]) -> Result<Self, Self::Error> {
        if pairs.len() != HAND_SIZE {
            return Err(HandError::WrongCardinality(pairs.len()));
        }
        pairs
            .iter()
            .map(|pair| Card::try_from(*pair))
            .collect::<Result<Vec<_>, _>>()
            .and_then(Self::try_from)
    }
}

/// str isomorphism
/// whitespace-separated cards, e.g. "Ah Th Jh Qh Kh"
impl TryFrom<&str> for Hand {
    type Error = HandError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let tokens = s.split_whitespace().collect::<Vec<_>>();
        if tokens.len() != HAND_SIZE {
            return Err(HandError::WrongCardinality(tokens.len()));
        }
        tokens
            .into_iter()
            .map(Card::try_from)
            .collect::<Result<Vec<_>, _>>()
            .and_then(Self::try_from)
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (i, card) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

impl crate::Arbitrary for Hand {
    fn random() -> Self {
        Self(std::array::from_fn(|_| Card::random()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_str() {
        let hand = Hand::try_from("Ah Th Jh Qh Kh").unwrap();
        assert_eq!(hand, Hand::try_from(hand.to_string().as_str()).unwrap());
    }

    #[test]
    fn rejects_wrong_cardinality() {
        assert!(matches!(
            Hand::try_from("Ah Th Jh Qh"),
            Err(HandError::WrongCardinality(4))
        ));
        assert!(matches!(
            Hand::try_from("Ah Th Jh Qh Kh 2d"),
            Err(HandError::WrongCardinality(6))
        ));
    }

    #[test]
    fn rejects_malformed_cards() {
        assert!(matches!(
            Hand::try_from("Xh Th Jh Qh Kh"),
            Err(HandError::InvalidRank(_))
        ));
        assert!(matches!(
            Hand::try_from("Ah Th Jh Qh Kx"),
            Err(HandError::InvalidSuit(_))
        ));
    }

    #[test]
    fn accepts_duplicate_cards() {
        assert!(Hand::try_from("As As As As As").is_ok());
    }

    #[test]
    fn accepts_raw_pairs() {
        let pairs: &[(u8, u8)] = &[(1, 3), (10, 3), (11, 3), (12, 3), (13, 3)];
        let hand = Hand::try_from(pairs).unwrap();
        assert_eq!(hand, Hand::try_from("Ah Th Jh Qh Kh").unwrap());
    }
}
