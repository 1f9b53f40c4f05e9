#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

impl From<(Rank, Suit)> for Card {
    fn from((rank, suit): (Rank, Suit)) -> Self {
        Self { rank, suit }
    }
}

/// raw (rank, suit ordinal) pair, validated field by field
impl TryFrom<(u8, u8)> for Card {
    type Error = HandError;
    fn try_from((rank, suit): (u8, u8)) -> Result<Self, Self::Error> {
        Ok(Self {
            rank: Rank::try_from(rank)?,
            suit: Suit::try_from(suit)?,
        })
    }
}

/// str isomorphism
/// rank token followed by a one-letter suit, e.g. "Ah", "Td", "10d"
impl TryFrom<&str> for Card {
    type Error = HandError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.char_indices().last() {
            Some((i, _)) if i > 0 => {
                let (rank, suit) = s.split_at(i);
                Ok(Self {
                    rank: Rank::try_from(rank)?,
                    suit: Suit::try_from(suit)?,
                })
            }
            _ => Err(HandError::InvalidRank(s.to_string())),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl crate::Arbitrary for Card {
    fn random() -> Self {
        let ref mut rng = rand::rng();
        let rank = Rank::all()[rand::Rng::random_range(rng, 0..13)];
        let suit = Suit::all()[rand::Rng::random_range(rng, 0..4)];
        Self { rank, suit }
    }
}

use super::rank::Rank;
use super::suit::Suit;
use crate::error::HandError;
