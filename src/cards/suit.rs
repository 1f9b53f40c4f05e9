use crate::error::HandError;

/// One of the four card families.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub enum Suit {
    Club = 0,
    Spade = 1,
    Diamond = 2,
    Heart = 3,
}

impl Suit {
    pub const fn all() -> [Self; 4] {
        [Suit::Club, Suit::Spade, Suit::Diamond, Suit::Heart]
    }
}

impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}
impl TryFrom<u8> for Suit {
    type Error = HandError;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            0 => Ok(Suit::Club),
            1 => Ok(Suit::Spade),
            2 => Ok(Suit::Diamond),
            3 => Ok(Suit::Heart),
            _ => Err(HandError::InvalidSuit(n.to_string())),
        }
    }
}

/// str isomorphism, accepting one-letter and full-word forms
impl TryFrom<&str> for Suit {
    type Error = HandError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "c" | "club" => Ok(Suit::Club),
            "s" | "spade" => Ok(Suit::Spade),
            "d" | "diamond" => Ok(Suit::Diamond),
            "h" | "heart" => Ok(Suit::Heart),
            _ => Err(HandError::InvalidSuit(s.to_string())),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Suit::Club => "c",
                Suit::Spade => "s",
                Suit::Diamond => "d",
                Suit::Heart => "h",
            }
        )
    }
}
