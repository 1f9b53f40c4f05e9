use super::hand::Hand;
use super::rank::Rank;
use super::suit::Suit;

/// Per-rank and per-suit multiplicities of a five-card hand.
///
/// Counts live in fixed-size arrays indexed by rank and suit ordinal, so
/// iteration order is deterministic and the distinct-rank list comes out
/// ascending for free. Built fresh per evaluation and discarded after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally {
    ranks: [u8; 13],
    suits: [u8; 4],
}

impl From<&Hand> for Tally {
    fn from(hand: &Hand) -> Self {
        let mut ranks = [0u8; 13];
        let mut suits = [0u8; 4];
        for card in hand.iter() {
            ranks[u8::from(card.rank()) as usize - 1] += 1;
            suits[u8::from(card.suit()) as usize] += 1;
        }
        Self { ranks, suits }
    }
}

impl Tally {
    pub fn count_of_rank(&self, rank: Rank) -> u8 {
        self.ranks[u8::from(rank) as usize - 1]
    }
    pub fn count_of_suit(&self, suit: Suit) -> u8 {
        self.suits[u8::from(suit) as usize]
    }

    /// Number of distinct ranks occurring exactly n times.
    pub fn ranks_of_count(&self, n: u8) -> usize {
        self.ranks.iter().filter(|&&count| count == n).count()
    }

    /// Ascending list of the distinct ranks present, length 1 to 5.
    pub fn distinct_ranks(&self) -> Vec<Rank> {
        Rank::all()
            .into_iter()
            .filter(|&rank| self.count_of_rank(rank) > 0)
            .collect()
    }
}
