use super::category::Category;
use super::hand::Hand;
use super::rank::Rank;
use super::suit::Suit;
use super::tally::Tally;

/// Resolves a hand's Category.
///
/// Overlapping memberships (a straight flush is also a flush and a
/// straight) are settled by probing the highest-precedence category first
/// and returning the first hit, with HighCard as the floor. The probe
/// order is load-bearing; reordering it would misreport overlapping hands.
pub struct Evaluator(Tally);

impl From<Hand> for Evaluator {
    fn from(hand: Hand) -> Self {
        Self(Tally::from(&hand))
    }
}
impl From<Tally> for Evaluator {
    fn from(tally: Tally) -> Self {
        Self(tally)
    }
}

impl Evaluator {
    pub fn category(&self) -> Category {
        let category = None
            .or_else(|| self.find_royal_flush())
            .or_else(|| self.find_straight_flush())
            .or_else(|| self.find_4_oak())
            .or_else(|| self.find_full_house())
            .or_else(|| self.find_flush())
            .or_else(|| self.find_straight())
            .or_else(|| self.find_3_oak())
            .or_else(|| self.find_2_oak_2_oak())
            .or_else(|| self.find_2_oak())
            .unwrap_or(Category::HighCard);
        log::trace!("categorized as {}", category);
        category
    }

    ///

    fn find_royal_flush(&self) -> Option<Category> {
        (self.is_flush() && self.is_broadway()).then_some(Category::RoyalFlush)
    }
    fn find_straight_flush(&self) -> Option<Category> {
        (self.is_flush() && self.is_straight()).then_some(Category::StraightFlush)
    }
    fn find_4_oak(&self) -> Option<Category> {
        (self.0.ranks_of_count(4) > 0).then_some(Category::FourOfAKind)
    }
    fn find_full_house(&self) -> Option<Category> {
        (self.0.ranks_of_count(3) > 0 && self.0.ranks_of_count(2) > 0)
            .then_some(Category::FullHouse)
    }
    fn find_flush(&self) -> Option<Category> {
        self.is_flush().then_some(Category::Flush)
    }
    fn find_straight(&self) -> Option<Category> {
        self.is_straight().then_some(Category::Straight)
    }
    fn find_3_oak(&self) -> Option<Category> {
        (self.0.ranks_of_count(3) > 0).then_some(Category::ThreeOfAKind)
    }
    fn find_2_oak_2_oak(&self) -> Option<Category> {
        (self.0.ranks_of_count(2) == 2).then_some(Category::TwoPair)
    }
    fn find_2_oak(&self) -> Option<Category> {
        (self.0.ranks_of_count(2) > 0).then_some(Category::Pair)
    }

    fn is_flush(&self) -> bool {
        Suit::all()
            .into_iter()
            .any(|suit| self.0.count_of_suit(suit) == 5)
    }

    /// Five distinct ranks running max - min == 4, or the Broadway run.
    /// The wheel (A-2-3-4-5) does not count; Ace stays low outside Broadway.
    fn is_straight(&self) -> bool {
        let distinct = self.0.distinct_ranks();
        let contiguous = distinct.len() == 5
            && u8::from(distinct[4]) - u8::from(distinct[0]) == 4;
        contiguous || self.is_broadway()
    }

    /// Ace present and the top four distinct ranks exactly T-J-Q-K.
    /// Together that pins all five slots, so no paired rank can sneak in.
    fn is_broadway(&self) -> bool {
        let distinct = self.0.distinct_ranks();
        distinct.contains(&Rank::Ace)
            && distinct.len() >= 4
            && distinct[distinct.len() - 4..]
                == [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    fn category(s: &str) -> Category {
        Evaluator::from(Hand::try_from(s).unwrap()).category()
    }

    #[test]
    fn royal_flush() {
        assert_eq!(category("Ah Th Jh Qh Kh"), Category::RoyalFlush);
    }

    #[test]
    fn straight_flush() {
        assert_eq!(category("2s 3s 4s 5s 6s"), Category::StraightFlush);
    }

    #[test]
    fn four_oak() {
        assert_eq!(category("7c 7s 7d 7h 2c"), Category::FourOfAKind);
    }

    #[test]
    fn full_house() {
        assert_eq!(category("5c 5s 5d 9h 9c"), Category::FullHouse);
    }

    #[test]
    fn flush() {
        assert_eq!(category("2h 7h 9h Jh Kh"), Category::Flush);
    }

    #[test]
    fn straight() {
        assert_eq!(category("2h 3s 4d 5c 6s"), Category::Straight);
    }

    #[test]
    fn broadway_offsuit_is_a_straight() {
        assert_eq!(category("Th Js Qd Kc As"), Category::Straight);
    }

    #[test]
    fn three_oak() {
        assert_eq!(category("7c 7s 7d 9h 2c"), Category::ThreeOfAKind);
    }

    #[test]
    fn two_pair() {
        assert_eq!(category("5c 5s 9d 9h 2c"), Category::TwoPair);
    }

    #[test]
    fn one_pair() {
        assert_eq!(category("5c 5s 9d Jh 2c"), Category::Pair);
    }

    #[test]
    fn high_card() {
        assert_eq!(category("2h 5s 9d Jc Kh"), Category::HighCard);
    }

    #[test]
    fn wheel_is_not_a_straight() {
        assert_eq!(category("As 2h 3d 4c 5s"), Category::HighCard);
    }

    #[test]
    fn suited_wheel_is_a_flush() {
        assert_eq!(category("Ah 2h 3h 4h 5h"), Category::Flush);
    }

    #[test]
    fn paired_run_is_not_a_straight() {
        assert_eq!(category("2h 3s 4d 5c 5s"), Category::Pair);
    }

    #[test]
    fn paired_broadway_is_not_royal() {
        assert_eq!(category("Th Jh Qh Kh Ks"), Category::Pair);
    }

    #[test]
    fn full_house_over_flush_precedence() {
        assert!(Category::FullHouse > Category::Flush);
        assert_eq!(category("5c 5s 5d 9h 9c"), Category::FullHouse);
    }

    #[test]
    fn duplicate_cards_count_as_pairs() {
        assert_eq!(category("As As Kd Kh Qc"), Category::TwoPair);
    }

    #[test]
    fn order_insensitive() {
        assert_eq!(category("Kh Ah Qh Jh Th"), Category::RoyalFlush);
        assert_eq!(category("9c 5s 5c 9h 2c"), Category::TwoPair);
    }

    #[test]
    fn idempotent() {
        let hand = Hand::random();
        let eval = Evaluator::from(hand);
        assert_eq!(eval.category(), eval.category());
        assert_eq!(hand.category(), hand.category());
    }

    #[test]
    fn closed_label_set() {
        for _ in 0..1000 {
            let category = Hand::random().category();
            assert!(Category::all().contains(&category));
        }
    }
}
