/// A hand's category.
///
/// Variants ascend by precedence, so Ord agrees with the classifier: any
/// hand matching a higher variant's predicate never reports a lower one.
/// Carries no ranks because comparing two hands of the same category is out
/// of scope here.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    HighCard,
    Pair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
    RoyalFlush,
}

impl Category {
    pub const fn all() -> [Self; 10] {
        [
            Category::HighCard,
            Category::Pair,
            Category::TwoPair,
            Category::ThreeOfAKind,
            Category::Straight,
            Category::Flush,
            Category::FullHouse,
            Category::FourOfAKind,
            Category::StraightFlush,
            Category::RoyalFlush,
        ]
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Category::HighCard => "highcard",
            Category::Pair => "pair",
            Category::TwoPair => "twopair",
            Category::ThreeOfAKind => "threeofakind",
            Category::Straight => "straight",
            Category::Flush => "flush",
            Category::FullHouse => "fullhouse",
            Category::FourOfAKind => "fourofakind",
            Category::StraightFlush => "straightflush",
            Category::RoyalFlush => "royalflush",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
