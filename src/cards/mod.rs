pub mod card;
pub use card::*;

pub mod category;
pub use category::*;

pub mod evaluator;
pub use evaluator::*;

pub mod hand;
pub use hand::*;

pub mod rank;
pub use rank::*;

pub mod suit;
pub use suit::*;

pub mod tally;
pub use tally::*;
