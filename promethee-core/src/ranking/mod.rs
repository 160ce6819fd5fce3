//! The ranking module contains PROMETHEE I (partial order), PROMETHEE II (total order) and
//! PROMETHEE III (interval order) procedures built on outranking flows.

use serde::{Deserialize, Serialize};
use std::fmt;

mod promethee_i;
pub use self::promethee_i::*;

mod promethee_ii;
pub use self::promethee_ii::*;

mod promethee_iii;
pub use self::promethee_iii::*;

/// A relation between two alternatives of an ordered pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutrankingRelation {
    /// The first alternative is preferred (`P`).
    Preference,
    /// Both alternatives are indifferent (`I`).
    Indifference,
    /// The first alternative outranks the second one in the weak sense (`S`).
    Outranking,
    /// Alternatives are incomparable (`?`).
    Incomparability,
}

impl OutrankingRelation {
    /// Returns a conventional one letter symbol of the relation.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Preference => "P",
            Self::Indifference => "I",
            Self::Outranking => "S",
            Self::Incomparability => "?",
        }
    }
}

impl fmt::Display for OutrankingRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A relation of an ordered pair of alternatives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PairRelation {
    /// The first alternative.
    pub first: String,
    /// The second alternative.
    pub second: String,
    /// The relation from the first alternative to the second one.
    pub relation: OutrankingRelation,
}
