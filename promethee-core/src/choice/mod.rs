//! The choice module selects a subset of alternatives maximizing total net flow under linear
//! constraints (PROMETHEE V).

mod constraints;
pub use self::constraints::*;

mod promethee_v;
pub use self::promethee_v::*;
