//! The group module combines outputs of several decision makers: category assignments into
//! class acceptabilities and net flows into a weighted group flow.

mod acceptabilities;
pub use self::acceptabilities::*;

mod flows;
pub use self::flows::*;
