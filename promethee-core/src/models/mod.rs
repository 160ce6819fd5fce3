//! A collection of models to represent decision problem data: labelled tables, criteria with their
//! preference functions, profile topologies and a per-call configuration.

mod config;
pub use self::config::*;

mod criteria;
pub use self::criteria::*;

mod labels;
pub use self::labels::*;

mod problem;
pub use self::problem::*;

mod profiles;
pub use self::profiles::*;

mod table;
pub use self::table::*;
