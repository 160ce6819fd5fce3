//! This crate implements outranking methods of the ***PROMETHEE*** family for Multi-Criteria
//! Decision Aiding: per-criterion preference modeling, aggregation into outranking indices, flow
//! computation and the ranking, sorting, group decision and choice procedures built on top of flows.
//!
//! Data flows strictly downward: weights and directed performances feed preference building,
//! preferences feed flows, flows feed ranking/sorting/choice and outputs of multiple decision makers
//! feed group aggregation. Every stage is a pure function which either produces a fully defined
//! result or returns an error.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

#[cfg(test)]
#[path = "../tests/discovery/mod.rs"]
mod discovery;

pub mod choice;
pub mod flows;
pub mod group;
pub mod models;
pub mod preference;
pub mod prelude;
pub mod ranking;
pub mod sorting;
pub mod utils;
pub mod validation;
pub mod weights;
