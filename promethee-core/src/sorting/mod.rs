//! The sorting module assigns alternatives to ordered categories delimited by profiles.
//!
//! Categories are always ordered from the worst to the best one and so are profiles. An assignment
//! is either precise (one category) or imprecise (a span of adjacent categories).

#[cfg(test)]
#[path = "../../tests/unit/sorting/assignments_test.rs"]
mod assignments_test;

use crate::models::Labels;
use crate::utils::{McdaError, McdaResult};

mod dominance;
pub use self::dominance::*;

mod flowsort;
pub use self::flowsort::*;

mod promsort;
pub use self::promsort::*;

mod tri;
pub use self::tri::*;

/// An assignment of one alternative to a span of categories given by their positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Assignment {
    /// The worst category of the span.
    pub worse: usize,
    /// The best category of the span.
    pub better: usize,
}

impl Assignment {
    /// Creates a precise assignment.
    pub fn precise(category: usize) -> Self {
        Self { worse: category, better: category }
    }

    /// Creates an assignment spanning categories between two positions in any order.
    pub fn span(first: usize, second: usize) -> Self {
        Self { worse: first.min(second), better: first.max(second) }
    }

    /// Returns true if the assignment contains one category.
    pub fn is_precise(&self) -> bool {
        self.worse == self.better
    }

    /// Returns true if the category at given position belongs to the span.
    pub fn contains(&self, category: usize) -> bool {
        self.worse <= category && category <= self.better
    }

    /// Iterates over category positions of the span.
    pub fn categories(&self) -> std::ops::RangeInclusive<usize> {
        self.worse..=self.better
    }
}

/// Assignments of alternatives kept in alternatives order.
#[derive(Clone, Debug, PartialEq)]
pub struct Assignments {
    alternatives: Labels,
    categories: Labels,
    items: Vec<Assignment>,
}

impl Assignments {
    /// Creates a new instance of `Assignments`.
    pub fn new(alternatives: Labels, categories: Labels, items: Vec<Assignment>) -> McdaResult<Self> {
        if alternatives.len() != items.len() {
            return Err(McdaError::shape("every alternative must have exactly one assignment"));
        }

        if let Some((idx, _)) =
            items.iter().enumerate().find(|(_, item)| item.worse > item.better || item.better >= categories.len())
        {
            return Err(McdaError::shape(format!(
                "assignment of '{}' refers to unknown categories",
                alternatives.name(idx)
            )));
        }

        Ok(Self { alternatives, categories, items })
    }

    /// Creates assignments from names of the worse and the better category per alternative.
    pub fn from_names<'a, I>(alternatives: Labels, categories: Labels, names: I) -> McdaResult<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let items = names
            .into_iter()
            .map(|(worse, better)| {
                Ok(Assignment::span(categories.require(worse, "category")?, categories.require(better, "category")?))
            })
            .collect::<McdaResult<Vec<_>>>()?;

        Self::new(alternatives, categories, items)
    }

    /// Returns alternatives labels.
    pub fn alternatives(&self) -> &Labels {
        &self.alternatives
    }

    /// Returns categories labels.
    pub fn categories(&self) -> &Labels {
        &self.categories
    }

    /// Returns amount of assigned alternatives.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if nothing is assigned.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns assignment of alternative at given position.
    pub fn get(&self, idx: usize) -> Assignment {
        self.items[idx]
    }

    /// Returns assignment of the alternative with given name.
    pub fn assignment(&self, alternative: &str) -> Option<Assignment> {
        self.alternatives.index_of(alternative).map(|idx| self.items[idx])
    }

    /// Returns names of the worse and the better category of the alternative.
    pub fn category_names(&self, alternative: &str) -> Option<(&str, &str)> {
        self.assignment(alternative)
            .map(|assignment| (self.categories.name(assignment.worse), self.categories.name(assignment.better)))
    }

    /// Iterates over (alternative, assignment) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Assignment)> + '_ {
        self.alternatives.iter().zip(self.items.iter().copied())
    }

    /// Groups alternatives by categories. An imprecisely assigned alternative appears in every
    /// category of its span. Every category is listed, including empty ones.
    pub fn by_category(&self) -> Vec<(String, Vec<String>)> {
        self.categories
            .iter()
            .enumerate()
            .map(|(category, name)| {
                let members = self
                    .iter()
                    .filter(|(_, assignment)| assignment.contains(category))
                    .map(|(alternative, _)| alternative.to_string())
                    .collect();

                (name.to_string(), members)
            })
            .collect()
    }
}
