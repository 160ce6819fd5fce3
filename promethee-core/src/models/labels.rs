#[cfg(test)]
#[path = "../../tests/unit/models/labels_test.rs"]
mod labels_test;

use crate::utils::{McdaError, McdaResult};
use rustc_hash::FxHashMap;

/// An ordered set of unique names which identifies one axis of a table (alternatives, profiles,
/// criteria or categories). The order is fixed at construction.
#[derive(Clone, Debug, Default)]
pub struct Labels {
    names: Vec<String>,
    index: FxHashMap<String, usize>,
}

impl Labels {
    /// Creates labels from names, fails on duplicates.
    pub fn new<I, S>(names: I) -> McdaResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names = names.into_iter().map(|name| name.into()).collect::<Vec<_>>();
        let mut index = FxHashMap::default();

        for (idx, name) in names.iter().enumerate() {
            if index.insert(name.clone(), idx).is_some() {
                return Err(McdaError::shape(format!("duplicated label: '{name}'")));
            }
        }

        Ok(Self { names, index })
    }

    /// Returns amount of labels.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if there are no labels.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns label at given position.
    /// Panics if index is out of range.
    pub fn name(&self, idx: usize) -> &str {
        self.names[idx].as_str()
    }

    /// Returns position of the label.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Returns position of the label or a shape error mentioning the axis.
    pub fn require(&self, name: &str, axis: &str) -> McdaResult<usize> {
        self.index_of(name).ok_or_else(|| McdaError::shape(format!("unknown {axis}: '{name}'")))
    }

    /// Checks whether label is present.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Iterates over labels in their order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(|name| name.as_str())
    }

    /// Returns all labels as a slice.
    pub fn names(&self) -> &[String] {
        self.names.as_slice()
    }

    /// Creates new labels which contain labels of `self` followed by labels of `other`.
    pub fn chain(&self, other: &Labels) -> McdaResult<Self> {
        Self::new(self.names.iter().chain(other.names.iter()).cloned())
    }
}

impl PartialEq for Labels {
    fn eq(&self, other: &Self) -> bool {
        self.names == other.names
    }
}

impl Eq for Labels {}
