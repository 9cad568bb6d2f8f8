//! The predicate evaluation engine.
//!
//! A predicate is evaluated exactly once per item into a boolean mask; every
//! search, count, filter and partition query is then answered from the mask.
use crate::Policy;
use itertools::Itertools;
use smallvec::SmallVec;

/// Boolean mask produced by evaluating a predicate over a whole sequence.
///
/// Index queries return the mask length when nothing matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredicateMask {
    values: SmallVec<[bool; 32]>,
}

impl PredicateMask {
    /// Evaluate `predicate` on every item under given policy.
    pub fn evaluate<T, P>(items: &[T], predicate: P, policy: Policy) -> Self
    where
        T: Sync,
        P: Fn(&T) -> bool + Sync,
    {
        let values = policy.map_indices(items.len(), |index| predicate(&items[index]));
        PredicateMask {
            values: SmallVec::from_vec(values),
        }
    }

    /// Mask with the given values.
    pub fn from_values<I: IntoIterator<Item = bool>>(values: I) -> Self {
        PredicateMask {
            values: values.into_iter().collect(),
        }
    }

    /// Number of evaluated items.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Was the mask computed on an empty sequence?
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All values in order.
    pub fn values(&self) -> &[bool] {
        &self.values
    }

    /// Index of first true value (or `len()`).
    pub fn first_true(&self) -> usize {
        self.values
            .iter()
            .position(|&v| v)
            .unwrap_or_else(|| self.len())
    }

    /// Index of first false value (or `len()`).
    pub fn first_false(&self) -> usize {
        self.values
            .iter()
            .position(|&v| !v)
            .unwrap_or_else(|| self.len())
    }

    /// How many true values.
    pub fn count(&self) -> usize {
        self.values.iter().filter(|&&v| v).count()
    }

    /// Are all values true? (vacuously true when empty)
    pub fn all_of(&self) -> bool {
        self.first_false() == self.len()
    }

    /// Is any value true?
    pub fn any_of(&self) -> bool {
        self.first_true() != self.len()
    }

    /// Is no value true?
    pub fn none_of(&self) -> bool {
        !self.any_of()
    }

    /// Indices of true values, in increasing order.
    pub fn ids(&self) -> SmallVec<[usize; 32]> {
        self.values.iter().positions(|&v| v).collect()
    }

    /// Indices of false values, in increasing order.
    pub fn false_ids(&self) -> SmallVec<[usize; 32]> {
        self.values.iter().positions(|&v| !v).collect()
    }

    /// Binary search the end of the leading run of true values.
    ///
    /// The mask must be partitioned (all true values first) for the answer
    /// to be meaningful. Returns `len()` when all values are true.
    pub fn partition_point(&self) -> usize {
        let (mut left, mut right) = (0, self.len());
        while left < right {
            let middle = left + (right - left) / 2;
            if self.values[middle] {
                left = middle + 1;
            } else {
                right = middle;
            }
        }
        left
    }
}
