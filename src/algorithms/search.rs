//! Predicate queries: counting and searching.
//!
//! Index results use `size()` as the "not found" sentinel.
use crate::functional::equals;
use crate::predicate::PredicateMask;
use crate::{Kind, Pack};

impl<T: Sync, K: Kind> Pack<T, K> {
    /// Evaluate `predicate` once on every item.
    pub fn mask<P>(&self, predicate: P) -> PredicateMask
    where
        P: Fn(&T) -> bool + Sync,
    {
        PredicateMask::evaluate(&self.items, predicate, self.policy)
    }

    /// How many items satisfy `predicate`.
    pub fn count_if<P>(&self, predicate: P) -> usize
    where
        P: Fn(&T) -> bool + Sync,
    {
        self.mask(predicate).count()
    }

    /// Do all items satisfy `predicate`?
    pub fn all_of<P>(&self, predicate: P) -> bool
    where
        P: Fn(&T) -> bool + Sync,
    {
        self.mask(predicate).all_of()
    }

    /// Does any item satisfy `predicate`?
    pub fn any_of<P>(&self, predicate: P) -> bool
    where
        P: Fn(&T) -> bool + Sync,
    {
        self.mask(predicate).any_of()
    }

    /// Does no item satisfy `predicate`?
    pub fn none_of<P>(&self, predicate: P) -> bool
    where
        P: Fn(&T) -> bool + Sync,
    {
        self.mask(predicate).none_of()
    }

    /// Index of the first item satisfying `predicate`, or `size()`.
    pub fn find_if<P>(&self, predicate: P) -> usize
    where
        P: Fn(&T) -> bool + Sync,
    {
        self.mask(predicate).first_true()
    }

    /// Index of the first item not satisfying `predicate`, or `size()`.
    pub fn find_if_not<P>(&self, predicate: P) -> usize
    where
        P: Fn(&T) -> bool + Sync,
    {
        self.mask(predicate).first_false()
    }

    /// `find_if` returning `None` instead of the sentinel.
    pub fn position<P>(&self, predicate: P) -> Option<usize>
    where
        P: Fn(&T) -> bool + Sync,
    {
        Some(self.find_if(predicate)).filter(|&index| index != self.size())
    }

    /// `find_if_not` returning `None` instead of the sentinel.
    pub fn position_not<P>(&self, predicate: P) -> Option<usize>
    where
        P: Fn(&T) -> bool + Sync,
    {
        Some(self.find_if_not(predicate)).filter(|&index| index != self.size())
    }
}

impl<T: PartialEq + Clone + Sync, K: Kind> Pack<T, K> {
    /// How many items equal `value`.
    pub fn count(&self, value: &T) -> usize {
        self.count_if(equals(value.clone()))
    }

    /// Index of the first item equal to `value`, or `size()`.
    pub fn find(&self, value: &T) -> usize {
        self.find_if(equals(value.clone()))
    }

    /// Does some item equal `value`?
    pub fn contains(&self, value: &T) -> bool {
        self.find(value) != self.size()
    }
}
