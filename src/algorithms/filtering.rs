//! Filtering, replacement and comparison of packs.
use crate::functional::{equals, equivalent, less, negate};
use crate::predicate::PredicateMask;
use crate::{Kind, Pack};
use std::iter::once;

impl<T: Clone + Send + Sync, K: Kind> Pack<T, K> {
    /// Append to `to` our items satisfying `predicate`, in order.
    /// The result keeps `to`'s kind.
    pub fn copy_if<K2, P>(&self, to: &Pack<T, K2>, predicate: P) -> Pack<T, K2>
    where
        K2: Kind,
        P: Fn(&T) -> bool + Sync,
    {
        to.concat(&self.gather(self.mask(predicate).ids()))
    }

    /// Our items satisfying `predicate`, in order.
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + Sync,
    {
        self.copy_if(&self.clear(), predicate)
    }

    /// Our items not satisfying `predicate`, in order.
    pub fn remove_if<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + Sync,
    {
        self.copy_if(&self.clear(), negate(predicate))
    }

    /// Replace by `value` every item satisfying `predicate`.
    pub fn replace_if<P>(&self, value: T, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + Sync,
    {
        self.transform(|item| {
            if predicate(item) {
                value.clone()
            } else {
                item.clone()
            }
        })
    }

    /// Evaluate `predicate` on every pair of neighbours.
    ///
    /// Value `i` is `predicate(self[i], self[i + 1])`. The last item has no
    /// right neighbour and always yields false.
    pub fn adjacent<P>(&self, predicate: P) -> PredicateMask
    where
        P: Fn(&T, &T) -> bool + Sync,
    {
        let items = &self.items;
        PredicateMask::from_values(self.policy.map_indices(self.size(), |index| {
            items
                .get(index + 1)
                .is_some_and(|next| predicate(&items[index], next))
        }))
    }

    /// Drop every item equal (under `equal`) to the item just before it.
    ///
    /// Only consecutive duplicates go away: `[1, 1, 2, 1]` gives `[1, 2, 1]`.
    pub fn unique_by<E>(&self, equal: E) -> Self
    where
        E: Fn(&T, &T) -> bool + Sync,
    {
        if self.is_empty() {
            return self.clone();
        }
        // value i tells whether item i + 1 survives
        let survivors = self.adjacent(|left, right| !equal(left, right)).ids();
        self.gather(once(0).chain(survivors.into_iter().map(|index| index + 1)))
    }

    /// First `i` with `equal(self[i], self[i + 1])`, or `size()`.
    pub fn adjacent_find_by<E>(&self, equal: E) -> usize
    where
        E: Fn(&T, &T) -> bool + Sync,
    {
        self.adjacent(equal).first_true()
    }

    /// Is the pack sorted according to `compare`?
    pub fn is_sorted_by<C>(&self, compare: C) -> bool
    where
        C: Fn(&T, &T) -> bool + Sync,
    {
        self.adjacent(|left, right| compare(right, left)).none_of()
    }

    /// First index where `compare(self[i], other[i])` fails, looking only at
    /// the common prefix. Returns the shorter length if there is none.
    pub fn mismatch_by<U, K2, C>(&self, other: &Pack<U, K2>, compare: C) -> usize
    where
        U: Sync,
        K2: Kind,
        C: Fn(&T, &U) -> bool + Sync,
    {
        let (left, right) = (&self.items, &other.items);
        let len = self.size().min(other.size());
        PredicateMask::from_values(
            self.policy
                .map_indices(len, |index| compare(&left[index], &right[index])),
        )
        .first_false()
    }

    /// Is `self` lexicographically before `other` according to `compare`?
    ///
    /// The first non-equivalent pair decides; if there is none the shorter
    /// pack comes first, and equal packs are not before each other.
    pub fn lexicographical_compare_by<K2, C>(&self, other: &Pack<T, K2>, compare: C) -> bool
    where
        K2: Kind,
        C: Fn(&T, &T) -> bool + Sync,
    {
        let location = self.mismatch_by(other, |left, right| {
            equivalent(&compare, left, right)
        });
        if location < self.size().min(other.size()) {
            compare(&self.items[location], &other.items[location])
        } else {
            self.size() < other.size()
        }
    }
}

impl<T: PartialEq + Clone + Send + Sync, K: Kind> Pack<T, K> {
    /// Our items different from `value`.
    pub fn remove(&self, value: &T) -> Self {
        self.remove_if(equals(value.clone()))
    }

    /// Replace every `old` by `new`.
    pub fn replace(&self, old: &T, new: T) -> Self {
        self.replace_if(new, equals(old.clone()))
    }

    /// `unique_by` item equality.
    pub fn unique(&self) -> Self {
        self.unique_by(T::eq)
    }

    /// First index of two equal neighbours, or `size()`.
    pub fn adjacent_find(&self) -> usize {
        self.adjacent_find_by(T::eq)
    }

    /// `mismatch_by` item equality.
    pub fn mismatch<K2: Kind>(&self, other: &Pack<T, K2>) -> usize {
        self.mismatch_by(other, T::eq)
    }

    /// Same items in the same order (kinds may differ).
    ///
    /// Packs of different lengths are never equal.
    pub fn equal<K2: Kind>(&self, other: &Pack<T, K2>) -> bool {
        self.mismatch(other) == self.size().max(other.size())
    }
}

impl<T: Ord + Clone + Send + Sync, K: Kind> Pack<T, K> {
    /// `lexicographical_compare_by` with `<`.
    pub fn lexicographical_compare<K2: Kind>(&self, other: &Pack<T, K2>) -> bool {
        self.lexicographical_compare_by(other, less)
    }

    /// Is the pack sorted according to `<`?
    pub fn is_sorted(&self) -> bool {
        self.is_sorted_by(less)
    }
}
