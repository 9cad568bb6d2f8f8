//! The ordering engine: partition points, stable partition, merge and sort.
//!
//! `merge` and `sort` recurse on two independent halves; the pack's policy
//! decides whether the halves run in parallel.
use crate::functional::{equivalent, less};
use crate::predicate::PredicateMask;
use crate::{Kind, Pack, Policy};
use std::collections::VecDeque;
use std::iter::once;
use tracing::trace;

/// Stable split of `items` into those satisfying `predicate` and the others.
fn stable_partition<T, P>(items: &[T], predicate: P, policy: Policy) -> (Vec<T>, Vec<T>)
where
    T: Clone + Sync,
    P: Fn(&T) -> bool + Sync,
{
    let mask = PredicateMask::evaluate(items, predicate, policy);
    let select = |ids: &[usize]| -> Vec<T> {
        ids.iter().map(|&index| items[index].clone()).collect()
    };
    (select(mask.ids().as_slice()), select(mask.false_ids().as_slice()))
}

/// Merge two sorted slices by splitting the longest one around its middle
/// item and binary searching where that item goes in the other one.
///
/// On ties, items of `left` come before items of `right`.
fn merge_recursive<T, C>(left: &[T], right: &[T], compare: &C, policy: Policy) -> Vec<T>
where
    T: Clone + Send + Sync,
    C: Fn(&T, &T) -> bool + Sync,
{
    if left.is_empty() {
        return right.to_vec();
    }
    if right.is_empty() {
        return left.to_vec();
    }
    let total = left.len() + right.len();
    let (left_parts, pivot, right_parts) = if left.len() >= right.len() {
        let middle = left.len() / 2;
        let pivot = &left[middle];
        // right items equivalent to the pivot must stay after it
        let split = PredicateMask::evaluate(right, |item| compare(item, pivot), policy)
            .partition_point();
        trace!(total, middle, split, "merge split on left pivot");
        (
            (&left[..middle], &right[..split]),
            pivot,
            (&left[middle + 1..], &right[split..]),
        )
    } else {
        let middle = right.len() / 2;
        let pivot = &right[middle];
        // left items equivalent to the pivot must stay before it
        let split = PredicateMask::evaluate(left, |item| !compare(pivot, item), policy)
            .partition_point();
        trace!(total, middle, split, "merge split on right pivot");
        (
            (&left[..split], &right[..middle]),
            pivot,
            (&left[split..], &right[middle + 1..]),
        )
    };
    let (mut before, after) = policy.join(
        total,
        || merge_recursive(left_parts.0, left_parts.1, compare, policy),
        || merge_recursive(right_parts.0, right_parts.1, compare, policy),
    );
    before.reserve(after.len() + 1);
    before.push(pivot.clone());
    before.extend(after);
    before
}

/// Move the middle item of `items` between the items ordered before it and
/// the others, both sides keeping their relative order. Returns the pivot's
/// new index, or `None` when every item is equivalent to the pivot.
fn split_around_middle<T, C>(items: &mut [T], compare: &C, policy: Policy) -> Option<usize>
where
    T: Clone + Sync,
    C: Fn(&T, &T) -> bool + Sync,
{
    let middle = items.len() / 2;
    let pivot = items[middle].clone();
    let smaller = PredicateMask::evaluate(items, |item| compare(item, &pivot), policy);
    if smaller.none_of()
        && PredicateMask::evaluate(items, |item| compare(&pivot, item), policy).none_of()
    {
        return None;
    }
    let before: Vec<usize> = smaller.ids().into_iter().filter(|&i| i != middle).collect();
    let after: Vec<usize> = smaller
        .false_ids()
        .into_iter()
        .filter(|&i| i != middle)
        .collect();
    let reordered: Vec<T> = before
        .iter()
        .chain(once(&middle))
        .chain(&after)
        .map(|&index| items[index].clone())
        .collect();
    items.clone_from_slice(&reordered);
    Some(before.len())
}

/// Order a run of equivalent items the way the quicksort does: the middle
/// item first, then the middle of what remains, and so on.
fn take_middles<T: Clone>(items: &mut [T]) {
    let middle = items.len() / 2;
    // invariant: left.len() == (left.len() + right.len()) / 2
    let mut left: VecDeque<T> = items[..middle].iter().cloned().collect();
    let mut right: VecDeque<T> = items[middle..].iter().cloned().collect();
    for slot in items.iter_mut() {
        match right.pop_front() {
            Some(next) => *slot = next,
            None => break,
        }
        if left.len() > right.len() {
            if let Some(moved) = left.pop_back() {
                right.push_front(moved);
            }
        }
    }
}

/// Quicksort with the positional middle item as pivot.
///
/// Only the shorter side is sorted recursively unless the split is balanced,
/// so the stack depth stays logarithmic.
fn sort_slice<T, C>(mut items: &mut [T], compare: &C, policy: Policy)
where
    T: Clone + Send + Sync,
    C: Fn(&T, &T) -> bool + Sync,
{
    while items.len() > 1 {
        let len = items.len();
        let Some(split) = split_around_middle(items, compare, policy) else {
            take_middles(items);
            return;
        };
        let (left, rest) = std::mem::take(&mut items).split_at_mut(split);
        let right = &mut rest[1..];
        trace!(len, split, "sort pivot");
        if left.len().min(right.len()) >= len / 4 {
            policy.join(
                len,
                || sort_slice(left, compare, policy),
                || sort_slice(right, compare, policy),
            );
            return;
        }
        let (short, long) = if left.len() < right.len() {
            (left, right)
        } else {
            (right, left)
        };
        sort_slice(short, compare, policy);
        items = long;
    }
}

impl<T: Clone + Send + Sync, K: Kind> Pack<T, K> {
    /// End of the leading run of items satisfying `predicate`.
    ///
    /// The pack must already be partitioned by `predicate`.
    pub fn partition_point<P>(&self, predicate: P) -> usize
    where
        P: Fn(&T) -> bool + Sync,
    {
        self.mask(predicate).partition_point()
    }

    /// Stable partition: items satisfying `predicate` first, then the others,
    /// each side in original order. Also returns the partition point.
    pub fn partition<P>(&self, predicate: P) -> (Self, usize)
    where
        P: Fn(&T) -> bool + Sync,
    {
        let (satisfying, others) = stable_partition(&self.items, predicate, self.policy);
        let point = satisfying.len();
        (self.derive(satisfying.into_iter().chain(others)), point)
    }

    /// Merge with `other`, both being sorted according to `compare`.
    /// The result keeps our kind; on ties our items come first.
    pub fn merge_by<K2, C>(&self, other: &Pack<T, K2>, compare: C) -> Self
    where
        K2: Kind,
        C: Fn(&T, &T) -> bool + Sync,
    {
        self.derive(merge_recursive(
            &self.items,
            &other.items,
            &compare,
            self.policy,
        ))
    }

    /// Sort according to `compare` (a strict weak order).
    ///
    /// This is a quicksort taking the middle position as pivot: it is not
    /// stable and degrades to a quadratic number of comparisons on bad inputs.
    /// Runs of equivalent items are ordered in linear time.
    pub fn sort_by<C>(&self, compare: C) -> Self
    where
        C: Fn(&T, &T) -> bool + Sync,
    {
        let mut sorted = self.items.clone();
        sort_slice(&mut sorted, &compare, self.policy);
        Pack::from_items(sorted, self.policy)
    }

    /// First index whose item is not before `key`, in a pack sorted by
    /// `compare`.
    pub fn lower_bound_by<C>(&self, key: &T, compare: C) -> usize
    where
        C: Fn(&T, &T) -> bool + Sync,
    {
        self.partition_point(|item| compare(item, key))
    }

    /// Index of an item equivalent to `key` in a pack sorted by `compare`,
    /// or `size()`.
    pub fn binary_find_by<C>(&self, key: &T, compare: C) -> usize
    where
        C: Fn(&T, &T) -> bool + Sync,
    {
        let index = self.lower_bound_by(key, &compare);
        match self.items.get(index) {
            Some(item) if equivalent(&compare, item, key) => index,
            _ => self.size(),
        }
    }
}

impl<T: Ord + Clone + Send + Sync, K: Kind> Pack<T, K> {
    /// Merge with `other`, both being sorted by `<`.
    pub fn merge<K2: Kind>(&self, other: &Pack<T, K2>) -> Self {
        self.merge_by(other, less)
    }

    /// Sort by `<`.
    pub fn sort(&self) -> Self {
        self.sort_by(less)
    }

    /// Index of `key` in a pack sorted by `<`, or `size()`.
    pub fn binary_find(&self, key: &T) -> usize {
        self.binary_find_by(key, less)
    }
}
