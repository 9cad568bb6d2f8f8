//! Structural primitives: ends of packs, concatenation, transformations.
use crate::error::{Error, Result};
use crate::{Kind, Pack, Sequence};
use std::iter::{once, repeat};

impl<T: Clone, K: Kind> Pack<T, K> {
    /// First item.
    pub fn front(&self) -> Result<&T> {
        self.items.first().ok_or(Error::EmptyPack { operation: "front" })
    }

    /// Last item.
    pub fn back(&self) -> Result<&T> {
        self.items.last().ok_or(Error::EmptyPack { operation: "back" })
    }

    /// Add `item` before all others.
    pub fn push_front(&self, item: T) -> Self {
        self.derive(once(item).chain(self.items.iter().cloned()))
    }

    /// Add `item` after all others.
    pub fn push_back(&self, item: T) -> Self {
        self.derive(self.items.iter().cloned().chain(once(item)))
    }

    /// Remove first item.
    pub fn pop_front(&self) -> Result<Self> {
        match self.items.split_first() {
            Some((_, rest)) => Ok(self.derive(rest.iter().cloned())),
            None => Err(Error::EmptyPack {
                operation: "pop_front",
            }),
        }
    }

    /// Remove last item.
    pub fn pop_back(&self) -> Result<Self> {
        match self.items.split_last() {
            Some((_, rest)) => Ok(self.derive(rest.iter().cloned())),
            None => Err(Error::EmptyPack {
                operation: "pop_back",
            }),
        }
    }

    /// Our items followed by `other`'s. The result keeps our kind.
    pub fn concat<K2: Kind>(&self, other: &Pack<T, K2>) -> Self {
        self.derive(self.items.iter().chain(other.items.iter()).cloned())
    }

    /// Pack of our length where every item is `value`.
    pub fn fill<U: Clone>(&self, value: U) -> Pack<U, K> {
        self.derive(repeat(value).take(self.size()))
    }

    /// Pack of `count` copies of `value`.
    pub fn fill_n(count: usize, value: T) -> Self {
        repeat(value).take(count).collect()
    }
}

impl<T: Sync, K: Kind> Pack<T, K> {
    /// Apply `op` to every item, keeping order and kind.
    pub fn transform<U, F>(&self, op: F) -> Pack<U, K>
    where
        U: Send,
        F: Fn(&T) -> U + Sync,
    {
        let items = &self.items;
        self.derive(self.policy.map_indices(self.size(), |index| op(&items[index])))
    }

    /// Combine items pairwise with `op`.
    ///
    /// Both packs must have the same length, nothing is truncated.
    pub fn zip_with<U, V, K2, F>(&self, other: &Pack<U, K2>, op: F) -> Result<Pack<V, K>>
    where
        U: Sync,
        V: Send,
        K2: Kind,
        F: Fn(&T, &U) -> V + Sync,
    {
        if self.size() != other.size() {
            return Err(Error::LengthMismatch {
                operation: "zip_with",
                left: self.size(),
                right: other.size(),
            });
        }
        let (left, right) = (&self.items, &other.items);
        Ok(self.derive(
            self.policy
                .map_indices(self.size(), |index| op(&left[index], &right[index])),
        ))
    }
}

impl<S, K> Pack<S, K>
where
    S: Sequence,
    S::Item: Clone,
    K: Kind,
{
    /// Replace our single item by the items it contains, keeping our kind.
    pub fn flatten(&self) -> Result<Pack<S::Item, K>> {
        match self.items.as_slice() {
            [inner] => Ok(self.derive(inner.items().iter().cloned())),
            items => Err(Error::NotSingleton { len: items.len() }),
        }
    }
}
