//! Positional access and projection.
//!
//! Every projection goes through `select_ids`: head, tail, reverse and rotate
//! are just particular index lists. Element access and positional edits fail
//! on a bad index while `head`, `tail` and `resize` clamp.
use crate::error::{out_of_range, Result};
use crate::{Kind, Pack};

impl<T: Clone, K: Kind> Pack<T, K> {
    /// Item at `index`.
    pub fn at(&self, index: usize) -> Result<&T> {
        self.items
            .get(index)
            .ok_or_else(|| out_of_range("at", index, self.size()))
    }

    /// Gather items at given indices (repetitions and any order allowed).
    pub fn select_ids(&self, ids: &[usize]) -> Result<Self> {
        match ids.iter().find(|&&index| index >= self.size()) {
            Some(&index) => Err(out_of_range("select_ids", index, self.size())),
            None => Ok(self.gather(ids.iter().copied())),
        }
    }

    /// `select_ids` for indices known to be in range.
    pub(crate) fn gather<I: IntoIterator<Item = usize>>(&self, ids: I) -> Self {
        self.derive(ids.into_iter().map(|index| self.items[index].clone()))
    }

    /// First `count` items (the whole pack if shorter).
    pub fn head(&self, count: usize) -> Self {
        self.gather(0..count.min(self.size()))
    }

    /// Last `count` items (the whole pack if shorter).
    pub fn tail(&self, count: usize) -> Self {
        self.gather(self.size().saturating_sub(count)..self.size())
    }

    /// Shorten to `len` items, or pad with copies of `pad` up to `len`.
    pub fn resize(&self, len: usize, pad: T) -> Self {
        if len < self.size() {
            self.head(len)
        } else {
            self.concat(&Self::fill_n(len - self.size(), pad))
        }
    }

    /// Items in reverse order.
    pub fn reverse(&self) -> Self {
        self.gather((0..self.size()).rev())
    }

    /// Rotate so that the item at `first` comes first.
    pub fn rotate(&self, first: usize) -> Result<Self> {
        if first >= self.size() {
            return Err(out_of_range("rotate", first, self.size()));
        }
        Ok(self.tail(self.size() - first).concat(self).head(self.size()))
    }

    /// Remove the item at `index`.
    pub fn erase(&self, index: usize) -> Result<Self> {
        if index >= self.size() {
            return Err(out_of_range("erase", index, self.size()));
        }
        Ok(self.head(index).concat(&self.tail(self.size() - index - 1)))
    }

    /// Insert `item` before position `index` (`index == size()` appends).
    pub fn insert(&self, index: usize, item: T) -> Result<Self> {
        if index > self.size() {
            return Err(out_of_range("insert", index, self.size()));
        }
        Ok(self
            .head(index)
            .push_back(item)
            .concat(&self.tail(self.size() - index)))
    }

    /// Replace the item at `index` by `item`.
    pub fn assign(&self, index: usize, item: T) -> Result<Self> {
        if index >= self.size() {
            return Err(out_of_range("assign", index, self.size()));
        }
        Ok(self
            .head(index)
            .push_back(item)
            .concat(&self.tail(self.size() - index - 1)))
    }
}

impl<T: Clone + Default, K: Kind> Pack<T, K> {
    /// `resize` padding with the default ("no value") item.
    pub fn resize_default(&self, len: usize) -> Self {
        self.resize(len, T::default())
    }
}
