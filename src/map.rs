//! Keyed maps: packs of key/values entries looked up by key.
use crate::error::{out_of_range, Error, Result};
use crate::{Kind, Pack, Plain};

/// Map entry: a key and a pack of values.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyVal<Key, V> {
    key: Key,
    values: Pack<V>,
}

impl<Key, V: Clone> KeyVal<Key, V> {
    /// Entry for `key` holding given values.
    pub fn new<I: IntoIterator<Item = V>>(key: Key, values: I) -> Self {
        KeyVal {
            key,
            values: values.into_iter().collect(),
        }
    }

    /// The key.
    pub fn key(&self) -> &Key {
        &self.key
    }

    /// All values.
    pub fn values(&self) -> &Pack<V> {
        &self.values
    }

    /// Value number `index`.
    pub fn value(&self, index: usize) -> Result<&V> {
        self.values
            .as_slice()
            .get(index)
            .ok_or_else(|| out_of_range("value", index, self.values.size()))
    }
}

/// A map is a pack of entries. Keys are expected to be distinct; lookups see
/// the first matching entry.
pub type Map<Key, V, K = Plain> = Pack<KeyVal<Key, V>, K>;

impl<Key, V, K> Pack<KeyVal<Key, V>, K>
where
    Key: PartialEq + Sync,
    V: Sync,
    K: Kind,
{
    /// Index of the entry with given key, or `size()`.
    pub fn map_find(&self, key: &Key) -> usize {
        self.find_if(|entry| entry.key == *key)
    }

    /// The entry with given key.
    pub fn map_at(&self, key: &Key) -> Result<&KeyVal<Key, V>> {
        self.items.get(self.map_find(key)).ok_or(Error::KeyNotFound)
    }
}

impl<Key, V, K> Pack<KeyVal<Key, V>, K>
where
    Key: PartialEq + Sync,
    V: Clone + Sync,
    K: Kind,
{
    /// First value of the entry with given key.
    pub fn lookup(&self, key: &Key) -> Result<&V> {
        self.map_at(key)?
            .values
            .front()
            .map_err(|_| Error::EmptyPack {
                operation: "lookup",
            })
    }
}
