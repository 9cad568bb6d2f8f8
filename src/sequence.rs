//! The sequence model: immutable packs tagged with a container kind.
use crate::{Kind, Plain, Policy};
use smallvec::SmallVec;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Packs up to this length live inline, without allocating.
pub(crate) const INLINE_ITEMS: usize = 8;

pub(crate) type Items<T> = SmallVec<[T; INLINE_ITEMS]>;

/// An ordered, immutable list of items tagged with a container kind `K`.
///
/// No method mutates a pack: every algorithm returns a fresh one. Two packs
/// are equal when they share the kind (enforced by the type) and hold
/// pairwise equal items in the same order. The scheduling [`Policy`] is
/// carried along but takes no part in equality.
pub struct Pack<T, K: Kind = Plain> {
    pub(crate) items: Items<T>,
    pub(crate) policy: Policy,
    kind: PhantomData<fn() -> K>,
}

/// Anything whose items can be rebuilt into a pack.
///
/// This is what lets foreign "pack-like" containers interoperate with
/// [`Pack::construct`] and [`Pack::flatten`].
pub trait Sequence {
    /// Type of the items.
    type Item;
    /// Items in order.
    fn items(&self) -> &[Self::Item];
}

impl<T, K: Kind> Sequence for Pack<T, K> {
    type Item = T;
    fn items(&self) -> &[T] {
        &self.items
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;
    fn items(&self) -> &[T] {
        self
    }
}

impl<T> Sequence for [T] {
    type Item = T;
    fn items(&self) -> &[T] {
        self
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;
    fn items(&self) -> &[T] {
        self
    }
}

impl<T, K: Kind> Pack<T, K> {
    /// The empty pack.
    pub fn new() -> Self {
        Pack::from_items(Items::new(), Policy::default())
    }

    /// Build a pack from a vector of items.
    pub fn from_vec(items: Vec<T>) -> Self {
        Pack::from_items(Items::from_vec(items), Policy::default())
    }

    pub(crate) fn from_items(items: Items<T>, policy: Policy) -> Self {
        Pack {
            items,
            policy,
            kind: PhantomData,
        }
    }

    /// Build a pack of another item type (or kind) under our policy.
    pub(crate) fn derive<U, K2: Kind, I>(&self, items: I) -> Pack<U, K2>
    where
        I: IntoIterator<Item = U>,
    {
        Pack::from_items(items.into_iter().collect(), self.policy)
    }

    /// Same items, evaluated under given policy from now on.
    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    /// Scheduling policy used by this pack's algorithms.
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Number of items.
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Is the pack empty?
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Iterate on items.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Take the items out.
    pub fn into_vec(self) -> Vec<T> {
        self.items.into_vec()
    }

    /// Same kind, no items.
    pub fn clear(&self) -> Self {
        Pack::from_items(Items::new(), self.policy)
    }
}

impl<T: Clone, K: Kind> Pack<T, K> {
    /// Rebuild the items of any sequence under kind `K`.
    pub fn construct<S>(sequence: &S) -> Self
    where
        S: Sequence<Item = T> + ?Sized,
    {
        Pack::from_items(sequence.items().iter().cloned().collect(), Policy::default())
    }

    /// Our items under `to`'s kind, discarding `to`'s own items.
    pub fn move_into<U, K2: Kind>(&self, _to: &Pack<U, K2>) -> Pack<T, K2> {
        self.with_kind()
    }

    /// Our items under kind `K2`.
    pub fn with_kind<K2: Kind>(&self) -> Pack<T, K2> {
        self.derive(self.items.iter().cloned())
    }
}

impl<T, K: Kind> Default for Pack<T, K> {
    fn default() -> Self {
        Pack::new()
    }
}

impl<T: Clone, K: Kind> Clone for Pack<T, K> {
    fn clone(&self) -> Self {
        Pack::from_items(self.items.clone(), self.policy)
    }
}

impl<T: PartialEq, K: Kind> PartialEq for Pack<T, K> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq, K: Kind> Eq for Pack<T, K> {}

impl<T: Hash, K: Kind> Hash for Pack<T, K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.items.hash(state)
    }
}

impl<T: fmt::Debug, K: Kind> fmt::Debug for Pack<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", K::NAME)?;
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T, K: Kind> From<Vec<T>> for Pack<T, K> {
    fn from(items: Vec<T>) -> Self {
        Pack::from_vec(items)
    }
}

impl<T, K: Kind, const N: usize> From<[T; N]> for Pack<T, K> {
    fn from(items: [T; N]) -> Self {
        items.into_iter().collect()
    }
}

impl<T, K: Kind> std::iter::FromIterator<T> for Pack<T, K> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Pack::from_items(iter.into_iter().collect(), Policy::default())
    }
}

impl<T, K: Kind> IntoIterator for Pack<T, K> {
    type Item = T;
    type IntoIter = smallvec::IntoIter<[T; INLINE_ITEMS]>;
    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T, K: Kind> IntoIterator for &'a Pack<T, K> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Build a pack from expressions.
///
/// The kind defaults to [`Plain`](crate::Plain); pick another one with
/// `kind = ...;` in front.
///
/// ```
/// use pack_algorithms::{pack, Pack, Tuple};
/// let p = pack![1, 2, 3];
/// assert_eq!(p.size(), 3);
/// let t: Pack<&str, Tuple> = pack![kind = Tuple; "a", "b"];
/// assert_eq!(format!("{:?}", t), r#"Tuple["a", "b"]"#);
/// ```
#[macro_export]
macro_rules! pack {
    (kind = $kind:ty; $($item:expr),* $(,)?) => {
        $crate::Pack::<_, $kind>::from_vec(vec![$($item),*])
    };
    ($($item:expr),* $(,)?) => {
        $crate::Pack::<_, $crate::Plain>::from_vec(vec![$($item),*])
    };
}
