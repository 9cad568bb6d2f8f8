//! Small predicate and comparator builders.

/// Predicate "is equal to `value`".
pub fn equals<T: PartialEq + Sync>(value: T) -> impl Fn(&T) -> bool + Sync {
    move |item: &T| *item == value
}

/// Negation of a predicate.
pub fn negate<T, P>(predicate: P) -> impl Fn(&T) -> bool + Sync
where
    P: Fn(&T) -> bool + Sync,
{
    move |item: &T| !predicate(item)
}

/// The default comparator.
pub fn less<T: Ord>(a: &T, b: &T) -> bool {
    a < b
}

/// Comparator with arguments swapped.
pub fn flip<T, C>(compare: C) -> impl Fn(&T, &T) -> bool + Sync
where
    C: Fn(&T, &T) -> bool + Sync,
{
    move |a: &T, b: &T| compare(b, a)
}

/// Neither item is ordered before the other.
pub fn equivalent<T, C>(compare: &C, a: &T, b: &T) -> bool
where
    C: Fn(&T, &T) -> bool,
{
    !compare(a, b) && !compare(b, a)
}
