use pack_algorithms::{Pack, Policy};
use rand::random;

#[derive(Copy, Clone, Debug)]
struct OpaqueTuple {
    first: u64,
    second: u64,
}
impl PartialEq for OpaqueTuple {
    fn eq(&self, other: &Self) -> bool {
        self.first == other.first
    }
}
impl Eq for OpaqueTuple {}
impl PartialOrd for OpaqueTuple {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for OpaqueTuple {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.first.cmp(&other.first)
    }
}

/// Split `0..len` in two sorted packs tagged by position, left ones first.
fn sorted_halves(len: u64, key: impl Fn(u64) -> u64) -> (Pack<OpaqueTuple>, Pack<OpaqueTuple>) {
    let mut v: Vec<_> = (0u64..len)
        .map(|index| OpaqueTuple {
            first: key(index),
            second: index,
        })
        .collect();
    let middle = random::<usize>() % (len as usize + 1);
    let (left, right) = v.split_at_mut(middle);
    left.sort();
    right.sort();
    (Pack::from_vec(left.to_vec()), Pack::from_vec(right.to_vec()))
}

#[test]
fn test_stability_all_equal() {
    for len in (2..10).chain(100..110).chain(1_000..1_010) {
        let (left, right) = sorted_halves(len, |_| 2);
        let merged = left.merge(&right);
        assert_eq!(merged.size(), len as usize);
        merged.as_slice().windows(2).for_each(|slice_of_opaque_tuples| {
            assert!(slice_of_opaque_tuples[0].second < slice_of_opaque_tuples[1].second);
        });
    }
}

#[test]
fn test_stability_random_equal() {
    for policy in [Policy::Sequential, Policy::Join(8), Policy::Rayon] {
        for len in (2..10).chain(100..110).chain(1_000..1_010) {
            let (left, right) = sorted_halves(len, |_| random::<u64>() % 3);
            let merged = left.with_policy(policy).merge(&right);
            assert_eq!(merged.size(), len as usize);
            // both halves were sorted stably, so positions grow among equal keys
            merged.as_slice().windows(2).for_each(|slice_of_opaque_tuples| {
                assert!(
                    slice_of_opaque_tuples[0].first < slice_of_opaque_tuples[1].first
                        || (slice_of_opaque_tuples[0].first == slice_of_opaque_tuples[1].first
                            && slice_of_opaque_tuples[0].second
                                < slice_of_opaque_tuples[1].second)
                );
            });
        }
    }
}

#[test]
fn test_sort_random() {
    for policy in [Policy::Sequential, Policy::Join(8), Policy::Rayon] {
        for len in (0..10).chain(100..110).chain(1_000..1_005) {
            let v: Vec<u64> = (0..len).map(|_| random::<u64>() % 100).collect();
            let sorted = Pack::<u64>::from_vec(v.clone()).with_policy(policy).sort();
            let mut expected = v;
            expected.sort();
            assert_eq!(sorted.into_vec(), expected);
        }
    }
}

/// Middle item as pivot, then the items before it and the others, in order.
fn quicksort_by_middle(mut v: Vec<OpaqueTuple>) -> Vec<OpaqueTuple> {
    if v.len() < 2 {
        return v;
    }
    let pivot = v.remove(v.len() / 2);
    let (smaller, larger): (Vec<_>, Vec<_>) = v.into_iter().partition(|x| *x < pivot);
    let mut sorted = quicksort_by_middle(smaller);
    sorted.push(pivot);
    sorted.extend(quicksort_by_middle(larger));
    sorted
}

#[test]
fn test_sort_equivalent_order() {
    for policy in [Policy::Sequential, Policy::Join(8), Policy::Rayon] {
        for len in (0..10).chain(100..110).chain(300..303) {
            let v: Vec<_> = (0u64..len)
                .map(|index| OpaqueTuple {
                    first: random::<u64>() % 3,
                    second: index,
                })
                .collect();
            let sorted = Pack::<OpaqueTuple>::from_vec(v.clone())
                .with_policy(policy)
                .sort();
            let positions: Vec<u64> = sorted.iter().map(|t| t.second).collect();
            let expected: Vec<u64> = quicksort_by_middle(v).iter().map(|t| t.second).collect();
            assert_eq!(positions, expected);
        }
    }
    let four: Pack<OpaqueTuple> = (0u64..4)
        .map(|index| OpaqueTuple {
            first: 0,
            second: index,
        })
        .collect();
    let positions: Vec<u64> = four.sort().iter().map(|t| t.second).collect();
    assert_eq!(positions, vec![2, 1, 3, 0]);
}

#[test]
fn test_sort_long_equivalent_runs() {
    for policy in [Policy::Sequential, Policy::Join(64), Policy::Rayon] {
        for keys in [1, 2] {
            let v: Vec<_> = (0u64..50_000)
                .map(|index| OpaqueTuple {
                    first: index % keys,
                    second: index,
                })
                .collect();
            let sorted = Pack::<OpaqueTuple>::from_vec(v).with_policy(policy).sort();
            assert!(sorted.is_sorted());
            let mut positions: Vec<u64> = sorted.iter().map(|t| t.second).collect();
            positions.sort();
            assert!(positions.into_iter().eq(0..50_000));
        }
    }
}
