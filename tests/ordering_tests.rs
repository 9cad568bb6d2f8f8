use pack_algorithms::prelude::*;

fn is_integral(t: &Token) -> bool {
    t.is::<i32>() || t.is::<char>() || t.is::<u8>()
}

#[test]
fn partition_point_bounds() {
    let odd = |x: &i32| x % 2 != 0;
    assert_eq!(pack![1, 3, 5, 2, 4].partition_point(odd), 3);
    assert_eq!(pack![1, 3, 5].partition_point(odd), 3);
    assert_eq!(pack![2, 4].partition_point(odd), 0);
    assert_eq!(pack![].partition_point(odd), 0);
}

#[test]
fn stable_partition() {
    let (parted, point) = tokens![i32, (), char, f64, u8].partition(is_integral);
    assert_eq!(parted, tokens![i32, char, u8, (), f64]);
    assert_eq!(point, 3);
    assert_eq!(parted.partition_point(is_integral), 3);

    let (parted, point) = pack![4, 1, 3, 8, 6, 5].partition(|x| x % 2 == 0);
    assert_eq!(parted, pack![4, 8, 6, 1, 3, 5]);
    assert_eq!(point, 3);

    let (parted, point) = tokens![].partition(is_integral);
    assert!(parted.is_empty());
    assert_eq!(point, 0);
}

#[test]
fn merge_sorted_packs() {
    assert_eq!(pack![0, 3].merge(&pack![1, 2]), pack![0, 1, 2, 3]);
    assert_eq!(pack![1, 2].merge(&pack![0, 3]), pack![0, 1, 2, 3]);
    assert_eq!(pack![].merge(&pack![1, 2]), pack![1, 2]);
    assert_eq!(pack![1, 2].merge(&pack![]), pack![1, 2]);
    assert_eq!(pack![5].merge(&pack![1, 2, 3, 4]), pack![1, 2, 3, 4, 5]);
    assert_eq!(pack![0].merge(&pack![1, 2, 3, 4]), pack![0, 1, 2, 3, 4]);
    assert_eq!(
        pack![1, 1, 4, 9].merge(&pack![1, 4, 4, 10, 11]),
        pack![1, 1, 1, 4, 4, 4, 9, 10, 11]
    );
    assert_eq!(lits![0, 3].merge(&lits![1, 2]), lits![0, 1, 2, 3]);
}

#[test]
fn merge_keeps_first_kind() {
    let merged: Pack<Token, Tuple> = lits![kind = Tuple; 2, 8].merge(&lits![4]);
    assert_eq!(merged, lits![kind = Tuple; 2, 4, 8]);
}

#[test]
fn merge_puts_first_pack_first_on_ties() {
    let by_key = |a: &(u8, char), b: &(u8, char)| a.0 < b.0;
    let left = pack![(1, 'l'), (2, 'l'), (2, 'l')];
    let right = pack![(1, 'r'), (2, 'r'), (3, 'r')];
    assert_eq!(
        left.merge_by(&right, by_key),
        pack![(1, 'l'), (1, 'r'), (2, 'l'), (2, 'l'), (2, 'r'), (3, 'r')]
    );
    assert_eq!(
        right.merge_by(&left, by_key),
        pack![(1, 'r'), (1, 'l'), (2, 'r'), (2, 'l'), (2, 'l'), (3, 'r')]
    );
}

#[test]
fn merge_descending() {
    assert_eq!(
        pack![9, 4, 1].merge_by(&pack![8, 5], |a, b| a > b),
        pack![9, 8, 5, 4, 1]
    );
}

#[test]
fn sort() {
    assert_eq!(pack![3, 1, 4, 1, 5].sort(), pack![1, 1, 3, 4, 5]);
    assert_eq!(lits![3, 1, 4, 1, 5].sort(), lits![1, 1, 3, 4, 5]);
    assert_eq!(tokens![].sort(), tokens![]);
    assert_eq!(lits![7].sort(), lits![7]);
    assert_eq!(lits![2, 1].sort(), lits![1, 2]);
    assert_eq!(pack![3, 1, 4, 1, 5].sort_by(|a, b| a > b), pack![5, 4, 3, 1, 1]);
    let sorted = tokens![u64, char, bool].sort();
    assert!(sorted.is_sorted());
    assert_eq!(sorted.size(), 3);
}

#[test]
fn sort_names() {
    let names = pack!["beta", "alpha", "delta", "gamma"];
    assert_eq!(names.sort(), pack!["alpha", "beta", "delta", "gamma"]);
    assert_eq!(
        names.sort_by(|a, b| a.len() < b.len()).transform(|s| s.len()),
        pack![4, 5, 5, 5]
    );
}

#[test]
fn sort_under_every_policy() {
    let input: Pack<u32> = (0..500).map(|x| (x * 7919) % 503).collect();
    let expected = input.sort();
    assert!(expected.is_sorted());
    for policy in [Policy::Rayon, Policy::Join(1), Policy::Join(16)] {
        let sorted = input.clone().with_policy(policy).sort();
        assert_eq!(sorted, expected);
        assert_eq!(sorted.policy(), policy);
    }
}

#[test]
fn lower_bound_and_binary_find() {
    let p = pack![1, 3, 3, 7];
    assert_eq!(p.lower_bound_by(&0, less), 0);
    assert_eq!(p.lower_bound_by(&3, less), 1);
    assert_eq!(p.lower_bound_by(&4, less), 3);
    assert_eq!(p.lower_bound_by(&8, less), 4);

    assert_eq!(p.binary_find(&1), 0);
    assert_eq!(p.binary_find(&3), 1);
    assert_eq!(p.binary_find(&7), 3);
    assert_eq!(p.binary_find(&4), 4);
    assert_eq!(p.binary_find(&9), 4);
    assert_eq!(pack![].binary_find(&9), 0);
}

#[test]
fn binary_find_in_sorted_names() {
    let names = pack!["x", "b", "a", "c"].sort();
    let index = names.binary_find(&"c");
    assert_eq!(names.at(index), Ok(&"c"));
    assert_eq!(names.binary_find(&"d"), names.size());
    let caseless = |a: &&str, b: &&str| a.to_lowercase() < b.to_lowercase();
    assert_eq!(names.binary_find_by(&"B", caseless), 1);
}

#[test]
fn sort_long_runs_of_equal_items() {
    for policy in [Policy::Sequential, Policy::Join(64), Policy::Rayon] {
        let equal: Pack<u8> = std::iter::repeat(7).take(50_000).collect();
        let sorted = equal.clone().with_policy(policy).sort();
        assert_eq!(sorted, equal);

        let runs: Pack<u8> = (0..60_000u32).rev().map(|i| (i / 20_000) as u8).collect();
        let sorted = runs.with_policy(policy).sort();
        assert!(sorted.is_sorted());
        assert_eq!(sorted.count(&0), 20_000);
        assert_eq!(sorted.count(&2), 20_000);
    }
}
