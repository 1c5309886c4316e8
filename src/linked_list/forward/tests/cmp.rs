extern crate std;

use core::cmp::Ordering;

use std::vec::Vec;

use hashbrown::HashSet;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::linked_list::forward::SingleLinkedList;

#[test]
fn test_equality() {
    let a = SingleLinkedList::from([1, 2, 3]);
    let b = SingleLinkedList::from([1, 2, 3]);
    let shorter = SingleLinkedList::from([1, 2]);
    let different = SingleLinkedList::from([1, 2, 4]);

    assert_eq!(a, b);
    assert!(!(a != b));
    assert_ne!(a, shorter);
    assert_ne!(shorter, a);
    assert_ne!(a, different);
    assert_eq!(SingleLinkedList::<i32>::new(), SingleLinkedList::new());
}

#[test]
fn test_lexicographic_order() {
    let empty = SingleLinkedList::<i32>::new();
    let a = SingleLinkedList::from([1, 2]);
    let b = SingleLinkedList::from([1, 2, 0]);
    let c = SingleLinkedList::from([1, 3]);

    assert!(empty < a);
    assert!(a < b);
    assert!(b < c);
    assert!(a < c);
    assert!(c > a);
    assert!(a <= a.clone());
    assert!(a >= a.clone());
    assert!(!(a > b));
    assert_eq!(a.cmp(&b), Ordering::Less);
    assert_eq!(c.cmp(&b), Ordering::Greater);
    assert_eq!(a.partial_cmp(&a.clone()), Some(Ordering::Equal));
}

#[test]
fn test_partial_order_with_nan() {
    let a = SingleLinkedList::from([1.0, f64::NAN]);
    let b = SingleLinkedList::from([1.0, 2.0]);
    assert_eq!(a.partial_cmp(&b), None);
    assert!(!(a < b) && !(a > b) && !(a <= b) && !(a >= b));
    assert_ne!(a, a.clone());
}

fn random_list(rng: &mut StdRng) -> SingleLinkedList<u8> {
    let len = rng.random_range(0..4);
    (0..len).map(|_| rng.random_range(0..3)).collect()
}

#[test]
fn test_ordering_is_consistent() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..500 {
        let a = random_list(&mut rng);
        let b = random_list(&mut rng);

        let outcomes = [a < b, a == b, b < a];
        assert_eq!(outcomes.iter().filter(|&&hit| hit).count(), 1, "{a:?} vs {b:?}");

        assert_eq!(a <= b, !(b < a));
        assert_eq!(a >= b, !(a < b));
        assert_eq!(a > b, b < a);
        assert_eq!(a != b, !(a == b));
        assert_eq!(a == b, a.len() == b.len() && a.iter().eq(b.iter()));

        let expected = a.iter().collect::<Vec<_>>().cmp(&b.iter().collect::<Vec<_>>());
        assert_eq!(a.cmp(&b), expected);
    }
}

#[test]
fn test_hash_matches_equality() {
    let mut set = HashSet::new();
    assert!(set.insert(SingleLinkedList::from([1, 2, 3])));
    assert!(set.insert(SingleLinkedList::from([1, 2])));
    assert!(set.insert(SingleLinkedList::new()));
    assert!(!set.insert(SingleLinkedList::from([1, 2, 3])));
    assert!(!set.insert([1, 2].into_iter().collect()));

    assert_eq!(set.len(), 3);
    assert!(set.contains(&SingleLinkedList::from([1, 2])));
    assert!(!set.contains(&SingleLinkedList::from([2, 1])));
}
