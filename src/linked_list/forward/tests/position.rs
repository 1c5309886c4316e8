extern crate std;

use std::{vec, vec::Vec};

use crate::linked_list::forward::{Position, SingleLinkedList};

fn collect(list: &SingleLinkedList<i32>) -> Vec<i32> {
    list.iter().copied().collect()
}

#[test]
fn test_erase_then_insert_at_front() {
    let mut list = SingleLinkedList::from([1, 2, 3]);
    assert_eq!(list.len(), 3);
    assert_eq!(collect(&list), vec![1, 2, 3]);

    let next = unsafe { list.erase_after(list.before_begin()) };
    assert_eq!(collect(&list), vec![2, 3]);
    assert_eq!(next, list.begin());
    assert_eq!(unsafe { *list.get(next) }, 2);

    let inserted = unsafe { list.insert_after(list.before_begin(), 0) };
    assert_eq!(collect(&list), vec![0, 2, 3]);
    assert_eq!(inserted, list.begin());
    assert_eq!(list.len(), 3);
}

#[test]
fn test_insert_after_before_begin_matches_push_front() {
    let mut pushed = SingleLinkedList::from([5, 6]);
    let mut inserted = SingleLinkedList::from([5, 6]);

    pushed.push_front(4);
    let pos = unsafe { inserted.insert_after(inserted.before_begin(), 4) };

    assert_eq!(pushed, inserted);
    assert_eq!(pos, inserted.begin());

    let mut empty = SingleLinkedList::new();
    let pos = unsafe { empty.insert_after(empty.before_begin(), 1) };
    assert_eq!(pos, empty.begin());
    assert_eq!(collect(&empty), vec![1]);
}

#[test]
fn test_insert_after_middle_and_tail() {
    let mut list = SingleLinkedList::from([1, 3]);
    let first = list.begin();

    let two = unsafe { list.insert_after(first, 2) };
    assert_eq!(collect(&list), vec![1, 2, 3]);
    assert_eq!(unsafe { *list.get(two) }, 2);

    let three = unsafe { list.advance(two) };
    let four = unsafe { list.insert_after(three, 4) };
    assert_eq!(collect(&list), vec![1, 2, 3, 4]);
    assert_eq!(unsafe { list.advance(four) }, list.end());

    let five = unsafe { list.try_insert_after(four, 5) }.unwrap();
    assert_eq!(unsafe { *list.get(five) }, 5);
    assert_eq!(list.len(), 5);
}

#[test]
fn test_erase_last_returns_end() {
    let mut list = SingleLinkedList::from([1, 2, 3]);
    let second = unsafe { list.advance(list.begin()) };

    let next = unsafe { list.erase_after(second) };
    assert_eq!(next, list.end());
    assert!(next.is_end());
    assert_eq!(collect(&list), vec![1, 2]);
    assert_eq!(list.len(), 2);
}

#[test]
fn test_erase_only_element() {
    let mut list = SingleLinkedList::from([42]);
    let next = unsafe { list.erase_after(list.before_begin()) };
    assert_eq!(next, list.end());
    assert!(list.is_empty());
    assert_eq!(list.begin(), list.end());
}

#[test]
fn test_unrelated_positions_stay_valid() {
    let mut list = SingleLinkedList::from([1, 2, 3, 4]);
    let first = list.begin();
    let third = unsafe { list.advance(list.advance(first)) };

    unsafe {
        list.insert_after(first, 10);
        list.erase_after(list.before_begin());
        list.push_front(0);
        list.erase_after(third);
    }

    assert_eq!(collect(&list), vec![0, 10, 2, 3]);
    assert_eq!(unsafe { *list.get(third) }, 3);

    unsafe { *list.get_mut(third) = 30 };
    assert_eq!(collect(&list), vec![0, 10, 2, 30]);
}

#[test]
fn test_walk_positions() {
    let list = SingleLinkedList::from([1, 2, 3]);
    let mut pos = list.before_begin();
    let mut values = vec![];
    loop {
        pos = unsafe { list.advance(pos) };
        if pos == list.end() {
            break;
        }
        values.push(unsafe { *list.get(pos) });
    }
    assert_eq!(values, vec![1, 2, 3]);
}

#[test]
fn test_positions_follow_elements_across_swap() {
    let mut a = SingleLinkedList::from([1, 2]);
    let mut b = SingleLinkedList::from([3]);
    let a_before = a.before_begin();
    let a_first = a.begin();

    a.swap(&mut b);
    assert_eq!(a.before_begin(), a_before);
    assert_eq!(b.begin(), a_first);
    assert_eq!(unsafe { *b.get(a_first) }, 1);
}

#[test]
fn test_end_position() {
    let end = Position::<i32>::end();
    assert!(end.is_end());
    assert_eq!(end, Position::default());
    assert_eq!(SingleLinkedList::<i32>::new().end(), end);
}

#[test]
#[should_panic(expected = "past the end")]
fn test_advance_past_end_panics() {
    let list = SingleLinkedList::from([1]);
    unsafe { list.advance(list.end()) };
}

#[test]
#[should_panic(expected = "before-begin")]
fn test_get_before_begin_panics() {
    let list = SingleLinkedList::from([1]);
    unsafe { list.get(list.before_begin()) };
}

#[test]
#[should_panic(expected = "past the end")]
fn test_get_end_panics() {
    let list = SingleLinkedList::from([1]);
    unsafe { list.get(list.end()) };
}

#[test]
#[should_panic(expected = "requires a position with a successor")]
fn test_erase_after_last_panics() {
    let mut list = SingleLinkedList::from([1]);
    unsafe { list.erase_after(list.begin()) };
}

#[test]
#[should_panic(expected = "requires a position with a successor")]
fn test_erase_after_on_empty_panics() {
    let mut list = SingleLinkedList::<i32>::new();
    unsafe { list.erase_after(list.before_begin()) };
}

#[test]
#[should_panic(expected = "past the end")]
fn test_insert_after_end_panics() {
    let mut list = SingleLinkedList::from([1]);
    unsafe { list.insert_after(list.end(), 2) };
}
