//! Integration tests for the `ic_list` package.
//!
//! These exercise `List` and `Node` purely through the public API, checking insertion
//! order, positional access and the boundary links after mixed mutation sequences.

use std::cell::Cell;
use std::rc::Rc;
use std::thread;

use ic_list::List;

#[test]
fn appends_preserve_first_and_last() {
    for count in 1..=20_usize {
        let mut list = List::new();

        for value in 0..count {
            list.append(value);
        }

        assert_eq!(list.len(), count);
        assert_eq!(list.first(), Some(&0));
        assert_eq!(list.last(), Some(&(count - 1)));
    }
}

#[test]
fn nth_matches_insertion_order() {
    let mut list = List::new();
    for value in 0..10_u32 {
        list.append(value * 3);
    }

    for index in 0..10_usize {
        let expected = u32::try_from(index).unwrap() * 3;
        assert_eq!(list.nth_data(index), Some(&expected));
        assert_eq!(list.nth(index).map(|node| *node.data()), Some(expected));
    }

    for index in 10..15 {
        assert!(list.nth(index).is_none());
        assert!(list.nth_data(index).is_none());
    }
}

#[test]
fn forward_and_backward_walks_agree() {
    let mut list = List::new();
    for value in 0..6 {
        if value % 3 == 0 {
            list.prepend(value);
        } else {
            list.append(value);
        }
    }

    let mut forward = Vec::new();
    let mut node = list.nth(0);
    while let Some(current) = node {
        forward.push(*current.data());
        node = current.next();
    }

    let mut backward = Vec::new();
    let mut node = list.nth(list.len() - 1);
    while let Some(current) = node {
        backward.push(*current.data());
        node = current.prev();
    }
    backward.reverse();

    assert_eq!(forward, vec![3, 0, 1, 2, 4, 5]);
    assert_eq!(forward, backward);
    assert_eq!(forward.len(), list.len());
}

#[test]
fn list_of_borrowed_values() {
    let first = String::from("forward loop");
    let second = String::from("back loop");

    let mut list = List::new();
    list.append(&first);
    list.prepend(&second);

    assert_eq!(list.first().map(|s| s.as_str()), Some("back loop"));
    assert_eq!(list.last().map(|s| s.as_str()), Some("forward loop"));

    list.destroy();

    // The borrowed values are untouched by destroying the list.
    assert_eq!(first, "forward loop");
}

#[test]
fn dropping_releases_owned_values() {
    struct Tracked(Rc<Cell<usize>>);

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.0.set(self.0.get() - 1);
        }
    }

    let alive = Rc::new(Cell::new(0_usize));

    {
        let mut list = List::new();
        for _ in 0..8 {
            alive.set(alive.get() + 1);
            list.append(Tracked(Rc::clone(&alive)));
        }
        assert_eq!(alive.get(), 8);
    }

    assert_eq!(alive.get(), 0);
}

#[test]
fn moves_between_threads() {
    let mut list = List::new();
    list.append(String::from("sent"));

    let list = thread::spawn(move || {
        list.append(String::from("returned"));
        list
    })
    .join()
    .unwrap();

    assert_eq!(list.len(), 2);
    assert_eq!(list.last().map(String::as_str), Some("returned"));
}
