#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! A doubly-linked list of owned values with O(1) insertion at both ends.
//!
//! This crate provides [`List`], an ordered sequence that keeps values in insertion order.
//! Values can be added at the head or the tail in constant time, read at either end in
//! constant time and read at any position by walking from the head. [`List::nth()`] returns
//! a [`Node`], a lightweight position that can step to its neighbors.
//!
//! The list takes ownership of the values added to it. To build a list over values owned
//! elsewhere, store references and the borrow checker will ensure the values outlive the
//! list.
//!
//! # Examples
//!
//! ```
//! use ic_list::List;
//!
//! let languages = [String::from("lisp"), String::from("python")];
//!
//! let mut list = List::new();
//! for language in &languages {
//!     list.append(language);
//! }
//!
//! assert_eq!(list.len(), 2);
//! assert_eq!(list.first().map(|s| s.as_str()), Some("lisp"));
//!
//! let tail = list.nth(1).unwrap();
//! assert!(tail.next().is_none());
//! assert_eq!(tail.prev().map(|node| node.data().as_str()), Some("lisp"));
//! ```

mod list;
mod node;

pub use list::*;
pub use node::Node;
pub(crate) use node::Entry;
