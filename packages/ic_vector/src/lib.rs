#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! A contiguous, growable vector of owned values with a configurable multiplicative growth step.
//!
//! This crate provides [`Vector`], a dynamic array that reserves room for a fixed number of
//! elements up front and multiplies its capacity by that same number whenever it runs out of
//! room. On top of appending and indexed access, it offers positional insertion and deletion
//! that shift the following elements, in-place replacement, comparator-driven sorting and
//! searching, and a visitor that can update every element in place.
//!
//! # Key Features
//!
//! - **Predictable capacity**: A vector created with growth step `n` has capacity `n`, then
//!   `n * n`, then `n * n * n` and so on. Capacity never shrinks.
//! - **Owned elements**: Elements are moved in and dropped exactly once, either when the vector
//!   is disposed of or by the caller after [`Vector::delete()`] or [`Vector::replace()`] hand
//!   them back.
//! - **Three-way comparators**: Sorting and searching take a comparator returning
//!   [`std::cmp::Ordering`], so the element type does not need to implement [`Ord`].
//! - **Linear or binary search**: The caller decides whether the searched range is sorted.
//! - **Validate-then-act**: Rejected calls return an [`Error`] and leave the vector untouched.
//! - **Flexible drop policies**: Optionally require that the vector is empty when disposed of.
//!
//! # Examples
//!
//! ```
//! use ic_vector::{Error, Vector};
//!
//! let mut vector = Vector::new(2).unwrap();
//!
//! vector.append("ruby");
//! vector.append("python");
//! vector.insert("lisp", 0).unwrap();
//!
//! // The third element triggered a grow from 2 to 2 * 2 slots.
//! assert_eq!(vector.capacity(), 4);
//! assert_eq!(vector.get(0), Some(&"lisp"));
//!
//! vector.sort(Some(|a: &&str, b: &&str| a.cmp(b)));
//! assert_eq!(vector.get(1), Some(&"python"));
//!
//! let position = vector.search(Some(&"ruby"), |key: &&str, item: &&str| key.cmp(item), 0, true);
//! assert_eq!(position, Ok(2));
//!
//! assert_eq!(vector.delete(5), Err(Error::InvalidPosition { position: 5, length: 3 }));
//! ```

mod buffer;
mod builder;
mod drop_policy;
mod error;
mod vector;

pub(crate) use buffer::*;
pub use builder::*;
pub use drop_policy::*;
pub use error::*;
pub use vector::*;
