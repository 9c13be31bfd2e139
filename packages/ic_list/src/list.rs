use std::marker::PhantomData;
use std::ptr::NonNull;
use std::{fmt, mem};

use tracing::trace;

use crate::{Entry, Node};

/// A doubly-linked list of owned values.
///
/// Values are moved into the list by [`append()`][Self::append] and
/// [`prepend()`][Self::prepend] and stay in insertion order. Adding at either end is O(1);
/// positional access walks from the head and is O(n).
///
/// The list owns its values and drops them when the list is dropped. To keep a list of
/// values owned elsewhere, store references (`List<&T>`) and let the borrow checker ensure
/// the values outlive the list.
///
/// # Examples
///
/// ```
/// use ic_list::List;
///
/// let mut list = List::new();
/// assert!(list.is_empty());
///
/// list.append("b");
/// list.append("c");
/// list.prepend("a");
///
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.first(), Some(&"a"));
/// assert_eq!(list.last(), Some(&"c"));
/// assert_eq!(list.nth_data(1), Some(&"b"));
/// assert_eq!(list.nth_data(3), None);
/// ```
///
/// # Thread safety
///
/// The list is [`Send`] and [`Sync`] whenever `T` is. It has no internal synchronization;
/// mutation requires exclusive access.
pub struct List<T> {
    /// `None` if and only if the list is empty. The head entry has no `prev` link.
    head: Option<NonNull<Entry<T>>>,

    /// `None` if and only if the list is empty. The tail entry has no `next` link.
    tail: Option<NonNull<Entry<T>>>,

    /// Number of entries reachable from `head`.
    length: usize,

    _owns: PhantomData<Box<Entry<T>>>,
}

// SAFETY: The list owns its entries exclusively, the same as Box<T> would, so moving it to
// another thread moves the values with it.
unsafe impl<T: Send> Send for List<T> {}

// SAFETY: Shared access to the list only grants shared access to the values.
unsafe impl<T: Sync> Sync for List<T> {}

impl<T> List<T> {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            length: 0,
            _owns: PhantomData,
        }
    }

    /// Returns `true` if the list contains no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the number of values in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.length
    }

    /// Adds a value after the current tail of the list.
    pub fn append(&mut self, value: T) {
        let entry = Self::allocate(value, self.tail, None);

        match self.tail {
            // SAFETY: The tail is a live entry owned by this list and we hold an exclusive
            // borrow of the list.
            Some(mut tail) => unsafe { tail.as_mut().next = Some(entry) },
            None => self.head = Some(entry),
        }

        self.tail = Some(entry);

        // Cannot overflow because every entry occupies memory.
        self.length = self.length.wrapping_add(1);

        #[cfg(debug_assertions)]
        self.integrity_check();
    }

    /// Adds a value before the current head of the list.
    pub fn prepend(&mut self, value: T) {
        let entry = Self::allocate(value, None, self.head);

        match self.head {
            // SAFETY: The head is a live entry owned by this list and we hold an exclusive
            // borrow of the list.
            Some(mut head) => unsafe { head.as_mut().prev = Some(entry) },
            None => self.tail = Some(entry),
        }

        self.head = Some(entry);

        // Cannot overflow because every entry occupies memory.
        self.length = self.length.wrapping_add(1);

        #[cfg(debug_assertions)]
        self.integrity_check();
    }

    /// Returns the value at the head of the list, or `None` if the list is empty.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        // SAFETY: The head is a live entry owned by this list, which stays borrowed for the
        // lifetime of the returned reference.
        self.head.map(|entry| unsafe { &entry.as_ref().value })
    }

    /// Returns the value at the tail of the list, or `None` if the list is empty.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        // SAFETY: The tail is a live entry owned by this list, which stays borrowed for the
        // lifetime of the returned reference.
        self.tail.map(|entry| unsafe { &entry.as_ref().value })
    }

    /// Returns an exclusive reference to the value at the head of the list, or `None` if the
    /// list is empty.
    #[must_use]
    pub fn first_mut(&mut self) -> Option<&mut T> {
        // SAFETY: The head is a live entry owned by this list, which stays exclusively
        // borrowed for the lifetime of the returned reference.
        self.head.map(|mut entry| unsafe { &mut entry.as_mut().value })
    }

    /// Returns an exclusive reference to the value at the tail of the list, or `None` if the
    /// list is empty.
    #[must_use]
    pub fn last_mut(&mut self) -> Option<&mut T> {
        // SAFETY: The tail is a live entry owned by this list, which stays exclusively
        // borrowed for the lifetime of the returned reference.
        self.tail.map(|mut entry| unsafe { &mut entry.as_mut().value })
    }

    /// Returns the position at zero-based `index`, or `None` if `index >= len()`.
    ///
    /// The list is walked from the head, so this is O(index).
    #[must_use]
    pub fn nth(&self, index: usize) -> Option<Node<'_, T>> {
        // SAFETY: The entry is owned by this list, which stays borrowed for the lifetime of
        // the returned node.
        self.nth_entry(index).map(|entry| unsafe { Node::new(entry) })
    }

    /// Returns the value at zero-based `index`, or `None` if `index >= len()`.
    #[must_use]
    pub fn nth_data(&self, index: usize) -> Option<&T> {
        self.nth(index).map(|node| node.data())
    }

    /// Returns an exclusive reference to the value at zero-based `index`, or `None` if
    /// `index >= len()`.
    #[must_use]
    pub fn nth_data_mut(&mut self, index: usize) -> Option<&mut T> {
        // SAFETY: The entry is owned by this list, which stays exclusively borrowed for the
        // lifetime of the returned reference.
        self.nth_entry(index)
            .map(|mut entry| unsafe { &mut entry.as_mut().value })
    }

    /// Drops every value and releases every node of the list. This is the same as dropping
    /// the list.
    pub fn destroy(self) {
        drop(self);
    }

    fn allocate(
        value: T,
        prev: Option<NonNull<Entry<T>>>,
        next: Option<NonNull<Entry<T>>>,
    ) -> NonNull<Entry<T>> {
        NonNull::from(Box::leak(Box::new(Entry { value, prev, next })))
    }

    fn nth_entry(&self, index: usize) -> Option<NonNull<Entry<T>>> {
        if index >= self.length {
            return None;
        }

        let mut current = self.head;

        for _ in 0..index {
            // SAFETY: index < length, so every step lands on a live entry owned by this list.
            current = current.and_then(|entry| unsafe { entry.as_ref().next });
        }

        current
    }

    #[cfg_attr(test, mutants::skip)] // This is essentially test logic, mutation is meaningless.
    #[cfg(debug_assertions)]
    /// Verifies the links of the list against its head, tail and length.
    ///
    /// This method is only available in debug builds and is used for testing and validation.
    pub(crate) fn integrity_check(&self) {
        assert_eq!(
            self.head.is_none(),
            self.tail.is_none(),
            "head and tail must be either both present or both absent"
        );

        let mut observed_length: usize = 0;
        let mut previous: Option<NonNull<Entry<T>>> = None;
        let mut current = self.head;

        while let Some(entry_ptr) = current {
            // SAFETY: Every link reachable from the head points to a live entry owned by
            // this list.
            let entry = unsafe { entry_ptr.as_ref() };

            assert_eq!(
                entry.prev, previous,
                "entry {observed_length} has a prev link that does not point to its predecessor"
            );

            observed_length = observed_length.wrapping_add(1);
            previous = current;
            current = entry.next;
        }

        assert_eq!(
            previous, self.tail,
            "the last entry reachable from the head is not the tail"
        );

        assert_eq!(
            observed_length, self.length,
            "length {} does not match the {observed_length} reachable entries",
            self.length
        );
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        let length = mem::replace(&mut self.length, 0);

        if length > 0 {
            trace!(length, "releasing list nodes");
        }

        self.tail = None;
        let mut current = self.head.take();

        while let Some(entry_ptr) = current {
            // SAFETY: Every entry was created by Box::leak() in allocate() and is reachable
            // from the head exactly once. We detached the chain from the list above, so each
            // entry is reclaimed exactly once here.
            let entry = unsafe { Box::from_raw(entry_ptr.as_ptr()) };
            current = entry.next;
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut values = f.debug_list();

        let mut node = self.nth(0);
        while let Some(current) = node {
            values.entry(current.data());
            node = current.next();
        }

        values.finish()
    }
}
