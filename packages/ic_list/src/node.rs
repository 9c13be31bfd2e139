use std::fmt;
use std::ptr::NonNull;

/// Heap allocation holding one value of the list together with its links.
///
/// Entries are allocated with `Box` when a value enters the list and freed when the list is
/// dropped. The list owns every entry it links to.
pub(crate) struct Entry<T> {
    pub(crate) value: T,
    pub(crate) prev: Option<NonNull<Entry<T>>>,
    pub(crate) next: Option<NonNull<Entry<T>>>,
}

/// A position in a [`List`][crate::List], obtained from [`List::nth()`][crate::List::nth].
///
/// A node gives shared access to the value at its position and allows stepping to the
/// neighboring positions. The node borrows the list, so the list cannot be modified while
/// any node is alive.
///
/// # Examples
///
/// ```
/// use ic_list::List;
///
/// let mut list = List::new();
/// list.append(1);
/// list.append(2);
///
/// let head = list.nth(0).unwrap();
/// assert!(head.prev().is_none());
///
/// let tail = head.next().unwrap();
/// assert_eq!(*tail.data(), 2);
/// assert!(tail.next().is_none());
/// ```
pub struct Node<'a, T> {
    entry: &'a Entry<T>,
}

impl<'a, T> Node<'a, T> {
    /// # Safety
    ///
    /// The caller must ensure that `entry` points to an entry owned by a list that is
    /// borrowed for at least `'a`.
    pub(crate) unsafe fn new(entry: NonNull<Entry<T>>) -> Self {
        Self {
            // SAFETY: Forwarding the guarantee from the caller.
            entry: unsafe { entry.as_ref() },
        }
    }

    /// Returns the value stored at this position.
    #[must_use]
    pub fn data(&self) -> &'a T {
        &self.entry.value
    }

    /// Returns the previous position, or `None` if this is the head of the list.
    #[must_use]
    pub fn prev(&self) -> Option<Self> {
        // SAFETY: Links only ever point to entries owned by the same list, which is borrowed
        // for 'a.
        self.entry.prev.map(|entry| unsafe { Self::new(entry) })
    }

    /// Returns the next position, or `None` if this is the tail of the list.
    #[must_use]
    pub fn next(&self) -> Option<Self> {
        // SAFETY: Links only ever point to entries owned by the same list, which is borrowed
        // for 'a.
        self.entry.next.map(|entry| unsafe { Self::new(entry) })
    }
}

// SAFETY: A node only grants shared access to the values of a borrowed list, the same as
// `&List<T>` does.
unsafe impl<T: Sync> Send for Node<'_, T> {}

// SAFETY: As above, all access through a node is shared.
unsafe impl<T: Sync> Sync for Node<'_, T> {}

impl<T> Clone for Node<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Node<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Node<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("data", self.data())
            .field("has_prev", &self.entry.prev.is_some())
            .field("has_next", &self.entry.next.is_some())
            .finish()
    }
}
