use std::cmp::Ordering;
use std::num::NonZero;
use std::{fmt, mem, ptr, slice, thread};

use new_zealand::nz;
use tracing::{debug, trace};

use crate::{DropPolicy, Error, RawBuffer, Result, VectorBuilder};

/// Growth step used when none is specified via the builder.
pub const DEFAULT_GROWTH_STEP: NonZero<usize> = nz!(16);

/// A contiguous, growable sequence of owned values with a configurable growth step.
///
/// A new vector reserves room for `growth_step` elements. Whenever an element is added to a
/// full vector, the capacity is multiplied by the growth step before the element is stored,
/// so the capacity is always a multiple of the growth step. Removing elements never shrinks
/// the capacity.
///
/// Elements are owned by the vector. Each element is dropped exactly once: when the vector is
/// disposed of, or by the caller after [`delete()`][Self::delete] or
/// [`replace()`][Self::replace] hand it back.
///
/// # Thread safety
///
/// The vector is [`Send`] and [`Sync`] whenever `T` is. It has no internal synchronization;
/// mutation requires exclusive access.
pub struct Vector<T> {
    /// The first `length` slots are initialized, the rest are not.
    buffer: RawBuffer<T>,

    length: usize,

    growth_step: NonZero<usize>,

    drop_policy: DropPolicy,
}

// SAFETY: The vector owns its elements exclusively, the same as Vec<T>, so moving it to another
// thread moves the elements with it.
unsafe impl<T: Send> Send for Vector<T> {}

// SAFETY: Shared access to the vector only grants shared access to the elements.
unsafe impl<T: Sync> Sync for Vector<T> {}

impl<T> Vector<T> {
    /// Creates an empty vector with the given growth step and the default drop policy.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if `T` is zero-sized or `growth_step` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use ic_vector::{Error, Vector};
    ///
    /// let vector = Vector::<u32>::new(10).unwrap();
    /// assert_eq!(vector.len(), 0);
    /// assert_eq!(vector.capacity(), 10);
    ///
    /// assert!(matches!(
    ///     Vector::<u32>::new(0),
    ///     Err(Error::InvalidConfiguration { .. })
    /// ));
    /// ```
    pub fn new(growth_step: usize) -> Result<Self> {
        Self::builder().growth_step(growth_step).build()
    }

    /// Creates a builder for configuring and constructing a [`Vector`].
    #[inline]
    pub fn builder() -> VectorBuilder<T> {
        VectorBuilder::new()
    }

    pub(crate) fn new_inner(growth_step: usize, drop_policy: DropPolicy) -> Result<Self> {
        let element_size = size_of::<T>();

        let invalid = Error::InvalidConfiguration {
            element_size,
            growth_step,
        };

        if element_size == 0 {
            return Err(invalid);
        }

        let Some(growth_step) = NonZero::new(growth_step) else {
            return Err(invalid);
        };

        debug!(
            item_type = std::any::type_name::<T>(),
            element_size,
            growth_step = growth_step.get(),
            "creating vector"
        );

        Ok(Self {
            buffer: RawBuffer::with_capacity(growth_step),
            length: 0,
            growth_step,
            drop_policy,
        })
    }

    /// Returns the number of elements in the vector.
    #[must_use]
    pub fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the vector contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the number of elements the vector can hold before it needs to grow.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity().get()
    }

    /// Returns the growth step the vector was created with.
    #[must_use]
    pub fn growth_step(&self) -> usize {
        self.growth_step.get()
    }

    /// Returns the drop policy the vector was created with.
    #[must_use]
    pub fn drop_policy(&self) -> DropPolicy {
        self.drop_policy
    }

    /// Adds an element to the end of the vector, growing the vector first if it is full.
    ///
    /// # Panics
    ///
    /// Panics if the grown capacity would overflow `usize` or exceed `isize::MAX` bytes.
    pub fn append(&mut self, value: T) {
        self.grow_if_full();

        // SAFETY: grow_if_full() guarantees length < capacity, and the slot at `length` is
        // uninitialized so writing does not overwrite a live value.
        unsafe {
            self.buffer.slot_ptr(self.length).write(value);
        }

        // Cannot overflow because the length is bounded by the capacity.
        self.length = self.length.wrapping_add(1);
    }

    /// Inserts an element at `position`, shifting all elements at and after it one position
    /// to the right. Inserting at `position == len()` is the same as appending.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPosition`] if `position > len()`. The vector is not modified.
    ///
    /// # Panics
    ///
    /// Panics if the grown capacity would overflow `usize` or exceed `isize::MAX` bytes.
    pub fn insert(&mut self, value: T, position: usize) -> Result<()> {
        if position > self.length {
            return Err(Error::InvalidPosition {
                position,
                length: self.length,
            });
        }

        self.grow_if_full();

        // SAFETY: position <= length < capacity after growing, and the first `length` slots
        // are initialized.
        unsafe {
            self.buffer.shift_right(position, self.length);
        }

        // SAFETY: The shift left the slot at `position` logically uninitialized, so writing
        // does not overwrite a live value.
        unsafe {
            self.buffer.slot_ptr(position).write(value);
        }

        // Cannot overflow because the length is bounded by the capacity.
        self.length = self.length.wrapping_add(1);

        Ok(())
    }

    /// Returns a reference to the element at `position`, or `None` if `position >= len()`.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&T> {
        self.as_slice().get(position)
    }

    /// Returns an exclusive reference to the element at `position`, or `None` if
    /// `position >= len()`.
    #[must_use]
    pub fn get_mut(&mut self, position: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(position)
    }

    /// Overwrites the element at `position` with `value`, returning the previous element.
    ///
    /// No other element moves and the length stays the same. The previous element is handed
    /// to the caller, who drops it or keeps it; the new element is not dropped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPosition`] if `position >= len()`. The vector is not modified
    /// and `value` is dropped.
    pub fn replace(&mut self, position: usize, value: T) -> Result<T> {
        let length = self.length;

        let slot = self
            .get_mut(position)
            .ok_or(Error::InvalidPosition { position, length })?;

        Ok(mem::replace(slot, value))
    }

    /// Searches for an element matching `key`, considering only elements at positions
    /// `start..len()`.
    ///
    /// `compare` is a three-way comparator ordering `key` relative to an element. An element
    /// matches when the comparator returns [`Ordering::Equal`].
    ///
    /// With `sorted_hint` set, a binary search is performed. This requires the searched range
    /// to be sorted ascending according to `compare`; if it is not, the result is unspecified
    /// but still either a matching position or [`Error::NotFound`]. Without `sorted_hint`, the
    /// elements are scanned from `start` forward and the first match is returned.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidKey`] if `key` is `None`.
    /// * [`Error::InvalidStart`] if `start >= len()`.
    /// * [`Error::NotFound`] if no element in the range matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use ic_vector::{Error, Vector};
    ///
    /// let mut vector = Vector::new(5).unwrap();
    /// for value in [12, 22, 23, 30, 34] {
    ///     vector.append(value);
    /// }
    ///
    /// assert_eq!(vector.search(Some(&34), i32::cmp, 2, false), Ok(4));
    /// assert_eq!(vector.search(Some(&12), i32::cmp, 1, true), Err(Error::NotFound));
    /// ```
    pub fn search<K, F>(
        &self,
        key: Option<&K>,
        mut compare: F,
        start: usize,
        sorted_hint: bool,
    ) -> Result<usize>
    where
        K: ?Sized,
        F: FnMut(&K, &T) -> Ordering,
    {
        let key = key.ok_or(Error::InvalidKey)?;

        let candidates = self
            .as_slice()
            .get(start..)
            .filter(|candidates| !candidates.is_empty())
            .ok_or(Error::InvalidStart {
                start,
                length: self.length,
            })?;

        let offset = if sorted_hint {
            // Leftmost match, the same position the linear scan finds.
            let first_not_less =
                candidates.partition_point(|candidate| compare(key, candidate).is_gt());

            candidates
                .get(first_not_less)
                .filter(|&candidate| compare(key, candidate).is_eq())
                .map(|_| first_not_less)
        } else {
            candidates
                .iter()
                .position(|candidate| compare(key, candidate).is_eq())
        };

        offset
            // Cannot overflow because the result is a position inside the vector.
            .map(|offset| start.wrapping_add(offset))
            .ok_or(Error::NotFound)
    }

    /// Sorts the elements ascending according to the three-way comparator `compare`.
    ///
    /// Does nothing if `compare` is `None`. The sort is not stable: equal elements may be
    /// reordered.
    pub fn sort<F>(&mut self, compare: Option<F>)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let Some(compare) = compare else {
            return;
        };

        self.as_mut_slice().sort_unstable_by(compare);
    }

    /// Calls `visit` once for every element in position order, passing an exclusive reference
    /// to the element together with `aux`.
    ///
    /// Does nothing if `visit` is `None`. The visitor may modify elements in place but cannot
    /// change the length of the vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use ic_vector::Vector;
    ///
    /// let mut vector = Vector::new(4).unwrap();
    /// vector.append(1);
    /// vector.append(2);
    ///
    /// let mut total = 0;
    /// vector.map(
    ///     Some(|value: &mut i32, total: &mut i32| {
    ///         *value *= 10;
    ///         *total += *value;
    ///     }),
    ///     &mut total,
    /// );
    ///
    /// assert_eq!(total, 30);
    /// assert_eq!(vector.get(1), Some(&20));
    /// ```
    pub fn map<A, F>(&mut self, visit: Option<F>, aux: &mut A)
    where
        A: ?Sized,
        F: FnMut(&mut T, &mut A),
    {
        let Some(mut visit) = visit else {
            return;
        };

        for item in self.as_mut_slice() {
            visit(item, aux);
        }
    }

    /// Removes the element at `position`, shifting all later elements one position to the
    /// left, and returns it. The capacity is not reduced.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPosition`] if `position >= len()`. The vector is not modified.
    pub fn delete(&mut self, position: usize) -> Result<T> {
        if position >= self.length {
            return Err(Error::InvalidPosition {
                position,
                length: self.length,
            });
        }

        // SAFETY: position < length so the slot holds an initialized value. We take ownership
        // of it here and the shift below ensures it is never read through the vector again.
        let value = unsafe { self.buffer.slot_ptr(position).read() };

        // SAFETY: position < length <= capacity, the first `length` slots are initialized and
        // the value at `position` has been moved out above.
        unsafe {
            self.buffer.shift_left(position, self.length);
        }

        // Cannot underflow because position < length.
        self.length = self.length.wrapping_sub(1);

        Ok(value)
    }

    /// Drops every remaining element in position order and releases the memory held by the
    /// vector. This is the same as dropping the vector.
    ///
    /// # Panics
    ///
    /// Panics if the vector still contains elements and was created with
    /// [`DropPolicy::MustNotDropItems`].
    pub fn dispose(self) {
        drop(self);
    }

    fn as_slice(&self) -> &[T] {
        // SAFETY: The first `length` slots are initialized and the buffer is not mutated while
        // the returned slice borrows `self`.
        unsafe { slice::from_raw_parts(self.buffer.as_ptr(), self.length) }
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: The first `length` slots are initialized and we hold an exclusive borrow of
        // `self` for the lifetime of the returned slice.
        unsafe { slice::from_raw_parts_mut(self.buffer.as_ptr(), self.length) }
    }

    fn grow_if_full(&mut self) {
        let capacity = self.buffer.capacity();

        if self.length < capacity.get() {
            return;
        }

        let new_capacity = next_capacity(capacity, self.growth_step);

        trace!(
            old_capacity = capacity.get(),
            new_capacity = new_capacity.get(),
            "growing vector"
        );

        self.buffer.grow_to(new_capacity);
    }
}

/// Multiplies the capacity by the growth step. A growth step of one would leave the capacity
/// unchanged, so the result is never less than `capacity + growth_step`.
fn next_capacity(capacity: NonZero<usize>, growth_step: NonZero<usize>) -> NonZero<usize> {
    let multiplied = capacity
        .checked_mul(growth_step)
        .expect("vector capacity overflow");

    let added = capacity
        .checked_add(growth_step.get())
        .expect("vector capacity overflow");

    multiplied.max(added)
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        let remaining = mem::replace(&mut self.length, 0);

        if remaining > 0 {
            trace!(remaining, "dropping remaining vector elements");
        }

        // The length is zeroed first so a panicking element destructor cannot lead to the
        // same elements being dropped again.
        //
        // SAFETY: The first `remaining` slots hold initialized values that nothing else refers
        // to, and they are dropped exactly once here. The memory itself is released when the
        // buffer is dropped.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buffer.as_ptr(),
                remaining,
            ));
        }

        // If we are already panicking, we do not want to panic again because that will
        // simply obscure whatever the original panic was.
        if !thread::panicking() && matches!(self.drop_policy, DropPolicy::MustNotDropItems) {
            assert!(
                remaining == 0,
                "dropped a non-empty Vector with {remaining} items - this is forbidden by DropPolicy::MustNotDropItems"
            );
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("length", &self.length)
            .field("capacity", &self.buffer.capacity())
            .field("growth_step", &self.growth_step)
            .field("drop_policy", &self.drop_policy)
            .field("items", &self.as_slice())
            .finish()
    }
}
