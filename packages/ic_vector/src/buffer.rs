use std::alloc::{self, Layout};
use std::num::NonZero;
use std::ptr::{self, NonNull};

/// Contiguous heap storage for `capacity` values of `T`.
///
/// The buffer does not know which of its slots are initialized. The owner is responsible
/// for tracking that and for dropping any values it has written before the buffer itself
/// is dropped - the buffer only releases the memory.
#[derive(Debug)]
pub(crate) struct RawBuffer<T> {
    /// Start of an allocation made with `Self::layout_for(self.capacity)`.
    ptr: NonNull<T>,

    capacity: NonZero<usize>,
}

impl<T> RawBuffer<T> {
    /// Allocates uninitialized storage for `capacity` values of `T`.
    ///
    /// # Panics
    ///
    /// Panics if `T` is zero-sized or if the total size of the buffer overflows `isize`.
    #[must_use]
    pub(crate) fn with_capacity(capacity: NonZero<usize>) -> Self {
        let layout = Self::layout_for(capacity);

        // SAFETY: layout_for() guarantees the layout has a non-zero size.
        let ptr = unsafe { alloc::alloc(layout) };

        let ptr = NonNull::new(ptr)
            .unwrap_or_else(|| alloc::handle_alloc_error(layout))
            .cast::<T>();

        Self { ptr, capacity }
    }

    fn layout_for(capacity: NonZero<usize>) -> Layout {
        let layout = Layout::array::<T>(capacity.get())
            .expect("buffer size must not exceed isize::MAX bytes");

        assert!(
            layout.size() > 0,
            "RawBuffer cannot store zero-sized items"
        );

        layout
    }

    /// Number of values the buffer has room for.
    #[must_use]
    pub(crate) fn capacity(&self) -> NonZero<usize> {
        self.capacity
    }

    #[must_use]
    pub(crate) fn as_ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Returns a pointer to the slot at `index`. The slot may or may not be initialized.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than the capacity.
    #[must_use]
    pub(crate) fn slot_ptr(&self, index: usize) -> NonNull<T> {
        assert!(
            index < self.capacity.get(),
            "slot {index} out of bounds in buffer of capacity {}",
            self.capacity
        );

        // SAFETY: The bounds check above keeps the offset within our allocation.
        unsafe { self.ptr.add(index) }
    }

    /// Moves the buffer contents into a larger allocation. Values in the existing slots are
    /// carried over bit for bit, the new slots are uninitialized.
    ///
    /// # Panics
    ///
    /// Panics if `new_capacity` is not greater than the current capacity or if the total size
    /// of the new buffer overflows `isize`.
    pub(crate) fn grow_to(&mut self, new_capacity: NonZero<usize>) {
        assert!(
            new_capacity > self.capacity,
            "cannot grow buffer of capacity {} to smaller capacity {new_capacity}",
            self.capacity
        );

        let old_layout = Self::layout_for(self.capacity);
        let new_layout = Self::layout_for(new_capacity);

        // SAFETY: The pointer was allocated by the global allocator with `old_layout`, which
        // has the same alignment as `new_layout`. The new size is non-zero and has been
        // validated by Layout::array() not to overflow isize when rounded up to alignment.
        let new_ptr =
            unsafe { alloc::realloc(self.ptr.as_ptr().cast(), old_layout, new_layout.size()) };

        self.ptr = NonNull::new(new_ptr)
            .unwrap_or_else(|| alloc::handle_alloc_error(new_layout))
            .cast::<T>();
        self.capacity = new_capacity;
    }

    /// Moves the values in `index..length` one slot to the right, leaving the slot at `index`
    /// logically uninitialized.
    ///
    /// # Safety
    ///
    /// The caller must ensure that `index <= length < capacity` and that `length` is the
    /// number of initialized slots at the front of the buffer.
    pub(crate) unsafe fn shift_right(&mut self, index: usize, length: usize) {
        debug_assert!(index <= length);
        debug_assert!(length < self.capacity.get());

        if index == length {
            return;
        }

        let src = self.slot_ptr(index);
        // Cannot overflow because index <= length < capacity.
        let dst = self.slot_ptr(index.wrapping_add(1));

        // SAFETY: Both ranges lie within the allocation because length < capacity, and
        // ptr::copy() permits the ranges to overlap.
        unsafe {
            ptr::copy(src.as_ptr(), dst.as_ptr(), length.wrapping_sub(index));
        }
    }

    /// Moves the values in `index + 1..length` one slot to the left, overwriting the slot at
    /// `index` without dropping it. The slot at `length - 1` is logically uninitialized after
    /// the call.
    ///
    /// # Safety
    ///
    /// The caller must ensure that `index < length <= capacity`, that `length` is the number
    /// of initialized slots at the front of the buffer and that the value at `index` has
    /// already been moved out or dropped.
    pub(crate) unsafe fn shift_left(&mut self, index: usize, length: usize) {
        debug_assert!(index < length);
        debug_assert!(length <= self.capacity.get());

        // Cannot overflow because index < length <= capacity.
        let next = index.wrapping_add(1);
        if next == length {
            return;
        }

        let src = self.slot_ptr(next);
        let dst = self.slot_ptr(index);

        // SAFETY: Both ranges lie within the initialized part of the allocation and
        // ptr::copy() permits the ranges to overlap.
        unsafe {
            ptr::copy(src.as_ptr(), dst.as_ptr(), length.wrapping_sub(next));
        }
    }
}

impl<T> Drop for RawBuffer<T> {
    fn drop(&mut self) {
        // SAFETY: We allocated the memory in with_capacity() or grow_to() using the layout
        // for the current capacity, and the memory has not yet been deallocated.
        unsafe {
            alloc::dealloc(self.ptr.as_ptr().cast(), Self::layout_for(self.capacity));
        }
    }
}
