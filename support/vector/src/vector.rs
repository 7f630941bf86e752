use core::{fmt, ops, ptr, slice};

use allocator_api2::alloc::{Allocator, Global};
use strata_core::{
    VecError,
    cursor::{SliceCursor, SliceCursorMut},
    precondition,
};

use crate::raw::RawBuf;

/// An owning, contiguous, growable sequence over an injected allocator.
///
/// See the [crate-level docs](crate) for the growth policy.
pub struct Vector<T, A: Allocator = Global> {
    buf: RawBuf<T, A>,
    len: usize,
}

#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
static_assertions::assert_eq_size!(Vector<u64>, [usize; 3]);

// SAFETY: `Vector` owns its elements and its allocator, like `Vec`.
unsafe impl<T: Send, A: Allocator + Send> Send for Vector<T, A> {}
unsafe impl<T: Sync, A: Allocator + Sync> Sync for Vector<T, A> {}

impl<T> Vector<T> {
    pub const fn new() -> Self {
        Self::new_in(Global)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_in(capacity, Global)
    }

    pub fn from_slice(values: &[T]) -> Self
    where
        T: Clone,
    {
        Self::from_slice_in(values, Global)
    }
}

impl<T, A: Allocator> Vector<T, A> {
    /// An empty vector. Does not allocate.
    pub const fn new_in(alloc: A) -> Self {
        Vector {
            buf: RawBuf::new_in(alloc),
            len: 0,
        }
    }

    /// An empty vector with exactly `capacity` zero-filled slots.
    pub fn with_capacity_in(capacity: usize, alloc: A) -> Self {
        Self::try_with_capacity_in(capacity, alloc).unwrap_or_else(|err| precondition::fatal(err))
    }

    pub fn try_with_capacity_in(capacity: usize, alloc: A) -> Result<Self, VecError> {
        Ok(Vector {
            buf: RawBuf::try_with_capacity_in(capacity, alloc)?,
            len: 0,
        })
    }

    /// A vector holding clones of `values`, with capacity exactly
    /// `values.len()`.
    pub fn from_slice_in(values: &[T], alloc: A) -> Self
    where
        T: Clone,
    {
        Self::try_from_slice_in(values, alloc).unwrap_or_else(|err| precondition::fatal(err))
    }

    pub fn try_from_slice_in(values: &[T], alloc: A) -> Result<Self, VecError>
    where
        T: Clone,
    {
        let mut vector = Self::try_with_capacity_in(values.len(), alloc)?;
        vector.try_extend_from_slice(values)?;
        Ok(vector)
    }

    // --- Accessors ---

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn allocator(&self) -> &A {
        self.buf.allocator()
    }

    pub fn as_slice(&self) -> &[T] {
        // SAFETY: the first `len` slots are initialized, and `ptr` is
        // non-null and aligned even when nothing is allocated.
        unsafe { slice::from_raw_parts(self.buf.ptr(), self.len) }
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in `as_slice`, and `&mut self` guarantees uniqueness.
        unsafe { slice::from_raw_parts_mut(self.buf.ptr(), self.len) }
    }

    /// A cursor over shared references to the elements, in order.
    pub fn cursor(&self) -> SliceCursor<'_, T> {
        SliceCursor::new(self.as_slice())
    }

    /// A cursor over mutable references to the elements, in order.
    pub fn cursor_mut(&mut self) -> SliceCursorMut<'_, T> {
        SliceCursorMut::new(self.as_mut_slice())
    }

    // --- Capacity management ---

    /// Makes room for `required` elements, rounding the new capacity up to
    /// the next power of two.
    fn grow_for(&mut self, required: usize) -> Result<(), VecError> {
        if required <= self.capacity() {
            return Ok(());
        }
        let new_cap = required
            .checked_next_power_of_two()
            .ok_or(VecError::CapacityOverflow { requested: required })?;
        self.buf.resize(new_cap)
    }

    /// Grows the capacity to exactly `capacity` if it is larger than the
    /// current one. Never shrinks.
    pub fn reserve(&mut self, capacity: usize) {
        self.try_reserve(capacity).unwrap_or_else(|err| precondition::fatal(err))
    }

    pub fn try_reserve(&mut self, capacity: usize) -> Result<(), VecError> {
        if capacity > self.capacity() {
            self.buf.resize(capacity)?;
        }
        Ok(())
    }

    /// Reallocates down to exactly `len` slots.
    pub fn shrink(&mut self) {
        self.try_shrink().unwrap_or_else(|err| precondition::fatal(err))
    }

    pub fn try_shrink(&mut self) -> Result<(), VecError> {
        tracing::debug!(len = self.len, capacity = self.capacity(), "shrinking vector");
        self.buf.resize(self.len)
    }

    // --- Positional mutation ---

    /// Inserts `value` at `index`, shifting `[index, len)` one slot right.
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).unwrap_or_else(|err| precondition::fatal(err))
    }

    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), VecError> {
        let len = self.len;
        if index > len {
            return Err(VecError::InsertOutOfBounds {
                op: "insert",
                index,
                len,
            });
        }
        self.grow_for(len + 1)?;
        // SAFETY: capacity >= len + 1, so the shifted range and the written
        // slot are in bounds. `ptr::copy` handles the overlap.
        unsafe {
            let slot = self.buf.ptr().add(index);
            ptr::copy(slot, slot.add(1), len - index);
            ptr::write(slot, value);
        }
        self.len = len + 1;
        Ok(())
    }

    pub fn push_back(&mut self, value: T) {
        self.try_push_back(value).unwrap_or_else(|err| precondition::fatal(err))
    }

    pub fn try_push_back(&mut self, value: T) -> Result<(), VecError> {
        self.grow_for(self.len + 1)?;
        // SAFETY: capacity >= len + 1.
        unsafe { ptr::write(self.buf.ptr().add(self.len), value) };
        self.len += 1;
        Ok(())
    }

    /// Appends clones of `values` to the tail.
    pub fn extend_from_slice(&mut self, values: &[T])
    where
        T: Clone,
    {
        self.try_extend_from_slice(values).unwrap_or_else(|err| precondition::fatal(err))
    }

    pub fn try_extend_from_slice(&mut self, values: &[T]) -> Result<(), VecError>
    where
        T: Clone,
    {
        let required = self
            .len
            .checked_add(values.len())
            .ok_or(VecError::LengthOverflow {
                op: "extend_from_slice",
                len: self.len,
                additional: values.len(),
            })?;
        self.grow_for(required)?;
        for value in values {
            // SAFETY: capacity >= required, and `len` is bumped per element so
            // a panicking `clone` leaves the vector consistent.
            unsafe { ptr::write(self.buf.ptr().add(self.len), value.clone()) };
            self.len += 1;
        }
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting `[index + 1, len)`
    /// one slot left. Order is preserved; capacity is unchanged.
    pub fn erase(&mut self, index: usize) -> T {
        self.try_erase(index).unwrap_or_else(|err| precondition::fatal(err))
    }

    pub fn try_erase(&mut self, index: usize) -> Result<T, VecError> {
        let len = self.check_index("erase", index)?;
        // SAFETY: index < len, so the slot is initialized and the shifted
        // range `[index + 1, len)` is in bounds.
        let value = unsafe {
            let slot = self.buf.ptr().add(index);
            let value = ptr::read(slot);
            ptr::copy(slot.add(1), slot, len - index - 1);
            value
        };
        self.len = len - 1;
        Ok(value)
    }

    /// Removes and returns the element at `index` in O(1) by moving the last
    /// element into its place. Does not preserve order.
    pub fn swap_erase(&mut self, index: usize) -> T {
        self.try_swap_erase(index).unwrap_or_else(|err| precondition::fatal(err))
    }

    pub fn try_swap_erase(&mut self, index: usize) -> Result<T, VecError> {
        let last = self.check_index("swap_erase", index)? - 1;
        // SAFETY: index <= last < len, both slots are initialized, and the
        // last slot is logically removed by the length update below.
        let value = unsafe {
            let slot = self.buf.ptr().add(index);
            let value = ptr::read(slot);
            if index != last {
                ptr::copy_nonoverlapping(self.buf.ptr().add(last), slot, 1);
            }
            value
        };
        self.len = last;
        Ok(value)
    }

    pub fn pop_back(&mut self) -> T {
        self.try_pop_back().unwrap_or_else(|err| precondition::fatal(err))
    }

    pub fn try_pop_back(&mut self) -> Result<T, VecError> {
        if self.len == 0 {
            return Err(VecError::Empty { op: "pop_back" });
        }
        self.len -= 1;
        // SAFETY: the slot at the old `len - 1` is initialized and no longer
        // counted as live.
        Ok(unsafe { ptr::read(self.buf.ptr().add(self.len)) })
    }

    /// Drops every element. Capacity and storage are kept.
    pub fn clear(&mut self) {
        let elems: *mut [T] = self.as_mut_slice();
        self.len = 0;
        // SAFETY: the elements were initialized and are no longer reachable
        // through `len`, so a panicking destructor cannot cause a double drop.
        unsafe { ptr::drop_in_place(elems) };
    }

    /// Reverses the elements in place, swapping from both ends toward the
    /// middle.
    pub fn reverse(&mut self) {
        let elems = self.as_mut_slice();
        let (mut front, mut back) = (0, elems.len());
        while front + 1 < back {
            back -= 1;
            elems.swap(front, back);
            front += 1;
        }
    }

    /// Copies `[start, end)` into `buffer` and returns the number of elements
    /// copied. This is an export, not a view.
    pub fn slice(&self, start: usize, end: usize, buffer: &mut [T]) -> usize
    where
        T: Clone,
    {
        self.try_slice(start, end, buffer).unwrap_or_else(|err| precondition::fatal(err))
    }

    pub fn try_slice(&self, start: usize, end: usize, buffer: &mut [T]) -> Result<usize, VecError>
    where
        T: Clone,
    {
        if start > end || end > self.len {
            return Err(VecError::InvalidRange {
                start,
                end,
                len: self.len,
            });
        }
        let count = end - start;
        if buffer.len() < count {
            return Err(VecError::BufferTooSmall {
                needed: count,
                available: buffer.len(),
            });
        }
        buffer[..count].clone_from_slice(&self.as_slice()[start..end]);
        Ok(count)
    }

    /// Returns `len` if `index` addresses a live element.
    fn check_index(&self, op: &'static str, index: usize) -> Result<usize, VecError> {
        if index < self.len {
            Ok(self.len)
        } else {
            Err(VecError::IndexOutOfBounds {
                op,
                index,
                len: self.len,
            })
        }
    }
}

impl<T, A: Allocator> Drop for Vector<T, A> {
    fn drop(&mut self) {
        // SAFETY: the first `len` slots are initialized; `RawBuf` releases
        // the storage afterwards.
        unsafe { ptr::drop_in_place(self.as_mut_slice() as *mut [T]) }
    }
}

impl<T, A: Allocator> ops::Deref for Vector<T, A> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, A: Allocator> ops::DerefMut for Vector<T, A> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, A: Allocator + Clone> Clone for Vector<T, A> {
    fn clone(&self) -> Self {
        Self::from_slice_in(self.as_slice(), self.allocator().clone())
    }
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for Vector<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T, U, A, B> PartialEq<Vector<U, B>> for Vector<T, A>
where
    T: PartialEq<U>,
    A: Allocator,
    B: Allocator,
{
    fn eq(&self, other: &Vector<U, B>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, A: Allocator> Eq for Vector<T, A> {}

impl<T: PartialEq<U>, U, A: Allocator> PartialEq<[U]> for Vector<T, A> {
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq<U>, U, A: Allocator, const N: usize> PartialEq<[U; N]> for Vector<T, A> {
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other
    }
}

impl<T, A: Allocator> Extend<T> for Vector<T, A> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vector = Vector::new();
        vector.extend(iter);
        vector
    }
}

impl<'a, T, A: Allocator> IntoIterator for &'a Vector<T, A> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T, A: Allocator> IntoIterator for &'a mut Vector<T, A> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

#[cfg(test)]
#[path = "vector_test.rs"]
mod vector_test;
