//! The owned buffer behind a `Vector`: pointer, capacity and allocator.
//!
//! `RawBuf` knows nothing about which slots are initialized. It only moves
//! the allocation around; the vector tracks its length.

use core::{alloc::Layout, mem, ptr::NonNull};

use allocator_api2::alloc::Allocator;
use strata_core::VecError;

pub(crate) struct RawBuf<T, A: Allocator> {
    ptr: NonNull<T>,
    cap: usize,
    alloc: A,
}

impl<T, A: Allocator> RawBuf<T, A> {
    pub(crate) const fn new_in(alloc: A) -> Self {
        RawBuf {
            ptr: NonNull::dangling(),
            cap: 0,
            alloc,
        }
    }

    /// Allocates exactly `cap` slots, zero-filled.
    pub(crate) fn try_with_capacity_in(cap: usize, alloc: A) -> Result<Self, VecError> {
        let mut buf = Self::new_in(alloc);
        buf.resize(cap)?;
        Ok(buf)
    }

    #[inline(always)]
    pub(crate) fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    #[inline(always)]
    pub(crate) fn capacity(&self) -> usize {
        self.cap
    }

    pub(crate) fn allocator(&self) -> &A {
        &self.alloc
    }

    fn layout(cap: usize) -> Result<Layout, VecError> {
        Layout::array::<T>(cap).map_err(|_| VecError::CapacityOverflow { requested: cap })
    }

    fn current_layout(&self) -> Layout {
        // SAFETY: this layout was validated by `Layout::array` when the
        // buffer was sized to `cap`.
        unsafe { Layout::from_size_align_unchecked(mem::size_of::<T>() * self.cap, mem::align_of::<T>()) }
    }

    /// Reallocates to exactly `new_cap` slots, preserving the prefix that
    /// fits. Zero-sized layouts never reach the allocator.
    ///
    /// Callers must have dropped or moved out any initialized slot at or past
    /// `new_cap`.
    pub(crate) fn resize(&mut self, new_cap: usize) -> Result<(), VecError> {
        if new_cap == self.cap {
            return Ok(());
        }
        let old_layout = self.current_layout();
        let new_layout = Self::layout(new_cap)?;
        let failed = |_| VecError::AllocFailed { layout: new_layout };

        let ptr = match (old_layout.size(), new_layout.size()) {
            (0, 0) => NonNull::dangling(),
            (0, _) => self.alloc.allocate_zeroed(new_layout).map_err(failed)?.cast(),
            (_, 0) => {
                // SAFETY: `ptr` was allocated by `alloc` with `old_layout`.
                unsafe { self.alloc.deallocate(self.ptr.cast(), old_layout) };
                NonNull::dangling()
            }
            (old, new) if new > old => {
                // SAFETY: `ptr` was allocated by `alloc` with `old_layout`, and
                // the new layout is larger with the same alignment.
                unsafe { self.alloc.grow(self.ptr.cast(), old_layout, new_layout) }
                    .map_err(failed)?
                    .cast()
            }
            _ => {
                // SAFETY: as above, with a smaller new layout.
                unsafe { self.alloc.shrink(self.ptr.cast(), old_layout, new_layout) }
                    .map_err(failed)?
                    .cast()
            }
        };

        tracing::trace!(
            old_capacity = self.cap,
            new_capacity = new_cap,
            elem_size = mem::size_of::<T>(),
            "vector buffer resized"
        );
        self.ptr = ptr;
        self.cap = new_cap;
        Ok(())
    }
}

impl<T, A: Allocator> Drop for RawBuf<T, A> {
    fn drop(&mut self) {
        let layout = self.current_layout();
        if layout.size() != 0 {
            // SAFETY: `ptr` was allocated by `alloc` with this layout.
            unsafe { self.alloc.deallocate(self.ptr.cast(), layout) };
        }
    }
}
