//! Vector against custom allocators: counting, failing and arena.

use core::{alloc::Layout, cell::Cell, ptr::NonNull};

use allocator_api2::alloc::{AllocError, Allocator, Global};
use bumpalo::Bump;
use pretty_assertions::assert_eq;
use strata_core::{Cursor, VecError};
use strata_vector::Vector;

// =============================================================================
// Helpers
// =============================================================================

/// Forwards to `Global` and records every call.
#[derive(Default)]
struct Counting {
    allocs: Cell<usize>,
    grows: Cell<usize>,
    shrinks: Cell<usize>,
    frees: Cell<usize>,
    /// Bytes carried over by `grow`, i.e. what a realloc would have to copy.
    moved_bytes: Cell<usize>,
    live_bytes: Cell<usize>,
}

impl Counting {
    fn bump(cell: &Cell<usize>, by: usize) {
        cell.set(cell.get() + by);
    }
}

unsafe impl Allocator for &Counting {
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        Counting::bump(&self.allocs, 1);
        Counting::bump(&self.live_bytes, layout.size());
        Global.allocate(layout)
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        Counting::bump(&self.frees, 1);
        self.live_bytes.set(self.live_bytes.get() - layout.size());
        unsafe { Global.deallocate(ptr, layout) }
    }

    unsafe fn grow(
        &self,
        ptr: NonNull<u8>,
        old_layout: Layout,
        new_layout: Layout,
    ) -> Result<NonNull<[u8]>, AllocError> {
        Counting::bump(&self.grows, 1);
        Counting::bump(&self.moved_bytes, old_layout.size());
        Counting::bump(&self.live_bytes, new_layout.size() - old_layout.size());
        unsafe { Global.grow(ptr, old_layout, new_layout) }
    }

    unsafe fn shrink(
        &self,
        ptr: NonNull<u8>,
        old_layout: Layout,
        new_layout: Layout,
    ) -> Result<NonNull<[u8]>, AllocError> {
        Counting::bump(&self.shrinks, 1);
        self.live_bytes
            .set(self.live_bytes.get() - (old_layout.size() - new_layout.size()));
        unsafe { Global.shrink(ptr, old_layout, new_layout) }
    }
}

/// Serves requests until `budget` bytes have been handed out, then fails.
struct Limited {
    budget: Cell<usize>,
}

impl Limited {
    fn new(budget: usize) -> Self {
        Limited {
            budget: Cell::new(budget),
        }
    }

    fn take(&self, bytes: usize) -> Result<(), AllocError> {
        let left = self.budget.get().checked_sub(bytes).ok_or(AllocError)?;
        self.budget.set(left);
        Ok(())
    }
}

unsafe impl Allocator for &Limited {
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        self.take(layout.size())?;
        Global.allocate(layout)
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        unsafe { Global.deallocate(ptr, layout) }
    }

    unsafe fn grow(
        &self,
        ptr: NonNull<u8>,
        old_layout: Layout,
        new_layout: Layout,
    ) -> Result<NonNull<[u8]>, AllocError> {
        self.take(new_layout.size() - old_layout.size())?;
        unsafe { Global.grow(ptr, old_layout, new_layout) }
    }
}

// =============================================================================
// Counting allocator
// =============================================================================

#[test]
fn new_does_not_allocate() {
    let counting = Counting::default();
    let vec = Vector::<u64, _>::new_in(&counting);
    assert_eq!(vec.capacity(), 0);
    drop(vec);
    assert_eq!(counting.allocs.get(), 0);
    assert_eq!(counting.frees.get(), 0);
}

#[test]
fn pushes_reallocate_logarithmically() {
    let counting = Counting::default();
    let mut vec = Vector::new_in(&counting);
    for i in 0..1024u32 {
        vec.push_back(i);
    }
    assert_eq!(vec.capacity(), 1024);
    assert_eq!(counting.allocs.get(), 1);
    // 1 -> 2 -> 4 -> ... -> 1024
    assert_eq!(counting.grows.get(), 10);
    // Elements carried over by all the grows: 1 + 2 + ... + 512 < 1024.
    let moved = counting.moved_bytes.get() / size_of::<u32>();
    assert_eq!(moved, 1023);
    assert!(moved < vec.len());
}

#[test]
fn drop_returns_everything_to_the_allocator() {
    let counting = Counting::default();
    {
        let mut vec = Vector::with_capacity_in(3, &counting);
        vec.extend_from_slice(&[1u16, 2, 3, 4, 5]);
        vec.reserve(100);
        vec.shrink();
        assert_eq!(vec.capacity(), 5);
        assert_eq!(counting.shrinks.get(), 1);
        assert_eq!(counting.live_bytes.get(), 5 * size_of::<u16>());
    }
    assert_eq!(counting.frees.get(), 1);
    assert_eq!(counting.live_bytes.get(), 0);
}

#[test]
fn shrink_to_empty_deallocates() {
    let counting = Counting::default();
    let mut vec = Vector::from_slice_in(&[1u8, 2, 3], &counting);
    vec.clear();
    vec.shrink();
    assert_eq!(vec.capacity(), 0);
    assert_eq!(counting.frees.get(), 1);
    drop(vec);
    assert_eq!(counting.frees.get(), 1);
}

#[test]
fn clone_uses_the_same_allocator() {
    let counting = Counting::default();
    let vec = Vector::from_slice_in(&[1, 2, 3], &counting);
    let copy = vec.clone();
    assert_eq!(copy, vec);
    assert!(core::ptr::eq(*copy.allocator(), &counting));
    assert_eq!(counting.allocs.get(), 2);
}

// =============================================================================
// Failing allocator
// =============================================================================

#[test]
fn try_push_reports_allocation_failure() {
    let limited = Limited::new(4 * size_of::<u64>());
    let mut vec = Vector::new_in(&limited);
    for i in 0..4u64 {
        vec.try_push_back(i).unwrap();
    }
    let err = vec.try_push_back(4).unwrap_err();
    assert!(err.is_alloc_failure());
    assert_eq!(
        err,
        VecError::AllocFailed {
            layout: Layout::array::<u64>(8).unwrap()
        }
    );
    // The vector is untouched.
    assert_eq!(vec, [0, 1, 2, 3]);
    assert_eq!(vec.capacity(), 4);
}

#[test]
fn try_with_capacity_reports_allocation_failure() {
    let limited = Limited::new(0);
    let err = Vector::<u8, _>::try_with_capacity_in(16, &limited).unwrap_err();
    assert!(err.is_alloc_failure());

    // Nothing to allocate, nothing to fail.
    let vec = Vector::<u8, _>::try_with_capacity_in(0, &limited).unwrap();
    assert_eq!(vec.capacity(), 0);
}

#[test]
fn capacity_overflow_is_reported() {
    let mut vec = Vector::<u64>::new();
    assert_eq!(
        vec.try_reserve(usize::MAX),
        Err(VecError::CapacityOverflow {
            requested: usize::MAX
        })
    );
    assert_eq!(vec.capacity(), 0);
}

// =============================================================================
// Arena allocator
// =============================================================================

#[test]
fn bump_arena_backs_the_vector() {
    let arena = Bump::new();
    let mut vec = Vector::new_in(&arena);
    for i in 0..100 {
        vec.push_back(i);
    }
    assert_eq!(vec.len(), 100);
    assert_eq!(vec.capacity(), 128);
    assert!(arena.allocated_bytes() >= 128 * size_of::<i32>());
    assert_eq!(vec.cursor().remaining(), 100);
}

#[cfg(feature = "bumpalo")]
#[test]
fn bump_vector_alias() {
    use strata_vector::BumpVector;

    let arena = Bump::new();
    let mut vec: BumpVector<'_, &str> = Vector::new_in(&arena);
    vec.push_back("a");
    vec.insert(0, "b");
    assert_eq!(vec, ["b", "a"]);
}
