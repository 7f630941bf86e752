#![allow(unsafe_code)]
#![cfg_attr(not(any(feature = "std", test)), no_std)]

//! Vector: a growable, contiguous sequence over a pluggable allocator.
//!
//! `Vector<T, A>` is generic over its element type and over any
//! [`Allocator`](allocator_api2::alloc::Allocator). The allocator is stored in
//! the vector and used for every allocation, reallocation and release, so a
//! vector can always free itself without a global allocator.
//!
//! ```text
//! Vector<T, A>:  { ptr ──▶ [T; capacity], len, alloc }
//!                          └─ len live ─┘
//! ```
//!
//! # Growth
//!
//! - `insert`, `push_back` and `extend_from_slice` grow when the required
//!   length exceeds the capacity. The new capacity is the smallest power of
//!   two that fits, so pushes from empty see capacities 1, 2, 4, 8, ... and
//!   appending is amortized O(1).
//! - `reserve(n)` grows to exactly `n`, without rounding.
//! - `shrink()` reallocates to exactly `len`.
//! - Removing elements never reduces capacity.
//!
//! Fresh allocations are zero-filled. Zero-sized element types never touch
//! the allocator.
//!
//! # Errors
//!
//! Each operation that can fail has a `try_` form returning
//! [`VecError`](strata_core::VecError). The plain form treats the error as a
//! violated precondition: it logs the operation and the offending values and
//! panics (out-of-memory goes to `handle_alloc_error`).
//!
//! # Example
//!
//! ```
//! use bumpalo::Bump;
//! use strata_core::{Cursor, algo};
//! use strata_vector::Vector;
//!
//! let arena = Bump::new();
//! let mut vec = Vector::new_in(&arena);
//! for i in 1..=5 {
//!     vec.push_back(i);
//! }
//! assert_eq!(vec.capacity(), 8);
//!
//! vec.insert(0, 0);
//! assert_eq!(vec.erase(5), 5);
//! assert_eq!(vec, [0, 1, 2, 3, 4]);
//!
//! let mut cursor = vec.cursor();
//! assert_eq!(cursor.next(), Some(&0));
//! assert_eq!(algo::fold(&mut cursor, 0, |acc, x| *acc += *x), 10);
//! ```
//!
//! # Gotchas
//!
//! - **Cursors borrow**: a cursor holds a borrow of the vector, so the vector
//!   cannot be mutated (and relocated) while the cursor is alive.
//! - **No internal locking**: share across threads like a `Vec`.

mod raw;
mod vector;

pub use vector::Vector;

#[cfg(feature = "bumpalo")]
pub use bumpalo;

/// A vector whose storage lives in a bump arena.
#[cfg(feature = "bumpalo")]
pub type BumpVector<'bump, T> = Vector<T, &'bump bumpalo::Bump>;
