//! Strata - allocator-aware containers with cursor-based iteration
//!
//! # Overview
//!
//! Strata is a small collections toolkit built from three layers:
//!
//! - [`Vector`]: a growable contiguous sequence generic over its element type
//!   and over an [`Allocator`] (the global heap by default, or a bump arena).
//! - [`Cursor`]: a pull-based, single-pass sequence interface, with lazy
//!   [`map`](CursorExt::map) and [`filter`](CursorExt::filter) adapters.
//! - [`algo`]: algorithms written once against any cursor (`all`, `find`,
//!   `fold`, `compare`, `is_sorted`, ...).
//!
//! # Quick Start
//!
//! ```
//! use strata::{Cursor, CursorExt, Vector, algo};
//!
//! let mut numbers = Vector::from_slice(&[1, 2, 3, 4, 5]);
//!
//! // Double every element in place, then keep the multiples of four.
//! let mut pipeline = numbers
//!     .cursor_mut()
//!     .map(|x| *x *= 2)
//!     .filter(|x| **x % 4 == 0);
//! assert_eq!(pipeline.next(), Some(&mut 4));
//! assert_eq!(pipeline.next(), Some(&mut 8));
//! assert_eq!(pipeline.next(), None);
//!
//! assert_eq!(numbers, [2, 4, 6, 8, 10]);
//! assert!(algo::is_sorted(&mut numbers.cursor(), |a, b| a.cmp(b)));
//! ```
//!
//! # Arenas
//!
//! Any [`Allocator`] can back a vector. With the `bumpalo` feature the
//! `BumpVector` alias names the arena-backed form:
//!
//! ```
//! use bumpalo::Bump;
//! use strata::Vector;
//!
//! let arena = Bump::new();
//! let mut words = Vector::new_in(&arena);
//! words.push_back("lazy");
//! words.insert(0, "the");
//! assert_eq!(words, ["the", "lazy"]);
//! ```
//!
//! # Failure
//!
//! Operations with preconditions (valid indices, non-empty vector, enough
//! memory) come in two forms. `insert` treats a violation as fatal: it logs
//! through `tracing` and panics. `try_insert` returns a [`VecError`] instead.
//!
//! ```
//! use strata::{Vector, VecError};
//!
//! let mut vec = Vector::from_slice(&[1, 2]);
//! assert_eq!(
//!     vec.try_insert(5, 3),
//!     Err(VecError::InsertOutOfBounds { op: "insert", index: 5, len: 2 })
//! );
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub use strata_core::{Cursor, CursorExt, OptionExt, VecError};
pub use strata_core::{algo, cursor, option, precondition};
pub use strata_vector::Vector;

#[cfg(feature = "bumpalo")]
pub use strata_vector::BumpVector;

pub use allocator_api2::alloc::{Allocator, Global};
