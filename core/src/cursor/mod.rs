//! The cursor protocol.
//!
//! A [`Cursor`] is a stateful, single-pass, non-restartable walk over some
//! source, yielding one `Option` per step. It has two observable states:
//! *active* (`next` may return `Some`) and *exhausted* (every later `next`
//! returns `None`). The transition is one way; to walk again, ask the
//! container for a fresh cursor.
//!
//! Cursors borrow their container. Because the borrow is tracked, a
//! container cannot be mutated (and possibly relocated) while a cursor over
//! it is alive.
//!
//! ```
//! use strata_core::cursor::{Cursor, CursorExt, SliceCursorMut};
//!
//! let mut values = [1, 2, 3, 4, 5];
//! let evens: Vec<i32> = SliceCursorMut::new(&mut values)
//!     .map(|x| *x *= 2)
//!     .filter(|x| **x % 4 == 0)
//!     .into_std()
//!     .map(|x| *x)
//!     .collect();
//! assert_eq!(evens, [4, 8]);
//! ```

mod adapters;
mod slice;

pub use adapters::{Filter, Map};
pub use slice::{SliceCursor, SliceCursorMut};

pub trait Cursor {
    type Item;

    /// Yields the current element and steps past it, or `None` once the
    /// source is exhausted.
    fn next(&mut self) -> Option<Self::Item>;

    /// Yields the current element, then moves `n` elements ahead.
    ///
    /// The element returned is the one *before* the jump: `advance(3)` on a
    /// fresh cursor over `[a, b, c, d]` returns `a` and leaves the cursor on
    /// `d`. A step of `0` is treated as `1`.
    fn advance(&mut self, n: usize) -> Option<Self::Item> {
        let current = self.next()?;
        for _ in 1..n {
            if self.next().is_none() {
                break;
            }
        }
        Some(current)
    }

    /// Counts the elements left. This consumes them: the cursor is exhausted
    /// afterwards.
    fn remaining(&mut self) -> usize {
        let mut count = 0;
        while self.next().is_some() {
            count += 1;
        }
        count
    }
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        (**self).next()
    }

    fn advance(&mut self, n: usize) -> Option<Self::Item> {
        (**self).advance(n)
    }

    fn remaining(&mut self) -> usize {
        (**self).remaining()
    }
}

/// Builder methods available on every cursor.
pub trait CursorExt: Cursor + Sized {
    /// Lazily applies `f` in place to each element as it is pulled.
    fn map<'a, T, F>(self, f: F) -> Map<Self, F>
    where
        T: ?Sized + 'a,
        Self: Cursor<Item = &'a mut T>,
        F: FnMut(&mut T),
    {
        Map::new(self, f)
    }

    /// Lazily skips elements for which `predicate` is false.
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Presents this cursor as a `core::iter::Iterator`.
    fn into_std(self) -> Std<Self> {
        Std { cursor: self }
    }
}

impl<C: Cursor> CursorExt for C {}

/// Presents any iterator through the cursor protocol, using the default
/// `advance` and `remaining`.
#[derive(Debug, Clone)]
pub struct IterCursor<I> {
    iter: core::iter::Fuse<I>,
}

impl<I: Iterator> IterCursor<I> {
    pub fn new(iter: impl IntoIterator<IntoIter = I>) -> Self {
        IterCursor {
            iter: iter.into_iter().fuse(),
        }
    }
}

impl<I: Iterator> Cursor for IterCursor<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.iter.next()
    }
}

/// A cursor seen as a std iterator. See [`CursorExt::into_std`].
#[derive(Debug, Clone)]
pub struct Std<C> {
    cursor: C,
}

impl<C> Std<C> {
    pub fn into_inner(self) -> C {
        self.cursor
    }
}

impl<C: Cursor> Iterator for Std<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        self.cursor.next()
    }
}

impl<C: Cursor> core::iter::FusedIterator for Std<C> {}

#[cfg(test)]
#[path = "cursor_test.rs"]
mod cursor_test;
