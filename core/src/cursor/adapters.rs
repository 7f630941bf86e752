//! Lazy adapters that wrap an upstream cursor and are cursors themselves.
//!
//! Adapters never own elements. Each one holds exactly one upstream cursor
//! (by value, or by `&mut` when the caller wants it back), and pulls from it
//! only when pulled from.

use super::Cursor;
use crate::{algo, option};

/// Applies a transform in place to each element as it passes through.
///
/// The transform mutates the element through the same reference that is
/// forwarded; nothing is copied.
#[derive(Debug, Clone)]
pub struct Map<C, F> {
    upstream: C,
    f: F,
}

impl<C, F> Map<C, F> {
    pub fn new(upstream: C, f: F) -> Self {
        Map { upstream, f }
    }

    pub fn into_inner(self) -> C {
        self.upstream
    }
}

impl<'a, T, C, F> Cursor for Map<C, F>
where
    T: ?Sized + 'a,
    C: Cursor<Item = &'a mut T>,
    F: FnMut(&mut T),
{
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        let mut item = self.upstream.next();
        option::map(item.as_deref_mut(), &mut self.f);
        item
    }

    fn advance(&mut self, n: usize) -> Option<&'a mut T> {
        let mut item = self.upstream.advance(n);
        option::map(item.as_deref_mut(), &mut self.f);
        item
    }

    /// Counting does not transform: skipped elements are left untouched.
    fn remaining(&mut self) -> usize {
        self.upstream.remaining()
    }
}

/// Yields only the elements for which the predicate holds.
#[derive(Debug, Clone)]
pub struct Filter<C, P> {
    upstream: C,
    predicate: P,
}

impl<C, P> Filter<C, P> {
    pub fn new(upstream: C, predicate: P) -> Self {
        Filter {
            upstream,
            predicate,
        }
    }

    pub fn into_inner(self) -> C {
        self.upstream
    }
}

impl<C, P> Cursor for Filter<C, P>
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        algo::find(&mut self.upstream, &mut self.predicate)
    }

    /// Discards one upstream element, whatever `n` is, then resumes the
    /// filtered search. Rejections consume upstream elements unevenly, so a
    /// filtered cursor cannot honor "skip exactly `n`".
    fn advance(&mut self, _n: usize) -> Option<C::Item> {
        self.upstream.next();
        self.next()
    }
}
