//! Cursors over contiguous buffers.
//!
//! Both cursors keep the not-yet-visited tail of the buffer, so `advance` and
//! `remaining` are O(1).

use super::Cursor;

#[derive(Debug, Clone)]
pub struct SliceCursor<'a, T> {
    rest: &'a [T],
}

impl<'a, T> SliceCursor<'a, T> {
    pub fn new(slice: &'a [T]) -> Self {
        SliceCursor { rest: slice }
    }

    /// The elements not yet yielded.
    pub fn as_slice(&self) -> &'a [T] {
        self.rest
    }
}

impl<'a, T> Cursor for SliceCursor<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let (first, rest) = self.rest.split_first()?;
        self.rest = rest;
        Some(first)
    }

    fn advance(&mut self, n: usize) -> Option<&'a T> {
        let (first, rest) = self.rest.split_first()?;
        let skip = (n.max(1) - 1).min(rest.len());
        self.rest = &rest[skip..];
        Some(first)
    }

    fn remaining(&mut self) -> usize {
        let count = self.rest.len();
        self.rest = &[];
        count
    }
}

#[derive(Debug)]
pub struct SliceCursorMut<'a, T> {
    rest: &'a mut [T],
}

impl<'a, T> SliceCursorMut<'a, T> {
    pub fn new(slice: &'a mut [T]) -> Self {
        SliceCursorMut { rest: slice }
    }

    pub fn as_slice(&self) -> &[T] {
        &*self.rest
    }
}

impl<'a, T> Cursor for SliceCursorMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        let (first, rest) = core::mem::take(&mut self.rest).split_first_mut()?;
        self.rest = rest;
        Some(first)
    }

    fn advance(&mut self, n: usize) -> Option<&'a mut T> {
        let (first, rest) = core::mem::take(&mut self.rest).split_first_mut()?;
        let skip = (n.max(1) - 1).min(rest.len());
        self.rest = &mut rest[skip..];
        Some(first)
    }

    fn remaining(&mut self) -> usize {
        core::mem::take(&mut self.rest).len()
    }
}
