//! Terminal operations over the cursor protocol.
//!
//! Everything here is written against [`Cursor::next`] and [`Cursor::advance`]
//! alone, so it works over any container or adapter chain. Each function
//! drains the cursor as far as it needs to; short-circuiting operations leave
//! the rest unvisited.

use core::cmp::Ordering;

use crate::cursor::Cursor;
use crate::option;

/// True if every element satisfies `predicate`. Vacuously true when empty.
pub fn all<C>(cursor: &mut C, mut predicate: impl FnMut(&C::Item) -> bool) -> bool
where
    C: Cursor + ?Sized,
{
    while let Some(item) = cursor.next() {
        if option::filter(Some(item), &mut predicate).is_none() {
            return false;
        }
    }
    true
}

pub fn any<C>(cursor: &mut C, mut predicate: impl FnMut(&C::Item) -> bool) -> bool
where
    C: Cursor + ?Sized,
{
    find(cursor, &mut predicate).is_some()
}

/// The first element satisfying `predicate`.
pub fn find<C>(cursor: &mut C, mut predicate: impl FnMut(&C::Item) -> bool) -> Option<C::Item>
where
    C: Cursor + ?Sized,
{
    while let Some(item) = cursor.next() {
        if predicate(&item) {
            return Some(item);
        }
    }
    None
}

/// The first present result of applying `f` to successive elements.
pub fn find_map<C, U>(cursor: &mut C, mut f: impl FnMut(C::Item) -> Option<U>) -> Option<U>
where
    C: Cursor + ?Sized,
{
    while let Some(item) = cursor.next() {
        if let found @ Some(_) = f(item) {
            return found;
        }
    }
    None
}

/// Zero-based position of the first element satisfying `predicate`, counted
/// from where the cursor stood.
pub fn find_index<C>(cursor: &mut C, mut predicate: impl FnMut(&C::Item) -> bool) -> Option<usize>
where
    C: Cursor + ?Sized,
{
    let mut index = 0;
    while let Some(item) = cursor.next() {
        if predicate(&item) {
            return Some(index);
        }
        index += 1;
    }
    None
}

/// True if either every element satisfies `predicate` or none does.
///
/// This is two passes over the *same* cursor: `all` runs first and, when it
/// stops on a failing element, `any` only sees what `all` left behind. It is
/// therefore weaker than a check for two contiguous runs.
pub fn is_partitioned<C>(cursor: &mut C, mut predicate: impl FnMut(&C::Item) -> bool) -> bool
where
    C: Cursor + ?Sized,
{
    all(cursor, &mut predicate) || !any(cursor, &mut predicate)
}

/// True if `compare(prev, cur)` is not `Greater` for every adjacent pair.
/// Empty and single-element sequences are sorted.
pub fn is_sorted<C>(cursor: &mut C, mut compare: impl FnMut(&C::Item, &C::Item) -> Ordering) -> bool
where
    C: Cursor + ?Sized,
{
    let Some(mut prev) = cursor.next() else {
        return true;
    };
    while let Some(cur) = cursor.next() {
        if compare(&prev, &cur) == Ordering::Greater {
            return false;
        }
        prev = cur;
    }
    true
}

/// Lexicographic three-way comparison. A sequence that is a strict prefix of
/// the other sorts first.
pub fn compare<A, B>(
    a: &mut A,
    b: &mut B,
    mut compare: impl FnMut(&A::Item, &B::Item) -> Ordering,
) -> Ordering
where
    A: Cursor + ?Sized,
    B: Cursor + ?Sized,
{
    loop {
        match (a.next(), b.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => match compare(&x, &y) {
                Ordering::Equal => continue,
                ordering => return ordering,
            },
        }
    }
}

pub fn last<C>(cursor: &mut C) -> Option<C::Item>
where
    C: Cursor + ?Sized,
{
    let mut last = None;
    while let Some(item) = cursor.next() {
        last = Some(item);
    }
    last
}

/// Left fold: `combine` updates the accumulator in place for each element.
pub fn fold<C, B>(cursor: &mut C, init: B, mut combine: impl FnMut(&mut B, C::Item)) -> B
where
    C: Cursor + ?Sized,
{
    let mut acc = init;
    while let Some(item) = cursor.next() {
        combine(&mut acc, item);
    }
    acc
}

/// Fold that starts from the first element. `None` if the cursor is empty.
pub fn reduce<C>(cursor: &mut C, combine: impl FnMut(&mut C::Item, C::Item)) -> Option<C::Item>
where
    C: Cursor + ?Sized,
{
    let first = cursor.next()?;
    Some(fold(cursor, first, combine))
}

pub fn for_each<C>(cursor: &mut C, mut f: impl FnMut(C::Item))
where
    C: Cursor + ?Sized,
{
    while let Some(item) = cursor.next() {
        f(item);
    }
}

/// Visits every `step`-th element, starting with the current one.
pub fn for_each_step<C>(cursor: &mut C, step: usize, mut f: impl FnMut(C::Item))
where
    C: Cursor + ?Sized,
{
    while let Some(item) = cursor.advance(step) {
        f(item);
    }
}

/// The element `index` positions ahead of the cursor.
pub fn get<C>(cursor: &mut C, index: usize) -> Option<C::Item>
where
    C: Cursor + ?Sized,
{
    if index > 0 {
        cursor.advance(index)?;
    }
    cursor.next()
}

#[cfg(test)]
#[path = "algo_test.rs"]
mod algo_test;
