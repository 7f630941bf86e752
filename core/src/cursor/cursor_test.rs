//! Tests for the cursor protocol and adapters

use super::*;
use alloc::vec::Vec;
use pretty_assertions::assert_eq;

fn drain<C: Cursor>(cursor: C) -> Vec<C::Item> {
    cursor.into_std().collect()
}

// ============================================================================
// Slice cursors
// ============================================================================

#[test]
fn test_next_yields_in_order_then_stays_exhausted() {
    let values = [10, 20, 30];
    let mut cursor = SliceCursor::new(&values);
    assert_eq!(cursor.next(), Some(&10));
    assert_eq!(cursor.next(), Some(&20));
    assert_eq!(cursor.next(), Some(&30));
    for _ in 0..3 {
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.advance(2), None);
    }
}

#[test]
fn test_advance_returns_element_before_the_jump() {
    let values = [0, 1, 2, 3, 4, 5, 6];
    let mut cursor = SliceCursor::new(&values);
    assert_eq!(cursor.advance(3), Some(&0));
    assert_eq!(cursor.next(), Some(&3));
    assert_eq!(cursor.advance(10), Some(&4));
    assert_eq!(cursor.next(), None);
}

#[test]
fn test_advance_zero_steps_like_next() {
    let values = [1, 2];
    let mut cursor = SliceCursor::new(&values);
    assert_eq!(cursor.advance(0), Some(&1));
    assert_eq!(cursor.advance(0), Some(&2));
    assert_eq!(cursor.advance(0), None);
}

#[test]
fn test_remaining_counts_and_exhausts() {
    let values = [1, 2, 3, 4, 5];
    let mut cursor = SliceCursor::new(&values);
    assert_eq!(cursor.remaining(), 5);
    assert_eq!(cursor.next(), None);

    let mut cursor = SliceCursor::new(&values);
    cursor.next();
    cursor.next();
    assert_eq!(cursor.as_slice(), &[3, 4, 5]);
    assert_eq!(cursor.remaining(), 3);
    assert_eq!(cursor.remaining(), 0);
}

#[test]
fn test_empty_slice_cursor() {
    let values: [u8; 0] = [];
    let mut cursor = SliceCursor::new(&values);
    assert_eq!(cursor.next(), None);
    assert_eq!(cursor.remaining(), 0);
}

#[test]
fn test_slice_cursor_mut_writes_through() {
    let mut values = [1, 2, 3, 4];
    let mut cursor = SliceCursorMut::new(&mut values);
    *cursor.next().unwrap() += 100;
    *cursor.advance(2).unwrap() += 200;
    assert_eq!(cursor.as_slice(), &[4]);
    assert_eq!(cursor.remaining(), 1);
    assert_eq!(cursor.next(), None);
    assert_eq!(values, [101, 202, 3, 4]);
}

// ============================================================================
// Default protocol methods
// ============================================================================

#[test]
fn test_iter_cursor_default_advance() {
    let mut cursor = IterCursor::new(0..7);
    assert_eq!(cursor.advance(3), Some(0));
    assert_eq!(cursor.next(), Some(3));
    assert_eq!(cursor.advance(10), Some(4));
    assert_eq!(cursor.next(), None);
}

#[test]
fn test_iter_cursor_default_remaining() {
    let mut cursor = IterCursor::new([1, 2, 3]);
    cursor.next();
    assert_eq!(cursor.remaining(), 2);
    assert_eq!(cursor.next(), None);
}

#[test]
fn test_borrowed_cursor_leaves_upstream_usable() {
    let values = [1, 2, 3, 4];
    let mut cursor = SliceCursor::new(&values);
    let firsts: Vec<_> = (&mut cursor).into_std().take(2).collect();
    assert_eq!(firsts, [&1, &2]);
    assert_eq!(cursor.next(), Some(&3));
}

// ============================================================================
// Map / Filter
// ============================================================================

#[test]
fn test_map_transforms_in_place() {
    let mut values = [1, 2, 3];
    let mapped = drain(SliceCursorMut::new(&mut values).map(|x| *x *= 10));
    assert_eq!(mapped, [&mut 10, &mut 20, &mut 30]);
    assert_eq!(values, [10, 20, 30]);
}

#[test]
fn test_map_advance_transforms_only_yielded_element() {
    let mut values = [1, 2, 3, 4];
    let mut cursor = SliceCursorMut::new(&mut values).map(|x| *x = -*x);
    assert_eq!(cursor.advance(2), Some(&mut -1));
    assert_eq!(cursor.next(), Some(&mut -3));
    assert_eq!(cursor.remaining(), 1);
    assert_eq!(values, [-1, 2, -3, 4]);
}

#[test]
fn test_filter_of_map_pipeline() {
    let mut values = [1, 2, 3, 4, 5];
    let result: Vec<i32> = SliceCursorMut::new(&mut values)
        .map(|x| *x *= 2)
        .filter(|x| **x % 4 == 0)
        .into_std()
        .map(|x| *x)
        .collect();
    assert_eq!(result, [4, 8]);
}

#[test]
fn test_filter_remaining_counts_matches() {
    let values = [1, 2, 3, 4, 5, 6];
    let mut cursor = SliceCursor::new(&values).filter(|x| **x % 2 == 1);
    assert_eq!(cursor.remaining(), 3);
    assert_eq!(cursor.next(), None);
}

#[test]
fn test_filter_advance_discards_one_upstream_element() {
    // Upstream: 2 4 5 6 8. Predicate: even.
    let values = [2, 4, 5, 6, 8];
    let mut cursor = SliceCursor::new(&values).filter(|x| **x % 2 == 0);
    // Drops 2, then finds 4.
    assert_eq!(cursor.advance(3), Some(&4));
    // Drops 5, then finds 6. The step size is not honored.
    assert_eq!(cursor.advance(100), Some(&6));
    // Drops 8, then nothing is left.
    assert_eq!(cursor.advance(1), None);
    assert_eq!(cursor.next(), None);
}

#[test]
fn test_filter_over_borrowed_upstream() {
    let values = [1, 2, 3, 4];
    let mut upstream = SliceCursor::new(&values);
    {
        let mut odd = Filter::new(&mut upstream, |x: &&i32| **x % 2 == 1);
        assert_eq!(odd.next(), Some(&1));
    }
    assert_eq!(upstream.next(), Some(&2));
}

#[test]
fn test_into_inner_returns_upstream() {
    let values = [7, 8, 9];
    let mut filtered = SliceCursor::new(&values).filter(|x| **x > 7);
    assert_eq!(filtered.next(), Some(&8));
    let mut upstream = filtered.into_inner();
    assert_eq!(upstream.next(), Some(&9));

    let mut bridged = SliceCursor::new(&values).into_std();
    bridged.next();
    assert_eq!(bridged.into_inner().remaining(), 2);
}
