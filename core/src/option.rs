//! `Option` as the uniform "maybe a value" currency.
//!
//! Every lookup and every cursor step returns an `Option`. These helpers name
//! the combinators the containers and adapters rely on. Most forward to the
//! inherent `Option` methods; [`map`] differs in that it mutates the payload
//! in place through the reference it carries, and [`unwrap`] reports absence
//! through the precondition path instead of a bare panic.
//!
//! An `Option<&T>` never owns the value it points at. It is a transient view
//! produced and consumed within a single step.

use crate::precondition;

pub const fn none<T>() -> Option<T> {
    None
}

pub const fn some<T>(value: T) -> Option<T> {
    Some(value)
}

/// Returns `a` if it is present, otherwise `b`.
pub fn or<T>(a: Option<T>, b: Option<T>) -> Option<T> {
    a.or(b)
}

/// Returns `b` if `a` is present, otherwise `None`.
pub fn and<T, U>(a: Option<T>, b: Option<U>) -> Option<U> {
    a.and(b)
}

pub fn and_then<T, U>(a: Option<T>, f: impl FnOnce(T) -> Option<U>) -> Option<U> {
    a.and_then(f)
}

/// Applies `f` to the referenced payload, if any. Nothing is returned: the
/// transform is visible through the reference.
pub fn map<T: ?Sized>(a: Option<&mut T>, f: impl FnOnce(&mut T)) {
    if let Some(value) = a {
        f(value);
    }
}

pub fn filter<T>(a: Option<T>, predicate: impl FnOnce(&T) -> bool) -> Option<T> {
    a.filter(predicate)
}

/// Removes one level of nesting. An absent inner value stays absent.
pub fn flatten<T>(a: Option<Option<T>>) -> Option<T> {
    a.flatten()
}

/// Returns the payload. Absence is a fatal precondition violation.
#[track_caller]
pub fn unwrap<T>(a: Option<T>) -> T {
    a.unwrap_or_fatal("unwrap")
}

pub fn unwrap_or<T>(a: Option<T>, default: T) -> T {
    a.unwrap_or(default)
}

pub trait OptionExt<T> {
    /// Like `unwrap`, but names `op` in the diagnostic emitted on absence.
    fn unwrap_or_fatal(self, op: &'static str) -> T;
}

impl<T> OptionExt<T> for Option<T> {
    #[track_caller]
    fn unwrap_or_fatal(self, op: &'static str) -> T {
        match self {
            Some(value) => value,
            None => precondition::violated(op, format_args!("called on an absent value")),
        }
    }
}

#[cfg(test)]
#[path = "option_test.rs"]
mod option_test;
