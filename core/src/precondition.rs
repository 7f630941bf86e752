//! Fatal path for violated preconditions.
//!
//! A violated precondition (bad index, unwrap of an absent value, allocation
//! failure) is a bug in the caller, not an operational failure. It is logged
//! with the name of the failing operation and the offending values, then the
//! thread panics. Build with `panic = "abort"` to terminate the process
//! outright.
//!
//! Checks stay enabled in release builds: the containers rely on them for
//! memory safety.

use core::fmt;

use crate::error::VecError;

/// Logs the violated precondition of `op` and panics with `message`.
///
/// ```should_panic
/// # use strata_core::precondition;
/// let (index, len) = (4, 2);
/// if index >= len {
///     precondition::violated("erase", format_args!("index (is {index}) should be < len (is {len})"));
/// }
/// ```
#[cold]
#[track_caller]
pub fn violated(op: &'static str, message: fmt::Arguments<'_>) -> ! {
    tracing::error!(op, "precondition violated: {message}");
    panic!("{op}: {message}")
}

/// Reports `err` as a fatal precondition violation.
///
/// Allocation failures go to the global allocation error handler, so they
/// behave like out-of-memory in `alloc` collections.
#[cold]
#[track_caller]
pub fn fatal(err: VecError) -> ! {
    if let VecError::AllocFailed { layout } = err {
        tracing::error!(size = layout.size(), align = layout.align(), "out of memory");
        alloc::alloc::handle_alloc_error(layout)
    }
    tracing::error!(error = %err, "precondition violated");
    panic!("{err}")
}
