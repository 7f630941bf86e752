#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

//! Building blocks shared by the strata containers.
//!
//! - [`option`]: helpers over `Option`, the "maybe a value" currency every
//!   lookup and cursor step returns.
//! - [`cursor`]: the lazy, single-pass [`Cursor`] protocol, slice cursors and
//!   the `Map` / `Filter` adapters.
//! - [`algo`]: terminal operations (all, any, find, fold, ...) written purely
//!   against the protocol.
//! - [`error`] and [`precondition`]: the typed error returned by fallible
//!   container operations and the fatal path for violated preconditions.

extern crate alloc;

pub mod algo;
pub mod cursor;
pub mod error;
pub mod option;
pub mod precondition;

pub use cursor::{Cursor, CursorExt};
pub use error::VecError;
pub use option::OptionExt;

/// Test utilities for enabling logging in tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils {
    /// Initialize tracing subscriber for tests with DEBUG level
    /// Call this at the start of tests where you want to see logging output
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }
}
