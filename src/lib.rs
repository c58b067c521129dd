//! Errors with key-value context
//!
//! This library lets call sites attach a message, structured key-values and
//! a stack trace to an error, while keeping the original error reachable
//! through `source()`.
//!
//! - [`Error::new`] / [`new!`] create a leaf error and capture the stack.
//! - [`Error::wrap`] / [`wrap!`] / [`WrapExt::wrap`] add context to any
//!   error. The stack trace is captured once, at the deepest node of this
//!   crate, and shared by every wrap above it.
//! - [`key_vals`] and [`key_vals_map`] aggregate key-values over the whole
//!   chain, outermost context first.
//! - [`unwrap_all`] returns the root cause.
//!
//! # Example
//!
//! ```rust
//! use std::io;
//! use kverrors::{keyvals, key_vals_map, unwrap_all, Value, WrapExt};
//!
//! fn read_user(_id: u64) -> Result<String, io::Error> {
//!     Err(io::Error::new(io::ErrorKind::NotFound, "no such user"))
//! }
//!
//! fn load(id: u64) -> Result<String, kverrors::Error> {
//!     read_user(id).wrap("load user", keyvals!["user_id", id])
//! }
//!
//! let err = load(7).unwrap_err();
//! assert_eq!(err.to_string(), "load user: no such user");
//! assert_eq!(key_vals_map(&err)["user_id"], Value::from(7u64));
//! assert!(unwrap_all(&err).downcast_ref::<io::Error>().is_some());
//! ```

pub mod chain;
pub mod config;
pub mod errors;
pub mod keyvals;
mod macros;
pub mod stack;

// Re-export commonly used types for convenience
pub use chain::{cause, chain, find, is, unwrap_all, Chain};
pub use config::{EMPTY_VALUE, MAX_CHAIN_DEPTH, MAX_LAZY_DEPTH, MISSING_KEY, NON_STRING_KEY};
pub use errors::{errorf, wrap, wrap_and_merge, wrapf, BoxError, Error, Formatted, WrapExt};
pub use keyvals::{key_vals, key_vals_map, KeyValsMap, KeyValuer, Lazy, Value};
pub use stack::{StackTrace, StackTracer};

#[doc(hidden)]
pub mod __private {
    pub use crate::errors::constructors::errorf_wrapped;
}
