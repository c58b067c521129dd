//! Error constructors
//!
//! Every public constructor is `#[track_caller]` so the recorded location is
//! the user's call site, and `#[inline(never)]` so the `skip` passed down to
//! [`StackTrace::capture`] matches the real number of frames in this crate.

use std::error::Error as StdError;
use std::fmt;

use super::types::{BoxError, Error, Formatted};
use crate::chain::{as_node, probe_stack_tracer};
use crate::keyvals::{self, Value};
use crate::stack::StackTrace;

/// Message of the wrapping node built by `errorf!` around its format-wrap.
const ERRORF_MESSAGE: &str = "Errorf";

impl Error {
    /// Create a leaf error.
    ///
    /// `keyvals` alternate between keys and values; see
    /// [`keyvals!`](crate::keyvals!). The stack trace starts at the caller.
    #[track_caller]
    #[inline(never)]
    pub fn new(message: impl Into<String>, keyvals: impl IntoIterator<Item = Value>) -> Self {
        Self::leaf_at(message.into(), keyvals.into_iter().collect(), 1)
    }

    /// Wrap `err` with a message and key-values.
    ///
    /// When `err` is an [`Error`], its stack trace is reused instead of
    /// capturing a new one.
    #[track_caller]
    #[inline(never)]
    pub fn wrap<E: Into<BoxError>>(
        err: E,
        message: impl Into<String>,
        keyvals: impl IntoIterator<Item = Value>,
    ) -> Self {
        Self::wrap_at(err.into(), message.into(), keyvals.into_iter().collect(), 1)
    }

    /// Wrap `cause` with the message, key-values and stack trace of `other`.
    ///
    /// The extra `keyvals` come before the key-values of `other`'s chain, so
    /// they win on collisions. Lazy values stay lazy.
    #[track_caller]
    #[inline(never)]
    pub fn wrap_and_merge<E: Into<BoxError>>(
        cause: E,
        other: &(dyn StdError + 'static),
        keyvals: impl IntoIterator<Item = Value>,
    ) -> Self {
        Self::merge_at(cause.into(), other, keyvals.into_iter().collect(), 1)
    }

    #[track_caller]
    #[inline(never)]
    pub(crate) fn leaf_at(message: String, keyvals: Vec<Value>, skip: usize) -> Self {
        Self {
            message,
            keyvals,
            stack: StackTrace::capture(skip + 1),
            source: None,
        }
    }

    #[track_caller]
    #[inline(never)]
    pub(crate) fn wrap_at(
        source: BoxError,
        message: String,
        keyvals: Vec<Value>,
        skip: usize,
    ) -> Self {
        let stack = match probe_stack_tracer(&*source) {
            Some(inner) => {
                tracing::debug!(origin = %inner.stack_trace().location(), "reusing stack trace");
                inner.stack_trace().clone()
            }
            None => StackTrace::capture(skip + 1),
        };

        Self {
            message,
            keyvals,
            stack,
            source: Some(source),
        }
    }

    #[track_caller]
    #[inline(never)]
    fn merge_at(
        cause: BoxError,
        other: &(dyn StdError + 'static),
        extra: Vec<Value>,
        skip: usize,
    ) -> Self {
        let mut merged: Vec<Value> = keyvals::normalized(&extra).collect();
        merged.extend(
            keyvals::unresolved_pairs(other)
                .into_iter()
                .flat_map(|(key, value)| [Value::Str(key), value]),
        );

        let stack = match as_node(other) {
            Some(node) => node.stack.clone(),
            None => StackTrace::capture(skip + 1),
        };

        Self {
            message: other.to_string(),
            keyvals: merged,
            stack,
            source: Some(cause),
        }
    }
}

/// Create a leaf error with a formatted message and no key-values.
///
/// Usually called through [`errorf!`](crate::errorf!).
#[track_caller]
#[inline(never)]
pub fn errorf(args: fmt::Arguments<'_>) -> Error {
    Error::leaf_at(args.to_string(), Vec::new(), 1)
}

/// Wrap `err` with a message and key-values; `None` stays `None`.
#[track_caller]
#[inline(never)]
pub fn wrap<E: Into<BoxError>>(
    err: Option<E>,
    message: impl Into<String>,
    keyvals: impl IntoIterator<Item = Value>,
) -> Option<Error> {
    let err = err?;
    Some(Error::wrap_at(
        err.into(),
        message.into(),
        keyvals.into_iter().collect(),
        1,
    ))
}

/// Wrap `err` with a formatted message; `None` stays `None`.
#[track_caller]
#[inline(never)]
pub fn wrapf<E: Into<BoxError>>(err: Option<E>, args: fmt::Arguments<'_>) -> Option<Error> {
    let err = err?;
    Some(Error::wrap_at(err.into(), args.to_string(), Vec::new(), 1))
}

/// [`Error::wrap_and_merge`] that returns `None` when there is nothing to
/// merge from.
#[track_caller]
#[inline(never)]
pub fn wrap_and_merge<E: Into<BoxError>>(
    cause: E,
    other: Option<&(dyn StdError + 'static)>,
    keyvals: impl IntoIterator<Item = Value>,
) -> Option<Error> {
    let other = other?;
    Some(Error::merge_at(
        cause.into(),
        other,
        keyvals.into_iter().collect(),
        1,
    ))
}

#[doc(hidden)]
#[track_caller]
#[inline(never)]
pub fn errorf_wrapped<E: Into<BoxError>>(text: String, cause: E) -> Error {
    let cause = cause.into();
    let stack = match as_node(&*cause) {
        Some(node) => node.stack.clone(),
        None => StackTrace::capture(1),
    };

    Error {
        message: ERRORF_MESSAGE.to_owned(),
        keyvals: Vec::new(),
        stack,
        source: Some(Box::new(Formatted::new(text, cause))),
    }
}
