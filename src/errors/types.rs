//! Error node types

use std::error::Error as StdError;

use crate::keyvals::{KeyValuer, Value};
use crate::stack::{StackTrace, StackTracer};

/// Owned, type-erased error usable as the source of a wrapping node.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Error carrying a message, key-values and a stack trace.
///
/// A node without a source is a leaf created by [`Error::new`] or
/// [`errorf`](crate::errorf). A node with a source wraps another error of any
/// type and shares its stack trace when that error is also an [`Error`].
/// Nodes never change after construction.
pub struct Error {
    pub(crate) message: String,
    pub(crate) keyvals: Vec<Value>,
    pub(crate) stack: StackTrace,
    pub(crate) source: Option<BoxError>,
}

/// Plain format-wrap of a cause, produced by [`errorf!`](crate::errorf!)
/// when it is given a `w = cause` argument.
///
/// Displays only the formatted text, which already renders the cause.
#[derive(Debug, thiserror::Error)]
#[error("{text}")]
pub struct Formatted {
    text: String,
    #[source]
    source: BoxError,
}

impl Formatted {
    pub fn new(text: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self {
            text: text.into(),
            source: source.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Error {
    /// The message of this node alone, without the wrapped errors.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Key-values attached to this node, as passed in.
    pub fn raw_key_vals(&self) -> &[Value] {
        &self.keyvals
    }

    pub fn stack_trace(&self) -> &StackTrace {
        &self.stack
    }

    /// Whether this node wraps nothing.
    pub fn is_leaf(&self) -> bool {
        self.source.is_none()
    }

    /// Take ownership of the wrapped error.
    pub fn into_source(self) -> Option<BoxError> {
        self.source
    }
}

impl KeyValuer for Error {
    fn key_vals(&self) -> &[Value] {
        &self.keyvals
    }
}

impl StackTracer for Error {
    fn stack_trace(&self) -> &StackTrace {
        &self.stack
    }
}
