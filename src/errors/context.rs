//! Result extension for attaching context
//!
//! Wrapping happens only on the `Err` path, so `Ok` values pass through
//! untouched and call sites need no explicit error check.

use super::types::{BoxError, Error};
use crate::keyvals::Value;

/// Extension trait for wrapping the error of a `Result`.
pub trait WrapExt<T> {
    /// Wrap the error with a message and key-values.
    fn wrap(
        self,
        message: impl Into<String>,
        keyvals: impl IntoIterator<Item = Value>,
    ) -> Result<T, Error>;

    /// Wrap the error with a message built only on the error path.
    fn wrap_with<F, M>(self, f: F) -> Result<T, Error>
    where
        F: FnOnce() -> M,
        M: Into<String>;
}

impl<T, E> WrapExt<T> for Result<T, E>
where
    E: Into<BoxError>,
{
    #[track_caller]
    #[inline(never)]
    fn wrap(
        self,
        message: impl Into<String>,
        keyvals: impl IntoIterator<Item = Value>,
    ) -> Result<T, Error> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(Error::wrap_at(
                err.into(),
                message.into(),
                keyvals.into_iter().collect(),
                1,
            )),
        }
    }

    #[track_caller]
    #[inline(never)]
    fn wrap_with<F, M>(self, f: F) -> Result<T, Error>
    where
        F: FnOnce() -> M,
        M: Into<String>,
    {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(Error::wrap_at(err.into(), f().into(), Vec::new(), 1)),
        }
    }
}
