//! Macros for building errors with variadic key-values

/// Build a raw key-value list from alternating keys and values.
///
/// Each element goes through `Value::from`, so literals, numbers, strings,
/// options and lazy values can be mixed.
///
/// ```rust
/// use kverrors::{keyvals, Value};
///
/// let kv = keyvals!["id", 7, "name", "job"];
/// assert_eq!(kv, vec![Value::from("id"), Value::from(7), Value::from("name"), Value::from("job")]);
/// ```
#[macro_export]
macro_rules! keyvals {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($kv:expr),+ $(,)?) => {
        ::std::vec![$($crate::Value::from($kv)),+]
    };
}

/// Create a leaf [`Error`](crate::Error): `new!(message, key, value, ...)`.
#[macro_export]
macro_rules! new {
    ($msg:expr $(, $kv:expr)* $(,)?) => {
        $crate::Error::new($msg, $crate::keyvals![$($kv),*])
    };
}

/// Wrap an error: `wrap!(err, message, key, value, ...)`.
#[macro_export]
macro_rules! wrap {
    ($err:expr, $msg:expr $(, $kv:expr)* $(,)?) => {
        $crate::Error::wrap($err, $msg, $crate::keyvals![$($kv),*])
    };
}

/// Wrap an error with a formatted message and no key-values.
#[macro_export]
macro_rules! wrapf {
    ($err:expr, $($fmt:tt)+) => {
        $crate::Error::wrap($err, ::std::format!($($fmt)+), $crate::keyvals![])
    };
}

/// Create an error from a format string.
///
/// Without a cause this is a leaf. When the named argument `w = cause` is
/// present, the result is a node with the message `"Errorf"` wrapping a
/// [`Formatted`](crate::Formatted) node whose text is the format string
/// rendered with `{w}` replaced by the cause, and whose source is the cause.
/// `w` follows the usual `format!` ordering: positional arguments first, then
/// named ones in any order.
///
/// ```rust
/// use kverrors::{errorf, unwrap_all};
///
/// let base = kverrors::new!("base error");
/// let err = errorf!("load {}: {w}", "config", w = base);
///
/// assert_eq!(err.to_string(), "Errorf: load config: base error");
/// assert_eq!(unwrap_all(&err).to_string(), "base error");
/// ```
#[macro_export]
macro_rules! errorf {
    ($fmt:literal $($rest:tt)*) => {
        $crate::__errorf_scan!(($fmt) [] $($rest)*)
    };
}

/// Walks the arguments of `errorf!` one token tree at a time looking for a
/// top-level `, w = cause`.
#[doc(hidden)]
#[macro_export]
macro_rules! __errorf_scan {
    (($fmt:literal) [$($before:tt)*]) => {
        $crate::errorf(::std::format_args!($fmt $($before)*))
    };
    (($fmt:literal) [$($before:tt)*] , w = $cause:expr $(, $($after:tt)*)?) => {{
        let cause = $cause;
        let text = ::std::format!($fmt $($before)*, w = cause $(, $($after)*)?);
        $crate::__private::errorf_wrapped(text, cause)
    }};
    (($fmt:literal) [$($before:tt)*] $next:tt $($rest:tt)*) => {
        $crate::__errorf_scan!(($fmt) [$($before)* $next] $($rest)*)
    };
}
