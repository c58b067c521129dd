//! Compile-time settings
//!
//! The crate has no runtime configuration. Placeholder literals used by
//! key-value normalization and the limits applied while walking chains are
//! defined here; stack capture is switched with the `backtrace` Cargo feature.

/// Key synthesized for the orphan value of an odd-length key-value list.
pub const MISSING_KEY: &str = "missingKey";

/// Key used in place of a key that is not a string.
pub const NON_STRING_KEY: &str = "keyIsNotAStringError";

/// Value used in place of an empty string value.
pub const EMPTY_VALUE: &str = "empty";

/// Upper bound on the number of links followed through `source()`.
///
/// Chains built by this crate are acyclic, but a foreign `source()`
/// implementation may not be. Hitting the bound is logged as a warning.
pub const MAX_CHAIN_DEPTH: usize = 1024;

/// Upper bound on nested lazy values resolved for one key.
pub const MAX_LAZY_DEPTH: usize = 8;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholders_are_distinct() {
        assert_ne!(MISSING_KEY, NON_STRING_KEY);
        assert_ne!(MISSING_KEY, EMPTY_VALUE);
        assert!(!EMPTY_VALUE.is_empty());
    }
}
