//! Common test utilities and fixtures
//!
//! Error types standing in for user-defined and foreign errors, plus tracing
//! setup shared by the integration tests.

#![allow(dead_code)]

use std::sync::Once;

use thiserror::Error;

static INIT_TRACING: Once = Once::new();

/// Install a test subscriber once per test binary.
///
/// Filter with `RUST_LOG`, e.g. `RUST_LOG=kverrors=trace`.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// User-defined error with value semantics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct MyErr(pub String);

impl MyErr {
    pub fn new(msg: &str) -> Self {
        Self(msg.to_owned())
    }
}

/// Foreign wrapper that formats its source into its own message.
#[derive(Debug, Error)]
#[error("fmt wrapping: {source}")]
pub struct FmtWrapping {
    #[source]
    pub source: kverrors::Error,
}

/// Foreign wrapper around an arbitrary boxed error.
#[derive(Debug, Error)]
#[error("{context}: {source}")]
pub struct Contextual {
    pub context: String,
    #[source]
    pub source: kverrors::BoxError,
}

impl Contextual {
    pub fn new(context: &str, source: impl Into<kverrors::BoxError>) -> Self {
        Self {
            context: context.to_owned(),
            source: source.into(),
        }
    }
}
