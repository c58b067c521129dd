//! Error nodes and their constructors
//!
//! [`Error`] is the single node type of this crate: a leaf when it was
//! created fresh, a wrapping node when it holds a source. [`WrapExt`] adds
//! the wrapping constructors to `Result`.

pub mod constructors;
pub mod context;
mod display;
pub mod types;

pub use constructors::{errorf, wrap, wrap_and_merge, wrapf};
pub use context::WrapExt;
pub use types::{BoxError, Error, Formatted};
