//! Walking error chains through `source()`
//!
//! `std::error::Error::source` is the only unwrap link followed. Nodes of
//! any type take part; capabilities of this crate's own nodes are found by
//! downcasting and foreign nodes are skipped.

use std::error::Error as StdError;

use crate::config::MAX_CHAIN_DEPTH;
use crate::errors::Error;
use crate::keyvals::KeyValuer;
use crate::stack::StackTracer;

/// Iterator over an error and its sources, outermost first.
#[derive(Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn StdError + 'static)>,
    depth: usize,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        if self.depth == MAX_CHAIN_DEPTH {
            tracing::warn!(
                max_depth = MAX_CHAIN_DEPTH,
                "error chain exceeds maximum depth, stopping traversal"
            );
            self.next = None;
            return None;
        }

        self.depth += 1;
        self.next = current.source();
        Some(current)
    }
}

/// Iterate over `err` and everything it wraps.
pub fn chain<'a>(err: &'a (dyn StdError + 'static)) -> Chain<'a> {
    Chain {
        next: Some(err),
        depth: 0,
    }
}

/// The root cause: the first error in the chain without a source.
///
/// Returns `err` itself when it wraps nothing.
pub fn unwrap_all<'a>(err: &'a (dyn StdError + 'static)) -> &'a (dyn StdError + 'static) {
    chain(err).last().unwrap_or(err)
}

/// Same as [`unwrap_all`]. Only `source()` links are followed.
pub fn cause<'a>(err: &'a (dyn StdError + 'static)) -> &'a (dyn StdError + 'static) {
    unwrap_all(err)
}

/// First error in the chain of type `T`.
pub fn find<'a, T: StdError + 'static>(err: &'a (dyn StdError + 'static)) -> Option<&'a T> {
    chain(err).find_map(|e| e.downcast_ref::<T>())
}

/// Whether any error in the chain is of type `T` and equal to `target`.
pub fn is<T>(err: &(dyn StdError + 'static), target: &T) -> bool
where
    T: StdError + PartialEq + 'static,
{
    chain(err).any(|e| e.downcast_ref::<T>() == Some(target))
}

pub(crate) fn as_node<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a Error> {
    err.downcast_ref::<Error>()
}

pub(crate) fn probe_key_valuer<'a>(
    err: &'a (dyn StdError + 'static),
) -> Option<&'a dyn KeyValuer> {
    as_node(err).map(|node| node as &dyn KeyValuer)
}

pub(crate) fn probe_stack_tracer<'a>(
    err: &'a (dyn StdError + 'static),
) -> Option<&'a dyn StackTracer> {
    as_node(err).map(|node| node as &dyn StackTracer)
}
