//! Key-value aggregation across error chains
//!
//! Every node stores its key-values as they were passed in, a flat list of
//! alternating keys and values. They are only paired up, normalized and
//! resolved here, when a chain is inspected.
//!
//! The chain is walked from the outermost error to the root cause. In the
//! pair list, pairs of outer nodes come first; in the map, the first pair
//! seen for a key wins, so the most specific context takes precedence.

mod normalize;
mod value;

pub use value::{Lazy, Value};

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::error::Error as StdError;

use crate::chain::{chain, probe_key_valuer};

/// Aggregated key-values of a chain, keyed by name.
pub type KeyValsMap = BTreeMap<String, Value>;

/// Capability of an error node that carries key-values.
pub trait KeyValuer {
    /// The key-values exactly as they were attached to this node.
    fn key_vals(&self) -> &[Value];
}

/// Normalized key-value pairs of the whole chain, outermost node first.
///
/// Duplicate keys are kept. Lazy values are resolved.
pub fn key_vals(err: &(dyn StdError + 'static)) -> Vec<(String, Value)> {
    unresolved_pairs(err)
        .into_iter()
        .map(|(key, value)| (key, normalize::resolve(value)))
        .collect()
}

/// Key-values of the whole chain as a map.
///
/// On a key collision the outermost node wins. Only winning lazy values are
/// resolved.
pub fn key_vals_map(err: &(dyn StdError + 'static)) -> KeyValsMap {
    let mut map = KeyValsMap::new();
    for (key, value) in unresolved_pairs(err) {
        if let Entry::Vacant(slot) = map.entry(key) {
            slot.insert(normalize::resolve(value));
        }
    }
    map
}

pub(crate) fn unresolved_pairs(err: &(dyn StdError + 'static)) -> Vec<(String, Value)> {
    chain(err)
        .filter_map(probe_key_valuer)
        .flat_map(|node| normalize::pairs(node.key_vals()))
        .collect()
}

/// Normalize a raw list into pairs and flatten it back, values untouched.
pub(crate) fn normalized(raw: &[Value]) -> impl Iterator<Item = Value> + '_ {
    normalize::pairs(raw).flat_map(|(key, value)| [Value::Str(key), value])
}
