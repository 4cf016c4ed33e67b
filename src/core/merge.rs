//! Merging of per-batch results.

use crate::core::types::{EnvMap, PartialResult};

/// Fold one partial result into the accumulator.
///
/// A key already present is overwritten: last write wins.
pub fn merge_into(env: &mut EnvMap, partial: PartialResult) {
    env.extend(partial);
}

/// Merge a sequence of partial results in iteration order.
pub fn merge(partials: impl IntoIterator<Item = PartialResult>) -> EnvMap {
    let mut env = EnvMap::new();
    for partial in partials {
        merge_into(&mut env, partial);
    }
    env
}
