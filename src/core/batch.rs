//! Batching of parameter names.
//!
//! `GetParameters` accepts a bounded number of names per call, so the names
//! are split into consecutive groups before fetching.

use std::num::NonZeroUsize;

use crate::core::types::{Batch, ParameterName};

/// Split `names` into consecutive batches of at most `size` names.
///
/// The last batch may be shorter. The iterator is lazy and borrows `names`;
/// each batch is an owned copy handed to exactly one fetch task.
pub fn batches(names: &[ParameterName], size: NonZeroUsize) -> impl Iterator<Item = Batch> + '_ {
    names.chunks(size.get()).map(<[ParameterName]>::to_vec)
}

/// Number of batches `batches` yields for `len` names.
pub fn batch_count(len: usize, size: NonZeroUsize) -> usize {
    len.div_ceil(size.get())
}
