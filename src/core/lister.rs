//! Listing of every parameter name held by the store.

use tracing::{debug, trace};

use crate::core::store::ParameterStore;
use crate::core::types::ParameterName;
use crate::error::Result;

/// Collect every stored name by following page tokens until the last page.
///
/// All or nothing: if any page request fails, the names already read are
/// dropped and the error is returned. No retries happen here.
pub async fn list_keys<S: ParameterStore + ?Sized>(store: &S) -> Result<Vec<ParameterName>> {
    let mut names = Vec::new();
    let mut next_token = None;
    let mut pages = 0usize;

    loop {
        let page = store.list_page(next_token).await?;
        pages += 1;
        trace!(page = pages, names = page.names.len(), "received page");
        names.extend(page.names);

        match page.next_token {
            Some(token) => next_token = Some(token),
            None => break,
        }
    }

    debug!(store = store.name(), pages, names = names.len(), "listed parameter names");
    Ok(names)
}
