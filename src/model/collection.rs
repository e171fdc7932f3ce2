//! Concurrent collection building.
//!
//! Collections whose entries are independent (path items, webhooks) are
//! built with one task per entry. Entries are gathered sequentially, then
//! fanned out over the rayon pool; the first failing entry fails the whole
//! collection. Results land in source order whatever order tasks finish in.

use super::extract::{build_object, Buildable};
use super::reference::{KeyReference, ReferenceMap, ValueReference};
use super::{resolve_alias, Node};
use crate::error::{ErrorContext, Result};
use crate::index::{chain, SpecIndex, Target};
use rayon::prelude::*;
use std::sync::Arc;

/// Build every non-extension entry of `map_node` as a `T`.
///
/// With `dereference` set, entry values that are reference nodes are
/// resolved through `idx` before their task starts; a failed resolution
/// aborts the collection unless the index tolerates circular references
/// and the failure was a cycle. Whether entries build in parallel follows
/// [`SpecIndex::concurrent_collections`].
pub fn build_collection<T: Buildable>(
    label: &str,
    map_node: &Node,
    idx: &SpecIndex,
    dereference: bool,
) -> Result<ReferenceMap<T>> {
    let mut entries = Vec::new();
    for (key, value) in map_node.target().mapping_pairs() {
        if key.is_extension_key() {
            continue;
        }
        let target = if dereference {
            idx.resolve_target(value, &format!("building {label} '{}'", key.value))?
        } else {
            Target::inline(resolve_alias(value))
        };
        entries.push((Arc::clone(key), target));
    }

    // Tasks may run on any pool thread; each starts from the caller's chain.
    let parent_chain = chain::current();
    let build_entry = |(key, target): &(Arc<Node>, Target)| -> Result<(KeyReference<String>, ValueReference<T>)> {
        let _chain = chain::install(parent_chain.clone());
        let _building = target.activate();
        let item = build_object::<T>(&target.node, idx)
            .with_context(|| format!("building {label} '{}'", key.value))?;
        Ok((
            KeyReference::new(key.value.clone(), Arc::clone(key)),
            ValueReference::new(item, Arc::clone(&target.node)),
        ))
    };

    let parallel = idx.concurrent_collections() && entries.len() > 1;
    tracing::debug!(
        "Building {} {} entries ({})",
        entries.len(),
        label,
        if parallel { "parallel" } else { "sequential" }
    );

    let built = if parallel {
        entries
            .par_iter()
            .map(&build_entry)
            .collect::<Result<Vec<_>>>()?
    } else {
        entries.iter().map(&build_entry).collect::<Result<Vec<_>>>()?
    };

    Ok(built.into_iter().collect())
}
