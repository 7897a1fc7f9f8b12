use tracing::debug;

use crate::error::Error;
use crate::model::{DuplicateGroup, Scene};
use crate::selection::SelectionState;

/// Resolve the scene ordering for a merge invoked on `anchor_id`.
///
/// The returned vector is destination-first: element 0 is the anchor, the
/// rest are the merge sources. If any sibling in the group is marked in
/// `selection`, the operator's explicit marks win as sources (the anchor
/// itself never counts, even when marked); otherwise the whole group merges
/// into the anchor. Source ordering follows group order in both branches.
///
/// An anchor that is not a member of `group` is a caller bug and fails
/// loudly with [`Error::AnchorNotInGroup`].
pub fn resolve_merge(
    group: &DuplicateGroup,
    anchor_id: &str,
    selection: &SelectionState,
) -> Result<Vec<Scene>, Error> {
    let anchor = group
        .scenes
        .iter()
        .find(|s| s.id == anchor_id)
        .ok_or_else(|| Error::AnchorNotInGroup(anchor_id.to_string()))?;

    let mut sources: Vec<&Scene> = selection
        .selected_in(group)
        .into_iter()
        .filter(|s| s.id != anchor_id)
        .collect();

    if sources.is_empty() {
        sources = group.scenes.iter().filter(|s| s.id != anchor_id).collect();
    }

    debug!(
        "merge on scene '{}': {} source scene(s)",
        anchor_id,
        sources.len()
    );

    let mut resolved = Vec::with_capacity(sources.len() + 1);
    resolved.push(anchor.clone());
    resolved.extend(sources.into_iter().cloned());
    Ok(resolved)
}
