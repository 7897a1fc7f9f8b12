use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::model::{DuplicateGroup, Scene};
use crate::selection::SelectionState;

/// Bulk-selection strategies offered to the operator.
///
/// Each keeper strategy marks every scene in a group except the one it
/// keeps. None of them resets prior marks — callers reset first when a
/// clean run is wanted. Running the same strategy twice over the same
/// input leaves the selection unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectStrategy {
    ClearSelection,
    KeepLargestFile,
    KeepLargestResolution,
    KeepOldest,
    KeepNewest,
}

/// True when every scene's primary file reports the same codec.
/// All-unknown (empty) codecs count as matching.
pub fn codec_safe(group: &DuplicateGroup) -> bool {
    let mut codecs = group.scenes.iter().map(|s| s.primary_codec());
    match codecs.next() {
        Some(first) => codecs.all(|c| c == first),
        None => true,
    }
}

/// Run one strategy over the visible groups.
///
/// Returns the number of scenes marked for deletion, or for
/// [`SelectStrategy::ClearSelection`] the number of visible scenes reset.
pub fn apply_strategy(
    strategy: SelectStrategy,
    groups: &[DuplicateGroup],
    selection: &mut SelectionState,
    safe_codec_only: bool,
) -> usize {
    match strategy {
        SelectStrategy::ClearSelection => clear_marks(groups, selection),
        SelectStrategy::KeepLargestFile => {
            mark_all_but_largest_file(groups, selection, safe_codec_only)
        }
        SelectStrategy::KeepLargestResolution => {
            mark_all_but_largest_resolution(groups, selection, safe_codec_only)
        }
        SelectStrategy::KeepOldest => mark_all_but_oldest(groups, selection, safe_codec_only),
        SelectStrategy::KeepNewest => mark_all_but_newest(groups, selection, safe_codec_only),
    }
}

/// Keep the scene with the largest single file in each group, mark the rest.
pub fn mark_all_but_largest_file(
    groups: &[DuplicateGroup],
    selection: &mut SelectionState,
    safe_codec_only: bool,
) -> usize {
    let mut marked = 0;
    for group in groups {
        if safe_codec_only && !codec_safe(group) {
            continue;
        }
        let keeper = match largest_file_scene(group) {
            Some(scene) => scene,
            None => continue,
        };
        marked += mark_all_but(group, &keeper.id, selection);
    }
    info!("keep-largest-file: marked {} scenes for deletion", marked);
    marked
}

/// Keep the highest-resolution scene in each group, mark the rest.
///
/// A group where every scene reports the same resolution metric is left
/// untouched: there is nothing to disambiguate.
pub fn mark_all_but_largest_resolution(
    groups: &[DuplicateGroup],
    selection: &mut SelectionState,
    safe_codec_only: bool,
) -> usize {
    let mut marked = 0;
    for group in groups {
        if safe_codec_only && !codec_safe(group) {
            continue;
        }
        if uniform_resolution(group) {
            continue;
        }
        let keeper = match largest_resolution_scene(group) {
            Some(scene) => scene,
            None => continue,
        };
        marked += mark_all_but(group, &keeper.id, selection);
    }
    info!(
        "keep-largest-resolution: marked {} scenes for deletion",
        marked
    );
    marked
}

/// Keep the scene owning the oldest file in each group, mark the rest.
pub fn mark_all_but_oldest(
    groups: &[DuplicateGroup],
    selection: &mut SelectionState,
    safe_codec_only: bool,
) -> usize {
    let marked = mark_all_but_mtime_extreme(groups, selection, safe_codec_only, true);
    info!("keep-oldest: marked {} scenes for deletion", marked);
    marked
}

/// Keep the scene owning the newest file in each group, mark the rest.
pub fn mark_all_but_newest(
    groups: &[DuplicateGroup],
    selection: &mut SelectionState,
    safe_codec_only: bool,
) -> usize {
    let marked = mark_all_but_mtime_extreme(groups, selection, safe_codec_only, false);
    info!("keep-newest: marked {} scenes for deletion", marked);
    marked
}

/// Reset every visible scene's mark. Equivalent to a selection reset
/// restricted to the visible id set; not gated by the codec guard since
/// clearing marks is never destructive.
pub fn clear_marks(groups: &[DuplicateGroup], selection: &mut SelectionState) -> usize {
    let ids: Vec<&str> = groups.iter().flat_map(|g| g.scene_ids()).collect();
    let count = ids.len();
    selection.reset_all(ids);
    debug!("cleared marks across {} visible scenes", count);
    count
}

fn mark_all_but_mtime_extreme(
    groups: &[DuplicateGroup],
    selection: &mut SelectionState,
    safe_codec_only: bool,
    keep_oldest: bool,
) -> usize {
    let mut marked = 0;
    for group in groups {
        if safe_codec_only && !codec_safe(group) {
            continue;
        }
        // No timestamped file means no keeper is determinable
        let keeper = match mtime_extreme_scene(group, keep_oldest) {
            Some(scene) => scene,
            None => continue,
        };
        marked += mark_all_but(group, &keeper.id, selection);
    }
    marked
}

fn mark_all_but(group: &DuplicateGroup, keeper_id: &str, selection: &mut SelectionState) -> usize {
    let mut marked = 0;
    for scene in &group.scenes {
        if scene.id != keeper_id {
            selection.set(&scene.id, true);
            marked += 1;
        }
    }
    marked
}

// Strict `>` against the running best: equal values never replace the
// incumbent, so the first scene in group order wins ties.
fn largest_file_scene(group: &DuplicateGroup) -> Option<&Scene> {
    let mut keeper: Option<&Scene> = None;
    let mut best = 0u64;
    for scene in &group.scenes {
        let size = scene.max_file_size();
        if keeper.is_none() || size > best {
            keeper = Some(scene);
            best = size;
        }
    }
    keeper
}

// Same first-wins tie-break as `largest_file_scene`.
fn largest_resolution_scene(group: &DuplicateGroup) -> Option<&Scene> {
    let mut keeper: Option<&Scene> = None;
    let mut best = 0u64;
    for scene in &group.scenes {
        let metric = scene.max_resolution();
        if keeper.is_none() || metric > best {
            keeper = Some(scene);
            best = metric;
        }
    }
    keeper
}

fn uniform_resolution(group: &DuplicateGroup) -> bool {
    let mut metrics = group.scenes.iter().map(|s| s.max_resolution());
    match metrics.next() {
        Some(first) => metrics.all(|m| m == first),
        None => true,
    }
}

// Scans files in (group order, per-scene file order); untimestamped files
// never compete. Strict comparison keeps the first file seen at a given
// timestamp, and with it the scene that owns it.
fn mtime_extreme_scene(group: &DuplicateGroup, keep_oldest: bool) -> Option<&Scene> {
    let mut keeper: Option<&Scene> = None;
    let mut best: Option<DateTime<Utc>> = None;
    for scene in &group.scenes {
        for file in &scene.files {
            let ts = match file.modified_at {
                Some(ts) => ts,
                None => continue,
            };
            let wins = match best {
                None => true,
                Some(b) => {
                    if keep_oldest {
                        ts < b
                    } else {
                        ts > b
                    }
                }
            };
            if wins {
                best = Some(ts);
                keeper = Some(scene);
            }
        }
    }
    keeper
}
