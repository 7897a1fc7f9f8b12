use tracing::debug;

use crate::error::Error;
use crate::model::DuplicateGroup;

/// Sort groups by total file size, largest first.
///
/// The sort is stable: groups with equal totals keep their matcher order,
/// so repeated runs over the same input slice identically.
pub fn order(mut groups: Vec<DuplicateGroup>) -> Vec<DuplicateGroup> {
    groups.sort_by(|a, b| b.total_size_bytes().cmp(&a.total_size_bytes()));
    debug!("ordered {} duplicate groups by total size", groups.len());
    groups
}

/// Slice out one 1-based page of the ordered list, clipped to bounds.
///
/// A page past the end is empty, not an error. A zero page size or a zero
/// page index is a caller bug and fails loudly.
pub fn paginate(
    ordered: &[DuplicateGroup],
    page: usize,
    page_size: usize,
) -> Result<&[DuplicateGroup], Error> {
    if page_size == 0 {
        return Err(Error::InvalidPageSize);
    }
    if page == 0 {
        return Err(Error::InvalidPageIndex);
    }
    let start = (page - 1).saturating_mul(page_size).min(ordered.len());
    let end = page.saturating_mul(page_size).min(ordered.len());
    Ok(&ordered[start..end])
}
