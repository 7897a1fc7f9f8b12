use tracing::debug;

use crate::config::AppConfig;
use crate::error::Error;
use crate::heuristics::{self, SelectStrategy};
use crate::merge;
use crate::model::{DuplicateGroup, Scene};
use crate::ordering;
use crate::selection::SelectionState;

/// One operator's review of the duplicate group list: the matcher query
/// parameters, the page window over the ordered groups, and the marks.
///
/// Changing a matcher threshold invalidates the held list — the session
/// goes stale, and the host runs the matcher query and hands the result to
/// [`install_groups`](ReviewSession::install_groups). Changing the page or
/// page size only reslices the held list. Either kind of change first
/// resets the marks that were visible before it, so stale checkboxes never
/// carry over into a view the operator has not looked at.
pub struct ReviewSession {
    hash_distance: u32,
    duration_diff_seconds: f64,
    page: usize,
    page_size: usize,
    ordered: Vec<DuplicateGroup>,
    selection: SelectionState,
    stale: bool,
}

impl ReviewSession {
    pub fn new(config: &AppConfig) -> Result<Self, Error> {
        if config.page_size == 0 {
            return Err(Error::InvalidPageSize);
        }
        Ok(Self {
            hash_distance: config.hash_distance,
            duration_diff_seconds: config.duration_diff_seconds,
            page: 1,
            page_size: config.page_size,
            ordered: Vec::new(),
            selection: SelectionState::new(),
            stale: true,
        })
    }

    pub fn hash_distance(&self) -> u32 {
        self.hash_distance
    }

    pub fn duration_diff_seconds(&self) -> f64 {
        self.duration_diff_seconds
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// True when the held group list no longer matches the session's
    /// matcher parameters and the host must query the matcher again.
    pub fn needs_refetch(&self) -> bool {
        self.stale
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Mutable access for manual per-scene checkbox toggles.
    pub fn selection_mut(&mut self) -> &mut SelectionState {
        &mut self.selection
    }

    pub fn group_count(&self) -> usize {
        self.ordered.len()
    }

    /// Number of pages the ordered list spans at the current page size.
    pub fn page_count(&self) -> usize {
        (self.ordered.len() + self.page_size - 1) / self.page_size
    }

    /// Tighten or loosen the perceptual-hash distance threshold.
    /// A changed value resets the visible marks, jumps back to page 1, and
    /// leaves the session stale until new groups are installed.
    pub fn set_hash_distance(&mut self, distance: u32) {
        if distance == self.hash_distance {
            return;
        }
        self.reset_visible_marks();
        self.hash_distance = distance;
        self.page = 1;
        self.stale = true;
        debug!("hash distance set to {}, session stale", distance);
    }

    /// Change the playback-duration closeness threshold (-1.0 = any).
    /// Same invalidation behavior as [`set_hash_distance`](Self::set_hash_distance).
    pub fn set_duration_diff(&mut self, seconds: f64) {
        if seconds == self.duration_diff_seconds {
            return;
        }
        self.reset_visible_marks();
        self.duration_diff_seconds = seconds;
        self.page = 1;
        self.stale = true;
        debug!("duration diff set to {}s, session stale", seconds);
    }

    /// Move to another page of the held list. Resets the marks that were
    /// visible on the page being left; no refetch.
    pub fn set_page(&mut self, page: usize) -> Result<(), Error> {
        if page == 0 {
            return Err(Error::InvalidPageIndex);
        }
        if page == self.page {
            return Ok(());
        }
        self.reset_visible_marks();
        self.page = page;
        Ok(())
    }

    pub fn set_page_size(&mut self, page_size: usize) -> Result<(), Error> {
        if page_size == 0 {
            return Err(Error::InvalidPageSize);
        }
        if page_size == self.page_size {
            return Ok(());
        }
        self.reset_visible_marks();
        self.page_size = page_size;
        Ok(())
    }

    /// Install a freshly fetched group list. Orders it largest-total-first
    /// and clears the stale flag.
    pub fn install_groups(&mut self, groups: Vec<DuplicateGroup>) {
        self.ordered = ordering::order(groups);
        self.stale = false;
        debug!("installed {} duplicate groups", self.ordered.len());
    }

    /// The current page slice of the ordered list.
    pub fn visible(&self) -> &[DuplicateGroup] {
        // page and page_size are validated at every entry point, so the
        // slice cannot fail
        ordering::paginate(&self.ordered, self.page, self.page_size).unwrap_or(&[])
    }

    /// Ids of every scene on the current page.
    pub fn visible_ids(&self) -> Vec<String> {
        self.visible()
            .iter()
            .flat_map(|g| g.scene_ids())
            .map(str::to_string)
            .collect()
    }

    /// Run a bulk-selection strategy over the currently visible groups.
    /// Returns the number of scenes the strategy touched.
    pub fn apply(&mut self, strategy: SelectStrategy, safe_codec_only: bool) -> usize {
        let visible =
            ordering::paginate(&self.ordered, self.page, self.page_size).unwrap_or(&[]);
        heuristics::apply_strategy(strategy, visible, &mut self.selection, safe_codec_only)
    }

    /// Resolve merge ordering for the `group_index`-th visible group,
    /// anchored on `anchor_id`. Element 0 of the result is the merge
    /// destination, the rest are sources.
    pub fn resolve_merge_for(
        &self,
        group_index: usize,
        anchor_id: &str,
    ) -> Result<Vec<Scene>, Error> {
        let group = self
            .visible()
            .get(group_index)
            .ok_or(Error::VisibleGroupOutOfRange(group_index))?;
        merge::resolve_merge(group, anchor_id, &self.selection)
    }

    /// Called by the host after the scene store confirms a delete or merge
    /// succeeded. Visible marks are cleared and the session goes stale so
    /// the now-changed group list is refetched. The engine never assumes
    /// success on its own.
    pub fn confirm_destructive(&mut self) {
        self.reset_visible_marks();
        self.stale = true;
        debug!("destructive action confirmed, session stale");
    }

    fn reset_visible_marks(&mut self) {
        let ids = self.visible_ids();
        self.selection.reset_all(&ids);
    }
}
