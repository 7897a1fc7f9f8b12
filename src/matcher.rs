use crate::error::Error;
use crate::model::DuplicateGroup;

/// Query seam for the external duplicate matcher.
///
/// The matcher clusters scenes by perceptual-hash distance and playback
/// duration closeness. No ordering of the result is assumed — the engine
/// re-sorts whatever comes back.
pub trait DuplicateMatcher {
    fn find_duplicate_groups(
        &self,
        hash_distance: u32,
        duration_diff_seconds: f64,
    ) -> Result<Vec<DuplicateGroup>, Error>;
}

/// Execution seam for destructive actions. The engine only decides which
/// scenes to delete or merge; an implementation of this trait executes,
/// and the host wires the two together.
pub trait SceneStore {
    fn delete_scenes(&self, ids: &[String]) -> Result<(), Error>;

    /// Merge `sources` into `destination`. Returns the surviving scene id.
    fn merge_scenes(&self, destination: &str, sources: &[String]) -> Result<String, Error>;
}
