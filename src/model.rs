use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One physical media file belonging to a scene.
///
/// Zero sizes and dimensions and an empty codec string all mean "unknown" —
/// the matcher reports whatever metadata it has.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaFile {
    pub id: String,
    pub size_bytes: u64,
    pub width: u32,
    pub height: u32,
    pub video_codec: String,
    pub modified_at: Option<DateTime<Utc>>,
}

impl MediaFile {
    /// Pixel count, the resolution metric used for keeper comparisons.
    pub fn resolution(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// A library item the matcher has placed in a duplicate cluster.
///
/// `files` is ordered; the first entry is the primary file used for codec
/// comparisons. `title` is display-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub files: Vec<MediaFile>,
}

impl Scene {
    /// Size of the largest single file attached to this scene.
    pub fn max_file_size(&self) -> u64 {
        self.files.iter().map(|f| f.size_bytes).max().unwrap_or(0)
    }

    /// Highest pixel count across this scene's files.
    pub fn max_resolution(&self) -> u64 {
        self.files.iter().map(|f| f.resolution()).max().unwrap_or(0)
    }

    /// Codec of the primary file; empty when unknown or the scene has no files.
    pub fn primary_codec(&self) -> &str {
        self.files
            .first()
            .map(|f| f.video_codec.as_str())
            .unwrap_or("")
    }
}

/// One duplicate cluster, scenes in the order the matcher produced them.
/// That order is stable and is what first-seen-wins tie-breaks refer to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuplicateGroup {
    pub scenes: Vec<Scene>,
}

impl DuplicateGroup {
    pub fn new(scenes: Vec<Scene>) -> Self {
        Self { scenes }
    }

    /// Sum of every file's size across every scene in the group.
    pub fn total_size_bytes(&self) -> u64 {
        self.scenes
            .iter()
            .flat_map(|s| &s.files)
            .map(|f| f.size_bytes)
            .sum()
    }

    pub fn contains(&self, scene_id: &str) -> bool {
        self.scenes.iter().any(|s| s.id == scene_id)
    }

    pub fn scene_ids(&self) -> impl Iterator<Item = &str> {
        self.scenes.iter().map(|s| s.id.as_str())
    }
}
