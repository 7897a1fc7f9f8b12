pub mod config;
pub mod error;
pub mod heuristics;
pub mod matcher;
pub mod merge;
pub mod model;
pub mod ordering;
pub mod selection;
pub mod session;

pub use config::AppConfig;
pub use error::Error;
pub use heuristics::SelectStrategy;
pub use matcher::{DuplicateMatcher, SceneStore};
pub use model::{DuplicateGroup, MediaFile, Scene};
pub use selection::SelectionState;
pub use session::ReviewSession;
