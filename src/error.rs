use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("page size must be positive")]
    InvalidPageSize,

    #[error("page index is 1-based; 0 is not a page")]
    InvalidPageIndex,

    #[error("anchor scene '{0}' is not a member of the group")]
    AnchorNotInGroup(String),

    #[error("no visible group at index {0}")]
    VisibleGroupOutOfRange(usize),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("matcher error: {0}")]
    Matcher(String),

    #[error("scene store error: {0}")]
    Store(String),
}
