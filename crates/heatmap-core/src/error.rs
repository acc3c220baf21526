// File: crates/heatmap-core/src/error.rs
// Summary: Error type shared by loading, validation and rendering.

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Raised synchronously by `HeatMap::new` when the layout is unusable.
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("invalid dataset: {0}")]
    Dataset(String),

    #[error("fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("malformed dataset JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn dataset(msg: impl Into<String>) -> Self {
        Self::Dataset(msg.into())
    }
}
