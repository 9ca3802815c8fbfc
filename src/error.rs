use thiserror::Error;

/// A failure which prevents a route from being computed at all.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("junction not found: {0}")]
    JunctionNotFound(String),
}

/// A failure to read a network description or configuration file.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
