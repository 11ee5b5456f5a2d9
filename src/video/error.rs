// src/video/error.rs
//! Failures reported by `VideoManager::init`.
//!
//! Every other manager operation is total: with no active frontend or a
//! missing capability it silently does nothing.

pub type VideoResult<T> = Result<T, VideoError>;

#[derive(thiserror::Error, Debug)]
pub enum VideoError {
    /// A frontend is already active; `deinit` it first.
    #[error("video frontend already initialized")]
    AlreadyInitialized,

    /// The configured scale factor is zero or negative.
    #[error("scaling factor should be positive, got {0}")]
    InvalidScale(i32),

    /// No registered frontend carries the configured name.
    #[error("video frontend \"{0}\" not recognized")]
    FrontendNotFound(String),

    /// The frontend's own `init` failed. It was not activated.
    #[error("video frontend \"{name}\" failed to initialize")]
    FrontendInitFailed {
        name: String,
        #[source]
        source: anyhow::Error,
    },

    /// The input binding refused the new surface.
    #[error("input initialization failed")]
    Input(#[source] anyhow::Error),
}
