// src/video/mod.rs
//! Video output with swappable frontends.
//!
//! - VideoFrontend: capability set implemented by each frontend
//! - FrontendRegistry: frontends available for selection
//! - VideoManager: selection, lifecycle and call forwarding
//! - DisplayState: logical size and the one-shot updated flag

pub mod error;
pub mod frontend;
pub mod frontends;
pub mod manager;
pub mod registry;
pub mod state;

pub use error::{VideoError, VideoResult};
pub use frontend::{Capabilities, VideoFrontend, VideoSpecs, Window};
pub use frontends::{HeadlessFrontend, NullFrontend};
pub use manager::VideoManager;
pub use registry::FrontendRegistry;
pub use state::DisplayState;

#[cfg(test)]
mod mock;
