// src/video/frontends/mod.rs
//! Video frontends bundled with the crate.

pub mod headless;
pub mod null;

pub use headless::HeadlessFrontend;
pub use null::NullFrontend;
