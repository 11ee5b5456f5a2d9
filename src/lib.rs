// src/lib.rs

//! Runtime video output coordinator.
//!
//! A [`video::VideoManager`] picks one frontend out of a
//! [`video::FrontendRegistry`] by the name in [`config::VideoConfig`],
//! forwards frame, pixel and resize calls to it, and keeps the input
//! subsystem ([`input::InputBinding`]) bound to the frontend's current
//! surface.

pub mod color;
pub mod config;
pub mod input;
pub mod video;

pub use color::Color;
pub use config::VideoConfig;
pub use input::{InputBinding, InputSession};
pub use video::{
    Capabilities, FrontendRegistry, VideoError, VideoFrontend, VideoManager, VideoResult,
    VideoSpecs, Window,
};
