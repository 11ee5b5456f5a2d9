// src/video/frontend.rs
//! VideoFrontend trait - the capability set every video frontend exposes.
//!
//! A frontend advertises which operations it really implements through
//! `capabilities()`. The manager only calls an operation whose bit is set;
//! every operation still has a no-op default so frontends implement just
//! the primitives they support.
//!
//! ## Lifecycle
//! 1. Registration - frontend is boxed into a `FrontendRegistry`
//! 2. `init(specs)` - create the surface, return its `Window`
//! 3. Per-frame calls - `update`, `lock`/`unlock`, pixel access, `set_size`
//! 4. `deinit()` - release the surface (the frontend itself stays registered)

use crate::color::Color;
use anyhow::{anyhow, Result};
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Operations a frontend actually implements.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct Capabilities: u16 {
        const INIT      = 1 << 0;
        const UPDATE    = 1 << 1;
        const LOCK      = 1 << 2;
        const UNLOCK    = 1 << 3;
        const RESIZE    = 1 << 4;
        const GET_PIXEL = 1 << 5;
        const SET_PIXEL = 1 << 6;
        const DEINIT    = 1 << 7;
    }
}

/// Requested output geometry.
///
/// `width`/`height` come from the caller. `scale` is overwritten by the
/// manager with the configured scale factor before the frontend sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoSpecs {
    pub width: u32,
    pub height: u32,
    pub scale: u32,
}

impl VideoSpecs {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            scale: 1,
        }
    }
}

/// Opaque handle to a frontend-owned rendering surface.
///
/// The manager never interprets it; it only relays it to the input binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Window(u64);

impl Window {
    pub const fn new(raw: u64) -> Self {
        Window(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// A swappable video output implementation.
pub trait VideoFrontend {
    /// Registry lookup key. Matched exactly against the configured name.
    fn name(&self) -> &str;

    /// Which of the optional operations below are implemented.
    fn capabilities(&self) -> Capabilities;

    /// Name of the input frontend paired with this video frontend, if any.
    fn input(&self) -> Option<&str> {
        None
    }

    /// Create the rendering surface.
    ///
    /// Only called when `Capabilities::INIT` is set. Any error aborts
    /// initialization and the frontend is not activated.
    fn init(&mut self, _specs: &VideoSpecs) -> Result<Window> {
        Err(anyhow!("{} does not implement init", self.name()))
    }

    /// Present the current frame.
    fn update(&mut self) {}

    fn lock(&mut self) {}

    fn unlock(&mut self) {}

    /// Resize the surface, returning the window input should now follow.
    fn set_size(&mut self, _width: u32, _height: u32) -> Option<Window> {
        None
    }

    /// Read a pixel. Coordinates are not bounds checked by the caller.
    fn get_pixel(&self, _x: u32, _y: u32) -> Color {
        Color::BLACK
    }

    /// Write a pixel. Coordinates are not bounds checked by the caller.
    fn set_pixel(&mut self, _x: u32, _y: u32, _color: Color) {}

    fn deinit(&mut self) {}
}
