//! Frontend that accepts initialization and discards everything else.

use crate::video::frontend::{Capabilities, VideoFrontend, VideoSpecs, Window};
use anyhow::Result;
use log::info;

/// Handle returned by every `NullFrontend::init`.
pub const NULL_WINDOW: Window = Window::new(0);

#[derive(Debug, Default)]
pub struct NullFrontend;

impl NullFrontend {
    pub fn new() -> Self {
        NullFrontend
    }
}

impl VideoFrontend for NullFrontend {
    fn name(&self) -> &str {
        "null"
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::INIT
    }

    fn init(&mut self, specs: &VideoSpecs) -> Result<Window> {
        info!(
            "NullFrontend: Init {}x{} (scale {})",
            specs.width, specs.height, specs.scale
        );
        Ok(NULL_WINDOW)
    }
}
