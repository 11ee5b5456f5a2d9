//! Headless video frontend backed by an in-memory framebuffer.
//!
//! Useful for tests and for running without a display. Pixels are addressed
//! in logical coordinates; each one covers a `scale x scale` block of the
//! physical buffer.

use crate::color::Color;
use crate::video::frontend::{Capabilities, VideoFrontend, VideoSpecs, Window};
use anyhow::{anyhow, bail, Result};
use log::{debug, info, trace, warn};

/// Largest physical framebuffer, in pixels, the frontend will allocate.
pub const MAX_FRAMEBUFFER_PIXELS: usize = 1 << 26;

#[derive(Debug, Default)]
pub struct HeadlessFrontend {
    width: u32,
    height: u32,
    scale: u32,
    framebuffer: Vec<Color>,
    // Bumped on every init/resize so each surface gets a distinct handle.
    generation: u64,
    frames: u64,
    lock_depth: u32,
}

impl HeadlessFrontend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Logical size of the current surface.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Physical framebuffer, row-major, `width * scale` pixels per row.
    pub fn pixels(&self) -> &[Color] {
        &self.framebuffer
    }

    /// Frames presented since the last init.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn is_locked(&self) -> bool {
        self.lock_depth > 0
    }

    fn allocate(&mut self, width: u32, height: u32, scale: u32) -> Result<Window> {
        let len = (width as usize)
            .checked_mul(scale as usize)
            .zip((height as usize).checked_mul(scale as usize))
            .and_then(|(w, h)| w.checked_mul(h))
            .filter(|&len| len <= MAX_FRAMEBUFFER_PIXELS)
            .ok_or_else(|| {
                anyhow!(
                    "framebuffer of {}x{} at scale {} exceeds {} pixels",
                    width,
                    height,
                    scale,
                    MAX_FRAMEBUFFER_PIXELS
                )
            })?;
        self.width = width;
        self.height = height;
        self.scale = scale;
        self.framebuffer = vec![Color::BLACK; len];
        self.generation += 1;
        Ok(Window::new(self.generation))
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if self.scale == 0 || x >= self.width || y >= self.height {
            return None;
        }
        let stride = self.width as usize * self.scale as usize;
        let px = x as usize * self.scale as usize;
        let py = y as usize * self.scale as usize;
        Some(py * stride + px)
    }
}

impl VideoFrontend for HeadlessFrontend {
    fn name(&self) -> &str {
        "headless"
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::all()
    }

    fn input(&self) -> Option<&str> {
        Some("headless")
    }

    fn init(&mut self, specs: &VideoSpecs) -> Result<Window> {
        if specs.scale == 0 {
            bail!("scale must be at least 1");
        }
        let window = self.allocate(specs.width, specs.height, specs.scale)?;
        self.frames = 0;
        self.lock_depth = 0;
        info!(
            "HeadlessFrontend: Init {}x{} (scale {}), window {:?}",
            specs.width, specs.height, specs.scale, window
        );
        Ok(window)
    }

    fn update(&mut self) {
        self.frames += 1;
        trace!("HeadlessFrontend: frame {}", self.frames);
    }

    fn lock(&mut self) {
        self.lock_depth += 1;
    }

    fn unlock(&mut self) {
        if self.lock_depth == 0 {
            warn!("HeadlessFrontend: unlock without matching lock");
            return;
        }
        self.lock_depth -= 1;
    }

    fn set_size(&mut self, width: u32, height: u32) -> Option<Window> {
        match self.allocate(width, height, self.scale) {
            Ok(window) => {
                debug!(
                    "HeadlessFrontend: SetSize {}x{}, window {:?}",
                    width, height, window
                );
                Some(window)
            }
            Err(e) => {
                warn!("HeadlessFrontend: keeping current surface: {:#}", e);
                Some(Window::new(self.generation))
            }
        }
    }

    fn get_pixel(&self, x: u32, y: u32) -> Color {
        self.index(x, y)
            .map(|i| self.framebuffer[i])
            .unwrap_or(Color::BLACK)
    }

    fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        if self.index(x, y).is_none() {
            return;
        }
        let scale = self.scale as usize;
        let stride = self.width as usize * scale;
        let (px, py) = (x as usize * scale, y as usize * scale);
        for row in self.framebuffer.chunks_exact_mut(stride).skip(py).take(scale) {
            row[px..px + scale].fill(color);
        }
    }

    fn deinit(&mut self) {
        info!("HeadlessFrontend: Deinit after {} frames", self.frames);
        self.framebuffer = Vec::new();
        self.width = 0;
        self.height = 0;
    }
}
