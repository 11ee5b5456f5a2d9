// src/video/state.rs
//! Logical display geometry and the one-shot "frame updated" flag.

/// Display state tracked by the `VideoManager` regardless of which (if any)
/// frontend is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayState {
    width: u32,
    height: u32,
    updated: bool,
}

impl DisplayState {
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    pub fn mark_updated(&mut self) {
        self.updated = true;
    }

    pub fn clear_updated(&mut self) {
        self.updated = false;
    }

    /// Returns the flag and resets it, so each update is observed once.
    pub fn take_updated(&mut self) -> bool {
        std::mem::take(&mut self.updated)
    }
}
