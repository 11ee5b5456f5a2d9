// src/input/mod.rs
//
// Input side of the video lifecycle. The video manager binds the active
// frontend's surface here on init, ticks it every frame, rebinds it on
// resize and unbinds it on deinit.

use crate::video::Window;
use anyhow::{bail, Result};
use log::{debug, info, trace};

/// The calls the video manager makes into the input subsystem.
pub trait InputBinding {
    /// Bind the input frontend named `input` to `window`.
    ///
    /// The result decides whether video initialization as a whole succeeds.
    fn init(&mut self, input: Option<&str>, window: Option<Window>) -> Result<()>;

    /// Called once per presented frame.
    fn update(&mut self);

    /// The surface changed after a resize.
    fn set_window(&mut self, window: Option<Window>);

    fn deinit(&mut self);
}

/// Records which input frontend is bound to which surface.
///
/// Event handling lives elsewhere; this only keeps the binding consistent
/// with the video manager's lifecycle.
#[derive(Debug, Default)]
pub struct InputSession {
    input: Option<String>,
    window: Option<Window>,
    bound: bool,
    ticks: u64,
}

impl InputSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_bound(&self) -> bool {
        self.bound
    }

    /// Input frontend name given at bind time.
    pub fn input(&self) -> Option<&str> {
        self.input.as_deref()
    }

    pub fn window(&self) -> Option<Window> {
        self.window
    }

    /// Frames seen since the last bind.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl InputBinding for InputSession {
    fn init(&mut self, input: Option<&str>, window: Option<Window>) -> Result<()> {
        if self.bound {
            bail!("input already bound to {:?}", self.window);
        }
        info!(
            "InputSession: binding input {:?} to window {:?}",
            input, window
        );
        self.input = input.map(str::to_owned);
        self.window = window;
        self.bound = true;
        self.ticks = 0;
        Ok(())
    }

    fn update(&mut self) {
        if self.bound {
            self.ticks += 1;
            trace!("InputSession: tick {}", self.ticks);
        }
    }

    fn set_window(&mut self, window: Option<Window>) {
        debug!("InputSession: window changed {:?} -> {:?}", self.window, window);
        self.window = window;
    }

    fn deinit(&mut self) {
        info!("InputSession: unbinding input {:?}", self.input);
        *self = Self::default();
    }
}
