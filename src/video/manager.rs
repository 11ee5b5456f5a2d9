// src/video/manager.rs
//! VideoManager - selects one registered frontend and forwards video calls to it.

use crate::color::Color;
use crate::config::VideoConfig;
use crate::input::InputBinding;
use crate::video::error::{VideoError, VideoResult};
use crate::video::frontend::{Capabilities, VideoFrontend, VideoSpecs};
use crate::video::registry::FrontendRegistry;
use crate::video::state::DisplayState;
use log::{debug, error, info, warn};

/// Owns the frontend registry, the display state and the input binding, and
/// tracks which frontend (at most one) is active.
///
/// ## Lifecycle
/// - `init` selects the configured frontend, creates its surface and binds
///   input to it.
/// - Per-frame calls forward to the active frontend when it supports them and
///   do nothing otherwise.
/// - `deinit` (or dropping the manager) tears the frontend and input down;
///   `init` may then be called again.
pub struct VideoManager<I: InputBinding> {
    registry: FrontendRegistry,
    config: VideoConfig,
    state: DisplayState,
    input: I,
    active: Option<usize>,
}

impl<I: InputBinding> VideoManager<I> {
    pub fn new(registry: FrontendRegistry, config: VideoConfig, input: I) -> Self {
        Self {
            registry,
            config,
            state: DisplayState::default(),
            input,
            active: None,
        }
    }

    /// Select and initialize the configured frontend.
    ///
    /// `specs.scale` is set from the configuration before the frontend sees
    /// it. Without a configured frontend this succeeds with video disabled.
    /// If the input binding fails, the frontend stays active and must be
    /// released with `deinit`.
    pub fn init(&mut self, specs: &mut VideoSpecs) -> VideoResult<()> {
        if self.active.is_some() {
            error!("Video frontend already initialized!");
            return Err(VideoError::AlreadyInitialized);
        }

        self.state.set_size(specs.width, specs.height);

        let Some(name) = self.config.frontend.as_deref() else {
            warn!("No video frontend selected!");
            return Ok(());
        };

        let scale = self.config.scale;
        if scale <= 0 {
            error!("Scaling factor should be positive! (got {})", scale);
            return Err(VideoError::InvalidScale(scale));
        }

        self.state.clear_updated();

        let Some((index, frontend)) = self.registry.find_mut(name) else {
            error!("Video frontend \"{}\" not recognized!", name);
            return Err(VideoError::FrontendNotFound(name.to_owned()));
        };

        let window = if frontend.capabilities().contains(Capabilities::INIT) {
            specs.scale = scale as u32;
            match frontend.init(specs) {
                Ok(window) => Some(window),
                Err(source) => {
                    error!("Video frontend \"{}\" failed to initialize: {:#}", name, source);
                    return Err(VideoError::FrontendInitFailed {
                        name: name.to_owned(),
                        source,
                    });
                }
            }
        } else {
            None
        };

        self.active = Some(index);
        info!(
            "VideoManager: \"{}\" active - {}x{} (scale {}), window {:?}",
            name, specs.width, specs.height, scale, window
        );

        self.input
            .init(frontend.input(), window)
            .map_err(VideoError::Input)
    }

    /// Mark a new frame and present it.
    pub fn update(&mut self) {
        self.state.mark_updated();

        let Some(frontend) = self.frontend_mut() else {
            return;
        };
        if frontend.capabilities().contains(Capabilities::UPDATE) {
            frontend.update();
        }

        self.input.update();
    }

    /// Whether a frame was produced since the last call. Resets the flag.
    pub fn take_updated(&mut self) -> bool {
        self.state.take_updated()
    }

    pub fn lock(&mut self) {
        if let Some(frontend) = self.capable_mut(Capabilities::LOCK) {
            frontend.lock();
        }
    }

    pub fn unlock(&mut self) {
        if let Some(frontend) = self.capable_mut(Capabilities::UNLOCK) {
            frontend.unlock();
        }
    }

    pub fn size(&self) -> (u32, u32) {
        self.state.size()
    }

    /// Change the logical size and, if the frontend can resize, rebind input
    /// to the surface it returns.
    pub fn set_size(&mut self, width: u32, height: u32) {
        self.state.set_size(width, height);

        let Some(frontend) = self.capable_mut(Capabilities::RESIZE) else {
            return;
        };
        let window = frontend.set_size(width, height);
        debug!(
            "VideoManager: resized to {}x{}, window {:?}",
            width, height, window
        );
        self.input.set_window(window);
    }

    /// Pixel at `(x, y)`, or black when no frontend can answer.
    pub fn get_pixel(&self, x: u32, y: u32) -> Color {
        self.frontend()
            .filter(|fe| fe.capabilities().contains(Capabilities::GET_PIXEL))
            .map(|fe| fe.get_pixel(x, y))
            .unwrap_or(Color::BLACK)
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        if let Some(frontend) = self.capable_mut(Capabilities::SET_PIXEL) {
            frontend.set_pixel(x, y, color);
        }
    }

    /// Release the active frontend and unbind input.
    pub fn deinit(&mut self) {
        let Some(frontend) = self.frontend_mut() else {
            return;
        };
        info!("VideoManager: deinitializing \"{}\"", frontend.name());
        if frontend.capabilities().contains(Capabilities::DEINIT) {
            frontend.deinit();
        }
        self.input.deinit();
        self.active = None;
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Name of the active frontend.
    pub fn active_name(&self) -> Option<&str> {
        self.frontend().map(|fe| fe.name())
    }

    pub fn config(&self) -> &VideoConfig {
        &self.config
    }

    /// Replace the configuration. Refused while a frontend is active.
    pub fn set_config(&mut self, config: VideoConfig) -> VideoResult<()> {
        if self.active.is_some() {
            return Err(VideoError::AlreadyInitialized);
        }
        self.config = config;
        Ok(())
    }

    pub fn registry(&self) -> &FrontendRegistry {
        &self.registry
    }

    /// Add a frontend. Existing entries keep their position.
    pub fn register(&mut self, frontend: Box<dyn VideoFrontend>) {
        self.registry.register(frontend);
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    fn frontend(&self) -> Option<&dyn VideoFrontend> {
        self.registry.get(self.active?)
    }

    fn frontend_mut(&mut self) -> Option<&mut (dyn VideoFrontend + 'static)> {
        self.registry.get_mut(self.active?)
    }

    fn capable_mut(&mut self, cap: Capabilities) -> Option<&mut (dyn VideoFrontend + 'static)> {
        self.frontend_mut()
            .filter(|fe| fe.capabilities().contains(cap))
    }
}

impl<I: InputBinding> Drop for VideoManager<I> {
    fn drop(&mut self) {
        self.deinit();
    }
}
