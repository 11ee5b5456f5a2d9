// src/video/registry.rs
//! Ordered collection of the video frontends available to a `VideoManager`.

use crate::video::frontend::VideoFrontend;
use crate::video::frontends::{HeadlessFrontend, NullFrontend};
use log::debug;

/// Video frontends in registration order.
///
/// Names are expected to be unique but are not enforced; lookup returns the
/// first registered match.
#[derive(Default)]
pub struct FrontendRegistry {
    frontends: Vec<Box<dyn VideoFrontend>>,
}

impl FrontendRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every frontend bundled with this crate.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(NullFrontend::new()));
        registry.register(Box::new(HeadlessFrontend::new()));
        registry
    }

    pub fn register(&mut self, frontend: Box<dyn VideoFrontend>) {
        debug!("Registering video frontend \"{}\"", frontend.name());
        self.frontends.push(frontend);
    }

    /// First frontend named exactly `name`, with its index.
    pub fn find_mut(&mut self, name: &str) -> Option<(usize, &mut (dyn VideoFrontend + 'static))> {
        self.frontends
            .iter_mut()
            .enumerate()
            .find(|(_, fe)| fe.name() == name)
            .map(|(index, fe)| (index, fe.as_mut()))
    }

    pub fn get(&self, index: usize) -> Option<&dyn VideoFrontend> {
        self.frontends.get(index).map(|fe| fe.as_ref())
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut (dyn VideoFrontend + 'static)> {
        self.frontends.get_mut(index).map(|fe| fe.as_mut())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.frontends.iter().map(|fe| fe.name())
    }

    pub fn len(&self) -> usize {
        self.frontends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frontends.is_empty()
    }
}

impl FromIterator<Box<dyn VideoFrontend>> for FrontendRegistry {
    fn from_iter<T: IntoIterator<Item = Box<dyn VideoFrontend>>>(iter: T) -> Self {
        let mut registry = Self::new();
        for frontend in iter {
            registry.register(frontend);
        }
        registry
    }
}
