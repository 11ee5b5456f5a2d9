// src/video/mock.rs

use crate::color::Color;
use crate::input::InputBinding;
use crate::video::frontend::{Capabilities, VideoFrontend, VideoSpecs, Window};
use anyhow::{anyhow, Result};
use std::cell::RefCell;
use std::rc::Rc;

/// Everything that crossed the frontend or input boundary, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Init { frontend: String, specs: VideoSpecs },
    Update(String),
    Lock(String),
    Unlock(String),
    SetSize { frontend: String, width: u32, height: u32 },
    GetPixel(String, u32, u32),
    SetPixel(String, u32, u32, Color),
    Deinit(String),
    InputInit(Option<String>, Option<Window>),
    InputUpdate,
    InputSetWindow(Option<Window>),
    InputDeinit,
}

pub type CallLog = Rc<RefCell<Vec<Call>>>;

pub fn call_log() -> CallLog {
    Rc::new(RefCell::new(Vec::new()))
}

pub struct MockFrontend {
    name: String,
    caps: Capabilities,
    input: Option<String>,
    fail_init: bool,
    next_window: u64,
    pixel: Color,
    log: CallLog,
}

impl MockFrontend {
    pub fn new(name: &str, caps: Capabilities, log: &CallLog) -> Self {
        Self {
            name: name.to_string(),
            caps,
            input: None,
            fail_init: false,
            next_window: 100,
            pixel: Color::new(10, 20, 30),
            log: Rc::clone(log),
        }
    }

    pub fn with_input(mut self, input: &str) -> Self {
        self.input = Some(input.to_string());
        self
    }

    pub fn failing_init(mut self) -> Self {
        self.fail_init = true;
        self
    }

    /// First window id handed out; later ones count up from it.
    pub fn with_first_window(mut self, raw: u64) -> Self {
        self.next_window = raw;
        self
    }

    fn record(&self, call: Call) {
        self.log.borrow_mut().push(call);
    }

    fn fresh_window(&mut self) -> Window {
        let window = Window::new(self.next_window);
        self.next_window += 1;
        window
    }
}

impl VideoFrontend for MockFrontend {
    fn name(&self) -> &str {
        &self.name
    }

    fn capabilities(&self) -> Capabilities {
        self.caps
    }

    fn input(&self) -> Option<&str> {
        self.input.as_deref()
    }

    fn init(&mut self, specs: &VideoSpecs) -> Result<Window> {
        self.record(Call::Init {
            frontend: self.name.clone(),
            specs: *specs,
        });
        if self.fail_init {
            return Err(anyhow!("no display available"));
        }
        Ok(self.fresh_window())
    }

    fn update(&mut self) {
        self.record(Call::Update(self.name.clone()));
    }

    fn lock(&mut self) {
        self.record(Call::Lock(self.name.clone()));
    }

    fn unlock(&mut self) {
        self.record(Call::Unlock(self.name.clone()));
    }

    fn set_size(&mut self, width: u32, height: u32) -> Option<Window> {
        self.record(Call::SetSize {
            frontend: self.name.clone(),
            width,
            height,
        });
        Some(self.fresh_window())
    }

    fn get_pixel(&self, x: u32, y: u32) -> Color {
        self.record(Call::GetPixel(self.name.clone(), x, y));
        self.pixel
    }

    fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        self.record(Call::SetPixel(self.name.clone(), x, y, color));
    }

    fn deinit(&mut self) {
        self.record(Call::Deinit(self.name.clone()));
    }
}

pub struct MockInput {
    fail_init: bool,
    log: CallLog,
}

impl MockInput {
    pub fn new(log: &CallLog) -> Self {
        Self {
            fail_init: false,
            log: Rc::clone(log),
        }
    }

    pub fn failing_init(mut self) -> Self {
        self.fail_init = true;
        self
    }
}

impl InputBinding for MockInput {
    fn init(&mut self, input: Option<&str>, window: Option<Window>) -> Result<()> {
        self.log
            .borrow_mut()
            .push(Call::InputInit(input.map(str::to_string), window));
        if self.fail_init {
            return Err(anyhow!("input device busy"));
        }
        Ok(())
    }

    fn update(&mut self) {
        self.log.borrow_mut().push(Call::InputUpdate);
    }

    fn set_window(&mut self, window: Option<Window>) {
        self.log.borrow_mut().push(Call::InputSetWindow(window));
    }

    fn deinit(&mut self) {
        self.log.borrow_mut().push(Call::InputDeinit);
    }
}
