//! Native window, event loop and window-backed pixel surface
//!
//! winit delivers events; each redraw runs exactly one simulation tick with
//! the events gathered since the previous one. Presentation is vsynced, which
//! paces the loop.

use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use super::clock::SystemClock;
use super::input::{InputEvent, window_to_frame};
use crate::driver::{LoopControl, Simulation};
use crate::error::{FrameError, InitError};
use crate::renderer::{Framebuffer, FramebufferLock, GpuPresenter, PixelFormat, PixelSurface, Rect};
use crate::settings::Settings;

/// Software framebuffer presented through the GPU
pub struct WindowSurface {
    frame: Framebuffer,
    presenter: GpuPresenter,
}

impl PixelSurface for WindowSurface {
    type Lock<'a> = FramebufferLock<'a>;

    fn pixel_format(&self) -> PixelFormat {
        self.frame.pixel_format()
    }

    fn fill_rect(&mut self, rect: Option<Rect>, color: u32) {
        self.frame.fill_rect(rect, color);
    }

    fn lock(&mut self) -> Result<Self::Lock<'_>, FrameError> {
        self.frame.lock()
    }

    fn present(&mut self) -> Result<(), FrameError> {
        match self.presenter.present(self.frame.pixels()) {
            Ok(()) => Ok(()),
            Err(e @ (wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated)) => {
                self.presenter.reconfigure();
                Err(e.into())
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Window, surface and simulation, created on first resume
struct Running {
    window: Arc<Window>,
    surface: WindowSurface,
    sim: Simulation<SystemClock>,
}

pub struct App {
    settings: Settings,
    running: Option<Running>,
    pending: Vec<InputEvent>,
    error: Option<InitError>,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            running: None,
            pending: Vec::new(),
            error: None,
        }
    }

    fn init(&self, event_loop: &ActiveEventLoop) -> Result<Running, InitError> {
        let (width, height) = (self.settings.width, self.settings.height);
        let attrs = Window::default_attributes()
            .with_title(self.settings.title.clone())
            .with_inner_size(PhysicalSize::new(width, height))
            .with_resizable(false);
        let window = Arc::new(event_loop.create_window(attrs)?);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let surface = instance.create_surface(window.clone())?;
        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))?;
        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let size = window.inner_size();
        let presenter = pollster::block_on(GpuPresenter::new(
            surface,
            &adapter,
            (size.width, size.height),
            (width, height),
        ))?;

        let format = presenter.pixel_format();
        let sim = Simulation::new(&self.settings, format, SystemClock::new());
        let surface = WindowSurface {
            frame: Framebuffer::new(width, height, format),
            presenter,
        };

        log::info!("Window {}x{}, {} rays", width, height, self.settings.num_rays);
        Ok(Running {
            window,
            surface,
            sim,
        })
    }

    /// Run one tick with everything received since the last one
    fn advance(&mut self, event_loop: &ActiveEventLoop) {
        let Some(running) = self.running.as_mut() else {
            return;
        };
        let events = std::mem::take(&mut self.pending);
        match running.sim.run_tick(events, &mut running.surface) {
            LoopControl::Continue => running.window.request_redraw(),
            LoopControl::Exit => event_loop.exit(),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.running.is_some() {
            return;
        }

        match self.init(event_loop) {
            Ok(running) => {
                running.window.request_redraw();
                self.running = Some(running);
            }
            Err(e) => {
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                // Finish the current tick, then stop
                self.pending.push(InputEvent::Quit);
                self.advance(event_loop);
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                self.pending.push(InputEvent::Quit);
            }
            WindowEvent::CursorMoved { position, .. } => {
                let (x, y) = match self.running.as_ref() {
                    Some(running) => {
                        let presenter = &running.surface.presenter;
                        window_to_frame(
                            position.x,
                            position.y,
                            presenter.surface_size(),
                            presenter.frame_size(),
                        )
                    }
                    None => (position.x, position.y),
                };
                self.pending.push(InputEvent::PointerMoved { x, y });
            }
            WindowEvent::Resized(size) => {
                if let Some(running) = self.running.as_mut() {
                    running.surface.presenter.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => self.advance(event_loop),
            _ => {}
        }
    }
}

/// Open the window and run until quit
pub fn run(settings: Settings) -> Result<(), InitError> {
    let event_loop = EventLoop::new()?;
    let mut app = App::new(settings);
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
