//! Breakout entry point
//!
//! Opens the native window and runs the game loop from the event loop.

use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Context;
use glam::Vec2;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use breakout::Settings;
use breakout::consts::*;
use breakout::renderer::{RenderState, scene_vertices};
use breakout::scene::InputEvent;
use breakout::sim::{GamePhase, GameState, tick};

/// Longest frame the accumulator will absorb
const MAX_FRAME: Duration = Duration::from_millis(100);

/// Game state plus fixed-step pacing
struct Game {
    state: GameState,
    tick_len: Duration,
    accumulator: Duration,
    last_time: Instant,
}

impl Game {
    fn new(seed: u64, tick_ms: u64) -> Self {
        Self {
            state: GameState::new(seed),
            tick_len: Duration::from_millis(tick_ms),
            accumulator: Duration::ZERO,
            last_time: Instant::now(),
        }
    }

    /// Run every tick that is due since the last call
    fn update(&mut self, now: Instant) {
        let frame = now.saturating_duration_since(self.last_time).min(MAX_FRAME);
        self.last_time = now;
        self.accumulator += frame;

        let mut substeps = 0;
        while self.accumulator >= self.tick_len && substeps < MAX_SUBSTEPS {
            tick(&mut self.state);
            self.accumulator -= self.tick_len;
            substeps += 1;
        }
        if substeps == MAX_SUBSTEPS {
            // Too far behind; drop the backlog instead of fast-forwarding
            self.accumulator = Duration::ZERO;
        }
    }
}

/// Window and GPU state, created once the event loop is running
struct Graphics {
    window: Arc<Window>,
    render_state: RenderState,
}

struct App {
    settings: Settings,
    game: Game,
    graphics: Option<Graphics>,
    /// Last cursor position in scene pixels, for click events
    cursor: Vec2,
    error: Option<anyhow::Error>,
}

impl App {
    fn new(settings: Settings, seed: u64) -> Self {
        Self {
            game: Game::new(seed, settings.tick_ms),
            settings,
            graphics: None,
            cursor: Vec2::ZERO,
            error: None,
        }
    }

    fn init_graphics(&self, event_loop: &ActiveEventLoop) -> anyhow::Result<Graphics> {
        let attributes = Window::default_attributes()
            .with_title("Breakout")
            .with_inner_size(LogicalSize::new(WIDTH as f64, HEIGHT as f64))
            .with_resizable(false);
        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .context("failed to create window")?,
        );

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .context("failed to create surface")?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .context("failed to get adapter")?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let size = window.inner_size();
        let render_state = pollster::block_on(RenderState::new(
            surface,
            &adapter,
            size.width,
            size.height,
            Vec2::new(WIDTH, HEIGHT),
            self.settings.vsync,
        ))?;

        Ok(Graphics {
            window,
            render_state,
        })
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.graphics.is_some() {
            return;
        }
        match self.init_graphics(event_loop) {
            Ok(graphics) => {
                log::info!("Window created: {}x{}", WIDTH, HEIGHT);
                self.graphics = Some(graphics);
                self.game.last_time = Instant::now();
            }
            Err(e) => {
                log::error!("Graphics initialisation failed: {:#}", e);
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(graphics) = &self.graphics else {
            return;
        };

        self.game.update(Instant::now());
        if self.game.state.phase == GamePhase::Closed {
            log::info!("Final score: {}", self.game.state.points);
            event_loop.exit();
            return;
        }

        graphics.window.request_redraw();
        event_loop.set_control_flow(ControlFlow::WaitUntil(
            Instant::now() + self.game.tick_len,
        ));
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(graphics) = self.graphics.as_mut() else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting.");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                graphics.render_state.resize(size.width, size.height);
            }

            WindowEvent::CursorMoved { position, .. } => {
                let pos = position.to_logical::<f32>(graphics.window.scale_factor());
                self.cursor = Vec2::new(pos.x, pos.y);
                self.game
                    .state
                    .window
                    .events
                    .push(InputEvent::MouseMoved { x: pos.x, y: pos.y });
            }

            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                let (x, y) = (self.cursor.x, self.cursor.y);
                self.game
                    .state
                    .window
                    .events
                    .push(InputEvent::MouseClicked { x, y });
            }

            WindowEvent::RedrawRequested => {
                let vertices = scene_vertices(&self.game.state.window.scene);
                match graphics.render_state.render(&vertices) {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        log::warn!("Surface lost, reconfiguring");
                        graphics.render_state.reconfigure();
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                        event_loop.exit();
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }

            _ => {}
        }
    }
}

/// Seed from the wall clock when the settings do not pin one
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Breakout starting...");

    let settings = Settings::load();
    let seed = settings.seed.unwrap_or_else(clock_seed);

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    let mut app = App::new(settings, seed);
    event_loop
        .run_app(&mut app)
        .context("event loop terminated abnormally")?;

    if let Some(e) = app.error {
        return Err(e);
    }
    log::info!("Breakout exited");
    Ok(())
}
