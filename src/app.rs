use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::config::{Config, WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use crate::gpu::{BoardRenderer, GpuContext, GpuError};
use crate::layout::{Action, Hit, ScreenLayout};
use crate::simulation::{Grid, GridError};

/// Fatal errors while opening the window and sizing the board
#[derive(Debug, Error)]
enum StartupError {
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error(transparent)]
    Gpu(#[from] GpuError),

    #[error("window too small for a board: {0}")]
    Board(#[from] GridError),
}

/// Everything that exists once the window is up and the board is sized.
///
/// The layout is computed once from the physical size at startup and never
/// changes. A later scale factor change asks winit to keep that physical size.
struct Session {
    window: Arc<Window>,
    gpu: GpuContext,
    grid: Grid,
    layout: ScreenLayout,
    renderer: BoardRenderer,
    hovered: Option<Action>,
    generation: u64,
}

impl Session {
    fn start(event_loop: &ActiveEventLoop, config: &Config) -> Result<Self, StartupError> {
        let window_attrs = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
            .with_resizable(false);

        let window = Arc::new(event_loop.create_window(window_attrs)?);

        log::info!("Creating GPU context...");
        let gpu = pollster::block_on(GpuContext::new(window.clone()))?;

        // Board dimensions are fixed from here on
        let size = window.inner_size();
        let layout = ScreenLayout::new(size.width, size.height, config.cell_size, window.scale_factor());
        let grid = Grid::new(layout.board.rows, layout.board.cols)?;
        log::info!(
            "Board: {}x{} cells of {}px",
            grid.rows(),
            grid.cols(),
            layout.board.cell_size
        );

        let renderer = BoardRenderer::new(&gpu.device, gpu.format(), &grid.to_gpu_cells(), &layout);

        let session = Self {
            window,
            gpu,
            grid,
            layout,
            renderer,
            hovered: None,
            generation: 0,
        };
        session.update_title();
        Ok(session)
    }

    fn apply(&mut self, action: Action, random_count: usize, rng: &mut StdRng) {
        match action {
            Action::Step => {
                self.grid.step();
                self.generation += 1;
            }
            Action::Clear => {
                self.grid.clear();
                self.generation = 0;
            }
            Action::Randomize => self.grid.randomize(random_count, rng),
        }

        log::debug!(
            "{}: generation {}, {} live cells",
            action.label(),
            self.generation,
            self.grid.population()
        );
        self.refresh();
    }

    fn toggle(&mut self, row: usize, col: usize) {
        match self.grid.toggle(row, col) {
            Ok(alive) => {
                log::debug!("Toggled ({}, {}) -> {}", row, col, if alive { "alive" } else { "dead" });
                self.refresh();
            }
            Err(e) => log::error!("Click resolved outside the board: {}", e),
        }
    }

    fn hover(&mut self, hovered: Option<Action>) {
        if hovered != self.hovered {
            self.hovered = hovered;
            self.renderer
                .update_layout(&self.gpu.queue, &self.layout, self.hovered);
            self.window.request_redraw();
        }
    }

    /// Push engine state to the GPU and schedule a redraw
    fn refresh(&self) {
        self.renderer
            .upload_cells(&self.gpu.queue, &self.grid.to_gpu_cells());
        self.update_title();
        self.window.request_redraw();
    }

    fn update_title(&self) {
        self.window.set_title(&format!(
            "{} - Generation {} - {} alive",
            WINDOW_TITLE,
            self.generation,
            self.grid.population()
        ));
    }

    fn render(&self) {
        let output = match self.gpu.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                // Reconfigure surface and try again next frame
                self.gpu.surface.configure(&self.gpu.device, &self.gpu.config);
                self.window.request_redraw();
                return;
            }
            Err(e) => {
                log::error!("Surface error: {:?}", e);
                return;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("frame-encoder"),
            });

        self.renderer.draw(&mut encoder, &view);

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();
    }
}

/// Application state
pub struct App {
    config: Config,
    rng: StdRng,
    session: Option<Session>,
    cursor: Option<PhysicalPosition<f64>>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            config,
            rng,
            session: None,
            cursor: None,
        }
    }

    fn apply(&mut self, action: Action) {
        if let Some(session) = self.session.as_mut() {
            session.apply(action, self.config.random_count, &mut self.rng);
        }
    }

    /// Resolve a left click to a toolbar action or a cell toggle
    fn click(&mut self) {
        let (Some(position), Some(session)) = (self.cursor, self.session.as_ref()) else {
            return;
        };

        match session.layout.hit(position.x as f32, position.y as f32) {
            Some(Hit::Button(action)) => self.apply(action),
            Some(Hit::Cell(row, col)) => {
                if let Some(session) = self.session.as_mut() {
                    session.toggle(row, col);
                }
            }
            None => {}
        }
    }

    fn handle_key(&mut self, key_code: KeyCode) {
        match key_code {
            KeyCode::Space | KeyCode::KeyN => self.apply(Action::Step),
            KeyCode::KeyC => self.apply(Action::Clear),
            KeyCode::KeyR => self.apply(Action::Randomize),
            _ => {}
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.session.is_some() {
            return;
        }

        log::info!("Starting {}...", WINDOW_TITLE);
        match Session::start(event_loop, &self.config) {
            Ok(session) => {
                log::info!("Initialization complete!");
                log::info!("Controls:");
                log::info!("  Click a cell: toggle it");
                log::info!("  Space/N or Step button: advance one generation");
                log::info!("  C or Clear button: kill every cell");
                log::info!(
                    "  R or Randomize button: sprinkle {} live cells",
                    self.config.random_count
                );
                log::info!("  Escape: Quit");
                session.window.request_redraw();
                self.session = Some(session);
            }
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting...");
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state.is_pressed() && !event.repeat {
                    if let PhysicalKey::Code(key_code) = event.physical_key {
                        if key_code == KeyCode::Escape {
                            log::info!("Escape pressed, exiting...");
                            event_loop.exit();
                        } else {
                            self.handle_key(key_code);
                        }
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Some(position);
                if let Some(session) = self.session.as_mut() {
                    let hovered = session
                        .layout
                        .toolbar
                        .button_at(position.x as f32, position.y as f32);
                    session.hover(hovered);
                }
            }
            WindowEvent::CursorLeft { .. } => {
                self.cursor = None;
                if let Some(session) = self.session.as_mut() {
                    session.hover(None);
                }
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => self.click(),
            WindowEvent::Resized(new_size) => {
                if let Some(session) = self.session.as_mut() {
                    log::info!("Window resized to {}x{}", new_size.width, new_size.height);
                    session.gpu.resize(new_size);
                    session.window.request_redraw();
                }
            }
            WindowEvent::ScaleFactorChanged {
                scale_factor,
                mut inner_size_writer,
            } => {
                if let Some(session) = self.session.as_ref() {
                    // Keep the surface the layout was computed for
                    let (width, height) = session.layout.surface_size;
                    log::info!(
                        "Scale factor changed to {}, keeping the {}x{} layout",
                        scale_factor,
                        width,
                        height
                    );
                    if let Err(e) = inner_size_writer.request_inner_size(PhysicalSize::new(width, height)) {
                        log::warn!("Could not keep the window size: {}", e);
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                if let Some(session) = self.session.as_ref() {
                    session.render();
                }
            }
            _ => {}
        }
    }
}
