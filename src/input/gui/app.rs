//! Main GUI application loop.

use pixels::{Pixels, SurfaceTexture};
use tracing::{error, info, warn};
use winit::{
    dpi::LogicalSize,
    event::{ElementState, Event, KeyEvent, MouseButton, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowBuilder},
};

use crate::controllers::interactive::{ExplorerConfig, ExplorerSession, SessionError};
use crate::controllers::zoom::events::PointerEvent;
use crate::core::data::errors::GeometryError;
use crate::input::gui::events::{KeyCommand, PointerTracker, key_command, scroll_event};
use crate::input::gui::overlay::{draw_selection, window_title};

#[derive(Debug, thiserror::Error)]
pub enum GuiError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("pixels error: {0}")]
    Pixels(#[from] pixels::Error),
    #[error("failed to resize surface: {0}")]
    Texture(#[from] pixels::TextureError),
}

/// Application state holding the pixels framebuffer and the explorer session.
struct App<'win> {
    window: &'win Window,
    pixels: Pixels<'win>,
    session: ExplorerSession,
    pointer: PointerTracker,
    redraw_pending: bool,
}

impl<'win> App<'win> {
    fn new(window: &'win Window, session: ExplorerSession) -> Result<Self, GuiError> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(size.width, size.height, surface_texture)?;

        Ok(Self {
            window,
            pixels,
            session,
            pointer: PointerTracker::default(),
            redraw_pending: true,
        })
    }

    fn pointer_event(&mut self, event: PointerEvent) {
        self.session.handle_event(&event);

        let dragging = self.session.zoom().is_dragging() || self.session.zoom().is_complete();
        if dragging || matches!(event, PointerEvent::Scroll { .. }) {
            self.redraw_pending = true;
        }
    }

    fn apply_command(&mut self, command: KeyCommand) -> Result<(), GuiError> {
        let max_iterations = self.session.config().max_iterations;

        match command {
            KeyCommand::ResetView => self.session.reset_view(),
            KeyCommand::DoubleIterations => self
                .session
                .set_max_iterations(max_iterations.saturating_mul(2))?,
            KeyCommand::HalveIterations => self
                .session
                .set_max_iterations((max_iterations / 2).max(1))?,
        }

        self.redraw_pending = true;
        Ok(())
    }

    /// Handles window resize by resizing the pixels surface and buffer.
    fn resize(&mut self, width: u32, height: u32) -> Result<(), GuiError> {
        // Minimized windows report a zero size; keep the old surface
        if width > 0 && height > 0 {
            self.pixels.resize_surface(width, height)?;
            self.pixels.resize_buffer(width, height)?;
        }

        self.redraw_pending = true;
        Ok(())
    }

    /// Renders the current frame to the window.
    fn render(&mut self) -> Result<(), GuiError> {
        let size = self.window.inner_size();

        let frame = match self.session.frame(size.width, size.height) {
            Ok(frame) => frame,
            Err(SessionError::Geometry(GeometryError::InvalidWindow { .. })) => return Ok(()),
            Err(err) => return Err(err.into()),
        };

        if let Err(err) = frame.raster.write_rgba8_top_down(self.pixels.frame_mut()) {
            // The surface lags one resize event behind the window
            warn!(%err, "skipping frame with stale surface size");
            return Ok(());
        }

        if let Some(selection) = frame.selection {
            draw_selection(self.pixels.frame_mut(), &frame.window, &selection);
        }

        let (view, window) = (frame.view, frame.window);
        self.window
            .set_title(&window_title(&self.session.config().title, &view, &window));

        self.pixels.render()?;
        Ok(())
    }

    fn handle_window_event(&mut self, event: &WindowEvent) -> Result<bool, GuiError> {
        match event {
            WindowEvent::CloseRequested => return Ok(false),
            WindowEvent::RedrawRequested => {
                self.redraw_pending = false;
                self.render()?;
            }
            WindowEvent::Resized(size) => self.resize(size.width, size.height)?,
            WindowEvent::ScaleFactorChanged { .. } => {
                let size = self.window.inner_size();
                self.resize(size.width, size.height)?;
            }
            WindowEvent::CursorMoved { position, .. } => {
                let event = self.pointer.cursor_moved(*position);
                self.pointer_event(event);
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                if let Some(event) = self.pointer.left_button(*state) {
                    self.pointer_event(event);
                }
            }
            WindowEvent::MouseWheel { delta, .. } => self.pointer_event(scroll_event(*delta)),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key_code),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => {
                if let Some(command) = key_command(*key_code) {
                    self.apply_command(command)?;
                }
            }
            _ => {}
        }

        Ok(true)
    }
}

/// Runs the GUI application.
///
/// This function does not return until the window is closed or rendering fails.
pub fn run_gui(config: ExplorerConfig) -> Result<(), GuiError> {
    let session = ExplorerSession::new(config)?;
    let event_loop = EventLoop::new()?;

    let window = WindowBuilder::new()
        .with_title(session.config().title.as_str())
        .with_inner_size(LogicalSize::new(
            f64::from(session.config().window_width),
            f64::from(session.config().window_height),
        ))
        .with_min_inner_size(LogicalSize::new(200.0, 200.0))
        .build(&event_loop)?;

    let mut app = App::new(&window, session)?;
    let mut failure: Option<GuiError> = None;

    info!("explorer window opened");

    event_loop.run(|event, elwt| {
        elwt.set_control_flow(ControlFlow::Wait);

        match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => match app.handle_window_event(event) {
                Ok(true) => {}
                Ok(false) => elwt.exit(),
                Err(err) => {
                    error!(%err, "gui error");
                    failure = Some(err);
                    elwt.exit();
                }
            },
            Event::AboutToWait => {
                // Only request redraw if state changed
                if app.redraw_pending {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    })?;

    match failure {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
