use tracing::{debug, info};

use crate::controllers::interactive::data::explorer_config::ExplorerConfig;
use crate::controllers::interactive::errors::SessionError;
use crate::controllers::zoom::events::PointerEvent;
use crate::controllers::zoom::zoom_controller::ZoomController;
use crate::core::actions::compute_raster::compute_engine::ComputeEngine;
use crate::core::data::errors::GeometryError;
use crate::core::data::math_rect::MathRect;
use crate::core::data::pixel_selection::PixelSelection;
use crate::core::data::raster::Raster;
use crate::core::data::rect::Rect;
use crate::core::data::window::Window;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;

/// Everything the display layer needs to draw one frame.
///
/// The raster borrow ends before the next call into the session.
#[derive(Debug)]
pub struct Frame<'a> {
    pub raster: &'a Raster,
    pub view: MathRect,
    pub window: Window,
    /// Live drag rectangle in window pixels (origin bottom-left).
    pub selection: Option<PixelSelection>,
}

/// Per-frame glue between pointer input, the zoom gesture and the compute engine.
#[derive(Debug)]
pub struct ExplorerSession {
    config: ExplorerConfig,
    view: MathRect,
    /// Window the view was last aspect-fitted to.
    fitted_to: Option<Window>,
    engine: ComputeEngine,
    zoom: ZoomController,
}

impl ExplorerSession {
    pub fn new(config: ExplorerConfig) -> Result<Self, SessionError> {
        config.validate()?;

        let engine = ComputeEngine::new(MandelbrotAlgorithm::new(config.max_iterations)?)?;

        Ok(Self {
            view: config.initial_view,
            fitted_to: None,
            engine,
            zoom: ZoomController::new(),
            config,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    #[must_use]
    pub fn view(&self) -> MathRect {
        self.view
    }

    #[must_use]
    pub fn engine(&self) -> &ComputeEngine {
        &self.engine
    }

    #[must_use]
    pub fn zoom(&self) -> &ZoomController {
        &self.zoom
    }

    pub fn handle_event(&mut self, event: &PointerEvent) {
        match *event {
            PointerEvent::Scroll { delta_x, delta_y } => {
                self.view = self.view.panned(delta_x, delta_y, self.config.pan_step);
            }
            _ => self.zoom.handle_event(event),
        }
    }

    pub fn set_max_iterations(&mut self, max_iterations: u32) -> Result<(), SessionError> {
        self.engine
            .replace_algorithm(MandelbrotAlgorithm::new(max_iterations)?)?;
        self.config.max_iterations = max_iterations;

        info!(max_iterations, "iteration limit changed");

        Ok(())
    }

    pub fn reset_view(&mut self) {
        self.view = self.config.initial_view;
        self.fitted_to = None;
    }

    /// Advances the session by one displayed frame.
    ///
    /// Fits the view to a resized window, applies a completed zoom, then
    /// recomputes the raster if anything changed. A window with a zero side
    /// fails the frame without touching the engine.
    pub fn frame(&mut self, width: u32, height: u32) -> Result<Frame<'_>, SessionError> {
        let window = Window::new(width, height)?;

        if self.fitted_to != Some(window) {
            self.view = self.view.fit_aspect(&window);
            self.fitted_to = Some(window);
        }

        match self.zoom.consume(&self.view, &window) {
            Ok(Some(zoomed)) => self.view = zoomed,
            Ok(None) => {}
            Err(GeometryError::DegenerateSelection { width, height }) => {
                debug!(width, height, "ignoring zoom without area");
            }
            Err(err) => return Err(err.into()),
        }

        let selection = self.zoom.current_selection_for_display(&window);
        let raster = self.engine.recompute(self.view, window);

        Ok(Frame {
            raster,
            view: self.view,
            window,
            selection,
        })
    }
}
