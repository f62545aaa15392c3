mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;

pub use crate::controllers::interactive::{ExplorerConfig, ExplorerSession, Frame, SessionError};
pub use crate::controllers::snapshot::{SnapshotError, render_snapshot};
pub use crate::controllers::zoom::{PointerEvent, ZoomController, ZoomState};
pub use crate::core::actions::compute_raster::ComputeEngine;
pub use crate::core::actions::compute_raster::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::errors::GeometryError;
pub use crate::core::data::math_rect::MathRect;
pub use crate::core::data::pixel_selection::PixelSelection;
pub use crate::core::data::point::PixelPoint;
pub use crate::core::data::raster::{Raster, RasterError};
pub use crate::core::data::rect::Rect;
pub use crate::core::data::window::Window;
pub use crate::core::fractals::mandelbrot::algorithm::{MandelbrotAlgorithm, escape_iterations};
pub use crate::core::fractals::mandelbrot::colour_map::Gray16ColourMap;
pub use crate::core::fractals::mandelbrot::errors::MandelbrotError;
pub use crate::core::util::normalize_selection::{aspect_corrected_selection, normalize_selection};
pub use crate::core::util::pixel_to_math::{PixelToMath, map_pixel_to_math};
pub use crate::presenters::file::pgm::PgmFilePresenter;

#[cfg(feature = "gui")]
pub use crate::input::gui::{GuiError, run_gui};
