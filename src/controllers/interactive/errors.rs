use crate::core::data::errors::GeometryError;
use crate::core::data::math_rect::MathRect;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

#[derive(Debug, Copy, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    #[error(transparent)]
    Mandelbrot(#[from] MandelbrotError),
    #[error("pan step must be finite, got {0}")]
    InvalidPanStep(f64),
    #[error("initial view has no area: {0:?}")]
    DegenerateInitialView(MathRect),
}
