use crate::core::actions::compute_raster::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Escape-time of `c` under `z <- z^2 + c`, inverted so that faster-escaping
/// points score higher.
///
/// Returns `max_iterations - i` when `|z|^2 >= 4` after step `i`, and `0` for
/// points that never escape. The result is always in `[0, max_iterations]`.
///
/// The check follows the update, so `c = 2 + 2i` scores `max_iterations`.
#[must_use]
pub fn escape_iterations(c: Complex, max_iterations: u32) -> u32 {
    let mut z = Complex::ZERO;

    for iteration in 0..max_iterations {
        z = z * z + c;

        if z.magnitude_squared() >= ESCAPE_RADIUS_SQUARED {
            return max_iterations - iteration;
        }
    }

    0
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MandelbrotAlgorithm {
    max_iterations: u32,
}

impl MandelbrotAlgorithm {
    pub fn new(max_iterations: u32) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterations);
        }

        Ok(Self { max_iterations })
    }
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    fn escape_value(&self, c: Complex) -> u32 {
        escape_iterations(c, self.max_iterations)
    }
}
