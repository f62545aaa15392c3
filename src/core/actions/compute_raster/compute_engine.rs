//! Memoized, column-parallel escape-time rendering.
//!
//! [`ComputeEngine::recompute`] remembers exactly one `(view, window)` pair:
//! the one its raster was last produced for. Asking for the same pair again
//! returns the existing raster untouched. A new view reuses the buffer in
//! place; a new window allocates a fresh one.
//!
//! Columns are filled on the rayon pool. Each task owns one disjoint column
//! slice, and the call only returns after every column is written.

use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info};

use crate::core::actions::compute_raster::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::math_rect::MathRect;
use crate::core::data::raster::Raster;
use crate::core::data::rect::Rect;
use crate::core::data::window::Window;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_map::Gray16ColourMap;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::util::pixel_to_math::PixelToMath;

#[derive(Debug)]
struct Rendered {
    /// `None` once the raster no longer reflects the current algorithm.
    view: Option<MathRect>,
    raster: Raster,
}

impl Rendered {
    fn matches(&self, view: &MathRect, window: &Window) -> bool {
        self.raster.window() == *window
            && self.view.is_some_and(|current| current.same_as(view))
    }
}

#[derive(Debug)]
pub struct ComputeEngine<A: FractalAlgorithm = MandelbrotAlgorithm> {
    algorithm: A,
    colour_map: Gray16ColourMap,
    rendered: Option<Rendered>,
    render_count: u64,
}

impl<A: FractalAlgorithm> ComputeEngine<A> {
    pub fn new(algorithm: A) -> Result<Self, MandelbrotError> {
        let colour_map = Gray16ColourMap::new(algorithm.max_iterations())?;

        Ok(Self {
            algorithm,
            colour_map,
            rendered: None,
            render_count: 0,
        })
    }

    #[must_use]
    pub fn algorithm(&self) -> &A {
        &self.algorithm
    }

    /// View of the most recently produced raster.
    #[must_use]
    pub fn current_view(&self) -> Option<MathRect> {
        self.rendered.as_ref().and_then(|rendered| rendered.view)
    }

    /// Window of the most recently produced raster.
    #[must_use]
    pub fn current_window(&self) -> Option<Window> {
        self.rendered.as_ref().map(|rendered| rendered.raster.window())
    }

    #[must_use]
    pub fn raster(&self) -> Option<&Raster> {
        self.rendered.as_ref().map(|rendered| &rendered.raster)
    }

    /// Number of raster fills performed so far.
    #[must_use]
    pub fn render_count(&self) -> u64 {
        self.render_count
    }

    /// Swaps the algorithm and rebuilds the colour scale for its iteration limit.
    ///
    /// The current raster keeps its buffer but no longer satisfies the memo,
    /// so the next [`recompute`](Self::recompute) always renders.
    pub fn replace_algorithm(&mut self, algorithm: A) -> Result<(), MandelbrotError> {
        self.colour_map = Gray16ColourMap::new(algorithm.max_iterations())?;
        self.algorithm = algorithm;

        if let Some(rendered) = self.rendered.as_mut() {
            rendered.view = None;
        }

        Ok(())
    }

    pub fn recompute(&mut self, view: MathRect, window: Window) -> &Raster {
        let reusable = match self.rendered.take() {
            Some(rendered) if rendered.matches(&view, &window) => {
                debug!(
                    ?view,
                    width = window.width(),
                    height = window.height(),
                    "raster is current, skipping recompute"
                );
                return &self.rendered.insert(rendered).raster;
            }
            Some(rendered) if rendered.raster.window() == window => Some(rendered.raster),
            _ => None,
        };

        let reallocated = reusable.is_none();
        let mut raster = reusable.unwrap_or_else(|| Raster::new(window));

        let start = Instant::now();
        fill_raster(&mut raster, &view, &self.algorithm, self.colour_map);
        self.render_count += 1;

        info!(
            ?view,
            width = window.width(),
            height = window.height(),
            max_iterations = self.algorithm.max_iterations(),
            reallocated,
            elapsed = ?start.elapsed(),
            "raster recomputed"
        );

        &self
            .rendered
            .insert(Rendered {
                view: Some(view),
                raster,
            })
            .raster
    }
}

fn fill_raster<A: FractalAlgorithm>(
    raster: &mut Raster,
    view: &MathRect,
    algorithm: &A,
    colour_map: Gray16ColourMap,
) {
    let mapping = PixelToMath::new(view, &raster.window());

    raster
        .par_columns_mut()
        .enumerate()
        .for_each(|(column, pixels)| {
            let px = column as f64;

            for (row, pixel) in pixels.iter_mut().enumerate() {
                let c = mapping.map(px, row as f64);
                *pixel = colour_map.map(algorithm.escape_value(c));
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug)]
    struct CountingAlgorithm {
        max_iterations: u32,
        calls: AtomicUsize,
    }

    impl CountingAlgorithm {
        fn new(max_iterations: u32) -> Self {
            Self {
                max_iterations,
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::Relaxed)
        }
    }

    impl FractalAlgorithm for CountingAlgorithm {
        fn max_iterations(&self) -> u32 {
            self.max_iterations
        }

        fn escape_value(&self, c: Complex) -> u32 {
            self.calls.fetch_add(1, Ordering::Relaxed);
            ((c.real.abs() * 7.0 + c.imag.abs() * 3.0) as u32) % (self.max_iterations + 1)
        }
    }

    fn window(width: u32, height: u32) -> Window {
        Window::new(width, height).unwrap()
    }

    fn default_view() -> MathRect {
        MathRect::new(-2.5, -1.0, 1.0, 1.0)
    }

    #[test]
    fn test_identical_request_is_computed_once() {
        let mut engine = ComputeEngine::new(CountingAlgorithm::new(100)).unwrap();

        let first_ptr = engine.recompute(default_view(), window(40, 30)).buffer_ptr();
        let first = engine.raster().cloned().unwrap();
        assert_eq!(engine.algorithm().calls(), 40 * 30);

        let second = engine.recompute(default_view(), window(40, 30));

        assert_eq!(second.buffer_ptr(), first_ptr);
        assert_eq!(*second, first);
        assert_eq!(engine.algorithm().calls(), 40 * 30);
        assert_eq!(engine.render_count(), 1);
    }

    #[test]
    fn test_view_change_reuses_buffer_in_place() {
        let mut engine = ComputeEngine::new(CountingAlgorithm::new(100)).unwrap();

        let first_ptr = engine.recompute(default_view(), window(20, 20)).buffer_ptr();
        let moved = MathRect::new(-1.0, -1.0, 1.0, 1.0);
        let second_ptr = engine.recompute(moved, window(20, 20)).buffer_ptr();

        assert_eq!(first_ptr, second_ptr);
        assert_eq!(engine.algorithm().calls(), 2 * 20 * 20);
        assert_eq!(engine.current_view(), Some(moved));
    }

    #[test]
    fn test_resize_reallocates_and_recomputes_everything() {
        let mut engine = ComputeEngine::new(CountingAlgorithm::new(100)).unwrap();
        let view = MathRect::new(-2.0, -1.0, 2.0, 1.0);

        engine.recompute(view, window(400, 400));
        let raster = engine.recompute(view, window(800, 400));

        assert_eq!(raster.width(), 800);
        assert_eq!(raster.height(), 400);
        assert_eq!(raster.to_gray16_row_major().len(), 800 * 400);
        assert_eq!(engine.algorithm().calls(), 400 * 400 + 800 * 400);
        assert_eq!(engine.current_window(), Some(window(800, 400)));
    }

    #[test]
    fn test_signed_zero_change_is_a_new_view() {
        let mut engine = ComputeEngine::new(CountingAlgorithm::new(10)).unwrap();

        engine.recompute(MathRect::new(0.0, 0.0, 1.0, 1.0), window(4, 4));
        engine.recompute(MathRect::new(-0.0, 0.0, 1.0, 1.0), window(4, 4));

        assert_eq!(engine.render_count(), 2);
    }

    #[test]
    fn test_parallel_fill_matches_sequential_evaluation() {
        let mut engine = ComputeEngine::new(CountingAlgorithm::new(50)).unwrap();
        let view = MathRect::new(-1.5, -0.75, 0.5, 1.25);
        let window = window(37, 23);
        let reference = CountingAlgorithm::new(50);
        let colour_map = Gray16ColourMap::new(50).unwrap();
        let mapping = PixelToMath::new(&view, &window);

        let raster = engine.recompute(view, window);

        for column in 0..window.width() {
            for row in 0..window.height() {
                let c = mapping.map(f64::from(column), f64::from(row));
                let expected = colour_map.map(reference.escape_value(c));

                assert_eq!(raster.intensity(column, row), Some(expected));
            }
        }
    }

    #[test]
    fn test_point_in_period_two_bulb_is_black() {
        let mut engine = ComputeEngine::new(MandelbrotAlgorithm::new(1000).unwrap()).unwrap();
        let window = window(500, 500);

        let raster = engine.recompute(default_view(), window);

        // (200, 250) maps to roughly (-1.1, 0.0)
        assert_eq!(raster.intensity(200, 250), Some(0));
    }

    #[test]
    fn test_immediately_escaping_corner_is_brightest() {
        let mut engine = ComputeEngine::new(MandelbrotAlgorithm::new(1000).unwrap()).unwrap();

        let raster = engine.recompute(MathRect::new(2.0, 2.0, 3.0, 3.0), window(8, 8));

        assert_eq!(raster.intensity(0, 0), Some(65000));
    }

    #[test]
    fn test_replace_algorithm_forces_recompute_with_new_scale() {
        let mut engine = ComputeEngine::new(MandelbrotAlgorithm::new(1000).unwrap()).unwrap();
        let view = MathRect::new(2.0, 2.0, 3.0, 3.0);

        engine.recompute(view, window(8, 8));
        engine
            .replace_algorithm(MandelbrotAlgorithm::new(256).unwrap())
            .unwrap();
        assert_eq!(engine.current_view(), None);

        let raster = engine.recompute(view, window(8, 8));

        assert_eq!(raster.intensity(0, 0), Some(65280));
        assert_eq!(engine.render_count(), 2);
    }

    #[test]
    fn test_zero_iteration_algorithm_is_rejected() {
        let result = ComputeEngine::new(CountingAlgorithm::new(0));

        assert!(matches!(result, Err(MandelbrotError::ZeroMaxIterations)));
    }

    #[test]
    fn test_state_is_empty_before_first_compute() {
        let engine = ComputeEngine::new(CountingAlgorithm::new(10)).unwrap();

        assert!(engine.raster().is_none());
        assert!(engine.current_view().is_none());
        assert!(engine.current_window().is_none());
        assert_eq!(engine.render_count(), 0);
    }
}
