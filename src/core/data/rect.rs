//! Geometry shared by every axis-aligned rectangle in the explorer.
//!
//! Math-space views and pixel-space selections are distinct types so they
//! cannot be mixed up, but both get the same operations through [`Rect`].

use crate::core::data::window::Window;

pub trait Rect: Copy + Sized {
    fn from_bounds(x0: f64, y0: f64, x1: f64, y1: f64) -> Self;

    fn x0(&self) -> f64;
    fn y0(&self) -> f64;
    fn x1(&self) -> f64;
    fn y1(&self) -> f64;

    #[must_use]
    fn width(&self) -> f64 {
        self.x1() - self.x0()
    }

    #[must_use]
    fn height(&self) -> f64 {
        self.y1() - self.y0()
    }

    /// Exact comparison of all four bounds. No tolerance is applied.
    #[must_use]
    fn same_as(&self, other: &Self) -> bool {
        self.x0().to_bits() == other.x0().to_bits()
            && self.y0().to_bits() == other.y0().to_bits()
            && self.x1().to_bits() == other.x1().to_bits()
            && self.y1().to_bits() == other.y1().to_bits()
    }

    /// Swaps the endpoints of each inverted axis so that `x0 <= x1` and `y0 <= y1`.
    #[must_use]
    fn normalized(&self) -> Self {
        Self::from_bounds(
            self.x0().min(self.x1()),
            self.y0().min(self.y1()),
            self.x0().max(self.x1()),
            self.y0().max(self.y1()),
        )
    }

    /// Returns a rectangle with the same center whose width:height matches the window.
    ///
    /// The relatively larger extent is kept and the other one is stretched
    /// around its center. Expects a normalized rectangle.
    #[must_use]
    fn fit_aspect(&self, window: &Window) -> Self {
        let window_aspect = window.aspect_ratio();
        let aspect = self.width() / self.height();

        if aspect > window_aspect {
            let center_y = (self.y0() + self.y1()) / 2.0;
            let new_height = self.width() / window_aspect;

            Self::from_bounds(
                self.x0(),
                center_y - 0.5 * new_height,
                self.x1(),
                center_y + 0.5 * new_height,
            )
        } else {
            let center_x = (self.x0() + self.x1()) / 2.0;
            let new_width = self.height() * window_aspect;

            Self::from_bounds(
                center_x - 0.5 * new_width,
                self.y0(),
                center_x + 0.5 * new_width,
                self.y1(),
            )
        }
    }
}
