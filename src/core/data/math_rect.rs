use crate::core::data::rect::Rect;

/// A rectangle in the complex plane, used as the active view.
///
/// Bounds are not required to be ordered.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MathRect {
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
}

impl MathRect {
    #[must_use]
    pub const fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Translates the view by a fraction of its own extent on each axis.
    ///
    /// Positive `dx` moves the view towards negative real values, positive
    /// `dy` towards positive imaginary values.
    #[must_use]
    pub fn panned(&self, dx: f64, dy: f64, step: f64) -> Self {
        let shift_x = dx * self.width() * step;
        let shift_y = dy * self.height() * step;

        Self::new(
            self.x0 - shift_x,
            self.y0 + shift_y,
            self.x1 - shift_x,
            self.y1 + shift_y,
        )
    }
}

impl Rect for MathRect {
    fn from_bounds(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self::new(x0, y0, x1, y1)
    }

    fn x0(&self) -> f64 {
        self.x0
    }

    fn y0(&self) -> f64 {
        self.y0
    }

    fn x1(&self) -> f64 {
        self.x1
    }

    fn y1(&self) -> f64 {
        self.y1
    }
}
