use crate::core::data::complex::Complex;
use crate::core::data::math_rect::MathRect;
use crate::core::data::rect::Rect;
use crate::core::data::window::Window;

/// Affine map from window pixels to the complex plane for one view.
///
/// Pixel `(0, 0)` lands on `(view.x0, view.y0)`; no vertical flip is applied.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PixelToMath {
    origin: Complex,
    step_x: f64,
    step_y: f64,
}

impl PixelToMath {
    #[must_use]
    pub fn new(view: &MathRect, window: &Window) -> Self {
        Self {
            origin: Complex::new(view.x0(), view.y0()),
            step_x: view.width() / f64::from(window.width()),
            step_y: view.height() / f64::from(window.height()),
        }
    }

    #[must_use]
    pub fn map(&self, px: f64, py: f64) -> Complex {
        Complex::new(
            self.origin.real + self.step_x * px,
            self.origin.imag + self.step_y * py,
        )
    }

    /// Maps every bound of a pixel-space rectangle into a math-space rectangle.
    #[must_use]
    pub fn map_rect<R: Rect>(&self, rect: &R) -> MathRect {
        let low = self.map(rect.x0(), rect.y0());
        let high = self.map(rect.x1(), rect.y1());

        MathRect::new(low.real, low.imag, high.real, high.imag)
    }
}

#[must_use]
pub fn map_pixel_to_math(px: f64, py: f64, view: &MathRect, window: &Window) -> Complex {
    PixelToMath::new(view, window).map(px, py)
}
