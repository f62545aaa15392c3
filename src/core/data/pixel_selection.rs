use crate::core::data::point::PixelPoint;
use crate::core::data::rect::Rect;
use crate::core::data::window::Window;

/// A rectangle in window pixels with the origin at the bottom-left corner.
///
/// Produced from drag gestures, so the corners may come in any order until
/// [`Rect::normalized`] is applied.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PixelSelection {
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
}

impl PixelSelection {
    /// Builds a selection from two device-space corners (origin top-left),
    /// flipping the vertical axis against the window height.
    #[must_use]
    pub fn from_device_corners(anchor: PixelPoint, current: PixelPoint, window: &Window) -> Self {
        let height = f64::from(window.height());

        Self {
            x0: anchor.x,
            y0: height - anchor.y,
            x1: current.x,
            y1: height - current.y,
        }
    }

    /// Corners of the selection in device space (origin top-left), as
    /// `(top_left, bottom_right)` for a normalized selection.
    #[must_use]
    pub fn to_device(&self, window: &Window) -> (PixelPoint, PixelPoint) {
        let height = f64::from(window.height());

        (
            PixelPoint::new(self.x0, height - self.y1),
            PixelPoint::new(self.x1, height - self.y0),
        )
    }
}

impl Rect for PixelSelection {
    fn from_bounds(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_device_corners_flips_vertical_axis() {
        let window = Window::new(500, 500).unwrap();
        let selection = PixelSelection::from_device_corners(
            PixelPoint::new(100.0, 100.0),
            PixelPoint::new(50.0, 50.0),
            &window,
        );

        assert_eq!(selection.x0(), 100.0);
        assert_eq!(selection.y0(), 400.0);
        assert_eq!(selection.x1(), 50.0);
        assert_eq!(selection.y1(), 450.0);
    }

    #[test]
    fn test_to_device_round_trips_normalized_selection() {
        let window = Window::new(500, 300).unwrap();
        let selection = PixelSelection::from_device_corners(
            PixelPoint::new(10.0, 20.0),
            PixelPoint::new(110.0, 220.0),
            &window,
        )
        .normalized();

        let (top_left, bottom_right) = selection.to_device(&window);

        assert_eq!(top_left, PixelPoint::new(10.0, 20.0));
        assert_eq!(bottom_right, PixelPoint::new(110.0, 220.0));
    }
}
