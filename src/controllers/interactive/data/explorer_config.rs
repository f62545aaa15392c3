use crate::controllers::interactive::errors::SessionError;
use crate::core::data::errors::GeometryError;
use crate::core::data::math_rect::MathRect;
use crate::core::data::rect::Rect;
use crate::core::data::window::Window;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

pub const DEFAULT_MAX_ITERATIONS: u32 = 1000;
pub const DEFAULT_PAN_STEP: f64 = 0.01;
pub const DEFAULT_WINDOW_WIDTH: u32 = 1000;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 700;
pub const DEFAULT_VIEW: MathRect = MathRect::new(-2.5, -1.0, 1.0, 1.0);

#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerConfig {
    /// Fitted to the window aspect ratio on the first frame.
    pub initial_view: MathRect,
    pub max_iterations: u32,
    /// Fraction of the view extent panned per scroll unit.
    pub pan_step: f64,
    pub window_width: u32,
    pub window_height: u32,
    pub title: String,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            initial_view: DEFAULT_VIEW,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            pan_step: DEFAULT_PAN_STEP,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            title: String::from("Mandelbrot Set"),
        }
    }
}

impl ExplorerConfig {
    pub fn initial_window(&self) -> Result<Window, GeometryError> {
        Window::new(self.window_width, self.window_height)
    }

    pub fn validate(&self) -> Result<(), SessionError> {
        if self.max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterations.into());
        }

        if !self.pan_step.is_finite() {
            return Err(SessionError::InvalidPanStep(self.pan_step));
        }

        // Aspect fitting assumes x0 < x1 and y0 < y1
        let view = self.initial_view;
        if !(view.width() > 0.0 && view.height() > 0.0) {
            return Err(SessionError::DegenerateInitialView(self.initial_view));
        }

        self.initial_window()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ExplorerConfig::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.max_iterations, 1000);
        assert_eq!(config.initial_window(), Window::new(1000, 700));
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let config = ExplorerConfig {
            max_iterations: 0,
            ..ExplorerConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(SessionError::Mandelbrot(MandelbrotError::ZeroMaxIterations))
        );
    }

    #[test]
    fn test_zero_window_rejected() {
        let config = ExplorerConfig {
            window_height: 0,
            ..ExplorerConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(SessionError::Geometry(GeometryError::InvalidWindow {
                width: 1000,
                height: 0
            }))
        );
    }

    #[test]
    fn test_non_finite_pan_step_rejected() {
        let config = ExplorerConfig {
            pan_step: f64::INFINITY,
            ..ExplorerConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(SessionError::InvalidPanStep(_))
        ));
    }

    #[test]
    fn test_flat_initial_view_rejected() {
        let config = ExplorerConfig {
            initial_view: MathRect::new(-1.0, 0.5, 1.0, 0.5),
            ..ExplorerConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(SessionError::DegenerateInitialView(_))
        ));
    }

    #[test]
    fn test_inverted_initial_view_rejected() {
        let config = ExplorerConfig {
            initial_view: MathRect::new(1.0, -1.0, -2.5, 1.0),
            ..ExplorerConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(SessionError::DegenerateInitialView(MathRect::new(
                1.0, -1.0, -2.5, 1.0
            )))
        );
    }

    #[test]
    fn test_ordered_initial_view_fits_by_widening_height() {
        let config = ExplorerConfig::default();
        let window = config.initial_window().unwrap();

        let fitted = config.initial_view.fit_aspect(&window);

        assert_eq!(fitted.x0(), -2.5);
        assert_eq!(fitted.x1(), 1.0);
        assert!((fitted.y0() + 1.225).abs() < 1e-12);
        assert!((fitted.y1() - 1.225).abs() < 1e-12);
    }
}
