use crate::core::fractals::mandelbrot::errors::MandelbrotError;

/// Linear ramp from escape values `[0, max_iterations]` onto 16-bit gray.
///
/// The per-step scale is `65535 / max_iterations` in integer arithmetic, so
/// the brightest value may fall slightly short of `u16::MAX`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Gray16ColourMap {
    scale: u32,
}

impl Gray16ColourMap {
    pub fn new(max_iterations: u32) -> Result<Self, MandelbrotError> {
        let scale = u32::from(u16::MAX)
            .checked_div(max_iterations)
            .ok_or(MandelbrotError::ZeroMaxIterations)?;

        Ok(Self { scale })
    }

    #[must_use]
    pub fn map(&self, escape_value: u32) -> u16 {
        u16::try_from(escape_value.saturating_mul(self.scale)).unwrap_or(u16::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_maps_to_black() {
        let map = Gray16ColourMap::new(1000).unwrap();

        assert_eq!(map.map(0), 0);
    }

    #[test]
    fn test_scale_uses_integer_step() {
        let map = Gray16ColourMap::new(1000).unwrap();

        assert_eq!(map.map(1), 65);
        assert_eq!(map.map(1000), 65000);
    }

    #[test]
    fn test_single_iteration_uses_full_range() {
        let map = Gray16ColourMap::new(1).unwrap();

        assert_eq!(map.map(1), u16::MAX);
    }

    #[test]
    fn test_scale_follows_max_iterations() {
        let coarse = Gray16ColourMap::new(256).unwrap();
        let fine = Gray16ColourMap::new(4096).unwrap();

        assert_eq!(coarse.map(256), 65280);
        assert_eq!(fine.map(4096), 61440);
    }

    #[test]
    fn test_out_of_range_value_saturates() {
        let map = Gray16ColourMap::new(10).unwrap();

        assert_eq!(map.map(u32::MAX), u16::MAX);
    }

    #[test]
    fn test_zero_iterations_rejected() {
        assert_eq!(
            Gray16ColourMap::new(0),
            Err(MandelbrotError::ZeroMaxIterations)
        );
    }
}
