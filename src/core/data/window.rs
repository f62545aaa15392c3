use crate::core::data::errors::GeometryError;

/// Physical pixel dimensions of the raster. Both sides are non-zero.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Window {
    width: u32,
    height: u32,
}

impl Window {
    pub fn new(width: u32, height: u32) -> Result<Self, GeometryError> {
        if width == 0 || height == 0 {
            return Err(GeometryError::InvalidWindow { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}
