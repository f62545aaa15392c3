use rayon::prelude::*;

use crate::core::data::window::Window;

const RGBA_BYTES_PER_PIXEL: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RasterError {
    #[error("frame buffer holds {actual} bytes but the raster needs {expected}")]
    BoundsMismatch { expected: usize, actual: usize },
}

/// Grayscale escape-time image, one 16-bit intensity per pixel.
///
/// Pixels are stored column by column so that each column is a contiguous
/// slice that can be filled independently. Row `0` is the bottom edge of the
/// view (`y0`), matching the math-space orientation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    window: Window,
    intensities: Vec<u16>,
}

impl Raster {
    #[must_use]
    pub fn new(window: Window) -> Self {
        Self {
            window,
            intensities: vec![0; window.pixel_count()],
        }
    }

    #[must_use]
    pub fn window(&self) -> Window {
        self.window
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.window.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.window.height()
    }

    #[must_use]
    pub fn intensity(&self, column: u32, row: u32) -> Option<u16> {
        if column >= self.width() || row >= self.height() {
            return None;
        }

        let index = column as usize * self.height() as usize + row as usize;
        self.intensities.get(index).copied()
    }

    #[must_use]
    pub fn column(&self, column: u32) -> Option<&[u16]> {
        let height = self.height() as usize;
        self.intensities.chunks_exact(height).nth(column as usize)
    }

    pub(crate) fn par_columns_mut(&mut self) -> rayon::slice::ChunksExactMut<'_, u16> {
        let height = self.height() as usize;
        self.intensities.par_chunks_exact_mut(height)
    }

    /// Intensities in row-major order, row `0` first (bottom of the view).
    #[must_use]
    pub fn to_gray16_row_major(&self) -> Vec<u16> {
        let height = self.height() as usize;
        let mut rows = Vec::with_capacity(self.intensities.len());

        for row in 0..height {
            rows.extend(self.intensities.iter().skip(row).step_by(height).copied());
        }

        rows
    }

    /// Copies the raster into an RGBA8 frame in device orientation (top row first).
    pub fn write_rgba8_top_down(&self, frame: &mut [u8]) -> Result<(), RasterError> {
        let expected = self.window.pixel_count() * RGBA_BYTES_PER_PIXEL;

        if frame.len() != expected {
            return Err(RasterError::BoundsMismatch {
                expected,
                actual: frame.len(),
            });
        }

        let width = self.width() as usize;
        let height = self.height() as usize;

        for (device_row, line) in frame
            .chunks_exact_mut(width * RGBA_BYTES_PER_PIXEL)
            .enumerate()
        {
            let row = height - 1 - device_row;

            for (column, pixel) in line.chunks_exact_mut(RGBA_BYTES_PER_PIXEL).enumerate() {
                let grey = (self.intensities[column * height + row] >> 8) as u8;
                pixel.copy_from_slice(&[grey, grey, grey, u8::MAX]);
            }
        }

        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn buffer_ptr(&self) -> *const u16 {
        self.intensities.as_ptr()
    }
}
