use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::core::data::raster::Raster;

/// Writes rasters as binary 16-bit PGM (P5, maxval 65535), top row first.
#[derive(Debug, Default)]
pub struct PgmFilePresenter {}

impl PgmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    pub fn present<W: Write>(&self, raster: &Raster, mut writer: W) -> io::Result<()> {
        // P5 header: width, height and max grey value, samples are big-endian
        writeln!(writer, "P5")?;
        writeln!(writer, "{} {}", raster.width(), raster.height())?;
        writeln!(writer, "{}", u16::MAX)?;

        let width = raster.width() as usize;
        let rows = raster.to_gray16_row_major();

        for line in rows.chunks_exact(width).rev() {
            for sample in line {
                writer.write_all(&sample.to_be_bytes())?;
            }
        }

        writer.flush()
    }

    pub fn present_to_file(&self, raster: &Raster, filepath: impl AsRef<Path>) -> io::Result<()> {
        let filepath = filepath.as_ref();

        if let Some(parent) = filepath.parent() {
            fs::create_dir_all(parent)?;
        }

        self.present(raster, BufWriter::new(fs::File::create(filepath)?))
    }
}
