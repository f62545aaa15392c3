#[derive(Debug, Copy, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    #[error("window size must be positive: {width}x{height}")]
    InvalidWindow { width: u32, height: u32 },
    #[error("selection has no area: {width}x{height}")]
    DegenerateSelection { width: f64, height: f64 },
}
