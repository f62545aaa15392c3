use crate::core::data::complex::Complex;

/// Per-point escape-time evaluation used by the compute engine.
///
/// Implementations must be pure: the engine evaluates points from many
/// threads at once and in no particular order.
pub trait FractalAlgorithm: Sync {
    fn max_iterations(&self) -> u32;

    /// Escape value in `[0, max_iterations]`.
    fn escape_value(&self, c: Complex) -> u32;
}
