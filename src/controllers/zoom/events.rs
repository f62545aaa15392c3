use crate::core::data::point::PixelPoint;

/// Already-decoded pointer input. Positions are device pixels, origin top-left.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PointerEvent {
    Press { position: PixelPoint },
    Release { position: PixelPoint },
    Move { position: PixelPoint },
    Scroll { delta_x: f64, delta_y: f64 },
}
