//! Decoding of winit input into explorer pointer events.

use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseScrollDelta};
use winit::keyboard::KeyCode;

use crate::controllers::zoom::events::PointerEvent;
use crate::core::data::point::PixelPoint;

/// Trackpads report pixels; treat this many as one wheel notch.
const PIXELS_PER_SCROLL_LINE: f64 = 20.0;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KeyCommand {
    ResetView,
    DoubleIterations,
    HalveIterations,
}

/// Remembers the last cursor position so button events can carry one.
#[derive(Debug, Default)]
pub struct PointerTracker {
    cursor: Option<PixelPoint>,
}

impl PointerTracker {
    pub fn cursor_moved(&mut self, position: PhysicalPosition<f64>) -> PointerEvent {
        let position = PixelPoint::new(position.x, position.y);
        self.cursor = Some(position);

        PointerEvent::Move { position }
    }

    /// `None` until the cursor has entered the window at least once.
    #[must_use]
    pub fn left_button(&self, state: ElementState) -> Option<PointerEvent> {
        let position = self.cursor?;

        Some(match state {
            ElementState::Pressed => PointerEvent::Press { position },
            ElementState::Released => PointerEvent::Release { position },
        })
    }
}

#[must_use]
pub fn scroll_event(delta: MouseScrollDelta) -> PointerEvent {
    let (delta_x, delta_y) = match delta {
        MouseScrollDelta::LineDelta(x, y) => (f64::from(x), f64::from(y)),
        MouseScrollDelta::PixelDelta(offset) => (
            offset.x / PIXELS_PER_SCROLL_LINE,
            offset.y / PIXELS_PER_SCROLL_LINE,
        ),
    };

    PointerEvent::Scroll { delta_x, delta_y }
}

#[must_use]
pub fn key_command(key_code: KeyCode) -> Option<KeyCommand> {
    match key_code {
        KeyCode::KeyR => Some(KeyCommand::ResetView),
        KeyCode::BracketRight => Some(KeyCommand::DoubleIterations),
        KeyCode::BracketLeft => Some(KeyCommand::HalveIterations),
        _ => None,
    }
}
