//! Drag-to-zoom gesture tracking.
//!
//! ```text
//! Idle --press--> Dragging --move--> Dragging --release--> Complete --consume()--> Idle
//! ```

use tracing::{debug, info};

use crate::controllers::zoom::events::PointerEvent;
use crate::core::data::errors::GeometryError;
use crate::core::data::math_rect::MathRect;
use crate::core::data::pixel_selection::PixelSelection;
use crate::core::data::point::PixelPoint;
use crate::core::data::window::Window;
use crate::core::util::normalize_selection::aspect_corrected_selection;
use crate::core::util::pixel_to_math::PixelToMath;

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub enum ZoomState {
    #[default]
    Idle,
    Dragging {
        anchor: PixelPoint,
        current: PixelPoint,
    },
    Complete {
        anchor: PixelPoint,
        current: PixelPoint,
    },
}

#[derive(Debug, Default)]
pub struct ZoomController {
    state: ZoomState,
}

impl ZoomController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> ZoomState {
        self.state
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, ZoomState::Dragging { .. })
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self.state, ZoomState::Complete { .. })
    }

    /// Scroll events are not part of the gesture and are ignored.
    pub fn handle_event(&mut self, event: &PointerEvent) {
        self.state = match (self.state, *event) {
            (ZoomState::Idle, PointerEvent::Press { position }) => ZoomState::Dragging {
                anchor: position,
                current: position,
            },
            (ZoomState::Dragging { anchor, .. }, PointerEvent::Move { position }) => {
                ZoomState::Dragging {
                    anchor,
                    current: position,
                }
            }
            (ZoomState::Dragging { anchor, .. }, PointerEvent::Release { position }) => {
                ZoomState::Complete {
                    anchor,
                    current: position,
                }
            }
            (state, _) => state,
        };
    }

    /// The aspect-corrected rectangle of a drag in progress, in window pixels
    /// (origin bottom-left). `None` when idle or while the drag has no area yet.
    #[must_use]
    pub fn current_selection_for_display(&self, window: &Window) -> Option<PixelSelection> {
        let ZoomState::Dragging { anchor, current } = self.state else {
            return None;
        };

        let selection = PixelSelection::from_device_corners(anchor, current, window);
        aspect_corrected_selection(&selection, window).ok()
    }

    /// Turns a completed drag into the next view and returns to `Idle`.
    ///
    /// The selection is mapped through `view`, the view active when the drag
    /// finished. Returns `Ok(None)` if no drag has completed. A selection
    /// without area still resets the gesture but yields `DegenerateSelection`.
    pub fn consume(
        &mut self,
        view: &MathRect,
        window: &Window,
    ) -> Result<Option<MathRect>, GeometryError> {
        let ZoomState::Complete { anchor, current } = self.state else {
            return Ok(None);
        };

        self.state = ZoomState::Idle;

        let selection = PixelSelection::from_device_corners(anchor, current, window);
        let corrected = aspect_corrected_selection(&selection, window).inspect_err(|err| {
            debug!(%err, "drag selection dropped");
        })?;
        let zoomed = PixelToMath::new(view, window).map_rect(&corrected);

        info!(?zoomed, "zoom selection applied");

        Ok(Some(zoomed))
    }
}
