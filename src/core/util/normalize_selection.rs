use crate::core::data::errors::GeometryError;
use crate::core::data::pixel_selection::PixelSelection;
use crate::core::data::rect::Rect;
use crate::core::data::window::Window;

#[must_use]
pub fn normalize_selection(selection: &PixelSelection) -> PixelSelection {
    selection.normalized()
}

/// Normalizes a drag selection and widens it to the window's aspect ratio.
///
/// This is both the rectangle drawn on screen and the footprint of the next
/// view. A selection without area is rejected before any aspect math runs.
pub fn aspect_corrected_selection(
    selection: &PixelSelection,
    window: &Window,
) -> Result<PixelSelection, GeometryError> {
    let normalized = normalize_selection(selection);

    if normalized.width() <= 0.0 || normalized.height() <= 0.0 {
        return Err(GeometryError::DegenerateSelection {
            width: normalized.width(),
            height: normalized.height(),
        });
    }

    Ok(normalized.fit_aspect(window))
}
