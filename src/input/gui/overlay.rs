use crate::core::data::math_rect::MathRect;
use crate::core::data::pixel_selection::PixelSelection;
use crate::core::data::rect::Rect;
use crate::core::data::window::Window;

const SELECTION_COLOUR: [u8; 4] = [255, 51, 51, 255];
const SELECTION_LINE_WIDTH: i64 = 2;

/// Outlines the selection on an RGBA8 frame in device orientation.
///
/// Parts of the outline that fall outside the frame are clipped.
pub fn draw_selection(frame: &mut [u8], window: &Window, selection: &PixelSelection) {
    let width = i64::from(window.width());
    let height = i64::from(window.height());
    let (top_left, bottom_right) = selection.to_device(window);

    let left = top_left.x.round() as i64;
    let right = bottom_right.x.round() as i64;
    let top = top_left.y.round() as i64;
    let bottom = bottom_right.y.round() as i64;

    let mut plot = |x: i64, y: i64| {
        if (0..width).contains(&x) && (0..height).contains(&y) {
            let index = ((y * width + x) * 4) as usize;
            frame[index..index + 4].copy_from_slice(&SELECTION_COLOUR);
        }
    };

    for inset in 0..SELECTION_LINE_WIDTH {
        for x in left.max(0)..=right.min(width - 1) {
            plot(x, top + inset);
            plot(x, bottom - inset);
        }

        for y in top.max(0)..=bottom.min(height - 1) {
            plot(left + inset, y);
            plot(right - inset, y);
        }
    }
}

#[must_use]
pub fn window_title(prefix: &str, view: &MathRect, window: &Window) -> String {
    format!(
        "{}: ({:.6}, {:.6}) - ({:.6}, {:.6}) {} x {}",
        prefix,
        view.x0(),
        view.y0(),
        view.x1(),
        view.y1(),
        window.width(),
        window.height()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(frame: &[u8], width: u32, x: usize, y: usize) -> [u8; 4] {
        let index = (y * width as usize + x) * 4;
        [frame[index], frame[index + 1], frame[index + 2], frame[index + 3]]
    }

    #[test]
    fn test_draw_selection_outlines_rectangle() {
        let window = Window::new(10, 10).unwrap();
        let mut frame = vec![0u8; 10 * 10 * 4];
        // bottom-left origin: rows 2..=8 from the bottom are device rows 2..=8
        let selection = PixelSelection::from_bounds(2.0, 2.0, 8.0, 8.0);

        draw_selection(&mut frame, &window, &selection);

        assert_eq!(pixel(&frame, 10, 2, 2), SELECTION_COLOUR);
        assert_eq!(pixel(&frame, 10, 8, 8), SELECTION_COLOUR);
        assert_eq!(pixel(&frame, 10, 3, 5), SELECTION_COLOUR);
        assert_eq!(pixel(&frame, 10, 5, 5), [0, 0, 0, 0]);
        assert_eq!(pixel(&frame, 10, 0, 0), [0, 0, 0, 0]);
    }

    #[test]
    fn test_draw_selection_clips_to_frame() {
        let window = Window::new(4, 4).unwrap();
        let mut frame = vec![0u8; 4 * 4 * 4];
        let selection = PixelSelection::from_bounds(-10.0, -10.0, 20.0, 20.0);

        draw_selection(&mut frame, &window, &selection);

        assert!(frame.iter().all(|&byte| byte == 0));
    }

    #[test]
    fn test_window_title_format() {
        let title = window_title(
            "Mandelbrot Set",
            &MathRect::new(-2.5, -1.0, 1.0, 1.0),
            &Window::new(1000, 700).unwrap(),
        );

        assert_eq!(
            title,
            "Mandelbrot Set: (-2.500000, -1.000000) - (1.000000, 1.000000) 1000 x 700"
        );
    }
}
