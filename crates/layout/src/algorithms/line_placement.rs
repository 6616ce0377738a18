use super::line_packing::Line;
use wrapflow_types::geometry::{Rect, Size};

/// Lays out one row left to right from `x = 0`.
///
/// Every child keeps its own desired width and gets the shared `line_height`.
pub fn place_line(desired: &[Size], y: f32, line_height: f32) -> impl Iterator<Item = Rect> + '_ {
    desired.iter().scan(0.0f32, move |x, size| {
        let rect = Rect::new(*x, y, size.width, line_height);
        *x = rect.right();
        Some(rect)
    })
}

/// Maps packed lines to child rectangles, stacking lines from `y = 0`.
///
/// The returned rectangles are in child order. `lines` must partition
/// `desired`, as produced by [`pack_lines`](super::pack_lines).
pub fn place_lines(desired: &[Size], lines: &[Line]) -> Vec<Rect> {
    let mut rects = Vec::with_capacity(desired.len());
    let mut y = 0.0;
    for line in lines {
        rects.extend(place_line(&desired[line.range()], y, line.height));
        y += line.height;
    }
    rects
}

/// Places every child on a single row at `y = 0`, all `height` tall.
pub fn place_single_line(desired: &[Size], height: f32) -> Vec<Rect> {
    place_line(desired, 0.0, height).collect()
}
