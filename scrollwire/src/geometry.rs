//! Thumb geometry, computed once per listener.

use scrolldom::Element;

/// Width of the native scrollbar thumb band, in pixels. Also the height
/// of the top and bottom zones.
///
/// Each platform renders its own thumb size.
/// TODO: derive the padding from the host platform.
pub const THUMB_PADDING: f64 = 18.0;

/// Screen-space bounds of the vertical scrollbar's thumb track.
///
/// `left_edge` is the element's right edge; the thumb band extends
/// `padding` pixels to the left of it. Computed from the element's offset
/// box at attach time and never refreshed - callers that relayout must
/// attach a new listener.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbGeometry {
    pub padding: f64,
    pub left_edge: f64,
    pub top_edge: f64,
    pub bottom_edge: f64,
}

impl ThumbGeometry {
    /// Compute the thumb bounds from the element's offset box.
    pub fn compute(element: &Element) -> Self {
        Self {
            padding: THUMB_PADDING,
            left_edge: element.rect.right(),
            top_edge: element.rect.top,
            bottom_edge: element.rect.bottom(),
        }
    }
}
