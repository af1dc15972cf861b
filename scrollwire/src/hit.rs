//! Zone classification against the thumb geometry.

use crate::geometry::ThumbGeometry;
use crate::gesture::PointerSnapshot;

/// Where a pointer landed relative to the scrollbar thumb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThumbZone {
    /// In the thumb band, top zone.
    Top,
    /// In the thumb band, bottom zone.
    Bottom,
    /// On the track, or not on the scrollbar at all.
    Outside,
}

/// Classify a pointer position against the thumb geometry.
///
/// The horizontal band is half-open: `[left_edge - padding, left_edge)`.
/// Outside it everything is `Outside`, regardless of the vertical
/// coordinate. The top zone is checked before the bottom zone, so top
/// wins when the element is shorter than twice the padding and the zones
/// overlap.
pub fn classify(pointer: &PointerSnapshot, geometry: &ThumbGeometry) -> ThumbZone {
    let on_band = pointer.screen_x >= geometry.left_edge - geometry.padding
        && pointer.screen_x < geometry.left_edge;
    if !on_band {
        return ThumbZone::Outside;
    }

    if pointer.client_y > geometry.top_edge
        && pointer.client_y < geometry.top_edge + geometry.padding
    {
        return ThumbZone::Top;
    }

    if pointer.client_y < geometry.bottom_edge
        && pointer.client_y > geometry.bottom_edge - geometry.padding
    {
        return ThumbZone::Bottom;
    }

    ThumbZone::Outside
}
