//! Per-gesture interaction state.

use log::debug;

use crate::geometry::ThumbGeometry;
use crate::hit::{ThumbZone, classify};

/// Pointer fields captured from a qualifying mouse-down, retained until
/// the gesture resolves.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerSnapshot {
    pub screen_x: f64,
    pub client_y: f64,
    /// Id of the element the press landed on.
    pub target: String,
}

/// State for the gesture in flight.
///
/// Empty between gestures; a captured snapshot or a raised wheel flag
/// means a resolution is pending. Resolution always resets to empty, so
/// the machine cycles indefinitely.
#[derive(Debug, Default)]
pub struct GestureState {
    start: Option<PointerSnapshot>,
    wheel_driven: bool,
}

impl GestureState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture the press position when it lands on the tracked element
    /// itself. Presses on descendants or unrelated elements are ignored.
    pub fn on_mouse_down(&mut self, snapshot: PointerSnapshot, tracked_id: &str) {
        if snapshot.target == tracked_id {
            debug!(
                "Captured press at ({}, {})",
                snapshot.screen_x, snapshot.client_y
            );
            self.start = Some(snapshot);
        }
    }

    /// Mark the gesture in flight as wheel-driven.
    pub fn on_wheel(&mut self) {
        self.wheel_driven = true;
    }

    pub fn is_wheel_driven(&self) -> bool {
        self.wheel_driven
    }

    /// Whether a press has been captured and awaits resolution.
    pub fn has_capture(&self) -> bool {
        self.start.is_some()
    }

    /// Resolve the gesture in flight and reset to the empty state.
    ///
    /// Returns `None` when there is nothing to classify: wheel-driven
    /// scrolls and gestures without a captured press stay silent. Cheap
    /// and idempotent, so callers may invoke it on every tick.
    pub fn resolve(&mut self, geometry: &ThumbGeometry) -> Option<ThumbZone> {
        if self.wheel_driven {
            self.reset();
            return None;
        }

        let snapshot = self.start.take()?;
        let zone = classify(&snapshot, geometry);
        debug!(
            "Resolved press at ({}, {}) as {:?}",
            snapshot.screen_x, snapshot.client_y, zone
        );
        Some(zone)
    }

    fn reset(&mut self) {
        self.start = None;
        self.wheel_driven = false;
    }
}
