//! Raw input events - convert crossterm mouse events to scrolldom events.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use log::trace;

use crate::element::Element;
use crate::hit::hit_test;

/// Raw pointer/scroll events, the input alphabet of a scroll listener.
///
/// `screen_x` and `client_y` share the coordinate space of the element
/// tree's offset boxes.
#[derive(Debug, Clone, PartialEq)]
pub enum RawEvent {
    /// Primary button press. `target` is the element under the pointer,
    /// if any.
    MouseDown {
        screen_x: f64,
        client_y: f64,
        target: Option<String>,
    },
    /// Primary button release.
    MouseUp,
    /// Wheel input.
    Wheel,
    /// The element's content scrolled.
    Scroll,
}

/// Convert a crossterm mouse event to raw events, hit testing `root` for
/// press targets.
///
/// Wheel input expands to `Wheel` then `Scroll`: turning the wheel both
/// signals the wheel and scrolls the content under it, in that order.
pub fn convert_mouse_event(event: MouseEvent, root: &Element) -> Vec<RawEvent> {
    let x = f64::from(event.column);
    let y = f64::from(event.row);

    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let target = hit_test(root, x, y);
            vec![RawEvent::MouseDown {
                screen_x: x,
                client_y: y,
                target,
            }]
        }
        MouseEventKind::Up(MouseButton::Left) => vec![RawEvent::MouseUp],
        MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
            vec![RawEvent::Wheel, RawEvent::Scroll]
        }
        _ => {
            trace!("Ignoring mouse event: {:?}", event.kind);
            Vec::new()
        }
    }
}
