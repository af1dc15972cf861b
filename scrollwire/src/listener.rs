//! The listener controller: raw events in, semantic callbacks out.

use std::time::Instant;

use log::debug;
use scrolldom::{Element, ElementError, ElementParam, RawEvent, resolve_element};

use crate::debounce::ScrollDebouncer;
use crate::events::{Callbacks, ScrollbarEvent};
use crate::geometry::ThumbGeometry;
use crate::gesture::{GestureState, PointerSnapshot};
use crate::hit::ThumbZone;

/// Classifies raw input on one scrollable element into semantic
/// scrollbar events.
///
/// All mutable state (gesture, deadline, callbacks) is owned by the
/// instance. Dropping it, or calling [`detach`](Self::detach), cancels
/// the pending scroll-end deadline so nothing fires afterwards.
#[derive(Debug)]
pub struct ScrollListener {
    element_id: String,
    geometry: ThumbGeometry,
    gesture: GestureState,
    debounce: ScrollDebouncer,
    callbacks: Callbacks,
}

impl ScrollListener {
    /// Attach to an element.
    ///
    /// Geometry is computed here, before any event can be processed, and
    /// never refreshed. Callbacks may safely be installed afterwards via
    /// [`listen`](Self::listen): nothing emits before events are fed.
    pub fn attach(element: &Element) -> Self {
        let geometry = ThumbGeometry::compute(element);
        debug!("Attached to #{}: {:?}", element.id, geometry);
        Self {
            element_id: element.id.clone(),
            geometry,
            gesture: GestureState::new(),
            debounce: ScrollDebouncer::new(),
            callbacks: Callbacks::new(),
        }
    }

    /// Install the callback table, replacing any previous one.
    pub fn listen(&mut self, callbacks: Callbacks) {
        self.callbacks = callbacks;
    }

    /// Id of the tracked element.
    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    /// Thumb geometry computed at attach time.
    pub fn geometry(&self) -> &ThumbGeometry {
        &self.geometry
    }

    /// Feed one raw event into the classifier.
    pub fn on_event(&mut self, event: &RawEvent, now: Instant) {
        match event {
            RawEvent::MouseDown {
                screen_x,
                client_y,
                target: Some(target),
            } => {
                self.gesture.on_mouse_down(
                    PointerSnapshot {
                        screen_x: *screen_x,
                        client_y: *client_y,
                        target: target.clone(),
                    },
                    &self.element_id,
                );
            }
            RawEvent::MouseDown { target: None, .. } => {}
            RawEvent::MouseUp => self.resolve_gesture(),
            RawEvent::Wheel => {
                self.callbacks.emit(ScrollbarEvent::MouseWheel);
                self.gesture.on_wheel();
            }
            RawEvent::Scroll => self.on_scroll_tick(now),
        }
    }

    /// Fire the debounced scroll-end if its quiet period has elapsed.
    ///
    /// Call whenever `now` may have passed
    /// [`next_deadline`](Self::next_deadline).
    pub fn poll(&mut self, now: Instant) {
        if self.debounce.poll(now) {
            self.callbacks.emit(ScrollbarEvent::ScrollEnd);
            self.resolve_gesture();
        }
    }

    /// Deadline the surrounding event loop should wake at, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debounce.deadline()
    }

    /// Cancel the pending deadline and drop all callbacks. Nothing can
    /// fire after this.
    pub fn detach(&mut self) {
        debug!("Detached from #{}", self.element_id);
        self.debounce.cancel();
        self.callbacks = Callbacks::new();
    }

    fn on_scroll_tick(&mut self, now: Instant) {
        // A wheel-driven tick still opens the cycle, so the burst emits
        // no start at all rather than a late one.
        if self.debounce.tick(now) && !self.gesture.is_wheel_driven() {
            self.callbacks.emit(ScrollbarEvent::ScrollStart);
        }

        // Resolution runs on every tick, not only at the debounced end,
        // so mouse-up-before-settle and scroll-without-mouse resolve the
        // same way.
        self.resolve_gesture();
    }

    fn resolve_gesture(&mut self) {
        match self.gesture.resolve(&self.geometry) {
            Some(ThumbZone::Top) => {
                self.callbacks.emit(ScrollbarEvent::ThumbClick);
                self.callbacks.emit(ScrollbarEvent::TopThumbClick);
            }
            Some(ThumbZone::Bottom) => {
                self.callbacks.emit(ScrollbarEvent::ThumbClick);
                self.callbacks.emit(ScrollbarEvent::BottomThumbClick);
            }
            Some(ThumbZone::Outside) => self.callbacks.emit(ScrollbarEvent::Track),
            None => {}
        }
    }
}

/// Resolve `selector` against `root` and attach a listener to the match.
///
/// Fails with [`ElementError::InvalidParam`] when the selector is empty,
/// matches nothing, or matches a non-element node; no listener is
/// created on failure.
pub fn attach_selector(root: &Element, selector: &str) -> Result<ScrollListener, ElementError> {
    let element = resolve_element(root, ElementParam::Selector(selector))?;
    Ok(ScrollListener::attach(element))
}
