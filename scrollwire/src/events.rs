//! Semantic scrollbar events and the callback registry.

use std::fmt;

use log::trace;

const KIND_COUNT: usize = 9;

/// Semantic scrollbar interaction events.
///
/// `TrackClick` and `TrackDrag` are reserved: callers may register them,
/// but the classifier does not emit them yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollbarEvent {
    ThumbClick,
    TopThumbClick,
    BottomThumbClick,
    Track,
    TrackClick,
    TrackDrag,
    MouseWheel,
    ScrollStart,
    ScrollEnd,
}

impl ScrollbarEvent {
    /// All event kinds, in slot order.
    pub const ALL: [ScrollbarEvent; KIND_COUNT] = [
        ScrollbarEvent::ThumbClick,
        ScrollbarEvent::TopThumbClick,
        ScrollbarEvent::BottomThumbClick,
        ScrollbarEvent::Track,
        ScrollbarEvent::TrackClick,
        ScrollbarEvent::TrackDrag,
        ScrollbarEvent::MouseWheel,
        ScrollbarEvent::ScrollStart,
        ScrollbarEvent::ScrollEnd,
    ];

    /// The callback-table key for this kind.
    pub fn name(self) -> &'static str {
        match self {
            ScrollbarEvent::ThumbClick => "onThumbClick",
            ScrollbarEvent::TopThumbClick => "onTopThumbClick",
            ScrollbarEvent::BottomThumbClick => "onBottomThumbClick",
            ScrollbarEvent::Track => "onTrack",
            ScrollbarEvent::TrackClick => "onTrackClick",
            ScrollbarEvent::TrackDrag => "onTrackDrag",
            ScrollbarEvent::MouseWheel => "onMouseWheel",
            ScrollbarEvent::ScrollStart => "onScrollStart",
            ScrollbarEvent::ScrollEnd => "onScrollEnd",
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ScrollbarEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Callback registry: at most one handler per event kind.
///
/// Installed wholesale via `ScrollListener::listen`; a later table fully
/// replaces the earlier one. Missing entries are a no-op at emit time, so
/// a partially populated table never interrupts dispatch.
#[derive(Default)]
pub struct Callbacks {
    slots: [Option<Box<dyn FnMut()>>; KIND_COUNT],
}

impl Callbacks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the handler for one event kind, replacing any previous
    /// handler for that kind.
    pub fn on(mut self, event: ScrollbarEvent, callback: impl FnMut() + 'static) -> Self {
        self.slots[event.slot()] = Some(Box::new(callback));
        self
    }

    /// Invoke the handler for `event`, if one is registered.
    pub fn emit(&mut self, event: ScrollbarEvent) {
        match &mut self.slots[event.slot()] {
            Some(callback) => {
                trace!("Emitting {event}");
                callback();
            }
            None => trace!("No handler for {event}"),
        }
    }
}

impl fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registered: Vec<&str> = ScrollbarEvent::ALL
            .iter()
            .filter(|event| self.slots[event.slot()].is_some())
            .map(|event| event.name())
            .collect();
        f.debug_struct("Callbacks")
            .field("registered", &registered)
            .finish()
    }
}
