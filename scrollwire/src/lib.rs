pub mod debounce;
pub mod events;
pub mod geometry;
pub mod gesture;
pub mod hit;
pub mod listener;
pub mod runtime;

pub use listener::{ScrollListener, attach_selector};

pub mod prelude {
    pub use crate::debounce::{SCROLL_END_DELAY, ScrollDebouncer};
    pub use crate::events::{Callbacks, ScrollbarEvent};
    pub use crate::geometry::{THUMB_PADDING, ThumbGeometry};
    pub use crate::gesture::{GestureState, PointerSnapshot};
    pub use crate::hit::{ThumbZone, classify};
    pub use crate::listener::{ScrollListener, attach_selector};

    pub use scrolldom::{Element, ElementError, OffsetBox, RawEvent};
}
