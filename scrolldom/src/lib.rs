pub mod element;
pub mod event;
pub mod hit;
pub mod query;

pub use element::{Element, NodeKind, OffsetBox};
pub use event::{convert_mouse_event, RawEvent};
pub use hit::{hit_test, hit_test_scrollable};
pub use query::{resolve_element, ElementError, ElementParam};
