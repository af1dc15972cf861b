use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// Node kind, the equivalent of a DOM node type.
///
/// Only element nodes participate in hit testing and can host a listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Element,
    Text,
}

/// Screen-space offset box of an element, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OffsetBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl OffsetBox {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Whether the point lies inside the box (right/bottom exclusive).
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x < self.right() && y >= self.top && y < self.bottom()
    }
}

/// A node in the element tree.
///
/// The tree is built once by the caller; listeners read ids and offset
/// boxes from it but never mutate it.
#[derive(Debug, Clone)]
pub struct Element {
    pub id: String,
    pub kind: NodeKind,
    pub rect: OffsetBox,
    /// Whether this element scrolls its overflowing content.
    pub scrollable: bool,
    pub children: Vec<Element>,
    /// Text content, for text nodes.
    pub text: Option<String>,
}

impl Element {
    /// Create an element node with the given id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: NodeKind::Element,
            rect: OffsetBox::default(),
            scrollable: false,
            children: Vec::new(),
            text: None,
        }
    }

    /// Create a text node. Text nodes get a generated id and take no part
    /// in hit testing.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            kind: NodeKind::Text,
            rect: OffsetBox::default(),
            scrollable: false,
            children: Vec::new(),
            text: Some(content.into()),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_rect(mut self, rect: OffsetBox) -> Self {
        self.rect = rect;
        self
    }

    pub fn scrollable(mut self, scrollable: bool) -> Self {
        self.scrollable = scrollable;
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: Vec<Element>) -> Self {
        self.children = children;
        self
    }

    /// Whether this is an element node (DOM node type 1).
    pub fn is_element(&self) -> bool {
        self.kind == NodeKind::Element
    }
}
