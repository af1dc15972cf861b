//! Element resolution - turn a selector or handle into a validated element.

use crate::element::Element;

/// Construction parameter: a selector string or a direct element handle.
#[derive(Debug, Clone, Copy)]
pub enum ElementParam<'a> {
    /// An id selector, `#some-id` or a bare id.
    Selector(&'a str),
    /// A handle to an element already in hand.
    Handle(&'a Element),
}

impl<'a> From<&'a str> for ElementParam<'a> {
    fn from(selector: &'a str) -> Self {
        ElementParam::Selector(selector)
    }
}

impl<'a> From<&'a Element> for ElementParam<'a> {
    fn from(element: &'a Element) -> Self {
        ElementParam::Handle(element)
    }
}

/// Error type for element resolution failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ElementError {
    /// The parameter was empty, matched nothing, or matched a node that
    /// is not an element node.
    #[error("Error parsing element param")]
    InvalidParam,
}

/// Resolve a construction parameter to a concrete element node.
///
/// Fails with [`ElementError::InvalidParam`] when the selector is empty,
/// matches nothing in the tree, or the matched node is not an element
/// node. A handle to a text node fails the same way.
pub fn resolve_element<'a>(
    root: &'a Element,
    param: ElementParam<'a>,
) -> Result<&'a Element, ElementError> {
    let element = match param {
        ElementParam::Handle(element) => element,
        ElementParam::Selector(selector) => {
            let id = selector.strip_prefix('#').unwrap_or(selector);
            if id.is_empty() {
                return Err(ElementError::InvalidParam);
            }
            find_by_id(root, id).ok_or(ElementError::InvalidParam)?
        }
    };

    if element.is_element() {
        Ok(element)
    } else {
        Err(ElementError::InvalidParam)
    }
}

fn find_by_id<'a>(element: &'a Element, id: &str) -> Option<&'a Element> {
    if element.id == id {
        return Some(element);
    }
    element
        .children
        .iter()
        .find_map(|child| find_by_id(child, id))
}
