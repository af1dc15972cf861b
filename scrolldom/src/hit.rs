use crate::element::{Element, NodeKind};

/// Find the deepest element node at the given coordinates.
/// Returns None if no element contains the point.
pub fn hit_test(root: &Element, x: f64, y: f64) -> Option<String> {
    hit_test_node(root, x, y)
}

fn hit_test_node(element: &Element, x: f64, y: f64) -> Option<String> {
    if !element.rect.contains(x, y) {
        return None;
    }

    // Check children in reverse order (last rendered = on top)
    for child in element.children.iter().rev() {
        if let Some(id) = hit_test_node(child, x, y) {
            return Some(id);
        }
    }

    // Text nodes are not valid event targets
    if element.kind == NodeKind::Element {
        Some(element.id.clone())
    } else {
        None
    }
}

/// Find the innermost scrollable element at the given coordinates.
/// Returns None if no scrollable element contains the point.
pub fn hit_test_scrollable(root: &Element, x: f64, y: f64) -> Option<String> {
    hit_test_scrollable_node(root, x, y)
}

fn hit_test_scrollable_node(element: &Element, x: f64, y: f64) -> Option<String> {
    if !element.rect.contains(x, y) {
        return None;
    }

    // Check children first (innermost takes priority)
    for child in element.children.iter().rev() {
        if let Some(id) = hit_test_scrollable_node(child, x, y) {
            return Some(id);
        }
    }

    if element.scrollable {
        Some(element.id.clone())
    } else {
        None
    }
}
