mod node;

pub use node::{Content, Element};

/// Elements from `root` down to the element with `id`, both included.
///
/// Walking the result in reverse gives the bubbling order of an event
/// targeted at `id`.
pub fn path_to<'a>(root: &'a Element, id: &str) -> Option<Vec<&'a Element>> {
    if root.id == id {
        return Some(vec![root]);
    }

    for child in root.child_elements() {
        if let Some(mut path) = path_to(child, id) {
            path.insert(0, root);
            return Some(path);
        }
    }

    None
}
