use crate::element::Element;
use crate::layout::LayoutResult;
use crate::render::paint_order;

/// Find the topmost clickable element at the given coordinates.
/// Returns None if no clickable element contains the point.
///
/// "Topmost" follows paint order, so an open option list wins over the
/// elements it is drawn on top of even though it lies outside its parent.
pub fn hit_test(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    paint_order(root)
        .into_iter()
        .rev()
        .filter(|(_, element)| element.clickable)
        .find(|(_, element)| {
            layout
                .get(&element.id)
                .is_some_and(|rect| rect.contains(x, y))
        })
        .map(|(_, element)| element.id.clone())
}
