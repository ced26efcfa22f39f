use std::collections::HashMap;

use super::Rect;
use crate::element::{Content, Element};
use crate::text::display_width;
use crate::types::{Border, Direction, Position, Size, Wrap};

pub type LayoutResult = HashMap<String, Rect>;

/// Compute a rect for every element in the tree.
pub fn layout(root: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    let width = resolve_size(root.width, available.width, root, true);
    let height = resolve_size(root.height, available.height, root, false);
    let rect = Rect::new(available.x, available.y, width, height);
    result.insert(root.id.clone(), rect);
    layout_children(root, rect, &mut result);
    result
}

/// The area inside an element's border and padding.
pub(crate) fn inner_rect(element: &Element, rect: Rect) -> Rect {
    let border = border_size(element);
    rect.shrink(
        element.padding.top + border,
        element.padding.right + border,
        element.padding.bottom + border,
        element.padding.left + border,
    )
}

fn border_size(element: &Element) -> u16 {
    if element.style.border == Border::None {
        0
    } else {
        1
    }
}

fn layout_children(element: &Element, rect: Rect, result: &mut LayoutResult) {
    let Content::Children(children) = &element.content else {
        return;
    };

    let inner = inner_rect(element, rect);
    let is_row = element.direction == Direction::Row;
    let main_size = if is_row { inner.width } else { inner.height };
    let cross_size = if is_row { inner.height } else { inner.width };

    let flow: Vec<&Element> = children
        .iter()
        .filter(|c| c.position == Position::Static)
        .collect();

    if is_row && element.wrap == Wrap::Wrap {
        layout_wrapped(element, inner, &flow, result);
        layout_absolute(children, rect, result);
        return;
    }

    // First pass: space taken by non-fill children
    let gap_total = element.gap * flow.len().saturating_sub(1) as u16;
    let mut fixed_total = 0u16;
    let mut fill_count = 0u16;
    for child in &flow {
        match main_axis(child, is_row) {
            Size::Fill => fill_count += 1,
            Size::Fixed(n) => fixed_total = fixed_total.saturating_add(n),
            Size::Auto => fixed_total = fixed_total.saturating_add(estimate_size(child, is_row)),
        }
    }

    let remaining = main_size.saturating_sub(fixed_total.saturating_add(gap_total));
    let fill_size = if fill_count > 0 {
        remaining / fill_count
    } else {
        0
    };

    // Second pass: place flow children one after another
    let mut offset = 0u16;
    for child in flow {
        let main = match main_axis(child, is_row) {
            Size::Fill => fill_size,
            Size::Fixed(n) => n,
            Size::Auto => estimate_size(child, is_row),
        };
        let main = main.min(main_size.saturating_sub(offset));

        let cross = match main_axis(child, !is_row) {
            Size::Fill => cross_size,
            Size::Fixed(n) => n,
            Size::Auto => estimate_size(child, !is_row),
        };
        let cross = cross.min(cross_size);

        let child_rect = if is_row {
            Rect::new(inner.x + offset, inner.y, main, cross)
        } else {
            Rect::new(inner.x, inner.y + offset, cross, main)
        };
        result.insert(child.id.clone(), child_rect);
        layout_children(child, child_rect, result);

        offset = offset.saturating_add(main).saturating_add(element.gap);
    }

    layout_absolute(children, rect, result);
}

/// Line index of every item when items of the given sizes are packed
/// greedily into lines of `available` cells. An item wider than a line gets
/// a line of its own.
pub(crate) fn wrap_lines(sizes: &[u16], available: u16, gap: u16) -> Vec<usize> {
    let mut lines = Vec::with_capacity(sizes.len());
    let mut line = 0;
    let mut used: Option<u16> = None;
    for &size in sizes {
        used = match used {
            Some(u) if u.saturating_add(gap).saturating_add(size) > available => {
                line += 1;
                Some(size)
            }
            Some(u) => Some(u + gap + size),
            None => Some(size),
        };
        lines.push(line);
    }
    lines
}

/// Row flow that moves children onto further lines instead of clipping them.
fn layout_wrapped(element: &Element, inner: Rect, flow: &[&Element], result: &mut LayoutResult) {
    let sizes: Vec<u16> = flow
        .iter()
        .map(|child| match child.width {
            Size::Fixed(n) => n,
            Size::Fill | Size::Auto => estimate_size(child, true),
        })
        .collect();
    let lines = wrap_lines(&sizes, inner.width, element.gap);

    let mut line = 0;
    let mut x = inner.x;
    let mut y = inner.y;
    let mut line_height = 0u16;
    for ((child, &width), &n) in flow.iter().zip(&sizes).zip(&lines) {
        if n != line {
            line = n;
            x = inner.x;
            y = y.saturating_add(line_height);
            line_height = 0;
        }

        let width = width.min(inner.right().saturating_sub(x));
        let height = match child.height {
            Size::Fixed(n) => n,
            Size::Fill => 1,
            Size::Auto => estimate_size(child, false),
        };
        line_height = line_height.max(height);

        let child_rect = Rect::new(x, y, width, height);
        result.insert(child.id.clone(), child_rect);
        layout_children(child, child_rect, result);

        x = x.saturating_add(width).saturating_add(element.gap);
    }
}

/// Absolute children overlay the parent and may extend past it.
fn layout_absolute(children: &[Element], rect: Rect, result: &mut LayoutResult) {
    for child in children.iter().filter(|c| c.position == Position::Absolute) {
        let width = match child.width {
            Size::Fill => rect.width,
            Size::Fixed(n) => n,
            Size::Auto => estimate_size(child, true),
        };
        let height = match child.height {
            Size::Fill => rect.height,
            Size::Fixed(n) => n,
            Size::Auto => estimate_size(child, false),
        };
        let child_rect = Rect::new(
            rect.x.saturating_add(child.left),
            rect.y.saturating_add(child.top),
            width,
            height,
        );
        result.insert(child.id.clone(), child_rect);
        layout_children(child, child_rect, result);
    }
}

fn main_axis(element: &Element, is_row: bool) -> Size {
    if is_row { element.width } else { element.height }
}

fn resolve_size(size: Size, available: u16, element: &Element, is_width: bool) -> u16 {
    match size {
        Size::Fixed(n) => n.min(available),
        Size::Fill => available,
        Size::Auto => estimate_size(element, is_width).min(available),
    }
}

/// Natural size of an element along one axis.
fn estimate_size(element: &Element, is_width: bool) -> u16 {
    if let Size::Fixed(n) = main_axis(element, is_width) {
        return n;
    }

    let padding = if is_width {
        element.padding.horizontal_total()
    } else {
        element.padding.vertical_total()
    };

    let content_size = match &element.content {
        Content::None => 0,
        Content::Text(text) => {
            if is_width {
                text.lines().map(display_width).max().unwrap_or(0) as u16
            } else {
                text.lines().count().max(1) as u16
            }
        }
        Content::Children(children) => {
            let flow = children.iter().filter(|c| c.position == Position::Static);
            let along_main = (element.direction == Direction::Row) == is_width;
            if along_main {
                let count = flow.clone().count();
                let gap_total = element.gap * count.saturating_sub(1) as u16;
                flow.map(|c| estimate_size(c, is_width)).sum::<u16>() + gap_total
            } else {
                flow.map(|c| estimate_size(c, is_width)).max().unwrap_or(0)
            }
        }
    };

    content_size + padding + border_size(element) * 2
}
