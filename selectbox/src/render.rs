use crate::buffer::Buffer;
use crate::element::{Content, Element};
use crate::layout::{LayoutResult, Rect};
use crate::layout::inner_rect;
use crate::text::char_width;
use crate::types::{Border, Rgb};

/// Elements in paint order: by effective z-index, then tree order.
///
/// Children inherit their parent's z-index as a minimum, so an absolutely
/// positioned option list and everything in it paint over later siblings.
pub(crate) fn paint_order(root: &Element) -> Vec<(i16, &Element)> {
    let mut list = Vec::new();
    collect(root, root.z_index, &mut list);
    // stable: equal z keeps tree order
    list.sort_by_key(|(z, _)| *z);
    list
}

fn collect<'a>(element: &'a Element, parent_z: i16, list: &mut Vec<(i16, &'a Element)>) {
    let z = element.z_index.max(parent_z);
    list.push((z, element));
    for child in element.child_elements() {
        collect(child, z, list);
    }
}

pub fn render_to_buffer(root: &Element, layout: &LayoutResult, buf: &mut Buffer) {
    let order = paint_order(root);
    log::trace!("rendering {} elements", order.len());
    for (_, element) in order {
        render_element(element, layout, buf);
    }
}

fn render_element(element: &Element, layout: &LayoutResult, buf: &mut Buffer) {
    let Some(rect) = layout.get(&element.id).copied() else {
        return;
    };

    if let Some(bg) = &element.style.background {
        fill_rect(buf, rect, bg.to_rgb());
    }

    render_border(element, rect, buf);

    if let Content::Text(text) = &element.content {
        render_text(text, element, rect, buf);
    }
}

fn fill_rect(buf: &mut Buffer, rect: Rect, bg: Rgb) {
    for y in rect.y..rect.bottom().min(buf.height()) {
        for x in rect.x..rect.right().min(buf.width()) {
            if let Some(cell) = buf.get_mut(x, y) {
                cell.char = ' ';
                cell.bg = bg;
                cell.wide_continuation = false;
            }
        }
    }
}

fn render_text(text: &str, element: &Element, rect: Rect, buf: &mut Buffer) {
    let fg = element.style.foreground.map(|c| c.to_rgb());
    let inner = inner_rect(element, rect);

    for (row, line) in text.lines().enumerate() {
        let y = inner.y.saturating_add(row as u16);
        if y >= inner.bottom() {
            break;
        }

        let mut x = inner.x;
        for ch in line.chars() {
            let width = char_width(ch) as u16;
            if width == 0 {
                continue;
            }
            if x + width > inner.right() {
                break;
            }

            // Keep whatever background is already painted underneath
            if let Some(cell) = buf.get_mut(x, y) {
                cell.char = ch;
                if let Some(fg) = fg {
                    cell.fg = fg;
                }
                cell.style = element.style.text_style;
                cell.wide_continuation = false;
            }
            if width == 2 {
                if let Some(cell) = buf.get_mut(x + 1, y) {
                    cell.char = ' ';
                    cell.wide_continuation = true;
                }
            }
            x += width;
        }
    }
}

fn render_border(element: &Element, rect: Rect, buf: &mut Buffer) {
    let (tl, tr, bl, br, h, v) = match element.style.border {
        Border::None => return,
        Border::Single => ('┌', '┐', '└', '┘', '─', '│'),
        Border::Rounded => ('╭', '╮', '╰', '╯', '─', '│'),
    };

    if rect.width < 2 || rect.height < 2 {
        return;
    }

    let fg = element.style.foreground.map(|c| c.to_rgb());
    let right = rect.right() - 1;
    let bottom = rect.bottom() - 1;

    set_char(buf, rect.x, rect.y, tl, fg);
    set_char(buf, right, rect.y, tr, fg);
    set_char(buf, rect.x, bottom, bl, fg);
    set_char(buf, right, bottom, br, fg);

    for x in (rect.x + 1)..right {
        set_char(buf, x, rect.y, h, fg);
        set_char(buf, x, bottom, h, fg);
    }

    for y in (rect.y + 1)..bottom {
        set_char(buf, rect.x, y, v, fg);
        set_char(buf, right, y, v, fg);
    }
}

fn set_char(buf: &mut Buffer, x: u16, y: u16, ch: char, fg: Option<Rgb>) {
    if let Some(cell) = buf.get_mut(x, y) {
        cell.char = ch;
        cell.wide_continuation = false;
        if let Some(fg) = fg {
            cell.fg = fg;
        }
    }
}
