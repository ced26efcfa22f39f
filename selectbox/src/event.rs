use crossterm::event::{MouseEvent, MouseEventKind};

use crate::element::Element;
use crate::hit::hit_test;
use crate::layout::LayoutResult;

/// Pointer and focus events with element targeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Mouse button press. `target` is the topmost clickable element under
    /// the pointer, if any.
    Click {
        target: Option<String>,
        x: u16,
        y: u16,
        button: MouseButton,
    },
    /// Pointer moved (for hover tracking).
    MouseMove {
        target: Option<String>,
        x: u16,
        y: u16,
    },
    /// Wheel scroll. Positive `delta_y` scrolls down.
    Scroll {
        target: Option<String>,
        x: u16,
        y: u16,
        delta_y: i16,
    },
    /// Element gained focus
    Focus { target: String },
    /// Element lost focus
    Blur { target: String },
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}

/// Turn a crossterm mouse event into a targeted [`Event`].
///
/// Returns `None` for mouse activity the select does not react to
/// (releases, drags, horizontal scroll).
pub fn translate_mouse(mouse: &MouseEvent, layout: &LayoutResult, root: &Element) -> Option<Event> {
    let (x, y) = (mouse.column, mouse.row);
    let target = || hit_test(layout, root, x, y);

    match mouse.kind {
        MouseEventKind::Down(button) => Some(Event::Click {
            target: target(),
            x,
            y,
            button: button.into(),
        }),
        MouseEventKind::Moved => Some(Event::MouseMove {
            target: target(),
            x,
            y,
        }),
        MouseEventKind::ScrollDown => Some(Event::Scroll {
            target: target(),
            x,
            y,
            delta_y: 1,
        }),
        MouseEventKind::ScrollUp => Some(Event::Scroll {
            target: target(),
            x,
            y,
            delta_y: -1,
        }),
        _ => None,
    }
}
