//! Event handling for the select controller.

use crate::element::{path_to, Element};
use crate::event::{Event, MouseButton};

use super::{Part, SelectController};

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, keep bubbling.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

impl SelectController {
    /// Dispatch an event against the tree it was targeted in.
    ///
    /// `root` is the tree the host rendered (it may hold other elements
    /// besides this control). Clicks bubble from the target towards the
    /// root until a handler consumes them. Clicks landing outside the
    /// control take its focus away.
    pub fn dispatch(&mut self, root: &Element, event: &Event) -> EventResult {
        match event {
            Event::Click { target, button, .. } => {
                if *button != MouseButton::Left {
                    return EventResult::Ignored;
                }
                match target.as_deref().filter(|t| self.owns(root, t)) {
                    Some(target) => self.on_click(root, target),
                    None => {
                        if self.focused {
                            self.blur();
                        }
                        EventResult::Ignored
                    }
                }
            }
            Event::MouseMove { target, .. } => {
                let part = self.target_part(root, target.as_deref());
                self.on_hover(part);
                EventResult::Ignored
            }
            Event::Scroll {
                target, delta_y, ..
            } => {
                let over_list = self
                    .target_part(root, target.as_deref())
                    .is_some_and(|p| matches!(p, Part::Option(_) | Part::List));
                if self.is_open() && over_list {
                    self.scroll_by(*delta_y as isize);
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                }
            }
            Event::Focus { target } if *target == self.id => {
                if !self.config.disabled {
                    self.focused = true;
                }
                EventResult::Ignored
            }
            Event::Blur { target } if *target == self.id => {
                self.blur();
                EventResult::Ignored
            }
            Event::Focus { .. } | Event::Blur { .. } => EventResult::Ignored,
        }
    }

    fn blur(&mut self) {
        log::debug!("select {}: blur", self.id);
        self.focused = false;
        self.hovered = None;
        self.close();
    }

    fn on_click(&mut self, root: &Element, target: &str) -> EventResult {
        if self.config.disabled {
            return EventResult::Ignored;
        }
        self.focused = true;

        let Some(path) = path_to(root, target) else {
            log::warn!("select {}: click target {target} not in tree", self.id);
            return EventResult::Ignored;
        };

        // Deepest first
        for element in path.iter().rev() {
            let result = self.handle_click(&element.id);
            if result.is_handled() {
                return result;
            }
        }
        EventResult::Ignored
    }

    /// Run the click handler of a single element, if it has one.
    fn handle_click(&mut self, id: &str) -> EventResult {
        match self.part(id) {
            Some(Part::Body) => {
                self.toggle_open();
                EventResult::Consumed
            }
            Some(Part::Clear) => self.clear(),
            Some(Part::Badge(n)) => match self.value.selected().get(n).cloned() {
                Some(option) => self.select_option(&option),
                None => EventResult::Ignored,
            },
            Some(Part::Option(n)) => match self.config.options.get(n).cloned() {
                Some(option) => self.select_option(&option),
                None => EventResult::Ignored,
            },
            Some(Part::List | Part::Other) | None => EventResult::Ignored,
        }
    }

    fn on_hover(&mut self, part: Option<Part>) {
        let hovered = part.filter(|p| matches!(p, Part::Clear | Part::Badge(_) | Part::Option(_)));
        if hovered != self.hovered {
            log::trace!("select {}: hover {:?}", self.id, hovered);
            self.hovered = hovered;
        }
    }
}
