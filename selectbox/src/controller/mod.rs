//! Select controller - a dropdown with single or multiple selection.
//!
//! The controller owns only visual state (open/closed, focus, hover,
//! scroll). The selection value belongs to the caller: interaction proposes
//! a new value through the change handler, and the caller hands it back
//! with [`SelectController::set_value`].

pub mod events;
pub mod render;

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::config::{validate_options, SelectConfig};
use crate::element::{path_to, Element};
use crate::error::{Result, SelectError};
use crate::open_state::{OpenState, OpenTrigger};
use crate::option::SelectOption;
use crate::selection::{reduce_selection, SelectAction, SelectMode, SelectValue};

pub use events::EventResult;

/// Callback receiving every proposed selection value.
pub type ChangeHandler = Box<dyn FnMut(SelectValue)>;

fn next_select_id() -> String {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    format!("select-{}", COUNTER.fetch_add(1, Ordering::Relaxed))
}

/// A sub-element of the control that reacts to pointer input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    Body,
    Clear,
    /// Badge of the n-th selected option (multiple mode).
    Badge(usize),
    /// Row of the n-th option in the list.
    Option(usize),
    /// Frame of the open option list.
    List,
    /// Any other element of the control (value span, divider, caret).
    Other,
}

/// A select control bound to a caller-owned value.
///
/// # Example
///
/// ```ignore
/// let (tx, rx) = std::sync::mpsc::channel();
/// let mut select = SelectController::new(
///     SelectConfig::new(options).placeholder("Pick one"),
///     SelectValue::Single(None),
///     move |value| { let _ = tx.send(value); },
/// );
///
/// // after dispatching events:
/// for value in rx.try_iter() {
///     select.set_value(value)?;
/// }
/// ```
pub struct SelectController {
    id: String,
    config: SelectConfig,
    value: SelectValue,
    open: OpenState,
    focused: bool,
    hovered: Option<Part>,
    /// First option row shown in the list
    scroll: usize,
    on_change: ChangeHandler,
}

impl fmt::Debug for SelectController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectController")
            .field("id", &self.id)
            .field("value", &self.value)
            .field("open", &self.open)
            .field("focused", &self.focused)
            .field("hovered", &self.hovered)
            .finish_non_exhaustive()
    }
}

impl SelectController {
    /// Create a controller. The mode is taken from the shape of `value`.
    pub fn new(
        config: SelectConfig,
        value: SelectValue,
        on_change: impl FnMut(SelectValue) + 'static,
    ) -> Self {
        let id = config.id.clone().unwrap_or_else(next_select_id);
        if let Err(err) = validate_options(&config.options) {
            log::warn!("select {id}: {err}");
        }
        log::debug!(
            "select {id}: created in {} mode with {} options",
            value.mode(),
            config.options.len()
        );

        Self {
            id,
            config,
            value,
            open: OpenState::Closed,
            focused: false,
            hovered: None,
            scroll: 0,
            on_change: Box::new(on_change),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn config(&self) -> &SelectConfig {
        &self.config
    }

    pub fn mode(&self) -> SelectMode {
        self.value.mode()
    }

    pub fn value(&self) -> &SelectValue {
        &self.value
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.config.options
    }

    pub fn open_state(&self) -> OpenState {
        self.open
    }

    pub fn is_open(&self) -> bool {
        self.open.is_open()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn hovered(&self) -> Option<Part> {
        self.hovered
    }

    // -------------------------------------------------------------------------
    // Caller-supplied state
    // -------------------------------------------------------------------------

    /// Re-supply the controlled value.
    ///
    /// Rejects values whose shape does not match the control's mode.
    pub fn set_value(&mut self, value: SelectValue) -> Result<()> {
        if value.mode() != self.mode() {
            return Err(SelectError::ModeMismatch {
                expected: self.mode(),
                found: value.mode(),
            });
        }
        self.value = value;
        // Badge indices refer to the old value
        if matches!(self.hovered, Some(Part::Badge(_))) {
            self.hovered = None;
        }
        Ok(())
    }

    /// Replace the candidate list.
    pub fn set_options(&mut self, options: Vec<SelectOption>) {
        if let Err(err) = validate_options(&options) {
            log::warn!("select {}: {err}", self.id);
        }
        self.config.options = options;
        self.scroll = self.scroll.min(self.max_scroll());
        if matches!(self.hovered, Some(Part::Option(_))) {
            self.hovered = None;
        }
    }

    // -------------------------------------------------------------------------
    // Open/close state
    // -------------------------------------------------------------------------

    fn transition(&mut self, trigger: OpenTrigger) {
        let next = self.open.next(trigger);
        if next != self.open {
            log::debug!("select {}: {:?} -> {:?} ({:?})", self.id, self.open, next, trigger);
            self.open = next;
            if !next.is_open() && matches!(self.hovered, Some(Part::Option(_))) {
                self.hovered = None;
            }
        }
    }

    /// Flip the list open or closed.
    pub fn toggle_open(&mut self) {
        self.transition(OpenTrigger::BodyClick);
    }

    /// Close the list.
    pub fn close(&mut self) {
        self.transition(OpenTrigger::FocusLost);
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    fn propose(&mut self, action: SelectAction) {
        match reduce_selection(&self.value, &action, self.config.identity) {
            Some(next) => {
                log::debug!("select {}: proposing {} selected", self.id, next.selected().len());
                (self.on_change)(next);
            }
            None => log::trace!("select {}: selection unchanged", self.id),
        }
    }

    /// Choose `option`: replace the selection (single mode) or toggle its
    /// membership (multiple mode), then close.
    ///
    /// Consumes the originating event so it never reaches the body toggle.
    pub fn select_option(&mut self, option: &SelectOption) -> EventResult {
        self.transition(OpenTrigger::OptionChosen);
        self.propose(SelectAction::Toggle(option.clone()));
        EventResult::Consumed
    }

    /// Reset the selection to unset (single) or empty (multiple), then close.
    pub fn clear(&mut self) -> EventResult {
        self.transition(OpenTrigger::Cleared);
        self.propose(SelectAction::Clear);
        EventResult::Consumed
    }

    pub fn is_selected(&self, option: &SelectOption) -> bool {
        self.value.contains(option, self.config.identity)
    }

    // -------------------------------------------------------------------------
    // Element ids
    // -------------------------------------------------------------------------

    pub(crate) fn part_id(&self, suffix: &str) -> String {
        format!("{}-{}", self.id, suffix)
    }

    /// Whether the element `id` in `root` lies inside this control, i.e. its
    /// path from the root passes through the control body.
    pub fn owns(&self, root: &Element, id: &str) -> bool {
        path_to(root, id).is_some_and(|path| path.iter().any(|el| el.id == self.id))
    }

    /// The part hit by `target`, if it lies inside this control.
    pub(crate) fn target_part(&self, root: &Element, target: Option<&str>) -> Option<Part> {
        target
            .filter(|t| self.owns(root, t))
            .and_then(|t| self.part(t))
    }

    /// Classify one of this control's element ids.
    ///
    /// Only the id is inspected; use [`owns`](Self::owns) first when the id
    /// may belong to another control.
    pub fn part(&self, id: &str) -> Option<Part> {
        if id == self.id {
            return Some(Part::Body);
        }
        let rest = id.strip_prefix(self.id.as_str())?.strip_prefix('-')?;

        let indexed = |prefix: &str| -> Option<usize> { rest.strip_prefix(prefix)?.parse().ok() };
        let part = if rest == "clear" {
            Part::Clear
        } else if rest == "options" {
            Part::List
        } else if let Some(n) = indexed("badge-") {
            Part::Badge(n)
        } else if let Some(n) = indexed("opt-") {
            Part::Option(n)
        } else {
            Part::Other
        };
        Some(part)
    }

    // -------------------------------------------------------------------------
    // Scrolling
    // -------------------------------------------------------------------------

    pub(crate) fn visible_rows(&self) -> usize {
        self.config
            .options
            .len()
            .min(self.config.max_visible as usize)
    }

    fn max_scroll(&self) -> usize {
        self.config.options.len().saturating_sub(self.visible_rows())
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll
    }

    /// Scroll the open list by `delta` rows, clamped to the option count.
    pub fn scroll_by(&mut self, delta: isize) {
        let next = self.scroll.saturating_add_signed(delta).min(self.max_scroll());
        if next != self.scroll {
            log::trace!("select {}: scroll {} -> {}", self.id, self.scroll, next);
            self.scroll = next;
        }
    }
}
