//! Selection values and the pure reducer that proposes changes to them.

use std::fmt;

use crate::option::{Identity, SelectOption};

/// Selection mode of a select control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectMode {
    /// Zero or one option selected.
    #[default]
    Single,
    /// Any subset of options, in insertion order.
    Multiple,
}

impl fmt::Display for SelectMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => write!(f, "single"),
            Self::Multiple => write!(f, "multiple"),
        }
    }
}

/// The controlled value of a select.
///
/// The variant fixes the mode; a value of one shape is never accepted by a
/// control of the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectValue {
    Single(Option<SelectOption>),
    Multiple(Vec<SelectOption>),
}

impl Default for SelectValue {
    fn default() -> Self {
        Self::Single(None)
    }
}

impl SelectValue {
    /// The unset / empty value for a mode.
    pub fn empty(mode: SelectMode) -> Self {
        match mode {
            SelectMode::Single => Self::Single(None),
            SelectMode::Multiple => Self::Multiple(Vec::new()),
        }
    }

    pub fn mode(&self) -> SelectMode {
        match self {
            Self::Single(_) => SelectMode::Single,
            Self::Multiple(_) => SelectMode::Multiple,
        }
    }

    /// Selected options in display order.
    pub fn selected(&self) -> &[SelectOption] {
        match self {
            Self::Single(Some(option)) => std::slice::from_ref(option),
            Self::Single(None) => &[],
            Self::Multiple(options) => options,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.selected().is_empty()
    }

    /// Whether `option` is part of this value under the given identity.
    pub fn contains(&self, option: &SelectOption, identity: Identity) -> bool {
        match self {
            Self::Single(current) => current
                .as_ref()
                .is_some_and(|current| identity.matches(current, option)),
            Self::Multiple(options) => identity.contains(options, option),
        }
    }
}

/// A proposed change to a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectAction {
    /// An option was chosen (from the list or a badge).
    Toggle(SelectOption),
    /// The clear button was pressed.
    Clear,
}

/// Compute the value that results from applying `action` to `current`.
///
/// Returns `None` when no change is proposed, which only happens when the
/// option chosen in single mode is already the selection. Multiple mode
/// removes every entry matching the option, so a value holding duplicates
/// comes back without them.
pub fn reduce_selection(
    current: &SelectValue,
    action: &SelectAction,
    identity: Identity,
) -> Option<SelectValue> {
    match (current, action) {
        (SelectValue::Single(_), SelectAction::Clear) => Some(SelectValue::Single(None)),
        (SelectValue::Multiple(_), SelectAction::Clear) => Some(SelectValue::Multiple(Vec::new())),
        (SelectValue::Single(selected), SelectAction::Toggle(option)) => {
            let unchanged = selected
                .as_ref()
                .is_some_and(|selected| identity.matches(selected, option));
            if unchanged {
                None
            } else {
                Some(SelectValue::Single(Some(option.clone())))
            }
        }
        (SelectValue::Multiple(selected), SelectAction::Toggle(option)) => {
            if identity.contains(selected, option) {
                let remaining = selected
                    .iter()
                    .filter(|o| !identity.matches(o, option))
                    .cloned()
                    .collect();
                Some(SelectValue::Multiple(remaining))
            } else {
                let mut next = selected.clone();
                next.push(option.clone());
                Some(SelectValue::Multiple(next))
            }
        }
    }
}
