//! Open/closed visibility of the option list.

/// Whether the option list is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenState {
    #[default]
    Closed,
    Open,
}

/// What caused an open-state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenTrigger {
    /// Primary click on the control body that no sub-element consumed.
    BodyClick,
    /// The control lost focus.
    FocusLost,
    /// An option (or badge) was chosen.
    OptionChosen,
    /// The selection was cleared.
    Cleared,
}

impl OpenState {
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    /// Next state after `trigger`. Only a body click can open the list.
    pub fn next(self, trigger: OpenTrigger) -> Self {
        match trigger {
            OpenTrigger::BodyClick => self.toggled(),
            OpenTrigger::FocusLost | OpenTrigger::OptionChosen | OpenTrigger::Cleared => {
                Self::Closed
            }
        }
    }
}
