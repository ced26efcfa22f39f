//! Error types for select configuration.

use thiserror::Error;

use crate::option::OptionValue;
use crate::selection::SelectMode;

/// Errors raised while configuring a select or supplying its value.
///
/// Interaction itself never fails; these only surface from construction-time
/// checks and from loading option lists.
#[derive(Debug, Error)]
pub enum SelectError {
    /// The supplied value does not have the shape of the control's mode.
    #[error("expected a {expected} selection value, got a {found} one")]
    ModeMismatch {
        expected: SelectMode,
        found: SelectMode,
    },

    /// Two options share a value, so their element keys collide.
    #[error("duplicate option value `{value}`")]
    DuplicateValue { value: OptionValue },

    #[error("failed to read options: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse options: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SelectError>;
