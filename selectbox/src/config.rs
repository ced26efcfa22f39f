//! Select configuration and option list loading.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{Result, SelectError};
use crate::option::{Identity, SelectOption};
use crate::theme::SelectTheme;

/// Configuration of a select control.
///
/// The selection mode is not part of the config: it follows from the
/// [`SelectValue`](crate::SelectValue) the control is created with.
///
/// # Example
///
/// ```ignore
/// let config = SelectConfig::new(options)
///     .id("country")
///     .placeholder("Choose country...")
///     .width(30);
/// ```
#[derive(Debug, Clone)]
pub struct SelectConfig {
    /// Element id of the control body. Generated when `None`.
    pub id: Option<String>,

    /// Candidate entries, in display order.
    pub options: Vec<SelectOption>,

    /// Text shown while nothing is selected.
    pub placeholder: Option<String>,

    /// How options are matched against the selection.
    pub identity: Identity,

    /// Disabled controls ignore clicks and render dimmed.
    pub disabled: bool,

    /// Width of the control in cells, border included.
    pub width: u16,

    /// Option rows shown at once before the list scrolls.
    pub max_visible: u16,

    pub theme: SelectTheme,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            id: None,
            options: Vec::new(),
            placeholder: None,
            identity: Identity::default(),
            disabled: false,
            width: 20,
            max_visible: 15,
            theme: SelectTheme::default(),
        }
    }
}

impl SelectConfig {
    /// Create a config offering the given options.
    pub fn new(options: impl IntoIterator<Item = SelectOption>) -> Self {
        Self {
            options: options.into_iter().collect(),
            ..Default::default()
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn identity(mut self, identity: Identity) -> Self {
        self.identity = identity;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }

    pub fn max_visible(mut self, rows: u16) -> Self {
        self.max_visible = rows.max(1);
        self
    }

    pub fn theme(mut self, theme: SelectTheme) -> Self {
        self.theme = theme;
        self
    }
}

/// Check that no two options share a value.
pub fn validate_options(options: &[SelectOption]) -> Result<()> {
    let mut seen = HashSet::with_capacity(options.len());
    for option in options {
        if !seen.insert(option.value()) {
            return Err(SelectError::DuplicateValue {
                value: option.value().clone(),
            });
        }
    }
    Ok(())
}

/// Parse an option list from JSON, e.g. `[{"label": "One", "value": 1}]`.
pub fn parse_options(json: &str) -> Result<Vec<SelectOption>> {
    let options: Vec<SelectOption> = serde_json::from_str(json)?;
    validate_options(&options)?;
    log::debug!("parsed {} options", options.len());
    Ok(options)
}

/// Read and parse an option list from a JSON file.
pub fn load_options(path: impl AsRef<Path>) -> Result<Vec<SelectOption>> {
    let path = path.as_ref();
    log::info!("loading options from {}", path.display());
    let json = fs::read_to_string(path)?;
    parse_options(&json)
}
