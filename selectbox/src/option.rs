//! Selectable entries and how two entries are compared.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use serde_json::Number;

static NEXT_KEY: AtomicU64 = AtomicU64::new(0);

/// Instance key of a [`SelectOption`].
///
/// Every constructed option receives a fresh key. Clones keep the key of the
/// option they were cloned from, so a clone is the "same" option while an
/// independently built option with identical contents is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OptionKey(u64);

impl OptionKey {
    fn next() -> Self {
        Self(NEXT_KEY.fetch_add(1, Ordering::Relaxed))
    }
}

/// The value carried by an option. Also used as its element key.
///
/// Integers that fit an `i64` are `Int`; every other JSON number (fractions,
/// large unsigned values) is kept as a `Float`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Int(i64),
    Float(Number),
    Text(String),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for OptionValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for OptionValue {
    fn from(n: i32) -> Self {
        Self::Int(n.into())
    }
}

impl From<u32> for OptionValue {
    fn from(n: u32) -> Self {
        Self::Int(n.into())
    }
}

/// Non-finite floats have no JSON number form and become their text.
impl From<f64> for OptionValue {
    fn from(n: f64) -> Self {
        Number::from_f64(n).map_or_else(|| Self::Text(n.to_string()), Self::Float)
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// A single selectable entry.
///
/// Equality (`==`) compares label and value and ignores the instance key.
/// Use [`Identity`] when the comparison mode matters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectOption {
    #[serde(skip, default = "OptionKey::next")]
    key: OptionKey,
    label: String,
    value: OptionValue,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        Self {
            key: OptionKey::next(),
            label: label.into(),
            value: value.into(),
        }
    }

    /// Build an option from anything implementing [`SelectItem`].
    pub fn from_item(item: &impl SelectItem) -> Self {
        Self::new(item.select_label(), item.select_value())
    }

    pub fn key(&self) -> OptionKey {
        self.key
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> &OptionValue {
        &self.value
    }
}

impl PartialEq for SelectOption {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label && self.value == other.value
    }
}

impl Eq for SelectOption {}

/// Build an option list from items.
pub fn options_from<I>(items: I) -> Vec<SelectOption>
where
    I: IntoIterator,
    I::Item: SelectItem,
{
    items
        .into_iter()
        .map(|item| SelectOption::from_item(&item))
        .collect()
}

/// Trait for items that can be offered by a select.
///
/// # Example
///
/// ```ignore
/// struct Priority {
///     id: u32,
///     name: String,
/// }
///
/// impl SelectItem for Priority {
///     fn select_value(&self) -> OptionValue {
///         self.id.into()
///     }
///
///     fn select_label(&self) -> String {
///         self.name.clone()
///     }
/// }
/// ```
pub trait SelectItem {
    /// Value reported back to the caller when the item is selected.
    fn select_value(&self) -> OptionValue;

    /// Display text for this item.
    fn select_label(&self) -> String;
}

impl SelectItem for String {
    fn select_value(&self) -> OptionValue {
        OptionValue::Text(self.clone())
    }

    fn select_label(&self) -> String {
        self.clone()
    }
}

impl SelectItem for &str {
    fn select_value(&self) -> OptionValue {
        OptionValue::Text((*self).to_string())
    }

    fn select_label(&self) -> String {
        (*self).to_string()
    }
}

// (value, label) pairs
impl<V, L> SelectItem for (V, L)
where
    V: Into<OptionValue> + Clone,
    L: AsRef<str>,
{
    fn select_value(&self) -> OptionValue {
        self.0.clone().into()
    }

    fn select_label(&self) -> String {
        self.1.as_ref().to_string()
    }
}

/// How options are matched for equality and membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Identity {
    /// Options match when label and value are equal.
    #[default]
    ByValue,
    /// Options match only when they share an instance key (clones of one
    /// another). Distinct options with identical contents never match.
    ByInstance,
}

impl Identity {
    pub fn matches(self, a: &SelectOption, b: &SelectOption) -> bool {
        match self {
            Self::ByValue => a == b,
            Self::ByInstance => a.key == b.key,
        }
    }

    pub fn contains(self, options: &[SelectOption], option: &SelectOption) -> bool {
        options.iter().any(|o| self.matches(o, option))
    }
}
