//! A select box for terminal UIs.
//!
//! The control supports single and multiple selection. It is a controlled
//! component: the caller owns the selected value, the control proposes
//! changes through a change handler and the caller hands the value back.
//!
//! ```ignore
//! let options = options_from([(1, "One"), (2, "Two"), (3, "Three")]);
//! let mut select = SelectController::new(
//!     SelectConfig::new(options),
//!     SelectValue::Multiple(Vec::new()),
//!     |value| log::info!("proposed {:?}", value),
//! );
//! let root = select.view();
//! ```

pub mod buffer;
pub mod config;
pub mod controller;
pub mod element;
pub mod error;
pub mod event;
pub mod hit;
pub mod layout;
pub mod open_state;
pub mod option;
pub mod render;
pub mod selection;
pub mod terminal;
pub mod text;
pub mod theme;
pub mod types;

pub use buffer::{Buffer, Cell};
pub use config::{load_options, parse_options, validate_options, SelectConfig};
pub use controller::{EventResult, Part, SelectController};
pub use element::Element;
pub use error::{Result, SelectError};
pub use event::{translate_mouse, Event, MouseButton};
pub use hit::hit_test;
pub use layout::{layout, LayoutResult, Rect};
pub use open_state::{OpenState, OpenTrigger};
pub use option::{options_from, Identity, OptionKey, OptionValue, SelectItem, SelectOption};
pub use render::render_to_buffer;
pub use selection::{reduce_selection, SelectAction, SelectMode, SelectValue};
pub use terminal::Terminal;
pub use theme::SelectTheme;
pub use types::*;
