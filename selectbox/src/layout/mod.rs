mod flex;
mod rect;

pub(crate) use flex::{inner_rect, wrap_lines};
pub use flex::{layout, LayoutResult};
pub use rect::Rect;
