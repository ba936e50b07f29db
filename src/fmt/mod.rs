//! Line rendering: label colors, header flags and the composition of a
//! complete line.

mod color;
mod flags;
pub mod header;

pub use color::{Color, paint, try_paint};
pub use flags::Flags;
pub use header::format_line;
