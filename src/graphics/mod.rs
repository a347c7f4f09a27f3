mod canvas;
pub mod text;

pub use canvas::Canvas;
pub use text::{Font, FontError, system_font_candidates};
