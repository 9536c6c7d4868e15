pub mod layout;
pub mod styles;

pub use layout::*;
pub use styles::{border_style, key_desc_span, key_span, slice_color, title_style, Theme};
