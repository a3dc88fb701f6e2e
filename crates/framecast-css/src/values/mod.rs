//! CSS Value types and parsing
//!
//! - [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)
//! - [CSS Color Level 4](https://www.w3.org/TR/css-color-4/)
//! - [CSS Fonts Module Level 4](https://www.w3.org/TR/css-fonts-4/)
//! - [CSS Text Decoration Level 3](https://www.w3.org/TR/css-text-decor-3/)

mod color;
mod font;
mod length;

pub use color::ResolvedColor;
pub use font::{
    LineHeight, TextDecorationLine, is_italic, parse_font_family, parse_font_size,
    parse_font_weight, parse_line_height,
};
pub use length::{CalcExpr, CalcOp, LengthValue, ResolvedLength, resolve_length};
