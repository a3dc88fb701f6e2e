//! Inline style parsing and value resolution for the Framecast converter.
//!
//! # Scope
//!
//! This crate implements:
//! - **Style Parsing** ([CSS Style Attributes](https://www.w3.org/TR/css-style-attr/))
//!   - Declaration-list splitting into a flat property map
//!   - Last declaration wins, `!important` is dropped
//!
//! - **Values** ([CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/))
//!   - Lengths: px, em, rem, vw, vh, percentages
//!   - Two-operand `calc()` with `+` and `-`
//!   - Colors: hex, rgb(), rgba(), hsl(), hsla(), named colors, transparent
//!   - Font size, weight, style, family, line height, text decoration
//!
//! - **Box Model** ([CSS Box Model Level 3](https://www.w3.org/TR/css-box-3/))
//!   - Padding shorthand and longhands
//!   - Border, corner radius
//!   - Width/height with sizing hints, min/max constraints
//!
//! # Not Implemented
//!
//! - Selectors, stylesheets and the cascade (only inline `style` attributes)
//! - General `calc()` expressions (multiplication, division, nesting depth > 1 operator)
//! - Absolute units other than px

/// Box model extraction per [CSS Box Model Level 3](https://www.w3.org/TR/css-box-3/).
pub mod box_model;
/// Ambient numeric bases used to resolve relative units.
pub mod context;
/// Style attribute parsing per [CSS Style Attributes](https://www.w3.org/TR/css-style-attr/).
pub mod style;
/// CSS value types per [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/).
pub mod values;

pub use box_model::{Border, BoxConstraints, Padding, SizeLimits, Sizing, SizingHint};
pub use context::{
    Axis, DEFAULT_FONT_SIZE_PX, DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH,
    ResolutionContext,
};
pub use style::{ParsedStyle, split_components};
pub use values::{
    CalcExpr, CalcOp, LengthValue, LineHeight, ResolvedColor, ResolvedLength,
    TextDecorationLine, resolve_length,
};
