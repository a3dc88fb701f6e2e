//! Font property values.
//!
//! [CSS Fonts Level 4](https://www.w3.org/TR/css-fonts-4/)
//! [CSS Inline Layout Level 3](https://www.w3.org/TR/css-inline-3/)

use cssparser::{Parser, ParserInput, Token};
use serde::Serialize;

use super::length::{LengthValue, parse_length};
use crate::context::{Axis, DEFAULT_FONT_SIZE_PX, ResolutionContext};
use crate::style::split_components;

/// [§ 3.5 font-size](https://www.w3.org/TR/css-fonts-4/#font-size-prop)
///
/// "The following table provides user agent guidelines for the absolute-size
/// scaling factor" (relative to `medium`).
const ABSOLUTE_SIZES: &[(&str, f64)] = &[
    ("xx-small", 3.0 / 5.0),
    ("x-small", 3.0 / 4.0),
    ("small", 8.0 / 9.0),
    ("medium", 1.0),
    ("large", 6.0 / 5.0),
    ("x-large", 3.0 / 2.0),
    ("xx-large", 2.0),
    ("xxx-large", 3.0),
];

/// Scale factor applied to the parent size by `larger` and `smaller`.
const RELATIVE_SIZE_RATIO: f64 = 1.2;

/// [§ 3.5 font-size](https://www.w3.org/TR/css-fonts-4/#font-size-prop)
///
/// Resolve a `font-size` value to pixels.
///
/// "Percentages: refer to parent element's font size". `em` uses the parent
/// font size as well, `rem` uses the root font size.
#[must_use]
pub fn parse_font_size(value: &str, ctx: &ResolutionContext) -> Option<f64> {
    let keyword = value.trim().to_ascii_lowercase();
    if let Some((_, factor)) = ABSOLUTE_SIZES.iter().find(|(name, _)| *name == keyword) {
        return Some(DEFAULT_FONT_SIZE_PX * factor);
    }
    match keyword.as_str() {
        "larger" => return Some(ctx.parent_font_size * RELATIVE_SIZE_RATIO),
        "smaller" => return Some(ctx.parent_font_size / RELATIVE_SIZE_RATIO),
        _ => {}
    }

    let size = match LengthValue::parse(value)? {
        LengthValue::Percent(pct) => ctx.parent_font_size * pct / 100.0,
        other => other.to_px(ctx, Axis::Vertical)?,
    };
    // "Negative values are not allowed."
    (size >= 0.0).then_some(size)
}

/// [§ 2.2 font-weight](https://www.w3.org/TR/css-fonts-4/#font-weight-prop)
///
/// "normal: Same as 400. bold: Same as 700."
/// `bolder` and `lighter` are mapped to fixed weights since the parent
/// weight is not tracked at this point.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn parse_font_weight(value: &str) -> Option<u16> {
    match value.trim().to_ascii_lowercase().as_str() {
        "normal" => Some(400),
        "bold" | "bolder" => Some(700),
        "lighter" => Some(300),
        other => {
            // "Only values greater than or equal to 1, and less than or equal
            // to 1000, are valid"
            let weight: f64 = other.parse().ok()?;
            if (1.0..=1000.0).contains(&weight) {
                Some(weight.round() as u16)
            } else {
                None
            }
        }
    }
}

/// [§ 3.3 font-style](https://www.w3.org/TR/css-fonts-4/#font-style-prop)
///
/// `Some(true)` for `italic` and `oblique` (with or without an angle),
/// `Some(false)` for `normal`, `None` for anything else.
#[must_use]
pub fn is_italic(value: &str) -> Option<bool> {
    let value = value.trim().to_ascii_lowercase();
    let keyword = value.split_whitespace().next()?;
    match keyword {
        "italic" | "oblique" => Some(true),
        "normal" => Some(false),
        _ => None,
    }
}

/// [§ 3.1 font-family](https://www.w3.org/TR/css-fonts-4/#font-family-prop)
///
/// The first family in the fallback list, unquoted. Generic families are
/// returned as written.
#[must_use]
pub fn parse_font_family(value: &str) -> Option<String> {
    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);

    // "<family-name> = <string> | <custom-ident>+"
    let mut words: Vec<String> = Vec::new();
    while let Ok(token) = parser.next().cloned() {
        match token {
            Token::QuotedString(ref name) if words.is_empty() => {
                let name = name.trim();
                return (!name.is_empty()).then(|| name.to_string());
            }
            Token::Ident(ref word) => words.push(word.to_string()),
            Token::Comma => break,
            _ => return None,
        }
    }
    (!words.is_empty()).then(|| words.join(" "))
}

/// [§ 4.2 line-height](https://www.w3.org/TR/css-inline-3/#line-height-property)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "unit", content = "value", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LineHeight {
    /// "normal: Determine the preferred line height automatically based on font metrics."
    Normal,
    /// An absolute line height in pixels.
    Px(f64),
}

/// [§ 4.2 line-height](https://www.w3.org/TR/css-inline-3/#line-height-property)
///
/// "<number>: The computed value of the property is this number multiplied by
/// the element's computed font size." Percentages and `em` use the element's
/// font size too.
#[must_use]
pub fn parse_line_height(value: &str, font_size: f64, ctx: &ResolutionContext) -> Option<LineHeight> {
    if value.trim().eq_ignore_ascii_case("normal") {
        return Some(LineHeight::Normal);
    }

    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);
    let state = parser.state();
    let px = match parser.next().cloned() {
        Ok(Token::Number { value, .. }) => f64::from(value) * font_size,
        _ => {
            parser.reset(&state);
            match parse_length(&mut parser)? {
                LengthValue::Percent(pct) => font_size * pct / 100.0,
                LengthValue::Em(em) => font_size * em,
                other => other.to_px(&ctx.with_parent_font_size(font_size), Axis::Vertical)?,
            }
        }
    };
    (parser.is_exhausted() && px >= 0.0).then_some(LineHeight::Px(px))
}

/// [§ 3.1 text-decoration-line](https://www.w3.org/TR/css-text-decor-3/#text-decoration-line-property)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextDecorationLine {
    /// "Each line of text is underlined."
    pub underline: bool,
    /// "Each line of text has a line through the middle."
    pub line_through: bool,
}

impl TextDecorationLine {
    /// Parse a `text-decoration` shorthand or `text-decoration-line` value.
    ///
    /// Color and style components of the shorthand are ignored; `none` clears both lines.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        Self::try_parse(value).unwrap_or_default()
    }

    /// Like [`Self::parse`], but `None` when the value names no line at all,
    /// neither `none` nor a line keyword.
    #[must_use]
    pub fn try_parse(value: &str) -> Option<Self> {
        let mut lines = None;
        for component in split_components(value) {
            match component.to_ascii_lowercase().as_str() {
                "underline" => lines.get_or_insert_with(Self::default).underline = true,
                "line-through" => lines.get_or_insert_with(Self::default).line_through = true,
                "none" => lines = Some(Self::default()),
                _ => {}
            }
        }
        lines
    }

    /// Returns `true` if no line is drawn.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        !self.underline && !self.line_through
    }
}
