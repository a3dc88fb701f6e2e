//! CSS Box Model extraction.
//!
//! [CSS Box Model Level 3](https://www.w3.org/TR/css-box-3/)
//!
//! Reads the box-related declarations of a [`ParsedStyle`] and resolves them to
//! absolute pixels. Anything that cannot be resolved is left as `None`; the
//! caller keeps its own default for that field.

use serde::Serialize;

use crate::context::{Axis, ResolutionContext};
use crate::style::{ParsedStyle, split_components};
use crate::values::{LengthValue, ResolvedColor, ResolvedLength, resolve_length};

/// How a node's dimension is decided along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SizingHint {
    /// An absolute pixel size.
    Fixed,
    /// Grow to fill the parent.
    Fill,
    /// Shrink to fit the content.
    Hug,
}

/// [§ 3.2 Padding](https://www.w3.org/TR/css-box-3/#paddings)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Padding {
    /// `padding-top`
    pub top: Option<f64>,
    /// `padding-right`
    pub right: Option<f64>,
    /// `padding-bottom`
    pub bottom: Option<f64>,
    /// `padding-left`
    pub left: Option<f64>,
}

impl Padding {
    /// [§ 3.2 Padding](https://www.w3.org/TR/css-box-3/#padding-shorthand)
    ///
    /// "If there is only one component value, it applies to all sides. If there
    /// are two values, the top and bottom are set to the first value and the
    /// right and left are set to the second. If there are three values, the
    /// top is set to the first value, the left and right are set to the second,
    /// and the bottom is set to the third. If there are four values they apply
    /// to the top, right, bottom, and left, respectively."
    ///
    /// The shorthand is read first; every present longhand then overwrites its
    /// side, whatever the declaration order was. A longhand that does not
    /// resolve leaves the shorthand's value in place.
    #[must_use]
    pub fn extract(style: &ParsedStyle, ctx: &ResolutionContext) -> Self {
        let mut padding = style
            .get("padding")
            .map(|value| Self::from_shorthand(value, ctx))
            .unwrap_or_default();

        let sides = [
            ("padding-top", &mut padding.top),
            ("padding-right", &mut padding.right),
            ("padding-bottom", &mut padding.bottom),
            ("padding-left", &mut padding.left),
        ];
        for (name, side) in sides {
            if let Some(px) = style.get(name).and_then(|value| padding_px(value, ctx)) {
                *side = Some(px);
            }
        }
        padding
    }

    fn from_shorthand(value: &str, ctx: &ResolutionContext) -> Self {
        let values: Vec<Option<f64>> = split_components(value)
            .into_iter()
            .map(|component| padding_px(component, ctx))
            .collect();
        let (top, right, bottom, left) = match values.as_slice() {
            [all] => (*all, *all, *all, *all),
            [vertical, horizontal] => (*vertical, *horizontal, *vertical, *horizontal),
            [top, horizontal, bottom] => (*top, *horizontal, *bottom, *horizontal),
            [top, right, bottom, left] => (*top, *right, *bottom, *left),
            _ => return Self::default(),
        };
        Self { top, right, bottom, left }
    }

    /// Sum of left and right padding, unset sides counting as zero.
    #[must_use]
    pub fn horizontal(&self) -> f64 {
        self.left.unwrap_or(0.0) + self.right.unwrap_or(0.0)
    }

    /// Sum of top and bottom padding, unset sides counting as zero.
    #[must_use]
    pub fn vertical(&self) -> f64 {
        self.top.unwrap_or(0.0) + self.bottom.unwrap_or(0.0)
    }

    /// Returns `true` if no side is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.top.is_none() && self.right.is_none() && self.bottom.is_none() && self.left.is_none()
    }
}

/// "Percentages: refer to logical width of containing block", on every side.
fn padding_px(value: &str, ctx: &ResolutionContext) -> Option<f64> {
    resolve_length(value, ctx, Axis::Horizontal)?
        .px()
        .filter(|px| *px >= 0.0)
}

/// [§ 4 Borders](https://www.w3.org/TR/css-backgrounds-3/#borders)
/// [§ 5 Rounded Corners](https://www.w3.org/TR/css-backgrounds-3/#corners)
///
/// A single uniform stroke; per-side borders collapse to the shorthand values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Border {
    /// Stroke width in pixels. `Some(0.0)` when a border is declared without
    /// a visible line style.
    pub weight: Option<f64>,
    /// Stroke color.
    pub color: Option<ResolvedColor>,
    /// Corner radius in pixels.
    pub radius: Option<f64>,
}

/// [§ 4.2 border-style](https://www.w3.org/TR/css-backgrounds-3/#border-style)
const BORDER_STYLES: &[&str] = &[
    "none", "hidden", "dotted", "dashed", "solid", "double", "groove", "ridge", "inset", "outset",
];

impl Border {
    /// Read `border`, `border-width`, `border-style`, `border-color` and
    /// `border-radius`. Longhands override the shorthand.
    #[must_use]
    pub fn extract(style: &ParsedStyle, ctx: &ResolutionContext) -> Self {
        let mut border = Self::default();
        let mut line_style: Option<String> = None;

        // [§ 4.4 border shorthand](https://www.w3.org/TR/css-backgrounds-3/#border-shorthands)
        // "<line-width> || <line-style> || <color>", in any order.
        if let Some(value) = style.get("border") {
            for component in split_components(value) {
                let lower = component.to_ascii_lowercase();
                if BORDER_STYLES.contains(&lower.as_str()) {
                    line_style = Some(lower);
                } else if let Some(width) = border_width(component, ctx) {
                    border.weight = Some(width);
                } else if let Some(color) = ResolvedColor::parse(component) {
                    border.color = Some(color);
                }
            }
        }

        if let Some(width) = style
            .get("border-width")
            .and_then(|value| split_components(value).first().and_then(|w| border_width(w, ctx)))
        {
            border.weight = Some(width);
        }
        if let Some(value) = style.get("border-style") {
            line_style = split_components(value).first().map(|s| s.to_ascii_lowercase());
        }
        if let Some(color) = style.get("border-color").and_then(ResolvedColor::parse) {
            border.color = Some(color);
        }

        // "none: No border. Color and width are ignored". The initial style
        // is none, so a width or color alone draws nothing either; a visible
        // style alone draws at the initial width, medium.
        let declared = ["border", "border-width", "border-style", "border-color"]
            .iter()
            .any(|name| style.contains(name));
        let visible = line_style
            .as_deref()
            .is_some_and(|line| !matches!(line, "none" | "hidden"));
        if visible {
            let _ = border.weight.get_or_insert(3.0);
        } else if declared {
            border.weight = Some(0.0);
        }

        // [§ 5.1 border-radius](https://www.w3.org/TR/css-backgrounds-3/#border-radius)
        // Corners are uniform here; the first value stands for all four.
        border.radius = style.get("border-radius").and_then(|value| {
            let first = *split_components(value).first()?;
            resolve_length(first, ctx, Axis::Horizontal)?
                .px()
                .filter(|px| *px >= 0.0)
        });

        border
    }

    /// Returns `true` if a visible stroke is described.
    #[must_use]
    pub fn has_stroke(&self) -> bool {
        self.weight.is_some_and(|w| w > 0.0)
    }

    /// Returns `true` if a border is declared but draws nothing.
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.weight == Some(0.0)
    }
}

/// [§ 4.3 border-width](https://www.w3.org/TR/css-backgrounds-3/#border-width)
///
/// "thin ≤ medium ≤ thick": 1px, 3px, 5px.
fn border_width(value: &str, ctx: &ResolutionContext) -> Option<f64> {
    match value.to_ascii_lowercase().as_str() {
        "thin" => Some(1.0),
        "medium" => Some(3.0),
        "thick" => Some(5.0),
        _ => match LengthValue::parse(value)? {
            LengthValue::Percent(_) => None,
            length => length.to_px(ctx, Axis::Horizontal).filter(|px| *px >= 0.0),
        },
    }
}

/// [§ 5.1 Preferred size properties](https://www.w3.org/TR/css-sizing-3/#preferred-size-properties)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sizing {
    /// Absolute width, set when the hint is [`SizingHint::Fixed`].
    pub width: Option<f64>,
    /// Absolute height, set when the hint is [`SizingHint::Fixed`].
    pub height: Option<f64>,
    /// Horizontal sizing hint, when `width` says anything.
    pub horizontal: Option<SizingHint>,
    /// Vertical sizing hint, when `height` says anything.
    pub vertical: Option<SizingHint>,
}

impl Sizing {
    /// Read `width` and `height`.
    #[must_use]
    pub fn extract(style: &ParsedStyle, ctx: &ResolutionContext) -> Self {
        let (width, horizontal) = style
            .get("width")
            .map_or((None, None), |value| size_along(value, ctx, Axis::Horizontal));
        let (height, vertical) = style
            .get("height")
            .map_or((None, None), |value| size_along(value, ctx, Axis::Vertical));
        Self {
            width,
            height,
            horizontal,
            vertical,
        }
    }
}

/// One dimension's pixel value and hint.
///
/// "auto" and the intrinsic keywords hug their content; a percentage with no
/// known container fills it. Anything unresolvable is left unset.
fn size_along(value: &str, ctx: &ResolutionContext, axis: Axis) -> (Option<f64>, Option<SizingHint>) {
    match value.trim().to_ascii_lowercase().as_str() {
        "auto" | "fit-content" | "min-content" | "max-content" => (None, Some(SizingHint::Hug)),
        _ => match resolve_length(value, ctx, axis) {
            Some(ResolvedLength::Px(px)) if px >= 0.0 => (Some(px), Some(SizingHint::Fixed)),
            Some(ResolvedLength::Fill) => (None, Some(SizingHint::Fill)),
            _ => (None, None),
        },
    }
}

/// [§ 5.2 Minimum size](https://www.w3.org/TR/css-sizing-3/#min-size-properties)
/// [§ 5.3 Maximum size](https://www.w3.org/TR/css-sizing-3/#max-size-properties)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeLimits {
    /// `min-width`
    pub min_width: Option<f64>,
    /// `max-width`
    pub max_width: Option<f64>,
    /// `min-height`
    pub min_height: Option<f64>,
    /// `max-height`
    pub max_height: Option<f64>,
}

impl SizeLimits {
    /// Read `min-width`, `max-width`, `min-height` and `max-height`.
    ///
    /// Only values that resolve to pixels are kept; `none` and percentages
    /// without a container leave the limit unset.
    #[must_use]
    pub fn extract(style: &ParsedStyle, ctx: &ResolutionContext) -> Self {
        let limit = |name: &str, axis: Axis| {
            resolve_length(style.get(name)?, ctx, axis)?
                .px()
                .filter(|px| *px >= 0.0)
        };
        Self {
            min_width: limit("min-width", Axis::Horizontal),
            max_width: limit("max-width", Axis::Horizontal),
            min_height: limit("min-height", Axis::Vertical),
            max_height: limit("max-height", Axis::Vertical),
        }
    }
}

/// Every box-model value the converter reads from one style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxConstraints {
    /// Padding per side.
    pub padding: Padding,
    /// Border stroke and corner radius.
    pub border: Border,
    /// Preferred width and height.
    pub size: Sizing,
    /// Min and max sizes.
    pub limits: SizeLimits,
}

impl BoxConstraints {
    /// Extract all box-model values from `style`.
    #[must_use]
    pub fn extract(style: &ParsedStyle, ctx: &ResolutionContext) -> Self {
        Self {
            padding: Padding::extract(style, ctx),
            border: Border::extract(style, ctx),
            size: Sizing::extract(style, ctx),
            limits: SizeLimits::extract(style, ctx),
        }
    }
}
