//! Flexbox to auto-layout mapping.
//!
//! [CSS Flexible Box Layout Level 1](https://www.w3.org/TR/css-flexbox-1/)
//!
//! A flex container becomes an auto-layout frame: the main axis is the
//! stacking direction, `justify-content` the primary alignment, `align-items`
//! the counter alignment. Per-item properties become grow factors and fixed
//! sizing on the child frame.

use std::str::FromStr;

use strum_macros::{Display, EnumString};

use framecast_css::{Axis, LengthValue, ParsedStyle, ResolutionContext, split_components};
use framecast_common::warning::warn_once;

use crate::node::{
    CounterAxisAlign, FrameNode, LayoutMode, LayoutWrap, PrimaryAxisAlign, SizingMode,
};
use crate::options::StretchAlignment;

/// [§ 5.1 flex-direction](https://www.w3.org/TR/css-flexbox-1/#flex-direction-property)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum FlexDirection {
    /// "The flex container's main axis has the same orientation as the inline axis"
    Row,
    /// "Same as row, except the main-start and main-end directions are swapped."
    RowReverse,
    /// "The flex container's main axis has the same orientation as the block axis"
    Column,
    /// "Same as column, except the main-start and main-end directions are swapped."
    ColumnReverse,
}

impl FlexDirection {
    /// Reversal has no auto-layout counterpart; only the axis survives.
    #[must_use]
    pub const fn layout_mode(self) -> LayoutMode {
        match self {
            Self::Row | Self::RowReverse => LayoutMode::Horizontal,
            Self::Column | Self::ColumnReverse => LayoutMode::Vertical,
        }
    }
}

/// [§ 5.2 flex-wrap](https://www.w3.org/TR/css-flexbox-1/#flex-wrap-property)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum FlexWrap {
    /// "The flex container is single-line."
    Nowrap,
    /// "The flex container is multi-line."
    Wrap,
    /// "Same as wrap." with cross-start and cross-end swapped.
    WrapReverse,
}

/// [§ 8.2 justify-content](https://www.w3.org/TR/css-flexbox-1/#justify-content-property)
///
/// The `start`/`end` aliases come from
/// [CSS Box Alignment](https://www.w3.org/TR/css-align-3/#positional-values).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum JustifyContent {
    /// "Flex items are packed toward the start of the line."
    #[strum(serialize = "flex-start", serialize = "start", serialize = "left", serialize = "normal")]
    FlexStart,
    /// "Flex items are packed toward the end of the line."
    #[strum(serialize = "flex-end", serialize = "end", serialize = "right")]
    FlexEnd,
    /// "Flex items are packed toward the center of the line."
    #[strum(serialize = "center")]
    Center,
    /// "Flex items are evenly distributed in the line."
    #[strum(serialize = "space-between")]
    SpaceBetween,
    /// "Flex items are evenly distributed in the line, with half-size spaces on either end."
    #[strum(serialize = "space-around")]
    SpaceAround,
    /// Equal space between items and at both edges.
    #[strum(serialize = "space-evenly")]
    SpaceEvenly,
}

impl JustifyContent {
    /// The primary-axis alignment for this value.
    #[must_use]
    pub const fn primary_axis(self) -> PrimaryAxisAlign {
        match self {
            Self::FlexStart => PrimaryAxisAlign::Min,
            Self::FlexEnd => PrimaryAxisAlign::Max,
            Self::Center => PrimaryAxisAlign::Center,
            Self::SpaceBetween => PrimaryAxisAlign::SpaceBetween,
            Self::SpaceAround => PrimaryAxisAlign::SpaceAround,
            Self::SpaceEvenly => PrimaryAxisAlign::SpaceEvenly,
        }
    }
}

/// [§ 8.3 align-items](https://www.w3.org/TR/css-flexbox-1/#align-items-property)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum AlignItems {
    /// "The cross-start margin edge of the flex item is placed flush with the
    /// cross-start edge of the line."
    #[strum(serialize = "flex-start", serialize = "start", serialize = "self-start")]
    FlexStart,
    /// "The cross-end margin edge of the flex item is placed flush with the
    /// cross-end edge of the line."
    #[strum(serialize = "flex-end", serialize = "end", serialize = "self-end")]
    FlexEnd,
    /// "The flex item's margin box is centered in the cross axis within the line."
    #[strum(serialize = "center")]
    Center,
    /// "The flex item participates in baseline alignment"
    #[strum(serialize = "baseline")]
    Baseline,
    /// "the cross size of the item's margin box is as close to the same size
    /// as the line as possible"
    #[strum(serialize = "stretch", serialize = "normal")]
    Stretch,
}

impl AlignItems {
    /// The counter-axis alignment for this value. `stretch` has no single
    /// equivalent; `stretch_as` decides it.
    #[must_use]
    pub const fn counter_axis(self, stretch_as: StretchAlignment) -> CounterAxisAlign {
        match self {
            Self::FlexStart => CounterAxisAlign::Min,
            Self::FlexEnd => CounterAxisAlign::Max,
            Self::Center => CounterAxisAlign::Center,
            Self::Baseline => CounterAxisAlign::Baseline,
            Self::Stretch => stretch_as.counter_axis(),
        }
    }
}

/// Parse a keyword property, reporting values outside the supported set.
fn keyword<T: FromStr>(style: &ParsedStyle, property: &str) -> Option<T> {
    let value = style.get(property)?;
    let parsed = value.trim().parse().ok();
    if parsed.is_none() {
        warn_once("Flex", &format!("unsupported {property}: {value}"));
    }
    parsed
}

/// [§ 3 Flex Containers](https://www.w3.org/TR/css-flexbox-1/#flex-containers)
///
/// "display: flex ... display: inline-flex"
#[must_use]
pub fn is_flex_container(style: &ParsedStyle) -> bool {
    style
        .get("display")
        .is_some_and(|d| d.eq_ignore_ascii_case("flex") || d.eq_ignore_ascii_case("inline-flex"))
}

/// Map container properties onto `frame`.
///
/// Does nothing unless `display` is `flex` or `inline-flex`. The layout mode
/// defaults to HORIZONTAL, matching the initial `flex-direction: row`.
pub fn apply_container(
    frame: &mut FrameNode,
    style: &ParsedStyle,
    stretch_as: StretchAlignment,
) {
    if !is_flex_container(style) {
        return;
    }

    frame.layout_mode = keyword::<FlexDirection>(style, "flex-direction")
        .map_or(LayoutMode::Horizontal, FlexDirection::layout_mode);

    if let Some(justify) = keyword::<JustifyContent>(style, "justify-content") {
        frame.primary_axis_align_items = justify.primary_axis();
    }
    if let Some(align) = keyword::<AlignItems>(style, "align-items") {
        frame.counter_axis_align_items = align.counter_axis(stretch_as);
    }
    if let Some(wrap) = keyword::<FlexWrap>(style, "flex-wrap") {
        frame.layout_wrap = match wrap {
            FlexWrap::Nowrap => LayoutWrap::NoWrap,
            FlexWrap::Wrap | FlexWrap::WrapReverse => LayoutWrap::Wrap,
        };
    }

    apply_gap(frame, style);
}

/// [§ 8.1 gap](https://www.w3.org/TR/css-align-3/#gap-shorthand)
///
/// "gap: <'row-gap'> <'column-gap'>?" with the longhands overriding. The gap
/// along the stacking direction becomes item spacing, the other one spacing
/// between wrapped lines.
///
/// Only values written in pixels count; a relative or percentage gap leaves
/// the spacing at zero.
pub fn apply_gap(frame: &mut FrameNode, style: &ParsedStyle) {
    let (mut row_gap, mut column_gap) = match style.get("gap") {
        Some(value) => match split_components(value).as_slice() {
            [both] => (pixel_gap(both), pixel_gap(both)),
            [row, column] => (pixel_gap(row), pixel_gap(column)),
            _ => (None, None),
        },
        None => (None, None),
    };
    if let Some(value) = style.get("row-gap") {
        row_gap = pixel_gap(value);
    }
    if let Some(value) = style.get("column-gap") {
        column_gap = pixel_gap(value);
    }

    let (main, cross) = match frame.layout_mode {
        LayoutMode::Vertical => (row_gap, column_gap),
        LayoutMode::Horizontal | LayoutMode::None => (column_gap, row_gap),
    };
    frame.item_spacing = main.unwrap_or(0.0);
    if frame.layout_wrap == LayoutWrap::Wrap {
        frame.counter_axis_spacing = cross;
    }
}

/// A gap written directly in pixels (or as a bare number).
fn pixel_gap(value: &str) -> Option<f64> {
    match LengthValue::parse(value)? {
        LengthValue::Px(px) if px >= 0.0 => Some(px),
        _ => None,
    }
}

/// Map flex item properties onto `frame`.
///
/// - [§ 7.1 flex](https://www.w3.org/TR/css-flexbox-1/#flex-property): the
///   grow factor, with `flex-grow` overriding the shorthand.
/// - [§ 7.3.2 flex-shrink](https://www.w3.org/TR/css-flexbox-1/#flex-shrink-property):
///   a non-shrinking item with a pixel width keeps that width.
/// - [§ 6.1 aspect-ratio](https://www.w3.org/TR/css-sizing-4/#aspect-ratio):
///   with a known width, the height follows from the ratio.
pub fn apply_item(frame: &mut FrameNode, style: &ParsedStyle, ctx: &ResolutionContext) {
    if let Some(grow) = style.get("flex").and_then(flex_shorthand_grow) {
        frame.layout_grow = grow;
    }
    if let Some(grow) = style.get("flex-grow").and_then(non_negative_number) {
        frame.layout_grow = grow;
    }

    let no_shrink = style
        .get("flex-shrink")
        .and_then(non_negative_number)
        .is_some_and(|shrink| shrink == 0.0);
    if no_shrink
        && let Some(width) = style
            .get("width")
            .and_then(|value| LengthValue::parse(value)?.to_px(ctx, Axis::Horizontal))
    {
        frame.width = Some(width);
        frame.layout_sizing_horizontal = SizingMode::Fixed;
        frame.layout_grow = 0.0;
    }

    if let Some((ratio_width, ratio_height)) = style.get("aspect-ratio").and_then(parse_aspect_ratio)
        && let Some(width) = frame.width
    {
        frame.height = Some(width * ratio_height / ratio_width);
        frame.layout_sizing_vertical = SizingMode::Fixed;
        frame.aspect_ratio = Some(ratio_width / ratio_height);
    }
}

/// "flex: none" is `0 0 auto`, "flex: auto" is `1 1 auto`, otherwise the
/// leading number is the grow factor.
fn flex_shorthand_grow(value: &str) -> Option<f64> {
    match value.trim().to_ascii_lowercase().as_str() {
        "none" => Some(0.0),
        "auto" => Some(1.0),
        other => non_negative_number(split_components(other).first()?),
    }
}

fn non_negative_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|n| n.is_finite() && *n >= 0.0)
}

/// "<ratio> = <number [0,∞]> [ / <number [0,∞]> ]?"
///
/// Returns the width and height terms. A leading `auto` is ignored.
fn parse_aspect_ratio(value: &str) -> Option<(f64, f64)> {
    let value = value.trim();
    let value = value
        .strip_prefix("auto")
        .map_or(value, str::trim_start)
        .trim();
    let (width, height) = match value.split_once('/') {
        Some((w, h)) => (non_negative_number(w)?, non_negative_number(h)?),
        None => (non_negative_number(value)?, 1.0),
    };
    (width > 0.0 && height > 0.0).then_some((width, height))
}
