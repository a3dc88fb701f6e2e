//! Output node model.
//!
//! Field and enum names follow the design tool's plugin API, so a serialized
//! tree can be handed to a plugin as-is: fields are camelCase, enum values
//! SCREAMING_SNAKE_CASE, and every node carries a `"type"` tag.

use serde::Serialize;

use framecast_css::{ResolvedColor, SizingHint};

/// A node in the output tree.
///
/// Only frames carry children.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OutputNode {
    /// An auto-layout container.
    Frame(FrameNode),
    /// A text leaf.
    Text(TextNode),
}

impl OutputNode {
    /// The node's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Frame(frame) => &frame.name,
            Self::Text(text) => &text.name,
        }
    }

    /// The frame, if this is one.
    #[must_use]
    pub const fn as_frame(&self) -> Option<&FrameNode> {
        match self {
            Self::Frame(frame) => Some(frame),
            Self::Text(_) => None,
        }
    }

    /// The text leaf, if this is one.
    #[must_use]
    pub const fn as_text(&self) -> Option<&TextNode> {
        match self {
            Self::Frame(_) => None,
            Self::Text(text) => Some(text),
        }
    }

    /// Children of a frame; text leaves have none.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Frame(frame) => &frame.children,
            Self::Text(_) => &[],
        }
    }
}

/// Stacking direction of an auto-layout frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutMode {
    /// No auto-layout; children keep their own positions.
    #[default]
    None,
    /// Children stack left to right.
    Horizontal,
    /// Children stack top to bottom.
    Vertical,
}

/// Whether children wrap onto new lines along the primary axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutWrap {
    /// Single line.
    #[default]
    NoWrap,
    /// Children wrap when they overflow.
    Wrap,
}

/// Alignment along the stacking direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrimaryAxisAlign {
    /// Packed at the start.
    #[default]
    Min,
    /// Packed at the end.
    Max,
    /// Packed in the middle.
    Center,
    /// First and last child at the edges, equal space between.
    SpaceBetween,
    /// Equal space around each child, half-size at the edges.
    SpaceAround,
    /// Equal space between children and at the edges.
    SpaceEvenly,
}

/// Alignment across the stacking direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CounterAxisAlign {
    /// Start edge.
    #[default]
    Min,
    /// End edge.
    Max,
    /// Centered.
    Center,
    /// Aligned on the first baseline.
    Baseline,
    /// Stretched to the frame's cross size.
    Stretch,
}

/// How a frame's size along one axis is decided.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SizingMode {
    /// An absolute size.
    Fixed,
    /// Shrink to the content.
    #[default]
    Hug,
    /// Grow to the parent.
    Fill,
}

impl From<SizingHint> for SizingMode {
    fn from(hint: SizingHint) -> Self {
        match hint {
            SizingHint::Fixed => Self::Fixed,
            SizingHint::Fill => Self::Fill,
            SizingHint::Hug => Self::Hug,
        }
    }
}

/// An RGB color with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgb {
    /// Red
    pub r: f64,
    /// Green
    pub g: f64,
    /// Blue
    pub b: f64,
}

/// A fill or stroke.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Paint {
    /// A flat color; CSS alpha becomes the paint opacity.
    Solid {
        /// Color without alpha.
        color: Rgb,
        /// Alpha, `[0, 1]`.
        opacity: f64,
    },
}

impl From<ResolvedColor> for Paint {
    fn from(color: ResolvedColor) -> Self {
        Self::Solid {
            color: Rgb {
                r: color.r,
                g: color.g,
                b: color.b,
            },
            opacity: color.a,
        }
    }
}

/// An auto-layout container.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameNode {
    /// Display name.
    pub name: String,
    /// Stacking direction.
    pub layout_mode: LayoutMode,
    /// Wrap behaviour.
    pub layout_wrap: LayoutWrap,
    /// Alignment along the stacking direction.
    pub primary_axis_align_items: PrimaryAxisAlign,
    /// Alignment across the stacking direction.
    pub counter_axis_align_items: CounterAxisAlign,
    /// Horizontal sizing mode.
    pub layout_sizing_horizontal: SizingMode,
    /// Vertical sizing mode.
    pub layout_sizing_vertical: SizingMode,
    /// Space between children along the stacking direction.
    pub item_spacing: f64,
    /// Space between wrapped lines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counter_axis_spacing: Option<f64>,
    /// Top padding.
    pub padding_top: f64,
    /// Right padding.
    pub padding_right: f64,
    /// Bottom padding.
    pub padding_bottom: f64,
    /// Left padding.
    pub padding_left: f64,
    /// Absolute width, when fixed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Absolute height, when fixed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Minimum width.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_width: Option<f64>,
    /// Maximum width.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<f64>,
    /// Minimum height.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height: Option<f64>,
    /// Maximum height.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_height: Option<f64>,
    /// Background paints.
    pub fills: Vec<Paint>,
    /// Border paints.
    pub strokes: Vec<Paint>,
    /// Border width.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_weight: Option<f64>,
    /// Uniform corner radius.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f64>,
    /// Share of the parent's free space this frame takes on the parent's primary axis.
    pub layout_grow: f64,
    /// Width divided by height, when an aspect ratio was applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<f64>,
    /// Child nodes; always present, possibly empty.
    pub children: Vec<OutputNode>,
}

impl FrameNode {
    /// A frame with no layout, hugging its content.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            layout_mode: LayoutMode::None,
            layout_wrap: LayoutWrap::NoWrap,
            primary_axis_align_items: PrimaryAxisAlign::Min,
            counter_axis_align_items: CounterAxisAlign::Min,
            layout_sizing_horizontal: SizingMode::Hug,
            layout_sizing_vertical: SizingMode::Hug,
            item_spacing: 0.0,
            counter_axis_spacing: None,
            padding_top: 0.0,
            padding_right: 0.0,
            padding_bottom: 0.0,
            padding_left: 0.0,
            width: None,
            height: None,
            min_width: None,
            max_width: None,
            min_height: None,
            max_height: None,
            fills: Vec::new(),
            strokes: Vec::new(),
            stroke_weight: None,
            corner_radius: None,
            layout_grow: 0.0,
            aspect_ratio: None,
            children: Vec::new(),
        }
    }

    /// Builder: set the stacking direction.
    #[must_use]
    pub const fn with_layout(mut self, mode: LayoutMode) -> Self {
        self.layout_mode = mode;
        self
    }

    /// Builder: fix the width and mark the horizontal axis FIXED.
    #[must_use]
    pub const fn with_fixed_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self.layout_sizing_horizontal = SizingMode::Fixed;
        self
    }

    /// Builder: fix the height and mark the vertical axis FIXED.
    #[must_use]
    pub const fn with_fixed_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self.layout_sizing_vertical = SizingMode::Fixed;
        self
    }

    /// Builder: set both sizing modes.
    #[must_use]
    pub const fn with_sizing(mut self, horizontal: SizingMode, vertical: SizingMode) -> Self {
        self.layout_sizing_horizontal = horizontal;
        self.layout_sizing_vertical = vertical;
        self
    }

    /// Total horizontal padding.
    #[must_use]
    pub fn horizontal_padding(&self) -> f64 {
        self.padding_left + self.padding_right
    }

    /// Total vertical padding.
    #[must_use]
    pub fn vertical_padding(&self) -> f64 {
        self.padding_top + self.padding_bottom
    }
}

/// Font style of a text leaf.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FontStyle {
    /// Upright.
    #[default]
    Normal,
    /// Italic or oblique.
    Italic,
}

/// Line height of a text leaf.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(tag = "unit", content = "value", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LineHeight {
    /// Derived from font metrics.
    #[default]
    Auto,
    /// Absolute pixels.
    Pixels(f64),
}

/// Decoration line of a text leaf.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextDecoration {
    /// No line.
    #[default]
    None,
    /// Underlined.
    Underline,
    /// Struck through.
    Strikethrough,
}

/// Horizontal alignment of a text leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextAlign {
    /// Start-aligned.
    Left,
    /// Centered.
    Center,
    /// End-aligned.
    Right,
    /// Justified.
    Justified,
}

/// Resolved typography of one text leaf.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    /// Family name.
    pub font_family: String,
    /// Size in pixels.
    pub font_size: f64,
    /// Numeric weight, 1 to 1000.
    pub font_weight: u16,
    /// Upright or italic.
    pub font_style: FontStyle,
    /// Line height.
    pub line_height: LineHeight,
    /// Letter spacing in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f64>,
    /// Text color.
    pub fills: Vec<Paint>,
    /// Decoration line.
    pub text_decoration: TextDecoration,
    /// Horizontal alignment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align_horizontal: Option<TextAlign>,
}

/// A text leaf.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextNode {
    /// Display name.
    pub name: String,
    /// The text.
    pub characters: String,
    /// Resolved typography.
    pub style: TextStyle,
}
