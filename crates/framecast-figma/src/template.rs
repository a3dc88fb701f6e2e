//! The per-element conversion pipeline.
//!
//! Every element definition goes through [`to_figma_node_with`]:
//!
//! 1. Build the tag's base frame.
//! 2. Without a `style` attribute, go straight to step 5.
//! 3. Parse the style and apply the common box styles in a fixed order:
//!    background, padding, border, size, min/max size.
//! 4. Run the element's custom-style hook, if any.
//! 5. Convert the children, if the element has a children hook, and attach them.
//!
//! No step can fail. A declaration that does not resolve leaves its field as
//! the base frame had it.

use framecast_css::values::parse_font_size;
use framecast_css::{BoxConstraints, ParsedStyle, ResolutionContext, ResolvedColor};
use framecast_dom::ElementData;

use crate::node::{FrameNode, OutputNode, Paint, SizingMode};

/// Step 4: element-specific styling on top of the common box styles.
pub type CustomStyleHook<'a> =
    dyn Fn(&mut FrameNode, &ElementData, &ParsedStyle, &ResolutionContext) + 'a;

/// Step 5: convert the element's children in the given context.
pub type ChildrenHook<'a> = dyn Fn(&ResolutionContext) -> Vec<OutputNode> + 'a;

/// The optional steps of the pipeline.
#[derive(Clone, Copy, Default)]
pub struct TemplateHooks<'a> {
    /// Runs after the common styles, only when the element has a `style` attribute.
    pub custom_style: Option<&'a CustomStyleHook<'a>>,
    /// Produces the frame's children.
    pub children: Option<&'a ChildrenHook<'a>>,
}

/// Run the conversion pipeline for one element.
#[must_use]
pub fn to_figma_node_with<B>(
    element: &ElementData,
    ctx: &ResolutionContext,
    base: B,
    hooks: TemplateHooks<'_>,
) -> FrameNode
where
    B: FnOnce(&ElementData, &ResolutionContext) -> FrameNode,
{
    let mut frame = base(element, ctx);

    let style = element.style().map(ParsedStyle::parse);
    if let Some(style) = &style {
        apply_common_styles(&mut frame, style, ctx);
        if let Some(custom_style) = hooks.custom_style {
            custom_style(&mut frame, element, style, ctx);
        }
    }

    if let Some(children) = hooks.children {
        let child_ctx = child_context(&frame, element, style.as_ref(), ctx);
        frame.children = children(&child_ctx);
    }

    frame
}

/// Step 3: background, padding, border, size, min/max size.
pub fn apply_common_styles(frame: &mut FrameNode, style: &ParsedStyle, ctx: &ResolutionContext) {
    // [§ 3.2 background-color](https://www.w3.org/TR/css-backgrounds-3/#background-color)
    // A `background` shorthand that is a single color counts too.
    let background = style
        .get("background-color")
        .or_else(|| style.get("background"))
        .and_then(ResolvedColor::parse);
    if let Some(color) = background {
        frame.fills = vec![Paint::from(color)];
    }

    let constraints = BoxConstraints::extract(style, ctx);

    let padding = constraints.padding;
    let sides = [
        (padding.top, &mut frame.padding_top),
        (padding.right, &mut frame.padding_right),
        (padding.bottom, &mut frame.padding_bottom),
        (padding.left, &mut frame.padding_left),
    ];
    for (value, field) in sides {
        if let Some(px) = value {
            *field = px;
        }
    }

    let border = constraints.border;
    if border.has_stroke() {
        // "Initial: currentcolor"; without a text color in scope that is black.
        let color = border.color.unwrap_or(ResolvedColor::BLACK);
        frame.strokes = vec![Paint::from(color)];
        frame.stroke_weight = border.weight;
    } else if border.is_cleared() {
        frame.strokes.clear();
        frame.stroke_weight = None;
    }
    if let Some(radius) = border.radius {
        frame.corner_radius = Some(radius);
    }

    let size = constraints.size;
    if let Some(hint) = size.horizontal {
        frame.layout_sizing_horizontal = hint.into();
        frame.width = size.width;
    }
    if let Some(hint) = size.vertical {
        frame.layout_sizing_vertical = hint.into();
        frame.height = size.height;
    }

    let limits = constraints.limits;
    frame.min_width = limits.min_width.or(frame.min_width);
    frame.max_width = limits.max_width.or(frame.max_width);
    frame.min_height = limits.min_height.or(frame.min_height);
    frame.max_height = limits.max_height.or(frame.max_height);
}

/// The context children of `frame` resolve in.
///
/// The container size is the frame's content box: its fixed size minus
/// padding, or for a FILL axis the parent's container minus padding. A
/// hugging axis has no known size. `font-size` becomes the new parent font
/// size, and on the root element the new root font size too.
#[must_use]
pub fn child_context(
    frame: &FrameNode,
    element: &ElementData,
    style: Option<&ParsedStyle>,
    ctx: &ResolutionContext,
) -> ResolutionContext {
    let content = |mode: SizingMode, size: Option<f64>, parent: Option<f64>, padding: f64| {
        let outer = match mode {
            SizingMode::Fixed => size,
            SizingMode::Fill => parent,
            SizingMode::Hug => None,
        }?;
        Some((outer - padding).max(0.0))
    };
    let width = content(
        frame.layout_sizing_horizontal,
        frame.width,
        ctx.container_width,
        frame.horizontal_padding(),
    );
    let height = content(
        frame.layout_sizing_vertical,
        frame.height,
        ctx.container_height,
        frame.vertical_padding(),
    );

    let mut child = ctx.with_container(width, height);
    if let Some(font_size) = style
        .and_then(|style| style.get("font-size"))
        .and_then(|value| parse_font_size(value, ctx))
    {
        child = child.with_parent_font_size(font_size);
        if element.is("html") {
            child = child.with_root_font_size(font_size);
        }
    }
    child
}
