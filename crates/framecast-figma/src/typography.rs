//! Inline markup decomposition into styled text runs.
//!
//! [CSS Inline Layout Level 3](https://www.w3.org/TR/css-inline-3/)
//!
//! The children of a text-bearing element are flattened into an ordered list
//! of runs. Each run is a [`ChildTextNode`]: plain text, or the text of one
//! inline element tagged with its kind. A run's style is composed from, lowest
//! to highest precedence:
//!
//! 1. the style inherited from the enclosing block,
//! 2. the defaults of the run's kind (`code` is monospace, `b` is bold, ...),
//! 3. the run's own `style` attribute.
//!
//! A declaration that does not parse has no effect in its layer; the value
//! below it stays.
//!
//! Inline elements that contain further elements are decomposed recursively,
//! with their composed style becoming the parent style of their children.

use serde::Serialize;

use framecast_css::values::{
    LineHeight as CssLineHeight, is_italic, parse_font_family, parse_font_size,
    parse_font_weight, parse_line_height,
};
use framecast_css::{
    Axis, LengthValue, ParsedStyle, ResolutionContext, ResolvedColor, TextDecorationLine,
};
use framecast_dom::{DomTree, NodeId, NodeType};

use crate::node::{
    FontStyle, LineHeight, OutputNode, Paint, TextAlign, TextDecoration, TextNode, TextStyle,
};

/// Family used when nothing in scope names one.
pub const DEFAULT_FONT_FAMILY: &str = "Inter";

/// Weight at and above which a run counts as bold.
pub const BOLD_WEIGHT: u16 = 700;

/// Default weight, "normal".
const NORMAL_WEIGHT: u16 = 400;

/// The text of one run and its own inline style.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextRun {
    /// The run's characters.
    pub content: String,
    /// The `style` attribute of the run's element, if it had one.
    pub styles: Option<ParsedStyle>,
}

impl TextRun {
    /// A run with no style of its own.
    #[must_use]
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            styles: None,
        }
    }

    /// A run with an own style.
    #[must_use]
    pub fn styled(content: impl Into<String>, styles: ParsedStyle) -> Self {
        Self {
            content: content.into(),
            styles: Some(styles),
        }
    }
}

/// One run of inline content, classified by the markup that produced it.
///
/// The set of kinds is closed. Every consumer matches it exhaustively, so a
/// new kind does not compile until each of them handles it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChildTextNode {
    /// A text node.
    Text(TextRun),
    /// `<bold>`
    Bold(TextRun),
    /// `<italic>`
    Italic(TextRun),
    /// `<strong>`
    Strong(TextRun),
    /// `<em>`
    Em(TextRun),
    /// `<b>`
    B(TextRun),
    /// `<i>`
    I(TextRun),
    /// `<code>`
    Code(TextRun),
    /// `<del>`
    Del(TextRun),
    /// `<ins>`
    Ins(TextRun),
    /// `<sub>`
    Sub(TextRun),
    /// `<sup>`
    Sup(TextRun),
    /// Any other inline element, with its tag name.
    Other(String, TextRun),
}

impl ChildTextNode {
    /// Classify an inline element's run by its tag name.
    #[must_use]
    pub fn from_element(tag_name: &str, run: TextRun) -> Self {
        match tag_name.to_ascii_lowercase().as_str() {
            "bold" => Self::Bold(run),
            "italic" => Self::Italic(run),
            "strong" => Self::Strong(run),
            "em" => Self::Em(run),
            "b" => Self::B(run),
            "i" => Self::I(run),
            "code" => Self::Code(run),
            "del" => Self::Del(run),
            "ins" => Self::Ins(run),
            "sub" => Self::Sub(run),
            "sup" => Self::Sup(run),
            other => Self::Other(other.to_string(), run),
        }
    }

    /// The run's text and own style.
    #[must_use]
    pub const fn run(&self) -> &TextRun {
        match self {
            Self::Text(run)
            | Self::Bold(run)
            | Self::Italic(run)
            | Self::Strong(run)
            | Self::Em(run)
            | Self::B(run)
            | Self::I(run)
            | Self::Code(run)
            | Self::Del(run)
            | Self::Ins(run)
            | Self::Sub(run)
            | Self::Sup(run)
            | Self::Other(_, run) => run,
        }
    }

    const fn run_mut(&mut self) -> &mut TextRun {
        match self {
            Self::Text(run)
            | Self::Bold(run)
            | Self::Italic(run)
            | Self::Strong(run)
            | Self::Em(run)
            | Self::B(run)
            | Self::I(run)
            | Self::Code(run)
            | Self::Del(run)
            | Self::Ins(run)
            | Self::Sub(run)
            | Self::Sup(run)
            | Self::Other(_, run) => run,
        }
    }

    /// The tag that produced the run; `None` for plain text.
    #[must_use]
    pub fn tag_name(&self) -> Option<&str> {
        match self {
            Self::Text(_) => None,
            Self::Bold(_) => Some("bold"),
            Self::Italic(_) => Some("italic"),
            Self::Strong(_) => Some("strong"),
            Self::Em(_) => Some("em"),
            Self::B(_) => Some("b"),
            Self::I(_) => Some("i"),
            Self::Code(_) => Some("code"),
            Self::Del(_) => Some("del"),
            Self::Ins(_) => Some("ins"),
            Self::Sub(_) => Some("sub"),
            Self::Sup(_) => Some("sup"),
            Self::Other(tag, _) => Some(tag.as_str()),
        }
    }

    /// The style this kind of markup adds between the inherited style and
    /// the run's own style.
    ///
    /// [§ 15.3.4 Phrasing content](https://html.spec.whatwg.org/multipage/rendering.html#phrasing-content-3)
    #[must_use]
    pub fn inline_style(&self) -> ParsedStyle {
        let declarations: &[(&str, &str)] = match self {
            Self::Text(_) | Self::Other(..) => &[],
            // "b, strong { font-weight: bolder; }"
            Self::Bold(_) | Self::Strong(_) | Self::B(_) => &[("font-weight", "700")],
            // "cite, dfn, em, i, var { font-style: italic; }"
            Self::Italic(_) | Self::Em(_) | Self::I(_) => &[("font-style", "italic")],
            // "code, kbd, samp, tt { font-family: monospace; }"
            Self::Code(_) => &[
                ("font-family", "monospace"),
                ("font-size", "14px"),
                ("font-weight", "400"),
            ],
            // "del, s, strike { text-decoration: line-through; }"
            Self::Del(_) => &[("text-decoration", "line-through")],
            // "ins, u { text-decoration: underline; }"
            Self::Ins(_) => &[("text-decoration", "underline")],
            // "sub { vertical-align: sub; } sup { vertical-align: super; }" with
            // "sub, sup { font-size: smaller; }"
            Self::Sub(_) | Self::Sup(_) => &[("font-size", "0.75em")],
        };
        declarations.iter().copied().collect()
    }

    /// Returns `true` for the italic markup kinds.
    #[must_use]
    pub const fn is_italic_markup(&self) -> bool {
        match self {
            Self::Italic(_) | Self::Em(_) | Self::I(_) => true,
            Self::Text(_)
            | Self::Bold(_)
            | Self::Strong(_)
            | Self::B(_)
            | Self::Code(_)
            | Self::Del(_)
            | Self::Ins(_)
            | Self::Sub(_)
            | Self::Sup(_)
            | Self::Other(..) => false,
        }
    }

    /// Convert the run into a text leaf.
    ///
    /// `element_type` is the tag of the enclosing block. Inside a heading the
    /// tag name is left out of the metadata and italic markup is forced
    /// italic even against the run's own style.
    #[must_use]
    pub fn into_result(
        self,
        parent_style: &ParsedStyle,
        element_type: &str,
        ctx: &ResolutionContext,
    ) -> ChildNodeResult {
        let heading = is_heading(element_type);

        let mut composed = parent_style.clone();
        cascade_onto(&mut composed, &self.inline_style(), ctx);
        if let Some(own) = &self.run().styles {
            cascade_onto(&mut composed, own, ctx);
        }

        let mut style = TextStyle::resolve(&composed, ctx);
        if heading && self.is_italic_markup() {
            style.font_style = FontStyle::Italic;
        }

        let metadata = RunMetadata {
            is_text: matches!(self, Self::Text(_)),
            is_bold: style.font_weight >= BOLD_WEIGHT,
            is_italic: style.font_style == FontStyle::Italic,
            tag_name: if heading {
                None
            } else {
                self.tag_name().map(str::to_string)
            },
        };

        let name = self.tag_name().unwrap_or("Text").to_string();
        let TextRun { content, .. } = match self {
            Self::Text(run)
            | Self::Bold(run)
            | Self::Italic(run)
            | Self::Strong(run)
            | Self::Em(run)
            | Self::B(run)
            | Self::I(run)
            | Self::Code(run)
            | Self::Del(run)
            | Self::Ins(run)
            | Self::Sub(run)
            | Self::Sup(run)
            | Self::Other(_, run) => run,
        };

        ChildNodeResult {
            node: OutputNode::Text(TextNode {
                name,
                characters: content,
                style,
            }),
            metadata,
        }
    }
}

/// What the caller needs to know about a run without inspecting its style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunMetadata {
    /// The run is a plain text node.
    pub is_text: bool,
    /// The resolved weight is bold.
    pub is_bold: bool,
    /// The resolved style is italic.
    pub is_italic: bool,
    /// The producing tag; absent for plain text and inside headings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_name: Option<String>,
}

/// A converted run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChildNodeResult {
    /// The text leaf.
    pub node: OutputNode,
    /// Summary of the run.
    pub metadata: RunMetadata,
}

/// [§ 4.3.6 The h1–h6 elements](https://html.spec.whatwg.org/multipage/sections.html#the-h1,-h2,-h3,-h4,-h5,-and-h6-elements)
#[must_use]
pub fn is_heading(tag_name: &str) -> bool {
    matches!(
        tag_name.to_ascii_lowercase().as_str(),
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6"
    )
}

/// A run waiting for whitespace processing, with the scope it resolves in.
struct PendingRun {
    node: ChildTextNode,
    parent_style: ParsedStyle,
    ctx: ResolutionContext,
}

/// Convert the inline children of a text-bearing element into text leaves.
///
/// `parent_style` is the style the element passes to its text; a
/// `font-size` in it resolves against `ctx` and becomes the base for the
/// runs. Comments produce nothing, and runs that are empty after whitespace
/// collapsing are dropped.
#[must_use]
pub fn map_all(
    tree: &DomTree,
    children: &[NodeId],
    parent_style: &ParsedStyle,
    element_type: &str,
    ctx: &ResolutionContext,
) -> Vec<ChildNodeResult> {
    let mut parent_style = parent_style.clone();
    let ctx = take_font_size(&mut parent_style, ctx);

    let mut runs = Vec::new();
    collect_runs(tree, children, &parent_style, &ctx, &mut runs);
    collapse_whitespace(&mut runs);

    runs.into_iter()
        .map(|run| run.node.into_result(&run.parent_style, element_type, &run.ctx))
        .collect()
}

fn collect_runs(
    tree: &DomTree,
    children: &[NodeId],
    parent_style: &ParsedStyle,
    ctx: &ResolutionContext,
    out: &mut Vec<PendingRun>,
) {
    for &child in children {
        let Some(node) = tree.get(child) else {
            continue;
        };
        match &node.node_type {
            NodeType::Document | NodeType::Comment(_) => {}
            NodeType::Text(text) => out.push(PendingRun {
                node: ChildTextNode::Text(TextRun::plain(text.as_str())),
                parent_style: parent_style.clone(),
                ctx: *ctx,
            }),
            NodeType::Element(element) => {
                let own = element.style().map(ParsedStyle::parse);
                if own.as_ref().is_some_and(is_display_none) {
                    continue;
                }
                let nested = tree
                    .children(child)
                    .iter()
                    .any(|&grandchild| tree.as_element(grandchild).is_some());

                if nested {
                    let kind = ChildTextNode::from_element(&element.tag_name, TextRun::default());
                    let mut composed = parent_style.clone();
                    cascade_onto(&mut composed, &kind.inline_style(), ctx);
                    if let Some(own) = &own {
                        cascade_onto(&mut composed, &own.inheritable(), ctx);
                    }
                    let nested_ctx = take_font_size(&mut composed, ctx);
                    collect_runs(tree, tree.children(child), &composed, &nested_ctx, out);
                } else {
                    let run = TextRun {
                        content: tree.text_content(child),
                        styles: own,
                    };
                    out.push(PendingRun {
                        node: ChildTextNode::from_element(&element.tag_name, run),
                        parent_style: parent_style.clone(),
                        ctx: *ctx,
                    });
                }
            }
        }
    }
}

/// [§ 4.1.1 Phase I: Collapsing and Transformation](https://www.w3.org/TR/css-text-3/#white-space-phase-1)
///
/// "Any collapsible space immediately following another collapsible space,
/// even one outside the boundary of the inline containing that space, is
/// collapsed". Leading whitespace of the first run and trailing whitespace of
/// the last run are removed.
fn collapse_whitespace(runs: &mut Vec<PendingRun>) {
    let mut after_space = true;
    for run in runs.iter_mut() {
        let content = &mut run.node.run_mut().content;
        let mut collapsed = String::with_capacity(content.len());
        for c in content.chars() {
            if c.is_whitespace() {
                if !after_space {
                    collapsed.push(' ');
                    after_space = true;
                }
            } else {
                collapsed.push(c);
                after_space = false;
            }
        }
        *content = collapsed;
    }

    if let Some(last) = runs
        .iter_mut()
        .rev()
        .find(|run| !run.node.run().content.is_empty())
    {
        let content = &mut last.node.run_mut().content;
        let trimmed = content.trim_end().len();
        content.truncate(trimmed);
    }
    runs.retain(|run| !run.node.run().content.is_empty());
}

/// Resolve and remove `font-size` from `style`, returning `ctx` with the
/// resolved size as the new parent font size.
fn take_font_size(style: &mut ParsedStyle, ctx: &ResolutionContext) -> ResolutionContext {
    match style.remove("font-size").and_then(|value| parse_font_size(&value, ctx)) {
        Some(size) => ctx.with_parent_font_size(size),
        None => *ctx,
    }
}

/// Lay `layer` over `base` as the more specific of the two.
///
/// Text declarations in `layer` that do not parse have no effect and leave
/// the value below in place. A `text-decoration` shorthand in `layer` resets
/// a `text-decoration-line` from below.
pub(crate) fn cascade_onto(base: &mut ParsedStyle, layer: &ParsedStyle, ctx: &ResolutionContext) {
    let layer: ParsedStyle = layer
        .iter()
        .filter(|&(name, value)| parses(name, value, ctx))
        .collect();
    if layer.contains("text-decoration") && !layer.contains("text-decoration-line") {
        let _ = base.remove("text-decoration-line");
    }
    base.extend(&layer);
}

/// Whether a text declaration has a usable value. Anything else passes.
fn parses(name: &str, value: &str, ctx: &ResolutionContext) -> bool {
    match name {
        "font-size" => parse_font_size(value, ctx).is_some(),
        "font-weight" => parse_font_weight(value).is_some(),
        "font-style" => is_italic(value).is_some(),
        "font-family" => parse_font_family(value).is_some(),
        "line-height" => parse_line_height(value, ctx.parent_font_size, ctx).is_some(),
        "letter-spacing" => {
            value.trim().eq_ignore_ascii_case("normal")
                || letter_spacing(value, ctx.parent_font_size, ctx).is_some()
        }
        "color" => ResolvedColor::parse(value).is_some(),
        "text-align" => text_align(value).is_some(),
        "text-decoration" | "text-decoration-line" => TextDecorationLine::try_parse(value).is_some(),
        _ => true,
    }
}

/// `display: none` removes the element and its text.
pub(crate) fn is_display_none(style: &ParsedStyle) -> bool {
    style
        .get("display")
        .is_some_and(|display| display.eq_ignore_ascii_case("none"))
}

impl TextStyle {
    /// Resolve the text properties of `style`.
    ///
    /// Properties that are missing or do not parse fall back to a 16px
    /// (or inherited size) Inter at weight 400, upright, black, with automatic
    /// line height and no decoration.
    #[must_use]
    pub fn resolve(style: &ParsedStyle, ctx: &ResolutionContext) -> Self {
        let font_size = style
            .get("font-size")
            .and_then(|value| parse_font_size(value, ctx))
            .unwrap_or(ctx.parent_font_size);

        let font_weight = style
            .get("font-weight")
            .and_then(parse_font_weight)
            .unwrap_or(NORMAL_WEIGHT);

        let font_style = match style.get("font-style").and_then(is_italic) {
            Some(true) => FontStyle::Italic,
            Some(false) | None => FontStyle::Normal,
        };

        let font_family = style
            .get("font-family")
            .and_then(parse_font_family)
            .unwrap_or_else(|| DEFAULT_FONT_FAMILY.to_string());

        let line_height = match style
            .get("line-height")
            .and_then(|value| parse_line_height(value, font_size, ctx))
        {
            Some(CssLineHeight::Px(px)) => LineHeight::Pixels(px),
            Some(CssLineHeight::Normal) | None => LineHeight::Auto,
        };

        let color = style
            .get("color")
            .and_then(ResolvedColor::parse)
            .unwrap_or(ResolvedColor::BLACK);

        Self {
            font_family,
            font_size,
            font_weight,
            font_style,
            line_height,
            letter_spacing: style
                .get("letter-spacing")
                .and_then(|value| letter_spacing(value, font_size, ctx)),
            fills: vec![Paint::from(color)],
            text_decoration: text_decoration(style),
            text_align_horizontal: style.get("text-align").and_then(text_align),
        }
    }
}

/// [§ 2 text-decoration-line](https://www.w3.org/TR/css-text-decor-3/#text-decoration-line-property)
///
/// The longhand overrides the shorthand. Only one line fits the output, and
/// a strike-through takes precedence.
fn text_decoration(style: &ParsedStyle) -> TextDecoration {
    let lines = style
        .get("text-decoration-line")
        .or_else(|| style.get("text-decoration"))
        .map(TextDecorationLine::parse)
        .unwrap_or_default();
    if lines.line_through {
        TextDecoration::Strikethrough
    } else if lines.underline {
        TextDecoration::Underline
    } else {
        TextDecoration::None
    }
}

/// [§ 7.1 text-align](https://www.w3.org/TR/css-text-3/#text-align-property)
fn text_align(value: &str) -> Option<TextAlign> {
    match value.trim().to_ascii_lowercase().as_str() {
        "left" | "start" => Some(TextAlign::Left),
        "center" => Some(TextAlign::Center),
        "right" | "end" => Some(TextAlign::Right),
        "justify" => Some(TextAlign::Justified),
        _ => None,
    }
}

/// [§ 8.2 letter-spacing](https://www.w3.org/TR/css-text-3/#letter-spacing-property)
///
/// "normal" adds nothing. `em` and percentages refer to the element's own
/// font size.
fn letter_spacing(value: &str, font_size: f64, ctx: &ResolutionContext) -> Option<f64> {
    if value.trim().eq_ignore_ascii_case("normal") {
        return None;
    }
    match LengthValue::parse(value)? {
        LengthValue::Percent(pct) => Some(font_size * pct / 100.0),
        length => length.to_px(&ctx.with_parent_font_size(font_size), Axis::Horizontal),
    }
}
