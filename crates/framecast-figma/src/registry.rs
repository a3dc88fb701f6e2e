//! Tag to conversion-strategy registry.
//!
//! Every element is converted through one [`ElementDefinition`]: a strategy
//! plus the tag's base frame and a few per-tag switches. Tags without an entry
//! use the fallback definition.

use std::collections::HashMap;

use strum_macros::Display;

use framecast_css::{LengthValue, ResolutionContext, ResolvedColor};
use framecast_dom::ElementData;

use crate::naming::element_name;
use crate::node::{
    CounterAxisAlign, FrameNode, LayoutMode, LayoutWrap, Paint, PrimaryAxisAlign, SizingMode,
};
use crate::options::StretchAlignment;

/// How an element is converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Strategy {
    /// A frame whose children are mapped recursively.
    Container,
    /// A frame whose inline content becomes styled text runs. Falls back to
    /// [`Strategy::Container`] when a block-level child is present.
    TextBlock,
    /// A single text leaf named after the element.
    TextLeaf,
    /// Produces nothing.
    Skip,
}

/// Builds the tag-specific starting frame.
pub type BaseConfig = fn(&ElementData, &ResolutionContext) -> FrameNode;

/// The conversion recipe for one tag.
#[derive(Debug, Clone, Copy)]
pub struct ElementDefinition {
    /// Conversion strategy.
    pub strategy: Strategy,
    /// Starting frame.
    pub base: BaseConfig,
    /// Overrides the configured mapping of `align-items: stretch`.
    pub stretch: Option<StretchAlignment>,
    /// Read `gap` even when the element is not a flex container.
    pub gap_without_flex: bool,
    /// A frame still without layout after styling becomes VERTICAL.
    pub known_container: bool,
    /// Text style the element gives its content before its own `style`.
    pub text_defaults: &'static [(&'static str, &'static str)],
}

impl ElementDefinition {
    /// A definition with no per-tag switches.
    #[must_use]
    pub const fn new(strategy: Strategy, base: BaseConfig) -> Self {
        Self {
            strategy,
            base,
            stretch: None,
            gap_without_flex: false,
            known_container: false,
            text_defaults: &[],
        }
    }

    const fn container(base: BaseConfig) -> Self {
        let mut definition = Self::new(Strategy::Container, base);
        definition.known_container = true;
        definition
    }

    const fn text_block(base: BaseConfig) -> Self {
        Self::new(Strategy::TextBlock, base)
    }

    const fn pin_stretch(mut self, stretch: StretchAlignment) -> Self {
        self.stretch = Some(stretch);
        self
    }

    const fn with_gap(mut self) -> Self {
        self.gap_without_flex = true;
        self
    }

    const fn with_text_defaults(mut self, defaults: &'static [(&'static str, &'static str)]) -> Self {
        self.text_defaults = defaults;
        self
    }

    /// Returns `true` if elements of this kind start a new block inside text content.
    #[must_use]
    pub const fn is_block(&self) -> bool {
        matches!(self.strategy, Strategy::Container | Strategy::TextBlock)
    }
}

/// [§ 15.3.1 Hidden elements](https://html.spec.whatwg.org/multipage/rendering.html#hidden-elements)
const HIDDEN: &[&str] = &[
    "head", "script", "style", "meta", "link", "title", "template", "noscript",
];

/// Tags rendered as block containers.
const CONTAINERS: &[&str] = &[
    "div", "section", "article", "aside", "footer", "form", "ul", "ol", "dl", "figure", "table",
    "thead", "tbody", "tfoot", "fieldset", "details", "address", "menu",
];

/// Blocks whose content is phrasing content.
const TEXT_BLOCKS: &[&str] = &[
    "p", "blockquote", "figcaption", "li", "td", "th", "dt", "dd", "caption", "legend", "pre",
    "summary", "label",
];

/// Inline elements rendered as a single text leaf.
const TEXT_LEAVES: &[&str] = &[
    "span", "a", "strong", "em", "b", "i", "bold", "italic", "code", "small", "del", "ins", "sub",
    "sup", "mark", "abbr", "cite", "q", "time", "s", "u", "kbd", "samp", "var",
];

/// [§ 15.3.6 Sections and headings](https://html.spec.whatwg.org/multipage/rendering.html#sections-and-headings)
///
/// The sizes are the UA stylesheet's em values against a 16px parent.
const HEADINGS: &[(&str, &[(&str, &str)])] = &[
    ("h1", &[("font-size", "32px"), ("font-weight", "700")]),
    ("h2", &[("font-size", "24px"), ("font-weight", "700")]),
    ("h3", &[("font-size", "18.72px"), ("font-weight", "700")]),
    ("h4", &[("font-size", "16px"), ("font-weight", "700")]),
    ("h5", &[("font-size", "13.28px"), ("font-weight", "700")]),
    ("h6", &[("font-size", "10.72px"), ("font-weight", "700")]),
];

/// Tag name to definition, with a fallback for everything else.
#[derive(Debug, Clone)]
pub struct ElementRegistry {
    definitions: HashMap<String, ElementDefinition>,
    fallback: ElementDefinition,
}

impl Default for ElementRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ElementRegistry {
    /// The built-in definitions.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self::empty(ElementDefinition::new(Strategy::Container, base_generic));

        for &tag in HIDDEN {
            registry.register(tag, ElementDefinition::new(Strategy::Skip, base_generic));
        }
        for &tag in CONTAINERS {
            registry.register(tag, ElementDefinition::container(base_block));
        }
        for &tag in TEXT_BLOCKS {
            registry.register(tag, ElementDefinition::text_block(base_text_block));
        }
        for &tag in TEXT_LEAVES {
            registry.register(tag, ElementDefinition::new(Strategy::TextLeaf, base_generic));
        }
        for &(tag, defaults) in HEADINGS {
            registry.register(
                tag,
                ElementDefinition::text_block(base_text_block).with_text_defaults(defaults),
            );
        }

        registry.register("html", ElementDefinition::container(base_root));
        registry.register("body", ElementDefinition::container(base_root));
        registry.register("main", ElementDefinition::container(base_main));
        registry.register(
            "header",
            ElementDefinition::container(base_header).pin_stretch(StretchAlignment::Min),
        );
        registry.register(
            "nav",
            ElementDefinition::container(base_nav)
                .pin_stretch(StretchAlignment::Min)
                .with_gap(),
        );
        registry.register("tr", ElementDefinition::container(base_row));
        registry.register("button", ElementDefinition::text_block(base_button));
        registry.register(
            "th",
            ElementDefinition::text_block(base_text_block).with_text_defaults(&[("font-weight", "700")]),
        );
        registry.register("img", ElementDefinition::new(Strategy::Container, base_img));

        registry
    }

    /// A registry where every tag uses `fallback`.
    #[must_use]
    pub fn empty(fallback: ElementDefinition) -> Self {
        Self {
            definitions: HashMap::new(),
            fallback,
        }
    }

    /// Add or replace the definition for `tag`.
    pub fn register(&mut self, tag: &str, definition: ElementDefinition) {
        let _ = self
            .definitions
            .insert(tag.to_ascii_lowercase(), definition);
    }

    /// The definition for `tag`, or the fallback.
    #[must_use]
    pub fn lookup(&self, tag: &str) -> &ElementDefinition {
        self.definitions
            .get(&tag.to_ascii_lowercase())
            .unwrap_or(&self.fallback)
    }

    /// Returns `true` if `tag` has its own definition.
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.definitions.contains_key(&tag.to_ascii_lowercase())
    }
}

/// The container width, or the viewport width when none is known.
fn available_width(ctx: &ResolutionContext) -> f64 {
    ctx.container_width.unwrap_or(ctx.viewport_width)
}

/// Unknown tags: no layout, hugging.
fn base_generic(element: &ElementData, _ctx: &ResolutionContext) -> FrameNode {
    FrameNode::new(element_name(element))
}

/// Block containers fill the width of their parent.
fn base_block(element: &ElementData, _ctx: &ResolutionContext) -> FrameNode {
    FrameNode::new(element_name(element)).with_sizing(SizingMode::Fill, SizingMode::Hug)
}

/// `html` and `body` span the viewport.
fn base_root(element: &ElementData, ctx: &ResolutionContext) -> FrameNode {
    FrameNode::new(element_name(element))
        .with_layout(LayoutMode::Vertical)
        .with_fixed_width(ctx.viewport_width)
}

fn base_main(element: &ElementData, ctx: &ResolutionContext) -> FrameNode {
    FrameNode::new(element_name(element))
        .with_layout(LayoutMode::Vertical)
        .with_fixed_width(available_width(ctx))
}

fn base_header(element: &ElementData, ctx: &ResolutionContext) -> FrameNode {
    let mut frame = FrameNode::new(element_name(element))
        .with_layout(LayoutMode::Horizontal)
        .with_fixed_width(available_width(ctx));
    frame.counter_axis_align_items = CounterAxisAlign::Center;
    frame
}

fn base_nav(element: &ElementData, _ctx: &ResolutionContext) -> FrameNode {
    FrameNode::new(element_name(element)).with_layout(LayoutMode::Horizontal)
}

fn base_row(element: &ElementData, _ctx: &ResolutionContext) -> FrameNode {
    FrameNode::new(element_name(element))
        .with_layout(LayoutMode::Horizontal)
        .with_sizing(SizingMode::Fill, SizingMode::Hug)
}

/// Text blocks wrap their runs and fill the width of their parent.
fn base_text_block(element: &ElementData, _ctx: &ResolutionContext) -> FrameNode {
    let mut frame = FrameNode::new(element_name(element))
        .with_layout(LayoutMode::Horizontal)
        .with_sizing(SizingMode::Fill, SizingMode::Hug);
    frame.layout_wrap = LayoutWrap::Wrap;
    frame
}

fn base_button(element: &ElementData, _ctx: &ResolutionContext) -> FrameNode {
    let mut frame = FrameNode::new(element_name(element)).with_layout(LayoutMode::Horizontal);
    frame.primary_axis_align_items = PrimaryAxisAlign::Center;
    frame.counter_axis_align_items = CounterAxisAlign::Center;
    frame
}

/// A placeholder sized by the `width` and `height` attributes.
fn base_img(element: &ElementData, _ctx: &ResolutionContext) -> FrameNode {
    // [§ 4.8.4.4 Dimension attributes](https://html.spec.whatwg.org/multipage/embedded-content-other.html#dimension-attributes)
    // "valid non-negative integers"; a trailing px is tolerated.
    let dimension = |name: &str| match LengthValue::parse(element.attr(name)?)? {
        LengthValue::Px(px) if px >= 0.0 => Some(px),
        _ => None,
    };
    let mut frame = FrameNode::new(element_name(element));
    if let Some(width) = dimension("width") {
        frame = frame.with_fixed_width(width);
    }
    if let Some(height) = dimension("height") {
        frame = frame.with_fixed_height(height);
    }
    frame.fills = vec![Paint::from(ResolvedColor::from_rgb255(217.0, 217.0, 217.0, 1.0))];
    frame
}
