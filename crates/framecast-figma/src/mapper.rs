//! The recursive walk from input tree to output tree.
//!
//! [`NodeMapper::map`] classifies each node: comments produce nothing, text
//! becomes a TEXT leaf, the document becomes the root frame, and elements go
//! through their registry definition. A child that produces nothing is left
//! out of its parent's `children`.
//!
//! Text styles are inherited explicitly: each call receives the inheritable
//! style of its ancestors as a parameter, and the computed font size travels
//! in the [`ResolutionContext`].

use framecast_common::warning::clear_warnings;
use framecast_css::values::parse_font_size;
use framecast_css::{ParsedStyle, ResolutionContext};
use framecast_dom::{DomTree, ElementData, NodeId, NodeType};

use crate::flex;
use crate::naming::element_name;
use crate::node::{FrameNode, LayoutMode, OutputNode, TextNode, TextStyle};
use crate::options::ConversionOptions;
use crate::registry::{ElementDefinition, ElementRegistry, Strategy};
use crate::template::{TemplateHooks, to_figma_node_with};
use crate::typography::{
    self, ChildNodeResult, ChildTextNode, TextRun, cascade_onto, is_display_none,
};

/// Name of TEXT leaves produced from text nodes.
pub const TEXT_NODE_NAME: &str = "Text";

/// Name of the root frame.
pub const DOCUMENT_NODE_NAME: &str = "Document";

/// Maps input nodes to output nodes.
#[derive(Debug, Clone, Default)]
pub struct NodeMapper {
    registry: ElementRegistry,
    options: ConversionOptions,
}

impl NodeMapper {
    /// A mapper with the built-in element definitions.
    #[must_use]
    pub fn new(options: ConversionOptions) -> Self {
        Self::with_registry(ElementRegistry::new(), options)
    }

    /// A mapper with custom element definitions.
    #[must_use]
    pub const fn with_registry(registry: ElementRegistry, options: ConversionOptions) -> Self {
        Self { registry, options }
    }

    /// The element definitions in use.
    #[must_use]
    pub const fn registry(&self) -> &ElementRegistry {
        &self.registry
    }

    /// Map one node and its subtree.
    ///
    /// Returns `None` for comments, whitespace-only text, skipped elements,
    /// and ids not in the tree.
    #[must_use]
    pub fn map(&self, tree: &DomTree, id: NodeId, ctx: &ResolutionContext) -> Option<OutputNode> {
        self.map_node(tree, id, ctx, &ParsedStyle::new())
    }

    /// Convert the inline children of a text-bearing element into styled runs.
    ///
    /// See [`typography::map_all`].
    #[must_use]
    pub fn map_all(
        &self,
        tree: &DomTree,
        children: &[NodeId],
        parent_style: &ParsedStyle,
        element_type: &str,
        ctx: &ResolutionContext,
    ) -> Vec<ChildNodeResult> {
        typography::map_all(tree, children, parent_style, element_type, ctx)
    }

    fn map_node(
        &self,
        tree: &DomTree,
        id: NodeId,
        ctx: &ResolutionContext,
        inherited: &ParsedStyle,
    ) -> Option<OutputNode> {
        match &tree.get(id)?.node_type {
            NodeType::Comment(_) => None,
            NodeType::Text(text) => map_text(text, inherited, ctx),
            NodeType::Document => Some(OutputNode::Frame(self.map_document(tree, id, ctx, inherited))),
            NodeType::Element(element) => self.map_element(tree, id, element, ctx, inherited),
        }
    }

    /// The root frame spans the viewport and stacks its children vertically.
    fn map_document(
        &self,
        tree: &DomTree,
        id: NodeId,
        ctx: &ResolutionContext,
        inherited: &ParsedStyle,
    ) -> FrameNode {
        let mut frame = FrameNode::new(DOCUMENT_NODE_NAME)
            .with_layout(LayoutMode::Vertical)
            .with_fixed_width(ctx.viewport_width);
        let child_ctx = ctx.with_container(frame.width, None);
        frame.children = self.map_children(tree, id, &child_ctx, inherited);
        frame
    }

    fn map_children(
        &self,
        tree: &DomTree,
        id: NodeId,
        ctx: &ResolutionContext,
        inherited: &ParsedStyle,
    ) -> Vec<OutputNode> {
        tree.children(id)
            .iter()
            .filter_map(|&child| self.map_node(tree, child, ctx, inherited))
            .collect()
    }

    fn map_element(
        &self,
        tree: &DomTree,
        id: NodeId,
        element: &ElementData,
        ctx: &ResolutionContext,
        inherited: &ParsedStyle,
    ) -> Option<OutputNode> {
        let own = element.style().map(ParsedStyle::parse);
        if own.as_ref().is_some_and(is_display_none) {
            return None;
        }

        let definition = self.registry.lookup(&element.tag_name);
        let strategy = match definition.strategy {
            Strategy::TextBlock if self.has_block_child(tree, id) => Strategy::Container,
            strategy => strategy,
        };

        #[cfg(feature = "mapping-trace")]
        eprintln!(
            "[MAP] <{}> -> {strategy} (registered: {})",
            element.tag_name,
            self.registry.contains(&element.tag_name)
        );

        match strategy {
            Strategy::Skip => None,
            Strategy::TextLeaf => map_text_leaf(tree, id, element, own, ctx, inherited),
            Strategy::Container | Strategy::TextBlock => Some(OutputNode::Frame(self.map_frame(
                tree,
                id,
                element,
                definition,
                strategy == Strategy::TextBlock,
                ctx,
                inherited,
            ))),
        }
    }

    /// Run the conversion template for a container or text block.
    #[allow(clippy::too_many_arguments)]
    fn map_frame(
        &self,
        tree: &DomTree,
        id: NodeId,
        element: &ElementData,
        definition: &ElementDefinition,
        text_content: bool,
        ctx: &ResolutionContext,
        inherited: &ParsedStyle,
    ) -> FrameNode {
        let stretch = definition.stretch.unwrap_or(self.options.stretch_alignment);
        let custom_style = |frame: &mut FrameNode,
                            _element: &ElementData,
                            style: &ParsedStyle,
                            ctx: &ResolutionContext| {
            if flex::is_flex_container(style) {
                flex::apply_container(frame, style, stretch);
            } else if definition.gap_without_flex {
                flex::apply_gap(frame, style);
            }
            flex::apply_item(frame, style, ctx);
        };

        let children = |child_ctx: &ResolutionContext| -> Vec<OutputNode> {
            let (style, scope_ctx) = text_scope(element, definition, inherited, ctx, child_ctx);
            if text_content {
                typography::map_all(tree, tree.children(id), &style, &element.tag_name, &scope_ctx)
                    .into_iter()
                    .map(|result| result.node)
                    .collect()
            } else {
                self.map_children(tree, id, &scope_ctx, &style)
            }
        };

        let mut frame = to_figma_node_with(
            element,
            ctx,
            definition.base,
            TemplateHooks {
                custom_style: Some(&custom_style),
                children: Some(&children),
            },
        );
        if definition.known_container && frame.layout_mode == LayoutMode::None {
            frame.layout_mode = LayoutMode::Vertical;
        }
        frame
    }

    /// Returns `true` if any child element converts to a block.
    fn has_block_child(&self, tree: &DomTree, id: NodeId) -> bool {
        tree.children(id).iter().any(|&child| {
            tree.as_element(child)
                .is_some_and(|element| self.registry.lookup(&element.tag_name).is_block())
        })
    }
}

/// Text nodes become TEXT leaves styled by their ancestors. Whitespace runs
/// collapse to one space; text that is only whitespace produces nothing.
fn map_text(text: &str, inherited: &ParsedStyle, ctx: &ResolutionContext) -> Option<OutputNode> {
    let characters = collapse_whitespace(text);
    if characters.is_empty() {
        return None;
    }
    Some(OutputNode::Text(TextNode {
        name: TEXT_NODE_NAME.to_string(),
        characters,
        style: TextStyle::resolve(inherited, ctx),
    }))
}

/// A text-like element becomes one TEXT leaf named after the element, styled
/// the same way as an inline run.
fn map_text_leaf(
    tree: &DomTree,
    id: NodeId,
    element: &ElementData,
    own: Option<ParsedStyle>,
    ctx: &ResolutionContext,
    inherited: &ParsedStyle,
) -> Option<OutputNode> {
    let content = collapse_whitespace(&tree.text_content(id));
    if content.is_empty() {
        return None;
    }
    let run = TextRun {
        content,
        styles: own,
    };
    let result = ChildTextNode::from_element(&element.tag_name, run).into_result(
        inherited,
        &element.tag_name,
        ctx,
    );
    match result.node {
        OutputNode::Text(mut text) => {
            text.name = element_name(element);
            Some(OutputNode::Text(text))
        }
        frame @ OutputNode::Frame(_) => Some(frame),
    }
}

/// The style and context an element passes to its content.
///
/// The inherited style, then the element's text defaults, then the
/// inheritable part of its own style. `font-size` is resolved against the
/// element's parent and moved into the context as the new parent font size,
/// and on `html` the new root font size.
fn text_scope(
    element: &ElementData,
    definition: &ElementDefinition,
    inherited: &ParsedStyle,
    parent_ctx: &ResolutionContext,
    child_ctx: &ResolutionContext,
) -> (ParsedStyle, ResolutionContext) {
    let mut style = inherited.clone();
    let defaults: ParsedStyle = definition.text_defaults.iter().copied().collect();
    cascade_onto(&mut style, &defaults, parent_ctx);
    if let Some(own) = element.style().map(ParsedStyle::parse) {
        cascade_onto(&mut style, &own.inheritable(), parent_ctx);
    }

    let mut ctx = *child_ctx;
    if let Some(size) = style
        .remove("font-size")
        .and_then(|value| parse_font_size(&value, parent_ctx))
    {
        ctx = ctx.with_parent_font_size(size);
        if element.is("html") {
            ctx = ctx.with_root_font_size(size);
        }
    }
    (style, ctx)
}

/// [§ 4.1.1 Phase I: Collapsing and Transformation](https://www.w3.org/TR/css-text-3/#white-space-phase-1)
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Convert a whole tree, starting at the document.
///
/// Warnings from a previous conversion are forgotten first, so each document
/// reports its own unsupported declarations.
#[must_use]
pub fn convert(tree: &DomTree, options: &ConversionOptions) -> OutputNode {
    clear_warnings();
    let mapper = NodeMapper::new(*options);
    let ctx = options.root_context();
    mapper
        .map(tree, NodeId::ROOT, &ctx)
        .unwrap_or_else(|| OutputNode::Frame(FrameNode::new(DOCUMENT_NODE_NAME)))
}
