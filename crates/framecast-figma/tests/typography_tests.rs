//! Integration tests for inline text decomposition and text style resolution.

use framecast_css::{ParsedStyle, ResolutionContext};
use framecast_dom::{DomTree, NodeId};
use framecast_figma::typography::{is_heading, map_all};
use framecast_figma::{
    ChildNodeResult, ChildTextNode, FontStyle, LineHeight, Paint, Rgb, TextAlign, TextDecoration,
    TextNode, TextRun, TextStyle,
};

fn text(result: &ChildNodeResult) -> &TextNode {
    result.node.as_text().expect("runs are text leaves")
}

/// Build `<tag>` under the document and run `build` to fill it.
fn block(tag: &str, build: impl FnOnce(&mut DomTree, NodeId)) -> (DomTree, NodeId) {
    let mut tree = DomTree::new();
    let id = tree.append_element(NodeId::ROOT, tag, &[]);
    build(&mut tree, id);
    (tree, id)
}

fn solid(r: f64, g: f64, b: f64) -> Paint {
    Paint::Solid {
        color: Rgb { r, g, b },
        opacity: 1.0,
    }
}

fn runs(tree: &DomTree, id: NodeId, element_type: &str) -> Vec<ChildNodeResult> {
    runs_with(tree, id, &ParsedStyle::new(), element_type)
}

fn runs_with(
    tree: &DomTree,
    id: NodeId,
    parent_style: &ParsedStyle,
    element_type: &str,
) -> Vec<ChildNodeResult> {
    map_all(
        tree,
        tree.children(id),
        parent_style,
        element_type,
        &ResolutionContext::default(),
    )
}

// ---------------------------------------------------------------------------
// Run classification
// ---------------------------------------------------------------------------

#[test]
fn test_from_element_classifies_tags() {
    let run = || TextRun::plain("x");
    assert_eq!(ChildTextNode::from_element("b", run()), ChildTextNode::B(run()));
    assert_eq!(ChildTextNode::from_element("STRONG", run()), ChildTextNode::Strong(run()));
    assert_eq!(ChildTextNode::from_element("sup", run()), ChildTextNode::Sup(run()));
    assert_eq!(
        ChildTextNode::from_element("span", run()),
        ChildTextNode::Other("span".to_string(), run())
    );
}

#[test]
fn test_tag_name_per_kind() {
    assert_eq!(ChildTextNode::Text(TextRun::plain("x")).tag_name(), None);
    assert_eq!(ChildTextNode::Em(TextRun::plain("x")).tag_name(), Some("em"));
    assert_eq!(
        ChildTextNode::Other("mark".to_string(), TextRun::plain("x")).tag_name(),
        Some("mark")
    );
}

#[test]
fn test_is_heading() {
    assert!(is_heading("h1"));
    assert!(is_heading("H6"));
    assert!(!is_heading("p"));
    assert!(!is_heading("header"));
}

// ---------------------------------------------------------------------------
// Decomposition
// ---------------------------------------------------------------------------

#[test]
fn test_bold_run_in_paragraph() {
    let (tree, p) = block("p", |tree, p| {
        let _ = tree.append_text(p, "Hello ");
        let b = tree.append_element(p, "b", &[]);
        let _ = tree.append_text(b, "world");
    });
    let results = runs(&tree, p, "p");

    assert_eq!(results.len(), 2);
    assert_eq!(text(&results[0]).characters, "Hello ");
    assert!(results[0].metadata.is_text);
    assert_eq!(results[0].metadata.tag_name, None);

    let bold = text(&results[1]);
    assert_eq!(bold.characters, "world");
    assert_eq!(bold.style.font_weight, 700);
    assert!(results[1].metadata.is_bold);
    assert_eq!(results[1].metadata.tag_name.as_deref(), Some("b"));
}

#[test]
fn test_strong_run_in_heading_has_no_tag_name() {
    let (tree, h1) = block("h1", |tree, h1| {
        let strong = tree.append_element(h1, "strong", &[]);
        let _ = tree.append_text(strong, "Title");
    });
    let results = runs(&tree, h1, "h1");

    assert_eq!(results.len(), 1);
    assert!(results[0].metadata.is_bold);
    assert_eq!(results[0].metadata.tag_name, None);
}

#[test]
fn test_own_style_beats_markup_default() {
    let (tree, p) = block("p", |tree, p| {
        let b = tree.append_element(p, "b", &[("style", "font-weight: 400")]);
        let _ = tree.append_text(b, "not bold");
    });
    let results = runs(&tree, p, "p");

    assert_eq!(text(&results[0]).style.font_weight, 400);
    assert!(!results[0].metadata.is_bold);
}

#[test]
fn test_b_and_strong_in_paragraph_are_bold() {
    let (tree, p) = block("p", |tree, p| {
        for tag in ["b", "strong"] {
            let id = tree.append_element(p, tag, &[]);
            let _ = tree.append_text(id, "x");
        }
    });
    let results = runs(&tree, p, "p");

    assert_eq!(results.len(), 2);
    for (result, tag) in results.iter().zip(["b", "strong"]) {
        assert_eq!(text(result).style.font_weight, 700, "<{tag}>");
        assert!(result.metadata.is_bold, "<{tag}>");
        assert_eq!(result.metadata.tag_name.as_deref(), Some(tag));
    }
}

#[test]
fn test_own_style_beats_inherited_style() {
    let (tree, p) = block("p", |tree, p| {
        let span = tree.append_element(
            p,
            "span",
            &[("style", "color: #0000ff; font-style: normal; font-weight: 300")],
        );
        let _ = tree.append_text(span, "override");
    });
    let parent = ParsedStyle::parse("color: #ff0000; font-style: italic; font-weight: 700");
    let results = runs_with(&tree, p, &parent, "p");

    let style = &text(&results[0]).style;
    assert_eq!(style.fills, vec![solid(0.0, 0.0, 1.0)]);
    assert_eq!(style.font_style, FontStyle::Normal);
    assert_eq!(style.font_weight, 300);
    assert!(!results[0].metadata.is_bold);
    assert!(!results[0].metadata.is_italic);
}

#[test]
fn test_unparseable_own_weight_keeps_markup_default() {
    let (tree, p) = block("p", |tree, p| {
        let b = tree.append_element(p, "b", &[("style", "font-weight: bogus")]);
        let _ = tree.append_text(b, "x");
    });
    let results = runs(&tree, p, "p");

    assert_eq!(text(&results[0]).style.font_weight, 700);
    assert!(results[0].metadata.is_bold);
}

#[test]
fn test_unparseable_own_values_keep_inherited_style() {
    let (tree, p) = block("p", |tree, p| {
        let span = tree.append_element(
            p,
            "span",
            &[("style", "color: nonsense; font-size: huge; font-family: 42; text-align: sideways")],
        );
        let _ = tree.append_text(span, "x");
    });
    let parent = ParsedStyle::parse(
        "color: #ff0000; font-size: 20px; font-family: Georgia; text-align: center",
    );
    let results = runs_with(&tree, p, &parent, "p");

    let style = &text(&results[0]).style;
    assert_eq!(style.fills, vec![solid(1.0, 0.0, 0.0)]);
    assert_eq!(style.font_size, 20.0);
    assert_eq!(style.font_family, "Georgia");
    assert_eq!(style.text_align_horizontal, Some(TextAlign::Center));
}

#[test]
fn test_unparseable_values_on_nested_inline_keep_inherited_style() {
    let (tree, p) = block("p", |tree, p| {
        let a = tree.append_element(p, "a", &[("style", "color: nonsense")]);
        let i = tree.append_element(a, "i", &[]);
        let _ = tree.append_text(i, "link");
    });
    let parent = ParsedStyle::parse("color: #ff0000");
    let results = runs_with(&tree, p, &parent, "p");

    assert_eq!(text(&results[0]).style.fills, vec![solid(1.0, 0.0, 0.0)]);
    assert_eq!(text(&results[0]).style.font_style, FontStyle::Italic);
}

#[test]
fn test_markup_decoration_beats_inherited_decoration_line() {
    let (tree, p) = block("p", |tree, p| {
        for tag in ["del", "span"] {
            let id = tree.append_element(p, tag, &[]);
            let _ = tree.append_text(id, "x");
        }
    });
    let parent = ParsedStyle::parse("text-decoration-line: underline");
    let results = runs_with(&tree, p, &parent, "p");

    assert_eq!(text(&results[0]).style.text_decoration, TextDecoration::Strikethrough);
    assert_eq!(text(&results[1]).style.text_decoration, TextDecoration::Underline);
}

#[test]
fn test_own_decoration_shorthand_beats_markup_default() {
    let (tree, p) = block("p", |tree, p| {
        let ins = tree.append_element(p, "ins", &[("style", "text-decoration: none")]);
        let _ = tree.append_text(ins, "plain");
        let del = tree.append_element(p, "del", &[("style", "text-decoration: wavy")]);
        let _ = tree.append_text(del, "struck");
    });
    let results = runs(&tree, p, "p");

    assert_eq!(text(&results[0]).style.text_decoration, TextDecoration::None);
    assert_eq!(text(&results[1]).style.text_decoration, TextDecoration::Strikethrough);
}

#[test]
fn test_italic_markup_forced_in_heading_only() {
    let build = |tree: &mut DomTree, parent: NodeId| {
        let em = tree.append_element(parent, "em", &[("style", "font-style: normal")]);
        let _ = tree.append_text(em, "slanted");
    };

    let (tree, h2) = block("h2", build);
    let heading = runs(&tree, h2, "h2");
    assert_eq!(text(&heading[0]).style.font_style, FontStyle::Italic);
    assert!(heading[0].metadata.is_italic);

    let (tree, p) = block("p", build);
    let paragraph = runs(&tree, p, "p");
    assert_eq!(text(&paragraph[0]).style.font_style, FontStyle::Normal);
    assert!(!paragraph[0].metadata.is_italic);
}

#[test]
fn test_markup_defaults() {
    let (tree, p) = block("p", |tree, p| {
        for (tag, content) in [("code", "x = 1"), ("del", "old"), ("ins", "new"), ("sub", "2")] {
            let id = tree.append_element(p, tag, &[]);
            let _ = tree.append_text(id, content);
        }
    });
    let results = runs(&tree, p, "p");
    assert_eq!(results.len(), 4);

    let code = &text(&results[0]).style;
    assert_eq!(code.font_family, "monospace");
    assert_eq!(code.font_size, 14.0);

    assert_eq!(text(&results[1]).style.text_decoration, TextDecoration::Strikethrough);
    assert_eq!(text(&results[2]).style.text_decoration, TextDecoration::Underline);
    assert_eq!(text(&results[3]).style.font_size, 12.0);
}

#[test]
fn test_parent_style_flows_into_runs() {
    let (tree, p) = block("p", |tree, p| {
        let _ = tree.append_text(p, "E = mc");
        let sup = tree.append_element(p, "sup", &[]);
        let _ = tree.append_text(sup, "2");
    });
    let parent = ParsedStyle::parse("font-size: 20px; color: #ff0000");
    let results = runs_with(&tree, p, &parent, "p");

    assert_eq!(text(&results[0]).style.font_size, 20.0);
    assert_eq!(text(&results[1]).style.font_size, 15.0);
    for result in &results {
        assert_eq!(
            text(result).style.fills,
            vec![Paint::Solid {
                color: Rgb { r: 1.0, g: 0.0, b: 0.0 },
                opacity: 1.0,
            }]
        );
    }
}

#[test]
fn test_nested_inline_elements_decompose() {
    let (tree, p) = block("p", |tree, p| {
        let a = tree.append_element(p, "a", &[("style", "color: #0000ff; margin: 4px")]);
        let b = tree.append_element(a, "b", &[]);
        let _ = tree.append_text(b, "bold link");
        let _ = tree.append_text(a, " tail");
    });
    let results = runs(&tree, p, "p");

    assert_eq!(results.len(), 2);
    assert_eq!(text(&results[0]).characters, "bold link");
    assert_eq!(text(&results[1]).characters, " tail");
    assert!(results[0].metadata.is_bold);
    assert!(!results[1].metadata.is_bold);
    for result in &results {
        let Paint::Solid { color, .. } = text(result).style.fills[0];
        assert_eq!(color, Rgb { r: 0.0, g: 0.0, b: 1.0 });
    }
}

#[test]
fn test_comments_and_hidden_runs_are_dropped() {
    let (tree, p) = block("p", |tree, p| {
        let _ = tree.append_text(p, "visible");
        let _ = tree.append_comment(p, "note");
        let hidden = tree.append_element(p, "span", &[("style", "display: none")]);
        let _ = tree.append_text(hidden, "hidden");
    });
    let results = runs(&tree, p, "p");

    assert_eq!(results.len(), 1);
    assert_eq!(text(&results[0]).characters, "visible");
}

#[test]
fn test_whitespace_collapses_across_runs() {
    let (tree, p) = block("p", |tree, p| {
        let _ = tree.append_text(p, "\n   Hello \t ");
        let b = tree.append_element(p, "b", &[]);
        let _ = tree.append_text(b, "  big   world ");
        let _ = tree.append_text(p, "   \n");
    });
    let results = runs(&tree, p, "p");

    let characters: Vec<&str> = results
        .iter()
        .map(|result| text(result).characters.as_str())
        .collect();
    assert_eq!(characters, ["Hello ", "big world"]);
}

#[test]
fn test_run_names() {
    let (tree, p) = block("p", |tree, p| {
        let _ = tree.append_text(p, "plain ");
        let i = tree.append_element(p, "i", &[]);
        let _ = tree.append_text(i, "slanted");
    });
    let results = runs(&tree, p, "p");
    assert_eq!(results[0].node.name(), "Text");
    assert_eq!(results[1].node.name(), "i");
}

// ---------------------------------------------------------------------------
// Text style resolution
// ---------------------------------------------------------------------------

#[test]
fn test_text_style_defaults() {
    let style = TextStyle::resolve(&ParsedStyle::new(), &ResolutionContext::default());
    assert_eq!(style.font_family, "Inter");
    assert_eq!(style.font_size, 16.0);
    assert_eq!(style.font_weight, 400);
    assert_eq!(style.font_style, FontStyle::Normal);
    assert_eq!(style.line_height, LineHeight::Auto);
    assert_eq!(style.letter_spacing, None);
    assert_eq!(style.text_decoration, TextDecoration::None);
    assert_eq!(style.text_align_horizontal, None);
    assert_eq!(
        style.fills,
        vec![Paint::Solid {
            color: Rgb { r: 0.0, g: 0.0, b: 0.0 },
            opacity: 1.0,
        }]
    );
}

#[test]
fn test_text_style_properties() {
    let style = TextStyle::resolve(
        &ParsedStyle::parse(
            "font-family: 'Open Sans', sans-serif; font-size: 2rem; font-weight: 600; \
             font-style: italic; line-height: 1.5; letter-spacing: 0.5em; text-align: justify",
        ),
        &ResolutionContext::default(),
    );
    assert_eq!(style.font_family, "Open Sans");
    assert_eq!(style.font_size, 32.0);
    assert_eq!(style.font_weight, 600);
    assert_eq!(style.font_style, FontStyle::Italic);
    assert_eq!(style.line_height, LineHeight::Pixels(48.0));
    assert_eq!(style.letter_spacing, Some(16.0));
    assert_eq!(style.text_align_horizontal, Some(TextAlign::Justified));
}

#[test]
fn test_strikethrough_beats_underline() {
    let ctx = ResolutionContext::default();
    let both = TextStyle::resolve(&ParsedStyle::parse("text-decoration: underline line-through"), &ctx);
    assert_eq!(both.text_decoration, TextDecoration::Strikethrough);

    let longhand = TextStyle::resolve(
        &ParsedStyle::parse("text-decoration: line-through; text-decoration-line: underline"),
        &ctx,
    );
    assert_eq!(longhand.text_decoration, TextDecoration::Underline);
}

/// With nothing below to keep, unparseable values resolve to the defaults.
#[test]
fn test_unparseable_values_fall_back() {
    let style = TextStyle::resolve(
        &ParsedStyle::parse("font-size: huge; font-weight: heavy; color: notacolor; line-height: tall"),
        &ResolutionContext::default().with_parent_font_size(20.0),
    );
    assert_eq!(style.font_size, 20.0);
    assert_eq!(style.font_weight, 400);
    assert_eq!(style.line_height, LineHeight::Auto);
    let Paint::Solid { color, .. } = style.fills[0];
    assert_eq!(color, Rgb { r: 0.0, g: 0.0, b: 0.0 });
}
