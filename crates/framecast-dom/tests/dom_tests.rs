//! Tests for input tree construction and JSON ingestion.

use framecast_dom::{DomError, DomTree, NodeId, NodeType};

// ========== builders ==========

#[test]
fn test_append_element_lowercases_tag_and_attrs() {
    let mut tree = DomTree::new();
    let div = tree.append_element(NodeId::ROOT, "DIV", &[("ID", "hero"), ("class", "a b")]);

    let data = tree.as_element(div).unwrap();
    assert_eq!(data.tag_name, "div");
    assert_eq!(data.id(), Some("hero"));
    assert_eq!(data.class_list(), vec!["a", "b"]);
    assert_eq!(tree.parent(div), Some(NodeId::ROOT));
    assert_eq!(tree.document_element(), Some(div));
}

#[test]
fn test_text_content_skips_comments() {
    let mut tree = DomTree::new();
    let p = tree.append_element(NodeId::ROOT, "p", &[]);
    let _ = tree.append_text(p, "Hello ");
    let _ = tree.append_comment(p, "hidden");
    let b = tree.append_element(p, "b", &[]);
    let _ = tree.append_text(b, "world");

    assert_eq!(tree.text_content(p), "Hello world");
}

#[test]
fn test_children_of_unknown_id_is_empty() {
    let tree = DomTree::new();
    assert!(tree.children(NodeId(42)).is_empty());
    assert!(tree.as_element(NodeId(42)).is_none());
}

#[test]
fn test_blank_id_is_none() {
    let mut tree = DomTree::new();
    let div = tree.append_element(NodeId::ROOT, "div", &[("id", "  ")]);
    assert_eq!(tree.as_element(div).unwrap().id(), None);
}

// ========== JSON ==========

#[test]
fn test_from_json_single_element() {
    let json = r#"{
        "type": "element",
        "tagName": "Section",
        "attributes": { "style": "padding: 4px", "data-count": 3, "hidden": true, "extra": null },
        "children": [
            { "type": "text", "content": "Hi" },
            { "type": "comment", "content": "note" }
        ]
    }"#;
    let tree = DomTree::from_json(json).unwrap();

    let section = tree.document_element().unwrap();
    let data = tree.as_element(section).unwrap();
    assert_eq!(data.tag_name, "section");
    assert_eq!(data.style(), Some("padding: 4px"));
    assert_eq!(data.attr("data-count"), Some("3"));
    assert_eq!(data.attr("hidden"), Some("true"));
    assert_eq!(data.attr("extra"), None);

    let children = tree.children(section);
    assert_eq!(children.len(), 2);
    assert_eq!(tree.as_text(children[0]), Some("Hi"));
    assert!(tree.is_comment(children[1]));
}

#[test]
fn test_from_json_fragment_array() {
    let json = r#"[
        { "type": "element", "tagName": "p" },
        { "type": "text", "content": "tail" }
    ]"#;
    let tree = DomTree::from_json(json).unwrap();
    assert_eq!(tree.children(NodeId::ROOT).len(), 2);
    assert!(matches!(
        tree.get(tree.children(NodeId::ROOT)[1]).map(|n| &n.node_type),
        Some(NodeType::Text(t)) if t == "tail"
    ));
}

#[test]
fn test_from_json_rejects_empty_tag() {
    let json = r#"{ "type": "element", "tagName": " " }"#;
    assert!(matches!(DomTree::from_json(json), Err(DomError::InvalidNode(_))));
}

#[test]
fn test_from_json_rejects_malformed_input() {
    assert!(matches!(DomTree::from_json("{ not json"), Err(DomError::Json(_))));
    assert!(matches!(
        DomTree::from_json(r#"{ "type": "widget" }"#),
        Err(DomError::Json(_))
    ));
}
