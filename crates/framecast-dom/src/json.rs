//! JSON ingestion for input trees.
//!
//! The upstream parser hands trees over as a discriminated union:
//!
//! ```text
//! { "type": "element", "tagName": "div", "attributes": { .. }, "children": [ .. ] }
//! { "type": "text", "content": "Hello" }
//! { "type": "comment", "content": "ignored" }
//! ```
//!
//! A single node or an array of nodes is accepted; either way the nodes are
//! appended under the Document root.

use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::{DomTree, ElementData, NodeId, NodeType};

/// Errors raised while ingesting an input tree.
#[derive(Debug, Error)]
pub enum DomError {
    /// The input is not valid JSON or does not match the node shape.
    #[error("malformed input tree: {0}")]
    Json(#[from] serde_json::Error),
    /// A node is structurally valid JSON but cannot be represented.
    #[error("invalid node: {0}")]
    InvalidNode(String),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonInput {
    Many(Vec<JsonNode>),
    One(JsonNode),
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum JsonNode {
    Element {
        #[serde(rename = "tagName")]
        tag_name: String,
        #[serde(default)]
        attributes: Map<String, Value>,
        #[serde(default)]
        children: Vec<JsonNode>,
    },
    Text {
        content: String,
    },
    Comment {
        #[serde(default)]
        content: String,
    },
}

impl DomTree {
    /// Build a tree from the JSON node union.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::Json`] for malformed JSON and
    /// [`DomError::InvalidNode`] for an element with an empty tag name.
    pub fn from_json(source: &str) -> Result<Self, DomError> {
        let input: JsonInput = serde_json::from_str(source)?;
        let mut tree = Self::new();
        match input {
            JsonInput::One(node) => tree.insert_json(NodeId::ROOT, node)?,
            JsonInput::Many(nodes) => {
                for node in nodes {
                    tree.insert_json(NodeId::ROOT, node)?;
                }
            }
        }
        Ok(tree)
    }

    fn insert_json(&mut self, parent: NodeId, node: JsonNode) -> Result<(), DomError> {
        match node {
            JsonNode::Element {
                tag_name,
                attributes,
                children,
            } => {
                let tag = tag_name.trim();
                if tag.is_empty() {
                    return Err(DomError::InvalidNode("element with empty tagName".to_string()));
                }
                let mut data = ElementData::new(tag);
                for (name, value) in attributes {
                    if let Some(value) = attribute_string(value) {
                        let _ = data.attrs.insert(name.to_ascii_lowercase(), value);
                    }
                }
                let id = self.alloc(NodeType::Element(data));
                self.append_child(parent, id);
                for child in children {
                    self.insert_json(id, child)?;
                }
            }
            JsonNode::Text { content } => {
                let _ = self.append_text(parent, &content);
            }
            JsonNode::Comment { content } => {
                let _ = self.append_comment(parent, &content);
            }
        }
        Ok(())
    }
}

/// Attribute values arrive as arbitrary JSON; only scalars have a string form.
fn attribute_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
