//! Atlassian Document Format (ADF) to plain text.
//!
//! Jira Cloud returns issue descriptions as an ADF tree. Only a handful of
//! node kinds carry text worth feeding into test generation; the rest are
//! dropped without error so that schema additions on the Jira side never
//! break rendering.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Bullet marker emitted for each list item paragraph.
pub const BULLET: &str = "• ";

/// The kind tag carried in an ADF node's `type` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeKind {
    Doc,
    Paragraph,
    Text,
    HardBreak,
    BulletList,
    OrderedList,
    ListItem,
    Other(String),
}

impl Default for NodeKind {
    fn default() -> Self {
        NodeKind::Other(String::new())
    }
}

impl From<String> for NodeKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "doc" => NodeKind::Doc,
            "paragraph" => NodeKind::Paragraph,
            "text" => NodeKind::Text,
            "hardBreak" => NodeKind::HardBreak,
            "bulletList" => NodeKind::BulletList,
            "orderedList" => NodeKind::OrderedList,
            "listItem" => NodeKind::ListItem,
            _ => NodeKind::Other(s),
        }
    }
}

impl From<NodeKind> for String {
    fn from(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Doc => "doc".to_string(),
            NodeKind::Paragraph => "paragraph".to_string(),
            NodeKind::Text => "text".to_string(),
            NodeKind::HardBreak => "hardBreak".to_string(),
            NodeKind::BulletList => "bulletList".to_string(),
            NodeKind::OrderedList => "orderedList".to_string(),
            NodeKind::ListItem => "listItem".to_string(),
            NodeKind::Other(s) => s,
        }
    }
}

/// A single node of an ADF tree.
///
/// Fields are read leniently: a field of the wrong shape reads as absent and
/// a child that is not an object is dropped, so one odd node never costs the
/// rest of the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdfNode {
    #[serde(rename = "type", default, deserialize_with = "lenient_kind")]
    pub kind: NodeKind,

    #[serde(
        default,
        deserialize_with = "lenient_children",
        skip_serializing_if = "Option::is_none"
    )]
    pub content: Option<Vec<AdfNode>>,

    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub text: Option<String>,
}

fn lenient_kind<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NodeKind, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(kind) => NodeKind::from(kind),
        _ => NodeKind::default(),
    })
}

fn lenient_children<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Vec<AdfNode>>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
        ),
        _ => None,
    })
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        _ => None,
    })
}

impl AdfNode {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            content: None,
            text: None,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Text,
            content: None,
            text: Some(text.into()),
        }
    }

    pub fn with_content(mut self, content: Vec<AdfNode>) -> Self {
        self.content = Some(content);
        self
    }

    fn children(&self) -> &[AdfNode] {
        self.content.as_deref().unwrap_or_default()
    }

    /// Text of an inline `text` node, if it has any.
    fn inline_text(&self) -> Option<&str> {
        match self.kind {
            NodeKind::Text => self.text.as_deref().filter(|t| !t.is_empty()),
            _ => None,
        }
    }
}

/// An issue description as Jira hands it back: plain text on older
/// instances, an ADF document on Cloud, or something else entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Description {
    Text(String),
    Document(AdfNode),
    Other(Value),
}

impl Description {
    pub fn to_plain_text(&self) -> String {
        match self {
            Description::Text(text) => text.clone(),
            Description::Document(node) if node.kind == NodeKind::Doc => match &node.content {
                Some(content) => render_blocks(content),
                None => String::new(),
            },
            Description::Document(_) | Description::Other(_) => String::new(),
        }
    }
}

impl From<&str> for Description {
    fn from(text: &str) -> Self {
        Description::Text(text.to_string())
    }
}

impl From<AdfNode> for Description {
    fn from(node: AdfNode) -> Self {
        Description::Document(node)
    }
}

/// Flatten a description to plain text.
///
/// Strings pass through untouched. Documents are rendered block by block
/// and trimmed. Anything that is not a `doc` node renders as empty.
pub fn convert_adf_to_text(description: Option<&Description>) -> String {
    description.map(Description::to_plain_text).unwrap_or_default()
}

fn render_blocks(nodes: &[AdfNode]) -> String {
    let mut text = String::new();

    for node in nodes {
        match node.kind {
            NodeKind::Paragraph => {
                let Some(children) = &node.content else {
                    continue;
                };
                for child in children {
                    match child.kind {
                        NodeKind::Text => text.push_str(child.inline_text().unwrap_or_default()),
                        NodeKind::HardBreak => text.push('\n'),
                        _ => {}
                    }
                }
                text.push('\n');
            }
            NodeKind::BulletList | NodeKind::OrderedList => {
                for item in node.children() {
                    for para in item.children() {
                        if para.kind != NodeKind::Paragraph || para.content.is_none() {
                            continue;
                        }
                        text.push_str(BULLET);
                        for child in para.children() {
                            if let Some(t) = child.inline_text() {
                                text.push_str(t);
                            }
                        }
                        text.push('\n');
                    }
                }
            }
            NodeKind::HardBreak => text.push('\n'),
            _ => {}
        }
    }

    text.trim().to_string()
}
