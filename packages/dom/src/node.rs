use serde::{Deserialize, Serialize};

use crate::tags;

/// Detached DOM node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    /// HTML element. Attributes keep source order so serialization is stable.
    Element {
        tag: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        attributes: Vec<(String, String)>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        children: Vec<Node>,
    },

    /// Text node (entity-decoded)
    Text { content: String },

    /// Comment node
    Comment { content: String },
}

impl Node {
    pub fn element(tag: impl Into<String>) -> Self {
        Node::Element {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Node::Text {
            content: content.into(),
        }
    }

    pub fn comment(content: impl Into<String>) -> Self {
        Node::Comment {
            content: content.into(),
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        if let Node::Element {
            ref mut children, ..
        } = self
        {
            children.push(child);
        }
        self
    }

    pub fn with_children(mut self, new_children: Vec<Node>) -> Self {
        if let Node::Element {
            ref mut children, ..
        } = self
        {
            children.extend(new_children);
        }
        self
    }

    /// Tag name for elements, `None` for text and comments
    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Element { tag, .. } => Some(tag),
            _ => None,
        }
    }

    pub fn is_element(&self, name: &str) -> bool {
        self.tag().is_some_and(|tag| tag.eq_ignore_ascii_case(name))
    }

    pub fn is_block(&self) -> bool {
        self.tag().is_some_and(tags::is_block)
    }

    pub fn is_list(&self) -> bool {
        self.tag().is_some_and(tags::is_list)
    }

    /// Rename an element in place, keeping attributes and children
    pub fn set_tag(&mut self, new_tag: impl Into<String>) {
        if let Node::Element { tag, .. } = self {
            *tag = new_tag.into();
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        match self {
            Node::Element { attributes, .. } => attributes
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.as_str()),
            _ => None,
        }
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        if let Node::Element { attributes, .. } = self {
            let name = name.into();
            let value = value.into();
            match attributes.iter_mut().find(|(key, _)| *key == name) {
                Some(slot) => slot.1 = value,
                None => attributes.push((name, value)),
            }
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element { children, .. } => children,
            _ => &[],
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Element { children, .. } => Some(children),
            _ => None,
        }
    }

    /// Detach and return all children, leaving the element empty
    pub fn take_children(&mut self) -> Vec<Node> {
        self.children_mut().map(std::mem::take).unwrap_or_default()
    }

    pub fn into_children(self) -> Vec<Node> {
        match self {
            Node::Element { children, .. } => children,
            _ => Vec::new(),
        }
    }

    /// True when any direct child is a block-level element
    pub fn has_block_children(&self) -> bool {
        self.children().iter().any(Node::is_block)
    }

    /// Concatenated text of this node and its descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text { content } => out.push_str(content),
            Node::Element { children, .. } => {
                for child in children {
                    child.collect_text(out);
                }
            }
            Node::Comment { .. } => {}
        }
    }

    /// Whitespace-only text nodes are insignificant between blocks
    pub fn is_blank_text(&self) -> bool {
        matches!(self, Node::Text { content } if content.trim().is_empty())
    }
}
