//! HTML fragment parser
//!
//! Builds a `Vec<Node>` from the lexer's token stream with an explicit
//! stack of open elements. Elements still open at end of input are closed
//! implicitly; closing tags that do not match the innermost open element
//! are errors.

use logos::Logos;

use crate::error::{HtmlError, HtmlResult};
use crate::lexer::{decode_entities, parse_open_tag, Token};
use crate::node::Node;
use crate::tags;

struct OpenElement {
    tag: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl OpenElement {
    fn finish(self) -> Node {
        Node::Element {
            tag: self.tag,
            attributes: self.attributes,
            children: self.children,
        }
    }
}

/// Parse an HTML fragment (no `<html>`/`<body>` wrapping)
pub fn parse_fragment(source: &str) -> HtmlResult<Vec<Node>> {
    let mut roots: Vec<Node> = Vec::new();
    let mut stack: Vec<OpenElement> = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let span = lexer.span();
        let siblings = match stack.last_mut() {
            Some(open) => &mut open.children,
            None => &mut roots,
        };

        match token {
            Ok(Token::Text(raw)) => push_text(siblings, &decode_entities(raw)),
            Ok(Token::Comment(content)) => siblings.push(Node::comment(content)),
            Ok(Token::OpenTag(raw)) => {
                let open = parse_open_tag(raw);
                if open.self_closing || tags::is_void(&open.name) {
                    siblings.push(Node::Element {
                        tag: open.name,
                        attributes: open.attributes,
                        children: Vec::new(),
                    });
                } else {
                    stack.push(OpenElement {
                        tag: open.name,
                        attributes: open.attributes,
                        children: Vec::new(),
                    });
                }
            }
            Ok(Token::CloseTag(name)) => {
                let name = name.to_ascii_lowercase();
                if tags::is_void(&name) {
                    continue;
                }
                let Some(open) = stack.pop() else {
                    return Err(HtmlError::unexpected_closing_tag(name, span.start));
                };
                if open.tag != name {
                    return Err(HtmlError::mismatched_closing_tag(open.tag, name, span.start));
                }
                let node = open.finish();
                match stack.last_mut() {
                    Some(parent) => parent.children.push(node),
                    None => roots.push(node),
                }
            }
            // Unrecognised markup stays as literal text
            Err(()) => push_text(siblings, &source[span]),
        }
    }

    while let Some(open) = stack.pop() {
        let node = open.finish();
        match stack.last_mut() {
            Some(parent) => parent.children.push(node),
            None => roots.push(node),
        }
    }

    Ok(roots)
}

fn push_text(siblings: &mut Vec<Node>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(Node::Text { content }) = siblings.last_mut() {
        content.push_str(text);
    } else {
        siblings.push(Node::text(text));
    }
}
