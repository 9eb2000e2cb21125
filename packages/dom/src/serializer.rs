use crate::node::Node;
use crate::tags;

/// Serialize a fragment to HTML
pub fn to_html(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        write_node(node, &mut out);
    }
    out
}

impl Node {
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        write_node(self, &mut out);
        out
    }

    /// Serialized children only, like `innerHTML`
    pub fn inner_html(&self) -> String {
        to_html(self.children())
    }
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Element {
            tag,
            attributes,
            children,
        } => {
            out.push('<');
            out.push_str(tag);
            for (name, value) in attributes {
                out.push(' ');
                out.push_str(name);
                out.push_str("=\"");
                out.push_str(&escape_attribute(value));
                out.push('"');
            }
            out.push('>');

            if tags::is_void(tag) {
                return;
            }

            for child in children {
                write_node(child, out);
            }
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }
        Node::Text { content } => out.push_str(&escape_text(content)),
        Node::Comment { content } => {
            out.push_str("<!--");
            out.push_str(content);
            out.push_str("-->");
        }
    }
}

pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn escape_attribute(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_fragment;

    #[test]
    fn test_serialize_element_tree() {
        let node = Node::element("h2")
            .with_attr("class", "big \"one\"")
            .with_child(Node::element("b").with_child(Node::text("x")))
            .with_child(Node::text("y & z"));

        assert_eq!(node.to_html(), "<h2 class=\"big &quot;one&quot;\"><b>x</b>y &amp; z</h2>");
        assert_eq!(node.inner_html(), "<b>x</b>y &amp; z");
    }

    #[test]
    fn test_void_elements_have_no_closing_tag() {
        let node = Node::element("p")
            .with_child(Node::text("a"))
            .with_child(Node::element("br"));
        assert_eq!(node.to_html(), "<p>a<br></p>");
    }

    #[test]
    fn test_editor_markup_is_stable() {
        for html in [
            "<p>Hello</p>",
            "<p><b>x</b>y</p>",
            "<ul><li>one</li><li>two<ol><li>nested</li></ol></li></ul>",
            "<blockquote><p>quoted &lt;tag&gt;</p></blockquote>",
            "<p><a href=\"https://example.com/?a=1&amp;b=2\">link</a></p>",
            "<p>a<br>b</p><!--c-->",
        ] {
            let nodes = parse_fragment(html).unwrap();
            assert_eq!(to_html(&nodes), html);
        }
    }
}
