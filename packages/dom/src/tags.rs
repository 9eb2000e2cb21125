//! Tag classification

/// Elements that start a new block in flow layout
pub fn is_block(tag: &str) -> bool {
    matches!(
        tag.to_ascii_lowercase().as_str(),
        "address" | "article" | "aside" | "blockquote" | "dd" | "details" | "dialog" | "div" |
        "dl" | "dt" | "fieldset" | "figcaption" | "figure" | "footer" | "form" |
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "header" | "hgroup" | "hr" |
        "li" | "main" | "nav" | "ol" | "p" | "pre" | "section" | "table" | "ul"
    )
}

/// Elements with no content and no closing tag
pub fn is_void(tag: &str) -> bool {
    matches!(
        tag.to_ascii_lowercase().as_str(),
        "area" | "base" | "br" | "col" | "embed" | "hr" | "img" | "input" |
        "link" | "meta" | "source" | "track" | "wbr"
    )
}

pub fn is_list(tag: &str) -> bool {
    tag.eq_ignore_ascii_case("ul") || tag.eq_ignore_ascii_case("ol")
}

/// Containers whose children are blocks, never inline runs
pub fn is_container(tag: &str) -> bool {
    is_list(tag) || tag.eq_ignore_ascii_case("blockquote")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        assert!(is_block("p"));
        assert!(is_block("H2"));
        assert!(is_block("li"));
        assert!(!is_block("b"));
        assert!(!is_block("a"));

        assert!(is_void("br"));
        assert!(!is_void("p"));

        assert!(is_list("ol"));
        assert!(!is_list("li"));
        assert!(is_container("blockquote"));
        assert!(!is_container("p"));
    }
}
