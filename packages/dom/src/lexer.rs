//! HTML fragment lexer using logos
//!
//! Only the four token shapes that appear in editor output are
//! recognised. Anything else (a stray `<`, `<!DOCTYPE>`) is reported as a
//! lexer error and the parser keeps it as literal text.

use logos::Logos;

#[derive(Logos, Debug, Clone, PartialEq, Eq)]
pub enum Token<'src> {
    #[regex(r"<!--([^-]|-[^-])*-->", |lex| {
        let s = lex.slice();
        &s[4..s.len() - 3]
    })]
    Comment(&'src str),

    /// Whole opening tag including attributes, e.g. `<a href="x">` or
    /// `<br/>`. Quoted values may contain `<` and `>`.
    #[regex(r#"<[a-zA-Z][a-zA-Z0-9-]*(?:[ \t\r\n/](?:"[^"]*"|'[^']*'|[^<>"'])*)?>"#, |lex| lex.slice())]
    OpenTag(&'src str),

    #[regex(r"</[a-zA-Z][a-zA-Z0-9-]*[ \t\r\n]*>", |lex| {
        let s = lex.slice();
        s[2..s.len() - 1].trim_end()
    })]
    CloseTag(&'src str),

    #[regex(r"[^<]+", |lex| lex.slice())]
    Text(&'src str),
}

/// Parsed pieces of an opening tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenTag {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub self_closing: bool,
}

/// Split a raw `<name attr="v" ...>` slice into its parts
pub fn parse_open_tag(raw: &str) -> OpenTag {
    let inner = &raw[1..raw.len() - 1];
    let (inner, self_closing) = match inner.strip_suffix('/') {
        Some(rest) => (rest, true),
        None => (inner, false),
    };

    let name_end = inner
        .find(|c: char| c.is_ascii_whitespace() || c == '/')
        .unwrap_or(inner.len());
    let name = inner[..name_end].to_ascii_lowercase();

    OpenTag {
        name,
        attributes: parse_attributes(&inner[name_end..]),
        self_closing,
    }
}

fn parse_attributes(input: &str) -> Vec<(String, String)> {
    let mut attributes = Vec::new();
    let mut chars = input.char_indices().peekable();

    loop {
        while chars.next_if(|(_, c)| c.is_ascii_whitespace() || *c == '/').is_some() {}

        let Some(&(start, _)) = chars.peek() else {
            break;
        };
        while chars
            .next_if(|(_, c)| !c.is_ascii_whitespace() && *c != '=' && *c != '/')
            .is_some()
        {}
        let end = chars.peek().map(|(i, _)| *i).unwrap_or(input.len());
        let name = input[start..end].to_ascii_lowercase();

        while chars.next_if(|(_, c)| c.is_ascii_whitespace()).is_some() {}

        let value = if chars.next_if(|(_, c)| *c == '=').is_some() {
            while chars.next_if(|(_, c)| c.is_ascii_whitespace()).is_some() {}
            match chars.peek().copied() {
                Some((i, quote @ ('"' | '\''))) => {
                    chars.next();
                    let value_start = i + 1;
                    let mut value_end = input.len();
                    for (j, c) in chars.by_ref() {
                        if c == quote {
                            value_end = j;
                            break;
                        }
                    }
                    decode_entities(&input[value_start..value_end])
                }
                Some((i, _)) => {
                    while chars.next_if(|(_, c)| !c.is_ascii_whitespace()).is_some() {}
                    let value_end = chars.peek().map(|(j, _)| *j).unwrap_or(input.len());
                    decode_entities(&input[i..value_end])
                }
                None => String::new(),
            }
        } else {
            String::new()
        };

        if !name.is_empty() {
            attributes.push((name, value));
        }
    }

    attributes
}

/// Longest entity body looked at, e.g. `#x10FFFF`
const MAX_ENTITY_LEN: usize = 10;

/// Decode the named and numeric entities editors actually emit.
/// Unknown entities are kept verbatim.
pub fn decode_entities(input: &str) -> String {
    if !input.contains('&') {
        return input.to_string();
    }

    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];

        let semi = rest.bytes().take(MAX_ENTITY_LEN + 2).position(|b| b == b';');
        let decoded = semi.and_then(|semi| {
            let entity = &rest[1..semi];
            let ch = match entity {
                "amp" => Some('&'),
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                "nbsp" => Some('\u{a0}'),
                _ => entity
                    .strip_prefix("#x")
                    .or_else(|| entity.strip_prefix("#X"))
                    .and_then(|hex| u32::from_str_radix(hex, 16).ok())
                    .or_else(|| entity.strip_prefix('#').and_then(|dec| dec.parse().ok()))
                    .and_then(char::from_u32),
            };
            ch.map(|c| (c, semi))
        });

        match decoded {
            Some((c, semi)) => {
                out.push(c);
                rest = &rest[semi + 1..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(src: &str) -> Vec<Result<Token<'_>, ()>> {
        Token::lexer(src).collect()
    }

    #[test]
    fn test_basic_tokens() {
        let tokens = lex("<p class=\"a\">Hi</p><!-- note -->");
        assert_eq!(
            tokens,
            vec![
                Ok(Token::OpenTag("<p class=\"a\">")),
                Ok(Token::Text("Hi")),
                Ok(Token::CloseTag("p")),
                Ok(Token::Comment(" note ")),
            ]
        );
    }

    #[test]
    fn test_stray_angle_bracket_is_an_error_token() {
        let tokens = lex("a < b");
        assert_eq!(tokens[0], Ok(Token::Text("a ")));
        assert_eq!(tokens[1], Err(()));
    }

    #[test]
    fn test_parse_open_tag_attributes() {
        let tag = parse_open_tag("<a href=\"/x?a=1&amp;b=2\" target=_blank data-x='y z' hidden>");
        assert_eq!(tag.name, "a");
        assert!(!tag.self_closing);
        assert_eq!(
            tag.attributes,
            vec![
                ("href".to_string(), "/x?a=1&b=2".to_string()),
                ("target".to_string(), "_blank".to_string()),
                ("data-x".to_string(), "y z".to_string()),
                ("hidden".to_string(), String::new()),
            ]
        );
    }

    #[test]
    fn test_parse_self_closing() {
        let tag = parse_open_tag("<BR/>");
        assert_eq!(tag.name, "br");
        assert!(tag.self_closing);
        assert!(tag.attributes.is_empty());
    }

    #[test]
    fn test_decode_entities() {
        assert_eq!(decode_entities("a &lt;b&gt; &amp; c"), "a <b> & c");
        assert_eq!(decode_entities("&#65;&#x42;"), "AB");
        assert_eq!(decode_entities("&unknown; & done"), "&unknown; & done");
        assert_eq!(decode_entities("x&nbsp;y"), "x\u{a0}y");
    }

    #[test]
    fn test_entity_length_is_bounded() {
        assert_eq!(decode_entities("a & b; c &amp;"), "a & b; c &");
        assert_eq!(decode_entities("&#x10FFFF;"), "\u{10FFFF}");
        assert_eq!(decode_entities("&verylongentityname;"), "&verylongentityname;");
    }

    #[test]
    fn test_quoted_attribute_may_contain_angle_brackets() {
        let tokens = lex("<p title=\"a>b\" data-x='<i>'>x</p>");
        assert_eq!(
            tokens,
            vec![
                Ok(Token::OpenTag("<p title=\"a>b\" data-x='<i>'>")),
                Ok(Token::Text("x")),
                Ok(Token::CloseTag("p")),
            ]
        );

        let tag = parse_open_tag("<p title=\"a>b\" data-x='<i>'>");
        assert_eq!(
            tag.attributes,
            vec![
                ("title".to_string(), "a>b".to_string()),
                ("data-x".to_string(), "<i>".to_string()),
            ]
        );
    }
}
