use thiserror::Error;

pub type HtmlResult<T> = Result<T, HtmlError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HtmlError {
    #[error("Unexpected closing tag </{tag}> at {pos}: no element is open")]
    UnexpectedClosingTag { tag: String, pos: usize },

    #[error("Mismatched closing tag at {pos}: expected </{expected}>, found </{found}>")]
    MismatchedClosingTag {
        expected: String,
        found: String,
        pos: usize,
    },
}

impl HtmlError {
    pub fn unexpected_closing_tag(tag: impl Into<String>, pos: usize) -> Self {
        Self::UnexpectedClosingTag {
            tag: tag.into(),
            pos,
        }
    }

    pub fn mismatched_closing_tag(expected: impl Into<String>, found: impl Into<String>, pos: usize) -> Self {
        Self::MismatchedClosingTag {
            expected: expected.into(),
            found: found.into(),
            pos,
        }
    }

    /// Byte offset into the source where the error was detected
    pub fn pos(&self) -> usize {
        match self {
            Self::UnexpectedClosingTag { pos, .. } | Self::MismatchedClosingTag { pos, .. } => *pos,
        }
    }
}
