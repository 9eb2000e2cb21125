//! # Format Commands
//!
//! The fixed command vocabulary accepted through the `format` attribute.
//!
//! Each command has one wire name (what the host framework sends) and an
//! optional descriptive alias. Anything else is not a command and is
//! ignored by the element.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Target of a block-type replacement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockType {
    Title,
    Header,
    Subheader,
    Paragraph,
}

impl BlockType {
    pub fn tag(self) -> &'static str {
        match self {
            BlockType::Title => "h1",
            BlockType::Header => "h2",
            BlockType::Subheader => "h3",
            BlockType::Paragraph => "p",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    IncreaseLevel,
    DecreaseLevel,
    MakeUnorderedList,
    MakeOrderedList,
    RemoveList,
    SetBlockType(BlockType),
    Bold,
    RemoveBold,
    Italic,
    RemoveItalic,
    Undo,
    Redo,
    RemoveAllFormatting,
}

impl Command {
    pub const ALL: [Command; 16] = [
        Command::IncreaseLevel,
        Command::DecreaseLevel,
        Command::MakeUnorderedList,
        Command::MakeOrderedList,
        Command::RemoveList,
        Command::SetBlockType(BlockType::Title),
        Command::SetBlockType(BlockType::Header),
        Command::SetBlockType(BlockType::Subheader),
        Command::SetBlockType(BlockType::Paragraph),
        Command::Bold,
        Command::RemoveBold,
        Command::Italic,
        Command::RemoveItalic,
        Command::Undo,
        Command::Redo,
        Command::RemoveAllFormatting,
    ];

    /// Look up a command by wire name or alias
    pub fn parse(name: &str) -> Option<Command> {
        Self::ALL
            .into_iter()
            .find(|command| command.wire_name() == name || command.alias() == Some(name))
    }

    pub fn wire_name(self) -> &'static str {
        match self {
            Command::IncreaseLevel => "increaseLevel",
            Command::DecreaseLevel => "decreaseLevel",
            Command::MakeUnorderedList => "makeUnorderedList",
            Command::MakeOrderedList => "makeOrderedList",
            Command::RemoveList => "removeList",
            Command::SetBlockType(BlockType::Title) => "makeTitle",
            Command::SetBlockType(BlockType::Header) => "makeHeader",
            Command::SetBlockType(BlockType::Subheader) => "makeSubheader",
            Command::SetBlockType(BlockType::Paragraph) => "removeHeader",
            Command::Bold => "bold",
            Command::RemoveBold => "removeBold",
            Command::Italic => "italic",
            Command::RemoveItalic => "removeItalic",
            Command::Undo => "undo",
            Command::Redo => "redo",
            Command::RemoveAllFormatting => "removeAllFormatting",
        }
    }

    pub fn alias(self) -> Option<&'static str> {
        match self {
            Command::IncreaseLevel => Some("increase-indent"),
            Command::DecreaseLevel => Some("decrease-indent"),
            Command::MakeUnorderedList => Some("make-unordered-list"),
            Command::MakeOrderedList => Some("make-ordered-list"),
            Command::RemoveList => Some("remove-list"),
            Command::SetBlockType(BlockType::Title) => Some("set-block-type-title"),
            Command::SetBlockType(BlockType::Header) => Some("set-block-type-header"),
            Command::SetBlockType(BlockType::Subheader) => Some("set-block-type-subheader"),
            Command::SetBlockType(BlockType::Paragraph) => Some("set-block-type-paragraph"),
            Command::Bold => Some("toggle-bold-on"),
            Command::RemoveBold => Some("toggle-bold-off"),
            Command::Italic => Some("toggle-italic-on"),
            Command::RemoveItalic => Some("toggle-italic-off"),
            Command::Undo | Command::Redo => None,
            Command::RemoveAllFormatting => Some("clear-all-formatting"),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_parse_wire_names_and_aliases() {
        assert_eq!(Command::parse("bold"), Some(Command::Bold));
        assert_eq!(Command::parse("toggle-bold-on"), Some(Command::Bold));
        assert_eq!(
            Command::parse("makeHeader"),
            Some(Command::SetBlockType(BlockType::Header))
        );
        assert_eq!(
            Command::parse("set-block-type-paragraph"),
            Some(Command::SetBlockType(BlockType::Paragraph))
        );
        assert_eq!(Command::parse("undo"), Some(Command::Undo));
    }

    #[test]
    fn test_unknown_commands() {
        assert_eq!(Command::parse("unknownCommand"), None);
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("Bold"), None);
        assert_eq!(Command::parse(" bold"), None);
    }

    #[test]
    fn test_every_name_is_unique() {
        let mut seen = HashSet::new();
        for command in Command::ALL {
            assert!(seen.insert(command.wire_name()), "duplicate {}", command);
            if let Some(alias) = command.alias() {
                assert!(seen.insert(alias), "duplicate alias {}", alias);
            }
            assert_eq!(Command::parse(command.wire_name()), Some(command));
        }
    }

    #[test]
    fn test_block_type_tags() {
        assert_eq!(BlockType::Title.tag(), "h1");
        assert_eq!(BlockType::Header.tag(), "h2");
        assert_eq!(BlockType::Subheader.tag(), "h3");
        assert_eq!(BlockType::Paragraph.tag(), "p");
    }
}
