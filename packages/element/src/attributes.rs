//! Observed attributes
//!
//! The host framework talks to the element only by setting these
//! attributes. Values are stored verbatim; meaning is derived on read.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObservedAttribute {
    Release,
    Caret,
    Id,
    State,
    Format,
}

/// Names registered with the host runtime, in registration order
pub const OBSERVED_ATTRIBUTES: [&str; 5] = ["release", "caret", "id", "state", "format"];

impl ObservedAttribute {
    pub const ALL: [ObservedAttribute; 5] = [
        ObservedAttribute::Release,
        ObservedAttribute::Caret,
        ObservedAttribute::Id,
        ObservedAttribute::State,
        ObservedAttribute::Format,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ObservedAttribute::Release => "release",
            ObservedAttribute::Caret => "caret",
            ObservedAttribute::Id => "id",
            ObservedAttribute::State => "state",
            ObservedAttribute::Format => "format",
        }
    }
}

impl fmt::Display for ObservedAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnobservedAttribute(pub String);

impl FromStr for ObservedAttribute {
    type Err = UnobservedAttribute;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|attr| attr.as_str() == name)
            .ok_or_else(|| UnobservedAttribute(name.to_string()))
    }
}

/// Current values of the observed attributes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    values: HashMap<ObservedAttribute, String>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, attr: ObservedAttribute) -> Option<&str> {
        self.values.get(&attr).map(String::as_str)
    }

    pub fn has(&self, attr: ObservedAttribute) -> bool {
        self.values.contains_key(&attr)
    }

    /// Store a new value; `None` removes the attribute
    pub fn set(&mut self, attr: ObservedAttribute, value: Option<&str>) {
        match value {
            Some(value) => {
                self.values.insert(attr, value.to_string());
            }
            None => {
                self.values.remove(&attr);
            }
        }
    }
}
