use serde::{Deserialize, Serialize};

/// Rendering mode of the boundary element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Editing,
    Display,
}

impl Mode {
    /// Derive the mode from the `state` attribute. Only an exact match on
    /// `editing_value` selects [`Mode::Editing`].
    pub fn from_state(state: Option<&str>, editing_value: &str) -> Self {
        match state {
            Some(value) if value == editing_value => Mode::Editing,
            _ => Mode::Display,
        }
    }
}
