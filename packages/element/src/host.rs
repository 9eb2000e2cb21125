//! Host tree seam
//!
//! The element's own DOM node, as far as the boundary touches it: which
//! surface is a child, attaching and detaching surfaces, writing the
//! display snapshot, and dispatching outward events.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::event::OutwardEvent;

/// One of the two subtrees owned by the element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Surface {
    /// Hosts the live editing engine
    Editable,
    /// Holds a static HTML snapshot
    Display,
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Surface::Editable => f.write_str("editable"),
            Surface::Display => f.write_str("display"),
        }
    }
}

pub trait HostTree {
    fn contains(&self, surface: Surface) -> bool;

    /// Append `surface` as a child of the host element
    fn append_child(&mut self, surface: Surface);

    fn remove_child(&mut self, surface: Surface);

    /// Replace the display surface's content with `html`, verbatim
    fn set_display_html(&mut self, html: &str);

    fn dispatch_event(&mut self, event: &OutwardEvent);
}
