//! Recording [`HostTree`] for tests and replays

use serde::Serialize;

use crate::event::OutwardEvent;
use crate::host::{HostTree, Surface};

/// Mutation applied to the host, in order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", content = "value", rename_all = "camelCase")]
pub enum HostOp {
    Append(Surface),
    Remove(Surface),
    WriteDisplay(String),
}

#[derive(Debug, Default, Clone)]
pub struct MemoryHost {
    children: Vec<Surface>,
    display_html: String,
    events: Vec<OutwardEvent>,
    log: Vec<HostOp>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Surfaces currently attached, in child order
    pub fn children(&self) -> &[Surface] {
        &self.children
    }

    pub fn count(&self, surface: Surface) -> usize {
        self.children.iter().filter(|child| **child == surface).count()
    }

    /// The single attached surface, if exactly one is attached
    pub fn attached(&self) -> Option<Surface> {
        match self.children.as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }

    pub fn display_html(&self) -> &str {
        &self.display_html
    }

    pub fn events(&self) -> &[OutwardEvent] {
        &self.events
    }

    pub fn take_events(&mut self) -> Vec<OutwardEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn events_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a OutwardEvent> + 'a {
        self.events.iter().filter(move |event| event.name() == name)
    }

    pub fn last_caret(&self) -> Option<&OutwardEvent> {
        self.events_named("caret").last()
    }

    pub fn last_draft(&self) -> Option<&OutwardEvent> {
        self.events_named("draft").last()
    }

    pub fn log(&self) -> &[HostOp] {
        &self.log
    }

    pub fn clear_log(&mut self) {
        self.log.clear();
    }
}

impl HostTree for MemoryHost {
    fn contains(&self, surface: Surface) -> bool {
        self.children.contains(&surface)
    }

    fn append_child(&mut self, surface: Surface) {
        self.children.push(surface);
        self.log.push(HostOp::Append(surface));
    }

    fn remove_child(&mut self, surface: Surface) {
        if let Some(index) = self.children.iter().position(|child| *child == surface) {
            self.children.remove(index);
            self.log.push(HostOp::Remove(surface));
        }
    }

    fn set_display_html(&mut self, html: &str) {
        self.display_html = html.to_string();
        self.log.push(HostOp::WriteDisplay(html.to_string()));
    }

    fn dispatch_event(&mut self, event: &OutwardEvent) {
        self.events.push(event.clone());
    }
}
