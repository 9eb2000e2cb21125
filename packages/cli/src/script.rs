//! Host scripts: the sequence of actions a host framework would perform
//! on the element, as JSON.
//!
//! ```json
//! [
//!   "attach",
//!   {"attribute": {"name": "state", "value": "editing"}},
//!   {"select": {"start": 0, "end": 1}},
//!   {"attribute": {"name": "format", "value": "bold"}},
//!   {"setDraft": "<p>replaced</p>"},
//!   "detach"
//! ]
//! ```

use anyhow::{ensure, Context, Result};
use custom_editor::{BoundaryElement, ElementConfig, MemoryEngine, MemoryHost, Mode, OutwardEvent, Surface};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Step {
    Attach,
    Detach,
    /// Set an attribute; a missing or null value removes it
    Attribute {
        name: String,
        #[serde(default)]
        value: Option<String>,
    },
    /// Move the engine selection, like a user drag over blocks
    Select { start: usize, end: usize },
    SetDraft(String),
}

pub fn parse_script(json: &str) -> Result<Vec<Step>> {
    serde_json::from_str(json).context("Invalid script")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub mode: Mode,
    pub connected: bool,
    pub attached: Vec<Surface>,
    pub display_html: String,
    pub draft: String,
}

#[derive(Debug)]
pub struct Replay {
    element: BoundaryElement<MemoryEngine, MemoryHost>,
}

impl Replay {
    pub fn new(config: ElementConfig) -> Self {
        let engine = MemoryEngine::with_config(&config);
        Self {
            element: BoundaryElement::with_config(engine, MemoryHost::new(), config),
        }
    }

    pub fn run(&mut self, steps: &[Step]) -> Result<()> {
        for (index, step) in steps.iter().enumerate() {
            self.step(step)
                .with_context(|| format!("Step {} ({:?}) failed", index + 1, step))?;
        }
        Ok(())
    }

    pub fn step(&mut self, step: &Step) -> Result<()> {
        debug!(?step, "Replaying");
        match step {
            Step::Attach => self.element.on_attached(),
            Step::Detach => self.element.on_detached(),
            Step::Attribute { name, value } => self.element.set_attribute(name, value.as_deref())?,
            Step::Select { start, end } => {
                let blocks = self.element.engine().block_count();
                ensure!(
                    (*start).max(*end) < blocks,
                    "Selection {}..={} is outside the document ({} blocks)",
                    start,
                    end,
                    blocks
                );
                self.element.engine_mut().select(*start, *end);
                self.element.pump();
            }
            Step::SetDraft(html) => self.element.set_draft(html)?,
        }
        Ok(())
    }

    pub fn events(&self) -> &[OutwardEvent] {
        self.element.host().events()
    }

    pub fn summary(&self) -> Summary {
        Summary {
            mode: self.element.mode(),
            connected: self.element.is_connected(),
            attached: self.element.host().children().to_vec(),
            display_html: self.element.host().display_html().to_string(),
            draft: self.element.draft(),
        }
    }
}
