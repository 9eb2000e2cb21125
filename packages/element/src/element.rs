//! # Boundary Element
//!
//! Keeps a stateful editing engine alive underneath a host framework that
//! re-renders by diffing. The host drives the element exclusively through
//! lifecycle callbacks and attribute changes; the element answers with
//! outward events.
//!
//! ```text
//!          attributes (state, release, format, id, caret)
//!   host ──────────────────────────────────────────────▶ BoundaryElement
//!    ▲                                                     │        │
//!    │            caret / draft events                     │  Editor<E>
//!    └─────────────────────────────────────────────────────┘  (engine)
//! ```
//!
//! The engine is created once with the element and only its attachment
//! point changes: in editing mode the editable surface is the host's
//! child, in display mode the display surface is, never both.

use tracing::{debug, info, instrument, trace};

use crate::adapter::Editor;
use crate::attributes::{Attributes, ObservedAttribute, OBSERVED_ATTRIBUTES};
use crate::command::Command;
use crate::config::ElementConfig;
use crate::engine::{EditingEngine, NotificationKind};
use crate::event::OutwardEvent;
use crate::host::HostTree;
use crate::mode::Mode;
use crate::transition::{apply_plan, plan_transition, Attachment};

#[derive(Debug)]
pub struct BoundaryElement<E: EditingEngine, H: HostTree> {
    config: ElementConfig,
    attributes: Attributes,
    editor: Editor<E>,
    host: H,
    connected: bool,
}

impl<E: EditingEngine, H: HostTree> BoundaryElement<E, H> {
    pub fn new(engine: E, host: H) -> Self {
        Self::with_config(engine, host, ElementConfig::default())
    }

    /// Bind the engine and subscribe to its notifications. Neither surface
    /// is attached until the first `state` change or [`Self::on_attached`].
    pub fn with_config(engine: E, host: H, config: ElementConfig) -> Self {
        let mut editor = Editor::new(engine);
        editor.subscribe(NotificationKind::PathChange);
        editor.subscribe(NotificationKind::Input);
        debug!(tag = %config.tag_name, "Boundary element constructed");

        Self {
            config,
            attributes: Attributes::new(),
            editor,
            host,
            connected: false,
        }
    }

    pub fn observed_attributes() -> &'static [&'static str] {
        &OBSERVED_ATTRIBUTES
    }

    /// Current mode, recomputed from the `state` attribute
    pub fn mode(&self) -> Mode {
        Mode::from_state(
            self.attributes.get(ObservedAttribute::State),
            &self.config.editing_state,
        )
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        let attr = name.parse::<ObservedAttribute>().ok()?;
        self.attributes.get(attr)
    }

    /// Echoed into every outward event
    pub fn source_id(&self) -> &str {
        self.attributes.get(ObservedAttribute::Id).unwrap_or_default()
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn engine(&self) -> &E {
        self.editor.engine()
    }

    pub fn engine_mut(&mut self) -> &mut E {
        self.editor.engine_mut()
    }

    /// Current draft, straight from the engine
    pub fn draft(&self) -> String {
        self.editor.html()
    }

    /// Overwrite the engine content without going through `release`
    pub fn set_draft(&mut self, html: &str) -> Result<(), E::Error> {
        let result = self.editor.set_html(html);
        self.pump();
        result
    }

    #[instrument(level = "debug", skip(self))]
    pub fn on_attached(&mut self) {
        info!(id = %self.source_id(), "Element attached");
        self.connected = true;
        self.reflect_state();
        self.pump();
    }

    #[instrument(level = "debug", skip(self))]
    pub fn on_detached(&mut self) {
        info!(id = %self.source_id(), "Element detached");
        self.connected = false;
    }

    /// Attribute mutation callback. Engine errors (loading a `release`
    /// payload, rewriting blocks) are returned unchanged.
    #[instrument(level = "debug", skip(self))]
    pub fn on_attribute_changed(
        &mut self,
        name: &str,
        old_value: Option<&str>,
        new_value: Option<&str>,
    ) -> Result<(), E::Error> {
        let Ok(attr) = name.parse::<ObservedAttribute>() else {
            trace!("Ignoring unobserved attribute");
            return Ok(());
        };
        debug!(id = %self.source_id(), attribute = %attr, "Attribute changed");
        self.attributes.set(attr, new_value);

        let result = match attr {
            ObservedAttribute::State => {
                self.reflect_state();
                Ok(())
            }
            ObservedAttribute::Release => match new_value {
                Some(release) if !release.is_empty() => self.apply_release(release),
                _ => Ok(()),
            },
            ObservedAttribute::Format => match new_value {
                Some(command) if !command.is_empty() => self.dispatch_command(command),
                _ => Ok(()),
            },
            ObservedAttribute::Caret | ObservedAttribute::Id => Ok(()),
        };

        self.pump();
        result
    }

    /// Set or remove an attribute the way the host runtime would,
    /// supplying the previous value
    pub fn set_attribute(&mut self, name: &str, value: Option<&str>) -> Result<(), E::Error> {
        let old_value = self.attribute(name).map(str::to_string);
        self.on_attribute_changed(name, old_value.as_deref(), value)
    }

    /// Deliver an engine notification received as a callback
    pub fn on_notification(&mut self, kind: NotificationKind) {
        self.pump();
        self.emit(kind);
    }

    /// Turn queued engine notifications into outward events
    pub fn pump(&mut self) {
        for kind in self.editor.take_notifications() {
            self.emit(kind);
        }
    }

    fn emit(&mut self, kind: NotificationKind) {
        let event = match kind {
            NotificationKind::PathChange => {
                OutwardEvent::caret(self.editor.active_formats(), self.source_id())
            }
            NotificationKind::Input => OutwardEvent::draft(self.editor.html(), self.source_id()),
        };
        trace!(event = event.name(), %kind, "Dispatching outward event");
        self.host.dispatch_event(&event);
    }

    fn reflect_state(&mut self) {
        let mode = self.mode();
        let current = Attachment::of(&self.host);
        let plan = plan_transition(mode, current, self.attributes.get(ObservedAttribute::Release));
        debug!(?mode, ?current, ops = plan.len(), "Reflecting state");
        apply_plan(&mut self.host, plan);
    }

    fn apply_release(&mut self, release: &str) -> Result<(), E::Error> {
        match self.mode() {
            Mode::Display => {
                self.host.set_display_html(release);
                Ok(())
            }
            Mode::Editing => self.editor.set_html(release),
        }
    }

    fn dispatch_command(&mut self, name: &str) -> Result<(), E::Error> {
        match Command::parse(name) {
            Some(command) => self.editor.run(command),
            None => {
                debug!(command = name, "Ignoring unknown command");
                Ok(())
            }
        }
    }
}
