//! The custom element's own DOM node as a [`HostTree`]

use custom_editor::{HostTree, OutwardEvent, Surface};
use tracing::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CustomEvent, CustomEventInit, Document, HtmlElement, Node};

use crate::squire::describe;

pub struct DomHost {
    element: HtmlElement,
    editable: HtmlElement,
    display: HtmlElement,
}

impl DomHost {
    /// Create both surfaces, detached
    pub fn new(element: HtmlElement, document: &Document) -> Result<Self, JsValue> {
        Ok(Self {
            element,
            editable: article(document)?,
            display: article(document)?,
        })
    }

    pub fn element(&self) -> &HtmlElement {
        &self.element
    }

    pub fn surface(&self, surface: Surface) -> &HtmlElement {
        match surface {
            Surface::Editable => &self.editable,
            Surface::Display => &self.display,
        }
    }
}

fn article(document: &Document) -> Result<HtmlElement, JsValue> {
    document
        .create_element("article")?
        .dyn_into::<HtmlElement>()
        .map_err(JsValue::from)
}

impl HostTree for DomHost {
    fn contains(&self, surface: Surface) -> bool {
        let node: &Node = self.surface(surface).as_ref();
        self.element.contains(Some(node))
    }

    fn append_child(&mut self, surface: Surface) {
        if let Err(err) = self.element.append_child(self.surface(surface)) {
            warn!(%surface, error = %describe(&err), "Cannot attach surface");
        }
    }

    fn remove_child(&mut self, surface: Surface) {
        if let Err(err) = self.element.remove_child(self.surface(surface)) {
            warn!(%surface, error = %describe(&err), "Cannot detach surface");
        }
    }

    fn set_display_html(&mut self, html: &str) {
        self.display.set_inner_html(html);
    }

    fn dispatch_event(&mut self, event: &OutwardEvent) {
        if let Err(err) = dispatch(&self.element, event) {
            warn!(event = event.name(), error = %describe(&err), "Cannot dispatch event");
        }
    }
}

fn dispatch(target: &HtmlElement, event: &OutwardEvent) -> Result<(), JsValue> {
    let detail = js_sys::JSON::parse(&event.detail_json())?;
    let init = CustomEventInit::new();
    init.set_detail(&detail);

    let custom = CustomEvent::new_with_event_init_dict(event.name(), &init)?;
    target.dispatch_event(&custom)?;
    Ok(())
}
