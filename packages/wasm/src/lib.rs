//! Browser binding for the custom editor element.
//!
//! The JS custom element class only forwards its lifecycle callbacks:
//!
//! ```js
//! import init, { CustomEditor } from "./custom_editor_wasm.js";
//!
//! await init();
//! customElements.define("custom-editor", class extends HTMLElement {
//!   constructor() {
//!     super();
//!     this.editor = new CustomEditor(this);
//!   }
//!   static get observedAttributes() { return CustomEditor.observedAttributes(); }
//!   connectedCallback() { this.editor.connected(); }
//!   disconnectedCallback() { this.editor.disconnected(); }
//!   attributeChangedCallback(name, oldValue, newValue) {
//!     this.editor.attributeChanged(name, oldValue, newValue);
//!   }
//!   get draft() { return this.editor.draft; }
//!   set draft(html) { this.editor.draft = html; }
//! });
//! ```
//!
//! Host callbacks can arrive while the element is still handling an
//! earlier one (an event listener setting an attribute, a Squire
//! notification fired mid-command). Every callback is queued and the
//! queue is drained by whichever call finds the element idle. Reading
//! `draft` goes straight to Squire and works at any time, including from
//! a listener of the element's own events.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use custom_editor::{BoundaryElement, ElementConfig, Surface, OBSERVED_ATTRIBUTES};
use tracing::{trace, warn};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

mod host;
mod squire;

pub use host::DomHost;
pub use squire::{squire_config, Squire, SquireEngine, SquireError, Waker};

type Element = BoundaryElement<SquireEngine, DomHost>;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

enum Deferred {
    Attribute {
        name: String,
        old_value: Option<String>,
        new_value: Option<String>,
    },
    Attached,
    Detached,
    SetDraft(String),
}

impl Deferred {
    fn apply(self, element: &mut Element) -> Result<(), SquireError> {
        match self {
            Deferred::Attribute {
                name,
                old_value,
                new_value,
            } => element.on_attribute_changed(&name, old_value.as_deref(), new_value.as_deref()),
            Deferred::Attached => {
                element.on_attached();
                Ok(())
            }
            Deferred::Detached => {
                element.on_detached();
                Ok(())
            }
            Deferred::SetDraft(html) => element.set_draft(&html),
        }
    }
}

struct Driver {
    element: RefCell<Element>,
    squire: Squire,
    deferred: RefCell<VecDeque<Deferred>>,
}

impl Driver {
    fn submit(&self, op: Deferred) -> Result<(), JsValue> {
        self.deferred.borrow_mut().push_back(op);
        self.drain()
    }

    /// Run queued callbacks and engine notifications until both are empty.
    /// Reports the first engine error.
    fn drain(&self) -> Result<(), JsValue> {
        let Ok(mut element) = self.element.try_borrow_mut() else {
            trace!("Element busy, deferring");
            return Ok(());
        };

        let mut first_error = None;
        loop {
            loop {
                let next = self.deferred.borrow_mut().pop_front();
                let Some(op) = next else {
                    break;
                };
                if let Err(err) = op.apply(&mut element) {
                    warn!(error = %err, "Host callback failed");
                    first_error.get_or_insert(err);
                }
            }
            element.pump();
            if self.deferred.borrow().is_empty() {
                break;
            }
        }

        match first_error {
            Some(err) => Err(JsValue::from_str(&err.to_string())),
            None => Ok(()),
        }
    }
}

#[wasm_bindgen]
pub struct CustomEditor {
    driver: Rc<Driver>,
}

#[wasm_bindgen]
impl CustomEditor {
    /// Bind a new editor to `host`, the custom element itself. `config` is
    /// an optional JSON `ElementConfig`.
    #[wasm_bindgen(constructor)]
    pub fn new(host: HtmlElement, config: Option<String>) -> Result<CustomEditor, JsValue> {
        let config = match config {
            Some(json) => ElementConfig::from_json(&json)
                .map_err(|e| JsValue::from_str(&format!("Config error: {}", e)))?,
            None => ElementConfig::default(),
        };
        let document = host
            .owner_document()
            .ok_or_else(|| JsValue::from_str("Host element has no owner document"))?;

        let dom = DomHost::new(host, &document)?;
        let waker = Waker::default();
        let engine = SquireEngine::new(dom.surface(Surface::Editable), document, &config, waker.clone())?;

        let squire = engine.squire().clone();
        let driver = Rc::new(Driver {
            element: RefCell::new(BoundaryElement::with_config(engine, dom, config)),
            squire,
            deferred: RefCell::new(VecDeque::new()),
        });

        let weak = Rc::downgrade(&driver);
        waker.set(move || {
            if let Some(driver) = weak.upgrade() {
                if let Err(err) = driver.drain() {
                    warn!(error = ?err, "Draining after notification failed");
                }
            }
        });

        Ok(Self { driver })
    }

    #[wasm_bindgen(js_name = observedAttributes)]
    pub fn observed_attributes() -> js_sys::Array {
        OBSERVED_ATTRIBUTES.iter().map(|name| JsValue::from_str(name)).collect()
    }

    #[wasm_bindgen(js_name = attributeChanged)]
    pub fn attribute_changed(
        &self,
        name: String,
        old_value: Option<String>,
        new_value: Option<String>,
    ) -> Result<(), JsValue> {
        self.driver.submit(Deferred::Attribute {
            name,
            old_value,
            new_value,
        })
    }

    pub fn connected(&self) -> Result<(), JsValue> {
        self.driver.submit(Deferred::Attached)
    }

    pub fn disconnected(&self) -> Result<(), JsValue> {
        self.driver.submit(Deferred::Detached)
    }

    #[wasm_bindgen(getter)]
    pub fn draft(&self) -> String {
        self.driver.squire.get_html()
    }

    #[wasm_bindgen(setter)]
    pub fn set_draft(&self, html: String) -> Result<(), JsValue> {
        self.driver.submit(Deferred::SetDraft(html))
    }
}
