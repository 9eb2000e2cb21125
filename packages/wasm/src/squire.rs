//! [`EditingEngine`] over the page's global `Squire` editor
//!
//! Squire raises `pathChange` and `input` as DOM-style events, often in
//! the middle of a command the boundary is running. Listeners only queue
//! the notification and poke the [`Waker`]; the boundary drains the queue
//! once it is idle.

use std::cell::RefCell;
use std::rc::Rc;

use custom_editor::{BlockRewrite, EditingEngine, ElementConfig, NotificationKind};
use custom_editor_dom::{parse_fragment, path, to_html, Node};
use serde_json::json;
use thiserror::Error;
use tracing::trace;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, DocumentFragment, HtmlElement, HtmlTemplateElement};

#[wasm_bindgen]
extern "C" {
    #[derive(Debug, Clone)]
    pub type Squire;

    #[wasm_bindgen(constructor, catch)]
    fn new(root: &HtmlElement, config: &JsValue) -> Result<Squire, JsValue>;

    #[wasm_bindgen(method, js_name = getHTML)]
    pub(crate) fn get_html(this: &Squire) -> String;

    #[wasm_bindgen(method, catch, js_name = setHTML)]
    fn set_html(this: &Squire, html: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, js_name = hasFormat)]
    fn has_format(this: &Squire, tag: &str) -> bool;

    #[wasm_bindgen(method)]
    fn bold(this: &Squire);

    #[wasm_bindgen(method, js_name = removeBold)]
    fn remove_bold(this: &Squire);

    #[wasm_bindgen(method)]
    fn italic(this: &Squire);

    #[wasm_bindgen(method, js_name = removeItalic)]
    fn remove_italic(this: &Squire);

    #[wasm_bindgen(method, js_name = removeAllFormatting)]
    fn remove_all_formatting(this: &Squire);

    #[wasm_bindgen(method, js_name = makeUnorderedList)]
    fn make_unordered_list(this: &Squire);

    #[wasm_bindgen(method, js_name = makeOrderedList)]
    fn make_ordered_list(this: &Squire);

    #[wasm_bindgen(method, js_name = removeList)]
    fn remove_list(this: &Squire);

    #[wasm_bindgen(method, js_name = increaseListLevel)]
    fn increase_list_level(this: &Squire);

    #[wasm_bindgen(method, js_name = decreaseListLevel)]
    fn decrease_list_level(this: &Squire);

    #[wasm_bindgen(method, js_name = increaseQuoteLevel)]
    fn increase_quote_level(this: &Squire);

    #[wasm_bindgen(method, js_name = decreaseQuoteLevel)]
    fn decrease_quote_level(this: &Squire);

    #[wasm_bindgen(method)]
    fn undo(this: &Squire);

    #[wasm_bindgen(method)]
    fn redo(this: &Squire);

    #[wasm_bindgen(method)]
    fn focus(this: &Squire);

    #[wasm_bindgen(method, js_name = addEventListener)]
    fn add_event_listener(this: &Squire, kind: &str, handler: &js_sys::Function);

    #[wasm_bindgen(method, catch, js_name = modifyBlocks)]
    fn modify_blocks(this: &Squire, rewrite: &js_sys::Function) -> Result<JsValue, JsValue>;
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Squire error: {0}")]
pub struct SquireError(pub String);

impl From<JsValue> for SquireError {
    fn from(value: JsValue) -> Self {
        Self(describe(&value))
    }
}

/// Best-effort message for a thrown JS value
pub(crate) fn describe(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Callback run after a notification is queued
#[derive(Clone, Default)]
pub struct Waker(Rc<RefCell<Option<Box<dyn Fn()>>>>);

impl Waker {
    pub fn set(&self, wake: impl Fn() + 'static) {
        *self.0.borrow_mut() = Some(Box::new(wake));
    }

    fn wake(&self) {
        if let Some(wake) = self.0.borrow().as_ref() {
            wake();
        }
    }
}

/// Squire constructor options
pub fn squire_config(config: &ElementConfig) -> serde_json::Value {
    // Squire treats a negative limit as unlimited
    let undo_limit = match config.undo_levels {
        0 => -1,
        levels => i64::try_from(levels).unwrap_or(i64::MAX),
    };
    json!({
        "blockTag": config.block_tag,
        "undo": { "undoLimit": undo_limit },
    })
}

pub struct SquireEngine {
    squire: Squire,
    document: Document,
    queue: Rc<RefCell<Vec<NotificationKind>>>,
    waker: Waker,
    listeners: Vec<Closure<dyn FnMut(JsValue)>>,
}

impl SquireEngine {
    pub fn new(root: &HtmlElement, document: Document, config: &ElementConfig, waker: Waker) -> Result<Self, JsValue> {
        let options = js_sys::JSON::parse(&squire_config(config).to_string())?;
        let squire = Squire::new(root, &options)?;

        Ok(Self {
            squire,
            document,
            queue: Rc::new(RefCell::new(Vec::new())),
            waker,
            listeners: Vec::new(),
        })
    }

    /// The wrapped editor, for reads that must not wait on the element
    pub fn squire(&self) -> &Squire {
        &self.squire
    }
}

impl EditingEngine for SquireEngine {
    type Error = SquireError;

    fn html(&self) -> String {
        self.squire.get_html()
    }

    fn set_html(&mut self, html: &str) -> Result<(), Self::Error> {
        self.squire.set_html(html)?;
        Ok(())
    }

    fn has_format(&self, tag: &str) -> bool {
        self.squire.has_format(tag)
    }

    fn bold(&mut self) {
        self.squire.bold();
    }

    fn remove_bold(&mut self) {
        self.squire.remove_bold();
    }

    fn italic(&mut self) {
        self.squire.italic();
    }

    fn remove_italic(&mut self) {
        self.squire.remove_italic();
    }

    fn remove_all_formatting(&mut self) {
        self.squire.remove_all_formatting();
    }

    fn make_unordered_list(&mut self) {
        self.squire.make_unordered_list();
    }

    fn make_ordered_list(&mut self) {
        self.squire.make_ordered_list();
    }

    fn remove_list(&mut self) {
        self.squire.remove_list();
    }

    fn increase_list_level(&mut self) {
        self.squire.increase_list_level();
    }

    fn decrease_list_level(&mut self) {
        self.squire.decrease_list_level();
    }

    fn increase_quote_level(&mut self) {
        self.squire.increase_quote_level();
    }

    fn decrease_quote_level(&mut self) {
        self.squire.decrease_quote_level();
    }

    fn undo(&mut self) {
        self.squire.undo();
    }

    fn redo(&mut self) {
        self.squire.redo();
    }

    fn focus(&mut self) {
        self.squire.focus();
    }

    fn modify_blocks(&mut self, mut rewrite: BlockRewrite) -> Result<(), Self::Error> {
        let document = self.document.clone();
        let failure = Rc::new(RefCell::new(None));
        let record = Rc::clone(&failure);

        // A fragment that cannot be read goes back untouched, so Squire
        // reinserts the extracted content
        let callback = Closure::<dyn FnMut(DocumentFragment) -> Result<DocumentFragment, JsValue>>::new(
            move |fragment: DocumentFragment| {
                let holder = template(&document)?;
                holder.content().append_child(&fragment)?;
                match read_blocks(&holder) {
                    Ok(blocks) => write_fragment(&document, &rewrite(blocks)),
                    Err(err) => {
                        *record.borrow_mut() = Some(err);
                        Ok(holder.content())
                    }
                }
            },
        );

        // Squire calls back synchronously, the closure can go afterwards
        self.squire.modify_blocks(callback.as_ref().unchecked_ref())?;
        let failed = failure.borrow_mut().take();
        match failed {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn subscribe(&mut self, kind: NotificationKind) {
        let queue = Rc::clone(&self.queue);
        let waker = self.waker.clone();
        let listener = Closure::<dyn FnMut(JsValue)>::new(move |_event: JsValue| {
            trace!(%kind, "Squire notification");
            queue.borrow_mut().push(kind);
            waker.wake();
        });

        self.squire
            .add_event_listener(kind.event_name(), listener.as_ref().unchecked_ref());
        self.listeners.push(listener);
    }

    fn take_notifications(&mut self) -> Vec<NotificationKind> {
        std::mem::take(&mut *self.queue.borrow_mut())
    }
}

fn template(document: &Document) -> Result<HtmlTemplateElement, JsValue> {
    document
        .create_element("template")?
        .dyn_into::<HtmlTemplateElement>()
        .map_err(JsValue::from)
}

/// Leaf blocks of the fragment held by `holder`, in document order
fn read_blocks(holder: &HtmlTemplateElement) -> Result<Vec<Node>, SquireError> {
    let roots = parse_fragment(&holder.inner_html()).map_err(|err| SquireError(err.to_string()))?;
    Ok(path::leaf_blocks(&roots)
        .iter()
        .filter_map(|leaf| path::node_at(&roots, leaf).cloned())
        .collect())
}

fn write_fragment(document: &Document, nodes: &[Node]) -> Result<DocumentFragment, JsValue> {
    let holder = template(document)?;
    holder.set_inner_html(&to_html(nodes));
    Ok(holder.content())
}
