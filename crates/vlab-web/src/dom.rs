use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, EventTarget, HtmlElement, HtmlInputElement, Window};

pub fn window() -> Window {
    web_sys::window().expect("no global window")
}

pub fn document() -> Document {
    window().document().expect("no document")
}

/// Element by id, cast to `T`. `None` when missing or of another type.
pub fn by_id<T: JsCast>(id: &str) -> Option<T> {
    document().get_element_by_id(id)?.dyn_into().ok()
}

pub fn set_text(id: &str, text: &str) {
    if let Some(el) = document().get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

pub fn set_inner_html(id: &str, html: &str) {
    if let Some(el) = document().get_element_by_id(id) {
        el.set_inner_html(html);
    }
}

pub fn set_class(id: &str, class: &str) {
    if let Some(el) = by_id::<HtmlElement>(id) {
        el.set_class_name(class);
    }
}

pub fn set_hidden(id: &str, hidden: bool) {
    if let Some(el) = by_id::<HtmlElement>(id) {
        el.set_hidden(hidden);
    }
}

pub fn set_disabled(id: &str, disabled: bool) {
    if let Some(el) = document().get_element_by_id(id) {
        if disabled {
            el.set_attribute("disabled", "").ok();
        } else {
            el.remove_attribute("disabled").ok();
        }
    }
}

pub fn input_value(id: &str) -> String {
    by_id::<HtmlInputElement>(id)
        .map(|el| el.value())
        .unwrap_or_default()
}

/// Attach `f` for the lifetime of the page (document and window handlers).
pub fn listen(target: &EventTarget, event: &str, f: impl FnMut(Event) + 'static) {
    let cb = Closure::wrap(Box::new(f) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
        .ok();
    cb.forget();
}

/// Listeners owned by a page view. Dropping the set detaches and frees them.
#[derive(Default)]
pub struct Listeners {
    attached: Vec<(EventTarget, &'static str, Closure<dyn FnMut(Event)>)>,
}

impl Listeners {
    /// Attach `f` to `event` on the element with `id`.
    pub fn on(&mut self, id: &str, event: &'static str, f: impl FnMut(Event) + 'static) {
        let Some(el) = document().get_element_by_id(id) else {
            web_sys::console::warn_1(&format!("dom: no #{id} for {event}").into());
            return;
        };
        let cb = Closure::wrap(Box::new(f) as Box<dyn FnMut(Event)>);
        el.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
            .ok();
        self.attached.push((el.into(), event, cb));
    }
}

impl Drop for Listeners {
    fn drop(&mut self) {
        for (target, event, cb) in &self.attached {
            target
                .remove_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
                .ok();
        }
    }
}

pub fn request_animation_frame(f: &Closure<dyn FnMut()>) {
    window()
        .request_animation_frame(f.as_ref().unchecked_ref())
        .ok();
}

/// Escape text for insertion into HTML.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
