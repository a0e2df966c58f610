use std::any::Any;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use vlab::vlab_content::{Resolved, NAVBAR};
use vlab::{LabConfig, Route, Session};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::api::ApiClient;
use crate::dom;
use crate::pages;
use crate::storage::LocalStorage;

const CONFIG_ELEMENT: &str = "lab-config";

/// The mounted page: its generation and the state it owns.
///
/// Work started by an older page compares generations and stops; held
/// state (listeners, editors) is dropped when the next page begins.
#[derive(Default)]
pub struct PageSlot {
    generation: Cell<u64>,
    held: RefCell<Option<Rc<dyn Any>>>,
}

impl PageSlot {
    /// Release the current page and start the next one.
    pub fn begin(&self) -> u64 {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        drop(self.held.take());
        generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation.get() == generation
    }

    pub fn hold(&self, state: Rc<dyn Any>) {
        *self.held.borrow_mut() = Some(state);
    }
}

/// State shared by every page.
pub struct App {
    pub config: LabConfig,
    pub api: ApiClient,
    pub session: RefCell<Session<LocalStorage>>,
    page: PageSlot,
}

/// How a navigation touches the history stack.
#[derive(Clone, Copy, PartialEq, Eq)]
enum HistoryMode {
    Push,
    Replace,
    /// Browser already moved (back/forward).
    Keep,
}

impl App {
    fn new(config: LabConfig) -> Self {
        Self {
            api: ApiClient::new(&config.api.base_url),
            config,
            session: RefCell::new(Session::new(LocalStorage)),
            page: PageSlot::default(),
        }
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.page.is_current(generation)
    }

    /// Keep `state` alive until another page is mounted.
    pub fn hold(&self, state: Rc<dyn Any>) {
        self.page.hold(state);
    }

    /// Go to `path` as if a link was followed.
    pub fn navigate(self: &Rc<Self>, path: &str) {
        self.show(path, HistoryMode::Push);
    }

    fn show(self: &Rc<Self>, path: &str, mode: HistoryMode) {
        let (route, mode) = match Route::resolve(path) {
            Resolved::Page(route) => (route, mode),
            Resolved::Redirect(route) => {
                web_sys::console::log_1(
                    &format!("router: {path} -> {}", route.path()).into(),
                );
                (route, HistoryMode::Replace)
            }
        };
        if let Ok(history) = dom::window().history() {
            let url = Some(route.path());
            match mode {
                HistoryMode::Push if current_path() != route.path() => {
                    history.push_state_with_url(&JsValue::NULL, "", url).ok();
                }
                HistoryMode::Replace => {
                    history.replace_state_with_url(&JsValue::NULL, "", url).ok();
                }
                _ => {}
            }
        }
        self.mount(route);
    }

    fn mount(self: &Rc<Self>, route: Route) {
        let generation = self.page.begin();

        dom::document().set_title(&format!("{} | Virtual Lab", route.title()));
        highlight_nav(route);
        dom::set_inner_html("app", "");
        pages::mount(self, route, generation);
    }
}

fn current_path() -> String {
    dom::window().location().pathname().unwrap_or_default()
}

fn load_config() -> LabConfig {
    let Some(text) = dom::document()
        .get_element_by_id(CONFIG_ELEMENT)
        .and_then(|el| el.text_content())
    else {
        return LabConfig::default();
    };
    match LabConfig::from_json_str(&text) {
        Ok(config) => config,
        Err(e) => {
            web_sys::console::warn_1(&format!("config: {e}, using defaults").into());
            LabConfig::default()
        }
    }
}

fn render_navbar() {
    let links: String = NAVBAR
        .iter()
        .map(|(label, route)| {
            format!(
                r#"<a href="{path}" class="nav-link" data-route id="nav-{slug}">{label}</a>"#,
                path = route.path(),
                slug = route.path().trim_start_matches('/'),
                label = dom::escape(label),
            )
        })
        .collect();
    dom::set_inner_html(
        "navbar",
        &format!(
            r#"<div class="nav-left"><span class="logo">⚡ Virtual Lab</span></div>
<div class="nav-right">{links}</div>"#
        ),
    );
}

fn highlight_nav(route: Route) {
    for (_, r) in NAVBAR {
        let id = format!("nav-{}", r.path().trim_start_matches('/'));
        dom::set_class(&id, if r == route { "nav-link active" } else { "nav-link" });
    }
}

pub async fn run() {
    let config = load_config();
    web_sys::console::log_1(&format!("app: backend {}", config.api.base_url).into());
    let app = Rc::new(App::new(config));

    render_navbar();

    // Internal links carry `data-route`; everything else navigates normally.
    let a = app.clone();
    dom::listen(&dom::document(), "click", move |e: web_sys::Event| {
        let Some(target) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        let Ok(Some(link)) = target.closest("a[data-route]") else {
            return;
        };
        let Some(href) = link.get_attribute("href") else {
            return;
        };
        e.prevent_default();
        a.navigate(&href);
    });

    let a = app.clone();
    dom::listen(&dom::window(), "popstate", move |_| {
        a.show(&current_path(), HistoryMode::Keep);
    });

    app.show(&current_path(), HistoryMode::Replace);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_releases_held_state() {
        let slot = PageSlot::default();
        let first = slot.begin();
        let state = Rc::new(RefCell::new(vec![1, 2, 3]));
        let weak = Rc::downgrade(&state);
        slot.hold(state);
        assert!(weak.upgrade().is_some());
        assert!(slot.is_current(first));

        let second = slot.begin();
        assert!(weak.upgrade().is_none());
        assert!(!slot.is_current(first));
        assert!(slot.is_current(second));
    }

    #[test]
    fn test_hold_replaces_previous_state() {
        let slot = PageSlot::default();
        slot.begin();
        let a = Rc::new(1u8);
        let weak_a = Rc::downgrade(&a);
        slot.hold(a);
        // Redraw within the same page swaps state without a new generation.
        let b = Rc::new(2u8);
        let weak_b = Rc::downgrade(&b);
        slot.hold(b);
        assert!(weak_a.upgrade().is_none());
        assert!(weak_b.upgrade().is_some());
        assert!(slot.is_current(1));
    }
}
