//! Browser bindings.
//!
//! Looks up the page's elements once the document is ready, mounts a
//! [`Page`], and routes `click` events into it. The mounted page lives in a
//! thread-local slot; handlers borrow it only for the duration of one click.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Storage, Window};

use crate::config::{CONFIG_ELEMENT_ID, SiteConfig};
use crate::error::HostError;
use crate::host::{ClassTarget, Clock, ColorSchemeQuery, KeyValueStore, TextTarget};
use crate::page::{Page, PageParts, Trigger, should_defer_mount};

thread_local! {
    static PAGE: RefCell<Option<Page<Element, LocalStorage>>> = const { RefCell::new(None) };
}

fn js_reason(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

// --- Host adapters ---

impl ClassTarget for Element {
    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn set_class(&self, class: &str, on: bool) -> Result<(), HostError> {
        let list = self.class_list();
        let result = if on { list.add_1(class) } else { list.remove_1(class) };
        result.map_err(|err| HostError::ClassList {
            class: class.to_owned(),
            reason: js_reason(&err),
        })
    }
}

impl TextTarget for Element {
    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }
}

/// `window.localStorage`, which may be missing or throw under browser policy.
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    #[must_use]
    pub fn open(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::warn!("localStorage blocked: {}", js_reason(&err));
                None
            }
        };
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage, HostError> {
        self.storage
            .as_ref()
            .ok_or_else(|| HostError::StorageUnavailable("window.localStorage".to_owned()))
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, HostError> {
        self.storage()?.get_item(key).map_err(|err| HostError::StorageRead {
            key: key.to_owned(),
            reason: js_reason(&err),
        })
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), HostError> {
        self.storage()?.set_item(key, value).map_err(|err| HostError::StorageWrite {
            key: key.to_owned(),
            reason: js_reason(&err),
        })
    }
}

/// `window.matchMedia(query).matches`, false when unsupported.
pub struct MediaScheme<'a> {
    window: &'a Window,
    query: &'a str,
}

impl ColorSchemeQuery for MediaScheme<'_> {
    fn prefers_dark(&self) -> bool {
        match self.window.match_media(self.query) {
            Ok(Some(list)) => list.matches(),
            Ok(None) => false,
            Err(err) => {
                log::debug!("matchMedia({}) failed: {}", self.query, js_reason(&err));
                false
            }
        }
    }
}

/// Local calendar year from `Date`.
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn current_year(&self) -> u32 {
        js_sys::Date::new_0().get_full_year()
    }
}

// --- Entry points ---

/// Install logging and mount once the document has been parsed.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("logger already installed");
    }

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if should_defer_mount(&document.ready_state()) {
        let on_ready = Closure::<dyn FnMut()>::new(mount_logged);
        if let Err(err) =
            document.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
        {
            log::error!("failed to wait for DOMContentLoaded: {}", js_reason(&err));
            return;
        }
        on_ready.forget();
    } else {
        mount_logged();
    }
}

/// Toggle the navigation menu, as a click on the hamburger icon does.
#[wasm_bindgen]
pub fn toggle_menu() {
    with_page("toggle_menu", |page| page.toggle_menu().map(|_| ()));
}

/// Toggle the theme, as a click on any theme button does. Returns the new
/// theme, or `undefined` when the theme is not mounted.
#[must_use]
#[wasm_bindgen]
pub fn toggle_theme() -> Option<String> {
    let mut next = None;
    with_page("toggle_theme", |page| {
        next = page.toggle_theme()?.map(|theme| theme.as_str().to_owned());
        Ok(())
    });
    next
}

fn mount_logged() {
    if let Err(err) = mount() {
        log::error!("site-behaviors: {err}");
    }
}

fn mount() -> Result<(), HostError> {
    let window = web_sys::window().ok_or_else(|| HostError::MissingElement("window".to_owned()))?;
    let document = window
        .document()
        .ok_or_else(|| HostError::MissingElement("document".to_owned()))?;
    let body = document
        .body()
        .ok_or_else(|| HostError::MissingElement("body".to_owned()))?;

    let config = read_config(&document);
    let icon = query(&document, &config.icon_selector);
    let buttons = query_all(&document, &config.theme_button_selector);

    let parts = PageParts {
        menu: query(&document, &config.menu_selector),
        icon: icon.clone(),
        year_display: document.get_element_by_id(&config.year_element_id),
        root: Element::from(body),
        store: LocalStorage::open(&window),
        theme_buttons: buttons.len(),
    };
    let scheme = MediaScheme {
        window: &window,
        query: &config.dark_scheme_query,
    };
    let page = Page::mount(parts, &scheme, &BrowserClock, &config);
    PAGE.with(|slot| *slot.borrow_mut() = Some(page));

    if let Some(icon) = icon {
        listen(&icon, Trigger::Menu);
    }
    for (index, button) in buttons.iter().enumerate() {
        listen(button, Trigger::ThemeButton(index));
    }
    log::info!("site-behaviors: mounted with {} theme button(s)", buttons.len());
    Ok(())
}

fn read_config(document: &Document) -> SiteConfig {
    let Some(block) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return SiteConfig::default();
    };
    let raw = block.text_content().unwrap_or_default();
    match SiteConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("{err}, using defaults");
            SiteConfig::default()
        }
    }
}

fn query(document: &Document, selector: &str) -> Option<Element> {
    match document.query_selector(selector) {
        Ok(found) => found,
        Err(err) => {
            log::warn!("bad selector {selector}: {}", js_reason(&err));
            None
        }
    }
}

fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(err) => {
            log::warn!("bad selector {selector}: {}", js_reason(&err));
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

fn listen(target: &Element, trigger: Trigger) {
    let handler = Closure::<dyn FnMut()>::new(move || {
        with_page("click", |page| page.click(trigger));
    });
    match target.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref()) {
        Ok(()) => handler.forget(),
        Err(err) => {
            let err = HostError::Listener {
                event: "click".to_owned(),
                reason: js_reason(&err),
            };
            log::warn!("{trigger:?}: {err}");
        }
    }
}

fn with_page(action: &str, f: impl FnOnce(&mut Page<Element, LocalStorage>) -> Result<(), HostError>) {
    PAGE.with(|slot| {
        let mut slot = slot.borrow_mut();
        let Some(page) = slot.as_mut() else {
            log::debug!("{action}: page not mounted yet");
            return;
        };
        if let Err(err) = f(page) {
            log::warn!("{action}: {err}");
        }
    });
}
