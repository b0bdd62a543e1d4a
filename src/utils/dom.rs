//! DOM and Web API utility functions.
//!
//! Thin wrappers that return `Option`/`bool` instead of `JsValue` errors.

use wasm_bindgen::JsCast;
use web_sys::{Storage, Window};

use crate::config::INPUT_SELECTOR;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Focus an element by CSS selector.
///
/// Returns `true` if the element was found and focused successfully.
pub fn focus_element(selector: &str) -> bool {
    if let Some(window) = window()
        && let Some(document) = window.document()
        && let Some(element) = document.query_selector(selector).ok().flatten()
        && let Ok(html_element) = element.dyn_into::<web_sys::HtmlElement>()
    {
        html_element.focus().is_ok()
    } else {
        false
    }
}

/// Focus the terminal input element.
#[inline]
pub fn focus_terminal_input() {
    focus_element(INPUT_SELECTOR);
}

/// Opens `url` in a new tab without giving it a handle on this window.
pub fn open_in_new_tab(url: &str) -> bool {
    let Some(window) = window() else {
        return false;
    };
    match window.open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer") {
        Ok(_) => true,
        Err(e) => {
            log::warn!("failed to open {url}: {e:?}");
            false
        }
    }
}
