//! Browser bindings used by the site runtime.
//!
//! Every function has a native counterpart that does nothing (or reports
//! nothing) so the runtime compiles and tests off the browser.

use std::future::Future;

/// Spawn a detached task on the current executor.
#[cfg(target_arch = "wasm32")]
pub fn spawn_future<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(future);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_future<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    dioxus::prelude::spawn(future);
}

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions, VisibilityState};

    fn window() -> Option<web_sys::Window> {
        web_sys::window()
    }

    pub fn scroll_y() -> u32 {
        window()
            .and_then(|w| w.scroll_y().ok())
            .map(|y| y.max(0.0).round() as u32)
            .unwrap_or(0)
    }

    pub fn scroll_to(top: u32, smooth: bool) {
        let Some(window) = window() else { return };
        let options = ScrollToOptions::new();
        options.set_top(top as f64);
        options.set_behavior(if smooth {
            ScrollBehavior::Smooth
        } else {
            ScrollBehavior::Instant
        });
        window.scroll_to_with_scroll_to_options(&options);
    }

    pub fn section_offset(id: &str) -> Option<u32> {
        let element = window()?.document()?.get_element_by_id(id)?;
        let element: HtmlElement = element.dyn_into().ok()?;
        Some(element.offset_top().max(0) as u32)
    }

    pub fn fragment() -> Option<String> {
        let hash = window()?.location().hash().ok()?;
        let trimmed = hash.trim_start_matches('#');
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }

    /// Push (or, with `replace`, overwrite) a history entry carrying `state_json`.
    pub fn write_history(state_json: &str, fragment: Option<&str>, replace: bool) {
        let Some(window) = window() else { return };
        let Ok(history) = window.history() else { return };
        let url = match fragment {
            Some(fragment) => format!("#{fragment}"),
            None => window.location().pathname().unwrap_or_else(|_| "/".into()),
        };
        let state = JsValue::from_str(state_json);
        let result = if replace {
            history.replace_state_with_url(&state, "", Some(&url))
        } else {
            history.push_state_with_url(&state, "", Some(&url))
        };
        if let Err(err) = result {
            tracing::warn!(?err, replace, "history update rejected");
        }
    }

    pub fn set_fragment(fragment: &str) {
        let Some(window) = window() else { return };
        let Ok(history) = window.history() else { return };
        let state = history.state().unwrap_or(JsValue::NULL);
        let _ = history.replace_state_with_url(&state, "", Some(&format!("#{fragment}")));
    }

    pub fn on_popstate(mut handler: impl FnMut(Option<String>) + 'static) {
        let Some(window) = window() else { return };
        let closure = Closure::<dyn FnMut(web_sys::PopStateEvent)>::new(
            move |event: web_sys::PopStateEvent| handler(event.state().as_string()),
        );
        if window
            .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())
            .is_ok()
        {
            closure.forget();
        }
    }

    pub fn page_hidden() -> bool {
        window()
            .and_then(|w| w.document())
            .map(|d| d.visibility_state() == VisibilityState::Hidden)
            .unwrap_or(false)
    }

    pub fn current_url() -> Option<String> {
        window()?.location().href().ok()
    }

    pub fn origin() -> Option<String> {
        window()?.location().origin().ok()
    }

    pub async fn copy_text(text: &str) -> Result<(), String> {
        let window = window().ok_or("no window")?;
        let promise = window.navigator().clipboard().write_text(text);
        wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|err| format!("{err:?}"))
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod web {
    pub fn scroll_y() -> u32 {
        0
    }

    pub fn scroll_to(_top: u32, _smooth: bool) {}

    pub fn section_offset(_id: &str) -> Option<u32> {
        None
    }

    pub fn fragment() -> Option<String> {
        None
    }

    pub fn write_history(_state_json: &str, _fragment: Option<&str>, _replace: bool) {}

    pub fn set_fragment(_fragment: &str) {}

    pub fn on_popstate(_handler: impl FnMut(Option<String>) + 'static) {}

    pub fn page_hidden() -> bool {
        false
    }

    pub fn current_url() -> Option<String> {
        None
    }

    pub fn origin() -> Option<String> {
        None
    }

    pub async fn copy_text(_text: &str) -> Result<(), String> {
        Err("clipboard unavailable".into())
    }
}

pub use web::*;
