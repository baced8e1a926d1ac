use dioxus::prelude::*;

use crate::site::use_site;

/// Full-page overlay shown while a visitor-requested language loads.
#[component]
pub fn LoadingOverlay() -> Element {
    let site = use_site();
    if !(site.loading)() {
        return rsx! {};
    }
    let text = site.document.read().text("loading-text").to_string();

    rsx! {
        div { class: "loading-overlay", role: "status", aria_live: "polite",
            div { class: "loading-overlay__spinner" }
            p { id: "loading-text", class: "loading-overlay__text", "{text}" }
        }
    }
}
