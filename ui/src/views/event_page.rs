use dioxus::prelude::*;

use crate::components::{EventDetailPage, LoadingOverlay};
use crate::i18n::Language;
use crate::site::{use_site_runtime, SiteEvent, SiteMode};

/// Standalone page for one event, reachable by direct link.
#[component]
pub fn EventPage(id: String) -> Element {
    let site = use_site_runtime(SiteMode::EventPage(id));
    let active = site.view.read().language;
    let logo = site.document.read().text("logo-text").to_string();

    rsx! {
        header { class: "navbar navbar--compact",
            div { class: "navbar__inner",
                span { id: "logo-text", class: "navbar__brand-mark", "{logo}" }
                div { class: "navbar__locale", role: "group", aria_label: "Language",
                    for language in Language::ALL {
                        button {
                            key: "{language.id()}",
                            r#type: "button",
                            class: if language == active { "lang-btn lang-btn--active" } else { "lang-btn" },
                            lang: language.tag(),
                            onclick: move |_| site.send(SiteEvent::ChooseLanguage(language)),
                            "{language.native_label()}"
                        }
                    }
                }
            }
        }
        LoadingOverlay {}
        main { class: "site site--event",
            EventDetailPage { standalone: true }
        }
    }
}
