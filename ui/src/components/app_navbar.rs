use dioxus::prelude::*;
use once_cell::sync::OnceCell;

use crate::i18n::Language;
use crate::site::{use_site, Page, SiteEvent};

// Navbar stylesheet shipped with the shared crate.
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Platforms may register how to link back to the site root, so `ui` does not
/// need to know each platform's `Route` enum. Without a builder a plain
/// `<a href="/">` is rendered.
///
/// Example (in platform crate):
/// ```ignore
/// use ui::components::app_navbar::{register_nav, NavBuilder};
/// register_nav(NavBuilder {
///     home: |label| rsx!( Link { class: "navbar__link", to: Route::Home {}, "{label}" } ),
/// });
/// ```
pub struct NavBuilder {
    pub home: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

/// Link to the site root carrying `label`.
pub fn home_link(label: &str) -> Element {
    match NAV_BUILDER.get() {
        Some(builder) => (builder.home)(label),
        None => rsx! {
            a { class: "navbar__link", href: "/", "{label}" }
        },
    }
}

/// Navigation element id → section id on the main page.
const SECTION_LINKS: [(&str, &str); 8] = [
    ("nav-home", "hero"),
    ("nav-about", "about"),
    ("nav-vision", "vision"),
    ("nav-timeline", "timeline"),
    ("nav-events", "events"),
    ("nav-updates", "updates"),
    ("nav-gallery", "gallery"),
    ("nav-contact", "contact"),
];

#[component]
pub fn AppNavbar() -> Element {
    let site = use_site();
    let mut menu_open = use_signal(|| false);

    let active_language = site.view.read().language;
    let (logo, sections, resources_label, faq_label) = {
        let doc = site.document.read();
        let sections: Vec<(&'static str, &'static str, String)> = SECTION_LINKS
            .iter()
            .map(|(element, section)| (*element, *section, doc.text(element).to_string()))
            .collect();
        (
            doc.text("logo-text").to_string(),
            sections,
            doc.text("nav-resources").to_string(),
            doc.text("nav-faq").to_string(),
        )
    };

    let links_class = if menu_open() {
        "navbar__links navbar__links--open"
    } else {
        "navbar__links"
    };

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        header { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-spark", aria_hidden: "true" }
                    span { id: "logo-text", class: "navbar__brand-mark", "{logo}" }
                }

                button {
                    r#type: "button",
                    class: "navbar__toggle",
                    aria_label: "Toggle navigation",
                    onclick: move |_| menu_open.set(!menu_open()),
                    "☰"
                }

                nav { class: "{links_class}",
                    for (element, section, label) in sections {
                        a {
                            key: "{element}",
                            id: "{element}",
                            class: "navbar__link",
                            href: "#{section}",
                            onclick: move |evt: MouseEvent| {
                                evt.prevent_default();
                                menu_open.set(false);
                                site.send(SiteEvent::ScrollTo(section.to_string()));
                            },
                            "{label}"
                        }
                    }
                    a {
                        id: "nav-resources",
                        class: "navbar__link",
                        href: "#resources",
                        onclick: move |evt: MouseEvent| {
                            evt.prevent_default();
                            menu_open.set(false);
                            site.send(SiteEvent::Navigate(Page::Resources));
                        },
                        "{resources_label}"
                    }
                    a {
                        id: "nav-faq",
                        class: "navbar__link",
                        href: "#faq",
                        onclick: move |evt: MouseEvent| {
                            evt.prevent_default();
                            menu_open.set(false);
                            site.send(SiteEvent::Navigate(Page::Faq));
                        },
                        "{faq_label}"
                    }
                }

                div { class: "navbar__locale", role: "group", aria_label: "Language",
                    for language in Language::ALL {
                        button {
                            key: "{language.id()}",
                            r#type: "button",
                            class: if language == active_language { "lang-btn lang-btn--active" } else { "lang-btn" },
                            "data-lang": language.id(),
                            lang: language.tag(),
                            onclick: move |_| site.send(SiteEvent::ChooseLanguage(language)),
                            "{language.native_label()}"
                        }
                    }
                }
            }
        }
    }
}
