use dioxus::prelude::*;

use crate::site::{use_site, Page, SiteEvent};

#[component]
pub fn ResourcesPage() -> Element {
    let site = use_site();
    let doc = site.document.read();

    rsx! {
        section { id: "resources", class: "page page-resources",
            button {
                r#type: "button",
                class: "button button--ghost page__back",
                onclick: move |_| site.send(SiteEvent::Navigate(Page::Main)),
                {doc.text("btn-back-main").to_string()}
            }
            h1 { id: "resources-title", class: "page__title", {doc.text("resources-title").to_string()} }
            p { id: "resources-description", class: "page__lead", {doc.text("resources-description").to_string()} }

            ul { class: "resources__list",
                for (index, item) in doc.resources().iter().enumerate() {
                    li { key: "{index}", class: "resource-card",
                        h3 { class: "resource-card__title", "{item.title}" }
                        p { class: "resource-card__description", "{item.description}" }
                        if let Some(link) = &item.link {
                            a { class: "button button--primary", href: "{link}", target: "_blank", rel: "noopener", "{item.title}" }
                        }
                    }
                }
            }
        }
    }
}
