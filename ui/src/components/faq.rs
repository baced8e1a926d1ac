use dioxus::prelude::*;

use crate::site::{use_site, Page, SiteEvent};

/// Accordion toggle: opening an item closes the one before it.
pub fn toggle(open: Option<usize>, index: usize) -> Option<usize> {
    if open == Some(index) {
        None
    } else {
        Some(index)
    }
}

#[component]
pub fn FaqPage() -> Element {
    let site = use_site();
    let mut open = use_signal(|| Option::<usize>::None);
    let doc = site.document.read();

    rsx! {
        section { id: "faq", class: "page page-faq",
            button {
                r#type: "button",
                class: "button button--ghost page__back",
                onclick: move |_| site.send(SiteEvent::Navigate(Page::Main)),
                {doc.text("btn-back-main").to_string()}
            }
            h1 { id: "faq-title", class: "page__title", {doc.text("faq-title").to_string()} }
            p { id: "faq-subtitle", class: "page__lead", {doc.text("faq-subtitle").to_string()} }

            div { class: "faq__list",
                for (index, item) in doc.faq_items().iter().enumerate() {
                    div {
                        key: "{index}",
                        class: if open() == Some(index) { "faq__item faq__item--open" } else { "faq__item" },
                        button {
                            r#type: "button",
                            class: "faq__question",
                            aria_expanded: if open() == Some(index) { "true" } else { "false" },
                            onclick: move |_| open.set(toggle(open(), index)),
                            "{item.question}"
                        }
                        if open() == Some(index) {
                            p { class: "faq__answer", "{item.answer}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::toggle;

    #[test]
    fn opening_another_item_closes_the_first() {
        let open = toggle(None, 2);
        assert_eq!(open, Some(2));
        assert_eq!(toggle(open, 4), Some(4));
    }

    #[test]
    fn clicking_the_open_item_closes_it() {
        assert_eq!(toggle(Some(1), 1), None);
    }
}
