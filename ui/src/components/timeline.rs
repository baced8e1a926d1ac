use dioxus::prelude::*;

use crate::core::{platform, timing};
use crate::site::timeline::{TimelineCarousel, TIMELINE_AUTOPLAY_MS, TIMELINE_YEARS};
use crate::site::{use_site, SiteEvent};

#[component]
pub fn TimelineSection() -> Element {
    let site = use_site();

    // Autoplay; skipped while the tab is hidden.
    use_future(move || async move {
        loop {
            timing::sleep_ms(TIMELINE_AUTOPLAY_MS).await;
            if platform::page_hidden() {
                continue;
            }
            let mut carousel = TimelineCarousel::new(TIMELINE_YEARS.len());
            carousel.show(*site.timeline_index.peek());
            carousel.next();
            site.send(SiteEvent::TimelineShown(carousel.active()));
        }
    });

    let active = (site.timeline_index)();
    let doc = site.document.read();
    let slides = doc.timeline_slides();
    let len = slides.len();

    let step = move |forward: bool| {
        let mut carousel = TimelineCarousel::new(len);
        carousel.show(active);
        if forward {
            carousel.next();
        } else {
            carousel.prev();
        }
        site.send(SiteEvent::TimelineShown(carousel.active()));
    };

    rsx! {
        section { id: "timeline", class: "section timeline",
            h2 { id: "timeline-header", class: "section__title timeline__header",
                {doc.text("timeline-header").to_string()}
            }

            div { class: "timeline__years", role: "tablist",
                for (index, slide) in slides.iter().enumerate() {
                    button {
                        key: "{slide.year}",
                        r#type: "button",
                        role: "tab",
                        class: if index == active { "timeline__year timeline__year--active" } else { "timeline__year" },
                        onclick: move |_| site.send(SiteEvent::TimelineShown(index)),
                        "{slide.year}"
                    }
                }
            }

            if let Some(slide) = slides.get(active) {
                article { class: "timeline__slide", "data-year": "{slide.year}",
                    img { class: "timeline__image", src: "{slide.image}", alt: "{slide.title}" }
                    div { class: "timeline__text",
                        span { class: "timeline__slide-year", "{slide.year}" }
                        h3 { class: "timeline__title", "{slide.title}" }
                        p { class: "timeline__description", "{slide.description}" }
                    }
                }
            }

            div { class: "timeline__controls",
                button { r#type: "button", class: "button button--ghost", aria_label: "Previous", onclick: move |_| step(false), "‹" }
                button { r#type: "button", class: "button button--ghost", aria_label: "Next", onclick: move |_| step(true), "›" }
            }
        }
    }
}
