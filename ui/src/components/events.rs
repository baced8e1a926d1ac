use dioxus::prelude::*;

use crate::core::platform;
use crate::site::{use_site, Page, SiteEvent};

use super::app_navbar::home_link;

#[component]
pub fn EventsSection() -> Element {
    let site = use_site();
    let doc = site.document.read();
    let read_more = doc.text("btn-read-more").to_string();

    rsx! {
        section { id: "events", class: "section events",
            h2 { id: "events-title", class: "section__title", {doc.text("events-title").to_string()} }
            p { id: "events-description", class: "section__lead", {doc.text("events-description").to_string()} }

            div { class: "events__grid",
                for card in doc.event_cards().iter().cloned() {
                    EventCard { key: "{card.id}", card, read_more: read_more.clone() }
                }
            }
        }
    }
}

#[component]
fn EventCard(card: crate::content::EventRecord, read_more: String) -> Element {
    let site = use_site();
    let open = {
        let id = card.id.clone();
        move |_| site.send(SiteEvent::Navigate(Page::EventDetail(id.clone())))
    };

    rsx! {
        article { class: "event-card", "data-event": "{card.id}",
            img { class: "event-card__image", src: "{card.image_or_default()}", alt: "{card.title}", loading: "lazy" }
            div { class: "event-card__body",
                div { class: "event-card__meta",
                    span { class: "event-card__date", "{card.date}" }
                    if let Some(category) = &card.category {
                        span { class: "event-card__category", "{category}" }
                    }
                }
                h3 { class: "event-card__title", "{card.title}" }
                p { class: "event-card__description", "{card.description}" }
                button { r#type: "button", class: "button button--ghost event-card__more", onclick: open, "{read_more}" }
            }
        }
    }
}

/// Full view of one event. `standalone` is the `/event/:id` route, which has
/// no main page to return to.
#[component]
pub fn EventDetailPage(standalone: bool) -> Element {
    let site = use_site();
    let mut notice = use_signal(|| Option::<String>::None);

    let share = move |_| {
        spawn(async move {
            let url = platform::current_url().unwrap_or_default();
            let message = match platform::copy_text(&url).await {
                Ok(()) => site.message("messages-link-copied"),
                Err(err) => {
                    tracing::warn!(%err, "clipboard write failed");
                    format!("{} {url}", site.message("messages-copy-failed"))
                }
            };
            notice.set(Some(message));
        });
    };
    let download = move |_| notice.set(Some(site.message("messages-download-soon")));

    let doc = site.document.read();
    let back_main = doc.text("btn-back-main").to_string();

    rsx! {
        section { id: "event-detail", class: "page page-event",
            nav { class: "page-event__nav",
                if standalone {
                    {home_link(&back_main)}
                } else {
                    button {
                        id: "btn-back-events",
                        r#type: "button",
                        class: "button button--ghost",
                        onclick: move |_| site.send(SiteEvent::ScrollTo("events".into())),
                        {doc.text("btn-back-events").to_string()}
                    }
                    button {
                        id: "btn-back-main",
                        r#type: "button",
                        class: "button button--ghost",
                        onclick: move |_| site.send(SiteEvent::Navigate(Page::Main)),
                        "{back_main}"
                    }
                }
            }

            if let Some(event) = doc.detail() {
                header { class: "page-event__hero",
                    img { class: "page-event__image", src: "{event.image_or_default()}", alt: "{event.title}" }
                    div { class: "page-event__meta",
                        span { class: "page-event__date", "{event.date}" }
                        if let Some(category) = &event.category {
                            span { class: "page-event__category", "{category}" }
                        }
                    }
                    h1 { class: "page-event__title", "{event.title}" }
                }
                article { class: "page-event__body",
                    h2 { class: "page-event__content-title", "{event.content_title}" }
                    p { class: "page-event__content", "{event.full_content}" }
                    h3 { id: "event-highlights-title", {doc.text("event-highlights-title").to_string()} }
                    p { class: "page-event__highlights", "{event.highlights}" }
                }
                div { class: "page-event__actions",
                    button { id: "btn-share-event", r#type: "button", class: "button button--primary", onclick: share,
                        {doc.text("btn-share-event").to_string()}
                    }
                    button { id: "btn-download-details", r#type: "button", class: "button button--accent", onclick: download,
                        {doc.text("btn-download-details").to_string()}
                    }
                }
                if let Some(message) = notice() {
                    p { class: "page-event__notice", role: "status", "{message}" }
                }
            } else {
                p { class: "page-event__missing", {doc.text("loading-text").to_string()} }
            }
        }
    }
}
