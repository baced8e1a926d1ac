use dioxus::prelude::*;

use crate::feed::{feed_view, FeedClient, FeedView};
use crate::site::use_site;

#[component]
pub fn UpdatesSection() -> Element {
    let site = use_site();

    // Fetched once per mount; a language switch only changes the empty text.
    let posts = use_resource(move || async move {
        let config = site.config.peek().clone();
        let client = FeedClient::new(config.feed_base.clone());
        client
            .recent_posts(&config.feed_handle, config.feed_posts)
            .await
    });

    let view = match &*posts.read_unchecked() {
        None => FeedView::Loading,
        Some(result) => {
            let max = site.config.peek().feed_posts as usize;
            feed_view(result.clone(), max, &site.message("messages-feed-empty"))
        }
    };

    let doc = site.document.read();

    rsx! {
        section { id: "updates", class: "section updates",
            h2 { id: "updates-title", class: "section__title", {doc.text("updates-title").to_string()} }
            p { id: "updates-description", class: "section__lead", {doc.text("updates-description").to_string()} }

            div { class: "updates__feed", aria_live: "polite",
                match view {
                    FeedView::Loading => rsx! {
                        p { class: "updates__status", {doc.text("loading-text").to_string()} }
                    },
                    FeedView::Posts(items) => rsx! {
                        for (index, post) in items.into_iter().enumerate() {
                            article { key: "{index}", class: "post-card",
                                p { class: "post-card__text", "{post.text}" }
                                if let Some(date) = post.date {
                                    time { class: "post-card__date", "{date}" }
                                }
                            }
                        }
                    },
                    FeedView::Empty(text) => rsx! {
                        p { class: "updates__status", "{text}" }
                    },
                    FeedView::Failed(text) => rsx! {
                        p { class: "updates__status updates__status--error", "{text}" }
                    },
                }
            }
        }
    }
}
