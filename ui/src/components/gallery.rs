use dioxus::prelude::*;

use crate::core::{platform, timing};
use crate::site::gallery::{collect_images, default_slides, Gallery, GalleryKey, GALLERY_AUTOPLAY_MS};
use crate::site::use_site;

#[component]
pub fn GallerySection() -> Element {
    let site = use_site();
    let mut gallery = use_signal(|| Gallery::new(collect_images(&default_slides())));
    let mut focused = use_signal(|| Option::<usize>::None);

    use_future(move || async move {
        loop {
            timing::sleep_ms(GALLERY_AUTOPLAY_MS).await;
            let hidden = platform::page_hidden();
            // Peek first so a paused tick does not notify subscribers.
            if gallery.peek().autoplay_paused(hidden) {
                continue;
            }
            gallery.with_mut(|g| g.autoplay_tick(hidden));
        }
    });

    let onkeydown = move |evt: KeyboardEvent| {
        let Some(key) = GalleryKey::from_key(&evt.key().to_string()) else {
            return;
        };
        if gallery.with_mut(|g| g.handle_key(key, focused())) {
            evt.prevent_default();
        }
    };

    let (title, description) = {
        let doc = site.document.read();
        let translations = doc.gallery().cloned().unwrap_or_default();
        (translations.title, translations.description)
    };
    let state = gallery.read();
    let current = state.current();

    rsx! {
        section { id: "gallery", class: "section gallery", onkeydown,
            h2 { class: "section__title", "{title}" }
            p { class: "section__lead", "{description}" }

            div { class: "gallery__track",
                for (index, image) in state.images().iter().enumerate() {
                    figure {
                        key: "{index}",
                        class: if index == current { "gallery__slide gallery__slide--active" } else { "gallery__slide" },
                        tabindex: "0",
                        onfocus: move |_| focused.set(Some(index)),
                        onblur: move |_| focused.set(None),
                        onclick: move |_| gallery.with_mut(|g| g.open(index)),
                        img { src: "{image.src}", alt: "{image.title}", loading: "lazy" }
                        figcaption {
                            h3 { "{image.title}" }
                            p { "{image.description}" }
                        }
                    }
                }
            }

            div { class: "gallery__controls",
                button { r#type: "button", class: "button button--ghost", aria_label: "Previous", onclick: move |_| gallery.with_mut(|g| g.prev()), "‹" }
                for index in 0..state.images().len() {
                    button {
                        key: "dot-{index}",
                        r#type: "button",
                        class: if index == current { "gallery__dot gallery__dot--active" } else { "gallery__dot" },
                        aria_label: format!("Slide {}", index + 1),
                        onclick: move |_| gallery.with_mut(|g| g.show(index)),
                    }
                }
                button { r#type: "button", class: "button button--ghost", aria_label: "Next", onclick: move |_| gallery.with_mut(|g| g.next()), "›" }
            }

            if let Some(image) = state.lightbox() {
                div {
                    class: "lightbox",
                    role: "dialog",
                    aria_modal: "true",
                    onclick: move |_| gallery.with_mut(|g| g.close()),
                    button { r#type: "button", class: "lightbox__close", aria_label: "Close", onclick: move |_| gallery.with_mut(|g| g.close()), "×" }
                    button {
                        r#type: "button",
                        class: "lightbox__prev",
                        aria_label: "Previous",
                        onclick: move |evt: MouseEvent| {
                            evt.stop_propagation();
                            gallery.with_mut(|g| g.lightbox_prev());
                        },
                        "‹"
                    }
                    figure { class: "lightbox__figure", onclick: move |evt: MouseEvent| evt.stop_propagation(),
                        img { src: "{image.src}", alt: "{image.title}" }
                        figcaption {
                            h3 { "{image.title}" }
                            p { "{image.description}" }
                        }
                    }
                    button {
                        r#type: "button",
                        class: "lightbox__next",
                        aria_label: "Next",
                        onclick: move |evt: MouseEvent| {
                            evt.stop_propagation();
                            gallery.with_mut(|g| g.lightbox_next());
                        },
                        "›"
                    }
                }
            }
        }
    }
}
