//! Static sections of the main page. All copy comes from the synchronized document.

use dioxus::prelude::*;

use crate::content::default_tree;
use crate::site::contact::{ContactField, ContactForm, Submission};
use crate::site::{use_site, SiteEvent};

#[component]
pub fn HeroSection() -> Element {
    let site = use_site();
    let doc = site.document.read();

    rsx! {
        section { id: "hero", class: "hero",
            div { class: "hero__content",
                h1 { id: "hero-title", class: "hero__title", {doc.text("hero-title").to_string()} }
                p { id: "hero-subtitle", class: "hero__subtitle", {doc.text("hero-subtitle").to_string()} }
                p { id: "hero-description", class: "hero__description", {doc.text("hero-description").to_string()} }
                div { class: "hero__actions",
                    button {
                        id: "btn-learn-more",
                        r#type: "button",
                        class: "button button--primary",
                        onclick: move |_| site.send(SiteEvent::ScrollTo("about".into())),
                        {doc.text("btn-learn-more").to_string()}
                    }
                    button {
                        id: "btn-join-us",
                        r#type: "button",
                        class: "button button--accent",
                        onclick: move |_| site.send(SiteEvent::ScrollTo("contact".into())),
                        {doc.text("btn-join-us").to_string()}
                    }
                }
            }
        }
    }
}

#[component]
pub fn AboutSection() -> Element {
    let site = use_site();
    let doc = site.document.read();
    let cards = [
        ("mission-title", "mission-description", "about-card about-card--mission"),
        ("values-title", "values-description", "about-card about-card--values"),
        ("struggle-title", "struggle-description", "about-card about-card--struggle"),
    ];

    rsx! {
        section { id: "about", class: "section about",
            h2 { id: "about-title", class: "section__title", {doc.text("about-title").to_string()} }
            div { class: "about__text",
                for id in ["about-description-1", "about-description-2", "about-description-3"] {
                    p { key: "{id}", id: "{id}", {doc.text(id).to_string()} }
                }
            }
            div { class: "about__cards",
                for (title, description, class) in cards {
                    article { key: "{title}", class: "{class}",
                        h3 { id: "{title}", {doc.text(title).to_string()} }
                        p { id: "{description}", {doc.text(description).to_string()} }
                    }
                }
            }
        }
    }
}

#[component]
pub fn VisionSection() -> Element {
    let site = use_site();
    let doc = site.document.read();
    let leaders = [
        ("leader-inspiration", "leader-name-inspiration", "/assets/leaders/ambedkar.jpg"),
        ("leader-founder", "leader-name-founder", "/assets/leaders/kanshi-ram.jpg"),
        ("leader-president", "leader-name-president", "/assets/leaders/mayawati.jpg"),
    ];

    rsx! {
        section { id: "vision", class: "section vision",
            h2 { id: "vision-title", class: "section__title", {doc.text("vision-title").to_string()} }
            p { id: "vision-description", class: "section__lead", {doc.text("vision-description").to_string()} }
            div { class: "vision__leaders",
                for (role, name, image) in leaders {
                    figure { key: "{role}", class: "leader-card",
                        img { class: "leader-card__image", src: "{image}", alt: doc.text(name).to_string() }
                        figcaption {
                            strong { id: "{name}", class: "leader-card__name", {doc.text(name).to_string()} }
                            span { id: "{role}", class: "leader-card__role", {doc.text(role).to_string()} }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ContactSection() -> Element {
    let site = use_site();
    let mut form = use_signal(ContactForm::default);
    let mut invalid = use_signal(Vec::<ContactField>::new);
    let mut notice = use_signal(|| Option::<(bool, String)>::None);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let outcome = form.peek().submit(&site.tree.read(), default_tree());
        match outcome {
            Submission::Sent(message) => {
                invalid.set(Vec::new());
                form.set(ContactForm::default());
                notice.set(Some((true, message)));
            }
            Submission::Rejected {
                invalid: fields,
                notice: message,
            } => {
                invalid.set(fields);
                notice.set(Some((false, message)));
            }
        }
    };

    let field_class = move |field: ContactField| {
        if invalid.read().contains(&field) {
            "contact-form__input contact-form__input--invalid"
        } else {
            "contact-form__input"
        }
    };

    let doc = site.document.read();
    let current = form();

    rsx! {
        section { id: "contact", class: "section contact",
            h2 { id: "contact-title", class: "section__title", {doc.text("contact-title").to_string()} }
            p { id: "contact-description", class: "section__lead", {doc.text("contact-description").to_string()} }

            div { class: "contact__grid",
                div { class: "contact__info",
                    h3 { id: "contact-info-title", {doc.text("contact-info-title").to_string()} }
                    p { "12, Gurudwara Rakabganj Road, New Delhi - 110001" }
                    p { a { href: "https://www.bspindia.org", "www.bspindia.org" } }
                }

                form { class: "contact-form", novalidate: true, onsubmit: on_submit,
                    h3 { id: "contact-form-title", {doc.text("contact-form-title").to_string()} }

                    label { id: "form-name-label", r#for: "contact-name", {doc.text("form-name-label").to_string()} }
                    input {
                        id: "contact-name",
                        class: field_class(ContactField::Name),
                        value: "{current.name}",
                        oninput: move |e| form.with_mut(|f| f.set(ContactField::Name, e.value())),
                    }

                    label { id: "form-email-label", r#for: "contact-email", {doc.text("form-email-label").to_string()} }
                    input {
                        id: "contact-email",
                        r#type: "email",
                        class: field_class(ContactField::Email),
                        value: "{current.email}",
                        oninput: move |e| form.with_mut(|f| f.set(ContactField::Email, e.value())),
                    }

                    label { id: "form-subject-label", r#for: "contact-subject", {doc.text("form-subject-label").to_string()} }
                    input {
                        id: "contact-subject",
                        class: field_class(ContactField::Subject),
                        value: "{current.subject}",
                        oninput: move |e| form.with_mut(|f| f.set(ContactField::Subject, e.value())),
                    }

                    label { id: "form-message-label", r#for: "contact-message", {doc.text("form-message-label").to_string()} }
                    textarea {
                        id: "contact-message",
                        class: field_class(ContactField::Message),
                        rows: 5,
                        value: "{current.message}",
                        oninput: move |e| form.with_mut(|f| f.set(ContactField::Message, e.value())),
                    }

                    button { id: "btn-send-message", r#type: "submit", class: "button button--primary",
                        {doc.text("btn-send-message").to_string()}
                    }

                    if let Some((sent, message)) = notice() {
                        p {
                            class: if sent { "contact-form__notice contact-form__notice--ok" } else { "contact-form__notice contact-form__notice--error" },
                            role: "alert",
                            "{message}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn SiteFooter() -> Element {
    let site = use_site();
    let logo = site.document.read().text("logo-text").to_string();

    rsx! {
        footer { class: "footer",
            p { class: "footer__brand", "{logo}" }
            p { class: "footer__motto", "Jai Bhim" }
        }
    }
}
