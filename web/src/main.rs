use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::views::{EventPage, Site};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/event/:id")]
    Event { id: String },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Home {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    register_nav(NavBuilder { home: nav_home });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

#[component]
fn Home() -> Element {
    rsx! { Site {} }
}

/// Direct links to a single event, e.g. shared from the detail page.
#[component]
fn Event(id: String) -> Element {
    rsx! { EventPage { id } }
}
