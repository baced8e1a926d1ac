use dioxus::prelude::*;

use crate::components::{
    AboutSection, AppNavbar, ContactSection, EventDetailPage, EventsSection, FaqPage,
    GallerySection, HeroSection, LoadingOverlay, ResourcesPage, SiteFooter, TimelineSection,
    UpdatesSection, VisionSection,
};
use crate::site::{use_site_runtime, Page, SiteMode};

/// The single-page site. Only the active page is mounted; the main page keeps
/// its scroll offset in the view state while another page is open.
#[component]
pub fn Site() -> Element {
    let site = use_site_runtime(SiteMode::MainSite);
    let page = site.view.read().page.clone();

    tracing::trace!(?page, "site render");

    rsx! {
        AppNavbar {}
        LoadingOverlay {}
        main { id: "main-content", class: "site",
            match page {
                Page::Main => rsx! {
                    HeroSection {}
                    AboutSection {}
                    VisionSection {}
                    TimelineSection {}
                    EventsSection {}
                    UpdatesSection {}
                    GallerySection {}
                    ContactSection {}
                },
                Page::Faq => rsx! { FaqPage {} },
                Page::Resources => rsx! { ResourcesPage {} },
                Page::EventDetail(_) => rsx! { EventDetailPage { standalone: false } },
            }
        }
        SiteFooter {}
    }
}
