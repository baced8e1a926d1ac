//! Shared UI crate for the BSP site. Content loading, view state and every
//! page component live here; platform crates only supply the router.

pub mod config;
pub mod content;
pub mod core;
pub mod feed;
pub mod i18n;
pub mod site;
pub mod views;

pub mod components {
    // Localized site navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    mod events;
    mod faq;
    mod gallery;
    mod loading;
    mod resources;
    mod sections;
    mod timeline;
    mod updates;

    pub use events::{EventDetailPage, EventsSection};
    pub use faq::FaqPage;
    pub use gallery::GallerySection;
    pub use loading::LoadingOverlay;
    pub use resources::ResourcesPage;
    pub use sections::{AboutSection, ContactSection, HeroSection, SiteFooter, VisionSection};
    pub use timeline::TimelineSection;
    pub use updates::UpdatesSection;
}
