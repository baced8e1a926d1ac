//! The single-page site: view-state engine, render synchronizer, peripheral
//! widget state and the Dioxus runtime tying them together.

pub mod contact;
pub mod engine;
pub mod gallery;
pub mod render;
pub mod timeline;
mod view;

pub use engine::{Effect, Page, ViewController, ViewState};
pub use render::{sync, Document};
pub use view::{use_site, use_site_runtime, SiteEvent, SiteHandle, SiteMode};
