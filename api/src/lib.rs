//! Social feed proxy for the BSP site.
//!
//! The wire types in [`types`] are always available so the browser crate can
//! decode proxy responses without pulling in the server stack. Everything else
//! sits behind the default `server` feature.

pub mod types;

#[cfg(feature = "server")]
pub mod cache;
#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod error;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod upstream;

pub use types::{ErrorBody, FeedPage, Post};
