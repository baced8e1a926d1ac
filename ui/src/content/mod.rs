//! Localized site content: parsing modules into lookup tables, fetching them,
//! and resolving a language to a usable tree even when its module is gone.

mod error;
pub mod fetch;
pub mod store;
pub mod stub;
pub mod tree;

pub use error::LoadError;
pub use fetch::{BundledFetcher, ModuleFetcher, ModuleLocation};
pub use store::{ContentStore, LoadOutcome, LoadedContent};
pub use tree::{default_tree, ContentTree, EventRecord, FaqItem, GalleryTranslations, ResourceItem, TimelineText};
