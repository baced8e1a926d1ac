//! Parsed content for one language.
//!
//! A module is flattened into a key → text table when it loads. Events, FAQ
//! items, resources, timeline text and gallery text are read back out of that
//! table through typed accessors, using the key conventions of the English
//! module.

use std::collections::BTreeMap;
use std::sync::Arc;

use fluent::{FluentBundle, FluentResource};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::LoadError;
use crate::i18n::{self, Language};

pub const DEFAULT_GALLERY_TITLE: &str = "Photo Gallery";
pub const DEFAULT_GALLERY_DESCRIPTION: &str =
    "Explore BSP's journey through powerful moments and historic achievements";

/// Hero image used when neither the active nor the default tree names one.
pub const DEFAULT_EVENT_IMAGE: &str = "https://images.unsplash.com/photo-1557804506-669a67965ba0?ixlib=rb-4.0.3&auto=format&fit=crop&w=1200&h=400&q=80";

/// Full localized content for one language as a flat key table.
///
/// Immutable once built; a language switch replaces the whole tree. Every key
/// is optional and lookups of absent or blank keys return `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentTree {
    language: Language,
    entries: Arc<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: String,
    pub category: Option<String>,
    pub image: Option<String>,
    pub content_title: String,
    pub full_content: String,
    pub highlights: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceItem {
    pub title: String,
    pub description: String,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimelineText {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryTranslations {
    pub title: String,
    pub description: String,
}

impl Default for GalleryTranslations {
    fn default() -> Self {
        Self {
            title: DEFAULT_GALLERY_TITLE.to_string(),
            description: DEFAULT_GALLERY_DESCRIPTION.to_string(),
        }
    }
}

impl ContentTree {
    /// Parse a Fluent module. Entries with syntax errors are dropped; a module
    /// without a single usable message is rejected.
    pub fn parse(language: Language, source: &str) -> Result<Self, LoadError> {
        let resource = match FluentResource::try_new(source.to_string()) {
            Ok(resource) => resource,
            Err((resource, errors)) => {
                tracing::warn!(
                    language = language.id(),
                    errors = errors.len(),
                    "content module has syntax errors; keeping valid entries"
                );
                resource
            }
        };

        let ids = i18n::message_ids(source);
        if ids.is_empty() {
            return Err(LoadError::Parse {
                language,
                message: "module defines no messages".into(),
            });
        }

        let mut bundle = FluentBundle::new(vec![language.langid()]);
        bundle.set_use_isolating(false);
        if let Err(errors) = bundle.add_resource(resource) {
            tracing::warn!(
                language = language.id(),
                ?errors,
                "duplicate messages in content module"
            );
        }

        let mut entries = BTreeMap::new();
        for id in ids {
            let Some(pattern) = bundle.get_message(&id).and_then(|m| m.value()) else {
                continue;
            };
            let mut errors = Vec::new();
            let value = bundle.format_pattern(pattern, None, &mut errors);
            if !errors.is_empty() {
                tracing::debug!(key = %id, ?errors, "formatting errors in message");
            }
            entries.insert(id, value.into_owned());
        }

        Ok(Self {
            language,
            entries: Arc::new(entries),
        })
    }

    pub fn from_pairs<K, V>(language: Language, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            language,
            entries: Arc::new(
                pairs
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// The canonical English tree, compiled into the binary.
    pub fn english() -> Self {
        match Self::parse(Language::English, i18n::ENGLISH_MODULE) {
            Ok(tree) => tree,
            // Guarded by `embedded_english_module_parses`.
            Err(err) => {
                tracing::error!(%err, "embedded English module is unusable");
                Self::from_pairs(Language::English, std::iter::empty::<(String, String)>())
            }
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Value for `key`, or `None` when absent or blank.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .get(key)
            .map(|v| v.as_str())
            .filter(|v| !v.trim().is_empty())
    }

    /// Value for `key`, empty when absent. For markup that renders a label unconditionally.
    pub fn text(&self, key: &str) -> String {
        self.get(key).unwrap_or_default().to_string()
    }

    /// Canonical keys this tree lacks.
    pub fn missing_keys(&self) -> Vec<String> {
        i18n::missing_keys(self.keys())
    }

    fn owned(&self, key: &str) -> Option<String> {
        self.get(key).map(str::to_string)
    }

    /// Event ids in display order.
    pub fn event_ids(&self) -> Vec<String> {
        self.get("events-order")
            .map(|order| order.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default()
    }

    pub fn event(&self, id: &str) -> Option<EventRecord> {
        let field = |name: &str| self.owned(&format!("events-{id}-{name}"));
        let title = field("title");
        let description = field("description");
        if title.is_none() && description.is_none() {
            return None;
        }
        Some(EventRecord {
            id: id.to_string(),
            title: title.unwrap_or_default(),
            description: description.unwrap_or_default(),
            date: field("date").unwrap_or_default(),
            category: field("category"),
            image: field("image"),
            content_title: field("content-title").unwrap_or_default(),
            full_content: field("full-content").unwrap_or_default(),
            highlights: field("highlights").unwrap_or_default(),
        })
    }

    pub fn events(&self) -> Vec<EventRecord> {
        self.event_ids()
            .iter()
            .filter_map(|id| self.event(id))
            .collect()
    }

    /// FAQ entries numbered from 1 up to the first missing question.
    pub fn faq(&self) -> Vec<FaqItem> {
        (1..)
            .map_while(|n| {
                let question = self.owned(&format!("faq-item-{n}-question"))?;
                Some(FaqItem {
                    question,
                    answer: self
                        .owned(&format!("faq-item-{n}-answer"))
                        .unwrap_or_default(),
                })
            })
            .collect()
    }

    pub fn resources(&self) -> Vec<ResourceItem> {
        (1..)
            .map_while(|n| {
                let title = self.owned(&format!("resources-item-{n}-title"))?;
                Some(ResourceItem {
                    title,
                    description: self
                        .owned(&format!("resources-item-{n}-description"))
                        .unwrap_or_default(),
                    link: self.owned(&format!("resources-item-{n}-link")),
                })
            })
            .collect()
    }

    pub fn timeline_text(&self, year: u16) -> Option<TimelineText> {
        let title = self.owned(&format!("timeline-{year}-title"));
        let description = self.owned(&format!("timeline-{year}-description"));
        if title.is_none() && description.is_none() {
            return None;
        }
        Some(TimelineText {
            title: title.unwrap_or_default(),
            description: description.unwrap_or_default(),
        })
    }

    pub fn gallery(&self) -> GalleryTranslations {
        let defaults = GalleryTranslations::default();
        GalleryTranslations {
            title: self.owned("gallery-title").unwrap_or(defaults.title),
            description: self
                .owned("gallery-description")
                .unwrap_or(defaults.description),
        }
    }
}

static DEFAULT_TREE: Lazy<ContentTree> = Lazy::new(ContentTree::english);

/// Shared default-language tree.
pub fn default_tree() -> &'static ContentTree {
    &DEFAULT_TREE
}

impl EventRecord {
    /// Fill blank fields from `fallback`, normally the same event in the default language.
    pub fn or_fill(mut self, fallback: &EventRecord) -> Self {
        fn fill(slot: &mut String, from: &str) {
            if slot.trim().is_empty() {
                *slot = from.to_string();
            }
        }
        fill(&mut self.title, &fallback.title);
        fill(&mut self.description, &fallback.description);
        fill(&mut self.date, &fallback.date);
        fill(&mut self.content_title, &fallback.content_title);
        fill(&mut self.full_content, &fallback.full_content);
        fill(&mut self.highlights, &fallback.highlights);
        if self.category.is_none() {
            self.category = fallback.category.clone();
        }
        if self.image.is_none() {
            self.image = fallback.image.clone();
        }
        self
    }

    pub fn image_or_default(&self) -> &str {
        self.image.as_deref().unwrap_or(DEFAULT_EVENT_IMAGE)
    }
}
