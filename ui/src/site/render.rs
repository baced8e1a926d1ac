//! Render synchronizer.
//!
//! A [`Document`] models the content-bearing elements a page actually has.
//! [`sync`] reconciles it with the active tree and view state; components then
//! render straight from the document. Running `sync` twice with the same
//! inputs leaves the document unchanged.

use std::collections::BTreeMap;

use crate::content::{ContentTree, EventRecord, FaqItem, GalleryTranslations, ResourceItem};
use crate::i18n::Language;

use super::engine::{Page, ViewState};
use super::timeline::{anchors, slides, TimelineSlide};

/// The events grid always shows exactly this many cards.
pub const EVENT_CARD_COUNT: usize = 4;

/// Element id → content key.
pub const BINDINGS: &[(&str, &str)] = &[
    ("logo-text", "nav-logo-text"),
    ("nav-home", "nav-home"),
    ("nav-about", "nav-about"),
    ("nav-vision", "nav-vision"),
    ("nav-timeline", "nav-timeline"),
    ("nav-events", "nav-events"),
    ("nav-updates", "nav-updates"),
    ("nav-gallery", "nav-gallery"),
    ("nav-resources", "nav-resources"),
    ("nav-contact", "nav-contact"),
    ("nav-faq", "nav-faq"),
    ("hero-title", "hero-title"),
    ("hero-subtitle", "hero-subtitle"),
    ("hero-description", "hero-description"),
    ("btn-learn-more", "hero-learn-more"),
    ("btn-join-us", "hero-join-us"),
    ("about-title", "about-title"),
    ("about-description-1", "about-description-1"),
    ("about-description-2", "about-description-2"),
    ("about-description-3", "about-description-3"),
    ("mission-title", "about-mission-title"),
    ("mission-description", "about-mission-description"),
    ("values-title", "about-values-title"),
    ("values-description", "about-values-description"),
    ("struggle-title", "about-struggle-title"),
    ("struggle-description", "about-struggle-description"),
    ("vision-title", "vision-title"),
    ("vision-description", "vision-description"),
    ("leader-inspiration", "vision-leader-inspiration"),
    ("leader-founder", "vision-leader-founder"),
    ("leader-president", "vision-leader-president"),
    ("leader-name-inspiration", "vision-leader-name-inspiration"),
    ("leader-name-founder", "vision-leader-name-founder"),
    ("leader-name-president", "vision-leader-name-president"),
    ("timeline-header", "timeline-header-text"),
    ("events-title", "events-title"),
    ("events-description", "events-description"),
    ("updates-title", "updates-title"),
    ("updates-description", "updates-description"),
    ("contact-title", "contact-title"),
    ("contact-description", "contact-description"),
    ("contact-info-title", "contact-info-title"),
    ("contact-form-title", "contact-form-title"),
    ("form-name-label", "contact-name-label"),
    ("form-email-label", "contact-email-label"),
    ("form-subject-label", "contact-subject-label"),
    ("form-message-label", "contact-message-label"),
    ("btn-send-message", "contact-send-message"),
    ("faq-title", "faq-title"),
    ("faq-subtitle", "faq-subtitle"),
    ("resources-title", "resources-title"),
    ("resources-description", "resources-description"),
    ("btn-read-more", "buttons-read-more"),
    ("btn-back-events", "buttons-back-to-events"),
    ("btn-back-main", "buttons-back-to-main"),
    ("btn-share-event", "buttons-share-event"),
    ("btn-download-details", "buttons-download-details"),
    ("event-highlights-title", "event-detail-highlights-title"),
    ("loading-text", "loading-text"),
];

/// Elements present on the standalone event page.
const EVENT_PAGE_ELEMENTS: &[&str] = &[
    "logo-text",
    "btn-back-main",
    "btn-share-event",
    "btn-download-details",
    "event-highlights-title",
    "loading-text",
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    texts: BTreeMap<&'static str, String>,
    events: Option<Vec<EventRecord>>,
    faq: Option<Vec<FaqItem>>,
    resources: Option<Vec<ResourceItem>>,
    timeline: Option<Vec<TimelineSlide>>,
    detail: Option<Option<EventRecord>>,
    gallery: Option<GalleryTranslations>,
    language: Option<Language>,
}

impl Document {
    fn with_texts<'a>(elements: impl IntoIterator<Item = &'a str>, initial: &ContentTree) -> Self {
        let texts = elements
            .into_iter()
            .filter_map(|element| {
                let (id, key) = BINDINGS.iter().find(|(id, _)| *id == element)?;
                Some((*id, initial.text(key)))
            })
            .collect();
        Self {
            texts,
            ..Self::default()
        }
    }

    /// Every binding and list of the single-page site, seeded from `initial`.
    pub fn main_site(initial: &ContentTree) -> Self {
        let mut doc = Self::with_texts(BINDINGS.iter().map(|(id, _)| *id), initial);
        doc.events = Some(Vec::new());
        doc.faq = Some(Vec::new());
        doc.resources = Some(Vec::new());
        doc.timeline = Some(Vec::new());
        doc.detail = Some(None);
        doc.gallery = Some(GalleryTranslations::default());
        sync(&mut doc, initial, &ViewState::default(), initial);
        doc
    }

    /// The standalone event page: detail elements only.
    pub fn event_page(initial: &ContentTree) -> Self {
        let mut doc = Self::with_texts(EVENT_PAGE_ELEMENTS.iter().copied(), initial);
        doc.detail = Some(None);
        doc
    }

    pub fn has(&self, element: &str) -> bool {
        self.texts.contains_key(element)
    }

    /// Current text of `element`; empty when the page lacks it.
    pub fn text(&self, element: &str) -> &str {
        self.texts.get(element).map(String::as_str).unwrap_or_default()
    }

    pub fn event_cards(&self) -> &[EventRecord] {
        self.events.as_deref().unwrap_or_default()
    }

    pub fn faq_items(&self) -> &[FaqItem] {
        self.faq.as_deref().unwrap_or_default()
    }

    pub fn resources(&self) -> &[ResourceItem] {
        self.resources.as_deref().unwrap_or_default()
    }

    pub fn timeline_slides(&self) -> &[TimelineSlide] {
        self.timeline.as_deref().unwrap_or_default()
    }

    pub fn detail(&self) -> Option<&EventRecord> {
        self.detail.as_ref().and_then(Option::as_ref)
    }

    pub fn gallery(&self) -> Option<&GalleryTranslations> {
        self.gallery.as_ref()
    }

    /// Language of the tree last synced in.
    pub fn language(&self) -> Option<Language> {
        self.language
    }
}

/// Cards for the events grid: the active tree's records, completed and padded
/// from the default tree, truncated to [`EVENT_CARD_COUNT`].
pub fn event_cards(tree: &ContentTree, default: &ContentTree) -> Vec<EventRecord> {
    let mut cards: Vec<EventRecord> = tree
        .events()
        .into_iter()
        .take(EVENT_CARD_COUNT)
        .map(|record| match default.event(&record.id) {
            Some(fallback) => record.or_fill(&fallback),
            None => record,
        })
        .collect();

    for fallback in default.events() {
        if cards.len() >= EVENT_CARD_COUNT {
            break;
        }
        if cards.iter().all(|card| card.id != fallback.id) {
            cards.push(fallback);
        }
    }
    cards
}

/// Record for the detail view: the active language's, completed from the
/// default language, or the default language's outright.
pub fn detail_record(id: &str, tree: &ContentTree, default: &ContentTree) -> Option<EventRecord> {
    match (tree.event(id), default.event(id)) {
        (Some(record), Some(fallback)) => Some(record.or_fill(&fallback)),
        (Some(record), None) => Some(record),
        (None, fallback) => fallback,
    }
}

/// Reconcile `doc` with `tree` and `view`. Absent elements are skipped and
/// missing values leave the current text in place.
pub fn sync(doc: &mut Document, tree: &ContentTree, view: &ViewState, default: &ContentTree) {
    for (element, key) in BINDINGS {
        let Some(slot) = doc.texts.get_mut(element) else {
            continue;
        };
        if let Some(value) = tree.get(key) {
            if slot != value {
                *slot = value.to_string();
            }
        }
    }

    if doc.events.is_some() {
        doc.events = Some(event_cards(tree, default));
    }

    if doc.faq.is_some() {
        let items = tree.faq();
        if !items.is_empty() {
            doc.faq = Some(items);
        } else if doc.faq_items().is_empty() {
            doc.faq = Some(default.faq());
        }
    }

    if doc.resources.is_some() {
        let items = tree.resources();
        if !items.is_empty() {
            doc.resources = Some(items);
        } else if doc.resources().is_empty() {
            doc.resources = Some(default.resources());
        }
    }

    if doc.timeline.is_some() {
        doc.timeline = Some(slides(&anchors(), tree, default));
    }

    if let (Page::EventDetail(id), Some(slot)) = (&view.page, doc.detail.as_mut()) {
        match detail_record(id, tree, default) {
            Some(record) => *slot = Some(record),
            None => tracing::warn!(event = %id, "event not found in any language; keeping detail as is"),
        }
    }

    if doc.gallery.is_some() {
        doc.gallery = Some(tree.gallery());
    }

    doc.language = Some(tree.language());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::stub::stub_tree;

    fn english() -> ContentTree {
        ContentTree::english()
    }

    #[test]
    fn every_binding_targets_a_canonical_key() {
        let keys = crate::i18n::canonical_keys();
        for (element, key) in BINDINGS {
            assert!(keys.contains(*key), "{element} → {key}");
        }
    }

    #[test]
    fn main_site_starts_with_default_text() {
        let doc = Document::main_site(&english());
        assert_eq!(doc.text("logo-text"), "BAHUJAN SAMAJ PARTY");
        assert_eq!(doc.event_cards().len(), EVENT_CARD_COUNT);
        assert_eq!(doc.faq_items().len(), 6);
        assert_eq!(doc.timeline_slides().len(), 16);
        assert_eq!(doc.gallery().map(|g| g.title.as_str()), Some("Photo Gallery"));
    }

    #[test]
    fn stub_tree_relabels_only_what_it_has() {
        let default = english();
        let mut doc = Document::main_site(&default);
        let hindi = stub_tree(Language::Hindi);
        sync(&mut doc, &hindi, &ViewState::default(), &default);
        assert_eq!(doc.text("logo-text"), "बहुजन समाज पार्टी");
        assert_eq!(doc.text("about-title"), "About BSP");
        assert_eq!(doc.faq_items()[0].question, "What is the main ideology of BSP?");
        assert_eq!(doc.language(), Some(Language::Hindi));
    }

    #[test]
    fn absent_elements_are_skipped() {
        let default = english();
        let mut doc = Document::event_page(&default);
        sync(&mut doc, &default, &ViewState::default(), &default);
        assert!(!doc.has("hero-title"));
        assert_eq!(doc.text("hero-title"), "");
        assert!(doc.event_cards().is_empty());
        assert!(doc.gallery().is_none());
        assert_eq!(doc.text("btn-back-main"), "Back to Main Site");
    }

    #[test]
    fn sync_is_idempotent() {
        let default = english();
        let mut doc = Document::main_site(&default);
        let view = ViewState {
            page: Page::EventDetail("event2".into()),
            ..ViewState::default()
        };
        sync(&mut doc, &default, &view, &default);
        let once = doc.clone();
        sync(&mut doc, &default, &view, &default);
        assert_eq!(doc, once);
        assert_eq!(doc.detail().map(|e| e.id.as_str()), Some("event2"));
    }

    #[test]
    fn unknown_event_keeps_previous_detail() {
        let default = english();
        let mut doc = Document::main_site(&default);
        let mut view = ViewState {
            page: Page::EventDetail("event3".into()),
            ..ViewState::default()
        };
        sync(&mut doc, &default, &view, &default);
        view.page = Page::EventDetail("event99".into());
        sync(&mut doc, &default, &view, &default);
        assert_eq!(doc.detail().map(|e| e.id.as_str()), Some("event3"));
    }
}
