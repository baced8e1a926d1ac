use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedSender;
use futures_util::StreamExt;

use crate::config::SiteConfig;
use crate::content::fetch::BundledFetcher;
use crate::content::{default_tree, ContentStore, ContentTree, LoadOutcome};
use crate::core::storage::{self, PreferenceStore};
use crate::core::{platform, timing};
use crate::i18n::Language;

use super::engine::{AnimationToken, Effect, HistoryEntry, Page, ViewController, ViewState};
use super::render::{self, Document};
use super::timeline::{anchors, TimelineAnchor};

#[derive(Debug, Clone, PartialEq)]
pub enum SiteEvent {
    Navigate(Page),
    ScrollTo(String),
    Frame {
        token: AnimationToken,
        timestamp: f64,
    },
    PopState(Option<String>),
    /// Language picked by the visitor; shows the loading overlay.
    ChooseLanguage(Language),
    TimelineShown(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteMode {
    MainSite,
    /// Standalone `/event/:id` page; never touches history.
    EventPage(String),
}

/// Reactive state shared with every site component.
#[derive(Clone, Copy)]
pub struct SiteHandle {
    pub document: Signal<Document>,
    pub tree: Signal<ContentTree>,
    pub view: Signal<ViewState>,
    pub loading: Signal<bool>,
    pub timeline_index: Signal<usize>,
    pub config: Signal<SiteConfig>,
    events: Coroutine<SiteEvent>,
}

impl SiteHandle {
    pub fn send(&self, event: SiteEvent) {
        self.events.send(event);
    }

    /// Message text in the active language, falling back to the default one.
    pub fn message(&self, key: &str) -> String {
        let tree = self.tree.read();
        let text = tree
            .get(key)
            .or_else(|| default_tree().get(key))
            .unwrap_or_default()
            .to_string();
        text
    }
}

pub fn use_site() -> SiteHandle {
    use_context::<SiteHandle>()
}

/// Create the site state and its event loop, and provide the handle to descendants.
pub fn use_site_runtime(mode: SiteMode) -> SiteHandle {
    let config = use_signal(SiteConfig::default);
    let document = use_signal({
        let mode = mode.clone();
        move || match mode {
            SiteMode::MainSite => Document::main_site(default_tree()),
            SiteMode::EventPage(_) => Document::event_page(default_tree()),
        }
    });
    let tree = use_signal(|| default_tree().clone());
    let view = use_signal(ViewState::default);
    let loading = use_signal(|| false);
    let timeline_index = use_signal(|| 0usize);

    let sender_slot: Rc<RefCell<Option<UnboundedSender<SiteEvent>>>> =
        use_hook(|| Rc::new(RefCell::new(None)));
    let slot_for_loop = sender_slot.clone();

    let events = use_coroutine(move |rx: UnboundedReceiver<SiteEvent>| {
        let runtime = Runtime {
            controller: ViewController::default(),
            store: ContentStore::new(BundledFetcher::new(config.peek().content_origin())),
            preferences: storage::default_store(),
            anchors: anchors(),
            mode: mode.clone(),
            sender_slot: slot_for_loop.clone(),
            document,
            tree,
            view,
            loading,
            timeline_index,
        };
        runtime.run(rx)
    });

    sender_slot.borrow_mut().replace(events.tx());

    let handle = SiteHandle {
        document,
        tree,
        view,
        loading,
        timeline_index,
        config,
        events,
    };
    use_context_provider(|| handle)
}

struct Runtime {
    controller: ViewController,
    store: ContentStore<BundledFetcher>,
    preferences: Box<dyn PreferenceStore>,
    anchors: Vec<TimelineAnchor>,
    mode: SiteMode,
    sender_slot: Rc<RefCell<Option<UnboundedSender<SiteEvent>>>>,
    document: Signal<Document>,
    tree: Signal<ContentTree>,
    view: Signal<ViewState>,
    loading: Signal<bool>,
    timeline_index: Signal<usize>,
}

impl Runtime {
    async fn run(mut self, mut rx: UnboundedReceiver<SiteEvent>) {
        // The saved language goes in before the first history entry is written.
        let preferred = storage::preferred_language(&*self.preferences);
        match self.mode.clone() {
            SiteMode::MainSite => {
                let fragment = platform::fragment();
                let (controller, effects) =
                    ViewController::start_with(preferred, fragment.as_deref());
                self.controller = controller;
                if let Some(sender) = self.sender() {
                    platform::on_popstate(move |state| {
                        let _ = sender.unbounded_send(SiteEvent::PopState(state));
                    });
                }
                self.apply(effects).await;
            }
            SiteMode::EventPage(id) => {
                let (controller, effects) = ViewController::start_with(preferred, None);
                self.controller = controller;
                self.apply(effects).await;
                let state = ViewState {
                    page: Page::EventDetail(id),
                    ..self.controller.state().clone()
                };
                let effects = self.controller.restore(state, &self.anchors);
                self.apply(effects).await;
            }
        }
        self.sync();

        while let Some(event) = rx.next().await {
            let is_frame = matches!(event, SiteEvent::Frame { .. });
            self.handle(event).await;
            if !is_frame {
                self.sync();
            }
        }
    }

    async fn handle(&mut self, event: SiteEvent) {
        match event {
            SiteEvent::Navigate(page) => {
                let current = platform::scroll_y();
                self.controller.record_scroll(current);
                let effects = self.controller.navigate_to(page, current);
                self.apply(effects).await;
            }
            SiteEvent::ScrollTo(section) => self.scroll_to(section).await,
            SiteEvent::Frame { token, timestamp } => {
                let effects = self.controller.animation_frame(token, timestamp);
                self.apply(effects).await;
            }
            SiteEvent::PopState(raw) => match raw.as_deref().and_then(ViewState::from_json) {
                Some(state) => {
                    let effects = self.controller.restore(state, &self.anchors);
                    self.apply(effects).await;
                }
                None => tracing::debug!("popstate without a site state; ignoring"),
            },
            SiteEvent::ChooseLanguage(language) => {
                let effects = self.controller.set_language(language);
                if effects.is_empty() {
                    return;
                }
                self.loading.set(true);
                self.apply(effects).await;
                storage::remember_language(&*self.preferences, language);
                self.loading.set(false);
            }
            SiteEvent::TimelineShown(index) => {
                if let Some(anchor) = self.anchors.get(index) {
                    self.controller.set_timeline_year(anchor.year.to_string());
                    self.timeline_index.set(index);
                }
            }
        }
    }

    async fn scroll_to(&mut self, section: String) {
        if !self.controller.state().page.is_main() {
            // Lay the main page out before measuring the section.
            self.view.with_mut(|view| view.page = Page::Main);
            timing::next_frame().await;
        }
        let Some(offset) = platform::section_offset(&section) else {
            tracing::warn!(%section, "no such section on the page");
            return;
        };
        let effects = self
            .controller
            .scroll_to_section(&section, platform::scroll_y(), offset);
        self.apply(effects).await;
    }

    async fn apply(&mut self, effects: Vec<Effect>) {
        let records_history = self.mode == SiteMode::MainSite;
        for effect in effects {
            match effect {
                Effect::PushHistory(entry) if records_history => write_history(&entry, false),
                Effect::ReplaceHistory(entry) if records_history => write_history(&entry, true),
                Effect::PushHistory(_) | Effect::ReplaceHistory(_) => {}
                Effect::ScrollWindowTop => platform::scroll_to(0, false),
                Effect::RestoreScroll(offset) => {
                    self.sync();
                    timing::next_frame().await;
                    platform::scroll_to(offset, false);
                }
                Effect::SetScrollTop(position) => platform::scroll_to(position, false),
                Effect::SetFragment(fragment) => {
                    if records_history {
                        platform::set_fragment(&fragment);
                    }
                }
                Effect::RequestFrame(token) => self.request_frame(token),
                Effect::SwitchLanguage(language) => self.switch_language(language).await,
                Effect::ShowTimelineIndex(index) => self.timeline_index.set(index),
                Effect::DeferredScroll(section) => {
                    if let Some(sender) = self.sender() {
                        platform::spawn_future(async move {
                            timing::next_frame().await;
                            let _ = sender.unbounded_send(SiteEvent::ScrollTo(section));
                        });
                    }
                }
                Effect::Resync => self.sync(),
            }
        }
    }

    async fn switch_language(&mut self, language: Language) {
        let loaded = self.store.load(language).await;
        match &loaded.outcome {
            LoadOutcome::Loaded => tracing::info!(language = language.id(), "language applied"),
            LoadOutcome::Fallback(err) => {
                tracing::info!(language = language.id(), %err, "language applied from alternate location")
            }
            LoadOutcome::Stub(_) => {
                tracing::warn!(language = language.id(), "language applied from stub content")
            }
        }
        self.tree.set(loaded.tree);
        self.sync();
    }

    fn request_frame(&self, token: AnimationToken) {
        if let Some(sender) = self.sender() {
            platform::spawn_future(async move {
                let timestamp = timing::next_frame().await;
                let _ = sender.unbounded_send(SiteEvent::Frame { token, timestamp });
            });
        }
    }

    fn sender(&self) -> Option<UnboundedSender<SiteEvent>> {
        self.sender_slot.borrow().as_ref().cloned()
    }

    /// Reconcile the document with the current tree and state; signals only
    /// change when something visible did.
    fn sync(&mut self) {
        let state = self.controller.state().clone();
        let mut next = self.document.peek().clone();
        render::sync(&mut next, &self.tree.peek(), &state, self.store.default_tree());
        if *self.document.peek() != next {
            self.document.set(next);
        }
        if *self.view.peek() != state {
            self.view.set(state);
        }
    }
}

fn write_history(entry: &HistoryEntry, replace: bool) {
    match entry.state.to_json() {
        Ok(json) => platform::write_history(&json, entry.fragment.as_deref(), replace),
        Err(err) => tracing::warn!(%err, "could not serialise view state"),
    }
}
