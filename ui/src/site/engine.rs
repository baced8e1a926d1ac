//! View-state machine for the single-page site.
//!
//! The controller owns the one [`ViewState`] and answers every transition with
//! the list of [`Effect`]s the runtime must apply, in order. It never touches
//! the browser itself, so every transition is testable off-line.

use serde::{Deserialize, Serialize};

use crate::i18n::Language;

use super::timeline::{TimelineAnchor, TIMELINE_YEARS};

/// Height of the fixed navbar; section scrolls stop this far above the section.
pub const NAVBAR_OFFSET: u32 = 80;
pub const SCROLL_DURATION_MS: f64 = 800.0;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "kebab-case")]
pub enum Page {
    #[default]
    Main,
    Faq,
    Resources,
    EventDetail(String),
}

impl Page {
    /// URL fragment mirroring the page; `None` for the main page.
    pub fn fragment(&self) -> Option<String> {
        match self {
            Page::Main => None,
            Page::Faq => Some("faq".into()),
            Page::Resources => Some("resources".into()),
            Page::EventDetail(id) => Some(format!("events/{id}Detail")),
        }
    }

    pub fn is_main(&self) -> bool {
        matches!(self, Page::Main)
    }
}

/// Everything needed to reproduce what the visitor sees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub page: Page,
    /// Offset of the main scroller; kept while another page is open so it can be restored.
    pub scroll_position: u32,
    pub timeline_year: String,
    pub language: Language,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            page: Page::Main,
            scroll_position: 0,
            timeline_year: TIMELINE_YEARS[0].to_string(),
            language: Language::default(),
        }
    }
}

impl ViewState {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse a history payload; foreign or stale payloads yield `None`.
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub state: ViewState,
    pub fragment: Option<String>,
}

/// Identity of one scroll animation. Frames carrying an older token are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimationToken(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollAnimation {
    pub token: AnimationToken,
    pub section: String,
    pub from: u32,
    pub to: u32,
    pub started_at: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    PushHistory(HistoryEntry),
    /// Overwrite the current history entry (initial load).
    ReplaceHistory(HistoryEntry),
    ScrollWindowTop,
    /// Restore the main scroller once it is laid out again.
    RestoreScroll(u32),
    SetScrollTop(u32),
    SetFragment(String),
    RequestFrame(AnimationToken),
    SwitchLanguage(Language),
    ShowTimelineIndex(usize),
    /// Scroll to a section after the first render has placed it.
    DeferredScroll(String),
    Resync,
}

/// What an initial URL fragment asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitialRoute {
    Page(Page),
    Section(String),
}

/// Parse `#faq`, `#resources`, `#events/<id>Detail`, legacy `#<id>Detail`,
/// `#main` or a bare section id.
pub fn parse_fragment(fragment: &str) -> Option<InitialRoute> {
    let fragment = fragment.trim().trim_start_matches('#');
    if fragment.is_empty() {
        return None;
    }
    match fragment {
        "main" => return Some(InitialRoute::Page(Page::Main)),
        "faq" => return Some(InitialRoute::Page(Page::Faq)),
        "resources" => return Some(InitialRoute::Page(Page::Resources)),
        _ => {}
    }

    let detail = fragment.strip_prefix("events/").unwrap_or(fragment);
    if let Some(id) = detail.strip_suffix("Detail") {
        if is_identifier(id) {
            return Some(InitialRoute::Page(Page::EventDetail(id.to_string())));
        }
    }

    is_identifier(fragment).then(|| InitialRoute::Section(fragment.to_string()))
}

fn is_identifier(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Cubic ease-in-out on `[0, 1]`.
pub fn ease_in_out_cubic(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    if p < 0.5 {
        4.0 * p * p * p
    } else {
        1.0 - (-2.0 * p + 2.0).powi(3) / 2.0
    }
}

#[derive(Debug, Clone)]
pub struct ViewController {
    state: ViewState,
    saved_main_scroll: u32,
    animation: Option<ScrollAnimation>,
    next_token: u64,
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

impl ViewController {
    pub fn new(language: Language) -> Self {
        Self {
            state: ViewState {
                language,
                ..ViewState::default()
            },
            saved_main_scroll: 0,
            animation: None,
            next_token: 0,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn animation(&self) -> Option<&ScrollAnimation> {
        self.animation.as_ref()
    }

    fn entry(&self, fragment: Option<String>) -> HistoryEntry {
        HistoryEntry {
            state: self.state.clone(),
            fragment,
        }
    }

    fn fresh_token(&mut self) -> AnimationToken {
        self.next_token += 1;
        AnimationToken(self.next_token)
    }

    /// Controller for a visitor arriving with `language` already chosen. The
    /// content switch comes first so the seeded history entry records it.
    pub fn start_with(language: Language, fragment: Option<&str>) -> (Self, Vec<Effect>) {
        let mut controller = Self::new(language);
        let mut effects = Vec::new();
        if !language.is_default() {
            effects.push(Effect::SwitchLanguage(language));
        }
        effects.extend(controller.start(fragment));
        (controller, effects)
    }

    /// Apply the initial URL fragment and seed the current history entry.
    pub fn start(&mut self, fragment: Option<&str>) -> Vec<Effect> {
        let route = fragment.and_then(parse_fragment);
        let mut effects = Vec::new();
        match route {
            Some(InitialRoute::Page(page)) => {
                self.state.page = page;
                if !self.state.page.is_main() {
                    effects.push(Effect::ScrollWindowTop);
                }
                effects.push(Effect::ReplaceHistory(self.entry(self.state.page.fragment())));
            }
            Some(InitialRoute::Section(section)) => {
                effects.push(Effect::ReplaceHistory(self.entry(None)));
                effects.push(Effect::DeferredScroll(section));
            }
            None => effects.push(Effect::ReplaceHistory(self.entry(None))),
        }
        effects
    }

    /// Leave the current page for `page`.
    ///
    /// Leaving the main page remembers `current_scroll`; entering it restores
    /// that exact offset. Always records a history entry.
    pub fn navigate_to(&mut self, page: Page, current_scroll: u32) -> Vec<Effect> {
        self.animation = None;
        if self.state.page.is_main() {
            self.saved_main_scroll = current_scroll;
        }
        self.state.page = page;
        self.state.scroll_position = self.saved_main_scroll;

        let mut effects = Vec::with_capacity(2);
        if self.state.page.is_main() {
            effects.push(Effect::RestoreScroll(self.saved_main_scroll));
        } else {
            effects.push(Effect::ScrollWindowTop);
        }
        effects.push(Effect::PushHistory(self.entry(self.state.page.fragment())));
        effects
    }

    /// Start a smooth scroll to `section`, whose top sits at `section_offset`.
    /// Closes any open page and supersedes any running animation.
    pub fn scroll_to_section(
        &mut self,
        section: &str,
        current_scroll: u32,
        section_offset: u32,
    ) -> Vec<Effect> {
        self.state.page = Page::Main;
        let token = self.fresh_token();
        self.animation = Some(ScrollAnimation {
            token,
            section: section.to_string(),
            from: current_scroll,
            to: section_offset.saturating_sub(NAVBAR_OFFSET),
            started_at: None,
        });
        vec![
            Effect::SetFragment(section.to_string()),
            Effect::RequestFrame(token),
        ]
    }

    /// Advance the running animation. Frames for a superseded token do nothing.
    pub fn animation_frame(&mut self, token: AnimationToken, now_ms: f64) -> Vec<Effect> {
        let Some(animation) = self.animation.as_mut() else {
            return Vec::new();
        };
        if animation.token != token {
            return Vec::new();
        }

        let started_at = *animation.started_at.get_or_insert(now_ms);
        let progress = ((now_ms - started_at) / SCROLL_DURATION_MS).clamp(0.0, 1.0);
        let from = animation.from as f64;
        let to = animation.to as f64;
        let position = (from + (to - from) * ease_in_out_cubic(progress))
            .round()
            .max(0.0) as u32;

        if progress < 1.0 {
            self.state.scroll_position = position;
            return vec![Effect::SetScrollTop(position), Effect::RequestFrame(token)];
        }

        let section = animation.section.clone();
        let target = animation.to;
        self.animation = None;
        self.state.scroll_position = target;
        self.saved_main_scroll = target;
        vec![
            Effect::SetScrollTop(target),
            Effect::PushHistory(self.entry(Some(section))),
            Effect::Resync,
        ]
    }

    /// Reproduce a recorded state (back/forward). Language first, then page,
    /// then timeline anchor, then scroll. Never records history.
    pub fn restore(&mut self, state: ViewState, timeline: &[TimelineAnchor]) -> Vec<Effect> {
        self.animation = None;
        let mut effects = Vec::new();

        if state.language != self.state.language {
            effects.push(Effect::SwitchLanguage(state.language));
        }

        if let Some(index) = timeline
            .iter()
            .position(|anchor| anchor.year.to_string() == state.timeline_year)
        {
            effects.push(Effect::ShowTimelineIndex(index));
        }

        self.saved_main_scroll = state.scroll_position;
        if state.page.is_main() {
            effects.push(Effect::RestoreScroll(state.scroll_position));
        } else {
            effects.push(Effect::ScrollWindowTop);
        }

        self.state = state;
        effects
    }

    /// Track the main scroller while no animation is driving it.
    pub fn record_scroll(&mut self, offset: u32) {
        if self.state.page.is_main() && self.animation.is_none() {
            self.state.scroll_position = offset;
            self.saved_main_scroll = offset;
        }
    }

    pub fn set_timeline_year(&mut self, year: impl Into<String>) {
        self.state.timeline_year = year.into();
    }

    pub fn set_language(&mut self, language: Language) -> Vec<Effect> {
        if language == self.state.language {
            return Vec::new();
        }
        self.state.language = language;
        vec![Effect::SwitchLanguage(language)]
    }
}
