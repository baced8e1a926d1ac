//! Languages offered by the site and the Fluent modules that carry their content.
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n/
//!   en/bsp-site.ftl   (canonical, also parsed at startup)
//!   hi/bsp-site.ftl
//!   ta/bsp-site.ftl
//! ```
//!
//! English is the canonical module: its key set is the schema every other
//! module is checked against. Other modules are embedded too, loaded on
//! demand, and may be partial; absent keys simply leave the previous text on
//! screen.
//!
//! To add a new language:
//! 1. Add a variant to [`Language`] with its persisted id, tag and native label.
//! 2. Copy `en/bsp-site.ftl` to `i18n/<tag>/bsp-site.ftl` and translate values.
//! 3. Run the crate tests; unknown keys fail the locale check.
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use unic_langid::LanguageIdentifier;

/// Module filename, identical across locales.
pub const MODULE_FILE: &str = "bsp-site.ftl";

/// Canonical English module.
pub const ENGLISH_MODULE: &str = include_str!("../i18n/en/bsp-site.ftl");

/// Locale folders compiled into every build, the web bundle included.
#[derive(Embed)]
#[folder = "i18n"]
pub struct Localizations;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Hindi,
    Tamil,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown language id `{0}`")]
pub struct LanguageParseError(pub String);

impl Language {
    pub const ALL: [Language; 3] = [Language::English, Language::Hindi, Language::Tamil];

    /// Stable id used in storage and history entries.
    pub fn id(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Hindi => "hindi",
            Language::Tamil => "tamil",
        }
    }

    /// BCP-47 tag; also the locale folder name.
    pub fn tag(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Tamil => "ta",
        }
    }

    pub fn langid(self) -> LanguageIdentifier {
        match self.tag().parse() {
            Ok(id) => id,
            Err(_) => LanguageIdentifier::default(),
        }
    }

    /// Label shown on the language button, in the language itself.
    pub fn native_label(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "हिंदी",
            Language::Tamil => "தமிழ்",
        }
    }

    pub fn is_default(self) -> bool {
        self == Language::default()
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        let wanted: LanguageIdentifier = tag.parse().ok()?;
        Self::ALL
            .into_iter()
            .find(|lang| lang.langid().language == wanted.language)
    }
}

impl FromStr for Language {
    type Err = LanguageParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|lang| lang.id() == needle)
            .ok_or_else(|| LanguageParseError(s.to_string()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Message ids defined by a Fluent source, in file order. Junk is skipped.
pub fn message_ids(source: &str) -> Vec<String> {
    let resource = match fluent_syntax::parser::parse(source) {
        Ok(resource) => resource,
        Err((resource, _errors)) => resource,
    };
    resource
        .body
        .iter()
        .filter_map(|entry| match entry {
            fluent_syntax::ast::Entry::Message(message) => Some(message.id.name.to_string()),
            _ => None,
        })
        .collect()
}

static CANONICAL_KEYS: Lazy<BTreeSet<String>> =
    Lazy::new(|| message_ids(ENGLISH_MODULE).into_iter().collect());

/// Key set of the canonical module.
pub fn canonical_keys() -> &'static BTreeSet<String> {
    &CANONICAL_KEYS
}

/// Canonical keys a module does not define.
pub fn missing_keys<'a>(defined: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let defined: BTreeSet<&str> = defined.into_iter().collect();
    CANONICAL_KEYS
        .iter()
        .filter(|key| !defined.contains(key.as_str()))
        .cloned()
        .collect()
}

/// Keys a module defines that the canonical module does not know about.
pub fn unknown_keys<'a>(defined: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    defined
        .into_iter()
        .filter(|key| !CANONICAL_KEYS.contains(*key))
        .map(str::to_string)
        .collect()
}

/// Locale folders compiled into this build.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .filter(|dir| !dir.ends_with(".ftl"))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_and_unknown_ids_fail() {
        for lang in Language::ALL {
            assert_eq!(lang.id().parse::<Language>(), Ok(lang));
        }
        assert_eq!(
            "marathi".parse::<Language>(),
            Err(LanguageParseError("marathi".into()))
        );
    }

    #[test]
    fn default_language_is_english() {
        assert_eq!(Language::default(), Language::English);
        assert!(Language::English.is_default());
        assert!(!Language::Hindi.is_default());
    }

    #[test]
    fn tags_are_valid_bcp47() {
        assert_eq!(Language::from_tag("hi-IN"), Some(Language::Hindi));
        assert_eq!(Language::from_tag("ta"), Some(Language::Tamil));
        assert_eq!(Language::from_tag("fr"), None);
    }

    #[test]
    fn serde_uses_persisted_ids() {
        let json = serde_json::to_string(&Language::Tamil).expect("serialize");
        assert_eq!(json, "\"tamil\"");
    }

    #[test]
    fn canonical_module_defines_core_keys() {
        let keys = canonical_keys();
        assert!(keys.contains("nav-logo-text"));
        assert!(keys.contains("events-order"));
        assert!(keys.contains("faq-item-6-answer"));
    }

    #[test]
    fn missing_and_unknown_keys_are_reported() {
        let defined = ["nav-home", "nav-typo"];
        assert!(missing_keys(defined).contains(&"nav-about".to_string()));
        assert_eq!(unknown_keys(defined), vec!["nav-typo".to_string()]);
    }

    #[test]
    fn shipped_locales_are_embedded() {
        let langs = available_languages();
        for lang in Language::ALL {
            assert!(langs.iter().any(|l| l == lang.tag()), "{lang} not embedded");
        }
    }
}
