//! Shipped content modules may be partial, but never invent keys, never
//! repeat one, and always relabel the navigation and hero.
//!
//! If you add a language:
//! 1. Create `ui/i18n/<tag>/bsp-site.ftl`
//! 2. Copy keys from `en/bsp-site.ftl` and translate what you can
//! 3. Register it in `MODULES` below

use std::collections::BTreeSet;

use ui::i18n::{canonical_keys, message_ids, missing_keys, unknown_keys};

const EN: &str = include_str!("../i18n/en/bsp-site.ftl");
const HI: &str = include_str!("../i18n/hi/bsp-site.ftl");
const TA: &str = include_str!("../i18n/ta/bsp-site.ftl");

const MODULES: &[(&str, &str)] = &[("hi", HI), ("ta", TA)];

fn assert_no_dup_keys(src: &str, tag: &str) {
    let mut seen = BTreeSet::new();
    let dups: Vec<String> = message_ids(src)
        .into_iter()
        .filter(|id| !seen.insert(id.clone()))
        .collect();
    assert!(dups.is_empty(), "{tag} defines keys twice: {dups:?}");
}

#[test]
fn english_module_is_the_canonical_set() {
    assert_no_dup_keys(EN, "en");
    let ids = message_ids(EN);
    assert!(!ids.is_empty(), "English module contains no keys");
    assert_eq!(ids.len(), canonical_keys().len());
    assert!(missing_keys(ids.iter().map(String::as_str)).is_empty());
}

#[test]
fn modules_only_use_canonical_keys() {
    let mut failures = Vec::new();
    for (tag, src) in MODULES {
        assert_no_dup_keys(src, tag);
        let ids = message_ids(src);
        let unknown = unknown_keys(ids.iter().map(String::as_str));
        if !unknown.is_empty() {
            failures.push(format!("{tag}: {}", unknown.join(", ")));
        }
    }
    assert!(
        failures.is_empty(),
        "modules carry keys the site never reads:\n{}",
        failures.join("\n")
    );
}

#[test]
fn modules_relabel_navigation_and_hero() {
    for (tag, src) in MODULES {
        let ids: BTreeSet<String> = message_ids(src).into_iter().collect();
        let required = canonical_keys()
            .iter()
            .filter(|key| key.starts_with("nav-") || key.starts_with("hero-"));
        for key in required {
            assert!(ids.contains(key), "{tag} is missing {key}");
        }
    }
}

#[test]
fn report_untranslated_keys() {
    for (tag, src) in MODULES {
        let ids = message_ids(src);
        let missing = missing_keys(ids.iter().map(String::as_str));
        // Gaps fall back to the text already on the page; report only.
        println!("{tag}: {} untranslated key(s)", missing.len());
        for key in missing {
            println!("  {key}");
        }
    }
}
