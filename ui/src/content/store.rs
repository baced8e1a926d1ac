//! Resolving a language to a content tree.
//!
//! English is parsed once from the copy compiled into the crate. Other
//! languages go through a [`ModuleFetcher`] and degrade to the stub tree when
//! neither location answers.

use crate::i18n::Language;

use super::fetch::{ModuleFetcher, ModuleLocation};
use super::stub::stub_tree;
use super::tree::default_tree;
use super::{ContentTree, GalleryTranslations, LoadError};

/// How a tree was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Parsed from the embedded module or the primary location.
    Loaded,
    /// Primary location failed with the given error; the alternate worked.
    Fallback(LoadError),
    /// Both locations failed; the tree is the hard-coded stub.
    Stub(Vec<LoadError>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadedContent {
    pub tree: ContentTree,
    pub outcome: LoadOutcome,
}

impl LoadedContent {
    pub fn gallery(&self) -> GalleryTranslations {
        self.tree.gallery()
    }

    pub fn is_stub(&self) -> bool {
        matches!(self.outcome, LoadOutcome::Stub(_))
    }
}

/// Resolves languages to content trees.
///
/// The default language never touches the fetcher. Others try the primary
/// location, then the alternate one, and finally degrade to a stub tree.
#[derive(Debug, Clone)]
pub struct ContentStore<F> {
    fetcher: F,
    default_tree: ContentTree,
}

impl<F: ModuleFetcher> ContentStore<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            default_tree: default_tree().clone(),
        }
    }

    pub fn default_tree(&self) -> &ContentTree {
        &self.default_tree
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Tree for `language`, or the error from the last location tried.
    pub async fn load_language(&self, language: Language) -> Result<ContentTree, LoadError> {
        match self.resolve(language).await {
            Ok((tree, _)) => Ok(tree),
            Err(mut errors) => Err(errors.pop().unwrap_or(LoadError::NotFound {
                location: language.tag().to_string(),
            })),
        }
    }

    /// Tree for `language`; never fails, degrading to the stub tree.
    pub async fn load(&self, language: Language) -> LoadedContent {
        match self.resolve(language).await {
            Ok((tree, None)) => LoadedContent {
                tree,
                outcome: LoadOutcome::Loaded,
            },
            Ok((tree, Some(primary))) => LoadedContent {
                tree,
                outcome: LoadOutcome::Fallback(primary),
            },
            Err(errors) => {
                tracing::warn!(
                    language = language.id(),
                    ?errors,
                    "content module unavailable; using stub content"
                );
                LoadedContent {
                    tree: stub_tree(language),
                    outcome: LoadOutcome::Stub(errors),
                }
            }
        }
    }

    async fn resolve(
        &self,
        language: Language,
    ) -> Result<(ContentTree, Option<LoadError>), Vec<LoadError>> {
        if language.is_default() {
            return Ok((self.default_tree.clone(), None));
        }

        let mut errors = Vec::new();
        for location in ModuleLocation::ORDER {
            match self.load_from(language, location).await {
                Ok(tree) => {
                    tracing::info!(
                        language = language.id(),
                        ?location,
                        keys = tree.len(),
                        "content module loaded"
                    );
                    return Ok((tree, errors.into_iter().next()));
                }
                Err(err) => {
                    tracing::warn!(language = language.id(), ?location, %err, "content module load failed");
                    errors.push(err);
                }
            }
        }
        Err(errors)
    }

    async fn load_from(
        &self,
        language: Language,
        location: ModuleLocation,
    ) -> Result<ContentTree, LoadError> {
        let source = self.fetcher.fetch(language, location).await?;
        let tree = ContentTree::parse(language, &source)?;
        let missing = tree.missing_keys();
        if !missing.is_empty() {
            tracing::warn!(
                language = language.id(),
                missing = missing.len(),
                first = %missing[0],
                "content module is incomplete; untranslated text stays as is"
            );
        }
        Ok(tree)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use futures::executor::block_on;

    use super::*;

    /// Serves canned sources keyed by (tag, location) and records every request.
    #[derive(Default)]
    struct CannedFetcher {
        sources: HashMap<(&'static str, ModuleLocation), Result<String, LoadError>>,
        requests: RefCell<Vec<String>>,
    }

    impl CannedFetcher {
        fn serve(mut self, tag: &'static str, location: ModuleLocation, source: &str) -> Self {
            self.sources.insert((tag, location), Ok(source.to_string()));
            self
        }

        fn fail(mut self, tag: &'static str, location: ModuleLocation, status: u16) -> Self {
            self.sources.insert(
                (tag, location),
                Err(LoadError::Status {
                    location: format!("{tag}:{location:?}"),
                    status,
                }),
            );
            self
        }
    }

    impl ModuleFetcher for CannedFetcher {
        fn locate(&self, language: Language, location: ModuleLocation) -> String {
            format!("{}:{location:?}", language.tag())
        }

        async fn fetch(
            &self,
            language: Language,
            location: ModuleLocation,
        ) -> Result<String, LoadError> {
            let key = self.locate(language, location);
            self.requests.borrow_mut().push(key.clone());
            self.sources
                .get(&(language.tag(), location))
                .cloned()
                .unwrap_or(Err(LoadError::NotFound { location: key }))
        }
    }

    #[test]
    fn default_language_never_fetches() {
        let store = ContentStore::new(CannedFetcher::default());
        let loaded = block_on(store.load(Language::English));
        assert_eq!(loaded.outcome, LoadOutcome::Loaded);
        assert_eq!(loaded.tree.get("nav-logo-text"), Some("BAHUJAN SAMAJ PARTY"));
        assert!(store.fetcher().requests.borrow().is_empty());
    }

    #[test]
    fn primary_location_wins() {
        let fetcher =
            CannedFetcher::default().serve("hi", ModuleLocation::Primary, "nav-home = होम\n");
        let store = ContentStore::new(fetcher);
        let loaded = block_on(store.load(Language::Hindi));
        assert_eq!(loaded.outcome, LoadOutcome::Loaded);
        assert_eq!(loaded.tree.get("nav-home"), Some("होम"));
        assert_eq!(store.fetcher().requests.borrow().len(), 1);
    }

    #[test]
    fn alternate_location_is_tried_after_primary_fails() {
        let fetcher = CannedFetcher::default()
            .fail("ta", ModuleLocation::Primary, 500)
            .serve("ta", ModuleLocation::Alternate, "nav-home = முகப்பு\n");
        let store = ContentStore::new(fetcher);
        let loaded = block_on(store.load(Language::Tamil));
        assert!(matches!(
            loaded.outcome,
            LoadOutcome::Fallback(LoadError::Status { status: 500, .. })
        ));
        assert_eq!(loaded.tree.get("nav-home"), Some("முகப்பு"));
    }

    #[test]
    fn both_locations_failing_yields_the_stub() {
        let store = ContentStore::new(CannedFetcher::default());
        let loaded = block_on(store.load(Language::Tamil));
        assert!(loaded.is_stub());
        assert_eq!(loaded.tree.get("nav-logo-text"), Some("பகுஜன் சமாஜ் கட்சி"));
        assert_eq!(loaded.gallery().title, "Photo Gallery");
        assert!(matches!(
            block_on(store.load_language(Language::Tamil)),
            Err(LoadError::NotFound { .. })
        ));
    }

    #[test]
    fn unparseable_primary_falls_through() {
        let fetcher = CannedFetcher::default()
            .serve("hi", ModuleLocation::Primary, "<html>404</html>")
            .serve("hi", ModuleLocation::Alternate, "nav-faq = सामान्य प्रश्न\n");
        let store = ContentStore::new(fetcher);
        let loaded = block_on(store.load(Language::Hindi));
        assert!(matches!(
            loaded.outcome,
            LoadOutcome::Fallback(LoadError::Parse { .. })
        ));
    }
}
