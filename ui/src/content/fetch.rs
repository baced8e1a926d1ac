//! Where content modules come from.
//!
//! Every module has two candidate locations. The store tries the primary one
//! first and the alternate one when that fails.

use crate::i18n::{Language, MODULE_FILE};

use super::LoadError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleLocation {
    Primary,
    Alternate,
}

impl ModuleLocation {
    pub const ORDER: [ModuleLocation; 2] = [ModuleLocation::Primary, ModuleLocation::Alternate];
}

/// Source of raw Fluent text for a language.
#[allow(async_fn_in_trait)]
pub trait ModuleFetcher {
    /// Human-readable address of the module, used in logs and errors.
    fn locate(&self, language: Language, location: ModuleLocation) -> String;

    async fn fetch(&self, language: Language, location: ModuleLocation)
        -> Result<String, LoadError>;
}

/// Fetches modules over HTTP from the site origin.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    origin: String,
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(origin: impl Into<String>) -> Self {
        let origin: String = origin.into();
        Self {
            origin: origin.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }
}

impl ModuleFetcher for HttpFetcher {
    fn locate(&self, language: Language, location: ModuleLocation) -> String {
        let tag = language.tag();
        match location {
            ModuleLocation::Primary => format!("{}/i18n/{tag}/{MODULE_FILE}", self.origin),
            ModuleLocation::Alternate => {
                format!("{}/assets/i18n/{tag}/{MODULE_FILE}", self.origin)
            }
        }
    }

    async fn fetch(
        &self,
        language: Language,
        location: ModuleLocation,
    ) -> Result<String, LoadError> {
        let url = self.locate(language, location);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| LoadError::Fetch {
                location: url.clone(),
                message: err.to_string(),
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(LoadError::NotFound { location: url });
        }
        if !status.is_success() {
            return Err(LoadError::Status {
                location: url,
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|err| LoadError::Fetch {
            location: url,
            message: err.to_string(),
        })
    }
}

pub use embedded::EmbeddedFetcher;

mod embedded {
    use crate::i18n::{Language, Localizations, MODULE_FILE};

    use super::{LoadError, ModuleFetcher, ModuleLocation};

    /// Reads the locale folders compiled into the crate.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct EmbeddedFetcher;

    impl ModuleFetcher for EmbeddedFetcher {
        fn locate(&self, language: Language, location: ModuleLocation) -> String {
            let tag = language.tag();
            match location {
                ModuleLocation::Primary => format!("{tag}/{MODULE_FILE}"),
                ModuleLocation::Alternate => format!("{tag}.ftl"),
            }
        }

        async fn fetch(
            &self,
            language: Language,
            location: ModuleLocation,
        ) -> Result<String, LoadError> {
            let path = self.locate(language, location);
            let file = Localizations::get(&path)
                .ok_or_else(|| LoadError::NotFound { location: path.clone() })?;
            String::from_utf8(file.data.into_owned()).map_err(|err| LoadError::Parse {
                language,
                message: format!("{path} is not UTF-8: {err}"),
            })
        }
    }
}

/// What the site loads with: the module compiled into the bundle, then the
/// copy published at the site origin.
#[derive(Debug, Clone)]
pub struct BundledFetcher {
    http: HttpFetcher,
}

impl BundledFetcher {
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            http: HttpFetcher::new(origin),
        }
    }
}

impl ModuleFetcher for BundledFetcher {
    fn locate(&self, language: Language, location: ModuleLocation) -> String {
        match location {
            ModuleLocation::Primary => EmbeddedFetcher.locate(language, ModuleLocation::Primary),
            ModuleLocation::Alternate => self.http.locate(language, ModuleLocation::Primary),
        }
    }

    async fn fetch(
        &self,
        language: Language,
        location: ModuleLocation,
    ) -> Result<String, LoadError> {
        match location {
            ModuleLocation::Primary => {
                EmbeddedFetcher
                    .fetch(language, ModuleLocation::Primary)
                    .await
            }
            ModuleLocation::Alternate => self.http.fetch(language, ModuleLocation::Primary).await,
        }
    }
}
