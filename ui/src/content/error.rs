use thiserror::Error;

use crate::i18n::Language;

/// Why a content module could not be turned into a tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("request for {location} failed: {message}")]
    Fetch { location: String, message: String },
    #[error("{location} answered HTTP {status}")]
    Status { location: String, status: u16 },
    #[error("no content module at {location}")]
    NotFound { location: String },
    #[error("content module for {language} is unusable: {message}")]
    Parse { language: Language, message: String },
}
