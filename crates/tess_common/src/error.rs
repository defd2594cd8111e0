//! Error types shared across the diagnostic core.

use thiserror::Error;

/// Errors from the external classifier adapter.
///
/// Both variants are absorbed by the diagnostic engine, which falls back
/// to the keyword resolver. They are never surfaced to diagnosis callers.
#[derive(Debug, Clone, Error)]
pub enum ClassifierError {
    /// Network failure, timeout, or non-2xx status from the service.
    #[error("classifier unavailable: {0}")]
    Unavailable(String),

    /// The service answered, but the body does not match the expected
    /// schema.
    #[error("classifier response malformed: {0}")]
    Malformed(String),
}

/// Caller errors from the decision-tree walker.
///
/// Unlike classifier errors these are surfaced: mis-navigation is a bug
/// in the caller, not something to paper over.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("unknown troubleshooting step '{0}'")]
    UnknownStep(String),

    #[error("option '{option}' is not valid for step '{step}'")]
    InvalidOption { step: String, option: String },
}
