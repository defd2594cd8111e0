//! Diagnostic resolution engine.
//!
//! Tries the external classifier first and falls back to the keyword
//! resolver on any failure, so diagnosis is a total function: callers
//! always get a usable result.

use crate::classifier::Classifier;
use crate::diagnostic::DiagnosticResult;
use crate::keyword;
use tracing::warn;

pub struct DiagnosticEngine {
    classifier: Classifier,
}

impl DiagnosticEngine {
    pub fn new(classifier: Classifier) -> Self {
        Self { classifier }
    }

    /// Diagnose a free-text description. Never fails.
    ///
    /// One classifier attempt, no retry. The final result comes entirely
    /// from one resolver or the other, never merged.
    pub async fn diagnose(&self, description: &str) -> DiagnosticResult {
        match self.classifier.classify(description).await {
            Ok(result) => result,
            Err(e) => {
                warn!("classifier failed, using keyword fallback: {}", e);
                keyword::resolve(description)
            }
        }
    }
}
