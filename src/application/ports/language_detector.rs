use async_trait::async_trait;

use crate::domain::LanguageTag;

/// Identifies the dominant natural language of a non-empty text.
#[async_trait]
pub trait LanguageDetector: Send + Sync {
    async fn detect(&self, text: &str) -> Result<LanguageTag, LanguageDetectorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LanguageDetectorError {
    #[error("no reliable language signal in input")]
    Undetectable,
    #[error("detection failed: {0}")]
    DetectionFailed(String),
}
