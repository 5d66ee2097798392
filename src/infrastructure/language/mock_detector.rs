use async_trait::async_trait;

use crate::application::ports::{LanguageDetector, LanguageDetectorError};
use crate::domain::LanguageTag;

/// Test double that always reports the same language code.
pub struct MockLanguageDetector {
    code: String,
}

impl MockLanguageDetector {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

#[async_trait]
impl LanguageDetector for MockLanguageDetector {
    async fn detect(&self, _text: &str) -> Result<LanguageTag, LanguageDetectorError> {
        Ok(LanguageTag::new(self.code.clone()))
    }
}

/// Test double that fails every detection attempt.
pub struct FailingLanguageDetector;

#[async_trait]
impl LanguageDetector for FailingLanguageDetector {
    async fn detect(&self, _text: &str) -> Result<LanguageTag, LanguageDetectorError> {
        Err(LanguageDetectorError::Undetectable)
    }
}
