use async_trait::async_trait;

use crate::application::ports::{LanguageDetector, LanguageDetectorError};
use crate::domain::LanguageTag;

/// In-process detector backed by whatlang. Returns ISO 639-3 codes
/// (e.g. "eng", "fra").
pub struct WhatlangDetector;

#[async_trait]
impl LanguageDetector for WhatlangDetector {
    async fn detect(&self, text: &str) -> Result<LanguageTag, LanguageDetectorError> {
        let info = whatlang::detect(text).ok_or(LanguageDetectorError::Undetectable)?;
        Ok(LanguageTag::new(info.lang().code()))
    }
}
