use std::sync::Arc;

use crate::application::ports::LanguageDetector;
use crate::domain::{CleanedDocument, LanguageTag};
use crate::infrastructure::text_processing::{clean, split_sections};

/// Straight-line pipeline: normalize the raw text, split it into sections,
/// and tag it with the detected language.
pub struct CleaningService<D>
where
    D: LanguageDetector,
{
    detector: Arc<D>,
}

impl<D> CleaningService<D>
where
    D: LanguageDetector,
{
    pub fn new(detector: Arc<D>) -> Self {
        Self { detector }
    }

    /// Cleans `raw` and detects its language. Total over all inputs:
    /// detection failure is absorbed into the `"unknown"` tag, never surfaced.
    pub async fn clean(&self, raw: &str) -> CleanedDocument {
        let text = clean(raw);

        let language = if text.is_empty() {
            LanguageTag::unknown()
        } else {
            match self.detector.detect(&text).await {
                Ok(tag) => tag,
                Err(e) => {
                    tracing::debug!(error = %e, "Language detection failed, tagging as unknown");
                    LanguageTag::unknown()
                }
            }
        };

        let sections = split_sections(&text);

        CleanedDocument {
            text,
            sections,
            language,
        }
    }
}
