use std::sync::Arc;

use renskrift::application::services::CleaningService;
use renskrift::domain::LanguageTag;
use renskrift::infrastructure::language::{FailingLanguageDetector, MockLanguageDetector};

#[tokio::test]
async fn given_messy_text_when_cleaning_then_returns_normalized_document() {
    let service = CleaningService::new(Arc::new(MockLanguageDetector::new("en")));

    let document = service.clean("Hello world.\r\n\r\n\r\nBonjour.   \n").await;

    assert_eq!(document.text, "Hello world.\n\nBonjour.");
    assert_eq!(document.sections, vec!["Hello world.", "Bonjour."]);
    assert_eq!(document.language, LanguageTag::new("en"));
}

#[tokio::test]
async fn given_empty_text_when_cleaning_then_skips_detection() {
    // The mock would report "en" if consulted; "unknown" proves the
    // empty-input short circuit.
    let service = CleaningService::new(Arc::new(MockLanguageDetector::new("en")));

    let document = service.clean("").await;

    assert_eq!(document.text, "");
    assert!(document.sections.is_empty());
    assert!(document.language.is_unknown());
}

#[tokio::test]
async fn given_failing_detector_when_cleaning_then_language_is_unknown() {
    let service = CleaningService::new(Arc::new(FailingLanguageDetector));

    let document = service.clean("Perfectly ordinary text.").await;

    assert_eq!(document.text, "Perfectly ordinary text.");
    assert!(document.language.is_unknown());
}

#[tokio::test]
async fn given_whitespace_only_sections_when_cleaning_then_drops_them() {
    let service = CleaningService::new(Arc::new(MockLanguageDetector::new("en")));

    let document = service.clean("first\n\n \t \n\nsecond").await;

    assert_eq!(document.sections, vec!["first", "second"]);
}
